//! # Program Scenarios
//!
//! Short programs run from the reset state.

use pretty_assertions::assert_eq;
use rvstep_core::core::arch::ArchState;

use crate::common::builder::instruction::InstructionBuilder as I;
use crate::common::harness::TestContext;

#[test]
fn test_addi_from_reset() {
    let mut ctx = TestContext::new();
    let _ = ctx.step(I::new().addi(5, 0, 10).build());

    let mut expected = ArchState::default();
    expected.pc = 4;
    expected.regs.write(5, 10);
    assert_eq!(ctx.cpu.state, expected);
}

#[test]
fn test_beq_equal_registers_offset_eight() {
    let mut ctx = TestContext::new();
    let _ = ctx.step(I::new().beq(8, 8).build());
    assert_eq!(ctx.pc(), 8);
}

#[test]
fn test_store_then_load_round_trip() {
    let mut ctx = TestContext::new();
    let program = [
        I::new().addi(1, 0, 100).build(),
        I::new().addi(5, 0, -1234).build(),
        // address = x1 + 5 = 105, word 26
        I::new().sw(5, 1).build(),
        // different base register, same word
        I::new().addi(7, 0, 96).build(),
        I::new().lw(6, 7, 11).build(),
    ];
    let _ = ctx.run(&program);
    assert_eq!(ctx.cpu.state.mem.read_word(26), -1234);
    assert_eq!(ctx.get_reg(6), -1234);
    assert_eq!(ctx.pc(), 20);
}

#[test]
fn test_stack_pointer_before_first_instruction() {
    let ctx = TestContext::new();
    assert_eq!(ctx.get_reg(2), 380);
}

#[test]
fn test_x0_write_persists() {
    let mut ctx = TestContext::new();
    let _ = ctx.step(I::new().addi(0, 0, 9).build());
    let _ = ctx.step(I::new().add(1, 0, 0).build());
    assert_eq!(ctx.get_reg(0), 9);
    assert_eq!(ctx.get_reg(1), 18);
}

#[test]
fn test_countdown_loop() {
    // x1 = 3; loop: x1 -= 1; bne back to loop while x1 != 0.
    // The -4 offset shares bits with rs2, selecting x28 (zero).
    let mut ctx = TestContext::new();
    let _ = ctx.step(I::new().addi(1, 0, 3).build());
    let body = [
        I::new().addi(1, 1, -1).build(),
        I::new().bne(1, 0).imm(-4).build(),
    ];
    while ctx.get_reg(1) != 0 {
        let pc = ctx.pc();
        let idx = ((pc - 4) / 4) as usize;
        let _ = ctx.step(body[idx]);
    }
    let _ = ctx.step(body[1]);
    assert_eq!(ctx.pc(), 12);
    assert_eq!(ctx.cpu.stats.branches_taken, 2);
}
