//! # Disassembler Tests

use rvstep_core::isa::disasm::disassemble;

use crate::common::builder::instruction::InstructionBuilder as I;

#[test]
fn test_disasm_reg_reg() {
    assert_eq!(disassemble(I::new().sub(10, 11, 12).build()), "sub a0, a1, a2");
    assert_eq!(disassemble(I::new().sra(31, 0, 1).build()), "sra t6, zero, ra");
}

#[test]
fn test_disasm_immediate_forms() {
    assert_eq!(disassemble(I::new().addi(2, 2, -16).build()), "addi sp, sp, -16");
    assert_eq!(disassemble(I::new().lw(5, 2, 8).build()), "lw t0, 8(sp)");
    assert_eq!(disassemble(I::new().jalr(1, 6, 0).build()), "jalr ra, 0(t1)");
}

#[test]
fn test_disasm_store_branch_jump() {
    assert_eq!(disassemble(I::new().sw(8, 2).build()), "sw s0, 8(sp)");
    assert_eq!(disassemble(I::new().bne(10, 4).build()), "bne a0, tp, 4");
    assert_eq!(disassemble(I::new().jal(1, -8).build()), "jal ra, -8");
}

#[test]
fn test_disasm_unknown() {
    assert_eq!(disassemble(0), "unknown");
}
