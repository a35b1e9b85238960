//! Simulator: owns the CPU and drives it over an instruction stream.
//!
//! One instruction is decoded and executed per step, then the trace line is
//! written. After the stream ends the memory dump is appended. Any error
//! stops the run; trace lines already written are left in the sink.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::common::{Result, SimError};
use crate::config::{Config, ReportConfig};
use crate::core::Cpu;
use crate::core::cpu::Retired;
use crate::sim::{loader, report};

/// Top-level simulator: CPU plus report layout.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural state and statistics.
    pub cpu: Cpu,
    report: ReportConfig,
}

impl Simulator {
    /// Creates a simulator in the reset state described by `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            report: config.report.clone(),
        }
    }

    /// Executes one instruction word and writes its trace line.
    ///
    /// # Errors
    ///
    /// Whatever [`Cpu::step`] returns, or [`SimError::Io`] if the sink fails.
    pub fn step<W: Write>(&mut self, inst: u32, out: &mut W) -> Result<Retired> {
        let retired = self.cpu.step(inst)?;
        report::write_trace_line(out, &self.cpu.state).map_err(SimError::io("writing trace"))?;
        Ok(retired)
    }

    /// Runs every word of `program`, then appends the memory dump.
    ///
    /// # Returns
    ///
    /// The number of instructions executed.
    ///
    /// # Errors
    ///
    /// The first error from the stream, the CPU, or the sink. The memory
    /// dump is not written when the run is aborted.
    pub fn run<I, W>(&mut self, program: I, out: &mut W) -> Result<u64>
    where
        I: IntoIterator<Item = Result<u32>>,
        W: Write,
    {
        info!(pc = self.cpu.pc(), "simulation started");
        let mut executed = 0u64;
        for word in program {
            let _retired = self.step(word?, out)?;
            executed += 1;
        }
        self.finish(out)?;
        info!(executed, pc = self.cpu.pc(), "simulation finished");
        Ok(executed)
    }

    /// Writes the final memory dump and flushes the sink.
    ///
    /// # Errors
    ///
    /// [`SimError::Io`] if writing or flushing fails.
    pub fn finish<W: Write>(&self, out: &mut W) -> Result<()> {
        report::write_memory_dump(out, &self.cpu.state, &self.report)
            .and_then(|()| out.flush())
            .map_err(SimError::io("writing memory dump"))
    }

    /// Runs the instruction file at `input`, writing the trace to `output`.
    ///
    /// The input is opened before the output is created, so a missing input
    /// leaves no output file behind.
    ///
    /// # Errors
    ///
    /// [`SimError::InputNotFound`] for a missing input, [`SimError::Io`] if
    /// the output cannot be created, and anything [`Simulator::run`] returns.
    pub fn run_file(&mut self, input: &Path, output: &Path) -> Result<u64> {
        let program = loader::open_program(input)?;
        let file = File::create(output)
            .map_err(SimError::io(format!("creating {}", output.display())))?;
        let mut out = BufWriter::new(file);
        self.run(program, &mut out)
    }

    /// Layout of the final memory dump.
    pub const fn report(&self) -> &ReportConfig {
        &self.report
    }
}
