/// Instruction-stream loading tests.
pub mod loader;


/// Run-loop tests, in memory and file to file.
pub mod simulator;
