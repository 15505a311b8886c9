pub mod cli;
pub mod stream;
pub mod trace_init;
