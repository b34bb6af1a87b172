pub mod commands;
pub mod report;
pub mod settings;
pub mod trace_init;
