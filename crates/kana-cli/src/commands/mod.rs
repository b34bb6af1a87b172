pub mod check_ops;
pub mod config_ops;
