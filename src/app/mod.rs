pub mod config;
pub mod harness;
