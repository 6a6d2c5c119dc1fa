pub mod error;
pub mod field;
pub mod path;
pub mod ports;
pub mod verdict;
pub mod walker;
