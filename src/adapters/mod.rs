//! Port implementations: the capturing reporter handed to mocks, and `Inspect` for std types.

pub mod recorder;
pub mod std_types;
