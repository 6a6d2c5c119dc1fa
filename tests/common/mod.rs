//! Shared test utilities: a testify-style mock and subject fixtures.
//! Included by each integration test file rather than compiled on its own.
#![allow(dead_code)]

pub mod fixtures;
pub mod mock;
