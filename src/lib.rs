//! mockwalk library: discovers every mock reachable from a test subject and verifies its
//! expectations, reporting the first failure with the field path that leads to it.

pub mod adapters;
pub mod app;
pub mod domain;
mod macros;

pub use app::harness::{Verifier, assert_expectations_for_mocks, run_test};
pub use domain::error::VerifyError;
pub use domain::field::{Field, FieldValue, Shape, Visibility};
pub use domain::path::FieldPath;
pub use domain::ports::{AsInterface, Inspect, Mock, Reporter};
