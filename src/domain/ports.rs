use crate::domain::field::Shape;
use std::any::Any;
use std::fmt;

/// Introspection port: every value that can appear in a subject graph.
///
/// Rust has no runtime reflection, so a type describes its own shape. Struct-shaped types list
/// their fields (see [`crate::inspect_struct!`] for the common case), smart pointers report their
/// pointee, and everything else is opaque.
pub trait Inspect: Any {
    /// Used for mock identification by exact type equality.
    fn as_any(&self) -> &dyn Any;

    /// The concrete value behind `self`. On a trait object this resolves through the vtable,
    /// which is how interface fields reach their implementation.
    fn as_inspect(&self) -> &dyn Inspect;

    fn shape(&self) -> Shape<'_>;

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Holders of trait objects (`Box<dyn T>`, `Arc<dyn T>`, ...) exposed as interface fields.
pub trait AsInterface {
    /// `None` models a nil interface.
    fn as_interface(&self) -> Option<&dyn Inspect>;
}

/// Diagnostic sink handed to a mock's native expectation check.
///
/// Both channels take pre-formatted arguments so implementations can write
/// `reporter.report_error(format_args!("FAIL: {}", call))`.
pub trait Reporter {
    fn report_error(&mut self, args: fmt::Arguments<'_>);

    fn report_log(&mut self, args: fmt::Arguments<'_>);
}

/// Expectation-bearing collaborator provided by the mocking framework.
pub trait Mock: Inspect {
    /// Returns `true` when every registered expectation was satisfied. Failures and
    /// per-expectation notes are written to `reporter`.
    fn assert_expectations(&self, reporter: &mut dyn Reporter) -> bool;
}
