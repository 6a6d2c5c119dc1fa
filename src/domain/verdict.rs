use crate::adapters::recorder::CapturingReporter;
use crate::domain::error::VerifyError;
use crate::domain::path::FieldPath;
use crate::domain::ports::Mock;

/// Outcome of asking one mock whether its expectations were met.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Satisfied,
    Unmet { errors: Vec<String>, logs: Vec<String> },
}

impl Verdict {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Verdict::Satisfied)
    }

    /// Error lines followed by log lines, newline separated. Empty when satisfied.
    pub fn diagnostic(&self) -> String {
        match self {
            Verdict::Satisfied => String::new(),
            Verdict::Unmet { errors, logs } => {
                CapturingReporter::join_lines(errors.iter().chain(logs))
            }
        }
    }
}

/// Run the mock's native expectation check against a private recorder.
pub fn collect<M: Mock + ?Sized>(mock: &M) -> Verdict {
    let mut reporter = CapturingReporter::new();
    if mock.assert_expectations(&mut reporter) {
        return Verdict::Satisfied;
    }
    let (errors, logs) = reporter.into_parts();
    Verdict::Unmet { errors, logs }
}

/// Check one mock found at `path`, turning an unmet verdict into a path-qualified error.
pub fn check<M: Mock + ?Sized>(mock: &M, path: &FieldPath) -> Result<(), VerifyError> {
    match collect(mock) {
        Verdict::Satisfied => {
            tracing::debug!(field = %path, "mock expectations met");
            Ok(())
        }
        unmet => {
            tracing::warn!(
                field = %path,
                mock_type = mock.type_name(),
                "mock expectations not met"
            );
            Err(VerifyError::UnmetExpectations {
                path: path.clone(),
                diagnostic: unmet.diagnostic(),
            })
        }
    }
}
