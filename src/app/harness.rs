use crate::app::config::VerifyOptions;
use crate::domain::error::VerifyError;
use crate::domain::ports::{Inspect, Mock};
use crate::domain::walker::GraphWalker;
use std::marker::PhantomData;
use std::sync::Once;

/// Configured entry point for verifying mocks of type `M`.
///
/// Each call builds its own walker and recorder, so one `Verifier` can be shared between
/// tests running on different threads.
pub struct Verifier<M> {
    options: VerifyOptions,
    _mock: PhantomData<fn() -> M>,
}

impl<M: Mock> Default for Verifier<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Mock> Verifier<M> {
    pub fn new() -> Self {
        Self::with_options(VerifyOptions::default())
    }

    pub fn with_options(options: VerifyOptions) -> Self {
        Self {
            options,
            _mock: PhantomData,
        }
    }

    /// Verifier configured from the `MOCKWALK_*` environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        VerifyOptions::from_env().map(Self::with_options)
    }

    pub fn options(&self) -> &VerifyOptions {
        &self.options
    }

    pub fn verify(&self, root: &dyn Inspect) -> Result<(), VerifyError> {
        GraphWalker::<M>::new(self.options.into()).verify(root)
    }
}

/// Check every mock of type `M` reachable from `root`, returning the first failure.
pub fn assert_expectations_for_mocks<M: Mock>(root: &dyn Inspect) -> Result<(), VerifyError> {
    Verifier::<M>::new().verify(root)
}

/// Run a test body and verify the subject it hands back.
///
/// Returning `None` skips verification. A failing mock panics with the full diagnostic,
/// failing the surrounding `#[test]`.
pub fn run_test<M, S, F>(body: F)
where
    M: Mock,
    S: Inspect,
    F: FnOnce() -> Option<S>,
{
    if let Some(subject) = body()
        && let Err(err) = assert_expectations_for_mocks::<M>(&subject)
    {
        panic!("{err}");
    }
}

/// Install a `tracing` subscriber for tests, filtered by `RUST_LOG`. Safe to call repeatedly.
pub fn init_test_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Panic unless every mock of the given type reachable from the subject is satisfied.
///
/// ```ignore
/// assert_mocks!(Mock, &handler);
/// ```
#[macro_export]
macro_rules! assert_mocks {
    ($mock:ty, $root:expr $(,)?) => {
        if let ::std::result::Result::Err(err) =
            $crate::app::harness::assert_expectations_for_mocks::<$mock>($root)
        {
            panic!("{}", err);
        }
    };
}
