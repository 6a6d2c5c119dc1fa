use crate::domain::walker::WalkParams;
use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_MAX_DEPTH: &str = "MOCKWALK_MAX_DEPTH";
pub const ENV_DETECT_CYCLES: &str = "MOCKWALK_DETECT_CYCLES";

/// User-facing verification options.
///
/// `max_depth` is unlimited unless set; cycle detection keeps unlimited walks finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyOptions {
    pub max_depth: Option<usize>,
    pub detect_cycles: bool,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        let params = WalkParams::default();
        Self {
            max_depth: params.max_depth,
            detect_cycles: params.detect_cycles,
        }
    }
}

impl VerifyOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse verify options JSON")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read verify options: {}", path.display()))?;
        Self::from_json_str(&content)
    }

    /// Defaults overridden by `MOCKWALK_MAX_DEPTH` / `MOCKWALK_DETECT_CYCLES` when set.
    ///
    /// Opt-in: [`Verifier::new`](crate::app::harness::Verifier::new) and
    /// [`assert_expectations_for_mocks`](crate::app::harness::assert_expectations_for_mocks)
    /// use the defaults. Use [`Verifier::from_env`](crate::app::harness::Verifier::from_env)
    /// to pick these variables up.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut options = Self::default();
        if let Some(raw) = lookup(ENV_MAX_DEPTH) {
            let limit = raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("Invalid {ENV_MAX_DEPTH}: {raw:?}"))?;
            options.max_depth = Some(limit);
        }
        if let Some(raw) = lookup(ENV_DETECT_CYCLES) {
            options.detect_cycles = parse_flag(&raw)
                .with_context(|| format!("Invalid {ENV_DETECT_CYCLES}: {raw:?}"))?;
        }
        Ok(options)
    }
}

impl From<VerifyOptions> for WalkParams {
    fn from(options: VerifyOptions) -> Self {
        Self {
            max_depth: options.max_depth,
            detect_cycles: options.detect_cycles,
        }
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {other:?}"),
    }
}
