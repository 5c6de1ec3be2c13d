//! Property-test run profile read from the environment.
//!
//! `PROGTEST_CASES` overrides the number of cases per property and
//! `RANDGRAPH_PBT_FORK` toggles forked execution. Invalid values fall back
//! to the suite default with a warning.

use std::env;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const RANDGRAPH_PBT_FORK_ENV_KEY: &str = "RANDGRAPH_PBT_FORK";

/// Resolved case count and fork flag for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads the profile, using the given defaults for unset or invalid
    /// variables.
    ///
    /// # Examples
    ///
    /// ```
    /// use randgraph_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_from_env(PROGTEST_CASES_ENV_KEY, parse_cases).unwrap_or(default_cases),
            fork: override_from_env(RANDGRAPH_PBT_FORK_ENV_KEY, parse_flag)
                .unwrap_or(default_fork),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether cases should run in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn override_from_env<T>(key: &'static str, parse: fn(&str) -> Result<T, String>) -> Option<T> {
    let raw = env::var(key).ok()?;
    match parse(&raw) {
        Ok(value) => Some(value),
        Err(reason) => {
            tracing::warn!(env = key, raw = %raw, reason = %reason, "ignoring invalid property-test override");
            None
        }
    }
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}
