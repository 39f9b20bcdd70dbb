//! Property-test run profile read from the environment.
//!
//! Lets CI raise case counts for the whole workspace without editing each
//! suite.

use std::env;

/// Environment variable overriding the number of proptest cases.
pub const AMITY_PBT_CASES_ENV_KEY: &str = "AMITY_PBT_CASES";

/// Case-count profile applied to property suites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyProfile {
    cases: u32,
}

impl PropertyProfile {
    /// Loads the profile, falling back to `default_cases` when the override is
    /// absent or invalid.
    ///
    /// # Examples
    /// ```
    /// use amity_test_support::property_profile::PropertyProfile;
    ///
    /// let profile = PropertyProfile::load(64);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32) -> Self {
        let cases = match env::var(AMITY_PBT_CASES_ENV_KEY) {
            Ok(raw) => parse_cases(&raw).unwrap_or_else(|reason| {
                tracing::warn!(
                    env = AMITY_PBT_CASES_ENV_KEY,
                    raw = %raw,
                    reason,
                    "invalid property-test case override; using default",
                );
                default_cases
            }),
            Err(_) => default_cases,
        };
        Self { cases }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }
}

fn parse_cases(raw: &str) -> Result<u32, &'static str> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0"),
        Ok(cases) => Ok(cases),
        Err(_) => Err("cases must be a positive integer"),
    }
}
