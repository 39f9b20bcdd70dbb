//! Shared test utilities for `amity-core`.

use amity_test_support::property_profile::PropertyProfile;
use proptest::test_runner::Config as ProptestConfig;

/// Builds a proptest configuration honouring the workspace case override.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = PropertyProfile::load(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        ..ProptestConfig::default()
    }
}
