//! Environment-driven knobs shared by test suites in CI and locally.

pub mod property_test_profile;
