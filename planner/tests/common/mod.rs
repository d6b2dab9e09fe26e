//! Common test utilities shared by the planner test suites

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::TestHelpers;
