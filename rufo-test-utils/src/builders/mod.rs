//! Builders for on-disk test scenarios

mod fixture_tree;

pub use fixture_tree::FixtureTree;
