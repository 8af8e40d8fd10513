// tests/support/mod.rs
// Shared fakes for the integration test binaries. Individual test crates
// use different subsets, which would otherwise trip dead_code warnings.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use mocks::*;
