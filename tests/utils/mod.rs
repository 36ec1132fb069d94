pub mod builders;
pub mod mocks;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use builders::{permutations_of, RecordBuilder};
#[allow(unused_imports)]
pub use mocks::MockMatchSource;
