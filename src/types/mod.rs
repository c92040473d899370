pub mod errors;

pub use errors::{PackError, PackResult};

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod errors_tests;
