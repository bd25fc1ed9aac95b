pub mod models;
pub mod stats;
pub mod time;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
