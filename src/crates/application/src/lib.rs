pub mod command;
pub mod error;
pub mod normalize;
pub mod query;
pub mod shared;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
