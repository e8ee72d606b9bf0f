pub mod api;
pub mod core;
pub mod tree;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
