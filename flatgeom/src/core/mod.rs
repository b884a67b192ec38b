//! Core module has common/shared math and numeric trait modules.
pub mod math;
pub mod traits;
