//! Infrastructure layer - External service implementations

pub mod character;
pub mod logging;
pub mod storage;
