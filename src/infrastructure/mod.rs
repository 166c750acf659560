//! Infrastructure layer - Storage, logging and service implementations

pub mod logging;
pub mod storage;
pub mod user_account;
