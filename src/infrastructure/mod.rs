//! Infrastructure layer - storage, uploads, auth and service implementations

pub mod auth;
pub mod logging;
pub mod services;
pub mod storage;
pub mod uploads;
