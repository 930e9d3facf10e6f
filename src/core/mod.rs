#[cfg(feature = "cli")]
pub mod commands;
pub mod handlers;
pub mod response;
pub mod router;
