#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod health;

#[cfg(feature = "server")]
pub mod mailer;

#[cfg(feature = "server")]
pub mod openapi;

#[cfg(feature = "server")]
pub mod rate_limit;

#[cfg(feature = "server")]
pub mod rest;
