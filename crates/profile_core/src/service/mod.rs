//! State services and the application facade.
//!
//! # Responsibility
//! - Own settings and notification state behind explicit service objects.
//! - Wire services together without process-wide singletons.

pub mod app;
pub mod notification_bus;
pub mod settings_store;
