//! Core module for Lagoon Desk
//!
//! - DeskConfig: environment and `.env` configuration
//! - DeskError: error type for desk operations
//! - logging: tracing subscriber with a daily log file
//! - NavStore: navigation memory with pluggable persistence
//! - Notifier / Confirm: toast and confirmation seams

pub mod config;
pub mod error;
pub mod logging;
pub mod nav;
pub mod notify;

pub use config::DeskConfig;
pub use error::{DeskError, DeskResult};
pub use nav::{FileNavPersistence, MemoryNavPersistence, NavPersistence, NavState, NavStore};
pub use notify::{
    AlwaysConfirm, Confirm, ConsoleNotifier, Notifier, RecordingNotifier, StdinConfirm, Toast,
    ToastKind,
};
