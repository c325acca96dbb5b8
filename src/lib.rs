#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::cast_possible_truncation, // Priority discriminants fit in u8
    clippy::missing_errors_doc,       // Every fallible API returns LogError
    clippy::module_name_repetitions,  // e.g. LoggerConfig in factory::config
    clippy::must_use_candidate,
    clippy::doc_markdown
)]

//! Leveled logging over a prioritized logger.
//!
//! - [`domain`]: the eight-step [`Priority`] scale and the static level table
//! - [`logger`]: the [`Logger`] engine with writers, processors and filters
//! - [`adapter`]: [`LevelAdapter`], mapping level names onto priorities
//! - [`factory`]: [`LoggerFactory`], building named loggers from TOML

pub mod adapter;
pub mod app;
pub mod domain;
pub mod factory;
pub mod logger;
pub mod telemetry;

// Re-export main types for easy access
pub use adapter::{LevelAdapter, LevelLogger};
pub use domain::{Context, LogError, LogEvent, Priority};
pub use factory::{LoggerConfig, LoggerFactory};
pub use logger::{Logger, PriorityLogger};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
