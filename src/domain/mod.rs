//! Domain layer for rask-logger.
//!
//! Contains the canonical types shared across all modules:
//! - `Priority`: the eight-step severity scale (Emergency..Debug)
//! - `level_map`: the static level name <-> priority table
//! - `LogEvent` / `Context`: what processors and writers operate on
//! - `LogError`: Top-level error type

pub mod error;
pub mod event;
pub mod level_map;
pub mod priority;

pub use error::LogError;
pub use event::{Context, LogEvent};
pub use level_map::{LEVEL_NAMES, level_name_of, priority_of};
pub use priority::Priority;
