//! Leveled logging facade over a [`PriorityLogger`].
//!
//! Callers speak in level names (`"error"`, `"info"`, ...). The adapter
//! resolves the name through the static level table and forwards the
//! message and context untouched to the wrapped logger. Unknown names are
//! rejected before anything reaches that logger.

use crate::domain::{Context, LogError, level_map};
use crate::logger::PriorityLogger;

/// Logging interface keyed by level name.
///
/// Implementors only provide [`LevelLogger::log`]; the eight named methods
/// are shorthand for calling it with a fixed level.
pub trait LevelLogger {
    fn log(&self, level: &str, message: &str, context: &Context) -> Result<(), LogError>;

    fn emergency(&self, message: &str, context: &Context) -> Result<(), LogError> {
        self.log("emergency", message, context)
    }

    fn alert(&self, message: &str, context: &Context) -> Result<(), LogError> {
        self.log("alert", message, context)
    }

    fn critical(&self, message: &str, context: &Context) -> Result<(), LogError> {
        self.log("critical", message, context)
    }

    fn error(&self, message: &str, context: &Context) -> Result<(), LogError> {
        self.log("error", message, context)
    }

    fn warning(&self, message: &str, context: &Context) -> Result<(), LogError> {
        self.log("warning", message, context)
    }

    fn notice(&self, message: &str, context: &Context) -> Result<(), LogError> {
        self.log("notice", message, context)
    }

    fn info(&self, message: &str, context: &Context) -> Result<(), LogError> {
        self.log("info", message, context)
    }

    fn debug(&self, message: &str, context: &Context) -> Result<(), LogError> {
        self.log("debug", message, context)
    }
}

/// Borrows a [`PriorityLogger`] and exposes it as a [`LevelLogger`].
///
/// The adapter does not own the logger; its lifetime is managed by whoever
/// created it.
#[derive(Debug)]
pub struct LevelAdapter<'a, L: PriorityLogger + ?Sized> {
    logger: &'a L,
}

impl<'a, L: PriorityLogger + ?Sized> LevelAdapter<'a, L> {
    pub fn new(logger: &'a L) -> Self {
        Self { logger }
    }

    /// The wrapped logger, as passed to [`LevelAdapter::new`].
    pub fn logger(&self) -> &'a L {
        self.logger
    }
}

impl<L: PriorityLogger + ?Sized> Clone for LevelAdapter<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: PriorityLogger + ?Sized> Copy for LevelAdapter<'_, L> {}

impl<L: PriorityLogger + ?Sized> LevelLogger for LevelAdapter<'_, L> {
    fn log(&self, level: &str, message: &str, context: &Context) -> Result<(), LogError> {
        let priority = level_map::priority_of(level).inspect_err(|_| {
            tracing::debug!(level, "Rejected log call with unknown level");
        })?;
        self.logger.log(priority, message, context)
    }
}
