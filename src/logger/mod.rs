//! The prioritized logging engine.
//!
//! A [`Logger`] turns `log(priority, message, context)` calls into
//! [`LogEvent`]s, runs them through its processors and hands them to every
//! writer whose filter accepts them.

pub mod processor;
pub mod writer;

pub use processor::{MessageLimitProcessor, PlaceholderProcessor, Processor};
pub use writer::{
    MockWriter, PriorityFilter, StreamFormat, StreamTarget, StreamWriter, TracingWriter, Writer,
};

use crate::domain::{Context, LogError, LogEvent, Priority};

#[cfg(test)]
use mockall::automock;

/// Logging interface keyed by [`Priority`].
///
/// Implementations must be safe to call concurrently.
#[cfg_attr(test, automock)]
pub trait PriorityLogger: Send + Sync {
    fn log(&self, priority: Priority, message: &str, context: &Context) -> Result<(), LogError>;
}

struct WriterSlot {
    writer: Box<dyn Writer>,
    filter: Option<PriorityFilter>,
}

impl WriterSlot {
    fn accepts(&self, event: &LogEvent) -> bool {
        self.filter.is_none_or(|filter| filter.accepts(event))
    }
}

/// Concrete logger owning an ordered set of writers and processors.
#[derive(Default)]
pub struct Logger {
    writers: Vec<WriterSlot>,
    processors: Vec<Box<dyn Processor>>,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_writer<W: Writer + 'static>(&mut self, writer: W) -> &mut Self {
        self.push_writer(Box::new(writer), None)
    }

    /// Add a writer that only sees events at least as severe as `filter`.
    pub fn add_filtered_writer<W: Writer + 'static>(
        &mut self,
        writer: W,
        filter: PriorityFilter,
    ) -> &mut Self {
        self.push_writer(Box::new(writer), Some(filter))
    }

    pub(crate) fn push_writer(
        &mut self,
        writer: Box<dyn Writer>,
        filter: Option<PriorityFilter>,
    ) -> &mut Self {
        tracing::debug!(writer = writer.name(), filter = ?filter, "Added writer");
        self.writers.push(WriterSlot { writer, filter });
        self
    }

    pub fn add_processor<P: Processor + 'static>(&mut self, processor: P) -> &mut Self {
        self.push_processor(Box::new(processor))
    }

    pub(crate) fn push_processor(&mut self, processor: Box<dyn Processor>) -> &mut Self {
        tracing::debug!(processor = processor.name(), "Added processor");
        self.processors.push(processor);
        self
    }

    pub fn writer_count(&self) -> usize {
        self.writers.len()
    }

    pub fn processor_count(&self) -> usize {
        self.processors.len()
    }

    fn build_event(&self, priority: Priority, message: &str, context: &Context) -> LogEvent {
        self.processors.iter().fold(
            LogEvent::new(priority, message, context.clone()),
            |event, processor| processor.process(event),
        )
    }
}

impl PriorityLogger for Logger {
    /// Every accepting writer is attempted even if an earlier one fails; the
    /// first failure is returned.
    fn log(&self, priority: Priority, message: &str, context: &Context) -> Result<(), LogError> {
        let event = self.build_event(priority, message, context);

        let mut first_error = None;
        for slot in self.writers.iter().filter(|slot| slot.accepts(&event)) {
            if let Err(e) = slot.writer.write(&event) {
                tracing::warn!(writer = slot.writer.name(), error = %e, "Writer failed");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field(
                "writers",
                &self.writers.iter().map(|s| s.writer.name()).collect::<Vec<_>>(),
            )
            .field(
                "processors",
                &self.processors.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
