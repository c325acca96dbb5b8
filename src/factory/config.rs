use crate::domain::{LogError, Priority};
use crate::logger::{
    Logger, MessageLimitProcessor, PlaceholderProcessor, PriorityFilter, Processor, StreamFormat,
    StreamTarget, StreamWriter, TracingWriter, Writer,
};
use serde::{Deserialize, Serialize};

/// Configuration of one named logger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    #[serde(default)]
    pub writers: Vec<WriterConfig>,
    #[serde(default)]
    pub processors: Vec<ProcessorConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", deny_unknown_fields)]
pub enum WriterConfig {
    Stream {
        #[serde(default)]
        target: StreamTarget,
        #[serde(default)]
        format: StreamFormat,
        #[serde(default)]
        max_priority: Option<Priority>,
    },
    Tracing {
        #[serde(default)]
        max_priority: Option<Priority>,
    },
}

impl WriterConfig {
    pub fn max_priority(&self) -> Option<Priority> {
        match self {
            WriterConfig::Stream { max_priority, .. } | WriterConfig::Tracing { max_priority } => {
                *max_priority
            }
        }
    }

    fn build(&self) -> (Box<dyn Writer>, Option<PriorityFilter>) {
        let writer: Box<dyn Writer> = match self {
            WriterConfig::Stream { target, format, .. } => {
                Box::new(StreamWriter::new(*target, *format))
            }
            WriterConfig::Tracing { .. } => Box::new(TracingWriter::new()),
        };
        (writer, self.max_priority().map(PriorityFilter::new))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum ProcessorConfig {
    Placeholder,
    MessageLimit { max_length: usize },
}

impl ProcessorConfig {
    fn build(&self) -> Result<Box<dyn Processor>, LogError> {
        Ok(match self {
            ProcessorConfig::Placeholder => Box::new(PlaceholderProcessor::new()?),
            ProcessorConfig::MessageLimit { max_length } => {
                Box::new(MessageLimitProcessor::new(*max_length)?)
            }
        })
    }
}

impl LoggerConfig {
    pub fn validate(&self) -> Result<(), LogError> {
        for processor in &self.processors {
            if let ProcessorConfig::MessageLimit { max_length: 0 } = processor {
                return Err(LogError::Config(
                    "Message limit max_length must be greater than 0".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Build a fresh logger, processors first, in declaration order.
    pub fn build(&self) -> Result<Logger, LogError> {
        self.validate()?;

        let mut logger = Logger::new();
        for processor in &self.processors {
            logger.push_processor(processor.build()?);
        }
        for writer in &self.writers {
            let (writer, filter) = writer.build();
            logger.push_writer(writer, filter);
        }
        Ok(logger)
    }
}
