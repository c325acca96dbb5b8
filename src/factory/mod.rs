//! Builds named loggers from a TOML configuration document.
//!
//! Loggers are declared as sub-tables of a root key (`log` by default):
//!
//! ```toml
//! [log.app]
//! processors = [{ type = "placeholder" }]
//! writers = [{ type = "stream", target = "stderr", max_priority = "warning" }]
//!
//! [log.audit]
//! writers = [{ type = "tracing" }]
//! ```

pub mod config;

pub use config::{LoggerConfig, ProcessorConfig, WriterConfig};

use crate::domain::LogError;
use crate::logger::Logger;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Root key loggers are read from unless the factory is told otherwise.
pub const DEFAULT_CONFIG_KEY: &str = "log";

/// Environment variable naming the configuration file used by
/// [`LoggerFactory::from_env`].
pub const CONFIG_FILE_ENV: &str = "RASK_LOGGER_CONFIG";

pub struct LoggerFactory {
    config_key: String,
    document: Option<toml::Table>,
    sections: OnceLock<Result<toml::Table, String>>,
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_KEY)
    }
}

impl LoggerFactory {
    /// A factory with no configuration document; it can create nothing until
    /// one is attached with [`LoggerFactory::with_document`].
    pub fn new(config_key: impl Into<String>) -> Self {
        Self {
            config_key: config_key.into(),
            document: None,
            sections: OnceLock::new(),
        }
    }

    pub fn with_document(mut self, document: toml::Table) -> Self {
        self.document = Some(document);
        self.sections = OnceLock::new();
        self
    }

    pub fn from_toml_str(content: &str, config_key: impl Into<String>) -> Result<Self, LogError> {
        let document: toml::Table = toml::from_str(content)?;
        Ok(Self::new(config_key).with_document(document))
    }

    pub fn from_file<P: AsRef<Path>>(
        path: P,
        config_key: impl Into<String>,
    ) -> Result<Self, LogError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading logger configuration");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content, config_key)
    }

    /// Load the file named by `RASK_LOGGER_CONFIG`, or return an empty
    /// factory when the variable is unset.
    pub fn from_env(config_key: impl Into<String>) -> Result<Self, LogError> {
        let mut path = None;
        load_env_path_opt(CONFIG_FILE_ENV, &mut path);
        match path {
            Some(path) => Self::from_file(path, config_key),
            None => Ok(Self::new(config_key)),
        }
    }

    pub fn config_key(&self) -> &str {
        &self.config_key
    }

    /// Whether a logger named `name` is configured.
    ///
    /// Only the presence of the section is checked; its contents are parsed
    /// by [`LoggerFactory::create`]. Returns `false` when there is no
    /// document, no table under the configured key, or no such section.
    pub fn can_create(&self, name: &str) -> bool {
        match self.sections() {
            Ok(sections) => sections.contains_key(name),
            Err(e) => {
                tracing::warn!(config_key = %self.config_key, error = %e, "Unusable logger configuration");
                false
            }
        }
    }

    /// Configured logger names, sorted.
    pub fn names(&self) -> Result<Vec<String>, LogError> {
        let mut names: Vec<String> = self.sections()?.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    /// Parse the section named `name`. Other sections are not looked at.
    pub fn logger_config(&self, name: &str) -> Result<LoggerConfig, LogError> {
        let section = self
            .sections()?
            .get(name)
            .ok_or_else(|| LogError::UnknownLogger(name.to_string()))?;
        section
            .clone()
            .try_into::<LoggerConfig>()
            .map_err(|e| LogError::Config(format!("logger '{name}': {e}")))
    }

    /// Build a new logger from the section named `name`.
    ///
    /// Each call returns an independent instance.
    pub fn create(&self, name: &str) -> Result<Logger, LogError> {
        let logger = self.logger_config(name)?.build()?;
        tracing::info!(
            logger = name,
            writers = logger.writer_count(),
            processors = logger.processor_count(),
            "Created logger"
        );
        Ok(logger)
    }

    fn sections(&self) -> Result<&toml::Table, LogError> {
        self.sections
            .get_or_init(|| self.resolve_sections().map_err(|e| e.to_string()))
            .as_ref()
            .map_err(|e| LogError::Config(e.clone()))
    }

    fn resolve_sections(&self) -> Result<toml::Table, LogError> {
        let Some(root) = self
            .document
            .as_ref()
            .and_then(|document| document.get(&self.config_key))
        else {
            return Ok(toml::Table::new());
        };
        match root {
            toml::Value::Table(table) => Ok(table.clone()),
            _ => Err(LogError::Config(format!(
                "'{}' must be a table of logger sections",
                self.config_key
            ))),
        }
    }
}

/// Helper function to load an optional PathBuf environment variable.
fn load_env_path_opt(name: &str, target: &mut Option<PathBuf>) {
    if let Ok(value) = std::env::var(name) {
        *target = Some(PathBuf::from(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
        [log.app]
        processors = [{ type = "placeholder" }]
        writers = [{ type = "tracing", max_priority = "warning" }]

        [log.quiet]
    "#;

    #[test]
    fn test_factory_without_document_creates_nothing() {
        let factory = LoggerFactory::default();
        assert_eq!(factory.config_key(), "log");
        assert!(!factory.can_create("app"));
        assert!(matches!(
            factory.create("app"),
            Err(LogError::UnknownLogger(name)) if name == "app"
        ));
    }

    #[test]
    fn test_factory_without_config_key_creates_nothing() {
        let factory = LoggerFactory::from_toml_str("[other.app]\n", "log").unwrap();
        assert!(!factory.can_create("app"));
        assert!(factory.names().unwrap().is_empty());
    }

    #[test]
    fn test_can_create_configured_names_only() {
        let factory = LoggerFactory::from_toml_str(CONFIG, DEFAULT_CONFIG_KEY).unwrap();
        assert!(factory.can_create("app"));
        assert!(factory.can_create("quiet"));
        assert!(!factory.can_create("missing"));
        assert_eq!(factory.names().unwrap(), vec!["app", "quiet"]);
    }

    #[test]
    fn test_create_builds_configured_logger() {
        let factory = LoggerFactory::from_toml_str(CONFIG, DEFAULT_CONFIG_KEY).unwrap();
        let logger = factory.create("app").unwrap();
        assert_eq!(logger.writer_count(), 1);
        assert_eq!(logger.processor_count(), 1);

        let quiet = factory.create("quiet").unwrap();
        assert_eq!(quiet.writer_count(), 0);
    }

    #[test]
    fn test_custom_config_key() {
        let content = r#"
            [loggers.svc]
            writers = [{ type = "stream" }]
        "#;
        let factory = LoggerFactory::from_toml_str(content, "loggers").unwrap();
        assert!(factory.can_create("svc"));

        let default_key = LoggerFactory::from_toml_str(content, DEFAULT_CONFIG_KEY).unwrap();
        assert!(!default_key.can_create("svc"));
    }

    #[test]
    fn test_non_table_root_is_config_error() {
        let factory = LoggerFactory::from_toml_str("log = 5", DEFAULT_CONFIG_KEY).unwrap();
        assert!(!factory.can_create("app"));
        assert!(matches!(factory.create("app"), Err(LogError::Config(_))));
    }

    #[test]
    fn test_bad_section_is_config_error() {
        let content = r#"
            [log.app]
            writers = [{ type = "carrier-pigeon" }]
        "#;
        let factory = LoggerFactory::from_toml_str(content, DEFAULT_CONFIG_KEY).unwrap();
        match factory.create("app") {
            Err(LogError::Config(msg)) => assert!(msg.contains("logger 'app'")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_section_does_not_affect_other_loggers() {
        let content = r#"
            [log.good]
            writers = [{ type = "tracing" }]

            [log.bad]
            writers = [{ type = "carrier-pigeon" }]
        "#;
        let factory = LoggerFactory::from_toml_str(content, DEFAULT_CONFIG_KEY).unwrap();

        assert!(factory.can_create("good"));
        assert!(factory.can_create("bad"));
        assert_eq!(factory.names().unwrap(), vec!["bad", "good"]);
        assert_eq!(factory.create("good").unwrap().writer_count(), 1);
        assert!(matches!(factory.create("bad"), Err(LogError::Config(_))));
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let result = LoggerFactory::from_toml_str("[log.app", DEFAULT_CONFIG_KEY);
        assert!(matches!(result, Err(LogError::Config(_))));
    }

    #[test]
    fn test_attaching_document_resets_cache() {
        let factory = LoggerFactory::default();
        assert!(!factory.can_create("app"));

        let document: toml::Table = toml::from_str(CONFIG).unwrap();
        let factory = factory.with_document(document);
        assert!(factory.can_create("app"));
    }
}
