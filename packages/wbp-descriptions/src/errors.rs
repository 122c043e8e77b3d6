//! Error types for wbp-descriptions
//!
//! Every failure of a description resolution is reported through one
//! structured error carrying a machine-readable [`ErrorKind`] plus the
//! offending class and resource, mirroring the designer's error-code
//! exceptions.

use std::fmt;

/// Error kind categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No `*.wbp-component.xml` in the whole ancestor chain
    NoDescriptions,
    /// No layer and no bundle declares a toolkit
    NoToolkit,
    /// No layer declares a model class
    NoModelClass,
    /// Malformed XML or a metadata rule failure
    LoadError,
    /// Class loader could not find a class
    ClassNotFound,
    /// Metadata references a constructor/method the class does not have
    UnknownMember,
    /// IO errors while reading resources
    Io,
    /// Configuration errors
    Config,
    /// A description processor failed
    Processor,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NoDescriptions => "no_descriptions",
            ErrorKind::NoToolkit => "no_toolkit",
            ErrorKind::NoModelClass => "no_model_class",
            ErrorKind::LoadError => "load_error",
            ErrorKind::ClassNotFound => "class_not_found",
            ErrorKind::UnknownMember => "unknown_member",
            ErrorKind::Io => "io",
            ErrorKind::Config => "config",
            ErrorKind::Processor => "processor",
        }
    }

    /// Stable numeric code, grouped like the designer's core exception constants.
    pub fn code(&self) -> u32 {
        match self {
            ErrorKind::NoDescriptions => 201,
            ErrorKind::NoToolkit => 202,
            ErrorKind::LoadError => 203,
            ErrorKind::NoModelClass => 204,
            ErrorKind::UnknownMember => 205,
            ErrorKind::ClassNotFound => 301,
            ErrorKind::Io => 302,
            ErrorKind::Config => 401,
            ErrorKind::Processor => 501,
        }
    }
}

/// Unified error type
#[derive(Debug)]
pub struct DescriptionError {
    pub kind: ErrorKind,
    pub message: String,
    pub class_name: Option<String>,
    pub resource: Option<String>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl DescriptionError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            class_name: None,
            resource: None,
            source: None,
        }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Attaches the class name unless a more specific one is already set.
    pub fn or_class(mut self, class_name: &str) -> Self {
        if self.class_name.is_none() {
            self.class_name = Some(class_name.to_string());
        }
        self
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn no_descriptions(class_name: &str) -> Self {
        Self::new(
            ErrorKind::NoDescriptions,
            "no component descriptions found in class hierarchy",
        )
        .with_class(class_name)
    }

    pub fn no_toolkit(class_name: &str) -> Self {
        Self::new(ErrorKind::NoToolkit, "no toolkit declared for component").with_class(class_name)
    }

    pub fn no_model_class(class_name: &str) -> Self {
        Self::new(ErrorKind::NoModelClass, "no model class declared for component")
            .with_class(class_name)
    }

    pub fn load(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LoadError, message)
    }

    pub fn class_not_found(class_name: &str) -> Self {
        Self::new(ErrorKind::ClassNotFound, "class not found").with_class(class_name)
    }

    pub fn unknown_member(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownMember, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn processor(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Processor, message)
    }

    pub fn code(&self) -> u32 {
        self.kind.code()
    }
}

impl fmt::Display for DescriptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.message)?;
        if let Some(ref class_name) = self.class_name {
            write!(f, " (class {})", class_name)?;
        }
        if let Some(ref resource) = self.resource {
            write!(f, " in {}", resource)?;
        }
        Ok(())
    }
}

impl std::error::Error for DescriptionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<std::io::Error> for DescriptionError {
    fn from(err: std::io::Error) -> Self {
        DescriptionError::io(format!("IO error: {}", err)).with_source(err)
    }
}

impl From<serde_json::Error> for DescriptionError {
    fn from(err: serde_json::Error) -> Self {
        DescriptionError::config(format!("JSON error: {}", err)).with_source(err)
    }
}

impl From<crate::config::ConfigError> for DescriptionError {
    fn from(err: crate::config::ConfigError) -> Self {
        DescriptionError::config(err.to_string()).with_source(err)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DescriptionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DescriptionError::load("unexpected end of document")
            .with_class("com.example.Button")
            .with_resource("com/example/Button.wbp-component.xml");

        let msg = format!("{}", err);
        assert!(msg.contains("load_error"));
        assert!(msg.contains("unexpected end of document"));
        assert!(msg.contains("com.example.Button"));
        assert!(msg.contains("Button.wbp-component.xml"));
    }

    #[test]
    fn test_or_class_keeps_first() {
        let err = DescriptionError::class_not_found("a.Inner").or_class("a.Outer");
        assert_eq!(err.class_name.as_deref(), Some("a.Inner"));

        let err = DescriptionError::load("bad").or_class("a.Outer");
        assert_eq!(err.class_name.as_deref(), Some("a.Outer"));
    }

    #[test]
    fn test_codes_are_distinct() {
        let kinds = [
            ErrorKind::NoDescriptions,
            ErrorKind::NoToolkit,
            ErrorKind::NoModelClass,
            ErrorKind::LoadError,
            ErrorKind::ClassNotFound,
            ErrorKind::UnknownMember,
            ErrorKind::Io,
            ErrorKind::Config,
            ErrorKind::Processor,
        ];
        let mut codes: Vec<u32> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = DescriptionError::from(io);
        assert_eq!(err.kind, ErrorKind::Io);
        assert!(err.source().is_some());
    }
}
