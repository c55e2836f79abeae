use thiserror::Error;

/// Errors that can occur while loading an application list.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not read file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse applications JSON: {0}")]
    JsonParseError(String),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Errors that can occur when converting a custom format into application records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),

    #[error("Expected a list of applications, but found {found}")]
    NotAList { found: String },
}
