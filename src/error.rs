//! Error types for pdfbind.
//!
//! Errors fall into two tiers. Configuration and output errors are fatal and
//! abort the run; per-item errors (a path spec that resolves to nothing, an
//! unreadable source file) are caught at the flatten/convert boundary and
//! turned into skip-with-log actions so one bad file never sinks the batch.

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfbind operations.
pub type Result<T> = std::result::Result<T, BindError>;

/// Main error type for pdfbind operations.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// The configuration is structurally invalid.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what is wrong with the configuration.
        message: String,
    },

    /// The manifest file could not be read.
    #[error("Failed to read config file: {path}\n  Reason: {source}")]
    ConfigRead {
        /// Path to the manifest file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The manifest file is not valid JSON or is missing required keys.
    #[error("Failed to parse config file: {path}\n  Reason: {source}")]
    ConfigParse {
        /// Path to the manifest file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A group lists an option name that is not recognized.
    #[error(
        "Unrecognized option: '{name}'\n  \
         Recognized options are: rotate90, rotate180, rotate270, flipH, flipV, recursive"
    )]
    UnrecognizedOption {
        /// The offending option string.
        name: String,
    },

    /// A path spec matched no file, directory, or glob pattern.
    #[error("Path matches no file, directory, or pattern: {spec}")]
    PathNotFound {
        /// The path spec as written in the manifest.
        spec: String,
    },

    /// A file's extension is outside the supported set.
    #[error("Unsupported file type: {path}")]
    UnsupportedFileType {
        /// Path to the unsupported file.
        path: PathBuf,
    },

    /// A source file could not be decoded or transformed.
    #[error("Failed to convert: {path}\n  Reason: {reason}")]
    Conversion {
        /// Path to the source file.
        path: PathBuf,
        /// Details about the failure.
        reason: String,
    },

    /// The output page tree could not be assembled.
    #[error("Failed to assemble output document\n  Reason: {reason}")]
    Assembly {
        /// Details about the failure.
        reason: String,
    },

    /// The output file already exists and the collision policy is abort.
    #[error(
        "Output file already exists: {path}\n  \
         Use --on-collision overwrite or --on-collision rename to proceed"
    )]
    OutputExists {
        /// Path to the existing output file.
        path: PathBuf,
    },

    /// The output file could not be created.
    #[error("Failed to create output file: {path}\n  Reason: {source}")]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing the output file failed.
    #[error("Failed to write output file: {path}\n  Reason: {source}")]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Every work item was skipped; an empty output PDF is never written.
    #[error("No pages were produced from the configured inputs")]
    NothingToBind,

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
}

impl BindError {
    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an UnrecognizedOption error.
    pub fn unrecognized_option(name: impl Into<String>) -> Self {
        Self::UnrecognizedOption { name: name.into() }
    }

    /// Create a PathNotFound error.
    pub fn path_not_found(spec: impl Into<String>) -> Self {
        Self::PathNotFound { spec: spec.into() }
    }

    /// Create an UnsupportedFileType error.
    pub fn unsupported_file_type(path: PathBuf) -> Self {
        Self::UnsupportedFileType { path }
    }

    /// Create a Conversion error.
    pub fn conversion(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::Conversion {
            path,
            reason: reason.into(),
        }
    }

    /// Create an Assembly error.
    pub fn assembly(reason: impl Into<String>) -> Self {
        Self::Assembly {
            reason: reason.into(),
        }
    }

    /// Create an OutputExists error.
    pub fn output_exists(path: PathBuf) -> Self {
        Self::OutputExists { path }
    }

    /// Check if this error is recoverable (the item is skipped, the run
    /// continues).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::PathNotFound { .. } | Self::UnsupportedFileType { .. } | Self::Conversion { .. }
        )
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfig { .. } => 1,
            Self::ConfigRead { .. } => 1,
            Self::ConfigParse { .. } => 1,
            Self::UnrecognizedOption { .. } => 1,
            Self::PathNotFound { .. } => 2,
            Self::UnsupportedFileType { .. } => 2,
            Self::Conversion { .. } => 3,
            Self::Assembly { .. } => 5,
            Self::OutputExists { .. } => 4,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::NothingToBind => 6,
            Self::Io { .. } => 5,
        }
    }
}
