//! Unified error types for chromatype.
//!
//! Configuration problems (malformed datasets, missing question kinds, short
//! description sets) are surfaced as typed failures distinct from computation
//! results. Resource degradation (a missing font file) is handled inline by
//! the renderer and never reaches this hierarchy.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for chromatype operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ChromatypeError {
    /// Errors loading or validating quiz datasets
    #[error("Failed to load quiz data: {context}")]
    Data {
        context: String,
        #[source]
        source: DataErrorKind,
    },

    /// Errors producing the result card image
    #[error("Result card rendering failed: {context}")]
    Render {
        context: String,
        #[source]
        source: RenderErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific dataset error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DataErrorKind {
    #[error("Missing required collection: {collection}")]
    MissingCollection { collection: String },

    #[error("Question pool is empty")]
    EmptyPool,

    #[error("No usable question pair for kind: {kind}")]
    MissingKind { kind: String },

    #[error(
        "Unknown question kind '{value}' (expected axis R/G/B + polarity P/S + optional world)"
    )]
    InvalidKind { value: String },

    #[error("Description set for axis {axis} has {found} entries, expected exactly 10")]
    ShortDescriptionSet { axis: String, found: usize },

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),
}

/// Specific render error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RenderErrorKind {
    #[error("SVG composition failed to parse: {0}")]
    SvgParse(String),

    #[error("Pixmap allocation failed for {width}x{height}")]
    PixmapAlloc { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    PngEncode(String),
}

/// Convenient Result type for chromatype operations
pub type Result<T> = std::result::Result<T, ChromatypeError>;

impl ChromatypeError {
    /// Create a data error with context
    pub fn data(context: impl Into<String>, source: DataErrorKind) -> Self {
        Self::Data {
            context: context.into(),
            source,
        }
    }

    /// Create a data error for an unknown wire kind string
    pub fn invalid_kind(value: impl Into<String>) -> Self {
        Self::data(
            "parsing question kind",
            DataErrorKind::InvalidKind {
                value: value.into(),
            },
        )
    }

    /// Create a render error with context
    pub fn render(context: impl Into<String>, source: RenderErrorKind) -> Self {
        Self::Render {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for ChromatypeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ChromatypeError {
    fn from(err: serde_json::Error) -> Self {
        Self::data(
            "JSON deserialization",
            DataErrorKind::InvalidJson(err.to_string()),
        )
    }
}

/// Extension trait for adding context to errors.
///
/// Context strings chain front-to-back, tracing the path through the code
/// that led to the failure.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ChromatypeError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: ChromatypeError, new_ctx: &str) -> ChromatypeError {
    match err {
        ChromatypeError::Data {
            context: existing,
            source,
        } => ChromatypeError::Data {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ChromatypeError::Render {
            context: existing,
            source,
        } => ChromatypeError::Render {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ChromatypeError::Io {
            path,
            message,
            source,
        } => ChromatypeError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        ChromatypeError::Config(msg) => ChromatypeError::Config(chain_context(new_ctx, &msg)),
        ChromatypeError::Validation(msg) => {
            ChromatypeError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings together.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
