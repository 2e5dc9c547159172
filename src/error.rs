use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "config.base_url", "generatedVoice.audioFileUrl")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., actor id, endpoint)
    pub details: Option<String>,
    /// Source of the error (e.g., "catalog", "generation", "balance")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Coarse error taxonomy surfaced to the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Catalog or balance read failed.
    Fetch,
    /// Synthesis failed in transport or returned a malformed result.
    Generation,
    /// The session could not be set up (bad key, bad base URL).
    Configuration,
}

/// Unified error type for the studio runtime.
///
/// None of these are fatal: every operation that returns one leaves its
/// component in a stable, displayable state.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Fetch error: {message}{}", format_context(.context))]
    Fetch {
        message: String,
        context: ErrorContext,
    },

    #[error("Generation error: {message}{}", format_context(.context))]
    Generation {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Remote error: HTTP {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Create a new fetch error with structured context
    pub fn fetch_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Fetch {
            message: msg.into(),
            context,
        }
    }

    /// Create a new generation error with structured context
    pub fn generation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Generation {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. }
            | Error::Fetch { context, .. }
            | Error::Generation { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Re-tag a low-level failure as a catalog/balance read failure.
    pub(crate) fn into_fetch(self, source: &str) -> Self {
        match self {
            e @ (Error::Fetch { .. } | Error::Configuration { .. }) => e,
            other => Error::fetch_with_context(
                other.to_string(),
                ErrorContext::new().with_source(source),
            ),
        }
    }

    /// Re-tag a low-level failure as a synthesis failure.
    pub(crate) fn into_generation(self, actor_id: &str) -> Self {
        match self {
            e @ (Error::Generation { .. } | Error::Configuration { .. }) => e,
            other => Error::generation_with_context(
                other.to_string(),
                ErrorContext::new()
                    .with_source("generation")
                    .with_details(format!("actor: {}", actor_id)),
            ),
        }
    }

    /// Which bucket of the taxonomy this error falls into.
    ///
    /// Raw transport, remote and serialization errors only escape from
    /// [`crate::transport::ProviderTransport`] calls made directly; the
    /// workflow components re-tag them before returning.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Configuration { .. } => ErrorKind::Configuration,
            Error::Generation { .. } => ErrorKind::Generation,
            Error::Fetch { .. }
            | Error::Transport(_)
            | Error::Remote { .. }
            | Error::Serialization(_) => ErrorKind::Fetch,
        }
    }
}
