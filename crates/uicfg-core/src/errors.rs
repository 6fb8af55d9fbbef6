use thiserror::Error;
use uicfg_core_types::RequestId;

/// Result type alias using the canonical ExError
pub type ExResult<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that transports hand back to
/// callers and tests assert on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    NotFound,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling and optional
/// context (operation, entity, request) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (row id for attribute rows)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// True when the error means "no row with that id"
    pub fn is_not_found(&self) -> bool {
        self.kind == ExErrorKind::NotFound
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {:?}", self.code(), self.kind)?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for UI configuration operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiConfigError {
    /// No attribute row has the requested id
    #[error("UI configuration with id {id} not found")]
    RowNotFound { id: i64 },

    /// The backing store is unreachable or rejected the operation
    #[error("Storage failure: {reason}")]
    Storage { reason: String },

    /// Caller supplied a malformed request
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Encoding or decoding a payload failed
    #[error("Serialization failure: {reason}")]
    Serialization { reason: String },
}

impl From<UiConfigError> for ExError {
    fn from(err: UiConfigError) -> Self {
        let message = err.to_string();
        match err {
            UiConfigError::RowNotFound { id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(id.to_string())
                .with_message(message),
            UiConfigError::Storage { .. } => {
                ExError::new(ExErrorKind::Persistence).with_message(message)
            }
            UiConfigError::InvalidInput { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }
            UiConfigError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for UiConfigError {
    fn from(err: serde_json::Error) -> Self {
        UiConfigError::Serialization {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_message() {
        let err = UiConfigError::RowNotFound { id: 7 };
        assert_eq!(err.to_string(), "UI configuration with id 7 not found");
    }

    #[test]
    fn test_display_includes_code_and_context() {
        let err = ExError::new(ExErrorKind::Persistence)
            .with_op("sqlite")
            .with_message("disk I/O error");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_PERSISTENCE]"));
        assert!(rendered.contains("in operation 'sqlite'"));
        assert!(rendered.contains("disk I/O error"));
    }

    #[test]
    fn test_request_id_context() {
        let request_id = RequestId::from_string("req-9".to_string());
        let err = ExError::new(ExErrorKind::InvalidInput).with_request_id(request_id.clone());
        assert_eq!(err.request_id(), Some(&request_id));
        assert!(err.to_string().contains("request_id: req-9"));
    }
}
