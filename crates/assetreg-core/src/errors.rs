use assetreg_core_types::RequestId;
use thiserror::Error;

/// Result type alias using RegistryError
pub type Result<T> = std::result::Result<T, RegistryError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that the shell prints and tests
/// assert on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    /// One or more expected columns are absent from a table header
    MissingColumns,
    /// A field name given by the caller does not name a known column
    UnknownField,

    // Session state
    /// The asset feed could not be loaded for this session
    FeedUnavailable,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    ExternalService,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MissingColumns => "ERR_MISSING_COLUMNS",
            ExErrorKind::UnknownField => "ERR_UNKNOWN_FIELD",
            ExErrorKind::FeedUnavailable => "ERR_FEED_UNAVAILABLE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context for
/// the user-visible message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    columns: Option<Vec<String>>,
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
            columns: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (employee identifier, file path, URL)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context (the shell attaches it before printing)
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add the names of the columns involved (used for MissingColumns)
    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = Some(columns);
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

    /// Get the column names involved, if any
    pub fn columns(&self) -> Option<&[String]> {
        self.columns.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " ({})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " [request {}]", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for roster and report operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// Add was called with a blank employee identifier
    #[error("Employee ID cannot be empty or whitespace-only")]
    EmployeeIdMissing,

    /// Expected columns are absent from the table header
    #[error("Missing required columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// The asset feed was not loaded for this session
    #[error("Asset feed is not loaded: {reason}")]
    FeedUnavailable { reason: String },

    /// A caller-supplied field name does not match any known column
    #[error("Unknown field: {name}")]
    UnknownField { name: String },
}

impl From<RegistryError> for ExError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::EmployeeIdMissing => ExError::new(ExErrorKind::InvalidInput)
                .with_op("roster_add")
                .with_message("Employee ID cannot be empty or whitespace-only"),

            RegistryError::MissingColumns { columns } => {
                ExError::new(ExErrorKind::MissingColumns)
                    .with_message(format!("Missing required columns: {}", columns.join(", ")))
                    .with_columns(columns)
            }

            RegistryError::FeedUnavailable { reason } => {
                ExError::new(ExErrorKind::FeedUnavailable)
                    .with_message(format!("Asset feed is not loaded: {}", reason))
            }

            RegistryError::UnknownField { name } => ExError::new(ExErrorKind::UnknownField)
                .with_entity_id(name.clone())
                .with_message(format!("Unknown field: {}", name)),
        }
    }
}
