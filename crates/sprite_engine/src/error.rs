use thiserror::Error;

/// Errors raised by the sprite model, codec and stores.
#[derive(Error, Debug)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Validation Errors ===
    #[error("Invalid shape: {message}")]
    InvalidShape { message: String },

    #[error("Color index {index} out of range (0..16)")]
    InvalidColor { index: u8 },

    #[error("Sprite #{index} outside table of {count}")]
    SpriteIndex { index: usize, count: usize },

    // === Loading Errors ===
    #[error("Bitmap length mismatch: expected {expected} bytes, got {actual}")]
    Decode { expected: usize, actual: usize },

    // === Store Errors ===
    #[error("Name '{name}' already exists")]
    DuplicateName { name: String },

    #[error("Project {id} not found")]
    NotFound { id: i64 },

    // === External Errors ===
    #[error("Failed to serialize store: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Failed to parse store: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Invalid base64 blob: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("{0}")]
    Generic(String),
}

/// Result type alias for sprite engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

// === Convenience constructors ===
impl EngineError {
    pub fn invalid_shape(msg: impl Into<String>) -> Self {
        Self::InvalidShape { message: msg.into() }
    }

    pub fn decode(expected: usize, actual: usize) -> Self {
        Self::Decode { expected, actual }
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Create a generic error from any displayable type
    pub fn generic(msg: impl std::fmt::Display) -> Self {
        Self::Generic(msg.to_string())
    }

    /// True for failures the caller can resolve by picking another name.
    pub fn is_duplicate_name(&self) -> bool {
        matches!(self, Self::DuplicateName { .. })
    }
}
