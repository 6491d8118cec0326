use thiserror::Error;

#[derive(Debug, Error)]
pub enum VkJsonError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON syntax error: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("{path}: expected {expected} but found {found}")]
    TypeMismatch {
        path:     String,
        expected: &'static str,
        found:    &'static str,
    },

    #[error("{path}: {value} is out of range for {ty}")]
    OutOfRange {
        path:  String,
        value: String,
        ty:    &'static str,
    },

    #[error("{path}: unknown {ty} enumerant {name}")]
    UnknownEnumerant {
        path: String,
        ty:   &'static str,
        name: String,
    },

    #[error("{path}: no parser for structure type {s_type}")]
    UnsupportedStructure {
        path:   String,
        s_type: String,
    },

    #[error("{path}: expected sType {expected} but found {found}")]
    StructureTypeMismatch {
        path:     String,
        expected: String,
        found:    String,
    },

    #[error("{path}: {count_field} is {declared} but {len} elements were given")]
    CountMismatch {
        path:        String,
        count_field: &'static str,
        declared:    u64,
        len:         usize,
    },

    #[error("{path}: {msg}")]
    InvalidData {
        path: String,
        msg:  String,
    },
}

impl VkJsonError {
    /// The JSON path of the offending value, if the error has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            VkJsonError::Io(_) | VkJsonError::Syntax(_) => None,
            VkJsonError::TypeMismatch { path, .. }
            | VkJsonError::OutOfRange { path, .. }
            | VkJsonError::UnknownEnumerant { path, .. }
            | VkJsonError::UnsupportedStructure { path, .. }
            | VkJsonError::StructureTypeMismatch { path, .. }
            | VkJsonError::CountMismatch { path, .. }
            | VkJsonError::InvalidData { path, .. } => Some(path),
        }
    }
}
