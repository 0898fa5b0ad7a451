use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClockError {
    #[error("Invalid argument for {field}: {value} ({reason})")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Index {index} out of bounds for shop of size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("{message}: {path}")]
    FileAccess {
        path: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ClockError {
    pub fn invalid_argument(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn file_not_found(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.display().to_string(),
            message: "File not found".to_string(),
            source,
        }
    }

    pub fn read_failed(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::file_not_found(path, source);
        }
        Self::FileAccess {
            path: path.display().to_string(),
            message: "Error reading the file".to_string(),
            source,
        }
    }

    pub fn write_failed(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.display().to_string(),
            message: "Error writing to the file".to_string(),
            source,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidArgument { .. } | Self::IndexOutOfBounds { .. } => ErrorSeverity::High,
            Self::ConfigError { .. } => ErrorSeverity::High,
            Self::FileAccess { .. } => ErrorSeverity::Critical,
            Self::SerializationError(_) => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { field, value, .. } => {
                format!("{} 的值 {} 不在允許範圍內", field, value)
            }
            Self::IndexOutOfBounds { index, size } => {
                format!("索引 {} 超出範圍 (共 {} 個時鐘)", index, size)
            }
            Self::FileAccess { path, message, .. } => format!("{}: {}", message, path),
            Self::ConfigError { message } => format!("配置錯誤: {}", message),
            Self::SerializationError(e) => format!("輸出序列化失敗: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => {
                "Check that every clock is H:M:S with hour 0-23, minute and second 0-59"
            }
            Self::IndexOutOfBounds { .. } => "Use an index between 0 and the shop size minus one",
            Self::FileAccess { .. } => "Make sure the file exists and the directory is writable",
            Self::ConfigError { .. } => "Review the configuration file and command-line flags",
            Self::SerializationError(_) => "Try the plain text output format instead",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClockError>;
