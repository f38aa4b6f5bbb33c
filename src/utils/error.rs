use thiserror::Error;

#[derive(Error, Debug)]
pub enum HunterError {
    #[error("Unparseable phone number '{input}': {source}")]
    Unparseable {
        input: String,
        #[source]
        source: phonenumber::ParseError,
    },

    #[error("Phone number '{input}' is not a valid assigned number")]
    InvalidNumber { input: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Metadata error: {message}")]
    MetadataError { message: String },

    #[error("Invalid value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad input from the user; nothing was written.
    High,
    /// The environment failed us (filesystem, serialization).
    Critical,
}

impl HunterError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HunterError::IoError(_) | HunterError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    /// Message shown on the console, in the tool's display language.
    pub fn user_friendly_message(&self) -> String {
        match self {
            HunterError::Unparseable { .. } => {
                "❌ رقم غير صالح. تأكد من الصيغة الدولية (مثال: +9665xxxxxxx)".to_string()
            }
            HunterError::InvalidNumber { .. } => "❌ رقم غير صحيح أو لا يمكن تحليله.".to_string(),
            other => format!("❌ {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HunterError::Unparseable { .. } => {
                "Pass the number in international format with a leading '+' and country code"
            }
            HunterError::InvalidNumber { .. } => {
                "Check the digits; the number is not assigned in its numbering plan"
            }
            HunterError::IoError(_) => "Check that the output directory is writable",
            HunterError::SerializationError(_) => "Report this as a bug",
            HunterError::MetadataError { .. } => "Fix the metadata TOML file or drop --metadata",
            HunterError::InvalidConfigValueError { .. } => "Fix the command-line arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, HunterError>;
