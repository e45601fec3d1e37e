use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationInvalidArgument,

    GitCommandFailed,

    InternalIoError,
    InternalImageError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::GitCommandFailed => "git.command_failed",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalImageError => "internal.image_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }

    /// Process exit code for an error that reaches `main`.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCode::ValidationInvalidArgument => 2,

            ErrorCode::GitCommandFailed => 20,

            ErrorCode::InternalIoError
            | ErrorCode::InternalImageError
            | ErrorCode::InternalUnexpected => 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        id: Option<String>,
    ) -> Self {
        let problem = problem.into();
        let details = serde_json::to_value(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.clone(),
            id,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::ValidationInvalidArgument, problem, details)
    }

    pub fn git_command_failed(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::GitCommandFailed,
            message,
            Value::Object(serde_json::Map::new()),
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let error = error.into();
        let message = match &context {
            Some(ctx) => format!("{}: {}", ctx, error),
            None => error.clone(),
        };
        let details = serde_json::to_value(InternalIoErrorDetails { error, context })
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::InternalIoError, message, details)
    }

    pub fn internal_image(error: impl Into<String>, path: impl Into<String>) -> Self {
        let error = error.into();
        let path = path.into();
        let details = serde_json::json!({
            "error": error,
            "path": path,
        });

        Self::new(
            ErrorCode::InternalImageError,
            format!("Failed to write image {}: {}", path, error),
            details,
        )
    }

    pub fn internal_unexpected(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InternalUnexpected,
            message,
            Value::Object(serde_json::Map::new()),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
