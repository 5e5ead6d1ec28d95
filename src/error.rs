use thiserror::Error;

#[derive(Error, Debug)]
pub enum IssuesError {
    #[error("Invalid repository path '{0}': expected <organization>/<repository>")]
    InvalidPath(String),

    #[error("No GitHub token found. Set GITHUB_TOKEN or run 'gh-issues auth --token <TOKEN>'.")]
    MissingToken,

    #[error("Cannot fetch more issues: {0}")]
    Precondition(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl IssuesError {
    /// True for failures where the request itself never produced a usable
    /// GraphQL response.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            IssuesError::Http { .. } | IssuesError::Request(_) | IssuesError::Decode(_)
        )
    }
}

pub type IssuesResult<T> = Result<T, IssuesError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> IssuesResult<T>;
    fn with_context<F>(self, f: F) -> IssuesResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> IssuesResult<T> {
        self.map_err(|e| IssuesError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> IssuesResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| IssuesError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> IssuesResult<T> {
        self.ok_or_else(|| IssuesError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> IssuesResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| IssuesError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! issues_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::IssuesError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::IssuesError::$error_type(format!($fmt, $($arg)*))
    };
}
