//! Error types for idrac-snmp.
//!
//! All errors are `#[non_exhaustive]` to allow adding new variants without breaking changes.

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Share location validation error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareErrorKind {
    /// Share path (UNC/NFS) is empty.
    EmptyPath,
    /// Local mount point is empty.
    EmptyMountPoint,
    /// Share user is empty.
    EmptyUser,
    /// Share password is empty.
    EmptyPassword,
}

impl std::fmt::Display for ShareErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "share path is empty"),
            Self::EmptyMountPoint => write!(f, "local mount point is empty"),
            Self::EmptyUser => write!(f, "share user is empty"),
            Self::EmptyPassword => write!(f, "share password is empty"),
        }
    }
}

/// Controller response error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseErrorKind {
    /// Response body was empty where content was required.
    EmptyBody,
    /// Response body was not valid JSON.
    NotJson,
    /// Response carried no usable status information.
    MissingStatus,
}

impl std::fmt::Display for ResponseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBody => write!(f, "empty response body"),
            Self::NotJson => write!(f, "response body is not valid JSON"),
            Self::MissingStatus => write!(f, "response carries no status information"),
        }
    }
}

/// Library error type.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// HTTP transport error while talking to the controller.
    #[error("HTTP error{}: {source}", endpoint.as_deref().map(|e| format!(" for {}", e)).unwrap_or_default())]
    Http {
        endpoint: Option<Box<str>>,
        #[source]
        source: reqwest::Error,
    },

    /// Controller rejected the supplied credentials.
    #[error("authentication rejected by {endpoint}")]
    AuthRejected { endpoint: Box<str> },

    /// Controller response could not be interpreted.
    #[error("malformed response from {endpoint}: {kind}")]
    Response {
        endpoint: Box<str>,
        kind: ResponseErrorKind,
    },

    /// Network share location failed validation.
    #[error("invalid share location: {kind}")]
    Share { kind: ShareErrorKind },

    /// Invalid value supplied for a configuration field.
    #[error("invalid value for {field}: {value:?} (choose from {choices})")]
    InvalidChoice {
        field: &'static str,
        value: Box<str>,
        choices: &'static str,
    },
}

impl Error {
    /// Create an HTTP transport error.
    pub fn http(endpoint: Option<impl Into<Box<str>>>, source: reqwest::Error) -> Self {
        Self::Http {
            endpoint: endpoint.map(Into::into),
            source,
        }
    }

    /// Create a malformed-response error.
    pub fn response(endpoint: impl Into<Box<str>>, kind: ResponseErrorKind) -> Self {
        Self::Response {
            endpoint: endpoint.into(),
            kind,
        }
    }

    /// Create a share validation error.
    pub fn share(kind: ShareErrorKind) -> Self {
        Self::Share { kind }
    }

    /// Create an invalid-choice error for a configuration field.
    pub fn invalid_choice(
        field: &'static str,
        value: impl Into<Box<str>>,
        choices: &'static str,
    ) -> Self {
        Self::InvalidChoice {
            field,
            value: value.into(),
            choices,
        }
    }

    /// Get the endpoint this error refers to, if it has one.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Http { endpoint, .. } => endpoint.as_deref(),
            Self::AuthRejected { endpoint } => Some(endpoint),
            Self::Response { endpoint, .. } => Some(endpoint),
            _ => None,
        }
    }
}
