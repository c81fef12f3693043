#[derive(Debug)]
/// Represents all errors that can occur while loading a system.
pub enum SystemError {
    /// The system file could not be read.
    Io {
        /// The file that was being read.
        path:   String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The system text is not valid JSON.
    Json(serde_json::Error),
    /// The JSON document is valid but its root is not an object.
    RootNotObject {
        /// The kind of value found at the root instead.
        found: &'static str,
    },
}

impl std::fmt::Display for SystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read the system file '{path}': {source}.")
            },
            Self::Json(e) => write!(f, "The system is not valid JSON: {e}."),
            Self::RootNotObject { found } => write!(f,
                                                    "The root of a system must be an object of named nodes, but found {found}."),
        }
    }
}

impl std::error::Error for SystemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            Self::RootNotObject { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SystemError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
