//! Core error types for Airgraph.

use thiserror::Error;

/// Result type alias using `AirgraphError`.
pub type AirgraphResult<T> = std::result::Result<T, AirgraphError>;

/// Core error type for Airgraph operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AirgraphError {
    /// A vertex or edge handle is not live in the graph it was used with.
    ///
    /// Covers handles that never existed, handles already removed, and
    /// handles issued by a different graph instance.
    #[error("InvalidHandle: {handle}")]
    InvalidHandle {
        /// Display form of the offending handle.
        handle: String,
    },

    /// Vertex removal refused because edges still touch the vertex.
    #[error("VertexHasIncidentEdges: {vertex} has {incident} incident edge(s)")]
    VertexHasIncidentEdges {
        /// Display form of the vertex handle.
        vertex: String,
        /// Number of edges incident to the vertex at the time of the call.
        incident: usize,
    },

    /// Invalid value provided by a caller.
    #[error("ValueError: {0}")]
    ValueError(String),

    /// A command line could not be understood.
    #[error("CommandError: {0}")]
    CommandError(String),

    /// Configuration could not be loaded or is inconsistent.
    #[error("ConfigError: {0}")]
    ConfigError(String),

    /// Internal error (bug in Airgraph).
    #[error("InternalError: {0}")]
    InternalError(String),

    /// IO error.
    #[error("IoError: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("SerdeJsonError: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

impl AirgraphError {
    /// Create a new `InvalidHandle` error from any displayable handle.
    pub fn invalid_handle(handle: impl std::fmt::Display) -> Self {
        Self::InvalidHandle {
            handle: handle.to_string(),
        }
    }

    /// Create a new `VertexHasIncidentEdges` error.
    pub fn vertex_has_incident_edges(vertex: impl std::fmt::Display, incident: usize) -> Self {
        Self::VertexHasIncidentEdges {
            vertex: vertex.to_string(),
            incident,
        }
    }

    /// Create a new `ValueError`.
    pub fn value_error<S: Into<String>>(msg: S) -> Self {
        Self::ValueError(msg.into())
    }

    /// Create a new `CommandError`.
    pub fn command<S: Into<String>>(msg: S) -> Self {
        Self::CommandError(msg.into())
    }

    /// Create a new `ConfigError`.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a new `InternalError`.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::InternalError(msg.into())
    }

    /// Whether this error reports a stale or foreign handle.
    pub const fn is_invalid_handle(&self) -> bool {
        matches!(self, Self::InvalidHandle { .. })
    }

    /// Whether this error reports a refused removal of a connected vertex.
    pub const fn is_vertex_has_incident_edges(&self) -> bool {
        matches!(self, Self::VertexHasIncidentEdges { .. })
    }
}

/// Ensure a condition holds, returning an error if not.
///
/// `ensure!(cond, msg)` fails with a `ValueError`; `ensure!(cond, Variant: fmt, args..)`
/// fails with the named string variant.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $variant:ident: $($msg:tt)*) => {
        if !$cond {
            return Err($crate::AirgraphError::$variant(format!($($msg)*)));
        }
    };
    ($cond:expr, $msg:expr) => {
        if !$cond {
            return Err($crate::AirgraphError::ValueError($msg.to_string()));
        }
    };
}

/// Return early with a `ValueError`.
#[macro_export]
macro_rules! value_err {
    ($($arg:tt)*) => {
        return Err($crate::AirgraphError::ValueError(format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positive(n: i64) -> AirgraphResult<i64> {
        ensure!(n > 0, "must be positive");
        Ok(n)
    }

    fn short_label(len: usize) -> AirgraphResult<usize> {
        ensure!(len >= 4, ConfigError: "label too short: {}", len);
        Ok(len)
    }

    fn never(n: i64) -> AirgraphResult<i64> {
        if n >= 0 {
            value_err!("rejected {}", n);
        }
        Ok(n)
    }

    #[test]
    fn test_error_display() {
        let err = AirgraphError::value_error("Distance must be a valid number.");
        assert_eq!(err.to_string(), "ValueError: Distance must be a valid number.");

        let err = AirgraphError::vertex_has_incident_edges("v1@g2", 3);
        assert_eq!(
            err.to_string(),
            "VertexHasIncidentEdges: v1@g2 has 3 incident edge(s)"
        );
    }

    #[test]
    fn test_error_predicates() {
        assert!(AirgraphError::invalid_handle("e4@g1").is_invalid_handle());
        assert!(!AirgraphError::internal("x").is_invalid_handle());
        assert!(
            AirgraphError::vertex_has_incident_edges("v0@g1", 1).is_vertex_has_incident_edges()
        );
    }

    #[test]
    fn test_macros() {
        assert_eq!(positive(3).unwrap(), 3);
        assert!(matches!(positive(0), Err(AirgraphError::ValueError(_))));
        assert!(matches!(never(1), Err(AirgraphError::ValueError(msg)) if msg == "rejected 1"));
        assert_eq!(never(-1).unwrap(), -1);

        assert_eq!(short_label(8).unwrap(), 8);
        assert!(matches!(
            short_label(2),
            Err(AirgraphError::ConfigError(msg)) if msg == "label too short: 2"
        ));
    }

    #[test]
    fn test_from_conversions() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(matches!(AirgraphError::from(io), AirgraphError::IoError(_)));

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(AirgraphError::from(json), AirgraphError::SerdeJsonError(_)));
    }
}
