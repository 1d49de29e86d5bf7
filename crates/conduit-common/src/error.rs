use std::error::Error;
use std::fmt;
use std::io;

pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Errors produced while reading or writing protocol data. Every variant
/// carries a short call-site tag so that a protocol regression can be traced
/// back to the field that tripped it.
#[derive(Debug, Clone, PartialEq)]
pub enum ProtocolError {
    /// The read cursor was exhausted in the middle of a field.
    UnexpectedEof {
        context: &'static str,
        requested: usize,
        available: usize,
    },
    /// The bytes were structurally invalid: a varint that never terminated,
    /// an unknown tag, a sentinel holding a value it must not hold.
    Malformed {
        context: &'static str,
        reason: String,
    },
    /// A length prefix exceeded the ceiling declared for its collection.
    LimitExceeded {
        context: &'static str,
        limit: u32,
        actual: u32,
    },
    /// A signed length prefix was negative.
    NegativeLength {
        context: &'static str,
        length: i32,
    },
    /// No packet shape is registered for this ID.
    UnknownPacket { id: u32 },
    /// A decoded value failed a cross-field check, such as a pixel buffer
    /// not matching its declared image dimensions.
    InvariantViolation {
        context: &'static str,
        reason: String,
    },
}

impl ProtocolError {
    pub fn eof(context: &'static str, requested: usize, available: usize) -> Self {
        ProtocolError::UnexpectedEof {
            context,
            requested,
            available,
        }
    }

    pub fn malformed(context: &'static str, reason: impl Into<String>) -> Self {
        ProtocolError::Malformed {
            context,
            reason: reason.into(),
        }
    }

    pub fn limit(context: &'static str, limit: u32, actual: u32) -> Self {
        ProtocolError::LimitExceeded {
            context,
            limit,
            actual,
        }
    }

    pub fn negative(context: &'static str, length: i32) -> Self {
        ProtocolError::NegativeLength { context, length }
    }

    pub fn invariant(context: &'static str, reason: impl Into<String>) -> Self {
        ProtocolError::InvariantViolation {
            context,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::UnexpectedEof {
                context,
                requested,
                available,
            } => write!(
                f,
                "{}: unexpected EOF: requested {} bytes, {} available",
                context, requested, available
            ),
            ProtocolError::Malformed { context, reason } => {
                write!(f, "{}: malformed data: {}", context, reason)
            }
            ProtocolError::LimitExceeded {
                context,
                limit,
                actual,
            } => write!(
                f,
                "{}: length {} exceeds limit {}",
                context, actual, limit
            ),
            ProtocolError::NegativeLength { context, length } => {
                write!(f, "{}: negative length {}", context, length)
            }
            ProtocolError::UnknownPacket { id } => {
                write!(f, "no packet registered for ID {:#04x}", id)
            }
            ProtocolError::InvariantViolation { context, reason } => {
                write!(f, "{}: invariant violated: {}", context, reason)
            }
        }
    }
}

impl Error for ProtocolError {}

impl serde::ser::Error for ProtocolError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        ProtocolError::malformed("binding", msg.to_string())
    }
}

impl serde::de::Error for ProtocolError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        ProtocolError::malformed("binding", msg.to_string())
    }
}

impl From<io::Error> for ProtocolError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            ProtocolError::UnexpectedEof {
                context: "stream",
                requested: 0,
                available: 0,
            }
        } else {
            ProtocolError::Malformed {
                context: "stream",
                reason: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_context() {
        let err = ProtocolError::eof("entity link", 8, 3);
        let msg = err.to_string();
        assert!(msg.contains("entity link"));
        assert!(msg.contains("8"));
        assert!(msg.contains("3"));
    }

    #[test]
    fn test_limit_display() {
        let err = ProtocolError::limit("item can break", 65536, 70000);
        let msg = err.to_string();
        assert!(msg.contains("item can break"));
        assert!(msg.contains("65536"));
        assert!(msg.contains("70000"));
    }

    #[test]
    fn test_io_eof_maps_to_unexpected_eof() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "short read");
        let err: ProtocolError = io_err.into();
        assert!(matches!(err, ProtocolError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_other_io_errors_map_to_malformed() {
        let io_err = io::Error::new(io::ErrorKind::InvalidData, "bad gzip stream");
        let err: ProtocolError = io_err.into();
        assert!(matches!(err, ProtocolError::Malformed { .. }));
    }
}
