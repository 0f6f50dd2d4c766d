use thiserror::Error;

use crate::constant::Operation;

pub use color_eyre::eyre::eyre;

#[derive(Debug, Error)]
pub enum Error {
    /// The transport handed over no reply buffer at all.
    #[error("Missing reply buffer")]
    MissingBuffer,

    /// The reply length is not a whole number of result records.
    #[error("Invalid reply buffer: {len} bytes is not a multiple of the {record_size}-byte record size")]
    MisalignedBuffer { len: usize, record_size: usize },

    /// A record was cut short.
    #[error("Unexpected end of reply")]
    UnexpectedEof,

    #[error("Index out of bounds: {index} is outside 0..{len}")]
    IndexOutOfBounds { index: i128, len: usize },

    #[error("Unknown {} result code {code} for event {index}", .operation.name())]
    UnknownResultCode {
        operation: Operation,
        index: u32,
        code: u32,
    },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(u8),

    #[error("Bad config error: {0}")]
    BadConfigError(String),

    #[error("Library bug: {0}")]
    LibraryBug(color_eyre::Report),
}

impl Error {
    /// Whether the error means the reply cannot be trusted at all.
    ///
    /// A fatal error comes from a protocol desync or a transport bug and must not
    /// be handled like an ordinary lookup miss.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::MissingBuffer
                | Error::MisalignedBuffer { .. }
                | Error::UnexpectedEof
                | Error::LibraryBug(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_faults_are_fatal() {
        assert!(Error::MissingBuffer.is_fatal());
        assert!(
            Error::MisalignedBuffer {
                len: 15,
                record_size: 8
            }
            .is_fatal()
        );
        assert!(Error::LibraryBug(eyre!("broken")).is_fatal());
    }

    #[test]
    fn range_faults_are_recoverable() {
        let err = Error::IndexOutOfBounds { index: -1, len: 2 };
        assert!(!err.is_fatal());
        assert_eq!(err.to_string(), "Index out of bounds: -1 is outside 0..2");
    }

    #[test]
    fn unknown_code_message_names_operation() {
        let err = Error::UnknownResultCode {
            operation: Operation::CreateTransfers,
            index: 4,
            code: 9999,
        };
        assert!(!err.is_fatal());
        assert_eq!(
            err.to_string(),
            "Unknown create_transfers result code 9999 for event 4"
        );
    }
}
