use std::io;

use crate::channel::ChannelState;

/// Errors raised by the fail-fast channel check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MarshalError {
    /// A channel hit end of data or an I/O fault during marshalling.
    ///
    /// `state` is kept for diagnostics only; the failure is not subdivided.
    #[error("io fail")]
    IoFail { state: ChannelState },
}

impl MarshalError {
    /// Channel state captured when the error was raised.
    pub fn state(&self) -> ChannelState {
        match *self {
            MarshalError::IoFail { state } => state,
        }
    }
}

impl From<MarshalError> for io::Error {
    fn from(err: MarshalError) -> Self {
        let kind = match err.state() {
            ChannelState::Eof => io::ErrorKind::UnexpectedEof,
            ChannelState::Fault(kind) => kind,
            ChannelState::Good => io::ErrorKind::Other,
        };
        io::Error::new(kind, err)
    }
}

pub type Result<T> = std::result::Result<T, MarshalError>;
