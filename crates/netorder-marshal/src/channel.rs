//! Byte channels with a sticky failure state.
//!
//! A channel never reports failure from an individual read or write. Instead
//! it moves into a failed [`ChannelState`] and stays there, ignoring further
//! operations, until [`Channel::clear`] is called. Callers check the state
//! after one or more operations with [`crate::assert_channel_ok`].

use std::fmt;
use std::io::{self, ErrorKind, Read, Write};

use bytes::{Buf, BufMut};
use tracing::{debug, trace};

/// Current status of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelState {
    /// Every operation so far completed in full.
    #[default]
    Good,
    /// The source ran out of bytes in the middle of a read.
    Eof,
    /// The underlying sink or source reported an error.
    Fault(ErrorKind),
}

impl ChannelState {
    /// Returns true if no operation has failed.
    pub fn is_ok(self) -> bool {
        matches!(self, ChannelState::Good)
    }

    /// Returns true if a read hit end of data.
    pub fn is_eof(self) -> bool {
        matches!(self, ChannelState::Eof)
    }
}

impl fmt::Display for ChannelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelState::Good => write!(f, "good"),
            ChannelState::Eof => write!(f, "end of data"),
            ChannelState::Fault(kind) => write!(f, "fault ({kind})"),
        }
    }
}

/// Status shared by input and output channels.
pub trait Channel {
    /// Current state.
    fn state(&self) -> ChannelState;

    /// Reset the state to [`ChannelState::Good`].
    fn clear(&mut self);

    /// Returns true if no operation has failed since the last `clear`.
    fn is_ok(&self) -> bool {
        self.state().is_ok()
    }
}

/// A sequential byte sink.
pub trait OutputChannel: Channel {
    /// Append `bytes`. On failure the state is updated instead of returning
    /// an error. Does nothing while the channel is failed.
    fn write_bytes(&mut self, bytes: &[u8]);
}

/// A sequential byte source.
pub trait InputChannel: Channel {
    /// Fill `buf` completely. Returns false, and updates the state, if the
    /// source could not supply `buf.len()` bytes. Does nothing while the
    /// channel is failed.
    fn read_bytes(&mut self, buf: &mut [u8]) -> bool;
}

/// Retry behaviour for [`StreamChannel`].
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    /// Retry reads and writes that fail with `ErrorKind::Interrupted`. Default: true.
    pub retry_interrupted: bool,
    /// Retry reads and writes that fail with `ErrorKind::WouldBlock`. Default: false.
    pub retry_would_block: bool,
}

impl ChannelConfig {
    fn should_retry(&self, kind: ErrorKind) -> bool {
        match kind {
            ErrorKind::Interrupted => self.retry_interrupted,
            ErrorKind::WouldBlock => self.retry_would_block,
            _ => false,
        }
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            retry_interrupted: true,
            retry_would_block: false,
        }
    }
}

/// Channel over any [`Read`] and/or [`Write`] stream.
pub struct StreamChannel<T> {
    inner: T,
    state: ChannelState,
    last_error: Option<io::Error>,
    config: ChannelConfig,
}

impl<T> StreamChannel<T> {
    /// Wrap a stream with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, ChannelConfig::default())
    }

    /// Wrap a stream with explicit configuration.
    pub fn with_config(inner: T, config: ChannelConfig) -> Self {
        Self {
            inner,
            state: ChannelState::Good,
            last_error: None,
            config,
        }
    }

    /// The error that moved the channel into its failed state, if any.
    pub fn last_error(&self) -> Option<&io::Error> {
        self.last_error.as_ref()
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the channel and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Current channel configuration.
    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    fn fail(&mut self, state: ChannelState, err: io::Error, wanted: usize, got: usize) {
        debug!(%state, wanted, got, error = %err, "stream channel failed");
        self.state = state;
        self.last_error = Some(err);
    }
}

impl<T: Write> StreamChannel<T> {
    /// Flush the underlying stream, recording a fault on failure.
    pub fn flush(&mut self) {
        if !self.state.is_ok() {
            return;
        }
        loop {
            match self.inner.flush() {
                Ok(()) => return,
                Err(err) if self.config.should_retry(err.kind()) => continue,
                Err(err) => {
                    self.fail(ChannelState::Fault(err.kind()), err, 0, 0);
                    return;
                }
            }
        }
    }
}

impl<T> Channel for StreamChannel<T> {
    fn state(&self) -> ChannelState {
        self.state
    }

    fn clear(&mut self) {
        trace!(state = %self.state, "clearing stream channel");
        self.state = ChannelState::Good;
        self.last_error = None;
    }
}

impl<T: Write> OutputChannel for StreamChannel<T> {
    fn write_bytes(&mut self, bytes: &[u8]) {
        if !self.state.is_ok() {
            return;
        }

        let mut offset = 0usize;
        while offset < bytes.len() {
            match self.inner.write(&bytes[offset..]) {
                Ok(0) => {
                    let err = io::Error::from(ErrorKind::WriteZero);
                    self.fail(ChannelState::Fault(ErrorKind::WriteZero), err, bytes.len(), offset);
                    return;
                }
                Ok(n) => offset += n,
                Err(err) if self.config.should_retry(err.kind()) => continue,
                Err(err) => {
                    self.fail(ChannelState::Fault(err.kind()), err, bytes.len(), offset);
                    return;
                }
            }
        }
    }
}

impl<T: Read> InputChannel for StreamChannel<T> {
    fn read_bytes(&mut self, buf: &mut [u8]) -> bool {
        if !self.state.is_ok() {
            return false;
        }

        let mut filled = 0usize;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => {
                    let err = io::Error::from(ErrorKind::UnexpectedEof);
                    self.fail(ChannelState::Eof, err, buf.len(), filled);
                    return false;
                }
                Ok(n) => filled += n,
                Err(err) if self.config.should_retry(err.kind()) => continue,
                Err(err) => {
                    self.fail(ChannelState::Fault(err.kind()), err, buf.len(), filled);
                    return false;
                }
            }
        }
        true
    }
}

impl<T> fmt::Debug for StreamChannel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamChannel")
            .field("state", &self.state)
            .field("config", &self.config)
            .finish()
    }
}

/// Channel over an in-memory [`Buf`] (input) or [`BufMut`] (output).
///
/// Growable sinks such as `BytesMut` and `Vec<u8>` never fail. Fixed sinks
/// such as `&mut [u8]` fail with `WriteZero` once a write does not fit.
#[derive(Debug)]
pub struct BufChannel<B> {
    inner: B,
    state: ChannelState,
}

impl<B> BufChannel<B> {
    /// Wrap a buffer.
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            state: ChannelState::Good,
        }
    }

    /// Borrow the underlying buffer.
    pub fn get_ref(&self) -> &B {
        &self.inner
    }

    /// Mutably borrow the underlying buffer.
    pub fn get_mut(&mut self) -> &mut B {
        &mut self.inner
    }

    /// Consume the channel and return the inner buffer.
    pub fn into_inner(self) -> B {
        self.inner
    }

    fn fail(&mut self, state: ChannelState, wanted: usize, got: usize) {
        debug!(%state, wanted, got, "buffer channel failed");
        self.state = state;
    }
}

impl<B: Buf> BufChannel<B> {
    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.inner.remaining()
    }
}

impl<B> Channel for BufChannel<B> {
    fn state(&self) -> ChannelState {
        self.state
    }

    fn clear(&mut self) {
        trace!(state = %self.state, "clearing buffer channel");
        self.state = ChannelState::Good;
    }
}

impl<B: BufMut> OutputChannel for BufChannel<B> {
    fn write_bytes(&mut self, bytes: &[u8]) {
        if !self.state.is_ok() {
            return;
        }
        let room = self.inner.remaining_mut();
        if room < bytes.len() {
            self.fail(ChannelState::Fault(ErrorKind::WriteZero), bytes.len(), room);
            return;
        }
        self.inner.put_slice(bytes);
    }
}

impl<B: Buf> InputChannel for BufChannel<B> {
    fn read_bytes(&mut self, buf: &mut [u8]) -> bool {
        if !self.state.is_ok() {
            return false;
        }
        let available = self.inner.remaining();
        if available < buf.len() {
            self.inner.advance(available);
            self.fail(ChannelState::Eof, buf.len(), available);
            return false;
        }
        self.inner.copy_to_slice(buf);
        true
    }
}
