//! Fail-fast checks run by callers after marshalling.

use crate::channel::Channel;
use crate::error::{MarshalError, Result};

/// Return `Err(err)` when `fail` is true.
#[inline]
pub fn raise_if<E>(fail: bool, err: E) -> std::result::Result<(), E> {
    if fail {
        Err(err)
    } else {
        Ok(())
    }
}

/// Fail with [`MarshalError::IoFail`] if `channel` is in a failed state.
///
/// Call this after every [`crate::marshal`]/[`crate::unmarshal`], or once after
/// a batch of them.
#[inline]
pub fn assert_channel_ok<C: Channel + ?Sized>(channel: &C) -> Result<()> {
    let state = channel.state();
    raise_if(!state.is_ok(), MarshalError::IoFail { state })
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;
    use crate::channel::{BufChannel, ChannelState, InputChannel};

    #[test]
    fn raise_if_passes_error_through() {
        assert_eq!(raise_if(false, "boom"), Ok(()));
        assert_eq!(raise_if(true, "boom"), Err("boom"));
    }

    #[test]
    fn healthy_channel_passes() {
        let channel = BufChannel::new(&b"ok"[..]);
        assert!(assert_channel_ok(&channel).is_ok());
    }

    #[test]
    fn failed_channel_raises_io_fail() {
        let mut channel = BufChannel::new(&b"x"[..]);
        let mut buf = [0u8; 2];
        channel.read_bytes(&mut buf);

        let err = assert_channel_ok(&channel).unwrap_err();
        assert_eq!(err.to_string(), "io fail");
        assert_eq!(err.state(), ChannelState::Eof);
    }

    #[test]
    fn works_through_trait_object() {
        let mut storage = [0u8; 0];
        let mut channel = BufChannel::new(&mut storage[..]);
        crate::channel::OutputChannel::write_bytes(&mut channel, &[1]);

        let dyn_channel: &dyn Channel = &channel;
        let err = assert_channel_ok(dyn_channel).unwrap_err();
        assert_eq!(err.state(), ChannelState::Fault(ErrorKind::WriteZero));
    }
}
