//! Remote candidate buffering
//!
//! Remote candidates may arrive before the remote description they refer to.
//! They are queued until the description has been applied and then replayed in
//! arrival order.

use std::collections::VecDeque;

use crate::peer::IceCandidate;

/// Progress of the remote description on the connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RemoteDescription {
    None,
    /// Being applied or its buffered candidates are being replayed
    Applying,
    Applied,
}

#[derive(Debug)]
pub(crate) struct CandidateBuffer {
    remote: RemoteDescription,
    pending: VecDeque<IceCandidate>,
}

impl CandidateBuffer {
    pub(crate) fn new() -> Self {
        Self {
            remote: RemoteDescription::None,
            pending: VecDeque::new(),
        }
    }

    pub(crate) fn remote(&self) -> RemoteDescription {
        self.remote
    }

    pub(crate) fn begin_remote_description(&mut self) {
        self.remote = RemoteDescription::Applying;
    }

    /// The platform rejected the description; keep buffering
    pub(crate) fn abort_remote_description(&mut self) {
        self.remote = RemoteDescription::None;
    }

    /// Returns the candidate back if it can be applied right away
    pub(crate) fn admit(&mut self, candidate: IceCandidate) -> Option<IceCandidate> {
        if self.remote == RemoteDescription::Applied {
            Some(candidate)
        } else {
            self.pending.push_back(candidate);
            None
        }
    }

    /// Take everything buffered so far. When nothing is left the description is
    /// marked applied, so later candidates bypass the buffer.
    pub(crate) fn take_pending(&mut self) -> Vec<IceCandidate> {
        if self.pending.is_empty() {
            self.remote = RemoteDescription::Applied;
            Vec::new()
        } else {
            self.pending.drain(..).collect()
        }
    }

    pub(crate) fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffers_until_applied() {
        let mut buffer = CandidateBuffer::new();
        assert!(buffer.admit(IceCandidate::new("c1")).is_none());

        buffer.begin_remote_description();
        assert!(buffer.admit(IceCandidate::new("c2")).is_none());
        assert_eq!(buffer.pending_len(), 2);

        let batch = buffer.take_pending();
        assert_eq!(
            batch.iter().map(|c| c.candidate.as_str()).collect::<Vec<_>>(),
            vec!["c1", "c2"]
        );
        assert_eq!(buffer.remote(), RemoteDescription::Applying);

        // Arrives during replay
        assert!(buffer.admit(IceCandidate::new("c3")).is_none());
        assert_eq!(buffer.take_pending().len(), 1);

        assert!(buffer.take_pending().is_empty());
        assert_eq!(buffer.remote(), RemoteDescription::Applied);
        assert!(buffer.admit(IceCandidate::new("c4")).is_some());
    }

    #[test]
    fn test_abort_keeps_pending() {
        let mut buffer = CandidateBuffer::new();
        buffer.admit(IceCandidate::new("c1"));
        buffer.begin_remote_description();
        buffer.abort_remote_description();
        assert_eq!(buffer.remote(), RemoteDescription::None);
        assert_eq!(buffer.pending_len(), 1);
    }
}
