//! Signaling boundary
//!
//! The session never delivers signaling itself. Locally gathered candidates
//! leave through a [`SignalingSink`]; inbound messages from the remote peer are
//! fed to [`CallSession::handle_signaling`](crate::CallSession::handle_signaling)
//! or to the individual negotiation entry points.
//!
//! [`SignalingMessage`] is the JSON envelope browsers already speak:
//!
//! ```json
//! {"type": "offer", "sdp": "v=0..."}
//! {"type": "answer", "sdp": "v=0..."}
//! {"type": "candidate", "candidate": {"candidate": "candidate:...", "sdpMid": "0", "sdpMLineIndex": 0}}
//! {"type": "bye"}
//! ```

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::debug;

use crate::peer::{IceCandidate, SdpKind, SessionDescription};
use crate::Result;

/// Outbound hook for locally gathered candidates
///
/// Called from the peer event task; implementations must not block.
pub trait SignalingSink: Send + Sync {
    fn send_local_candidate(&self, candidate: IceCandidate);
}

/// Sink that drops every candidate (non-trickle hosts)
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardSignaling;

impl SignalingSink for DiscardSignaling {
    fn send_local_candidate(&self, candidate: IceCandidate) {
        debug!("Discarding local ICE candidate: {}", candidate.candidate);
    }
}

/// Signaling messages exchanged between the two peers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SignalingMessage {
    Offer { sdp: String },
    Answer { sdp: String },
    Candidate { candidate: IceCandidate },
    Bye,
}

impl SignalingMessage {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<SessionDescription> for SignalingMessage {
    fn from(desc: SessionDescription) -> Self {
        match desc.kind {
            SdpKind::Offer => SignalingMessage::Offer { sdp: desc.sdp },
            SdpKind::Answer => SignalingMessage::Answer { sdp: desc.sdp },
        }
    }
}

/// [`SignalingSink`] that queues messages on a tokio channel
///
/// The host's transport loop owns the receiver and forwards each message to
/// the remote peer.
#[derive(Debug, Clone)]
pub struct ChannelSignaling {
    tx: mpsc::UnboundedSender<SignalingMessage>,
}

impl ChannelSignaling {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SignalingMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Queue any message (offers, answers, bye) on the same outbound channel
    pub fn send(&self, msg: SignalingMessage) {
        if self.tx.send(msg).is_err() {
            debug!("Signaling receiver dropped, message discarded");
        }
    }
}

impl SignalingSink for ChannelSignaling {
    fn send_local_candidate(&self, candidate: IceCandidate) {
        self.send(SignalingMessage::Candidate { candidate });
    }
}
