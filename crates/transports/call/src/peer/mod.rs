//! Peer connection capability
//!
//! The session never talks to a WebRTC stack directly. It drives an
//! [`RtcConnection`] obtained from a [`PeerConnectionFactory`] and receives the
//! connection's asynchronous notifications through a [`PeerEventHandler`].
//! [`WebRtcPeerFactory`] is the production implementation on top of webrtc-rs.

pub mod webrtc_rs;

pub use webrtc_rs::{WebRtcConnection, WebRtcPeerFactory};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::config::IceServer;
use crate::media::{LocalTrack, RemoteTrack};
use crate::Result;

/// Peer connection state as reported by the transport
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    #[default]
    New,
    Connecting,
    Connected,
    Disconnected,
    Failed,
    Closed,
}

impl ConnectionState {
    /// States that end the call
    pub fn forces_teardown(&self) -> bool {
        matches!(self, ConnectionState::Disconnected | ConnectionState::Failed)
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConnectionState::New => "new",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Connected => "connected",
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::Failed => "failed",
            ConnectionState::Closed => "closed",
        };
        f.write_str(s)
    }
}

/// Role of a session description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SdpKind {
    Offer,
    Answer,
}

impl fmt::Display for SdpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdpKind::Offer => f.write_str("offer"),
            SdpKind::Answer => f.write_str("answer"),
        }
    }
}

/// Offer or answer payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDescription {
    #[serde(rename = "type")]
    pub kind: SdpKind,
    pub sdp: String,
}

impl SessionDescription {
    pub fn offer(sdp: impl Into<String>) -> Self {
        Self {
            kind: SdpKind::Offer,
            sdp: sdp.into(),
        }
    }

    pub fn answer(sdp: impl Into<String>) -> Self {
        Self {
            kind: SdpKind::Answer,
            sdp: sdp.into(),
        }
    }
}

/// Network-traversal candidate, shaped like the browser's `RTCIceCandidateInit`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IceCandidate {
    pub candidate: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdp_mid: Option<String>,

    #[serde(default, rename = "sdpMLineIndex", skip_serializing_if = "Option::is_none")]
    pub sdp_mline_index: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username_fragment: Option<String>,
}

impl IceCandidate {
    pub fn new(candidate: impl Into<String>) -> Self {
        Self {
            candidate: candidate.into(),
            sdp_mid: None,
            sdp_mline_index: None,
            username_fragment: None,
        }
    }

    pub fn with_mid(mut self, sdp_mid: impl Into<String>, sdp_mline_index: u16) -> Self {
        self.sdp_mid = Some(sdp_mid.into());
        self.sdp_mline_index = Some(sdp_mline_index);
        self
    }
}

/// Asynchronous notification from a peer connection
#[derive(Debug, Clone)]
pub enum PeerEvent {
    /// A local candidate was gathered (delivered in discovery order)
    LocalCandidate(IceCandidate),
    /// The remote peer added a track to the stream `stream_id`
    RemoteTrack { stream_id: String, track: RemoteTrack },
    /// Aggregate connection state changed
    StateChanged(ConnectionState),
}

/// Consumer of [`PeerEvent`]s; events for one connection are delivered sequentially
#[async_trait]
pub trait PeerEventHandler: Send + Sync {
    async fn handle_event(&self, event: PeerEvent);
}

/// One platform peer connection
#[async_trait]
pub trait RtcConnection: Send + Sync {
    /// Attach a local capture track, grouped under `stream_id`
    async fn add_track(&self, track: Arc<LocalTrack>, stream_id: &str) -> Result<()>;

    async fn create_offer(&self) -> Result<SessionDescription>;

    async fn create_answer(&self) -> Result<SessionDescription>;

    async fn set_local_description(&self, desc: SessionDescription) -> Result<()>;

    async fn set_remote_description(&self, desc: SessionDescription) -> Result<()>;

    async fn add_ice_candidate(&self, candidate: IceCandidate) -> Result<()>;

    async fn close(&self) -> Result<()>;

    fn connection_state(&self) -> ConnectionState;
}

/// Allocates peer connections
#[async_trait]
pub trait PeerConnectionFactory: Send + Sync {
    /// Create a connection using `ice_servers`, delivering its events to `events`
    async fn create(
        &self,
        ice_servers: &[IceServer],
        events: Arc<dyn PeerEventHandler>,
    ) -> Result<Arc<dyn RtcConnection>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teardown_states() {
        assert!(ConnectionState::Disconnected.forces_teardown());
        assert!(ConnectionState::Failed.forces_teardown());
        assert!(!ConnectionState::Closed.forces_teardown());
        assert!(!ConnectionState::Connected.forces_teardown());
    }

    #[test]
    fn test_connection_state_serializes_lowercase() {
        let json = serde_json::to_string(&ConnectionState::Disconnected).unwrap();
        assert_eq!(json, "\"disconnected\"");
        assert_eq!(ConnectionState::default().to_string(), "new");
    }

    #[test]
    fn test_candidate_browser_shape() {
        let candidate = IceCandidate::new("candidate:1 1 udp 2130706431 10.0.0.1 5000 typ host")
            .with_mid("0", 0);
        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["sdpMid"], "0");
        assert_eq!(json["sdpMLineIndex"], 0);
        assert!(json.get("usernameFragment").is_none());

        let parsed: IceCandidate =
            serde_json::from_str(r#"{"candidate":"candidate:2","sdpMLineIndex":1}"#).unwrap();
        assert_eq!(parsed.sdp_mline_index, Some(1));
        assert_eq!(parsed.sdp_mid, None);
    }

    #[test]
    fn test_description_type_tag() {
        let json = serde_json::to_string(&SessionDescription::offer("v=0")).unwrap();
        assert_eq!(json, r#"{"type":"offer","sdp":"v=0"}"#);
    }
}
