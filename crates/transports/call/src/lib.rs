//! One-to-one WebRTC calls for RemoteMedia hosts
//!
//! This crate drives a single peer-to-peer audio/video call: local capture,
//! offer/answer negotiation, trickle ICE exchange, mute/video toggles and a
//! teardown that runs exactly once.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Host application (UI, server, test)                      │
//! │  ├─ CallObserver      ◀── stream / connected / ended      │
//! │  ├─ SignalingSink     ◀── local ICE candidates            │
//! │  └─ CallStatus watch  ◀── isInCall / isMuted / ...        │
//! │     ↓ offer / answer / candidates / end_call              │
//! │  CallSession                                              │
//! │  ├─ MediaAcquisition  ──▶ MediaDevices                    │
//! │  ├─ CandidateBuffer   (remote ICE until remote SDP)       │
//! │  └─ RtcConnection     ──▶ WebRtcPeerFactory (webrtc-rs)   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Platform capabilities (capture devices, peer connections, signaling) are
//! injected as traits, so the same session logic runs against webrtc-rs in
//! production and against scripted fakes in tests.
//!
//! # Example
//!
//! ```
//! use remotemedia_call::CallConfig;
//!
//! let config = CallConfig::default();
//! assert!(config.validate().is_ok());
//! assert!(config.media.audio_only);
//! assert_eq!(config.ice_servers()[0].urls[0], "stun:stun.l.google.com:19302");
//! ```
//!
//! ## Async Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use remotemedia_call::{CallSession, StaticMediaDevices, WebRtcPeerFactory};
//!
//! # async fn example() -> remotemedia_call::Result<()> {
//! let session = CallSession::builder(
//!     Arc::new(StaticMediaDevices),
//!     Arc::new(WebRtcPeerFactory::new()),
//! )
//! .build()?;
//!
//! session.acquire_media(session.config().media).await?;
//! session.create_connection().await?;
//! let offer = session.create_offer().await?;
//! // ... deliver `offer` to the remote peer, apply its answer ...
//! session.end_call().await;
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod media;
pub mod observer;
pub mod peer;
pub mod session;
pub mod signaling;
pub mod status;

pub use config::{CallConfig, IceServer, TurnServerConfig, DEFAULT_STUN_SERVERS};
pub use error::{Error, Result};
pub use media::{
    DeviceError, LocalStream, LocalTrack, MediaAcquisition, MediaConfiguration,
    MediaConstraints, MediaDevices, MediaKind, RemoteStream, RemoteTrack, StaticMediaDevices,
};
pub use observer::{CallObserver, NoopObserver};
pub use peer::{
    ConnectionState, IceCandidate, PeerConnectionFactory, PeerEvent, PeerEventHandler,
    RtcConnection, SdpKind, SessionDescription, WebRtcConnection, WebRtcPeerFactory,
};
pub use session::{CallPhase, CallSession, CallSessionBuilder};
pub use signaling::{ChannelSignaling, DiscardSignaling, SignalingMessage, SignalingSink};
pub use status::{CallStatus, CallStatusReporter};

/// Get the version of this crate
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
    }
}
