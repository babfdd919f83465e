//! webrtc-rs backed peer connections

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use webrtc::api::interceptor_registry::register_default_interceptors;
use webrtc::api::media_engine::{MediaEngine, MIME_TYPE_OPUS, MIME_TYPE_VP8};
use webrtc::api::APIBuilder;
use webrtc::ice_transport::ice_candidate::{RTCIceCandidate, RTCIceCandidateInit};
use webrtc::ice_transport::ice_server::RTCIceServer;
use webrtc::peer_connection::configuration::RTCConfiguration;
use webrtc::peer_connection::peer_connection_state::RTCPeerConnectionState;
use webrtc::peer_connection::sdp::sdp_type::RTCSdpType;
use webrtc::peer_connection::sdp::session_description::RTCSessionDescription;
use webrtc::peer_connection::RTCPeerConnection;
use webrtc::rtp_transceiver::rtp_codec::{RTCRtpCodecCapability, RTPCodecType};
use webrtc::rtp_transceiver::rtp_receiver::RTCRtpReceiver;
use webrtc::rtp_transceiver::rtp_sender::RTCRtpSender;
use webrtc::rtp_transceiver::RTCRtpTransceiver;
use webrtc::track::track_local::track_local_static_sample::TrackLocalStaticSample;
use webrtc::track::track_local::TrackLocal;
use webrtc::track::track_remote::TrackRemote;

use super::{
    ConnectionState, IceCandidate, PeerConnectionFactory, PeerEvent, PeerEventHandler,
    RtcConnection, SdpKind, SessionDescription,
};
use crate::config::IceServer;
use crate::media::{LocalTrack, MediaKind, RemoteTrack};
use crate::{Error, Result};

/// Creates [`WebRtcConnection`]s with the default codec set (Opus, VP8, VP9, H.264)
#[derive(Debug, Default, Clone)]
pub struct WebRtcPeerFactory;

impl WebRtcPeerFactory {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PeerConnectionFactory for WebRtcPeerFactory {
    async fn create(
        &self,
        ice_servers: &[IceServer],
        events: Arc<dyn PeerEventHandler>,
    ) -> Result<Arc<dyn RtcConnection>> {
        let connection = WebRtcConnection::new(ice_servers, events).await?;
        Ok(Arc::new(connection))
    }
}

/// RTCPeerConnection wrapper implementing [`RtcConnection`]
///
/// webrtc-rs callbacks only enqueue [`PeerEvent`]s; a dedicated task drains the
/// queue and calls the handler, so handlers may close the connection without
/// re-entering webrtc-rs from inside one of its own callbacks.
pub struct WebRtcConnection {
    connection_id: String,

    peer_connection: Arc<RTCPeerConnection>,

    /// RTP senders (retained to prevent track cleanup)
    senders: Mutex<Vec<Arc<RTCRtpSender>>>,
}

impl WebRtcConnection {
    /// Create a peer connection
    #[instrument(skip_all)]
    pub async fn new(ice_servers: &[IceServer], events: Arc<dyn PeerEventHandler>) -> Result<Self> {
        let connection_id = uuid::Uuid::new_v4().to_string();
        info!("Creating peer connection: connection_id={}", connection_id);

        let mut media_engine = MediaEngine::default();
        media_engine
            .register_default_codecs()
            .map_err(|e| Error::ConnectionSetup(format!("Failed to register codecs: {}", e)))?;

        let interceptor_registry =
            register_default_interceptors(Default::default(), &mut media_engine).map_err(|e| {
                Error::ConnectionSetup(format!("Failed to register interceptors: {}", e))
            })?;

        let api = APIBuilder::new()
            .with_media_engine(media_engine)
            .with_interceptor_registry(interceptor_registry)
            .build();

        let rtc_config = RTCConfiguration {
            ice_servers: ice_servers
                .iter()
                .map(|server| RTCIceServer {
                    urls: server.urls.clone(),
                    username: server.username.clone(),
                    credential: server.credential.clone(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        };

        let peer_connection = Arc::new(api.new_peer_connection(rtc_config).await.map_err(|e| {
            Error::ConnectionSetup(format!("Failed to create peer connection: {}", e))
        })?);

        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<PeerEvent>();
        tokio::spawn(async move {
            while let Some(event) = event_rx.recv().await {
                events.handle_event(event).await;
            }
        });

        let tx = event_tx.clone();
        peer_connection.on_ice_candidate(Box::new(move |candidate: Option<RTCIceCandidate>| {
            let tx = tx.clone();
            Box::pin(async move {
                // `None` marks the end of gathering
                let Some(candidate) = candidate else {
                    return;
                };
                match candidate.to_json() {
                    Ok(init) => {
                        debug!("Local ICE candidate: {}", init.candidate);
                        let _ = tx.send(PeerEvent::LocalCandidate(init.into()));
                    }
                    Err(e) => warn!("Failed to serialize local ICE candidate: {}", e),
                }
            })
        }));

        let tx = event_tx.clone();
        peer_connection.on_track(Box::new(
            move |track: Arc<TrackRemote>,
                  _receiver: Arc<RTCRtpReceiver>,
                  _transceiver: Arc<RTCRtpTransceiver>| {
                let tx = tx.clone();
                Box::pin(async move {
                    let kind = match track.kind() {
                        RTPCodecType::Audio => MediaKind::Audio,
                        RTPCodecType::Video => MediaKind::Video,
                        _ => return,
                    };
                    debug!("Remote {} track received: {}", kind, track.id());
                    let _ = tx.send(PeerEvent::RemoteTrack {
                        stream_id: track.stream_id(),
                        track: RemoteTrack {
                            id: track.id(),
                            kind,
                        },
                    });
                })
            },
        ));

        let tx = event_tx;
        let id = connection_id.clone();
        peer_connection.on_peer_connection_state_change(Box::new(
            move |s: RTCPeerConnectionState| {
                let tx = tx.clone();
                let id = id.clone();
                Box::pin(async move {
                    let state = ConnectionState::from(s);
                    debug!("Connection {} state: {}", id, state);
                    let _ = tx.send(PeerEvent::StateChanged(state));
                })
            },
        ));

        Ok(Self {
            connection_id,
            peer_connection,
            senders: Mutex::new(Vec::new()),
        })
    }

    pub fn connection_id(&self) -> &str {
        &self.connection_id
    }

    /// Underlying webrtc-rs connection for advanced operations (stats, data channels)
    pub fn peer_connection(&self) -> &Arc<RTCPeerConnection> {
        &self.peer_connection
    }
}

#[async_trait]
impl RtcConnection for WebRtcConnection {
    async fn add_track(&self, track: Arc<LocalTrack>, stream_id: &str) -> Result<()> {
        let codec = match track.kind() {
            MediaKind::Audio => RTCRtpCodecCapability {
                mime_type: MIME_TYPE_OPUS.to_owned(),
                clock_rate: 48000,
                channels: 2,
                ..Default::default()
            },
            MediaKind::Video => RTCRtpCodecCapability {
                mime_type: MIME_TYPE_VP8.to_owned(),
                clock_rate: 90000,
                ..Default::default()
            },
        };

        let sample_track = Arc::new(TrackLocalStaticSample::new(
            codec,
            track.id().to_string(),
            stream_id.to_string(),
        ));

        let sender = self
            .peer_connection
            .add_track(sample_track as Arc<dyn TrackLocal + Send + Sync>)
            .await
            .map_err(|e| {
                Error::WebRtcError(format!("Failed to add {} track: {}", track.kind(), e))
            })?;

        // Drain RTCP so interceptors (NACK, reports) keep running
        let rtcp_sender = Arc::clone(&sender);
        tokio::spawn(async move {
            let mut buf = vec![0u8; 1500];
            while rtcp_sender.read(&mut buf).await.is_ok() {}
        });

        self.senders.lock().push(sender);
        debug!("Added local {} track {}", track.kind(), track.id());
        Ok(())
    }

    async fn create_offer(&self) -> Result<SessionDescription> {
        let offer = self
            .peer_connection
            .create_offer(None)
            .await
            .map_err(|e| Error::WebRtcError(format!("Failed to create offer: {}", e)))?;
        offer.try_into()
    }

    async fn create_answer(&self) -> Result<SessionDescription> {
        let answer = self
            .peer_connection
            .create_answer(None)
            .await
            .map_err(|e| Error::WebRtcError(format!("Failed to create answer: {}", e)))?;
        answer.try_into()
    }

    async fn set_local_description(&self, desc: SessionDescription) -> Result<()> {
        self.peer_connection
            .set_local_description(desc.try_into()?)
            .await
            .map_err(|e| Error::WebRtcError(format!("Failed to set local description: {}", e)))
    }

    async fn set_remote_description(&self, desc: SessionDescription) -> Result<()> {
        self.peer_connection
            .set_remote_description(desc.try_into()?)
            .await
            .map_err(|e| Error::WebRtcError(format!("Failed to set remote description: {}", e)))
    }

    async fn add_ice_candidate(&self, candidate: IceCandidate) -> Result<()> {
        self.peer_connection
            .add_ice_candidate(candidate.into())
            .await
            .map_err(|e| Error::CandidateApply(format!("Failed to add ICE candidate: {}", e)))
    }

    async fn close(&self) -> Result<()> {
        info!("Closing peer connection {}", self.connection_id);
        self.peer_connection
            .close()
            .await
            .map_err(|e| Error::WebRtcError(format!("Failed to close connection: {}", e)))
    }

    fn connection_state(&self) -> ConnectionState {
        self.peer_connection.connection_state().into()
    }
}

impl From<RTCPeerConnectionState> for ConnectionState {
    fn from(state: RTCPeerConnectionState) -> Self {
        match state {
            RTCPeerConnectionState::Unspecified | RTCPeerConnectionState::New => {
                ConnectionState::New
            }
            RTCPeerConnectionState::Connecting => ConnectionState::Connecting,
            RTCPeerConnectionState::Connected => ConnectionState::Connected,
            RTCPeerConnectionState::Disconnected => ConnectionState::Disconnected,
            RTCPeerConnectionState::Failed => ConnectionState::Failed,
            RTCPeerConnectionState::Closed => ConnectionState::Closed,
        }
    }
}

impl From<RTCIceCandidateInit> for IceCandidate {
    fn from(init: RTCIceCandidateInit) -> Self {
        Self {
            candidate: init.candidate,
            sdp_mid: init.sdp_mid,
            sdp_mline_index: init.sdp_mline_index,
            username_fragment: init.username_fragment,
        }
    }
}

impl From<IceCandidate> for RTCIceCandidateInit {
    fn from(candidate: IceCandidate) -> Self {
        Self {
            candidate: candidate.candidate,
            sdp_mid: candidate.sdp_mid,
            sdp_mline_index: candidate.sdp_mline_index,
            username_fragment: candidate.username_fragment,
        }
    }
}

impl TryFrom<RTCSessionDescription> for SessionDescription {
    type Error = Error;

    fn try_from(desc: RTCSessionDescription) -> Result<Self> {
        let kind = match desc.sdp_type {
            RTCSdpType::Offer => SdpKind::Offer,
            RTCSdpType::Answer => SdpKind::Answer,
            other => {
                return Err(Error::WebRtcError(format!(
                    "Unsupported SDP type: {}",
                    other
                )))
            }
        };
        Ok(Self {
            kind,
            sdp: desc.sdp,
        })
    }
}

impl TryFrom<SessionDescription> for RTCSessionDescription {
    type Error = Error;

    fn try_from(desc: SessionDescription) -> Result<Self> {
        match desc.kind {
            SdpKind::Offer => RTCSessionDescription::offer(desc.sdp),
            SdpKind::Answer => RTCSessionDescription::answer(desc.sdp),
        }
        .map_err(|e| Error::WebRtcError(format!("Invalid {} SDP: {}", desc.kind, e)))
    }
}
