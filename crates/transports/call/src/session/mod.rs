//! Call session state machine
//!
//! A [`CallSession`] covers exactly one call. It owns the local stream and the
//! peer connection, serialises negotiation steps, buffers remote candidates
//! until the remote description is in place, and tears everything down once.
//!
//! ```text
//!   Idle ──offer/answer──▶ Negotiating ──connected──▶ Connected
//!    │                          │                         │
//!    └──────────── end_call / disconnected / failed ──────┴──▶ Ended
//! ```
//!
//! Bookkeeping lives behind a `parking_lot` mutex that is never held across an
//! `.await`; platform negotiation steps are serialised by a separate async
//! mutex. `end_call` takes neither for longer than a field swap, so it can run
//! while a negotiation step is suspended. The suspended step then notices the
//! session has ended and returns [`Error::SessionClosed`].

mod candidates;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Weak};
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

use self::candidates::{CandidateBuffer, RemoteDescription};
use crate::config::CallConfig;
use crate::media::{
    LocalStream, LocalTrack, MediaAcquisition, MediaConfiguration, MediaDevices, MediaKind,
    RemoteStream,
};
use crate::observer::{CallObserver, NoopObserver};
use crate::peer::{
    ConnectionState, IceCandidate, PeerConnectionFactory, PeerEvent, PeerEventHandler,
    RtcConnection, SdpKind, SessionDescription,
};
use crate::signaling::{DiscardSignaling, SignalingMessage, SignalingSink};
use crate::status::{CallStatus, CallStatusReporter};
use crate::{Error, Result};

/// Lifecycle phase of a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallPhase {
    Idle,
    Negotiating,
    Connected,
    Ended,
}

/// Builder for [`CallSession`]
pub struct CallSessionBuilder {
    config: CallConfig,
    devices: Arc<dyn MediaDevices>,
    factory: Arc<dyn PeerConnectionFactory>,
    observer: Arc<dyn CallObserver>,
    signaling: Arc<dyn SignalingSink>,
}

impl CallSessionBuilder {
    pub fn new(devices: Arc<dyn MediaDevices>, factory: Arc<dyn PeerConnectionFactory>) -> Self {
        Self {
            config: CallConfig::default(),
            devices,
            factory,
            observer: Arc::new(NoopObserver),
            signaling: Arc::new(DiscardSignaling),
        }
    }

    pub fn config(mut self, config: CallConfig) -> Self {
        self.config = config;
        self
    }

    pub fn observer(mut self, observer: Arc<dyn CallObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Where locally gathered ICE candidates are sent
    pub fn signaling(mut self, signaling: Arc<dyn SignalingSink>) -> Self {
        self.signaling = signaling;
        self
    }

    /// Validate the configuration and create an idle session
    pub fn build(self) -> Result<CallSession> {
        self.config.validate()?;

        let session_id = uuid::Uuid::new_v4().to_string();
        info!("Creating call session {}", session_id);

        Ok(CallSession {
            inner: Arc::new(SessionInner {
                session_id,
                acquisition: MediaAcquisition::new(self.devices, Arc::clone(&self.observer)),
                config: self.config,
                factory: self.factory,
                signaling: self.signaling,
                observer: self.observer,
                negotiation: tokio::sync::Mutex::new(()),
                state: Mutex::new(SessionState::new()),
                status: CallStatusReporter::new(),
            }),
        })
    }
}

/// One peer-to-peer call
///
/// Not reusable: once [`end_call`](Self::end_call) has run, every operation
/// except `end_call`, `status` and `add_ice_candidate` fails with
/// [`Error::SessionClosed`]. Build a new session for the next call.
pub struct CallSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    session_id: String,
    config: CallConfig,
    acquisition: MediaAcquisition,
    factory: Arc<dyn PeerConnectionFactory>,
    signaling: Arc<dyn SignalingSink>,
    observer: Arc<dyn CallObserver>,
    /// Serialises platform negotiation steps
    negotiation: tokio::sync::Mutex<()>,
    state: Mutex<SessionState>,
    status: CallStatusReporter,
}

struct SessionState {
    phase: CallPhase,
    local_stream: Option<LocalStream>,
    acquiring: bool,
    connection: Option<Arc<dyn RtcConnection>>,
    connection_state: ConnectionState,
    /// Connection whose events the session still listens to
    event_generation: Option<u64>,
    next_generation: u64,
    local_description: Option<SdpKind>,
    candidates: CandidateBuffer,
    remote_stream: Option<Arc<RemoteStream>>,
    seen_remote_streams: HashSet<String>,
    connected_notified: bool,
    is_in_call: bool,
    is_muted: bool,
    is_video_on: bool,
}

impl SessionState {
    fn new() -> Self {
        Self {
            phase: CallPhase::Idle,
            local_stream: None,
            acquiring: false,
            connection: None,
            connection_state: ConnectionState::New,
            event_generation: None,
            next_generation: 0,
            local_description: None,
            candidates: CandidateBuffer::new(),
            remote_stream: None,
            seen_remote_streams: HashSet::new(),
            connected_notified: false,
            is_in_call: false,
            is_muted: false,
            is_video_on: false,
        }
    }

    fn status(&self) -> CallStatus {
        CallStatus {
            is_in_call: self.is_in_call,
            is_muted: self.is_muted,
            is_video_on: self.is_video_on,
            connection_state: if self.connection.is_some() {
                self.connection_state
            } else {
                ConnectionState::New
            },
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.phase == CallPhase::Ended {
            Err(Error::SessionClosed)
        } else {
            Ok(())
        }
    }

    /// The live connection, or why negotiation cannot proceed
    fn connection(&self) -> Result<Arc<dyn RtcConnection>> {
        self.ensure_open()?;
        let connection = self.connection.clone().ok_or_else(|| {
            Error::Negotiation("No peer connection; call create_connection first".to_string())
        })?;
        if connection.connection_state() == ConnectionState::Closed {
            return Err(Error::Negotiation("Peer connection is closed".to_string()));
        }
        Ok(connection)
    }

    /// Events from earlier or abandoned connections, or after teardown, are stale
    fn accepts_events_from(&self, generation: u64) -> bool {
        self.phase != CallPhase::Ended && self.event_generation == Some(generation)
    }

    fn enter_negotiating(&mut self) {
        if self.phase == CallPhase::Idle {
            self.phase = CallPhase::Negotiating;
        }
    }
}

impl CallSession {
    pub fn builder(
        devices: Arc<dyn MediaDevices>,
        factory: Arc<dyn PeerConnectionFactory>,
    ) -> CallSessionBuilder {
        CallSessionBuilder::new(devices, factory)
    }

    pub fn session_id(&self) -> &str {
        &self.inner.session_id
    }

    pub fn config(&self) -> &CallConfig {
        &self.inner.config
    }

    pub fn phase(&self) -> CallPhase {
        self.inner.state.lock().phase
    }

    /// Current status snapshot (pure read)
    pub fn status(&self) -> CallStatus {
        self.inner.state.lock().status()
    }

    /// Receive a fresh [`CallStatus`] after every state change
    pub fn subscribe_status(&self) -> watch::Receiver<CallStatus> {
        self.inner.status.subscribe()
    }

    /// Most recently announced remote stream, while the call is active
    pub fn remote_stream(&self) -> Option<Arc<RemoteStream>> {
        self.inner.state.lock().remote_stream.clone()
    }

    /// Tracks of the local stream, empty once the call has ended
    pub fn local_tracks(&self) -> Vec<Arc<LocalTrack>> {
        self.inner
            .state
            .lock()
            .local_stream
            .as_ref()
            .map(|s| s.tracks().to_vec())
            .unwrap_or_default()
    }

    fn publish(&self, state: &SessionState) {
        self.inner.status.publish(state.status());
    }

    // ========== Media ==========

    /// Acquire local capture tracks for this call
    ///
    /// Fails with [`Error::MediaAlreadyAcquired`] if the session already holds
    /// (or is acquiring) a stream. If the connection already exists the new
    /// tracks are attached to it.
    #[instrument(skip(self), fields(session_id = %self.inner.session_id))]
    pub async fn acquire_media(&self, config: MediaConfiguration) -> Result<()> {
        {
            let mut st = self.inner.state.lock();
            st.ensure_open()?;
            if st.local_stream.is_some() || st.acquiring {
                return Err(Error::MediaAlreadyAcquired);
            }
            st.acquiring = true;
        }

        let acquiring = AcquiringGuard(&self.inner.state);
        let result = self.inner.acquisition.acquire(config).await;
        drop(acquiring);

        self.install_local_stream(result?).await
    }

    /// Hand a stream acquired by the host to the session
    pub async fn attach_local_stream(&self, stream: LocalStream) -> Result<()> {
        {
            let st = self.inner.state.lock();
            st.ensure_open()?;
            if st.local_stream.is_some() || st.acquiring {
                return Err(Error::MediaAlreadyAcquired);
            }
        }
        self.install_local_stream(stream).await
    }

    async fn install_local_stream(&self, stream: LocalStream) -> Result<()> {
        let _negotiation = self.inner.negotiation.lock().await;

        let (connection, tracks, stream_id) = {
            let mut st = self.inner.state.lock();
            // Dropping `stream` on these paths stops its tracks
            st.ensure_open()?;
            if st.local_stream.is_some() {
                return Err(Error::MediaAlreadyAcquired);
            }

            st.is_muted = stream
                .first_track(MediaKind::Audio)
                .map(|t| !t.is_enabled())
                .unwrap_or(false);
            st.is_video_on = stream
                .first_track(MediaKind::Video)
                .map(|t| t.is_enabled())
                .unwrap_or(false);

            let tracks = stream.tracks().to_vec();
            let stream_id = stream.id().to_string();
            st.local_stream = Some(stream);
            self.publish(&st);

            (st.connection.clone(), tracks, stream_id)
        };

        if let Some(connection) = connection {
            for track in tracks {
                if let Err(e) = connection.add_track(track, &stream_id).await {
                    warn!("Failed to attach local track to existing connection: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Flip the first audio track; returns the resulting mute state
    pub fn toggle_mute(&self) -> bool {
        let mut st = self.inner.state.lock();
        let track = st
            .local_stream
            .as_ref()
            .and_then(|s| s.first_track(MediaKind::Audio))
            .cloned();

        if let Some(track) = track {
            track.set_enabled(!track.is_enabled());
            st.is_muted = !track.is_enabled();
            info!(
                "{}",
                if st.is_muted {
                    "Microphone muted"
                } else {
                    "Microphone unmuted"
                }
            );
            self.publish(&st);
        }

        st.is_muted
    }

    /// Flip the first video track; returns the resulting video state
    pub fn toggle_video(&self) -> bool {
        let mut st = self.inner.state.lock();
        let track = st
            .local_stream
            .as_ref()
            .and_then(|s| s.first_track(MediaKind::Video))
            .cloned();

        if let Some(track) = track {
            track.set_enabled(!track.is_enabled());
            st.is_video_on = track.is_enabled();
            info!(
                "{}",
                if st.is_video_on {
                    "Video enabled"
                } else {
                    "Video disabled"
                }
            );
            self.publish(&st);
        }

        st.is_video_on
    }

    // ========== Connection & negotiation ==========

    /// Create the peer connection and attach the local tracks
    ///
    /// On failure the partially built connection is closed, the observer's
    /// `on_error` fires, and [`Error::ConnectionSetup`] is returned.
    #[instrument(skip(self), fields(session_id = %self.inner.session_id))]
    pub async fn create_connection(&self) -> Result<()> {
        let _negotiation = self.inner.negotiation.lock().await;
        let generation = {
            let mut st = self.inner.state.lock();
            st.ensure_open()?;
            if st.connection.is_some() {
                return Err(Error::Negotiation(
                    "Peer connection already created".to_string(),
                ));
            }
            let generation = st.next_generation;
            st.next_generation += 1;
            st.event_generation = Some(generation);
            generation
        };

        let events: Arc<dyn PeerEventHandler> = Arc::new(SessionEvents {
            inner: Arc::downgrade(&self.inner),
            generation,
        });
        let connection = match self
            .inner
            .factory
            .create(&self.inner.config.ice_servers(), events)
            .await
        {
            Ok(connection) => connection,
            Err(e) => return Err(self.connection_setup_failed(generation, e)),
        };

        let (tracks, stream_id) = {
            let st = self.inner.state.lock();
            st.local_stream
                .as_ref()
                .map(|s| (s.tracks().to_vec(), s.id().to_string()))
                .unwrap_or_default()
        };
        for track in tracks {
            if let Err(e) = connection.add_track(track, &stream_id).await {
                let err = self.connection_setup_failed(generation, e);
                if let Err(close_err) = connection.close().await {
                    warn!("Error closing partial peer connection: {}", close_err);
                }
                return Err(err);
            }
        }

        {
            let mut st = self.inner.state.lock();
            if st.phase != CallPhase::Ended {
                st.connection_state = connection.connection_state();
                st.connection = Some(Arc::clone(&connection));
                st.is_in_call = true;
                self.publish(&st);
                info!("Peer connection created");
                return Ok(());
            }
        }

        info!("Call ended while connecting; discarding peer connection");
        if let Err(e) = connection.close().await {
            warn!("Error closing discarded peer connection: {}", e);
        }
        Err(Error::SessionClosed)
    }

    fn connection_setup_failed(&self, generation: u64, err: Error) -> Error {
        {
            let mut st = self.inner.state.lock();
            if st.event_generation == Some(generation) {
                st.event_generation = None;
            }
        }
        let err = match err {
            Error::ConnectionSetup(_) => err,
            other => Error::ConnectionSetup(other.to_string()),
        };
        error!("Failed to create peer connection: {}", err);
        self.inner
            .observer
            .on_error(&format!("Failed to create peer connection: {}", err));
        err
    }

    fn negotiation_failed(&self, step: &str, err: Error) -> Error {
        if self.inner.state.lock().phase == CallPhase::Ended {
            return Error::SessionClosed;
        }
        error!("Failed to {}: {}", step, err);
        Error::Negotiation(format!("Failed to {}: {}", step, err))
    }

    /// Generate an offer and set it as the local description
    #[instrument(skip(self), fields(session_id = %self.inner.session_id))]
    pub async fn create_offer(&self) -> Result<SessionDescription> {
        let _negotiation = self.inner.negotiation.lock().await;
        let connection = {
            let mut st = self.inner.state.lock();
            let connection = st.connection()?;
            if let Some(kind) = st.local_description {
                return Err(Error::Negotiation(format!("Local {} already created", kind)));
            }
            if st.candidates.remote() != RemoteDescription::None {
                return Err(Error::Negotiation(
                    "Remote description already set; create an answer instead".to_string(),
                ));
            }
            st.enter_negotiating();
            connection
        };

        let offer = connection
            .create_offer()
            .await
            .map_err(|e| self.negotiation_failed("create offer", e))?;
        connection
            .set_local_description(offer.clone())
            .await
            .map_err(|e| self.negotiation_failed("set local description", e))?;

        let mut st = self.inner.state.lock();
        st.ensure_open()?;
        st.local_description = Some(SdpKind::Offer);
        info!("Created offer");
        Ok(offer)
    }

    /// Apply a remote offer, then generate and set the answer
    #[instrument(skip_all, fields(session_id = %self.inner.session_id))]
    pub async fn create_answer(&self, offer: SessionDescription) -> Result<SessionDescription> {
        if offer.kind != SdpKind::Offer {
            return Err(Error::Negotiation(format!(
                "Expected an offer, got {}",
                offer.kind
            )));
        }

        let _negotiation = self.inner.negotiation.lock().await;
        let connection = {
            let mut st = self.inner.state.lock();
            let connection = st.connection()?;
            if st.candidates.remote() != RemoteDescription::None {
                return Err(Error::Negotiation(
                    "Remote description already set".to_string(),
                ));
            }
            if let Some(kind) = st.local_description {
                return Err(Error::Negotiation(format!("Local {} already created", kind)));
            }
            st.candidates.begin_remote_description();
            st.enter_negotiating();
            connection
        };

        self.apply_remote_description(&connection, offer).await?;

        let answer = connection
            .create_answer()
            .await
            .map_err(|e| self.negotiation_failed("create answer", e))?;
        connection
            .set_local_description(answer.clone())
            .await
            .map_err(|e| self.negotiation_failed("set local description", e))?;

        let mut st = self.inner.state.lock();
        st.ensure_open()?;
        st.local_description = Some(SdpKind::Answer);
        info!("Created answer");
        Ok(answer)
    }

    /// Apply the remote peer's description, then replay buffered candidates
    #[instrument(skip_all, fields(session_id = %self.inner.session_id, kind = %desc.kind))]
    pub async fn set_remote_description(&self, desc: SessionDescription) -> Result<()> {
        let _negotiation = self.inner.negotiation.lock().await;
        let connection = {
            let mut st = self.inner.state.lock();
            let connection = st.connection()?;
            if st.candidates.remote() != RemoteDescription::None {
                return Err(Error::Negotiation(
                    "Remote description already set".to_string(),
                ));
            }
            st.candidates.begin_remote_description();
            st.enter_negotiating();
            connection
        };

        self.apply_remote_description(&connection, desc).await?;
        info!("Set remote description");
        Ok(())
    }

    async fn apply_remote_description(
        &self,
        connection: &Arc<dyn RtcConnection>,
        desc: SessionDescription,
    ) -> Result<()> {
        if let Err(e) = connection.set_remote_description(desc).await {
            self.inner
                .state
                .lock()
                .candidates
                .abort_remote_description();
            return Err(self.negotiation_failed("set remote description", e));
        }

        self.replay_buffered_candidates(connection).await;
        self.inner.state.lock().ensure_open()
    }

    /// Drain the buffer until it stays empty; candidates that arrive during the
    /// replay are queued behind the ones already taken.
    async fn replay_buffered_candidates(&self, connection: &Arc<dyn RtcConnection>) {
        loop {
            let batch = {
                let mut st = self.inner.state.lock();
                if st.phase == CallPhase::Ended {
                    return;
                }
                st.candidates.take_pending()
            };
            if batch.is_empty() {
                break;
            }

            debug!("Replaying {} buffered ICE candidates", batch.len());
            for candidate in batch {
                self.apply_candidate(connection, candidate).await;
            }
        }
    }

    /// Apply a remote ICE candidate
    ///
    /// Never fails: candidates for an absent or torn-down connection are
    /// dropped, candidates that arrive before the remote description are
    /// buffered, and platform rejections are logged.
    pub async fn add_ice_candidate(&self, candidate: IceCandidate) {
        let (connection, candidate) = {
            let mut st = self.inner.state.lock();
            if st.phase == CallPhase::Ended {
                debug!("Call ended; dropping late ICE candidate");
                return;
            }
            let Some(connection) = st.connection.clone() else {
                debug!("No peer connection; dropping ICE candidate");
                return;
            };
            match st.candidates.admit(candidate) {
                Some(candidate) => (connection, candidate),
                None => {
                    debug!(
                        "Buffered ICE candidate until remote description is set ({} pending)",
                        st.candidates.pending_len()
                    );
                    return;
                }
            }
        };

        self.apply_candidate(&connection, candidate).await;
    }

    async fn apply_candidate(&self, connection: &Arc<dyn RtcConnection>, candidate: IceCandidate) {
        if let Err(e) = connection.add_ice_candidate(candidate).await {
            let failure = match e {
                Error::CandidateApply(_) => e,
                other => Error::CandidateApply(other.to_string()),
            };
            warn!("Ignoring ICE candidate: {}", failure);
        }
    }

    /// Dispatch an inbound signaling message; returns the reply to send, if any
    pub async fn handle_signaling(
        &self,
        msg: SignalingMessage,
    ) -> Result<Option<SignalingMessage>> {
        match msg {
            SignalingMessage::Offer { sdp } => {
                let answer = self.create_answer(SessionDescription::offer(sdp)).await?;
                Ok(Some(answer.into()))
            }
            SignalingMessage::Answer { sdp } => {
                self.set_remote_description(SessionDescription::answer(sdp))
                    .await?;
                Ok(None)
            }
            SignalingMessage::Candidate { candidate } => {
                self.add_ice_candidate(candidate).await;
                Ok(None)
            }
            SignalingMessage::Bye => {
                self.end_call().await;
                Ok(None)
            }
        }
    }

    // ========== Teardown ==========

    /// End the call and release everything it holds
    ///
    /// Safe from any phase, concurrently with negotiation, and any number of
    /// times. Only the first call tears down and fires `on_call_ended`.
    #[instrument(skip(self), fields(session_id = %self.inner.session_id))]
    pub async fn end_call(&self) {
        let (stream, connection, remote_stream) = {
            let mut st = self.inner.state.lock();
            if st.phase == CallPhase::Ended {
                debug!("Call already ended");
                return;
            }
            info!("Ending call");
            st.phase = CallPhase::Ended;
            st.candidates.clear();
            st.event_generation = None;
            let released = (
                st.local_stream.take(),
                st.connection.take(),
                st.remote_stream.take(),
            );
            st.is_in_call = false;
            st.connection_state = ConnectionState::New;
            self.publish(&st);
            released
        };

        if let Some(stream) = stream {
            stream.stop();
        }

        if let Some(connection) = connection {
            if let Err(e) = connection.close().await {
                warn!("Error closing peer connection: {}", e);
            }
        }

        drop(remote_stream);

        self.inner.observer.on_call_ended();
        info!("Call ended and resources cleaned up");
    }

    // ========== Peer events ==========

    async fn on_peer_event(&self, generation: u64, event: PeerEvent) {
        match event {
            PeerEvent::LocalCandidate(candidate) => {
                if !self.inner.state.lock().accepts_events_from(generation) {
                    debug!("Not forwarding local ICE candidate from a stale connection");
                    return;
                }
                debug!("Forwarding local ICE candidate: {}", candidate.candidate);
                self.inner.signaling.send_local_candidate(candidate);
            }

            PeerEvent::RemoteTrack { stream_id, track } => {
                let announced = {
                    let mut st = self.inner.state.lock();
                    if !st.accepts_events_from(generation) {
                        return;
                    }
                    if st.seen_remote_streams.insert(stream_id.clone()) {
                        let stream = Arc::new(RemoteStream::new(stream_id));
                        stream.push_track(track);
                        st.remote_stream = Some(Arc::clone(&stream));
                        Some(stream)
                    } else {
                        if let Some(current) = st
                            .remote_stream
                            .as_ref()
                            .filter(|s| s.id() == stream_id)
                        {
                            current.push_track(track);
                        }
                        None
                    }
                };

                if let Some(stream) = announced {
                    info!("Remote stream received: {}", stream.id());
                    self.inner.observer.on_remote_stream(stream);
                }
            }

            PeerEvent::StateChanged(state) => {
                let first_connect = {
                    let mut st = self.inner.state.lock();
                    if !st.accepts_events_from(generation) {
                        debug!("Ignoring connection state {} from a stale connection", state);
                        return;
                    }
                    st.connection_state = state;
                    let first_connect =
                        state == ConnectionState::Connected && !st.connected_notified;
                    if first_connect {
                        st.connected_notified = true;
                        st.phase = CallPhase::Connected;
                    }
                    self.publish(&st);
                    first_connect
                };

                info!("Connection state: {}", state);
                if first_connect {
                    self.inner.observer.on_call_connected();
                }
                if state.forces_teardown() {
                    info!("Connection {}; ending call", state);
                    self.end_call().await;
                }
            }
        }
    }
}

impl fmt::Debug for CallSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallSession")
            .field("session_id", &self.inner.session_id)
            .field("phase", &self.phase())
            .finish()
    }
}

/// Clears the in-flight acquisition flag however `acquire_media` exits
struct AcquiringGuard<'a>(&'a Mutex<SessionState>);

impl Drop for AcquiringGuard<'_> {
    fn drop(&mut self) {
        self.0.lock().acquiring = false;
    }
}

/// Routes one connection's events back into the session without keeping it alive
struct SessionEvents {
    inner: Weak<SessionInner>,
    generation: u64,
}

#[async_trait]
impl PeerEventHandler for SessionEvents {
    async fn handle_event(&self, event: PeerEvent) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        CallSession { inner }
            .on_peer_event(self.generation, event)
            .await;
    }
}
