//! Scripted peer connections
//!
//! `FakeConnection` performs no networking. It records each platform call,
//! optionally holds `set_remote_description` or `close` until the test
//! releases it, and rejects any candidate whose string contains `"bad"`.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use remotemedia_call::{
    ConnectionState, Error, IceCandidate, IceServer, LocalTrack, MediaKind, PeerConnectionFactory,
    PeerEvent, PeerEventHandler, Result, RtcConnection, SdpKind, SessionDescription,
};
use tokio::sync::Notify;

/// One recorded platform call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeerCall {
    AddTrack(MediaKind),
    CreateOffer,
    CreateAnswer,
    SetLocal(SdpKind),
    SetRemote(SdpKind),
    AddCandidate(String),
    Close,
}

pub struct FakeConnection {
    id: usize,
    ice_servers: Vec<IceServer>,
    events: Arc<dyn PeerEventHandler>,
    calls: Mutex<Vec<PeerCall>>,
    state: Mutex<ConnectionState>,
    fail_add_track: bool,
    remote_gate: Mutex<Option<Arc<Notify>>>,
    remote_started: Notify,
    close_gate: Mutex<Option<Arc<Notify>>>,
    close_started: Notify,
}

impl FakeConnection {
    pub fn calls(&self) -> Vec<PeerCall> {
        self.calls.lock().clone()
    }

    /// Candidate strings the connection accepted, in order
    pub fn applied_candidates(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter_map(|c| match c {
                PeerCall::AddCandidate(s) if !s.contains("bad") => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn close_count(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| **c == PeerCall::Close)
            .count()
    }

    pub fn ice_servers(&self) -> &[IceServer] {
        &self.ice_servers
    }

    /// Make the next `set_remote_description` wait until the returned gate is notified
    pub fn hold_remote_description(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.remote_gate.lock() = Some(gate.clone());
        gate
    }

    /// Resolves once a held `set_remote_description` has started waiting
    pub async fn remote_description_started(&self) {
        self.remote_started.notified().await;
    }

    /// Make the next `close` wait until the returned gate is notified
    pub fn hold_close(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.close_gate.lock() = Some(gate.clone());
        gate
    }

    pub async fn close_started(&self) {
        self.close_started.notified().await;
    }

    /// Deliver a transport event to the session, as the platform would
    pub async fn emit(&self, event: PeerEvent) {
        if let PeerEvent::StateChanged(state) = &event {
            *self.state.lock() = *state;
        }
        self.events.handle_event(event).await;
    }

    fn record(&self, call: PeerCall) -> Result<()> {
        if *self.state.lock() == ConnectionState::Closed {
            return Err(Error::WebRtcError(format!(
                "connection {} is closed",
                self.id
            )));
        }
        self.calls.lock().push(call);
        Ok(())
    }
}

#[async_trait]
impl RtcConnection for FakeConnection {
    async fn add_track(&self, track: Arc<LocalTrack>, _stream_id: &str) -> Result<()> {
        if self.fail_add_track {
            return Err(Error::WebRtcError("codec not supported".to_string()));
        }
        self.record(PeerCall::AddTrack(track.kind()))
    }

    async fn create_offer(&self) -> Result<SessionDescription> {
        self.record(PeerCall::CreateOffer)?;
        Ok(SessionDescription::offer(format!("v=0 fake-offer-{}", self.id)))
    }

    async fn create_answer(&self) -> Result<SessionDescription> {
        self.record(PeerCall::CreateAnswer)?;
        Ok(SessionDescription::answer(format!("v=0 fake-answer-{}", self.id)))
    }

    async fn set_local_description(&self, desc: SessionDescription) -> Result<()> {
        self.record(PeerCall::SetLocal(desc.kind))
    }

    async fn set_remote_description(&self, desc: SessionDescription) -> Result<()> {
        let gate = self.remote_gate.lock().take();
        if let Some(gate) = gate {
            self.remote_started.notify_one();
            gate.notified().await;
        }
        self.record(PeerCall::SetRemote(desc.kind))
    }

    async fn add_ice_candidate(&self, candidate: IceCandidate) -> Result<()> {
        let rejected = candidate.candidate.contains("bad");
        self.record(PeerCall::AddCandidate(candidate.candidate))?;
        if rejected {
            return Err(Error::WebRtcError("malformed candidate".to_string()));
        }
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        let gate = self.close_gate.lock().take();
        if let Some(gate) = gate {
            self.close_started.notify_one();
            gate.notified().await;
        }
        self.calls.lock().push(PeerCall::Close);
        *self.state.lock() = ConnectionState::Closed;
        Ok(())
    }

    fn connection_state(&self) -> ConnectionState {
        *self.state.lock()
    }
}

/// Factory handing out [`FakeConnection`]s
#[derive(Default)]
pub struct FakePeerFactory {
    connections: Mutex<Vec<Arc<FakeConnection>>>,
    fail_create: AtomicBool,
    fail_add_track: AtomicBool,
    next_id: AtomicUsize,
}

impl FakePeerFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Every subsequent `create` fails
    pub fn fail_create(&self) {
        self.fail_create.store(true, Ordering::SeqCst);
    }

    /// Connections created from now on reject `add_track`
    pub fn fail_add_track(&self) {
        self.fail_add_track.store(true, Ordering::SeqCst);
    }

    /// Connections created from now on accept `add_track` again
    pub fn allow_add_track(&self) {
        self.fail_add_track.store(false, Ordering::SeqCst);
    }

    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// The `index`-th connection created, in creation order
    pub fn connection(&self, index: usize) -> Arc<FakeConnection> {
        self.connections
            .lock()
            .get(index)
            .cloned()
            .expect("No connection with that index")
    }

    pub fn last_connection(&self) -> Arc<FakeConnection> {
        self.connections
            .lock()
            .last()
            .cloned()
            .expect("No connection created yet")
    }
}

#[async_trait]
impl PeerConnectionFactory for FakePeerFactory {
    async fn create(
        &self,
        ice_servers: &[IceServer],
        events: Arc<dyn PeerEventHandler>,
    ) -> Result<Arc<dyn RtcConnection>> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(Error::ConnectionSetup("no network interfaces".to_string()));
        }

        let connection = Arc::new(FakeConnection {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            ice_servers: ice_servers.to_vec(),
            events,
            calls: Mutex::new(Vec::new()),
            state: Mutex::new(ConnectionState::New),
            fail_add_track: self.fail_add_track.load(Ordering::SeqCst),
            remote_gate: Mutex::new(None),
            remote_started: Notify::new(),
            close_gate: Mutex::new(None),
            close_started: Notify::new(),
        });
        self.connections.lock().push(connection.clone());
        Ok(connection)
    }
}
