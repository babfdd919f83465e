//! Call session test harness
//!
//! Scripted stand-ins for every platform capability a [`CallSession`] uses:
//! - `FakeMediaDevices`: grants or denies capture, remembers handed-out tracks
//! - `FakePeerFactory` / `FakeConnection`: records every platform call in
//!   order and lets the test inject peer events
//! - `RecordingObserver`: counts observer notifications
//!
//! Basic usage pattern:
//!
//! 1. Build fakes and a session with `harness::session(...)`
//! 2. Drive the session through its public operations
//! 3. Inject transport events with `FakeConnection::emit`
//! 4. Assert on recorded calls, observer counters and `CallStatus`

#![allow(dead_code)]

pub mod fake_peer;
pub mod recorder;

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use remotemedia_call::{
    CallSession, DeviceError, LocalStream, LocalTrack, MediaConstraints, MediaDevices, MediaKind,
    SignalingSink,
};
use tokio::sync::Notify;

pub use fake_peer::{FakeConnection, FakePeerFactory, PeerCall};
pub use recorder::RecordingObserver;

/// Capture capability that grants (or denies) every request
pub struct FakeMediaDevices {
    failure: Option<DeviceError>,
    requests: Mutex<Vec<MediaConstraints>>,
    granted: Mutex<Vec<Arc<LocalTrack>>>,
    request_gate: Mutex<Option<Arc<Notify>>>,
}

impl FakeMediaDevices {
    pub fn granting() -> Arc<Self> {
        Arc::new(Self {
            failure: None,
            requests: Mutex::new(Vec::new()),
            granted: Mutex::new(Vec::new()),
            request_gate: Mutex::new(None),
        })
    }

    pub fn denying(error: DeviceError) -> Arc<Self> {
        Arc::new(Self {
            failure: Some(error),
            requests: Mutex::new(Vec::new()),
            granted: Mutex::new(Vec::new()),
            request_gate: Mutex::new(None),
        })
    }

    /// Every track handed out so far
    pub fn tracks(&self) -> Vec<Arc<LocalTrack>> {
        self.granted.lock().clone()
    }

    pub fn requests(&self) -> Vec<MediaConstraints> {
        self.requests.lock().clone()
    }

    /// Make the next request wait for the returned gate, like an open permission prompt
    pub fn hold_requests(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.request_gate.lock() = Some(gate.clone());
        gate
    }
}

#[async_trait]
impl MediaDevices for FakeMediaDevices {
    async fn request_user_media(
        &self,
        constraints: MediaConstraints,
    ) -> Result<LocalStream, DeviceError> {
        self.requests.lock().push(constraints);
        let gate = self.request_gate.lock().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let mut tracks = Vec::new();
        if constraints.audio {
            tracks.push(LocalTrack::new(MediaKind::Audio, "fake-microphone"));
        }
        if constraints.video {
            tracks.push(LocalTrack::new(MediaKind::Video, "fake-camera"));
        }
        self.granted.lock().extend(tracks.iter().cloned());
        Ok(LocalStream::new(tracks))
    }
}

/// Signaling sink that keeps every forwarded candidate string
#[derive(Default)]
pub struct RecordingSignaling {
    candidates: Mutex<Vec<String>>,
}

impl RecordingSignaling {
    pub fn candidates(&self) -> Vec<String> {
        self.candidates.lock().clone()
    }
}

impl SignalingSink for RecordingSignaling {
    fn send_local_candidate(&self, candidate: remotemedia_call::IceCandidate) {
        self.candidates.lock().push(candidate.candidate);
    }
}

/// Session wired to the given fakes with default configuration
pub fn session(
    devices: Arc<FakeMediaDevices>,
    factory: Arc<FakePeerFactory>,
    observer: Arc<RecordingObserver>,
) -> CallSession {
    CallSession::builder(devices, factory)
        .observer(observer)
        .build()
        .expect("Default configuration must be valid")
}

/// Fresh fakes plus a session built from them
pub fn setup() -> (
    CallSession,
    Arc<FakeMediaDevices>,
    Arc<FakePeerFactory>,
    Arc<RecordingObserver>,
) {
    init_tracing();
    let devices = FakeMediaDevices::granting();
    let factory = FakePeerFactory::new();
    let observer = Arc::new(RecordingObserver::default());
    let session = session(devices.clone(), factory.clone(), observer.clone());
    (session, devices, factory, observer)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
