//! Local and remote media handles
//!
//! A [`LocalStream`] is the exclusive owner of the capture tracks granted by a
//! [`MediaDevices`] implementation. Dropping or stopping it stops every track
//! exactly once. A [`RemoteStream`] only mirrors what the remote peer has
//! announced; its media is owned by the peer backend.

pub mod acquisition;

pub use acquisition::{DeviceError, MediaAcquisition, MediaDevices, StaticMediaDevices};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Capture configuration for one acquisition call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfiguration {
    /// Skip the camera and capture the microphone only
    pub audio_only: bool,
}

impl Default for MediaConfiguration {
    fn default() -> Self {
        Self { audio_only: true }
    }
}

impl MediaConfiguration {
    /// Constraints handed to the capture capability (audio is always requested)
    pub fn constraints(&self) -> MediaConstraints {
        MediaConstraints {
            audio: true,
            video: !self.audio_only,
        }
    }
}

/// What the capture capability is asked to open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaConstraints {
    pub audio: bool,
    pub video: bool,
}

/// Kind of a media track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Audio => write!(f, "audio"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// One capture track
///
/// Shared via `Arc` so that the capture device, the peer backend and the
/// session can all observe `enabled`/`stopped`, but only the owning
/// [`LocalStream`] stops it.
#[derive(Debug)]
pub struct LocalTrack {
    id: String,
    kind: MediaKind,
    label: String,
    enabled: AtomicBool,
    stopped: AtomicBool,
}

impl LocalTrack {
    /// Create an enabled, running track
    pub fn new(kind: MediaKind, label: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            label: label.into(),
            enabled: AtomicBool::new(true),
            stopped: AtomicBool::new(false),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Device label reported by the capture capability
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Stop capture. Returns `true` only for the call that actually stopped it.
    fn stop(&self) -> bool {
        !self.stopped.swap(true, Ordering::SeqCst)
    }
}

/// Exclusively owned set of capture tracks
pub struct LocalStream {
    id: String,
    tracks: Vec<Arc<LocalTrack>>,
}

impl LocalStream {
    pub fn new(tracks: Vec<Arc<LocalTrack>>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            tracks,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tracks(&self) -> &[Arc<LocalTrack>] {
        &self.tracks
    }

    pub fn audio_tracks(&self) -> impl Iterator<Item = &Arc<LocalTrack>> {
        self.tracks.iter().filter(|t| t.kind() == MediaKind::Audio)
    }

    pub fn video_tracks(&self) -> impl Iterator<Item = &Arc<LocalTrack>> {
        self.tracks.iter().filter(|t| t.kind() == MediaKind::Video)
    }

    /// First track of the given kind, the one mute/video toggles act on
    pub fn first_track(&self, kind: MediaKind) -> Option<&Arc<LocalTrack>> {
        self.tracks.iter().find(|t| t.kind() == kind)
    }

    /// Stop every track and release the handle
    pub fn stop(self) {
        drop(self);
    }

    fn stop_tracks(&self) {
        for track in &self.tracks {
            if track.stop() {
                debug!("Stopped local {} track {}", track.kind(), track.id());
            }
        }
    }
}

impl Drop for LocalStream {
    fn drop(&mut self) {
        self.stop_tracks();
    }
}

impl fmt::Debug for LocalStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalStream")
            .field("id", &self.id)
            .field("tracks", &self.tracks.len())
            .finish()
    }
}

/// A track announced by the remote peer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTrack {
    pub id: String,
    pub kind: MediaKind,
}

/// Tracks the remote peer has grouped under one stream id
#[derive(Debug)]
pub struct RemoteStream {
    id: String,
    tracks: Mutex<Vec<RemoteTrack>>,
}

impl RemoteStream {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tracks: Mutex::new(Vec::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tracks(&self) -> Vec<RemoteTrack> {
        self.tracks.lock().clone()
    }

    pub(crate) fn push_track(&self, track: RemoteTrack) {
        let mut tracks = self.tracks.lock();
        if !tracks.iter().any(|t| t.id == track.id) {
            tracks.push(track);
        }
    }
}
