//! Local media acquisition

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use super::{LocalStream, LocalTrack, MediaConfiguration, MediaConstraints, MediaKind};
use crate::observer::CallObserver;
use crate::{Error, Result};

/// Failure reported by the capture capability
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("no capture device: {0}")]
    NotFound(String),

    #[error("device busy: {0}")]
    Busy(String),

    #[error("{0}")]
    Other(String),
}

/// Capture capability supplied by the host platform
#[async_trait]
pub trait MediaDevices: Send + Sync {
    /// Open the tracks described by `constraints`
    async fn request_user_media(
        &self,
        constraints: MediaConstraints,
    ) -> std::result::Result<LocalStream, DeviceError>;
}

/// Obtains local capture tracks and reports the outcome to the observer
pub struct MediaAcquisition {
    devices: Arc<dyn MediaDevices>,
    observer: Arc<dyn CallObserver>,
}

impl MediaAcquisition {
    pub fn new(devices: Arc<dyn MediaDevices>, observer: Arc<dyn CallObserver>) -> Self {
        Self { devices, observer }
    }

    /// Request capture for `config`
    ///
    /// Audio is always requested; video only when `audio_only` is false. On
    /// success the observer receives the stream for local preview. On failure
    /// the observer receives a descriptive message and the device error is
    /// returned as [`Error::MediaAccess`]. There is no retry.
    pub async fn acquire(&self, config: MediaConfiguration) -> Result<LocalStream> {
        let constraints = config.constraints();

        match self.devices.request_user_media(constraints).await {
            Ok(stream) => {
                info!(
                    "Got user media: audio={}, video={}, tracks={}",
                    constraints.audio,
                    constraints.video,
                    stream.tracks().len()
                );
                self.observer.on_local_stream(&stream);
                Ok(stream)
            }
            Err(e) => {
                error!("Failed to get user media: {}", e);
                self.observer
                    .on_error(&format!("Failed to access camera/microphone: {}", e));
                Err(Error::MediaAccess(e.to_string()))
            }
        }
    }
}

/// Devices that grant every request with fresh placeholder tracks
///
/// Used by headless hosts (servers, the demo binary) that feed samples into
/// the peer backend themselves rather than from a physical device.
#[derive(Debug, Default, Clone)]
pub struct StaticMediaDevices;

#[async_trait]
impl MediaDevices for StaticMediaDevices {
    async fn request_user_media(
        &self,
        constraints: MediaConstraints,
    ) -> std::result::Result<LocalStream, DeviceError> {
        let mut tracks = Vec::new();
        if constraints.audio {
            tracks.push(LocalTrack::new(MediaKind::Audio, "static-microphone"));
        }
        if constraints.video {
            tracks.push(LocalTrack::new(MediaKind::Video, "static-camera"));
        }
        Ok(LocalStream::new(tracks))
    }
}
