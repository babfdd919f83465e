//! Host-facing call observer
//!
//! Replaces browser-style callback properties with one listener trait. Firing
//! cardinality per method:
//!
//! | method              | fires                                               |
//! |---------------------|-----------------------------------------------------|
//! | `on_local_stream`   | once per successful acquisition                     |
//! | `on_remote_stream`  | once per distinct remote stream id                  |
//! | `on_call_connected` | at most once per session                            |
//! | `on_call_ended`     | at most once per session                            |
//! | `on_error`          | on media-acquisition and connection-setup failures  |
//!
//! Callbacks run on the task that triggered them and must not block.

use std::sync::Arc;

use crate::media::{LocalStream, RemoteStream};

/// Receives call lifecycle notifications
pub trait CallObserver: Send + Sync {
    fn on_local_stream(&self, _stream: &LocalStream) {}

    fn on_remote_stream(&self, _stream: Arc<RemoteStream>) {}

    fn on_call_connected(&self) {}

    fn on_call_ended(&self) {}

    fn on_error(&self, _message: &str) {}
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CallObserver for NoopObserver {}
