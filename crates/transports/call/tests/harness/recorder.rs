//! Observer that records every notification

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use remotemedia_call::{CallObserver, LocalStream, RemoteStream};

#[derive(Default)]
pub struct RecordingObserver {
    local_streams: AtomicUsize,
    remote_streams: Mutex<Vec<Arc<RemoteStream>>>,
    connected: AtomicUsize,
    ended: AtomicUsize,
    errors: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn local_stream_count(&self) -> usize {
        self.local_streams.load(Ordering::SeqCst)
    }

    pub fn remote_streams(&self) -> Vec<Arc<RemoteStream>> {
        self.remote_streams.lock().clone()
    }

    pub fn connected_count(&self) -> usize {
        self.connected.load(Ordering::SeqCst)
    }

    pub fn ended_count(&self) -> usize {
        self.ended.load(Ordering::SeqCst)
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().clone()
    }
}

impl CallObserver for RecordingObserver {
    fn on_local_stream(&self, _stream: &LocalStream) {
        self.local_streams.fetch_add(1, Ordering::SeqCst);
    }

    fn on_remote_stream(&self, stream: Arc<RemoteStream>) {
        self.remote_streams.lock().push(stream);
    }

    fn on_call_connected(&self) {
        self.connected.fetch_add(1, Ordering::SeqCst);
    }

    fn on_call_ended(&self) {
        self.ended.fetch_add(1, Ordering::SeqCst);
    }

    fn on_error(&self, message: &str) {
        self.errors.lock().push(message.to_string());
    }
}
