//! Observable call status

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::peer::ConnectionState;

/// Snapshot of a call as seen by the host application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallStatus {
    pub is_in_call: bool,
    pub is_muted: bool,
    pub is_video_on: bool,
    /// `new` whenever no connection exists
    pub connection_state: ConnectionState,
}

/// Pushes [`CallStatus`] snapshots to subscribers
///
/// Holds no state of its own; the session publishes a snapshot before every
/// state-changing operation returns, so a subscriber is never more than one
/// operation behind.
#[derive(Debug)]
pub struct CallStatusReporter {
    tx: watch::Sender<CallStatus>,
}

impl CallStatusReporter {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(CallStatus::default());
        Self { tx }
    }

    /// Publish a snapshot; subscribers are woken only if it differs
    pub fn publish(&self, status: CallStatus) {
        self.tx.send_if_modified(|current| {
            if *current == status {
                false
            } else {
                *current = status;
                true
            }
        });
    }

    pub fn current(&self) -> CallStatus {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<CallStatus> {
        self.tx.subscribe()
    }
}

impl Default for CallStatusReporter {
    fn default() -> Self {
        Self::new()
    }
}
