//! Configuration types for call sessions

use serde::{Deserialize, Serialize};

use crate::media::MediaConfiguration;

/// Public STUN servers used when the host supplies nothing else
pub const DEFAULT_STUN_SERVERS: [&str; 2] = [
    "stun:stun.l.google.com:19302",
    "stun:stun1.l.google.com:19302",
];

/// Main configuration for a [`CallSession`](crate::CallSession)
///
/// The ICE server list is fixed for the lifetime of a session; it is read once
/// when the peer connection is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CallConfig {
    /// STUN server URLs (at least one required)
    pub stun_servers: Vec<String>,

    /// TURN server configurations (optional)
    pub turn_servers: Vec<TurnServerConfig>,

    /// Capture configuration used by [`CallSession::acquire_media`](crate::CallSession::acquire_media)
    /// when the host does not pass one explicitly
    pub media: MediaConfiguration,
}

/// TURN server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnServerConfig {
    /// TURN server URL (turn: or turns:)
    pub url: String,

    /// Username for TURN authentication
    pub username: String,

    /// Credential for TURN authentication
    pub credential: String,
}

/// One entry of the ICE server list handed to the peer backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IceServer {
    pub urls: Vec<String>,
    pub username: String,
    pub credential: String,
}

impl Default for CallConfig {
    fn default() -> Self {
        Self {
            stun_servers: DEFAULT_STUN_SERVERS.iter().map(|s| s.to_string()).collect(),
            turn_servers: Vec::new(),
            media: MediaConfiguration::default(),
        }
    }
}

impl CallConfig {
    /// Parse a configuration from JSON, filling missing fields with defaults
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `stun_servers` is empty
    /// - a STUN URL does not start with `stun:` or `stuns:`
    /// - a TURN URL does not start with `turn:` or `turns:`, or has no username
    pub fn validate(&self) -> crate::Result<()> {
        use crate::Error;

        if self.stun_servers.is_empty() {
            return Err(Error::InvalidConfig(
                "At least one STUN server is required".to_string(),
            ));
        }

        for url in &self.stun_servers {
            if !url.starts_with("stun:") && !url.starts_with("stuns:") {
                return Err(Error::InvalidConfig(format!(
                    "STUN server must start with stun: or stuns:, got {}",
                    url
                )));
            }
        }

        for turn in &self.turn_servers {
            if !turn.url.starts_with("turn:") && !turn.url.starts_with("turns:") {
                return Err(Error::InvalidConfig(format!(
                    "TURN server must start with turn: or turns:, got {}",
                    turn.url
                )));
            }
            if turn.username.is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "TURN server {} requires a username",
                    turn.url
                )));
            }
        }

        Ok(())
    }

    /// ICE server list in the order STUN first, then TURN
    pub fn ice_servers(&self) -> Vec<IceServer> {
        self.stun_servers
            .iter()
            .map(|url| IceServer {
                urls: vec![url.clone()],
                username: String::new(),
                credential: String::new(),
            })
            .chain(self.turn_servers.iter().map(|turn| IceServer {
                urls: vec![turn.url.clone()],
                username: turn.username.clone(),
                credential: turn.credential.clone(),
            }))
            .collect()
    }

    /// Replace the STUN server list
    pub fn with_stun_servers(mut self, stun_servers: Vec<String>) -> Self {
        self.stun_servers = stun_servers;
        self
    }

    /// Add TURN servers to this configuration
    pub fn with_turn_servers(mut self, turn_servers: Vec<TurnServerConfig>) -> Self {
        self.turn_servers = turn_servers;
        self
    }

    /// Request camera capture in addition to the microphone
    pub fn audio_and_video(mut self) -> Self {
        self.media = MediaConfiguration { audio_only: false };
        self
    }
}
