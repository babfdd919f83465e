//! Loopback call demo
//!
//! Runs two call sessions in one process, wires their signaling together over
//! in-memory channels, negotiates a real webrtc-rs connection between them,
//! holds the call, then hangs up from the caller side.
//!
//! # Usage
//!
//! ```bash
//! # Audio-only call with the default STUN servers
//! cargo run --bin call-demo
//!
//! # Audio + video, custom STUN, verbose negotiation logs
//! RUST_LOG=remotemedia_call=debug cargo run --bin call-demo -- \
//!   --video \
//!   --stun-servers stun:stun.l.google.com:19302
//!
//! # Load a JSON call configuration
//! cargo run --bin call-demo -- --config ./call.json
//! ```

use anyhow::Context;
use clap::Parser;
use remotemedia_call::{
    CallConfig, CallObserver, CallPhase, CallSession, ChannelSignaling, ConnectionState,
    LocalStream, RemoteStream, SignalingMessage, StaticMediaDevices, TurnServerConfig,
    WebRtcPeerFactory,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// RemoteMedia loopback call
///
/// Places a one-to-one call between two in-process sessions.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON call configuration (CLI flags below override it)
    #[arg(long, env = "CALL_CONFIG")]
    config: Option<PathBuf>,

    /// STUN servers (comma-separated)
    #[arg(long, value_delimiter = ',', env = "CALL_STUN_SERVERS")]
    stun_servers: Vec<String>,

    /// TURN servers (format: turn:host:port:username:password, comma-separated)
    #[arg(long, value_delimiter = ',', env = "CALL_TURN_SERVERS")]
    turn_servers: Vec<String>,

    /// Capture video as well as audio
    #[arg(long, default_value_t = false)]
    video: bool,

    /// Seconds to wait for both peers to connect
    #[arg(long, default_value_t = 20, env = "CALL_CONNECT_TIMEOUT")]
    connect_timeout_secs: u64,

    /// Seconds to hold the call once connected
    #[arg(long, default_value_t = 3)]
    hold_secs: u64,
}

/// Parse TURN server string (format: turn:host:port:username:password or turns:host:port:username:password)
fn parse_turn_server(s: &str) -> Result<TurnServerConfig, String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() < 5 {
        return Err(format!(
            "Invalid TURN server format: '{}'. Expected: turn:host:port:username:password",
            s
        ));
    }

    let protocol = parts[0];
    if protocol != "turn" && protocol != "turns" {
        return Err(format!(
            "Invalid TURN protocol: '{}'. Expected 'turn' or 'turns'",
            protocol
        ));
    }

    Ok(TurnServerConfig {
        url: format!("{}:{}:{}", protocol, parts[1], parts[2]),
        username: parts[3].to_string(),
        // Password may contain colons
        credential: parts[4..].join(":"),
    })
}

/// Build the call configuration from the optional file plus CLI overrides
fn build_config_from_args(args: &Args) -> anyhow::Result<CallConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            CallConfig::from_json_str(&json)?
        }
        None => CallConfig::default(),
    };

    if !args.stun_servers.is_empty() {
        config = config.with_stun_servers(args.stun_servers.clone());
    }

    let mut turn_servers = Vec::new();
    for turn_str in &args.turn_servers {
        let turn_config = parse_turn_server(turn_str)
            .map_err(|e| anyhow::anyhow!("Failed to parse TURN server: {}", e))?;
        info!(
            "Adding TURN server: {} (user: {})",
            turn_config.url, turn_config.username
        );
        turn_servers.push(turn_config);
    }
    if !turn_servers.is_empty() {
        config = config.with_turn_servers(turn_servers);
    }

    if args.video {
        config = config.audio_and_video();
    }

    config.validate()?;
    Ok(config)
}

/// Logs every notification under the peer's name
struct LoggingObserver {
    peer: &'static str,
}

impl CallObserver for LoggingObserver {
    fn on_local_stream(&self, stream: &LocalStream) {
        info!(peer = self.peer, "Local stream ready ({} tracks)", stream.tracks().len());
    }

    fn on_remote_stream(&self, stream: Arc<RemoteStream>) {
        info!(peer = self.peer, "Remote stream {} attached", stream.id());
    }

    fn on_call_connected(&self) {
        info!(peer = self.peer, "Call connected");
    }

    fn on_call_ended(&self) {
        info!(peer = self.peer, "Call ended");
    }

    fn on_error(&self, message: &str) {
        error!(peer = self.peer, "{}", message);
    }
}

fn build_session(
    peer: &'static str,
    config: &CallConfig,
) -> anyhow::Result<(Arc<CallSession>, ChannelSignaling, mpsc::UnboundedReceiver<SignalingMessage>)>
{
    let (signaling, outbound) = ChannelSignaling::new();
    let session = CallSession::builder(
        Arc::new(StaticMediaDevices),
        Arc::new(WebRtcPeerFactory::new()),
    )
    .config(config.clone())
    .observer(Arc::new(LoggingObserver { peer }))
    .signaling(Arc::new(signaling.clone()))
    .build()?;

    info!(peer, session_id = session.session_id(), "Session created");
    Ok((Arc::new(session), signaling, outbound))
}

/// Deliver one side's outbound signaling to the other side
fn spawn_relay(
    from: &'static str,
    mut outbound: mpsc::UnboundedReceiver<SignalingMessage>,
    to: Arc<CallSession>,
    reply: ChannelSignaling,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = outbound.recv().await {
            match to.handle_signaling(msg).await {
                Ok(Some(response)) => reply.send(response),
                Ok(None) => {}
                Err(e) => warn!(from, "Signaling message rejected: {}", e),
            }
        }
    })
}

async fn wait_connected(session: &CallSession, timeout: Duration) -> anyhow::Result<()> {
    let mut status = session.subscribe_status();
    tokio::time::timeout(
        timeout,
        status.wait_for(|s| s.connection_state == ConnectionState::Connected),
    )
    .await
    .context("Timed out waiting for the connection")?
    .context("Session dropped before connecting")?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "RemoteMedia loopback call starting"
    );

    let config = build_config_from_args(&args)?;
    info!(
        stun_servers = ?config.stun_servers,
        turn_servers = config.turn_servers.len(),
        audio_only = config.media.audio_only,
        "Call configuration"
    );

    let (caller, caller_signaling, caller_outbound) = build_session("caller", &config)?;
    let (callee, callee_signaling, callee_outbound) = build_session("callee", &config)?;

    // Replies produced by one side travel back on that side's outbound channel
    let caller_relay = spawn_relay(
        "caller",
        caller_outbound,
        Arc::clone(&callee),
        callee_signaling.clone(),
    );
    let callee_relay = spawn_relay(
        "callee",
        callee_outbound,
        Arc::clone(&caller),
        caller_signaling.clone(),
    );

    for session in [&caller, &callee] {
        session.acquire_media(config.media).await?;
        session.create_connection().await?;
    }

    let offer = caller.create_offer().await?;
    caller_signaling.send(offer.into());

    let timeout = Duration::from_secs(args.connect_timeout_secs);
    wait_connected(&caller, timeout).await?;
    wait_connected(&callee, timeout).await?;
    info!("Both peers connected: {:?}", caller.status());

    tokio::time::sleep(Duration::from_secs(args.hold_secs)).await;

    caller_signaling.send(SignalingMessage::Bye);
    caller.end_call().await;

    let mut callee_status = callee.subscribe_status();
    let hung_up = tokio::time::timeout(
        Duration::from_secs(5),
        callee_status.wait_for(|s| !s.is_in_call),
    )
    .await
    .map(|r| r.is_ok())
    .unwrap_or(false);
    if !hung_up {
        warn!("Callee did not observe the hang-up; ending locally");
        callee.end_call().await;
    }

    caller_relay.abort();
    callee_relay.abort();

    info!(
        caller = ?caller.phase(),
        callee = ?callee.phase(),
        "Loopback call finished"
    );
    debug_assert_eq!(caller.phase(), CallPhase::Ended);
    Ok(())
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_turn_server() {
        let turn = parse_turn_server("turn:relay.example.com:3478:alice:pa:ss").unwrap();
        assert_eq!(turn.url, "turn:relay.example.com:3478");
        assert_eq!(turn.username, "alice");
        assert_eq!(turn.credential, "pa:ss");

        assert!(parse_turn_server("turn:relay.example.com:3478").is_err());
        assert!(parse_turn_server("http:relay:3478:a:b").is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let args = Args::parse_from([
            "call-demo",
            "--video",
            "--stun-servers",
            "stun:stun.example.org:3478",
        ]);
        let config = build_config_from_args(&args).unwrap();
        assert!(!config.media.audio_only);
        assert_eq!(config.stun_servers, vec!["stun:stun.example.org:3478"]);
    }
}
