//! Session transport
//!
//! One bidirectional WebSocket connection per session, opened once against
//! the host-provided URL and pumped for the life of the terminal view.
//! Inbound frames become surface writes in arrival order; outbound input
//! chunks become text frames in generation order. Closed and Errored are
//! terminal states: the session stays inert until the shell mounts a fresh
//! terminal view.

use crate::events::{AppEvent, EventSender};
use crate::surface::TerminalSurface;
use futures_util::{SinkExt, StreamExt};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::{Error as WsError, Message};
use tracing::{debug, info, warn};

/// Transport lifecycle.
///
/// `Idle -> Connecting -> Open -> {Closed, Errored}`; the terminal states do
/// not transition onward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportState {
    #[default]
    Idle,
    Connecting,
    Open,
    Closed,
    Errored,
}

/// What one inbound frame means for the terminal.
#[derive(Debug, PartialEq, Eq)]
enum Inbound {
    /// A complete, independent chunk of terminal output.
    Output(String),
    /// The remote side ended the session.
    Closed,
    /// Control frame with no terminal output (ping/pong).
    Ignore,
}

/// Decode one inbound frame. Text frames pass through verbatim; binary
/// frames carry UTF-8 bytes and are decoded lossily, so malformed sequences
/// render as replacement characters instead of stalling the pump.
fn classify(msg: Message) -> Inbound {
    match msg {
        Message::Text(text) => Inbound::Output(text.as_str().to_string()),
        Message::Binary(data) => Inbound::Output(String::from_utf8_lossy(&data).into_owned()),
        Message::Close(_) => Inbound::Closed,
        _ => Inbound::Ignore,
    }
}

/// The session's connection to the remote pty.
pub struct SessionTransport {
    state: Arc<Mutex<TransportState>>,
    input_tx: mpsc::UnboundedSender<String>,
    _task: JoinHandle<()>,
}

impl SessionTransport {
    /// Connect to `url` and start pumping. The surface receives every
    /// decoded inbound chunk; everything sent through `input_sender` goes
    /// out verbatim.
    pub fn open(
        url: impl Into<String>,
        surface: Arc<dyn TerminalSurface>,
        events: EventSender,
    ) -> Self {
        let url = url.into();
        let state = Arc::new(Mutex::new(TransportState::Idle));
        let (input_tx, input_rx) = mpsc::unbounded_channel();

        let task_state = Arc::clone(&state);
        let task = tokio::spawn(async move {
            run_session(url, surface, input_rx, task_state, events).await;
        });

        Self {
            state,
            input_tx,
            _task: task,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TransportState {
        *self.state.lock()
    }

    /// Sender the surface's input handler feeds keystroke and paste chunks
    /// into, in generation order.
    pub fn input_sender(&self) -> mpsc::UnboundedSender<String> {
        self.input_tx.clone()
    }
}

fn set_state(slot: &Mutex<TransportState>, next: TransportState) {
    debug!("transport state -> {:?}", next);
    *slot.lock() = next;
}

async fn run_session(
    url: String,
    surface: Arc<dyn TerminalSurface>,
    mut input_rx: mpsc::UnboundedReceiver<String>,
    state: Arc<Mutex<TransportState>>,
    events: EventSender,
) {
    set_state(&state, TransportState::Connecting);
    info!("connecting pty transport: {}", url);

    let ws_stream = match tokio_tungstenite::connect_async(&url).await {
        Ok((ws_stream, _)) => ws_stream,
        Err(e) => {
            warn!("transport connect failed: {}", e);
            set_state(&state, TransportState::Errored);
            let _ = events.send(AppEvent::TransportErrored(e.to_string()));
            return;
        }
    };

    set_state(&state, TransportState::Open);
    surface.focus();
    let _ = events.send(AppEvent::TransportOpened);
    info!("pty transport open");

    let (mut ws_sink, mut ws_rx) = ws_stream.split();

    // Forward surface input to the remote, in generation order.
    let writer = tokio::spawn(async move {
        while let Some(chunk) = input_rx.recv().await {
            if ws_sink.send(Message::Text(chunk.into())).await.is_err() {
                break;
            }
        }
    });

    // Write inbound frames to the surface, in arrival order.
    let outcome: Result<(), WsError> = loop {
        match ws_rx.next().await {
            Some(Ok(msg)) => match classify(msg) {
                Inbound::Output(text) => surface.write(&text),
                Inbound::Closed => {
                    info!("pty transport closed by remote");
                    break Ok(());
                }
                Inbound::Ignore => {}
            },
            Some(Err(e)) => {
                warn!("transport read error: {}", e);
                break Err(e);
            }
            None => {
                info!("pty transport stream ended");
                break Ok(());
            }
        }
    };

    writer.abort();
    match outcome {
        Ok(()) => {
            set_state(&state, TransportState::Closed);
            let _ = events.send(AppEvent::TransportClosed);
        }
        Err(e) => {
            set_state(&state, TransportState::Errored);
            let _ = events.send(AppEvent::TransportErrored(e.to_string()));
        }
    }
}
