//! Application event definitions
//!
//! Components report lifecycle transitions over one unbounded channel; the
//! embedding shell owns the receiver and reacts (reload, status display).

use tokio::sync::mpsc;

/// Sender half of the application event channel.
pub type EventSender = mpsc::UnboundedSender<AppEvent>;

/// Receiver half of the application event channel.
pub type EventReceiver = mpsc::UnboundedReceiver<AppEvent>;

/// Create the application event channel.
pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// Application-wide events for inter-component communication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Transport connection established; terminal output is flowing.
    TransportOpened,

    /// Transport closed by the remote side. The session is over.
    TransportClosed,

    /// Transport failed. The session is over.
    TransportErrored(String),

    /// The welcome view was dismissed; the shell must re-evaluate the
    /// onboarding gate and mount again.
    ReloadRequested,
}
