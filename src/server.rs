//! Process lifecycle: STARTING → RUNNING → STOPPED

use crate::browser::BrowserSession;
use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicU8, Ordering},
};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Starting,
    Running,
    Stopped,
}

impl ServerState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => ServerState::Starting,
            1 => ServerState::Running,
            _ => ServerState::Stopped,
        }
    }
}

/// Owns the transport's cancellation token and the browser session for the
/// lifetime of the process, and runs the shutdown routine exactly once.
pub struct ServerLoop {
    session: Arc<BrowserSession>,
    cancel: CancellationToken,
    stopped: CancellationToken,
    state: AtomicU8,
    shutdown_started: AtomicBool,
}

impl ServerLoop {
    pub fn new(session: Arc<BrowserSession>) -> Self {
        Self {
            session,
            cancel: CancellationToken::new(),
            stopped: CancellationToken::new(),
            state: AtomicU8::new(ServerState::Starting as u8),
            shutdown_started: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> ServerState {
        ServerState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// Token the transport runs under; cancelled by [`ServerLoop::shutdown`]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Resolves once shutdown has begun
    pub async fn cancelled(&self) {
        self.cancel.cancelled().await
    }

    /// The transport is accepting requests
    pub fn mark_running(&self) {
        let started = self.state.compare_exchange(
            ServerState::Starting as u8,
            ServerState::Running as u8,
            Ordering::SeqCst,
            Ordering::SeqCst,
        );
        if started.is_ok() {
            log::info!("Server running");
        }
    }

    /// Stop the transport, then close any open browser.
    ///
    /// Only the first call does the work and returns `true`. Later calls wait
    /// for that shutdown to finish and return `false`.
    pub async fn shutdown(&self) -> bool {
        if self.shutdown_started.swap(true, Ordering::SeqCst) {
            log::debug!("Shutdown already in progress");
            self.stopped.cancelled().await;
            return false;
        }

        log::info!("Shutting down");
        self.cancel.cancel();
        self.session.shutdown().await;
        self.state.store(ServerState::Stopped as u8, Ordering::SeqCst);
        self.stopped.cancel();
        log::info!("Cleanup complete");
        true
    }
}
