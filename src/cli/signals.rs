//! Stop signal handling for the command loop

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use colored::Colorize;
use tokio::sync::Notify;

/// Cooperative stop request, set by SIGINT/SIGTERM.
///
/// The command loop polls [`is_shutdown`](Self::is_shutdown) once per
/// iteration and may also await [`requested`](Self::requested).
#[derive(Clone, Default)]
pub struct ShutdownSignal {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownSignal {
    /// Create a new shutdown signal handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if shutdown was requested
    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Request shutdown
    pub fn trigger(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    /// Resolve once shutdown has been requested
    pub async fn requested(&self) {
        loop {
            let notified = self.notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.is_shutdown() {
                return;
            }

            notified.await;
        }
    }

    /// Setup signal handlers
    #[cfg(unix)]
    pub fn setup(&self) -> Result<(), std::io::Error> {
        use tokio::signal::unix::{signal, SignalKind};

        for (kind, name) in [
            (SignalKind::interrupt(), "SIGINT"),
            (SignalKind::terminate(), "SIGTERM"),
        ] {
            let mut stream = signal(kind)?;
            let shutdown = self.clone();
            tokio::spawn(async move {
                stream.recv().await;
                eprintln!("{} Received {} (shutdown)", "↓".cyan(), name);
                shutdown.trigger();
            });
        }

        Ok(())
    }

    /// Setup signal handlers
    #[cfg(not(unix))]
    pub fn setup(&self) -> Result<(), std::io::Error> {
        let shutdown = self.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("{} Received Ctrl+C (shutdown)", "↓".cyan());
                shutdown.trigger();
            }
        });
        Ok(())
    }
}
