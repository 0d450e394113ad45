//! Cancellable periodic task bound to a view's lifetime.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::debug;

/// Runs `tick` every `interval` on a worker thread until stopped.
///
/// Ticks run one after the other on the same thread, so they never overlap.
/// Stopping (explicitly or by dropping the poller) joins the worker: once
/// `stop` returns no further tick can fire.
pub struct Poller {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Poller {
    pub fn start<F>(interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => tick(),
                    // explicit stop or sender dropped
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            debug!("poller stopped");
        });

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Poller whose ticks only signal the returned receiver.
    ///
    /// At most one signal is ever pending: ticks that fire while the consumer
    /// is still busy with the previous one are dropped.
    pub fn signals(interval: Duration) -> (Self, Receiver<()>) {
        let (tx, rx) = mpsc::sync_channel::<()>(1);
        let poller = Self::start(interval, move || {
            // Full means a refresh is already queued.
            let _ = tx.try_send(());
        });
        (poller, rx)
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            tracing::warn!("poller tick panicked");
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.shutdown();
    }
}
