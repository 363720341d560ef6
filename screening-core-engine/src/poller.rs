use screening_core_api::{RefreshOutcome, RefreshTrigger, TrackingService};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Background task raising a [`RefreshTrigger::Timer`] request on a fixed
/// interval. Ticks share the engine's cooldown with every other trigger.
///
/// The task stops on [`TrackingPoller::shutdown`] or when the poller is
/// dropped.
pub struct TrackingPoller {
    stop: watch::Sender<bool>,
    handle: Option<JoinHandle<()>>,
}

impl TrackingPoller {
    /// Starts polling on the current tokio runtime. The first tick fires
    /// immediately.
    pub fn spawn<S>(service: Arc<S>, every: Duration) -> Self
    where
        S: TrackingService + ?Sized + 'static,
    {
        let (stop, mut stopped) = watch::channel(false);
        let handle = tokio::spawn(async move {
            let mut ticker = interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            info!(interval_secs = every.as_secs(), "Tracking poller started");

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        match service.request_refresh(RefreshTrigger::Timer).await {
                            Ok(RefreshOutcome::Suppressed) => debug!("Timer refresh suppressed"),
                            Ok(RefreshOutcome::Refreshed(_)) => debug!("Timer refresh completed"),
                            Err(e) if e.is_session_invalid() => {
                                warn!("Session rejected, stopping tracking poller");
                                break;
                            }
                            Err(e) => warn!(error = %e, "Timer refresh failed"),
                        }
                    }
                    changed = stopped.changed() => {
                        if changed.is_err() || *stopped.borrow() {
                            break;
                        }
                    }
                }
            }
            info!("Tracking poller stopped");
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().map(|h| !h.is_finished()).unwrap_or(false)
    }

    /// Signals the task to stop and waits for it.
    pub async fn shutdown(mut self) {
        let _ = self.stop.send(true);
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!(error = %e, "Tracking poller task ended abnormally");
            }
        }
    }
}

impl Drop for TrackingPoller {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
