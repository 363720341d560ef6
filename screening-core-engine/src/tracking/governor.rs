use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

/// Slot taken by a refresh that is about to run.
///
/// Handing it back through [`RefreshGovernor::release`] restores the
/// previous timestamp, so only refreshes that succeed move the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshReservation {
    previous: Option<DateTime<Utc>>,
    reserved_at: DateTime<Utc>,
}

/// Enforces a minimum interval between two refreshes of the tracking
/// snapshot. Requests inside the window are dropped, never queued.
pub struct RefreshGovernor {
    cooldown: Duration,
    last_refresh: Mutex<Option<DateTime<Utc>>>,
}

impl RefreshGovernor {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_refresh: Mutex::new(None),
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.lock()
    }

    /// Whether a refresh at `now` is allowed. Does not record anything.
    pub fn should_proceed(&self, now: DateTime<Utc>) -> bool {
        Self::allows(*self.last_refresh.lock(), now, self.cooldown)
    }

    pub fn record(&self, now: DateTime<Utc>) {
        *self.last_refresh.lock() = Some(now);
    }

    /// Checks and records under one lock.
    pub fn try_reserve(&self, now: DateTime<Utc>) -> Option<RefreshReservation> {
        let mut last_refresh = self.last_refresh.lock();
        if !Self::allows(*last_refresh, now, self.cooldown) {
            return None;
        }
        let previous = last_refresh.replace(now);
        Some(RefreshReservation {
            previous,
            reserved_at: now,
        })
    }

    /// Gives back a reservation whose refresh failed.
    ///
    /// A later record (for instance a forced refresh) is left untouched.
    pub fn release(&self, reservation: RefreshReservation) {
        let mut last_refresh = self.last_refresh.lock();
        if *last_refresh == Some(reservation.reserved_at) {
            *last_refresh = reservation.previous;
        }
    }

    fn allows(last_refresh: Option<DateTime<Utc>>, now: DateTime<Utc>, cooldown: Duration) -> bool {
        match last_refresh {
            Some(last) => now - last >= cooldown,
            None => true,
        }
    }
}
