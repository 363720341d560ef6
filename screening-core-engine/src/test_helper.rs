//! Test helper module for engine tests
//!
//! This module provides an in-memory stand-in for the remote screening
//! store that records every call it receives, plus a manually advanced
//! clock, so cache expiry and cooldown behaviour can be exercised without
//! a network or real time passing.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use screening_core_api::{Clock, CustomerKey, CustomerType, ScreeningError, ScreeningResult};
use screening_core_db::models::{
    OnboardingRecord, TrackedPersonRecord, TrackingFlag, WatchlistHitRecord,
};
use screening_core_db::repository::{
    CustomerResolution, FetchTrackedPersons, ListOnboarding, MarkMatched, ResolveCustomer,
    SearchWatchlist, SetTracking,
};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::Notify;

use crate::config::EngineConfig;
use crate::engine::ScreeningEngine;
use crate::tracking::test_utils::test_time;

/// A call received by [`InMemoryBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    FetchTrackedPersons,
    SetTracking { name: String, is_tracking: bool },
    ListOnboarding(CustomerType),
    SearchWatchlist(String),
    ResolveCustomer { customer: CustomerKey, resolution: CustomerResolution },
    MarkMatched(i64),
}

/// How a failing operation fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Transport,
    Unauthorized,
}

impl Failure {
    fn into_error(self) -> ScreeningError {
        match self {
            Failure::Transport => ScreeningError::Transport {
                status: Some(503),
                message: "Service Unavailable".to_string(),
            },
            Failure::Unauthorized => ScreeningError::Unauthorized,
        }
    }
}

#[derive(Default)]
struct BackendState {
    tracked: BTreeMap<String, TrackedPersonRecord>,
    onboarding: HashMap<CustomerType, Vec<OnboardingRecord>>,
    watchlist: HashMap<String, Vec<WatchlistHitRecord>>,
    calls: Vec<BackendCall>,
    fail_fetch: Option<Failure>,
    fail_set_tracking: Option<Failure>,
    fail_list: HashSet<CustomerType>,
    fail_search: HashSet<String>,
    fail_resolve: HashSet<CustomerKey>,
    fail_mark_matched: bool,
    set_tracking_gate: Option<Arc<Notify>>,
    search_gate: Option<Arc<Notify>>,
}

/// In-memory remote store with call recording and failure injection.
///
/// Approving a customer starts tracking it under the onboarding dataset,
/// which mirrors what the remote store does.
#[derive(Default)]
pub struct InMemoryBackend {
    state: Mutex<BackendState>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_tracked(&self, name: &str, is_tracking: bool, sanction_dataset: &str) {
        let record = TrackedPersonRecord {
            name: Some(name.to_string()),
            country: None,
            identifiers: None,
            risk_level: None,
            sanction_dataset: Some(sanction_dataset.to_string()),
            is_tracking: Some(TrackingFlag::Numeric(if is_tracking { 1 } else { 0 })),
            start_date: Some(test_time() - Duration::days(30)),
            stop_date: (!is_tracking).then(|| test_time() - Duration::days(1)),
        };
        self.state.lock().tracked.insert(name.to_string(), record);
    }

    pub fn seed_onboarding(&self, customer_type: CustomerType, id: i64, name: &str, status: Option<&str>) {
        let record = OnboardingRecord {
            id,
            name: Some(name.to_string()),
            full_name: None,
            first_name: None,
            last_name: None,
            company_name: None,
            status: status.map(str::to_string),
        };
        self.state
            .lock()
            .onboarding
            .entry(customer_type)
            .or_default()
            .push(record);
    }

    pub fn seed_watchlist_hit(&self, search_term: &str, id: i64, name: &str, risk_level: f64) {
        let hit = WatchlistHitRecord {
            id,
            name: Some(name.to_string()),
            risk_level: Some(risk_level),
            country: None,
            match_type: Some("sanction".to_string()),
        };
        self.state
            .lock()
            .watchlist
            .entry(search_term.to_string())
            .or_default()
            .push(hit);
    }

    /// Hit carrying only an id and risk, as some watchlist sources return
    pub fn seed_nameless_watchlist_hit(&self, search_term: &str, id: i64, risk_level: f64) {
        let hit = WatchlistHitRecord {
            id,
            name: None,
            risk_level: Some(risk_level),
            country: None,
            match_type: Some("sanction".to_string()),
        };
        self.state
            .lock()
            .watchlist
            .entry(search_term.to_string())
            .or_default()
            .push(hit);
    }

    pub fn seed_nameless_onboarding(&self, customer_type: CustomerType, id: i64) {
        let record = OnboardingRecord {
            id,
            name: None,
            full_name: None,
            first_name: None,
            last_name: None,
            company_name: None,
            status: None,
        };
        self.state
            .lock()
            .onboarding
            .entry(customer_type)
            .or_default()
            .push(record);
    }

    pub fn fail_fetch(&self, failure: Option<Failure>) {
        self.state.lock().fail_fetch = failure;
    }

    pub fn fail_set_tracking(&self, failure: Option<Failure>) {
        self.state.lock().fail_set_tracking = failure;
    }

    pub fn fail_list(&self, customer_type: CustomerType) {
        self.state.lock().fail_list.insert(customer_type);
    }

    pub fn fail_search(&self, search_term: &str) {
        self.state.lock().fail_search.insert(search_term.to_string());
    }

    pub fn fail_resolve(&self, customer: CustomerKey) {
        self.state.lock().fail_resolve.insert(customer);
    }

    pub fn fail_mark_matched(&self) {
        self.state.lock().fail_mark_matched = true;
    }

    /// Holds every `set_tracking` call until the returned gate is notified.
    pub fn hold_set_tracking(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.state.lock().set_tracking_gate = Some(gate.clone());
        gate
    }

    /// Holds every `search_watchlist` call until the returned gate is notified.
    pub fn hold_search(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.state.lock().search_gate = Some(gate.clone());
        gate
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.state.lock().calls.clone()
    }

    pub fn count_calls(&self, predicate: impl Fn(&BackendCall) -> bool) -> usize {
        self.state.lock().calls.iter().filter(|call| predicate(call)).count()
    }

    pub fn fetch_count(&self) -> usize {
        self.count_calls(|call| *call == BackendCall::FetchTrackedPersons)
    }

    pub fn remote_is_tracking(&self, name: &str) -> bool {
        self.state
            .lock()
            .tracked
            .get(name)
            .and_then(|record| record.is_tracking)
            .map(|flag| flag.is_set())
            .unwrap_or(false)
    }

    pub fn customer_status(&self, customer: CustomerKey) -> Option<String> {
        self.state
            .lock()
            .onboarding
            .get(&customer.customer_type)
            .and_then(|records| records.iter().find(|r| r.id == customer.id))
            .and_then(|record| record.status.clone())
    }

    fn record_call(&self, call: BackendCall) {
        self.state.lock().calls.push(call);
    }
}

#[async_trait]
impl FetchTrackedPersons for InMemoryBackend {
    async fn fetch_tracked_persons(&self) -> ScreeningResult<Vec<TrackedPersonRecord>> {
        let mut state = self.state.lock();
        state.calls.push(BackendCall::FetchTrackedPersons);
        if let Some(failure) = state.fail_fetch {
            return Err(failure.into_error());
        }
        Ok(state.tracked.values().cloned().collect())
    }
}

#[async_trait]
impl SetTracking for InMemoryBackend {
    async fn set_tracking(&self, name: &str, is_tracking: bool) -> ScreeningResult<()> {
        self.record_call(BackendCall::SetTracking {
            name: name.to_string(),
            is_tracking,
        });
        let gate = self.state.lock().set_tracking_gate.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let mut state = self.state.lock();
        if let Some(failure) = state.fail_set_tracking {
            return Err(failure.into_error());
        }
        let record = state
            .tracked
            .entry(name.to_string())
            .or_insert_with(|| TrackedPersonRecord {
                name: Some(name.to_string()),
                country: None,
                identifiers: None,
                risk_level: None,
                sanction_dataset: None,
                is_tracking: None,
                start_date: None,
                stop_date: None,
            });
        record.is_tracking = Some(TrackingFlag::Numeric(if is_tracking { 1 } else { 0 }));
        Ok(())
    }
}

#[async_trait]
impl ListOnboarding for InMemoryBackend {
    async fn list_onboarding(&self, customer_type: CustomerType) -> ScreeningResult<Vec<OnboardingRecord>> {
        let mut state = self.state.lock();
        state.calls.push(BackendCall::ListOnboarding(customer_type));
        if state.fail_list.contains(&customer_type) {
            return Err(Failure::Transport.into_error());
        }
        Ok(state.onboarding.get(&customer_type).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl SearchWatchlist for InMemoryBackend {
    async fn search_watchlist(&self, search_term: &str) -> ScreeningResult<Vec<WatchlistHitRecord>> {
        self.record_call(BackendCall::SearchWatchlist(search_term.to_string()));
        let gate = self.state.lock().search_gate.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let state = self.state.lock();
        if state.fail_search.contains(search_term) {
            return Err(Failure::Transport.into_error());
        }
        Ok(state.watchlist.get(search_term).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl ResolveCustomer for InMemoryBackend {
    async fn resolve_customer(&self, customer: CustomerKey, resolution: CustomerResolution) -> ScreeningResult<()> {
        let mut state = self.state.lock();
        state.calls.push(BackendCall::ResolveCustomer { customer, resolution });
        if state.fail_resolve.contains(&customer) {
            return Err(Failure::Transport.into_error());
        }

        let record = state
            .onboarding
            .get_mut(&customer.customer_type)
            .and_then(|records| records.iter_mut().find(|r| r.id == customer.id))
            .ok_or_else(|| ScreeningError::Transport {
                status: Some(404),
                message: "Not Found".to_string(),
            })?;
        record.status = Some(resolution_status(resolution).to_string());
        let name = record.display_name();

        if let (CustomerResolution::Approve, Some(name)) = (resolution, name) {
            state.tracked.insert(
                name.clone(),
                TrackedPersonRecord {
                    name: Some(name),
                    country: None,
                    identifiers: None,
                    risk_level: None,
                    sanction_dataset: Some(screening_core_api::ONBOARDED_DATASET.to_string()),
                    is_tracking: Some(TrackingFlag::Numeric(1)),
                    start_date: None,
                    stop_date: None,
                },
            );
        }
        Ok(())
    }
}

#[async_trait]
impl MarkMatched for InMemoryBackend {
    async fn mark_matched(&self, match_id: i64) -> ScreeningResult<()> {
        let mut state = self.state.lock();
        state.calls.push(BackendCall::MarkMatched(match_id));
        if state.fail_mark_matched {
            return Err(Failure::Transport.into_error());
        }
        Ok(())
    }
}

fn resolution_status(resolution: CustomerResolution) -> &'static str {
    match resolution {
        CustomerResolution::Approve => "approved",
        CustomerResolution::Reject => "rejected",
    }
}

/// Clock that only moves when told to
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(start) }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// Everything a test needs to drive one isolated engine
pub struct TestContext {
    pub backend: Arc<InMemoryBackend>,
    pub clock: Arc<ManualClock>,
    pub engine: Arc<ScreeningEngine<InMemoryBackend>>,
}

/// Setup a fresh engine over an empty in-memory backend
///
/// Uses the default cache TTL (2 minutes) and cooldown (3 seconds). Each
/// call returns an independent engine; nothing is shared between tests.
pub fn setup_test_context() -> TestContext {
    let backend = Arc::new(InMemoryBackend::new());
    let clock = Arc::new(ManualClock::new(test_time()));
    let config = EngineConfig::default();
    let engine = Arc::new(ScreeningEngine::new(backend.clone(), clock.clone(), &config));
    TestContext { backend, clock, engine }
}
