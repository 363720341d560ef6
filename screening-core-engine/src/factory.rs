use screening_core_api::{Clock, ScreeningResult, SystemClock};
use std::sync::Arc;

use crate::config::EngineConfig;
use crate::engine::ScreeningEngine;
use crate::http::HttpScreeningBackend;
use crate::poller::TrackingPoller;

/// Builds screening engines wired to the remote store.
///
/// One factory per configuration; every engine it builds owns its own
/// cache and cooldown.
pub struct ScreeningEngineFactory {
    config: EngineConfig,
    clock: Arc<dyn Clock>,
}

impl ScreeningEngineFactory {
    pub fn new(config: EngineConfig) -> ScreeningResult<Self> {
        Ok(Self {
            config: config.validated()?,
            clock: Arc::new(SystemClock),
        })
    }

    pub fn from_env() -> ScreeningResult<Self> {
        Self::new(EngineConfig::from_env()?)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build an engine over a fresh HTTP backend
    pub fn build_engine(&self) -> ScreeningResult<Arc<ScreeningEngine<HttpScreeningBackend>>> {
        let backend = Arc::new(HttpScreeningBackend::new(&self.config)?);
        Ok(Arc::new(ScreeningEngine::new(backend, self.clock.clone(), &self.config)))
    }

    /// Build an engine and start its periodic refresh on the current runtime
    pub fn build_polling_engine(
        &self,
    ) -> ScreeningResult<(Arc<ScreeningEngine<HttpScreeningBackend>>, TrackingPoller)> {
        let engine = self.build_engine()?;
        let poller = TrackingPoller::spawn(engine.clone(), self.config.poll_interval());
        Ok((engine, poller))
    }
}
