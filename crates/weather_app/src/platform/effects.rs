use std::time::Duration;

use weather_core::{Effect, FetchTarget, Msg};
use weather_engine::{EngineCommand, EngineEvent, EngineHandle, FetchSettings};
use weather_logging::{weather_info, weather_warn};

/// Bridges core effects to the fetch engine and engine results back to messages.
pub struct EffectRunner {
    engine: EngineHandle,
    in_flight: usize,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> Self {
        Self {
            engine: EngineHandle::new(settings),
            in_flight: 0,
        }
    }

    /// Runs `effects`; returns a message for each error the user should see.
    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<String> {
        let mut reports = Vec::new();
        for effect in effects {
            match effect {
                Effect::FetchPosition => {
                    weather_info!("requesting client position");
                    self.request(EngineCommand::FetchPosition);
                }
                Effect::FetchCatalog => {
                    weather_info!("requesting city catalog");
                    self.request(EngineCommand::FetchCatalog);
                }
                Effect::ReportError(err) => reports.push(format!("move rejected: {err}")),
                // Events are dispatched by the dashboard itself.
                Effect::Emit(_) => {}
            }
        }
        reports
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Collects finished fetches without blocking.
    pub fn poll(&mut self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(self.finish(event));
        }
        inbox
    }

    /// Waits up to `timeout` for the next finished fetch.
    pub fn wait(&mut self, timeout: Duration) -> Option<Msg> {
        let event = self.engine.recv_timeout(timeout)?;
        Some(self.finish(event))
    }

    fn request(&mut self, command: EngineCommand) {
        if self.engine.request(command) {
            self.in_flight += 1;
        }
    }

    fn finish(&mut self, event: EngineEvent) -> Msg {
        self.in_flight = self.in_flight.saturating_sub(1);
        map_event(event)
    }
}

pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PositionFetched(Ok(client)) => Msg::PositionFetched(client),
        EngineEvent::CatalogFetched(Ok(cities)) => Msg::CatalogFetched(cities),
        EngineEvent::PositionFetched(Err(err)) => {
            weather_warn!("position fetch failed: {}", err);
            Msg::FetchFailed {
                target: FetchTarget::Position,
                message: err.to_string(),
            }
        }
        EngineEvent::CatalogFetched(Err(err)) => {
            weather_warn!("catalog fetch failed: {}", err);
            Msg::FetchFailed {
                target: FetchTarget::Catalog,
                message: err.to_string(),
            }
        }
    }
}
