use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use weather_logging::{weather_debug, weather_error, weather_warn};

use crate::fetch::{FetchSettings, ReqwestWeatherSource, WeatherSource};
use crate::{EngineCommand, EngineEvent};

/// Runs fetches on a background tokio runtime and hands results back over a channel.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        Self::with_source(Arc::new(ReqwestWeatherSource::new(settings)))
    }

    pub fn with_source(source: Arc<dyn WeatherSource>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    weather_error!("failed to start fetch runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(source.as_ref(), command, event_tx).await;
                });
            }
            weather_debug!("fetch engine shutting down");
        });

        Self { cmd_tx, event_rx }
    }

    /// Queues `command`. Returns false if the fetch runtime is gone.
    pub fn request(&self, command: EngineCommand) -> bool {
        match self.cmd_tx.send(command) {
            Ok(()) => true,
            Err(err) => {
                weather_warn!("fetch engine unavailable, dropped {:?}", err.0);
                false
            }
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    source: &dyn WeatherSource,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::FetchPosition => EngineEvent::PositionFetched(source.fetch_position().await),
        EngineCommand::FetchCatalog => EngineEvent::CatalogFetched(source.fetch_catalog().await),
    };
    let _ = event_tx.send(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_reports_stopped_runtime() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (_event_tx, event_rx) = mpsc::channel();
        drop(cmd_rx);
        let engine = EngineHandle { cmd_tx, event_rx };

        assert!(!engine.request(EngineCommand::FetchCatalog));
        assert!(engine.try_recv().is_none());
    }
}
