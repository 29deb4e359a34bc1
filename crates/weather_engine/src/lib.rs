//! Weather engine: remote fetches for the dashboard and their background execution.
mod engine;
mod fetch;
mod types;

pub use engine::EngineHandle;
pub use fetch::{
    FetchSettings, ReqwestWeatherSource, WeatherSource, DEFAULT_CATALOG_URL, DEFAULT_POSITION_URL,
};
pub use types::{EngineCommand, EngineEvent, FailureKind, FetchError};
