//! Weather dashboard core: pure state machine, drag reconciliation and view-model helpers.
mod city;
mod dashboard;
mod drag;
mod effect;
mod error;
mod event;
mod filter;
mod msg;
mod state;
mod update;
mod view_model;

pub use city::{City, ClientData, WeatherFlags, WeatherTag, Wind};
pub use dashboard::Dashboard;
pub use drag::{DragSession, HoverTarget, HoveredCard, InsertionPoint, ListKind, Transition};
pub use effect::Effect;
pub use error::MoveError;
pub use event::{Event, EventEmitter, FetchTarget, SubscriptionId};
pub use filter::{visible_catalog, visible_chosen, SortType, WeatherFilter};
pub use msg::Msg;
pub use state::AppState;
pub use update::update;
pub use view_model::{CardView, DashboardView};
