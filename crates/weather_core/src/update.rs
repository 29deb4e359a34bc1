use weather_logging::{weather_debug, weather_warn};

use crate::{AppState, Effect, Event, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => vec![Effect::FetchPosition, Effect::FetchCatalog],
        Msg::PositionFetched(client) => {
            let city = client.city.clone();
            state.set_client(client);
            vec![Effect::Emit(Event::PositionLoaded { city })]
        }
        Msg::CatalogFetched(cities) => {
            let count = state.load_catalog(cities);
            vec![Effect::Emit(Event::CatalogLoaded { count })]
        }
        Msg::FetchFailed { target, message } => {
            weather_warn!("fetch of {:?} failed: {}", target, message);
            vec![Effect::Emit(Event::FetchFailed { target, message })]
        }
        Msg::FilterTextChanged(text) => state
            .set_filter_text(text)
            .map(Effect::Emit)
            .into_iter()
            .collect(),
        Msg::SortSelected(sort) => vec![Effect::Emit(state.set_sort(sort))],
        Msg::FilterTagToggled(tag) => vec![Effect::Emit(state.toggle_filter_tag(tag))],
        Msg::DragStarted { city, source } => {
            state.start_drag(&city, source);
            Vec::new()
        }
        Msg::DragOver(target) => {
            if state.drag().is_none() {
                weather_debug!("drag over ignored: no active drag");
            } else {
                state.drag_over(&target);
            }
            Vec::new()
        }
        // The move is committed on drag end, once the placeholder has settled.
        Msg::Dropped => Vec::new(),
        Msg::DragEnded => match state.end_drag() {
            Ok(events) => events.into_iter().map(Effect::Emit).collect(),
            Err(err) => {
                weather_warn!("drag rejected: {}", err);
                vec![Effect::ReportError(err)]
            }
        },
        Msg::CardHovered(name) => vec![Effect::Emit(Event::CardHovered(name))],
        Msg::CardUnhovered(name) => vec![Effect::Emit(Event::CardUnhovered(name))],
        Msg::CardClicked(name) => vec![Effect::Emit(Event::CardClicked(name))],
        Msg::MarkerHovered(name) => vec![Effect::Emit(Event::MarkerHovered(name))],
        Msg::MarkerUnhovered(name) => vec![Effect::Emit(Event::MarkerUnhovered(name))],
    };

    (state, effects)
}
