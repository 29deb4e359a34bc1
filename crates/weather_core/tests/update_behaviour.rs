mod common;

use common::{city, city_with, init_logging, names, record_events};
use pretty_assertions::assert_eq;
use weather_core::{
    update, AppState, ClientData, Dashboard, Effect, Event, FetchTarget, ListKind, MoveError, Msg,
    SortType, Transition, WeatherFlags, WeatherTag,
};

fn sunny_and_rainy() -> WeatherFlags {
    WeatherFlags {
        sunny: true,
        rainy: true,
        ..WeatherFlags::default()
    }
}

#[test]
fn started_requests_position_and_catalog() {
    init_logging();
    let (_state, effects) = update(AppState::new(), Msg::Started);
    assert_eq!(effects, vec![Effect::FetchPosition, Effect::FetchCatalog]);
}

#[test]
fn catalog_fetch_sorts_and_skips_chosen_cities() {
    init_logging();
    let state = AppState::with_lists(Vec::new(), vec![city("Oslo")]);

    let (mut state, effects) = update(
        state,
        Msg::CatalogFetched(vec![city("Rome"), city("Oslo"), city("Berlin")]),
    );

    assert_eq!(names(state.catalog()), vec!["Berlin", "Rome"]);
    assert_eq!(names(state.chosen()), vec!["Oslo"]);
    assert_eq!(effects, vec![Effect::Emit(Event::CatalogLoaded { count: 2 })]);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn position_fetch_is_stored_and_announced() {
    init_logging();
    let client = ClientData {
        city: "Bergen".to_string(),
        country: "NO".to_string(),
        ..ClientData::default()
    };

    let (state, effects) = update(AppState::new(), Msg::PositionFetched(client.clone()));

    assert_eq!(state.client(), Some(&client));
    assert_eq!(
        effects,
        vec![Effect::Emit(Event::PositionLoaded {
            city: "Bergen".to_string()
        })]
    );
}

#[test]
fn fetch_failure_is_surfaced_without_retry() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::FetchFailed {
            target: FetchTarget::Catalog,
            message: "http status 503".to_string(),
        },
    );

    assert!(state.catalog().is_empty());
    assert_eq!(
        effects,
        vec![Effect::Emit(Event::FetchFailed {
            target: FetchTarget::Catalog,
            message: "http status 503".to_string(),
        })]
    );
}

#[test]
fn filter_text_emits_only_on_trimmed_change() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::FilterTextChanged("Par".to_string()));
    assert_eq!(
        effects,
        vec![Effect::Emit(Event::SearchChanged("Par".to_string()))]
    );

    let (state, effects) = update(state, Msg::FilterTextChanged("  Par ".to_string()));
    assert!(effects.is_empty());
    assert_eq!(state.filter_text(), "Par");

    let (_state, effects) = update(state, Msg::FilterTextChanged(String::new()));
    assert_eq!(
        effects,
        vec![Effect::Emit(Event::SearchChanged(String::new()))]
    );
}

#[test]
fn filter_text_is_case_and_trim_insensitive() {
    init_logging();
    let catalog = vec![city("Paris"), city("Oslo"), city("Parma")];
    let padded = AppState::with_lists(catalog.clone(), Vec::new());
    let plain = AppState::with_lists(catalog, Vec::new());

    let (padded, _) = update(padded, Msg::FilterTextChanged(" Paris ".to_string()));
    let (plain, _) = update(plain, Msg::FilterTextChanged("paris".to_string()));

    assert_eq!(padded.visible_catalog(), plain.visible_catalog());
    assert_eq!(names(&plain.visible_catalog()), vec!["Paris"]);
}

#[test]
fn sort_selection_updates_catalog_view() {
    init_logging();
    let state = AppState::with_lists(vec![city("Oslo"), city("Berlin"), city("Rome")], Vec::new());

    let (state, effects) = update(state, Msg::SortSelected(SortType::Descending));
    assert_eq!(
        effects,
        vec![Effect::Emit(Event::SortChanged(SortType::Descending))]
    );
    assert_eq!(names(&state.visible_catalog()), vec!["Rome", "Oslo", "Berlin"]);

    let (state, _) = update(state, Msg::SortSelected(SortType::None));
    assert_eq!(names(&state.visible_catalog()), vec!["Oslo", "Berlin", "Rome"]);
}

#[test]
fn weather_filter_requires_every_active_tag() {
    init_logging();
    let chosen = vec![
        city_with(
            "Lima",
            WeatherFlags {
                sunny: true,
                ..WeatherFlags::default()
            },
        ),
        city_with("Porto", sunny_and_rainy()),
        city("Quito"),
    ];
    let state = AppState::with_lists(Vec::new(), chosen);

    let (state, effects) = update(state, Msg::FilterTagToggled(WeatherTag::Sunny));
    assert_eq!(
        effects,
        vec![Effect::Emit(Event::FilterChanged {
            tag: WeatherTag::Sunny,
            active: true
        })]
    );
    assert_eq!(names(&state.visible_chosen()), vec!["Lima", "Porto"]);

    let (state, _) = update(state, Msg::FilterTagToggled(WeatherTag::Rainy));
    assert_eq!(names(&state.visible_chosen()), vec!["Porto"]);
    assert_eq!(
        state.view().active_tags,
        vec![WeatherTag::Sunny, WeatherTag::Rainy]
    );
}

#[test]
fn toggling_a_tag_twice_restores_the_view() {
    init_logging();
    let chosen = vec![city_with("Porto", sunny_and_rainy()), city("Quito")];
    let state = AppState::with_lists(Vec::new(), chosen);
    let before_filter = state.weather_filter().clone();
    let before_view = state.visible_chosen();

    let (state, _) = update(state, Msg::FilterTagToggled(WeatherTag::Stormy));
    let (state, effects) = update(state, Msg::FilterTagToggled(WeatherTag::Stormy));

    assert_eq!(state.weather_filter(), &before_filter);
    assert_eq!(state.visible_chosen(), before_view);
    assert_eq!(
        effects,
        vec![Effect::Emit(Event::FilterChanged {
            tag: WeatherTag::Stormy,
            active: false
        })]
    );
}

#[test]
fn unknown_preceding_city_leaves_lists_untouched() {
    init_logging();
    let state = AppState::with_lists(vec![city("Paris"), city("Oslo")], vec![city("Rome")]);
    let (mut state, _) = update(state, Msg::FilterTagToggled(WeatherTag::Snowy));
    let before = state.clone();

    let err = state
        .change_position(Some("Atlantis"), "Paris", Transition::SmallToBig)
        .unwrap_err();

    assert_eq!(
        err,
        MoveError::MissingPreceding {
            name: "Atlantis".to_string(),
            list: ListKind::Big,
        }
    );
    assert_eq!(state, before);
}

#[test]
fn unknown_dragged_city_leaves_lists_untouched() {
    init_logging();
    let mut state = AppState::with_lists(vec![city("Paris")], vec![city("Rome")]);
    let before = state.clone();

    let err = state
        .change_position(None, "Oslo", Transition::BigToSmall)
        .unwrap_err();

    assert_eq!(
        err,
        MoveError::MissingCity {
            city: "Oslo".to_string(),
            list: ListKind::Big,
        }
    );
    assert_eq!(state, before);
}

#[test]
fn change_position_appends_after_last_city() {
    init_logging();
    let mut state = AppState::with_lists(vec![city("Paris")], vec![city("Oslo"), city("Rome")]);

    let events = state
        .change_position(Some("Rome"), "Paris", Transition::SmallToBig)
        .expect("move succeeds");

    assert_eq!(names(state.chosen()), vec!["Oslo", "Rome", "Paris"]);
    assert!(state.catalog().is_empty());
    assert_eq!(events.len(), 2);
}

#[test]
fn hover_and_click_notifications_reach_subscribers() {
    init_logging();
    let mut dashboard = Dashboard::new(AppState::new());
    let events = record_events(&mut dashboard);

    dashboard.dispatch(Msg::MarkerHovered("Oslo".to_string()));
    dashboard.dispatch(Msg::CardHovered("Oslo".to_string()));
    dashboard.dispatch(Msg::CardClicked("Oslo".to_string()));
    dashboard.dispatch(Msg::CardUnhovered("Oslo".to_string()));
    dashboard.dispatch(Msg::MarkerUnhovered("Oslo".to_string()));

    assert_eq!(
        *events.borrow(),
        vec![
            Event::MarkerHovered("Oslo".to_string()),
            Event::CardHovered("Oslo".to_string()),
            Event::CardClicked("Oslo".to_string()),
            Event::CardUnhovered("Oslo".to_string()),
            Event::MarkerUnhovered("Oslo".to_string()),
        ]
    );
    assert!(!dashboard.view().dirty);
}
