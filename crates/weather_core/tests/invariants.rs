mod common;

use std::collections::HashSet;

use common::{city, init_logging, names};
use weather_core::{
    visible_catalog, AppState, Dashboard, HoverTarget, ListKind, Msg, SortType,
};

const CITIES: [&str; 6] = ["Oslo", "Paris", "Rome", "Berlin", "Lima", "Quito"];

fn assert_disjoint_and_complete(state: &AppState) {
    let catalog: HashSet<&str> = names(state.catalog()).into_iter().collect();
    let chosen: HashSet<&str> = names(state.chosen()).into_iter().collect();
    assert!(catalog.is_disjoint(&chosen), "{catalog:?} / {chosen:?}");
    assert_eq!(catalog.len() + chosen.len(), CITIES.len());
}

#[test]
fn every_city_lives_in_exactly_one_list() {
    init_logging();
    let mut dashboard = Dashboard::new(AppState::new());
    dashboard.dispatch(Msg::CatalogFetched(CITIES.iter().map(|n| city(n)).collect()));

    // Deterministic walk over sources, targets and hover positions.
    for step in 0..60usize {
        let state = dashboard.state();
        let (source, pool) = if step % 3 == 0 || state.chosen().is_empty() {
            (ListKind::Small, state.visible_catalog())
        } else {
            (ListKind::Big, state.visible_chosen())
        };
        if pool.is_empty() {
            continue;
        }
        let dragged = pool[step % pool.len()].name.clone();
        let target_list = if step % 2 == 0 { ListKind::Big } else { ListKind::Small };
        let target_pool = match target_list {
            ListKind::Big => state.visible_chosen(),
            ListKind::Small => state.visible_catalog(),
        };
        let hover = if target_pool.is_empty() || step % 5 == 0 {
            HoverTarget::empty_space(target_list)
        } else {
            HoverTarget::card(target_list, target_pool[step % target_pool.len()].name.clone())
        };

        dashboard.dispatch(Msg::DragStarted {
            city: dragged,
            source,
        });
        dashboard.dispatch(Msg::DragOver(hover.clone()));
        dashboard.dispatch(Msg::DragOver(hover));
        dashboard.dispatch(Msg::Dropped);
        let effects = dashboard.dispatch(Msg::DragEnded);

        assert!(effects.is_empty(), "step {step}: {effects:?}");
        assert!(dashboard.state().drag().is_none());
        assert_disjoint_and_complete(dashboard.state());
    }
}

#[test]
fn ascending_then_descending_is_exact_reverse() {
    let inputs: Vec<Vec<&str>> = vec![
        vec![],
        vec!["Oslo"],
        CITIES.to_vec(),
        vec!["b", "B", "a", "A", "ab"],
    ];

    for input in inputs {
        let catalog: Vec<_> = input.iter().map(|n| city(n)).collect();
        let ascending = visible_catalog(&catalog, "", SortType::Ascending);
        let mut descending = visible_catalog(&catalog, "", SortType::Descending);
        descending.reverse();
        assert_eq!(names(&ascending), names(&descending));
    }
}
