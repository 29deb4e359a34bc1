use weather_core::{CardView, DashboardView, Event, FetchTarget, InsertionPoint, ListKind, SortType};

const PLACEHOLDER_SMALL: &str = "  [ ........ ]";
const PLACEHOLDER_BIG: &str = "  [ .................... ]";

/// Renders the whole dashboard as text lines.
pub fn render(view: &DashboardView) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(client) = &view.client {
        lines.push(format!("You are in {}, {} ({})", client.city, client.country, client.timezone));
    }
    let tags: Vec<&str> = view.active_tags.iter().map(|tag| tag.as_str()).collect();
    lines.push(format!(
        "search: {:?}  sort: {}  conditions: {}",
        view.filter_text.trim(),
        view.sort,
        if tags.is_empty() { "any".to_string() } else { tags.join(" + ") }
    ));

    lines.push(format!("catalog ({}):", view.catalog.len()));
    render_list(&mut lines, &view.catalog, ListKind::Small, view.placeholder);
    lines.push(format!("chosen ({}):", view.chosen.len()));
    render_list(&mut lines, &view.chosen, ListKind::Big, view.placeholder);

    if let Some(city) = &view.dragging {
        lines.push(format!("dragging {city}"));
    }
    lines
}

fn render_list(
    lines: &mut Vec<String>,
    cards: &[CardView],
    kind: ListKind,
    placeholder: Option<InsertionPoint>,
) {
    let slot = placeholder
        .filter(|point| point.list == kind)
        .map(|point| point.slot.min(cards.len()));
    let placeholder_line = match kind {
        ListKind::Small => PLACEHOLDER_SMALL,
        ListKind::Big => PLACEHOLDER_BIG,
    };

    for (index, card) in cards.iter().enumerate() {
        if slot == Some(index) {
            lines.push(placeholder_line.to_string());
        }
        lines.push(match kind {
            ListKind::Small => small_card(card),
            ListKind::Big => big_card(card),
        });
    }
    if slot == Some(cards.len()) {
        lines.push(placeholder_line.to_string());
    }
    if cards.is_empty() && slot.is_none() {
        lines.push("  (empty)".to_string());
    }
}

fn lift_marker(card: &CardView) -> &'static str {
    if card.lifted {
        "^"
    } else {
        " "
    }
}

fn small_card(card: &CardView) -> String {
    format!("  {} {} {}°", lift_marker(card), card.name, card.temperature)
}

fn big_card(card: &CardView) -> String {
    let conditions: Vec<&str> = card.conditions.iter().map(|tag| tag.as_str()).collect();
    format!(
        "  {} {} {}°  wind {} {} m/s  [{}]",
        lift_marker(card),
        card.name,
        card.temperature,
        card.wind_direction,
        card.wind_speed,
        conditions.join(", ")
    )
}

/// One-line description of an emitted event.
pub fn describe(event: &Event) -> String {
    match event {
        Event::SortChanged(sort) => format!("sort changed to {sort}"),
        Event::SearchChanged(text) => format!("search changed to {text:?}"),
        Event::FilterChanged { tag, active } => {
            format!("{tag} filter {}", if *active { "on" } else { "off" })
        }
        Event::CardMoved { city, transition } => format!("{} moved ({transition})", city.name),
        Event::FilterWeatherReset => "weather filter reset".to_string(),
        Event::SortReset => format!("sort reset to {}", SortType::None),
        Event::CatalogLoaded { count } => format!("catalog loaded with {count} cities"),
        Event::PositionLoaded { city } => format!("position resolved to {city}"),
        Event::FetchFailed { target, message } => {
            let what = match target {
                FetchTarget::Position => "position",
                FetchTarget::Catalog => "catalog",
            };
            format!("{what} fetch failed: {message}")
        }
        Event::CardHovered(name) => format!("highlight marker for {name}"),
        Event::CardUnhovered(name) => format!("clear marker for {name}"),
        Event::CardClicked(name) => format!("focus map on {name}"),
        Event::MarkerHovered(name) => format!("highlight card for {name}"),
        Event::MarkerUnhovered(name) => format!("clear card for {name}"),
    }
}
