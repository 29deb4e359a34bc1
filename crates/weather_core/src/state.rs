use weather_logging::{weather_debug, weather_info, weather_warn};

use crate::filter::{self, SortType, WeatherFilter};
use crate::view_model::{CardView, DashboardView};
use crate::{
    City, ClientData, DragSession, Event, HoverTarget, ListKind, MoveError, Transition, WeatherTag,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    catalog: Vec<City>,
    chosen: Vec<City>,
    sort: SortType,
    filter_text: String,
    weather_filter: WeatherFilter,
    drag: Option<DragSession>,
    client: Option<ClientData>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State with lists already populated; the catalog is taken as given.
    pub fn with_lists(catalog: Vec<City>, chosen: Vec<City>) -> Self {
        Self {
            catalog,
            chosen,
            ..Self::default()
        }
    }

    pub fn catalog(&self) -> &[City] {
        &self.catalog
    }

    pub fn chosen(&self) -> &[City] {
        &self.chosen
    }

    pub fn sort(&self) -> SortType {
        self.sort
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn weather_filter(&self) -> &WeatherFilter {
        &self.weather_filter
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn client(&self) -> Option<&ClientData> {
        self.client.as_ref()
    }

    pub fn visible_catalog(&self) -> Vec<City> {
        filter::visible_catalog(&self.catalog, &self.filter_text, self.sort)
    }

    pub fn visible_chosen(&self) -> Vec<City> {
        filter::visible_chosen(&self.chosen, &self.weather_filter)
    }

    pub fn view(&self) -> DashboardView {
        let lifted = self.drag.as_ref().map(DragSession::city);
        let cards = |cities: Vec<City>| -> Vec<CardView> {
            cities
                .iter()
                .map(|city| CardView::from_city(city, lifted == Some(city.name.as_str())))
                .collect()
        };
        DashboardView {
            catalog: cards(self.visible_catalog()),
            chosen: cards(self.visible_chosen()),
            sort: self.sort,
            filter_text: self.filter_text.clone(),
            active_tags: self.weather_filter.active().collect(),
            dragging: lifted.map(ToOwned::to_owned),
            placeholder: self.drag.as_ref().and_then(DragSession::placeholder),
            client: self.client.clone(),
            dirty: self.dirty,
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_client(&mut self, client: ClientData) {
        self.client = Some(client);
        self.mark_dirty();
    }

    /// Replaces the catalog with a fresh download, sorted by the current setting.
    /// Cities already chosen stay chosen.
    pub(crate) fn load_catalog(&mut self, mut cities: Vec<City>) -> usize {
        cities.retain(|city| !self.chosen.iter().any(|c| c.name == city.name));
        self.sort.apply(&mut cities);
        self.catalog = cities;
        self.mark_dirty();
        self.catalog.len()
    }

    pub fn set_sort(&mut self, sort: SortType) -> Event {
        self.sort = sort;
        self.mark_dirty();
        Event::SortChanged(sort)
    }

    /// Stores `text`; only reports a change when the trimmed value differs.
    pub fn set_filter_text(&mut self, text: String) -> Option<Event> {
        if self.filter_text.trim() == text.trim() {
            return None;
        }
        self.filter_text = text.clone();
        self.mark_dirty();
        Some(Event::SearchChanged(text))
    }

    pub fn toggle_filter_tag(&mut self, tag: WeatherTag) -> Event {
        let active = self.weather_filter.toggle(tag);
        self.mark_dirty();
        Event::FilterChanged { tag, active }
    }

    /// Begins a drag; ignored while another drag is active or if `city` is not in `source`.
    pub fn start_drag(&mut self, city: &str, source: ListKind) -> bool {
        if let Some(active) = &self.drag {
            weather_warn!(
                "drag of {} ignored: {} is already being dragged",
                city,
                active.city()
            );
            return false;
        }
        if !self.list(source).iter().any(|c| c.name == city) {
            weather_warn!("drag of {} ignored: not in {} list", city, source);
            return false;
        }
        weather_debug!("drag start {} from {} list", city, source);
        self.drag = Some(DragSession::new(city, source));
        self.mark_dirty();
        true
    }

    pub fn drag_over(&mut self, target: &HoverTarget) -> bool {
        let rendered = self.rendered_names(target.list);
        let rendered: Vec<&str> = rendered.iter().map(String::as_str).collect();
        let Some(session) = self.drag.as_mut() else {
            return false;
        };
        let moved = session.hover(target, &rendered);
        if moved {
            self.dirty = true;
        }
        moved
    }

    /// Finishes the active drag, committing the move if a slot was chosen.
    ///
    /// Returns the events of a committed move, or an empty list if nothing moved.
    /// The session is cleared in every case.
    pub fn end_drag(&mut self) -> Result<Vec<Event>, MoveError> {
        let Some(session) = self.drag.take() else {
            weather_debug!("drag end without an active drag");
            return Ok(Vec::new());
        };
        self.mark_dirty();

        let (Some(point), Some(transition)) = (session.placeholder(), session.transition()) else {
            weather_debug!("drag of {} ended without a drop slot", session.city());
            return Ok(Vec::new());
        };
        let rendered = self.rendered_names(point.list);
        let rendered: Vec<&str> = rendered.iter().map(String::as_str).collect();
        let preceding = session.preceding_name(&rendered).map(ToOwned::to_owned);

        self.change_position(preceding.as_deref(), session.city(), transition)
    }

    /// Moves `city` out of the transition's source list and into its target list,
    /// right after `preceding` (or at the front when `preceding` is `None`).
    ///
    /// Both lookups are checked before anything is touched, so a failure leaves
    /// lists, sort and filter exactly as they were.
    pub fn change_position(
        &mut self,
        preceding: Option<&str>,
        city: &str,
        transition: Transition,
    ) -> Result<Vec<Event>, MoveError> {
        let source = transition.source();
        let target = transition.target();

        if !self.list(source).iter().any(|c| c.name == city) {
            return Err(MoveError::MissingCity {
                city: city.to_string(),
                list: source,
            });
        }
        if let Some(name) = preceding {
            let present = name != city && self.list(target).iter().any(|c| c.name == name);
            if !present {
                return Err(MoveError::MissingPreceding {
                    name: name.to_string(),
                    list: target,
                });
            }
        }

        // The drop slot was picked in the sorted view; freeze that order before
        // the sort is reset so the card lands where the placeholder was shown.
        if target == ListKind::Small {
            self.sort.apply(&mut self.catalog);
        }

        let source_list = self.list_mut(source);
        let Some(source_index) = source_list.iter().position(|c| c.name == city) else {
            return Err(MoveError::MissingCity {
                city: city.to_string(),
                list: source,
            });
        };
        let moved = source_list.remove(source_index);
        let destination = self.list_mut(target);
        let index = match preceding {
            None => 0,
            Some(name) => destination
                .iter()
                .position(|c| c.name == name)
                .map_or(destination.len(), |i| i + 1),
        };
        destination.insert(index, moved.clone());
        self.mark_dirty();

        let mut events = Vec::with_capacity(2);
        match transition {
            Transition::SmallToBig => {
                self.weather_filter.clear();
                events.push(Event::FilterWeatherReset);
            }
            Transition::BigToSmall | Transition::SmallToSmall => {
                self.sort = SortType::None;
                events.push(Event::SortReset);
            }
            Transition::BigToBig => {}
        }
        weather_info!("moved {} ({}) to index {}", moved.name, transition, index);
        events.push(Event::CardMoved {
            city: moved,
            transition,
        });
        Ok(events)
    }

    fn list(&self, kind: ListKind) -> &[City] {
        match kind {
            ListKind::Big => &self.chosen,
            ListKind::Small => &self.catalog,
        }
    }

    fn list_mut(&mut self, kind: ListKind) -> &mut Vec<City> {
        match kind {
            ListKind::Big => &mut self.chosen,
            ListKind::Small => &mut self.catalog,
        }
    }

    /// Card names as currently rendered in `kind`'s list.
    fn rendered_names(&self, kind: ListKind) -> Vec<String> {
        let visible = match kind {
            ListKind::Big => self.visible_chosen(),
            ListKind::Small => self.visible_catalog(),
        };
        visible.into_iter().map(|city| city.name).collect()
    }
}
