use crate::{City, ClientData, InsertionPoint, SortType, WeatherTag};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardView {
    pub catalog: Vec<CardView>,
    pub chosen: Vec<CardView>,
    pub sort: SortType,
    pub filter_text: String,
    pub active_tags: Vec<WeatherTag>,
    pub dragging: Option<String>,
    pub placeholder: Option<InsertionPoint>,
    pub client: Option<ClientData>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub name: String,
    pub temperature: f64,
    pub wind_direction: String,
    pub wind_speed: f64,
    pub conditions: Vec<WeatherTag>,
    /// The card is the one currently being dragged.
    pub lifted: bool,
}

impl CardView {
    pub fn from_city(city: &City, lifted: bool) -> Self {
        Self {
            name: city.name.clone(),
            temperature: city.temperature,
            wind_direction: city.wind.direction.clone(),
            wind_speed: city.wind.speed,
            conditions: city.weather.tags(),
            lifted,
        }
    }
}
