use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{City, WeatherTag};

/// Ordering applied to the catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortType {
    #[default]
    Ascending,
    Descending,
    None,
}

impl SortType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" | "abc" | "ascending" => Some(SortType::Ascending),
            "desc" | "zyx" | "descending" => Some(SortType::Descending),
            "none" | "off" => Some(SortType::None),
            _ => None,
        }
    }

    /// Sorts in place. Stable, so `None` keeps the current order.
    pub fn apply(self, cities: &mut [City]) {
        match self {
            SortType::Ascending => cities.sort_by(|a, b| a.name.cmp(&b.name)),
            SortType::Descending => cities.sort_by(|a, b| b.name.cmp(&a.name)),
            SortType::None => {}
        }
    }
}

impl fmt::Display for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortType::Ascending => "ascending",
            SortType::Descending => "descending",
            SortType::None => "none",
        };
        f.write_str(label)
    }
}

/// Active weather conditions; a city matches only if it has every one of them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeatherFilter {
    active: BTreeSet<WeatherTag>,
}

impl WeatherFilter {
    /// Flips `tag` and returns its new state.
    pub fn toggle(&mut self, tag: WeatherTag) -> bool {
        if self.active.remove(&tag) {
            false
        } else {
            self.active.insert(tag);
            true
        }
    }

    pub fn is_active(&self, tag: WeatherTag) -> bool {
        self.active.contains(&tag)
    }

    pub fn active(&self) -> impl Iterator<Item = WeatherTag> + '_ {
        self.active.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn matches(&self, city: &City) -> bool {
        self.active.iter().all(|tag| city.weather.has(*tag))
    }
}

/// Case-insensitive substring match on the trimmed filter text.
fn matches_text(city: &City, filter_text: &str) -> bool {
    let needle = filter_text.trim().to_lowercase();
    needle.is_empty() || city.name.to_lowercase().contains(&needle)
}

pub fn visible_catalog(catalog: &[City], filter_text: &str, sort: SortType) -> Vec<City> {
    let mut visible: Vec<City> = catalog
        .iter()
        .filter(|city| matches_text(city, filter_text))
        .cloned()
        .collect();
    sort.apply(&mut visible);
    visible
}

pub fn visible_chosen(chosen: &[City], filter: &WeatherFilter) -> Vec<City> {
    chosen
        .iter()
        .filter(|city| filter.matches(city))
        .cloned()
        .collect()
}
