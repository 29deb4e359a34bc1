use std::fmt;

use serde::{Deserialize, Serialize};

/// One weather condition a city can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeatherTag {
    Sunny,
    Cloudy,
    Snowy,
    Rainy,
    Blizzard,
    Stormy,
    Meteor,
}

impl WeatherTag {
    pub const ALL: [WeatherTag; 7] = [
        WeatherTag::Sunny,
        WeatherTag::Cloudy,
        WeatherTag::Snowy,
        WeatherTag::Rainy,
        WeatherTag::Blizzard,
        WeatherTag::Stormy,
        WeatherTag::Meteor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WeatherTag::Sunny => "sunny",
            WeatherTag::Cloudy => "cloudy",
            WeatherTag::Snowy => "snowy",
            WeatherTag::Rainy => "rainy",
            WeatherTag::Blizzard => "blizzard",
            WeatherTag::Stormy => "stormy",
            WeatherTag::Meteor => "meteor",
        }
    }

    /// Parses a tag name case-insensitively. The feed spelling `metorite` is accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("metorite") {
            return Some(WeatherTag::Meteor);
        }
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for WeatherTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Condition flags as delivered by the weather feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherFlags {
    pub sunny: bool,
    pub cloudy: bool,
    pub snowy: bool,
    pub rainy: bool,
    pub blizzard: bool,
    pub stormy: bool,
    #[serde(rename = "metorite")]
    pub meteor: bool,
}

impl WeatherFlags {
    pub fn has(&self, tag: WeatherTag) -> bool {
        match tag {
            WeatherTag::Sunny => self.sunny,
            WeatherTag::Cloudy => self.cloudy,
            WeatherTag::Snowy => self.snowy,
            WeatherTag::Rainy => self.rainy,
            WeatherTag::Blizzard => self.blizzard,
            WeatherTag::Stormy => self.stormy,
            WeatherTag::Meteor => self.meteor,
        }
    }

    /// Active conditions in declaration order.
    pub fn tags(&self) -> Vec<WeatherTag> {
        WeatherTag::ALL
            .into_iter()
            .filter(|tag| self.has(*tag))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Wind {
    pub direction: String,
    pub speed: f64,
}

/// A city with its current weather. Names are unique across the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(rename = "city")]
    pub name: String,
    #[serde(default)]
    pub weather: WeatherFlags,
    pub temperature: f64,
    #[serde(default)]
    pub wind: Wind,
}

/// Geolocation record for the current client.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientData {
    pub ip: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub loc: String,
    pub org: String,
    pub postal: String,
    pub timezone: String,
}
