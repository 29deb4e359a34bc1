#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use weather_core::{City, Dashboard, Event, WeatherFlags, Wind};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(weather_logging::initialize_for_tests);
}

pub fn city(name: &str) -> City {
    City {
        name: name.to_string(),
        weather: WeatherFlags::default(),
        temperature: 12.0,
        wind: Wind {
            direction: "west".to_string(),
            speed: 4.0,
        },
    }
}

pub fn city_with(name: &str, weather: WeatherFlags) -> City {
    City {
        weather,
        ..city(name)
    }
}

pub fn names(cities: &[City]) -> Vec<&str> {
    cities.iter().map(|c| c.name.as_str()).collect()
}

/// Subscribes a recorder and returns the shared event log.
pub fn record_events(dashboard: &mut Dashboard) -> Rc<RefCell<Vec<Event>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    dashboard.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    events
}
