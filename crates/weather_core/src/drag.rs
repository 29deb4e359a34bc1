use std::fmt;

use serde::{Deserialize, Serialize};
use weather_logging::weather_debug;

/// Which list a card lives in. Catalog cards are small, chosen cards are big.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    Big,
    Small,
}

impl ListKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "big" | "chosen" => Some(ListKind::Big),
            "small" | "catalog" => Some(ListKind::Small),
            _ => None,
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Big => f.write_str("big"),
            ListKind::Small => f.write_str("small"),
        }
    }
}

/// Source/destination pairing of a committed drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    SmallToBig,
    BigToSmall,
    BigToBig,
    SmallToSmall,
}

impl Transition {
    pub fn between(source: ListKind, target: ListKind) -> Self {
        match (source, target) {
            (ListKind::Small, ListKind::Big) => Transition::SmallToBig,
            (ListKind::Big, ListKind::Small) => Transition::BigToSmall,
            (ListKind::Big, ListKind::Big) => Transition::BigToBig,
            (ListKind::Small, ListKind::Small) => Transition::SmallToSmall,
        }
    }

    pub fn source(self) -> ListKind {
        match self {
            Transition::SmallToBig | Transition::SmallToSmall => ListKind::Small,
            Transition::BigToSmall | Transition::BigToBig => ListKind::Big,
        }
    }

    pub fn target(self) -> ListKind {
        match self {
            Transition::SmallToBig | Transition::BigToBig => ListKind::Big,
            Transition::BigToSmall | Transition::SmallToSmall => ListKind::Small,
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=>{}", self.source(), self.target())
    }
}

/// What the pointer is over inside a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoveredCard {
    City(String),
    Placeholder,
}

/// Pointer position reported by a drag-over gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverTarget {
    pub list: ListKind,
    /// `None` when the pointer is over empty list space.
    pub card: Option<HoveredCard>,
}

impl HoverTarget {
    pub fn card(list: ListKind, name: impl Into<String>) -> Self {
        Self {
            list,
            card: Some(HoveredCard::City(name.into())),
        }
    }

    pub fn placeholder(list: ListKind) -> Self {
        Self {
            list,
            card: Some(HoveredCard::Placeholder),
        }
    }

    pub fn empty_space(list: ListKind) -> Self {
        Self { list, card: None }
    }
}

/// Where the placeholder currently sits.
///
/// `slot` counts rendered cards of `list` that come before the placeholder, so
/// slot `i` means "between card `i - 1` and card `i`".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionPoint {
    pub list: ListKind,
    pub slot: usize,
}

/// One active drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    city: String,
    source: ListKind,
    placeholder: Option<InsertionPoint>,
}

impl DragSession {
    pub fn new(city: impl Into<String>, source: ListKind) -> Self {
        Self {
            city: city.into(),
            source,
            placeholder: None,
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn source(&self) -> ListKind {
        self.source
    }

    pub fn placeholder(&self) -> Option<InsertionPoint> {
        self.placeholder
    }

    /// Repositions the placeholder for a pointer over `target`.
    ///
    /// `rendered` holds the card names currently shown in `target.list`, in
    /// display order and without the placeholder. Returns true if the
    /// placeholder moved or changed list.
    pub fn hover(&mut self, target: &HoverTarget, rendered: &[&str]) -> bool {
        let hovered = match &target.card {
            Some(HoveredCard::Placeholder) => return false,
            Some(HoveredCard::City(name)) if *name == self.city => return false,
            Some(HoveredCard::City(name)) => Some(name.as_str()),
            None => None,
        };

        let slot = match hovered {
            Some(name) => {
                let Some(position) = rendered.iter().position(|card| *card == name) else {
                    weather_debug!("drag over unknown card {} in {} list", name, target.list);
                    return false;
                };
                let placeholder_before = self.placeholder
                    == Some(InsertionPoint {
                        list: target.list,
                        slot: position,
                    });
                // Stepping over the card the placeholder already precedes swaps them.
                if placeholder_before {
                    position + 1
                } else {
                    position
                }
            }
            None => rendered.len(),
        };

        let next = InsertionPoint {
            list: target.list,
            slot,
        };
        let moved = self.placeholder != Some(next);
        self.placeholder = Some(next);
        moved
    }

    /// Name of the nearest card before the placeholder, ignoring the dragged card.
    ///
    /// `rendered` must be the card names of the placeholder's list.
    pub fn preceding_name<'a>(&self, rendered: &[&'a str]) -> Option<&'a str> {
        let point = self.placeholder?;
        let slot = point.slot.min(rendered.len());
        rendered[..slot]
            .iter()
            .rev()
            .find(|name| **name != self.city)
            .copied()
    }

    /// Transition the drag would commit, if the placeholder is placed.
    pub fn transition(&self) -> Option<Transition> {
        self.placeholder
            .map(|point| Transition::between(self.source, point.list))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_covers_every_pairing() {
        for source in [ListKind::Big, ListKind::Small] {
            for target in [ListKind::Big, ListKind::Small] {
                let transition = Transition::between(source, target);
                assert_eq!(transition.source(), source);
                assert_eq!(transition.target(), target);
            }
        }
        assert_eq!(Transition::SmallToBig.to_string(), "small=>big");
    }

    #[test]
    fn hovering_card_places_before_then_swaps_after() {
        let rendered = ["Oslo", "Paris", "Rome"];
        let mut session = DragSession::new("Berlin", ListKind::Big);

        assert!(session.hover(&HoverTarget::card(ListKind::Small, "Paris"), &rendered));
        assert_eq!(
            session.placeholder(),
            Some(InsertionPoint {
                list: ListKind::Small,
                slot: 1
            })
        );

        assert!(session.hover(&HoverTarget::card(ListKind::Small, "Paris"), &rendered));
        assert_eq!(session.placeholder().map(|p| p.slot), Some(2));

        // Hovering Rome now swaps again since the placeholder precedes it.
        assert!(session.hover(&HoverTarget::card(ListKind::Small, "Rome"), &rendered));
        assert_eq!(session.placeholder().map(|p| p.slot), Some(3));
    }

    #[test]
    fn hovering_self_or_placeholder_is_ignored() {
        let rendered = ["Oslo", "Paris"];
        let mut session = DragSession::new("Oslo", ListKind::Small);

        assert!(!session.hover(&HoverTarget::card(ListKind::Small, "Oslo"), &rendered));
        assert_eq!(session.placeholder(), None);

        session.hover(&HoverTarget::empty_space(ListKind::Small), &rendered);
        assert!(!session.hover(&HoverTarget::placeholder(ListKind::Small), &rendered));
        assert_eq!(session.placeholder().map(|p| p.slot), Some(2));
    }

    #[test]
    fn preceding_name_skips_dragged_card() {
        let rendered = ["Oslo", "Paris", "Rome"];
        let mut session = DragSession::new("Paris", ListKind::Small);
        session.hover(&HoverTarget::card(ListKind::Small, "Rome"), &rendered);

        assert_eq!(session.placeholder().map(|p| p.slot), Some(2));
        assert_eq!(session.preceding_name(&rendered), Some("Oslo"));
        assert_eq!(session.transition(), Some(Transition::SmallToSmall));
    }

    #[test]
    fn preceding_name_is_none_at_front() {
        let rendered = ["Oslo"];
        let mut session = DragSession::new("Paris", ListKind::Small);
        session.hover(&HoverTarget::card(ListKind::Big, "Oslo"), &rendered);

        assert_eq!(session.preceding_name(&rendered), None);
        assert_eq!(session.transition(), Some(Transition::SmallToBig));
    }
}
