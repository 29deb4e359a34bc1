use crate::{City, ClientData, FetchTarget, HoverTarget, ListKind, SortType, WeatherTag};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// App started; request the position and the catalog.
    Started,
    /// Geolocation lookup finished.
    PositionFetched(ClientData),
    /// Catalog download finished.
    CatalogFetched(Vec<City>),
    /// A fetch was rejected; nothing is retried.
    FetchFailed { target: FetchTarget, message: String },
    /// User edited the search box.
    FilterTextChanged(String),
    /// User picked a sort order.
    SortSelected(SortType),
    /// User clicked a weather condition toggle.
    FilterTagToggled(WeatherTag),
    /// User lifted a card out of `source`.
    DragStarted { city: String, source: ListKind },
    /// Pointer moved while dragging.
    DragOver(HoverTarget),
    /// Pointer released over a list.
    Dropped,
    /// Drag gesture finished; commits the move if a slot is chosen.
    DragEnded,
    CardHovered(String),
    CardUnhovered(String),
    CardClicked(String),
    MarkerHovered(String),
    MarkerUnhovered(String),
}
