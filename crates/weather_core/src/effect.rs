use crate::{Event, MoveError};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Dispatch to subscribers once the update has completed.
    Emit(Event),
    FetchPosition,
    FetchCatalog,
    ReportError(MoveError),
}
