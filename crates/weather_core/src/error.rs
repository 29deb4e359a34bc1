use thiserror::Error;

use crate::ListKind;

/// A drag could not be committed. List state is left as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("city {city:?} not found in {list} list")]
    MissingCity { city: String, list: ListKind },
    #[error("preceding city {name:?} not found in {list} list")]
    MissingPreceding { name: String, list: ListKind },
}
