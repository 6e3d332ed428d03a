mod approach;
mod neo;

pub use approach::{CloseApproach, LinkedApproach};
pub use neo::NearEarthObject;

use derive_more::Display;
use serde::Serialize;

///
/// NeoId
///
/// Stable handle to a NEO inside a built [`crate::db::NeoDatabase`].
/// Only the database constructs these; holding one proves the referenced
/// NEO exists in the collection it came from.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[repr(transparent)]
pub struct NeoId(usize);

impl NeoId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}
