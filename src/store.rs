use crate::domain::Stay;

/// The static stay collection. Built once at startup from the loader's
/// outcome and read-only afterwards; display always shows an
/// order-preserving subset of this sequence.
pub struct StayStore {
    stays: Vec<Stay>,
}

impl StayStore {
    pub fn from_stays(stays: Vec<Stay>) -> Self {
        Self { stays }
    }

    /// Empty store, used when the fetch failed and the page should
    /// come up with nothing to show.
    pub fn empty() -> Self {
        Self { stays: Vec::new() }
    }

    pub fn stays(&self) -> &[Stay] {
        &self.stays
    }
}
