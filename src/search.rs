use crate::domain::Stay;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open,
}

/// The pending filter values. Zeroed only at process start; applying
/// never resets them, so reopening the modal shows the previous picks.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    pub city_query: String,
    pub adults: u32,
    pub children: u32,
}

impl SearchCriteria {
    pub fn total_guests(&self) -> u32 {
        self.adults + self.children
    }

    /// True when these criteria filter nothing out.
    pub fn is_identity(&self) -> bool {
        self.city_query.trim().is_empty() && self.total_guests() == 0
    }
}

#[derive(Debug, Clone, Copy)]
pub enum GuestKind {
    Adults,
    Children,
}

impl FromStr for GuestKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "adults" => Ok(GuestKind::Adults),
            "children" => Ok(GuestKind::Children),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum GuestOp {
    Inc,
    Dec,
}

impl FromStr for GuestOp {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inc" => Ok(GuestOp::Inc),
            "dec" => Ok(GuestOp::Dec),
            _ => Err(()),
        }
    }
}

/// The search modal's interaction state.
///
/// `pending` is what the open modal edits; `applied` is the snapshot
/// taken on confirm, and it alone drives the results region and the
/// search-bar summary labels.
pub struct SearchModal {
    pub state: ModalState,
    pub pending: SearchCriteria,
    pub applied: SearchCriteria,
}

impl SearchModal {
    pub fn new() -> Self {
        Self {
            state: ModalState::Closed,
            pending: SearchCriteria::default(),
            applied: SearchCriteria::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn open(&mut self) {
        self.state = ModalState::Open;
    }

    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    /// Picking a suggestion pins the pending query to "City, Country".
    pub fn choose_city(&mut self, city: &str, country: &str) {
        self.pending.city_query = format!("{city}, {country}");
    }

    /// Steppers: increment is unbounded, decrement floors at zero.
    pub fn bump_guest(&mut self, kind: GuestKind, op: GuestOp) {
        let counter = match kind {
            GuestKind::Adults => &mut self.pending.adults,
            GuestKind::Children => &mut self.pending.children,
        };
        match op {
            GuestOp::Inc => *counter += 1,
            GuestOp::Dec => *counter = counter.saturating_sub(1),
        }
    }

    /// Confirm: whatever is typed in the city field wins over the
    /// picker, the snapshot is taken, and the modal closes.
    pub fn apply(&mut self, city_text: &str) {
        self.pending.city_query = city_text.trim().to_string();
        self.applied = self.pending.clone();
        self.state = ModalState::Closed;
    }
}

/// Live suggestions while typing: case-insensitive substring match of
/// the *raw* query against every stay's city. The comma-splitting rule
/// belongs to the filter, not here.
pub fn city_suggestions<'a>(stays: &'a [Stay], query: &str) -> Vec<&'a Stay> {
    let q = query.to_lowercase();
    stays
        .iter()
        .filter(|stay| stay.city.to_lowercase().contains(&q))
        .collect()
}
