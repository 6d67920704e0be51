mod export;
mod import;
mod picks;

use std::collections::HashMap;

use chrono::{DateTime, Utc};

pub use export::{ExportError, ResolvedEntry, export_entries, resolve_entry};
pub use import::{InvalidRow, NewGolfer, RosterImport, RowError, parse_roster_csv};
pub use picks::{DraftEntry, PickError, PickSummary, ValidPicks, total_salary, validate_picks};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GolferId(pub i64);

impl std::fmt::Display for GolferId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Golfer {
    pub id: GolferId,
    pub name: String,
    pub salary: u32,
}

impl Golfer {
    pub fn new(id: GolferId, name: impl Into<String>, salary: u32) -> Self {
        Self {
            id,
            name: name.into(),
            salary,
        }
    }
}

/// Fixed contest parameters shared by the entry form and the server check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContestRules {
    pub salary_cap: u32,
    pub required_picks: usize,
}

impl Default for ContestRules {
    fn default() -> Self {
        Self {
            salary_cap: 100,
            required_picks: 6,
        }
    }
}

/// Salary lookup for a roster snapshot.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    golfers: HashMap<GolferId, Golfer>,
}

impl Roster {
    pub fn new(golfers: impl IntoIterator<Item = Golfer>) -> Self {
        Self {
            golfers: golfers.into_iter().map(|g| (g.id, g)).collect(),
        }
    }

    pub fn get(&self, id: GolferId) -> Option<&Golfer> {
        self.golfers.get(&id)
    }
}

impl FromIterator<Golfer> for Roster {
    fn from_iter<T: IntoIterator<Item = Golfer>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub entry_name: String,
    pub picks: Vec<GolferId>,
    pub created_at: DateTime<Utc>,
}
