use std::collections::HashSet;

use thiserror::Error;

use crate::{ContestRules, Golfer, GolferId, Roster};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    #[error("please pick exactly {expected} golfers (got {actual})")]
    WrongCount { expected: usize, actual: usize },

    #[error("golfer {0} was picked more than once")]
    DuplicatePick(GolferId),

    #[error("unknown golfer: {0}")]
    UnknownGolfer(GolferId),

    #[error("salary cap exceeded: ${total} of ${cap}")]
    CapExceeded { total: u64, cap: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPicks {
    pub golfers: Vec<Golfer>,
    pub total_salary: u64,
}

/// Sums the salaries of the picks that resolve against `roster`.
///
/// Unresolvable ids count as zero. This is the number shown by the live
/// counter and the number checked against the cap.
pub fn total_salary(picks: &[GolferId], roster: &Roster) -> u64 {
    picks
        .iter()
        .filter_map(|id| roster.get(*id))
        .map(|g| u64::from(g.salary))
        .sum()
}

pub fn validate_picks(
    picks: &[GolferId],
    roster: &Roster,
    rules: &ContestRules,
) -> Result<ValidPicks, PickError> {
    if picks.len() != rules.required_picks {
        return Err(PickError::WrongCount {
            expected: rules.required_picks,
            actual: picks.len(),
        });
    }

    let mut seen = HashSet::with_capacity(picks.len());
    if let Some(dup) = picks.iter().find(|id| !seen.insert(**id)) {
        return Err(PickError::DuplicatePick(*dup));
    }

    let golfers = picks
        .iter()
        .map(|id| roster.get(*id).cloned().ok_or(PickError::UnknownGolfer(*id)))
        .collect::<Result<Vec<_>, _>>()?;

    let total = total_salary(picks, roster);
    if total > u64::from(rules.salary_cap) {
        return Err(PickError::CapExceeded {
            total,
            cap: rules.salary_cap,
        });
    }

    Ok(ValidPicks {
        golfers,
        total_salary: total,
    })
}

/// The entry a user is assembling on the form, as a value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftEntry {
    picks: Vec<GolferId>,
}

impl DraftEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn picks(&self) -> &[GolferId] {
        &self.picks
    }

    /// Adds `id` if there is room, removes it if already picked.
    pub fn toggle(&self, id: GolferId, rules: &ContestRules) -> DraftEntry {
        let mut picks = self.picks.clone();
        if let Some(pos) = picks.iter().position(|p| *p == id) {
            picks.remove(pos);
        } else if picks.len() < rules.required_picks {
            picks.push(id);
        }
        DraftEntry { picks }
    }

    pub fn summary(&self, roster: &Roster, rules: &ContestRules) -> PickSummary {
        PickSummary {
            count: self.picks.len(),
            required: rules.required_picks,
            total_salary: total_salary(&self.picks, roster),
            cap: rules.salary_cap,
        }
    }

    pub fn validate(&self, roster: &Roster, rules: &ContestRules) -> Result<ValidPicks, PickError> {
        validate_picks(&self.picks, roster, rules)
    }

    pub fn can_submit(&self, roster: &Roster, rules: &ContestRules) -> bool {
        self.validate(roster, rules).is_ok()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickSummary {
    pub count: usize,
    pub required: usize,
    pub total_salary: u64,
    pub cap: u32,
}

impl PickSummary {
    pub fn over_cap(&self) -> bool {
        self.total_salary > u64::from(self.cap)
    }
}

impl std::fmt::Display for PickSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Picks: {}/{} | Total Salary: ${}/{}",
            self.count, self.required, self.total_salary, self.cap
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_of(salaries: &[(i64, u32)]) -> Roster {
        salaries
            .iter()
            .map(|(id, salary)| Golfer::new(GolferId(*id), format!("Golfer {}", id), *salary))
            .collect()
    }

    fn ids(raw: &[i64]) -> Vec<GolferId> {
        raw.iter().map(|id| GolferId(*id)).collect()
    }

    #[test]
    fn test_wrong_count() {
        let roster = roster_of(&[(1, 10), (2, 10), (3, 10), (4, 10), (5, 10), (6, 10), (7, 10)]);
        let rules = ContestRules::default();

        assert_eq!(
            validate_picks(&ids(&[1, 2, 3]), &roster, &rules),
            Err(PickError::WrongCount {
                expected: 6,
                actual: 3
            })
        );
        assert!(matches!(
            validate_picks(&ids(&[1, 2, 3, 4, 5, 6, 7]), &roster, &rules),
            Err(PickError::WrongCount { actual: 7, .. })
        ));
        assert!(matches!(
            validate_picks(&[], &Roster::default(), &rules),
            Err(PickError::WrongCount { actual: 0, .. })
        ));
    }

    #[test]
    fn test_cap_boundary() {
        let rules = ContestRules::default();
        let mut salaries = vec![(1, 20), (2, 20), (3, 20), (4, 20), (5, 10), (6, 10)];
        let picks = ids(&[1, 2, 3, 4, 5, 6]);

        let valid = validate_picks(&picks, &roster_of(&salaries), &rules).unwrap();
        assert_eq!(valid.total_salary, 100);

        salaries[5] = (6, 11);
        assert_eq!(
            validate_picks(&picks, &roster_of(&salaries), &rules),
            Err(PickError::CapExceeded {
                total: 101,
                cap: 100
            })
        );
    }

    #[test]
    fn test_duplicate_rejected_before_cap() {
        let roster = roster_of(&[(1, 1), (2, 1), (3, 1), (4, 1), (5, 1)]);
        let rules = ContestRules::default();
        assert_eq!(
            validate_picks(&ids(&[1, 1, 2, 3, 4, 5]), &roster, &rules),
            Err(PickError::DuplicatePick(GolferId(1)))
        );

        let expensive = roster_of(&[(1, 90), (2, 90), (3, 90), (4, 90), (5, 90)]);
        assert_eq!(
            validate_picks(&ids(&[1, 2, 3, 4, 5, 5]), &expensive, &rules),
            Err(PickError::DuplicatePick(GolferId(5)))
        );
    }

    #[test]
    fn test_unknown_golfer() {
        let roster = roster_of(&[(1, 10), (2, 10), (3, 10), (4, 10), (5, 10)]);
        assert_eq!(
            validate_picks(&ids(&[1, 2, 3, 4, 5, 42]), &roster, &ContestRules::default()),
            Err(PickError::UnknownGolfer(GolferId(42)))
        );
    }

    #[test]
    fn test_resolved_order_and_determinism() {
        let roster = roster_of(&[(1, 5), (2, 25), (3, 15), (4, 10), (5, 20), (6, 20)]);
        let rules = ContestRules::default();
        let picks = ids(&[6, 3, 1, 5, 2, 4]);

        let first = validate_picks(&picks, &roster, &rules).unwrap();
        let second = validate_picks(&picks, &roster, &rules).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.total_salary, 95);
        assert_eq!(
            first.golfers.iter().map(|g| g.id).collect::<Vec<_>>(),
            picks
        );
    }

    #[test]
    fn test_custom_rules() {
        let roster = roster_of(&[(1, 30), (2, 30)]);
        let rules = ContestRules {
            salary_cap: 50,
            required_picks: 2,
        };
        assert!(matches!(
            validate_picks(&ids(&[1, 2]), &roster, &rules),
            Err(PickError::CapExceeded { total: 60, cap: 50 })
        ));
    }

    #[test]
    fn test_draft_toggle() {
        let rules = ContestRules::default();
        let mut draft = DraftEntry::new();
        for id in 1..=7 {
            draft = draft.toggle(GolferId(id), &rules);
        }
        assert_eq!(draft.picks(), ids(&[1, 2, 3, 4, 5, 6]).as_slice());

        let draft = draft.toggle(GolferId(3), &rules);
        assert_eq!(draft.picks(), ids(&[1, 2, 4, 5, 6]).as_slice());

        let draft = draft.toggle(GolferId(7), &rules);
        assert_eq!(draft.picks(), ids(&[1, 2, 4, 5, 6, 7]).as_slice());
    }

    #[test]
    fn test_summary_agrees_with_validation() {
        let roster = roster_of(&[(1, 20), (2, 20), (3, 20), (4, 15), (5, 10), (6, 10)]);
        let rules = ContestRules::default();
        let draft = (1..=6).fold(DraftEntry::new(), |d, id| d.toggle(GolferId(id), &rules));

        let summary = draft.summary(&roster, &rules);
        assert_eq!(summary.to_string(), "Picks: 6/6 | Total Salary: $95/100");
        assert!(!summary.over_cap());
        assert!(draft.can_submit(&roster, &rules));
        assert_eq!(
            draft.validate(&roster, &rules).unwrap().total_salary,
            summary.total_salary
        );

        let partial = DraftEntry::new().toggle(GolferId(1), &rules);
        assert_eq!(
            partial.summary(&roster, &rules).to_string(),
            "Picks: 1/6 | Total Salary: $20/100"
        );
        assert!(!partial.can_submit(&roster, &rules));
    }
}
