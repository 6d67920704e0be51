use csv::{ReaderBuilder, Trim};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("name is empty")]
    EmptyName,

    #[error("salary is missing")]
    MissingSalary,

    #[error("salary '{0}' is not a whole number")]
    InvalidSalary(String),

    #[error("salary {0} is negative")]
    NegativeSalary(i64),

    #[error("unreadable row: {0}")]
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {index}: {reason}")]
pub struct InvalidRow {
    pub index: usize,
    pub reason: RowError,
}

/// A golfer that passed row validation but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGolfer {
    pub name: String,
    pub salary: u32,
}

impl NewGolfer {
    pub fn new(name: &str, salary: i64) -> Result<Self, RowError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RowError::EmptyName);
        }
        if salary < 0 {
            return Err(RowError::NegativeSalary(salary));
        }
        let salary =
            u32::try_from(salary).map_err(|_| RowError::InvalidSalary(salary.to_string()))?;
        Ok(Self {
            name: name.to_string(),
            salary,
        })
    }

    /// Like [`NewGolfer::new`] but takes the salary as text, e.g. a CSV cell.
    pub fn parse(name: &str, salary: &str) -> Result<Self, RowError> {
        let salary = parse_salary(salary)?;
        Self::new(name, salary)
    }
}

fn parse_salary(raw: &str) -> Result<i64, RowError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(RowError::MissingSalary);
    }
    let digits = raw.strip_prefix('$').unwrap_or(raw);
    digits
        .parse::<i64>()
        .map_err(|_| RowError::InvalidSalary(raw.to_string()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterImport {
    pub golfers: Vec<NewGolfer>,
    pub skipped: Vec<InvalidRow>,
    pub header_skipped: bool,
}

/// Parses two-column `name,salary` text.
///
/// The first row is taken as a header only when its salary cell is not a
/// number. Rows that fail validation are reported in `skipped` with their
/// 1-based line number.
pub fn parse_roster_csv(text: &str) -> RosterImport {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut import = RosterImport::default();
    let mut first = true;
    for (i, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                let index = e.position().map_or(i + 1, |p| p.line() as usize);
                import.skipped.push(InvalidRow {
                    index,
                    reason: RowError::Unreadable(e.to_string()),
                });
                first = false;
                continue;
            }
        };
        let index = record.position().map_or(i + 1, |p| p.line() as usize);
        let name = record.get(0).unwrap_or("");
        let salary = record.get(1).unwrap_or("");

        if std::mem::take(&mut first) && parse_salary(salary).is_err() {
            import.header_skipped = true;
            continue;
        }

        match NewGolfer::parse(name, salary) {
            Ok(golfer) => import.golfers.push(golfer),
            Err(reason) => import.skipped.push(InvalidRow { index, reason }),
        }
    }
    import
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_golfer_validation() {
        assert_eq!(
            NewGolfer::new("  Jon Rahm ", 18),
            Ok(NewGolfer {
                name: "Jon Rahm".to_string(),
                salary: 18
            })
        );
        assert_eq!(NewGolfer::new("   ", 18), Err(RowError::EmptyName));
        assert_eq!(NewGolfer::new("Jon Rahm", -1), Err(RowError::NegativeSalary(-1)));
        assert_eq!(NewGolfer::parse("Jon Rahm", "$12").map(|g| g.salary), Ok(12));
        assert_eq!(
            NewGolfer::parse("Jon Rahm", "twelve"),
            Err(RowError::InvalidSalary("twelve".to_string()))
        );
        assert_eq!(NewGolfer::parse("Jon Rahm", ""), Err(RowError::MissingSalary));
    }

    #[test]
    fn test_header_detection() {
        let with_header = parse_roster_csv("Name,Salary\nJon Rahm,18\nTony Finau,9\n");
        assert!(with_header.header_skipped);
        assert_eq!(with_header.golfers.len(), 2);
        assert!(with_header.skipped.is_empty());

        let without_header = parse_roster_csv("Jon Rahm,18\r\nTony Finau,9");
        assert!(!without_header.header_skipped);
        assert_eq!(without_header.golfers[0].name, "Jon Rahm");
        assert_eq!(without_header.golfers[1].salary, 9);
    }

    #[test]
    fn test_bad_rows_reported_not_dropped() {
        let mut text = String::from("name,salary\n");
        for i in 1..=9 {
            text.push_str(&format!("Golfer {},{}\n", i, i * 2));
            if i == 4 {
                text.push_str("Broken Golfer,-5\n");
            }
        }
        let import = parse_roster_csv(&text);
        assert_eq!(import.golfers.len(), 9);
        assert_eq!(
            import.skipped,
            vec![InvalidRow {
                index: 6,
                reason: RowError::NegativeSalary(-5)
            }]
        );
    }

    #[test]
    fn test_quoted_names_and_blank_lines() {
        let import = parse_roster_csv("\"Smith, Cameron\",8\n\n,12\n\"Si Woo Kim\"\n");
        assert_eq!(import.golfers.len(), 1);
        assert_eq!(import.golfers[0].name, "Smith, Cameron");
        assert_eq!(import.skipped.len(), 2);
        assert_eq!(import.skipped[0].reason, RowError::EmptyName);
        assert_eq!(import.skipped[1].reason, RowError::MissingSalary);
    }
}
