//! Sort direction, sort entries and value comparison.
//!
//! Sorting must never fail, whatever the data looks like, so
//! [`compare_values`] is a total order: values of the same type compare
//! naturally, values of different types compare by a fixed type rank and
//! `None` sorts after everything else.

use std::cmp::Ordering;
use std::fmt;

use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl SortDirection {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, SortDirection::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, SortDirection::Desc)
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a column sits in the header click cycle.
///
/// The cycle is unsorted → ascending → descending → unsorted.
pub fn next_in_cycle(current: Option<SortDirection>) -> Option<SortDirection> {
    match current {
        None => Some(SortDirection::Asc),
        Some(SortDirection::Asc) => Some(SortDirection::Desc),
        Some(SortDirection::Desc) => None,
    }
}

/// One active sort: a column and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortEntry {
    /// Id of the sorted column.
    pub column_id: String,
    /// The sort direction.
    pub direction: SortDirection,
}

impl SortEntry {
    /// Creates an ascending sort on the given column.
    pub fn asc(column_id: impl Into<String>) -> Self {
        SortEntry {
            column_id: column_id.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Creates a descending sort on the given column.
    pub fn desc(column_id: impl Into<String>) -> Self {
        SortEntry {
            column_id: column_id.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Creates a sort with the given direction.
    pub fn new(column_id: impl Into<String>, direction: SortDirection) -> Self {
        SortEntry {
            column_id: column_id.into(),
            direction,
        }
    }

    /// Compares two values according to this entry's direction.
    pub fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Ordering {
        self.direction.apply(compare_values(a, b))
    }
}

/// Compares two values with a total order.
///
/// - Same type: numeric, lexicographic, chronological, `false < true`.
/// - `None` sorts after every other value.
/// - Mixed types order by type rank: bool, number, timestamp, string.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a.compare(*b),
        (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => a.type_rank().cmp(&b.type_rank()),
    }
}
