//! Time axes.

use super::ReferenceableAxis;
use chrono::{DateTime, Utc};
use edal_common::{time, EdalError, EdalResult};

/// An axis of strictly monotonic instants.
///
/// Cell bounds are extrapolated by half the neighbouring gap, as a
/// duration, so irregular calendars (months, leap days) need no special
/// handling.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxis {
    name: String,
    times: Vec<DateTime<Utc>>,
    ascending: bool,
}

impl TimeAxis {
    pub fn new(name: impl Into<String>, times: Vec<DateTime<Utc>>) -> EdalResult<Self> {
        let name = name.into();
        if times.is_empty() {
            return Err(EdalError::construction(format!("time axis '{name}' has no values")));
        }

        let ascending = times.len() < 2 || times[1] > times[0];
        let monotonic = times.windows(2).all(|w| {
            if ascending {
                w[1] > w[0]
            } else {
                w[1] < w[0]
            }
        });
        if !monotonic {
            return Err(EdalError::construction(format!(
                "time axis '{name}' values are not strictly monotonic"
            )));
        }

        Ok(Self {
            name,
            times,
            ascending,
        })
    }

    pub fn times(&self) -> &[DateTime<Utc>] {
        &self.times
    }
}

impl ReferenceableAxis for TimeAxis {
    type Value = DateTime<Utc>;

    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> usize {
        self.times.len()
    }

    fn value_at(&self, index: usize) -> Option<DateTime<Utc>> {
        self.times.get(index).copied()
    }

    fn first_value(&self) -> DateTime<Utc> {
        self.times[0]
    }

    fn last_value(&self) -> DateTime<Utc> {
        self.times[self.times.len() - 1]
    }

    fn is_ascending(&self) -> bool {
        self.ascending
    }

    // Bounds past the representable range saturate at its ends
    fn extend_first_value(&self, first: DateTime<Utc>, next: DateTime<Utc>) -> DateTime<Utc> {
        time::shift_saturating(first, -((next - first) / 2))
    }

    fn extend_last_value(&self, last: DateTime<Utc>, second_last: DateTime<Utc>) -> DateTime<Utc> {
        time::shift_saturating(last, (last - second_last) / 2)
    }

    fn midpoint(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> DateTime<Utc> {
        time::midpoint(a, b)
    }
}
