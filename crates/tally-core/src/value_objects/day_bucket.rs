//! Day bucket - a calendar date anchored to a fixed timezone
//!
//! Every conversion from an instant to "which day is it" goes through
//! [`DayBucket::of`], so stored daily keys never depend on the host clock's
//! local timezone.

use std::fmt;

use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Timezone used for day bucketing unless configured otherwise
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Argentina::Buenos_Aires;

/// A calendar day in the bucketing timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayBucket(NaiveDate);

impl DayBucket {
    /// Bucket containing `instant` when observed from `tz`
    pub fn of(instant: DateTime<Utc>, tz: Tz) -> Self {
        Self(instant.with_timezone(&tz).date_naive())
    }

    #[inline]
    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// First instant of the following day in `tz`.
    ///
    /// If local midnight does not exist (a DST gap), the first valid hour
    /// after it is used.
    pub fn next_boundary(self, tz: Tz) -> Option<DateTime<Utc>> {
        let next = self.0.checked_add_days(Days::new(1))?;
        let midnight = next.and_time(NaiveTime::MIN);

        (0..=2)
            .filter_map(|hour| {
                let local = midnight + chrono::Duration::hours(hour);
                tz.from_local_datetime(&local).earliest()
            })
            .next()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl From<NaiveDate> for DayBucket {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<DayBucket> for NaiveDate {
    fn from(bucket: DayBucket) -> Self {
        bucket.0
    }
}

impl fmt::Display for DayBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
