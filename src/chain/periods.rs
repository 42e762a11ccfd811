// src/chain/periods.rs

// Maps a list of expiration timestamps onto named trading periods. All
// calendar math is UTC; the identifiers stay raw strings so callers can
// feed them straight back into a pinned page fetch.

use chrono::{DateTime, Datelike, Duration, NaiveDate};

/// Named expiration horizons, nearest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    Weekly,
    Monthly,
    Yearly,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Yearly => "yearly",
        }
    }
}

// Day offsets past the base Friday, per period.
const PERIOD_DAYS: [(Period, i64); 3] = [
    (Period::Weekly, 7),
    (Period::Monthly, 28),
    (Period::Yearly, 364),
];

/// At most one expiration identifier per period. A short or too-near
/// expiration list leaves the later slots empty; nothing here fails.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PeriodMap {
    pub weekly: Option<String>,
    pub monthly: Option<String>,
    pub yearly: Option<String>,
}

impl PeriodMap {
    pub fn get(&self, period: Period) -> Option<&str> {
        match period {
            Period::Weekly => self.weekly.as_deref(),
            Period::Monthly => self.monthly.as_deref(),
            Period::Yearly => self.yearly.as_deref(),
        }
    }

    fn set(&mut self, period: Period, expiration: &str) {
        let slot = match period {
            Period::Weekly => &mut self.weekly,
            Period::Monthly => &mut self.monthly,
            Period::Yearly => &mut self.yearly,
        };
        *slot = Some(expiration.to_string());
    }
}

/// The Friday `distance` days past the first Friday strictly after `from`.
/// On a Friday (or the weekend) the base rolls a week forward, so the
/// candidate is never `from` itself or in the past.
pub fn next_friday(from: NaiveDate, distance: i64) -> NaiveDate {
    let mut day_diff = 4 - from.weekday().num_days_from_monday() as i64;
    if day_diff <= 0 {
        day_diff += 7;
    }
    from + Duration::days(day_diff + distance)
}

/// Walk `expirations` in input order and assign the first identifier landing
/// on or after each period's target Friday, weekly → monthly → yearly. The
/// first match wins a period and the cursor never looks back. Identifiers
/// that are not epoch seconds are skipped.
pub fn select_periods(reference: NaiveDate, expirations: &[String]) -> PeriodMap {
    let mut map = PeriodMap::default();
    let mut cursor = 0usize;

    for raw in expirations {
        let Some(exp_date) = expiration_date(raw) else {
            tracing::debug!(identifier = %raw, "skipping unparseable expiration");
            continue;
        };

        let (period, days) = PERIOD_DAYS[cursor];
        if next_friday(reference, days) <= exp_date {
            map.set(period, raw);
            cursor += 1;
            if cursor >= PERIOD_DAYS.len() {
                break;
            }
        }
    }

    map
}

/// Epoch-seconds identifier → UTC calendar date.
pub fn expiration_date(raw: &str) -> Option<NaiveDate> {
    let secs = raw.trim().parse::<i64>().ok()?;
    DateTime::from_timestamp(secs, 0).map(|dt| dt.date_naive())
}
