use chrono::{DateTime, FixedOffset, TimeZone};

const SECONDS_PER_DAY: i64 = 60 * 60 * 24;
const DAYS_PER_WEEK: i64 = 7;
const WEEKS_PER_MONTH: i64 = 4;
const MONTHS_PER_YEAR: i64 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeUnit {
    Day,
    Week,
    Month,
    Year,
}

impl From<&AgeUnit> for &str {
    fn from(unit: &AgeUnit) -> Self {
        match unit {
            AgeUnit::Day => "day",
            AgeUnit::Week => "week",
            AgeUnit::Month => "month",
            AgeUnit::Year => "year",
        }
    }
}

/// Coarse, truncating estimate of how long ago a commit was made
///
/// Days become weeks past 7, weeks become months past 4 and months become
/// years past 12. Each step truncates, so this is not calendar accurate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitAge {
    value: i64,
    unit: AgeUnit,
}

impl CommitAge {
    pub fn between<Tz: TimeZone>(commit_date: DateTime<FixedOffset>, now: DateTime<Tz>) -> Self {
        let elapsed = now.fixed_offset() - commit_date;
        let mut value = (elapsed.num_seconds() / SECONDS_PER_DAY).max(0);
        let mut unit = AgeUnit::Day;

        if value > DAYS_PER_WEEK {
            value /= DAYS_PER_WEEK;
            unit = AgeUnit::Week;
        }
        if unit == AgeUnit::Week && value > WEEKS_PER_MONTH {
            value /= WEEKS_PER_MONTH;
            unit = AgeUnit::Month;
        }
        if unit == AgeUnit::Month && value > MONTHS_PER_YEAR {
            value /= MONTHS_PER_YEAR;
            unit = AgeUnit::Year;
        }

        CommitAge { value, unit }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn unit(&self) -> AgeUnit {
        self.unit
    }
}

impl std::fmt::Display for CommitAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unit: &str = (&self.unit).into();
        let plural = if self.value == 1 { "" } else { "s" };
        write!(f, "{} {}{} ago", self.value, unit, plural)
    }
}
