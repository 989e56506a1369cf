//! String forms of a [`Date`].
//!
//! - [`Display`](fmt::Display): the machine form, English fuzzy tokens and ISO 8601
//! - [`Date::localized_str`]: fuzzy labels and dates in the display language
//! - [`Date::to_readable_string`]: "Today", "In 3 days", "Yesterday", ...

use std::fmt::{self, Write};

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::clock::Clock;
use crate::date::{ConcreteValue, Date, FuzzyKind};
use crate::error::{DateError, Result};
use crate::locale::Localizer;
use crate::parse::days_in_year;

/// Days ahead that still read as "In N days" instead of a calendar date.
const READABLE_HORIZON_DAYS: i64 = 15;

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Date::Fuzzy(kind) => f.write_str(kind.as_str()),
            Date::Concrete(ConcreteValue::Date(d)) => write!(f, "{}", d.format("%Y-%m-%d")),
            Date::Concrete(ConcreteValue::DateTime(dt)) => {
                write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f"))
            }
            Date::Concrete(ConcreteValue::Zoned(dt)) => {
                write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f%:z"))
            }
        }
    }
}

impl Date {
    /// Display form in the locale's language.
    ///
    /// A datetime within an hour of now reads as "now"; other concrete
    /// values show their day in the locale date format.
    pub fn localized_str(&self, clock: &dyn Clock, locale: &dyn Localizer) -> Result<String> {
        let value = match self {
            Date::Fuzzy(kind) => return Ok(fuzzy_label(*kind, locale)),
            Date::Concrete(value) => value,
        };

        if let ConcreteValue::DateTime(dt) = value {
            let now = clock.now();
            let span = TimeDelta::hours(1);
            if now - span <= *dt && *dt < now + span {
                return Ok(locale.gettext("now"));
            }
        }
        format_date(value.date_naive(), locale.date_format())
    }

    /// Human-friendly form relative to today.
    ///
    /// Fuzzy values use their label. Concrete values read as "Today",
    /// "Tomorrow", "In N days" (up to 15), "Yesterday", "N days ago", or the
    /// locale date, without the year when less than a year ahead.
    ///
    /// # Examples
    ///
    /// ```
    /// use duedate::{Date, FixedClock, LocaleTable};
    /// use chrono::NaiveDate;
    ///
    /// let clock = FixedClock::at_noon(NaiveDate::from_ymd_opt(2026, 2, 18).unwrap());
    /// let locale = LocaleTable::default();
    ///
    /// let due = Date::from(NaiveDate::from_ymd_opt(2026, 2, 25).unwrap());
    /// assert_eq!(due.to_readable_string(&clock, &locale).unwrap(), "In 7 days");
    /// ```
    pub fn to_readable_string(&self, clock: &dyn Clock, locale: &dyn Localizer) -> Result<String> {
        let value = match self {
            Date::Fuzzy(kind) => return Ok(fuzzy_label(*kind, locale)),
            Date::Concrete(value) => value,
        };

        let today = clock.today();
        let date = value.date_naive();
        let days_left = date.signed_duration_since(today).num_days();

        if days_left == 0 {
            return Ok(locale.gettext("Today"));
        }
        if days_left < 0 {
            let days = days_left.unsigned_abs();
            return Ok(plural_days(locale, "Yesterday", "{days} days ago", days));
        }
        if days_left <= READABLE_HORIZON_DAYS {
            let days = days_left.unsigned_abs();
            return Ok(plural_days(locale, "Tomorrow", "In {days} days", days));
        }

        let mut pattern = locale.date_format().to_string();
        if days_left < days_in_year(today.year()) {
            pattern = pattern.replace("/%Y", "").replace(".%Y", ".");
        }
        format_date(date, &pattern)
    }
}

fn fuzzy_label(kind: FuzzyKind, locale: &dyn Localizer) -> String {
    kind.msgid()
        .map(|msgid| locale.gettext(msgid))
        .unwrap_or_default()
}

fn plural_days(locale: &dyn Localizer, singular: &str, plural: &str, days: u64) -> String {
    locale
        .ngettext(singular, plural, days)
        .replace("{days}", &days.to_string())
}

/// Format with a locale pattern, rejecting patterns chrono cannot render.
fn format_date(date: NaiveDate, pattern: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern))
        .map_err(|_| DateError::InvalidLocale(format!("bad date format '{pattern}'")))?;
    Ok(out)
}

// ── Tests ───────────────────────────────────────────────────────────────────
