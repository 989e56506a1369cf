//! Parsing of human-entered due dates.
//!
//! Two entry points share one cascade of parsers, tried in order of
//! specificity until one matches:
//!
//! 1. Construction ([`Date::from_str_with`]): ISO, locale formats, fuzzy tokens
//! 2. Bare day of month: `"15"` → the next 15th
//! 3. Numeric shorthand: `YYYY/MM/DD`, `YYYYMMDD`, `MMDD` (leading zeros optional)
//! 4. Phrases: `"tomorrow"`, `"next week"`, `"friday"` (English or localized)
//!
//! [`Date::parse`] anchors steps 2–4 at today. [`Date::parse_from_date`]
//! anchors them at an existing due date and swaps the phrase vocabulary for
//! recurrence periods (`"day"`, `"week"`, `"month"`, ...), computing the next
//! occurrence of a recurring task.

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};

use crate::clock::Clock;
use crate::date::Date;
use crate::error::{DateError, Result};
use crate::locale::{lowered, Localizer};

const WEEKDAYS: [(Weekday, &str); 7] = [
    (Weekday::Mon, "Monday"),
    (Weekday::Tue, "Tuesday"),
    (Weekday::Wed, "Wednesday"),
    (Weekday::Thu, "Thursday"),
    (Weekday::Fri, "Friday"),
    (Weekday::Sat, "Saturday"),
    (Weekday::Sun, "Sunday"),
];

/// Whether a weekday matching the anchor's own weekday counts as the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WeekdayRule {
    OnOrAfter,
    StrictlyAfter,
}

impl Date {
    /// Parse a human-entered date relative to today.
    ///
    /// # Supported Expressions
    ///
    /// Anything [`Date::from_str_with`] accepts, plus:
    ///
    /// **Day of month**: `"5"`, `"31"` → the next such day after today
    ///
    /// **Numeric**: `"2026/03/01"`, `"20260301"`, `"0301"` (year inferred)
    ///
    /// **Phrases**: `"today"`, `"tomorrow"`, `"next week"`, `"next month"`,
    /// `"next year"`, weekday names (always in the future)
    ///
    /// # Errors
    ///
    /// Returns [`DateError::UnparsableDate`] when no parser matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use duedate::{Date, FixedClock, LocaleTable};
    /// use chrono::NaiveDate;
    ///
    /// // Wednesday, February 18, 2026
    /// let clock = FixedClock::at_noon(NaiveDate::from_ymd_opt(2026, 2, 18).unwrap());
    /// let locale = LocaleTable::default();
    ///
    /// let friday = Date::parse("Friday", &clock, &locale).unwrap();
    /// assert_eq!(friday, Date::from(NaiveDate::from_ymd_opt(2026, 2, 20).unwrap()));
    /// ```
    pub fn parse(text: &str, clock: &dyn Clock, locale: &dyn Localizer) -> Result<Date> {
        let normalized = text.to_lowercase();
        if let Ok(date) = Date::from_str_with(&normalized, clock, locale) {
            return Ok(date);
        }

        let today = clock.today();
        try_day_of_month(&normalized, today)
            .or_else(|| try_numeric(&normalized, today))
            .or_else(|| try_phrase(&normalized, today, locale))
            .map(|date| {
                log::debug!("parsed '{normalized}' as {date} relative to {today}");
                Date::from(date)
            })
            .ok_or_else(|| DateError::UnparsableDate(format!("can't parse date '{text}'")))
    }

    /// Like [`Date::parse`], with an absent input meaning no date.
    pub fn parse_opt(text: Option<&str>, clock: &dyn Clock, locale: &dyn Localizer) -> Result<Date> {
        Date::parse(text.unwrap_or_default(), clock, locale)
    }

    /// Parse a recurrence expression counting from this date.
    ///
    /// For an existing task (`is_new_task == false`) the result is the next
    /// occurrence strictly after this date: `"day"` is +1, `"other-day"` +2,
    /// `"week"` +7, `"month"` the length of this date's month, `"year"` the
    /// length of this date's year, a weekday name is 1–7 days ahead, and day
    /// of month and numeric shorthand count from the following day.
    ///
    /// For a new task this date itself counts: periods resolve to this date
    /// and a weekday name matching this date's weekday resolves to it.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::UnparsableDate`] when no parser matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use duedate::{Date, FixedClock, LocaleTable};
    /// use chrono::NaiveDate;
    ///
    /// let clock = FixedClock::at_noon(NaiveDate::from_ymd_opt(2026, 2, 18).unwrap());
    /// let locale = LocaleTable::default();
    /// let due = Date::from(NaiveDate::from_ymd_opt(2026, 2, 10).unwrap());
    ///
    /// let next = due.parse_from_date("month", false, &clock, &locale).unwrap();
    /// assert_eq!(next, Date::from(NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()));
    /// ```
    pub fn parse_from_date(
        &self,
        text: &str,
        is_new_task: bool,
        clock: &dyn Clock,
        locale: &dyn Localizer,
    ) -> Result<Date> {
        let normalized = text.to_lowercase();
        if let Ok(date) = Date::from_str_with(&normalized, clock, locale) {
            return Ok(date);
        }

        let anchor = self.date(clock)?;
        let start = if is_new_task {
            anchor
        } else {
            anchor.succ_opt().ok_or_else(|| {
                DateError::UnparsableDate(format!("no day follows {anchor}"))
            })?
        };

        try_day_of_month(&normalized, start)
            .or_else(|| try_numeric(&normalized, start))
            .or_else(|| try_recurrence_phrase(&normalized, anchor, is_new_task, locale))
            .map(|date| {
                log::debug!("parsed recurrence '{normalized}' as {date} from {anchor}");
                Date::from(date)
            })
            .ok_or_else(|| DateError::UnparsableDate(format!("can't parse date '{text}'")))
    }
}

// ── Cascade steps ───────────────────────────────────────────────────────────

/// Try a bare day of month: `"1"` through `"31"`, no leading zero.
///
/// Picks that day in the anchor's month if it comes after the anchor, else in
/// the following month. When the following month is too short the in-month
/// day is kept even if it is not after the anchor.
fn try_day_of_month(s: &str, anchor: NaiveDate) -> Option<NaiveDate> {
    if s.is_empty() || s.len() > 2 || s.starts_with('0') || !is_all_digits(s) {
        return None;
    }
    let mday: u32 = s.parse().ok()?;
    if !(1..=31).contains(&mday) {
        return None;
    }

    let this_month = anchor.with_day(mday);
    if let Some(date) = this_month.filter(|date| *date > anchor) {
        return Some(date);
    }
    let (year, month) = next_month(anchor);
    NaiveDate::from_ymd_opt(year, month, mday).or(this_month)
}

/// Try numeric shorthand: `YYYY/MM/DD`, `YYYYMMDD`, or `MMDD`.
///
/// Month and day may drop their leading zero (`"315"`, `"2026315"`); the
/// fields are split like strptime's `%m%d`. The year is always four digits.
/// `MMDD` takes the anchor's year if that day is not before the anchor, else
/// the next year. A `0229` landing on a non-leap year does not match.
fn try_numeric(s: &str, anchor: NaiveDate) -> Option<NaiveDate> {
    if let Some((year, _)) = s.split_once('/') {
        if year.len() != 4 || !is_all_digits(year) {
            return None;
        }
        return NaiveDate::parse_from_str(s, "%Y/%m/%d").ok();
    }
    if s.is_empty() || !is_all_digits(s) {
        return None;
    }
    match s.len() {
        6..=8 => {
            let (month, day) = split_month_day(&s[4..])?;
            NaiveDate::from_ymd_opt(s[..4].parse().ok()?, month, day)
        }
        2..=4 => {
            let (month, day) = split_month_day(s)?;
            let year = if (month, day) >= (anchor.month(), anchor.day()) {
                anchor.year()
            } else {
                anchor.year() + 1
            };
            NaiveDate::from_ymd_opt(year, month, day)
        }
        _ => None,
    }
}

/// Split digits into month and day the way `%m%d` does.
///
/// A two-digit month is taken when a day still follows it, otherwise a
/// one-digit month. Digits left over after the day reject the input.
fn split_month_day(s: &str) -> Option<(u32, u32)> {
    let (month, rest) = [2, 1].into_iter().find_map(|len| {
        let month = s.get(..len).filter(|m| is_month_field(m))?;
        let rest = &s[len..];
        day_field_len(rest).map(|_| (month, rest))
    })?;
    if day_field_len(rest)? != rest.len() {
        return None;
    }
    Some((month.parse().ok()?, rest.parse().ok()?))
}

fn is_month_field(m: &str) -> bool {
    matches!(
        m.as_bytes(),
        [b'1', b'0'..=b'2'] | [b'0', b'1'..=b'9'] | [b'1'..=b'9']
    )
}

/// Width of the day field at the start of `s`: `01`–`31` or `1`–`9`.
fn day_field_len(s: &str) -> Option<usize> {
    match s.as_bytes() {
        [b'3', b'0' | b'1', ..] | [b'1' | b'2', b'0'..=b'9', ..] | [b'0', b'1'..=b'9', ..] => {
            Some(2)
        }
        [b'1'..=b'9', ..] => Some(1),
        _ => None,
    }
}

/// Try a phrase relative to today: "today", "tomorrow", "next week|month|year",
/// or a weekday name.
fn try_phrase(s: &str, today: NaiveDate, locale: &dyn Localizer) -> Option<NaiveDate> {
    let phrases = [
        ("today", 0),
        ("tomorrow", 1),
        ("next week", 7),
        ("next month", days_in_month(today)?),
        ("next year", days_in_year(today.year())),
    ];

    let offset = match_phrase(s, &phrases, locale)
        .or_else(|| weekday_offset(s, today, WeekdayRule::StrictlyAfter, locale))?;
    today.checked_add_signed(TimeDelta::days(offset))
}

/// Try a recurrence period or weekday name relative to `anchor`.
fn try_recurrence_phrase(
    s: &str,
    anchor: NaiveDate,
    is_new_task: bool,
    locale: &dyn Localizer,
) -> Option<NaiveDate> {
    let periods = [
        ("day", 1),
        ("other-day", 2),
        ("week", 7),
        ("month", days_in_month(anchor)?),
        ("year", days_in_year(anchor.year())),
    ];

    let rule = if is_new_task {
        WeekdayRule::OnOrAfter
    } else {
        WeekdayRule::StrictlyAfter
    };
    let offset = match match_phrase(s, &periods, locale) {
        Some(_) if is_new_task => 0,
        Some(days) => days,
        None => weekday_offset(s, anchor, rule, locale)?,
    };
    anchor.checked_add_signed(TimeDelta::days(offset))
}

// ── Helpers ─────────────────────────────────────────────────────────────────

/// Day offset of the first phrase matching `s` in English or the locale.
fn match_phrase(s: &str, phrases: &[(&str, i64)], locale: &dyn Localizer) -> Option<i64> {
    phrases
        .iter()
        .find(|(msgid, _)| s == *msgid || s == lowered(locale, msgid))
        .map(|(_, days)| *days)
}

/// Days from `anchor` to the weekday named by `s`.
fn weekday_offset(
    s: &str,
    anchor: NaiveDate,
    rule: WeekdayRule,
    locale: &dyn Localizer,
) -> Option<i64> {
    let (weekday, _) = WEEKDAYS
        .iter()
        .find(|(_, name)| s == name.to_lowercase() || s == lowered(locale, name))?;

    let ahead = (weekday.num_days_from_monday() as i64
        - anchor.weekday().num_days_from_monday() as i64
        + 7)
        % 7;
    match (ahead, rule) {
        (0, WeekdayRule::StrictlyAfter) => Some(7),
        (ahead, _) => Some(ahead),
    }
}

fn is_all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

pub(crate) fn next_month(date: NaiveDate) -> (i32, u32) {
    if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    }
}

pub(crate) fn days_in_month(date: NaiveDate) -> Option<i64> {
    let (year, month) = next_month(date);
    let last_day = NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()?;
    Some(last_day.day() as i64)
}

pub(crate) fn days_in_year(year: i32) -> i64 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::date::{NO_DATE, SOMEDAY, SOON};
    use crate::locale::LocaleTable;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> Date {
        Date::from(ymd(y, m, d))
    }

    /// Wednesday, February 18, 2026.
    fn clock() -> FixedClock {
        FixedClock::at_noon(ymd(2026, 2, 18))
    }

    fn clock_on(y: i32, m: u32, d: u32) -> FixedClock {
        FixedClock::at_noon(ymd(y, m, d))
    }

    fn parse(s: &str) -> Result<Date> {
        Date::parse(s, &clock(), &LocaleTable::default())
    }

    fn parse_on(s: &str, c: &FixedClock) -> Result<Date> {
        Date::parse(s, c, &LocaleTable::default())
    }

    fn recur(anchor: Date, s: &str, is_new_task: bool) -> Result<Date> {
        anchor.parse_from_date(s, is_new_task, &clock(), &LocaleTable::default())
    }

    // ── construction passthrough ────────────────────────────────────────

    #[test]
    fn test_parse_passes_through_construction() {
        assert_eq!(parse("2026-03-01").unwrap(), day(2026, 3, 1));
        assert_eq!(parse("SOON").unwrap(), SOON);
        assert_eq!(parse("Someday").unwrap(), SOMEDAY);
        assert_eq!(parse("").unwrap(), NO_DATE);
        assert_eq!(Date::parse_opt(None, &clock(), &LocaleTable::default()).unwrap(), NO_DATE);
    }

    // ── day of month ────────────────────────────────────────────────────

    #[test]
    fn test_day_of_month_later_this_month() {
        // Today is the 18th
        assert_eq!(parse("25").unwrap(), day(2026, 2, 25));
    }

    #[test]
    fn test_day_of_month_already_passed_rolls_to_next_month() {
        assert_eq!(parse("15").unwrap(), day(2026, 3, 15));
        assert_eq!(parse("18").unwrap(), day(2026, 3, 18));
    }

    #[test]
    fn test_day_of_month_before_the_15th() {
        let c = clock_on(2026, 2, 10);
        assert_eq!(parse_on("15", &c).unwrap(), day(2026, 2, 15));
    }

    #[test]
    fn test_day_of_month_december_rolls_to_january() {
        let c = clock_on(2026, 12, 20);
        assert_eq!(parse_on("5", &c).unwrap(), day(2027, 1, 5));
    }

    #[test]
    fn test_day_of_month_missing_in_this_month() {
        // February has no 30th; March does
        assert_eq!(parse("30").unwrap(), day(2026, 3, 30));
    }

    #[test]
    fn test_day_of_month_missing_in_next_month_keeps_this_month() {
        // Today is January 31st and February has no 31st
        let c = clock_on(2026, 1, 31);
        assert_eq!(parse_on("31", &c).unwrap(), day(2026, 1, 31));
    }

    #[test]
    fn test_day_of_month_rejects_leading_zero_and_out_of_range() {
        assert!(try_day_of_month("05", ymd(2026, 2, 18)).is_none());
        assert!(try_day_of_month("0", ymd(2026, 2, 18)).is_none());
        assert!(try_day_of_month("32", ymd(2026, 2, 18)).is_none());
        assert!(try_day_of_month("1a", ymd(2026, 2, 18)).is_none());
    }

    // ── numeric shorthand ───────────────────────────────────────────────

    #[test]
    fn test_numeric_with_slashes() {
        assert_eq!(parse("2026/03/01").unwrap(), day(2026, 3, 1));
    }

    #[test]
    fn test_numeric_compact() {
        assert_eq!(parse("20260301").unwrap(), day(2026, 3, 1));
    }

    #[test]
    fn test_numeric_month_day_this_year() {
        assert_eq!(parse("0301").unwrap(), day(2026, 3, 1));
        assert_eq!(parse("0218").unwrap(), day(2026, 2, 18));
    }

    #[test]
    fn test_numeric_month_day_passed_is_next_year() {
        assert_eq!(parse("0105").unwrap(), day(2027, 1, 5));
    }

    #[test]
    fn test_numeric_leap_day_in_leap_year() {
        let c = clock_on(2028, 1, 10);
        assert_eq!(parse_on("0229", &c).unwrap(), day(2028, 2, 29));
    }

    #[test]
    fn test_numeric_leap_day_into_non_leap_year_fails() {
        // Feb 29 2028 has passed on March 1 2028; 2029 has no Feb 29
        let c = clock_on(2028, 3, 1);
        let err = parse_on("0229", &c).unwrap_err();
        assert!(matches!(err, DateError::UnparsableDate(_)), "got {err:?}");

        let err = parse("0229").unwrap_err();
        assert!(matches!(err, DateError::UnparsableDate(_)), "got {err:?}");
    }

    #[test]
    fn test_numeric_invalid_month() {
        assert!(parse("1399").is_err());
    }

    #[test]
    fn test_numeric_without_leading_zeros() {
        assert_eq!(parse("315").unwrap(), day(2026, 3, 15));
        assert_eq!(parse("101").unwrap(), day(2026, 10, 1));
        assert_eq!(parse("131").unwrap(), day(2027, 1, 31));
        assert_eq!(parse("110").unwrap(), day(2027, 1, 10));
        assert_eq!(parse("32").unwrap(), day(2026, 3, 2));
        assert_eq!(parse("2026315").unwrap(), day(2026, 3, 15));
        assert_eq!(parse("2026101").unwrap(), day(2026, 10, 1));
        assert_eq!(parse("202635").unwrap(), day(2026, 3, 5));
    }

    #[test]
    fn test_numeric_leftover_digits_are_rejected() {
        assert!(parse("3155").is_err());
        assert!(parse("1232").is_err());
        assert!(parse("20261232").is_err());
        assert!(parse("202612315").is_err());
    }

    #[test]
    fn test_numeric_split_month_day() {
        assert_eq!(split_month_day("1231"), Some((12, 31)));
        assert_eq!(split_month_day("0229"), Some((2, 29)));
        assert_eq!(split_month_day("110"), Some((1, 10)));
        assert_eq!(split_month_day("01"), None);
        assert_eq!(split_month_day("1"), None);
    }

    #[test]
    fn test_numeric_slashes_need_four_digit_year() {
        let err = parse("26/3/1").unwrap_err();
        assert!(matches!(err, DateError::UnparsableDate(_)), "got {err:?}");
        assert!(parse("026/3/1").is_err());
        assert_eq!(parse("2026/3/1").unwrap(), day(2026, 3, 1));
    }

    // ── phrases ─────────────────────────────────────────────────────────

    #[test]
    fn test_today_and_tomorrow() {
        let c = clock();
        assert_eq!(parse("today").unwrap(), Date::today(&c));
        assert_eq!(parse("Tomorrow").unwrap(), Date::tomorrow(&c).unwrap());
        assert_eq!(
            parse("tomorrow").unwrap(),
            Date::today(&c).checked_add(TimeDelta::days(1)).unwrap()
        );
    }

    #[test]
    fn test_next_week() {
        assert_eq!(parse("next week").unwrap(), day(2026, 2, 25));
    }

    #[test]
    fn test_next_month_adds_length_of_current_month() {
        // February 2026 has 28 days
        assert_eq!(parse("next month").unwrap(), day(2026, 3, 18));
        // January has 31
        let c = clock_on(2026, 1, 31);
        assert_eq!(parse_on("next month", &c).unwrap(), day(2026, 3, 3));
    }

    #[test]
    fn test_next_year_is_leap_aware() {
        assert_eq!(parse("next year").unwrap(), day(2027, 2, 18));
        let c = clock_on(2028, 1, 1);
        assert_eq!(parse_on("next year", &c).unwrap(), day(2029, 1, 1));
        let c = clock_on(2027, 3, 1);
        assert_eq!(parse_on("next year", &c).unwrap(), day(2028, 2, 29));
    }

    #[test]
    fn test_weekday_is_always_in_the_future() {
        // Today is Wednesday
        assert_eq!(parse("thursday").unwrap(), day(2026, 2, 19));
        assert_eq!(parse("monday").unwrap(), day(2026, 2, 23));
        assert_eq!(parse("Wednesday").unwrap(), day(2026, 2, 25));
        assert_eq!(parse("tuesday").unwrap(), day(2026, 2, 24));
    }

    #[test]
    fn test_localized_phrases() {
        let locale = LocaleTable::default()
            .with_message("tomorrow", "Morgen")
            .with_message("next week", "Nächste Woche")
            .with_message("Friday", "Freitag");
        let c = clock();
        assert_eq!(Date::parse("morgen", &c, &locale).unwrap(), day(2026, 2, 19));
        assert_eq!(Date::parse("NÄCHSTE WOCHE", &c, &locale).unwrap(), day(2026, 2, 25));
        assert_eq!(Date::parse("Freitag", &c, &locale).unwrap(), day(2026, 2, 20));
        // English keeps working alongside the translation
        assert_eq!(Date::parse("friday", &c, &locale).unwrap(), day(2026, 2, 20));
    }

    #[test]
    fn test_unparsable() {
        let err = parse("the day after the party").unwrap_err();
        assert!(matches!(err, DateError::UnparsableDate(_)));
        assert!(err.to_string().contains("Unparsable date"), "got: {err}");
    }

    // ── recurrence ──────────────────────────────────────────────────────

    #[test]
    fn test_recur_periods_for_existing_task() {
        let anchor = day(2026, 1, 10);
        assert_eq!(recur(anchor, "day", false).unwrap(), day(2026, 1, 11));
        assert_eq!(recur(anchor, "other-day", false).unwrap(), day(2026, 1, 12));
        assert_eq!(recur(anchor, "week", false).unwrap(), day(2026, 1, 17));
        assert_eq!(recur(anchor, "month", false).unwrap(), day(2026, 2, 10));
        assert_eq!(recur(anchor, "year", false).unwrap(), day(2027, 1, 10));
    }

    #[test]
    fn test_recur_month_uses_anchor_month_length() {
        // Anchor in February 2028 (29 days), far from today
        let anchor = day(2028, 2, 10);
        assert_eq!(recur(anchor, "month", false).unwrap(), day(2028, 3, 10));
        let anchor = day(2026, 1, 31);
        assert_eq!(recur(anchor, "Month", false).unwrap(), day(2026, 3, 3));
    }

    #[test]
    fn test_recur_year_uses_anchor_year_length() {
        let anchor = day(2028, 1, 1);
        assert_eq!(recur(anchor, "year", false).unwrap(), day(2029, 1, 1));
        let anchor = day(2027, 3, 1);
        assert_eq!(recur(anchor, "year", false).unwrap(), day(2028, 2, 29));
    }

    #[test]
    fn test_recur_periods_for_new_task_stay_on_anchor() {
        let anchor = day(2026, 1, 10);
        for period in ["day", "other-day", "week", "month", "year"] {
            assert_eq!(recur(anchor, period, true).unwrap(), anchor, "period: {period}");
        }
    }

    #[test]
    fn test_recur_weekday() {
        // January 10, 2026 is a Saturday
        let anchor = day(2026, 1, 10);
        assert_eq!(recur(anchor, "monday", false).unwrap(), day(2026, 1, 12));
        assert_eq!(recur(anchor, "monday", true).unwrap(), day(2026, 1, 12));
        assert_eq!(recur(anchor, "saturday", false).unwrap(), day(2026, 1, 17));
        assert_eq!(recur(anchor, "saturday", true).unwrap(), anchor);
    }

    #[test]
    fn test_recur_day_of_month() {
        let anchor = day(2026, 1, 10);
        assert_eq!(recur(anchor, "15", true).unwrap(), day(2026, 1, 15));
        assert_eq!(recur(anchor, "10", true).unwrap(), day(2026, 2, 10));
        // Existing task counts from the 11th
        assert_eq!(recur(anchor, "11", false).unwrap(), day(2026, 2, 11));
        assert_eq!(recur(anchor, "12", false).unwrap(), day(2026, 1, 12));
    }

    #[test]
    fn test_recur_numeric() {
        let anchor = day(2026, 6, 30);
        assert_eq!(recur(anchor, "0630", true).unwrap(), day(2026, 6, 30));
        assert_eq!(recur(anchor, "0630", false).unwrap(), day(2027, 6, 30));
        assert_eq!(recur(anchor, "2026/12/24", false).unwrap(), day(2026, 12, 24));
    }

    #[test]
    fn test_recur_from_timezone_anchor() {
        let anchor: Date = Date::from_str_with(
            "2026-01-10T22:00:00+00:00",
            &clock(),
            &LocaleTable::default(),
        )
        .unwrap();
        assert_eq!(recur(anchor, "day", false).unwrap(), day(2026, 1, 11));
    }

    #[test]
    fn test_recur_localized_period() {
        let locale = LocaleTable::default().with_message("week", "Semaine");
        let anchor = day(2026, 1, 10);
        let next = anchor
            .parse_from_date("semaine", false, &clock(), &locale)
            .unwrap();
        assert_eq!(next, day(2026, 1, 17));
    }

    #[test]
    fn test_recur_unparsable() {
        let err = recur(day(2026, 1, 10), "fortnight", false).unwrap_err();
        assert!(matches!(err, DateError::UnparsableDate(_)));
    }

    // ── helpers ─────────────────────────────────────────────────────────

    #[test]
    fn test_days_in_month_and_year() {
        assert_eq!(days_in_month(ymd(2026, 2, 1)), Some(28));
        assert_eq!(days_in_month(ymd(2028, 2, 1)), Some(29));
        assert_eq!(days_in_month(ymd(2026, 12, 31)), Some(31));
        assert_eq!(days_in_year(2026), 365);
        assert_eq!(days_in_year(2028), 366);
        assert_eq!(days_in_year(2100), 365);
    }
}
