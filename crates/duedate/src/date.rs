//! The fuzzy-or-concrete due date value.
//!
//! A [`Date`] is either a symbolic [`FuzzyKind`] (`now`, `soon`, `someday`,
//! no date) or a [`ConcreteValue`] at one of three accuracies. Operations that
//! mix accuracies go through [`Date::normalize`], which casts both operands to
//! the least precise concrete accuracy either of them has.
//!
//! All functions that need the current instant take an explicit [`Clock`].

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::accuracy::Accuracy;
use crate::clock::{Clock, SystemClock};
use crate::error::{DateError, Result};
use crate::locale::{lowered, LocaleTable, Localizer};

/// Days ahead of now that `soon` resolves to.
pub const SOON_OFFSET_DAYS: i64 = 15;
/// Days ahead of now that `someday` resolves to.
pub const SOMEDAY_OFFSET_DAYS: i64 = 365;
/// Days ahead of now that a missing date resolves to when a real date is unavoidable.
pub const NO_DATE_OFFSET_DAYS: i64 = 9999;

// ISO 8601 forms with an offset, tried after RFC 3339.
const ISO_ZONED_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
];

const ISO_NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

// ── Fuzzy values ────────────────────────────────────────────────────────────

/// A symbolic due date with no calendar instant behind it.
///
/// Fuzzy values compare with each other in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FuzzyKind {
    Now,
    Soon,
    Someday,
    NoDate,
}

impl FuzzyKind {
    /// Integer code used by older task files: 0 now, 1 soon, 2 someday, 3 no date.
    pub fn code(self) -> i64 {
        match self {
            FuzzyKind::Now => 0,
            FuzzyKind::Soon => 1,
            FuzzyKind::Someday => 2,
            FuzzyKind::NoDate => 3,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(FuzzyKind::Now),
            1 => Some(FuzzyKind::Soon),
            2 => Some(FuzzyKind::Someday),
            3 => Some(FuzzyKind::NoDate),
            _ => None,
        }
    }

    /// The English machine token. Empty for [`FuzzyKind::NoDate`].
    pub fn as_str(self) -> &'static str {
        match self {
            FuzzyKind::Now => "now",
            FuzzyKind::Soon => "soon",
            FuzzyKind::Someday => "someday",
            FuzzyKind::NoDate => "",
        }
    }

    /// Message id for the display label, if the value has one.
    pub(crate) fn msgid(self) -> Option<&'static str> {
        match self {
            FuzzyKind::NoDate => None,
            other => Some(other.as_str()),
        }
    }

    fn offset_days(self) -> i64 {
        match self {
            FuzzyKind::Now => 0,
            FuzzyKind::Soon => SOON_OFFSET_DAYS,
            FuzzyKind::Someday => SOMEDAY_OFFSET_DAYS,
            FuzzyKind::NoDate => NO_DATE_OFFSET_DAYS,
        }
    }

    /// The naive instant this value stands in for when a real one is needed.
    fn resolve(self, clock: &dyn Clock) -> Result<NaiveDateTime> {
        clock
            .now()
            .checked_add_signed(TimeDelta::days(self.offset_days()))
            .ok_or_else(|| {
                DateError::InvalidArithmetic(format!(
                    "resolving '{}' overflows the calendar",
                    self.as_str()
                ))
            })
    }
}

// ── Concrete values ─────────────────────────────────────────────────────────

/// A real calendar value at date, datetime, or timezone accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConcreteValue {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Zoned(DateTime<FixedOffset>),
}

impl ConcreteValue {
    pub fn accuracy(&self) -> Accuracy {
        match self {
            ConcreteValue::Date(_) => Accuracy::Date,
            ConcreteValue::DateTime(_) => Accuracy::DateTime,
            ConcreteValue::Zoned(_) => Accuracy::Timezone,
        }
    }

    /// Cast to `target`, promoting with midnight and the local offset or
    /// truncating to the calendar day.
    pub fn cast_to(self, target: Accuracy, clock: &dyn Clock) -> Result<ConcreteValue> {
        let offset = clock.local_offset();
        let cast = match (self, target) {
            (value, target) if value.accuracy() == target => Some(value),
            (ConcreteValue::Date(d), Accuracy::DateTime) => {
                Some(ConcreteValue::DateTime(d.and_time(NaiveTime::MIN)))
            }
            (ConcreteValue::Date(d), Accuracy::Timezone) => {
                attach_offset(d.and_time(NaiveTime::MIN), offset).map(ConcreteValue::Zoned)
            }
            // A naive datetime is taken to already be local time.
            (ConcreteValue::DateTime(dt), Accuracy::Timezone) => {
                attach_offset(dt, offset).map(ConcreteValue::Zoned)
            }
            (ConcreteValue::Zoned(dt), Accuracy::DateTime) => {
                Some(ConcreteValue::DateTime(dt.with_timezone(&offset).naive_local()))
            }
            (ConcreteValue::DateTime(dt), Accuracy::Date) => Some(ConcreteValue::Date(dt.date())),
            (ConcreteValue::Zoned(dt), Accuracy::Date) => {
                Some(ConcreteValue::Date(dt.date_naive()))
            }
            _ => None,
        };
        cast.ok_or_else(|| internal_accuracy(self.accuracy(), target))
    }

    /// The calendar day, discarding any time of day.
    pub fn date_naive(&self) -> NaiveDate {
        match self {
            ConcreteValue::Date(d) => *d,
            ConcreteValue::DateTime(dt) => dt.date(),
            ConcreteValue::Zoned(dt) => dt.date_naive(),
        }
    }

    fn shift(self, delta: TimeDelta) -> Option<ConcreteValue> {
        match self {
            ConcreteValue::Date(d) => d.checked_add_signed(delta).map(ConcreteValue::Date),
            ConcreteValue::DateTime(dt) => {
                dt.checked_add_signed(delta).map(ConcreteValue::DateTime)
            }
            ConcreteValue::Zoned(dt) => dt.checked_add_signed(delta).map(ConcreteValue::Zoned),
        }
    }
}

fn attach_offset(naive: NaiveDateTime, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    naive.and_local_timezone(offset).single()
}

fn internal_accuracy(from: Accuracy, to: Accuracy) -> DateError {
    log::error!("no cast from {from} to {to}; this is a bug");
    DateError::InternalAccuracy { from, to }
}

// ── Date ────────────────────────────────────────────────────────────────────

/// A due date: either fuzzy or a concrete calendar value.
///
/// Values are immutable and `Copy`. Truthiness ([`Date::is_set`]) is
/// "anything but no date".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Date {
    Fuzzy(FuzzyKind),
    Concrete(ConcreteValue),
}

/// Shared `soon` value.
pub static SOON: Date = Date::Fuzzy(FuzzyKind::Soon);
/// Shared `someday` value.
pub static SOMEDAY: Date = Date::Fuzzy(FuzzyKind::Someday);
/// Shared "no date" value.
pub static NO_DATE: Date = Date::Fuzzy(FuzzyKind::NoDate);

impl Default for Date {
    fn default() -> Self {
        NO_DATE
    }
}

impl From<FuzzyKind> for Date {
    fn from(kind: FuzzyKind) -> Self {
        Date::Fuzzy(kind)
    }
}

impl From<ConcreteValue> for Date {
    fn from(value: ConcreteValue) -> Self {
        Date::Concrete(value)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date::Concrete(ConcreteValue::Date(date))
    }
}

impl From<NaiveDateTime> for Date {
    fn from(datetime: NaiveDateTime) -> Self {
        Date::Concrete(ConcreteValue::DateTime(datetime))
    }
}

impl From<DateTime<FixedOffset>> for Date {
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Date::Concrete(ConcreteValue::Zoned(datetime))
    }
}

impl From<DateTime<Utc>> for Date {
    fn from(datetime: DateTime<Utc>) -> Self {
        Date::Concrete(ConcreteValue::Zoned(datetime.fixed_offset()))
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Construct from a string with the system clock and POSIX English locale.
    fn from_str(s: &str) -> Result<Self> {
        Date::from_str_with(s, &SystemClock, &LocaleTable::default())
    }
}

impl Date {
    /// Construct a date from a machine or locale string.
    ///
    /// Accepts, in order: the absent forms (`""`, `"None"`, `"none"`), ISO 8601
    /// dates and datetimes, the locale's datetime then date format, `now`
    /// (captures the clock), and the fuzzy tokens `soon`, `someday`, `later`
    /// in English or the locale's language, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDate`] when none of the forms match.
    ///
    /// # Examples
    ///
    /// ```
    /// use duedate::{Accuracy, Date, FixedClock, LocaleTable};
    /// use chrono::NaiveDate;
    ///
    /// let clock = FixedClock::at_noon(NaiveDate::from_ymd_opt(2026, 2, 18).unwrap());
    /// let locale = LocaleTable::default();
    ///
    /// let date = Date::from_str_with("2026-03-01", &clock, &locale).unwrap();
    /// assert_eq!(date.accuracy(), Accuracy::Date);
    ///
    /// let later = Date::from_str_with("Later", &clock, &locale).unwrap();
    /// assert_eq!(later, *Date::someday());
    /// ```
    pub fn from_str_with(input: &str, clock: &dyn Clock, locale: &dyn Localizer) -> Result<Date> {
        if matches!(input, "" | "None") {
            return Ok(NO_DATE);
        }

        if let Some(value) = parse_iso(input).or_else(|| parse_locale_format(input, locale)) {
            return Ok(Date::Concrete(value));
        }

        let lower = input.to_lowercase();
        if lower == "now" || lower == lowered(locale, "now") {
            return Ok(Date::from(clock.now()));
        }

        lookup_fuzzy(&lower, locale).map(Date::Fuzzy).ok_or_else(|| {
            log::trace!("no construction rule matched '{input}'");
            DateError::InvalidDate(format!("unknown value for date: '{input}'"))
        })
    }

    /// Like [`Date::from_str_with`], with an absent input meaning no date.
    pub fn from_opt_str(
        input: Option<&str>,
        clock: &dyn Clock,
        locale: &dyn Localizer,
    ) -> Result<Date> {
        match input {
            Some(s) => Date::from_str_with(s, clock, locale),
            None => Ok(NO_DATE),
        }
    }

    /// Construct from a legacy integer code. Code 0 captures the clock.
    pub fn from_fuzzy_code(code: i64, clock: &dyn Clock) -> Result<Date> {
        match FuzzyKind::from_code(code) {
            Some(FuzzyKind::Now) => Ok(Date::from(clock.now())),
            Some(kind) => Ok(Date::Fuzzy(kind)),
            None => Err(DateError::InvalidDate(format!(
                "unknown value for date: '{code}'"
            ))),
        }
    }

    pub fn today(clock: &dyn Clock) -> Date {
        Date::from(clock.today())
    }

    /// Tomorrow's calendar date.
    ///
    /// # Errors
    ///
    /// [`DateError::InvalidArithmetic`] when today is the last representable day.
    pub fn tomorrow(clock: &dyn Clock) -> Result<Date> {
        Date::today(clock).checked_add(TimeDelta::days(1))
    }

    /// The fuzzy "now" as used for due dates: today's calendar date.
    pub fn now(clock: &dyn Clock) -> Date {
        Date::today(clock)
    }

    pub fn soon() -> &'static Date {
        &SOON
    }

    pub fn someday() -> &'static Date {
        &SOMEDAY
    }

    pub fn no_date() -> &'static Date {
        &NO_DATE
    }

    pub fn accuracy(&self) -> Accuracy {
        match self {
            Date::Fuzzy(_) => Accuracy::Fuzzy,
            Date::Concrete(value) => value.accuracy(),
        }
    }

    pub fn is_fuzzy(&self) -> bool {
        matches!(self, Date::Fuzzy(_))
    }

    /// False only for no date.
    pub fn is_set(&self) -> bool {
        !matches!(self, Date::Fuzzy(FuzzyKind::NoDate))
    }

    pub fn as_fuzzy(&self) -> Option<FuzzyKind> {
        match self {
            Date::Fuzzy(kind) => Some(*kind),
            Date::Concrete(_) => None,
        }
    }

    pub fn as_concrete(&self) -> Option<ConcreteValue> {
        match self {
            Date::Fuzzy(_) => None,
            Date::Concrete(value) => Some(*value),
        }
    }

    /// Cast to `target` accuracy.
    ///
    /// Fuzzy values are first resolved to a naive instant a fixed number of
    /// days from now (`soon` 15, `someday` 365, no date 9999). Casting a
    /// concrete value to [`Accuracy::Fuzzy`] is a bug and reported as
    /// [`DateError::InternalAccuracy`].
    pub fn cast_to(&self, target: Accuracy, clock: &dyn Clock) -> Result<Date> {
        if self.accuracy() == target {
            return Ok(*self);
        }
        match self {
            Date::Fuzzy(kind) => ConcreteValue::DateTime(kind.resolve(clock)?)
                .cast_to(target, clock)
                .map(Date::Concrete),
            Date::Concrete(value) => value.cast_to(target, clock).map(Date::Concrete),
        }
    }

    /// The calendar day this date stands for, resolving fuzzy values.
    pub fn date(&self, clock: &dyn Clock) -> Result<NaiveDate> {
        match self.cast_to(Accuracy::Date, clock)? {
            Date::Concrete(value) => Ok(value.date_naive()),
            Date::Fuzzy(_) => Err(internal_accuracy(Accuracy::Fuzzy, Accuracy::Date)),
        }
    }

    /// Days from today until this date; `None` for no date.
    pub fn days_left(&self, clock: &dyn Clock) -> Result<Option<i64>> {
        if !self.is_set() {
            return Ok(None);
        }
        let date = self.date(clock)?;
        Ok(Some(date.signed_duration_since(clock.today()).num_days()))
    }

    // ── Pairwise operations ─────────────────────────────────────────────

    /// Bring `self` and `other` to a shared representation.
    ///
    /// A duration is only valid for arithmetic and is returned untouched next
    /// to `self`. Two dates of equal accuracy are returned as they are;
    /// otherwise both are cast to the first of date, datetime, timezone that
    /// either of them has. Two fuzzy values stay fuzzy.
    ///
    /// `other` must already be a [`Date`], a chrono value, or a duration.
    /// Strings are not converted here; build them with
    /// [`Date::from_str_with`] or [`Date::parse`] first so the clock and
    /// locale used for them are explicit.
    ///
    /// # Errors
    ///
    /// [`DateError::InvalidComparison`] when comparing against a duration.
    pub fn normalize(
        &self,
        other: impl Into<Operand>,
        operation: Operation,
        clock: &dyn Clock,
    ) -> Result<Operands> {
        let other = match other.into() {
            Operand::Duration(delta) => {
                return match operation {
                    Operation::Arithmetic => Ok(Operands::Shift(*self, delta)),
                    Operation::Comparison => Err(DateError::InvalidComparison(format!(
                        "can't compare '{self}' with duration {delta}"
                    ))),
                };
            }
            Operand::Date(date) => date,
        };

        let target = if self.accuracy() == other.accuracy() {
            self.accuracy()
        } else {
            Accuracy::common(self.accuracy(), other.accuracy())
        };
        let a = self.cast_to(target, clock)?;
        let b = other.cast_to(target, clock)?;
        Operands::pair(a, b)
    }

    /// Order `self` against another date after normalization.
    pub fn compare(&self, other: impl Into<Operand>, clock: &dyn Clock) -> Result<Ordering> {
        self.normalize(other, Operation::Comparison, clock)?
            .ordering()
            .ok_or_else(|| DateError::InvalidComparison("can't compare with a duration".into()))
    }

    pub fn equals(&self, other: impl Into<Operand>, clock: &dyn Clock) -> Result<bool> {
        Ok(self.compare(other, clock)? == Ordering::Equal)
    }

    pub fn not_equals(&self, other: impl Into<Operand>, clock: &dyn Clock) -> Result<bool> {
        Ok(!self.equals(other, clock)?)
    }

    pub fn lt(&self, other: impl Into<Operand>, clock: &dyn Clock) -> Result<bool> {
        Ok(self.compare(other, clock)? == Ordering::Less)
    }

    pub fn le(&self, other: impl Into<Operand>, clock: &dyn Clock) -> Result<bool> {
        Ok(self.compare(other, clock)? != Ordering::Greater)
    }

    pub fn gt(&self, other: impl Into<Operand>, clock: &dyn Clock) -> Result<bool> {
        Ok(self.compare(other, clock)? == Ordering::Greater)
    }

    pub fn ge(&self, other: impl Into<Operand>, clock: &dyn Clock) -> Result<bool> {
        Ok(self.compare(other, clock)? != Ordering::Less)
    }

    /// Move a concrete date by `delta`. A date-accuracy value moves by whole days.
    ///
    /// # Errors
    ///
    /// [`DateError::InvalidArithmetic`] for fuzzy values or calendar overflow.
    pub fn checked_add(&self, delta: TimeDelta) -> Result<Date> {
        match self {
            Date::Fuzzy(kind) => Err(DateError::InvalidArithmetic(format!(
                "can't shift fuzzy date '{}' by {delta}",
                kind.as_str()
            ))),
            Date::Concrete(value) => value.shift(delta).map(Date::Concrete).ok_or_else(|| {
                DateError::InvalidArithmetic(format!("'{self}' shifted by {delta} overflows"))
            }),
        }
    }

    pub fn checked_sub(&self, delta: TimeDelta) -> Result<Date> {
        self.checked_add(-delta)
    }

    /// Signed time elapsed from `other` to `self`, after normalization.
    ///
    /// # Errors
    ///
    /// [`DateError::InvalidArithmetic`] when both sides are fuzzy or `other`
    /// is a duration (use [`Date::checked_sub`]).
    pub fn duration_since(&self, other: impl Into<Operand>, clock: &dyn Clock) -> Result<TimeDelta> {
        match self.normalize(other, Operation::Arithmetic, clock)? {
            Operands::Shift(_, delta) => Err(DateError::InvalidArithmetic(format!(
                "subtracting duration {delta} yields a date, not a duration"
            ))),
            Operands::Fuzzy(a, b) => Err(DateError::InvalidArithmetic(format!(
                "no duration between fuzzy dates '{}' and '{}'",
                a.as_str(),
                b.as_str()
            ))),
            Operands::Date(a, b) => Ok(a.signed_duration_since(b)),
            Operands::DateTime(a, b) => Ok(a.signed_duration_since(b)),
            Operands::Zoned(a, b) => Ok(a.signed_duration_since(b)),
        }
    }
}

// ── Operands ────────────────────────────────────────────────────────────────

/// What a pairwise operation is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Comparison,
    Arithmetic,
}

/// The right-hand side of a pairwise operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Duration(TimeDelta),
    Date(Date),
}

impl From<TimeDelta> for Operand {
    fn from(delta: TimeDelta) -> Self {
        Operand::Duration(delta)
    }
}

impl From<Date> for Operand {
    fn from(date: Date) -> Self {
        Operand::Date(date)
    }
}

impl From<&Date> for Operand {
    fn from(date: &Date) -> Self {
        Operand::Date(*date)
    }
}

impl From<FuzzyKind> for Operand {
    fn from(kind: FuzzyKind) -> Self {
        Operand::Date(Date::Fuzzy(kind))
    }
}

impl From<NaiveDate> for Operand {
    fn from(date: NaiveDate) -> Self {
        Operand::Date(Date::from(date))
    }
}

impl From<NaiveDateTime> for Operand {
    fn from(datetime: NaiveDateTime) -> Self {
        Operand::Date(Date::from(datetime))
    }
}

impl From<DateTime<FixedOffset>> for Operand {
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Operand::Date(Date::from(datetime))
    }
}

/// Two operands in a shared representation, as produced by [`Date::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operands {
    /// A date and a duration to move it by.
    Shift(Date, TimeDelta),
    Fuzzy(FuzzyKind, FuzzyKind),
    Date(NaiveDate, NaiveDate),
    DateTime(NaiveDateTime, NaiveDateTime),
    Zoned(DateTime<FixedOffset>, DateTime<FixedOffset>),
}

impl Operands {
    fn pair(a: Date, b: Date) -> Result<Operands> {
        use ConcreteValue as C;
        match (a, b) {
            (Date::Fuzzy(x), Date::Fuzzy(y)) => Ok(Operands::Fuzzy(x, y)),
            (Date::Concrete(C::Date(x)), Date::Concrete(C::Date(y))) => Ok(Operands::Date(x, y)),
            (Date::Concrete(C::DateTime(x)), Date::Concrete(C::DateTime(y))) => {
                Ok(Operands::DateTime(x, y))
            }
            (Date::Concrete(C::Zoned(x)), Date::Concrete(C::Zoned(y))) => {
                Ok(Operands::Zoned(x, y))
            }
            (a, b) => Err(internal_accuracy(a.accuracy(), b.accuracy())),
        }
    }

    /// Ordering of the pair; `None` for a shift.
    pub fn ordering(&self) -> Option<Ordering> {
        match self {
            Operands::Shift(..) => None,
            Operands::Fuzzy(a, b) => Some(a.cmp(b)),
            Operands::Date(a, b) => Some(a.cmp(b)),
            Operands::DateTime(a, b) => Some(a.cmp(b)),
            Operands::Zoned(a, b) => Some(a.cmp(b)),
        }
    }
}

// ── Construction helpers ────────────────────────────────────────────────────

/// ISO 8601 date, naive datetime, or datetime with offset.
///
/// Letters are matched case-insensitively since parsing lowercases input.
fn parse_iso(input: &str) -> Option<ConcreteValue> {
    let s = input.to_ascii_uppercase();

    if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
        return Some(ConcreteValue::Date(date));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Some(ConcreteValue::Zoned(dt));
    }
    ISO_ZONED_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&s, fmt).ok())
        .map(ConcreteValue::Zoned)
        .or_else(|| {
            ISO_NAIVE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(&s, fmt).ok())
                .map(ConcreteValue::DateTime)
        })
}

/// The locale's datetime format, then its date format.
fn parse_locale_format(input: &str, locale: &dyn Localizer) -> Option<ConcreteValue> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, locale.datetime_format()) {
        return Some(ConcreteValue::DateTime(dt));
    }
    NaiveDate::parse_from_str(input, locale.date_format())
        .ok()
        .map(ConcreteValue::Date)
}

/// Fuzzy tokens other than `now`, matched against lowercased input.
fn lookup_fuzzy(lower: &str, locale: &dyn Localizer) -> Option<FuzzyKind> {
    match lower {
        "" | "none" => return Some(FuzzyKind::NoDate),
        "soon" => return Some(FuzzyKind::Soon),
        "someday" | "later" => return Some(FuzzyKind::Someday),
        _ => {}
    }
    if lower == lowered(locale, "soon") {
        Some(FuzzyKind::Soon)
    } else if lower == lowered(locale, "someday") || lower == lowered(locale, "later") {
        Some(FuzzyKind::Someday)
    } else {
        None
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
