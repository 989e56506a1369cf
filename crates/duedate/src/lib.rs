//! # duedate
//!
//! Fuzzy-or-concrete due dates for task managers.
//!
//! A due date is either a calendar value at some accuracy (a day, a local
//! datetime, an offset-aware datetime) or a symbolic placeholder: `now`,
//! `soon`, `someday`, or no date at all. Values of different accuracies can
//! be compared and subtracted; both sides are first cast to a common accuracy,
//! with fuzzy placeholders resolving to a day relative to the current clock.
//!
//! ## Modules
//!
//! - [`accuracy`] — The accuracy ladder and common-accuracy selection
//! - [`date`] — The [`Date`] value, casting, normalization, comparison, arithmetic
//! - [`parse`] — Natural-language and numeric input, recurrence phrases
//! - [`display`] — Machine, localized, and human-readable string forms
//! - [`locale`] — Translation and date-format capability
//! - [`clock`] — Injected source of "now" and the local UTC offset
//! - [`error`] — Error types

pub mod accuracy;
pub mod clock;
pub mod date;
pub mod display;
pub mod error;
pub mod locale;
pub mod parse;

pub use accuracy::Accuracy;
pub use clock::{Clock, FixedClock, SystemClock};
pub use date::{
    ConcreteValue, Date, FuzzyKind, Operand, Operands, Operation, NO_DATE, SOMEDAY, SOON,
};
pub use error::{DateError, Result};
pub use locale::{LocaleTable, Localizer};
