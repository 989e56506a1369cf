//! Localized strings and date format patterns.
//!
//! The engine never consults a global translation catalog. Parsing and
//! display take a [`Localizer`], which maps fixed English message ids to the
//! active display language and supplies the locale's strftime patterns.
//! [`LocaleTable`] is the stock implementation; it falls back to the English
//! id for any message it does not know.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{DateError, Result};

/// POSIX `D_FMT`.
pub const POSIX_DATE_FORMAT: &str = "%m/%d/%y";
/// POSIX `D_T_FMT`.
pub const POSIX_DATETIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Translation and locale-format capability.
pub trait Localizer {
    /// Translate a message id, returning the id itself when untranslated.
    fn gettext(&self, msgid: &str) -> String;

    /// Translate a message with a singular and plural form, choosing by `n`.
    fn ngettext(&self, singular: &str, plural: &str, n: u64) -> String;

    /// strftime pattern for a calendar date.
    fn date_format(&self) -> &str;

    /// strftime pattern for a date with time of day.
    fn datetime_format(&self) -> &str;
}

/// A translation table loaded from configuration.
///
/// ```
/// use duedate::locale::{LocaleTable, Localizer};
///
/// let table = LocaleTable::from_json_str(
///     r#"{"date_format": "%d.%m.%Y", "messages": {"tomorrow": "morgen"}}"#,
/// )
/// .unwrap();
/// assert_eq!(table.gettext("tomorrow"), "morgen");
/// assert_eq!(table.gettext("today"), "today");
/// assert_eq!(table.date_format(), "%d.%m.%Y");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleTable {
    /// strftime pattern for a calendar date.
    pub date_format: String,
    /// strftime pattern for a date with time of day.
    pub datetime_format: String,
    /// Message id → translation.
    pub messages: HashMap<String, String>,
    /// Singular message id → (singular translation, plural translation).
    pub plurals: HashMap<String, (String, String)>,
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self {
            date_format: POSIX_DATE_FORMAT.to_string(),
            datetime_format: POSIX_DATETIME_FORMAT.to_string(),
            messages: HashMap::new(),
            plurals: HashMap::new(),
        }
    }
}

impl LocaleTable {
    /// Load a table from its JSON form. Missing fields take POSIX English defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| DateError::InvalidLocale(e.to_string()))
    }

    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn with_datetime_format(mut self, format: impl Into<String>) -> Self {
        self.datetime_format = format.into();
        self
    }

    pub fn with_message(mut self, msgid: impl Into<String>, translation: impl Into<String>) -> Self {
        self.messages.insert(msgid.into(), translation.into());
        self
    }

    pub fn with_plural(
        mut self,
        singular_msgid: impl Into<String>,
        singular: impl Into<String>,
        plural: impl Into<String>,
    ) -> Self {
        self.plurals
            .insert(singular_msgid.into(), (singular.into(), plural.into()));
        self
    }
}

impl Localizer for LocaleTable {
    fn gettext(&self, msgid: &str) -> String {
        self.messages
            .get(msgid)
            .cloned()
            .unwrap_or_else(|| msgid.to_string())
    }

    fn ngettext(&self, singular: &str, plural: &str, n: u64) -> String {
        match self.plurals.get(singular) {
            Some((one, many)) => {
                if n == 1 {
                    one.clone()
                } else {
                    many.clone()
                }
            }
            None if n == 1 => singular.to_string(),
            None => plural.to_string(),
        }
    }

    fn date_format(&self) -> &str {
        &self.date_format
    }

    fn datetime_format(&self) -> &str {
        &self.datetime_format
    }
}

/// Lowercased translation, as used when matching user input.
pub(crate) fn lowered(locale: &dyn Localizer, msgid: &str) -> String {
    locale.gettext(msgid).to_lowercase()
}
