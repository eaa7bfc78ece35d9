//! Time and date helpers.

use chrono::{DateTime, NaiveDate, Utc};

/// UTC timestamp used for `data_criacao` and `ultimo_acesso`.
pub type Timestamp = DateTime<Utc>;

/// Calendar date used for `data_nascimento`.
pub type Date = NaiveDate;

/// Text format of a [`Date`] at rest (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
