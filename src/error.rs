// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised while building or parsing QSO records.

use thiserror::Error;

/// Possible reasons for a QSO record to be rejected
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum QsoError {
    /// A field holds a value that is not permitted
    #[error("Invalid value `{value}` for field `{field}`")]
    InvalidRecord {
        /// Name of the offending field
        field: &'static str,
        /// Offending value as given
        value: String,
    },

    /// The line ended before the named field
    #[error("Missing field `{0}`")]
    MissingField(&'static str),

    /// The line holds more tokens than the layout allows
    #[error("{0} unexpected trailing token(s)")]
    TrailingTokens(usize),
}

impl QsoError {
    /// Shorthand to create an [InvalidRecord](QsoError::InvalidRecord) error.
    pub(crate) fn invalid(field: &'static str, value: &str) -> Self {
        QsoError::InvalidRecord {
            field,
            value: String::from(value),
        }
    }

    /// Name of the field the error refers to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            QsoError::InvalidRecord { field, .. } | QsoError::MissingField(field) => Some(*field),
            QsoError::TrailingTokens(_) => None,
        }
    }
}
