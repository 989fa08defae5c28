// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Operating modes permitted in the `mo` column of a Cabrillo QSO line.

use crate::error::QsoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cabrillo tokens of all valid modes, in the order of [Mode::ALL]
pub const VALID_MODES: [&str; 5] = ["CW", "PH", "FM", "RY", "DG"];

/// Operating mode of a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Mode {
    /// Morse code
    Cw,
    /// Phone (SSB, AM)
    Ph,
    /// Frequency modulated phone
    Fm,
    /// Radio teletype
    Ry,
    /// Other digital modes
    Dg,
}

impl Mode {
    /// All valid modes
    pub const ALL: [Mode; 5] = [Mode::Cw, Mode::Ph, Mode::Fm, Mode::Ry, Mode::Dg];

    /// Cabrillo token of the mode.
    ///
    /// # Arguments
    ///
    /// (None)
    ///
    /// # Returns
    ///
    /// Two letter token like `PH`
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Cw => VALID_MODES[0],
            Mode::Ph => VALID_MODES[1],
            Mode::Fm => VALID_MODES[2],
            Mode::Ry => VALID_MODES[3],
            Mode::Dg => VALID_MODES[4],
        }
    }

    /// Check if the given token names a valid mode.
    pub fn is_valid(token: &str) -> bool {
        VALID_MODES.contains(&token)
    }
}

impl FromStr for Mode {
    type Err = QsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .iter()
            .find(|m| m.as_str() == s)
            .copied()
            .ok_or_else(|| {
                tracing::debug!(value = s, "rejected mode");
                QsoError::invalid("mode", s)
            })
    }
}

impl TryFrom<String> for Mode {
    type Error = QsoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        String::from(mode.as_str())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
