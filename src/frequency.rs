// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Interpretation of the frequency column of a Cabrillo QSO line.
//!
//! The column either holds the frequency in kHz (HF contacts) or a band designator (50 MHz and up).
//! Records keep the raw token, this module only classifies it on request.

use lazy_static::lazy_static;
use regex::Regex;

/// Band designators used instead of a frequency
pub const BAND_DESIGNATORS: [&str; 18] = [
    "50", "70", "144", "222", "432", "902", "1.2G", "2.3G", "3.4G", "5.7G", "10G", "24G", "47G",
    "75G", "122G", "134G", "241G", "LIGHT",
];

/// Classified frequency token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    /// Frequency in kHz
    Khz(u32),
    /// Band designator, one of [BAND_DESIGNATORS]
    Band(&'static str),
}

impl Frequency {
    /// Classify a frequency token.
    ///
    /// # Arguments
    ///
    /// - `token`: Frequency column as written in the log
    ///
    /// # Returns
    ///
    /// The classified frequency or `None` if the token is neither a band designator nor a plain kHz value
    pub fn classify(token: &str) -> Option<Frequency> {
        lazy_static! {
            static ref RE_KHZ: Regex = Regex::new(r"^[0-9]{1,9}$").unwrap();
        }

        // Band designators win, "50" or "144" are bands and not kHz
        if let Some(band) = BAND_DESIGNATORS.iter().find(|b| **b == token) {
            return Some(Frequency::Band(*band));
        }

        if RE_KHZ.is_match(token) {
            return token.parse().ok().map(Frequency::Khz);
        }

        None
    }

    /// Check if the frequency is given as band designator.
    pub fn is_band(&self) -> bool {
        matches!(self, Frequency::Band(_))
    }
}
