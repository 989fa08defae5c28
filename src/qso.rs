// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Single contact of a Cabrillo log together with its canonical line representation.
//!
//! A [Qso] renders as the body of a `QSO:` line, that is without the keyword itself:
//!
//! ```text
//! freq mode date time de_call de_rst [de_exch...] dx_call dx_rst [dx_exch...] [transmitter_id]
//! ```
//!
//! The inverse direction is provided by [QsoLayout::parse], which needs to know how many exchange tokens a contest uses.

use crate::error::QsoError;
use crate::frequency::Frequency;
use crate::mode::Mode;
use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::SplitWhitespace;

/// Format of the date column
const FORMAT_DATE: &str = "%Y-%m-%d";

/// Format of the time column
const FORMAT_TIME: &str = "%H%M";

/// Optional keyword in front of a QSO line
const KEYWORD_QSO: &str = "QSO:";

/// Transmitter identifier for multi transmitter stations
pub type TransmitterId = u32;

/// Representation of a single contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qso {
    /// Frequency in kHz or band designator
    pub freq: String,
    /// Operating mode
    pub mode: Mode,
    /// Point in time of the contact, minute precision
    pub timestamp: DateTime<Utc>,
    /// Callsign of the logging station
    pub de_call: String,
    /// Report sent
    pub de_rst: String,
    /// Exchange sent, in order
    #[serde(default)]
    pub de_exch: Vec<String>,
    /// Callsign of the contacted station
    pub dx_call: String,
    /// Report received
    pub dx_rst: String,
    /// Exchange received, in order
    #[serde(default)]
    pub dx_exch: Vec<String>,
    /// Transmitter used for the contact
    #[serde(default)]
    pub transmitter_id: Option<TransmitterId>,
}

impl Qso {
    /// Instantiate a new contact without exchange and transmitter.
    ///
    /// Only the mode is validated, all other tokens are taken as they are.
    /// The timestamp is truncated to the minute.
    ///
    /// # Arguments
    ///
    /// - `freq`: Frequency in kHz or band designator
    /// - `mode`: Cabrillo mode token like `PH`
    /// - `timestamp`: Point in time of the contact
    /// - `de_call`: Callsign of the logging station
    /// - `de_rst`: Report sent
    /// - `dx_call`: Callsign of the contacted station
    /// - `dx_rst`: Report received
    ///
    /// # Returns
    ///
    /// The contact or an error if the mode is not valid
    pub fn new(
        freq: &str,
        mode: &str,
        timestamp: DateTime<Utc>,
        de_call: &str,
        de_rst: &str,
        dx_call: &str,
        dx_rst: &str,
    ) -> Result<Qso, QsoError> {
        Ok(Qso {
            freq: String::from(freq),
            mode: mode.parse()?,
            timestamp: truncate_to_minute(timestamp),
            de_call: String::from(de_call),
            de_rst: String::from(de_rst),
            de_exch: Vec::new(),
            dx_call: String::from(dx_call),
            dx_rst: String::from(dx_rst),
            dx_exch: Vec::new(),
            transmitter_id: None,
        })
    }

    /// Set the exchange sent.
    pub fn with_de_exch<I, S>(mut self, exch: I) -> Qso
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.de_exch = exch.into_iter().map(Into::into).collect();
        self
    }

    /// Set the exchange received.
    pub fn with_dx_exch<I, S>(mut self, exch: I) -> Qso
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dx_exch = exch.into_iter().map(Into::into).collect();
        self
    }

    /// Set or clear the transmitter identifier.
    pub fn with_transmitter_id(mut self, transmitter_id: Option<TransmitterId>) -> Qso {
        self.transmitter_id = transmitter_id;
        self
    }

    /// Classify the frequency column.
    ///
    /// # Arguments
    ///
    /// (None)
    ///
    /// # Returns
    ///
    /// Frequency in kHz, band designator or `None` if the token is neither
    pub fn frequency(&self) -> Option<Frequency> {
        Frequency::classify(&self.freq)
    }

    /// Parse the body of a QSO line.
    ///
    /// Shorthand for [QsoLayout::parse].
    pub fn parse_line(line: &str, layout: &QsoLayout) -> Result<Qso, QsoError> {
        layout.parse(line)
    }
}

impl fmt::Display for Qso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.freq,
            self.mode,
            self.timestamp.format(FORMAT_DATE),
            self.timestamp.format(FORMAT_TIME),
            self.de_call,
            self.de_rst
        )?;
        for token in self.de_exch.iter() {
            write!(f, " {}", token)?;
        }

        write!(f, " {} {}", self.dx_call, self.dx_rst)?;
        for token in self.dx_exch.iter() {
            write!(f, " {}", token)?;
        }

        if let Some(t) = self.transmitter_id {
            write!(f, " {}", t)?;
        }

        Ok(())
    }
}

/// Column layout of the QSO lines of a contest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QsoLayout {
    /// Number of exchange tokens sent
    pub de_exch: usize,
    /// Number of exchange tokens received
    pub dx_exch: usize,
    /// True if the line ends with a transmitter identifier
    pub transmitter_id: bool,
}

impl QsoLayout {
    /// Instantiate a new layout.
    ///
    /// # Arguments
    ///
    /// - `de_exch`: Number of exchange tokens sent
    /// - `dx_exch`: Number of exchange tokens received
    /// - `transmitter_id`: True if a transmitter column is present
    ///
    /// # Returns
    ///
    /// Layout struct
    pub fn new(de_exch: usize, dx_exch: usize, transmitter_id: bool) -> QsoLayout {
        QsoLayout {
            de_exch,
            dx_exch,
            transmitter_id,
        }
    }

    /// Number of tokens of a line following this layout, excluding the keyword.
    pub fn token_count(&self) -> usize {
        8 + self.de_exch + self.dx_exch + usize::from(self.transmitter_id)
    }

    /// Parse the body of a QSO line according to this layout.
    ///
    /// Tokens are separated by any amount of whitespace.
    /// A leading `QSO:` keyword is skipped.
    ///
    /// Only records whose tokens are non-empty and free of whitespace come back unchanged from their own line.
    /// Such tokens are accepted on construction but shift all following columns when the line is parsed again.
    ///
    /// # Arguments
    ///
    /// - `line`: Line to parse
    ///
    /// # Returns
    ///
    /// The parsed contact or an error
    pub fn parse(&self, line: &str) -> Result<Qso, QsoError> {
        let res = self.parse_tokens(line);
        if let Err(err) = &res {
            tracing::debug!(line, error = %err, "failed to parse QSO line");
        }
        res
    }

    fn parse_tokens(&self, line: &str) -> Result<Qso, QsoError> {
        let mut tokens = line.split_whitespace().peekable();
        if tokens.peek() == Some(&KEYWORD_QSO) {
            tokens.next();
        }
        let mut tokens = Tokens(tokens);

        let freq = tokens.next("freq")?;
        let mode = tokens.next("mode")?;
        let date = tokens.next("date")?;
        let time = tokens.next("time")?;
        let timestamp = parse_timestamp(date, time)?;

        let de_call = tokens.next("de_call")?;
        let de_rst = tokens.next("de_rst")?;
        let de_exch = tokens.take(self.de_exch, "de_exch")?;
        let dx_call = tokens.next("dx_call")?;
        let dx_rst = tokens.next("dx_rst")?;
        let dx_exch = tokens.take(self.dx_exch, "dx_exch")?;

        let transmitter_id = if self.transmitter_id {
            let t = tokens.next("transmitter_id")?;
            Some(
                t.parse::<TransmitterId>()
                    .map_err(|_| QsoError::invalid("transmitter_id", t))?,
            )
        } else {
            None
        };

        let remaining = tokens.0.count();
        if remaining > 0 {
            return Err(QsoError::TrailingTokens(remaining));
        }

        Ok(
            Qso::new(freq, mode, timestamp, de_call, de_rst, dx_call, dx_rst)?
                .with_de_exch(de_exch)
                .with_dx_exch(dx_exch)
                .with_transmitter_id(transmitter_id),
        )
    }
}

/// Token stream of a line that reports the name of a missing field
struct Tokens<'a>(std::iter::Peekable<SplitWhitespace<'a>>);

impl<'a> Tokens<'a> {
    fn next(&mut self, field: &'static str) -> Result<&'a str, QsoError> {
        self.0.next().ok_or(QsoError::MissingField(field))
    }

    fn take(&mut self, count: usize, field: &'static str) -> Result<Vec<&'a str>, QsoError> {
        (0..count).map(|_| self.next(field)).collect()
    }
}

/// Drop seconds and fractions of a second.
fn truncate_to_minute(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(timestamp)
}

/// Combine the date and time columns into a timestamp.
///
/// # Arguments
///
/// - `date`: Date column like `2018-05-30`
/// - `time`: Time column like `2210`
///
/// # Returns
///
/// Timestamp or an error naming the `timestamp` field
fn parse_timestamp(date: &str, time: &str) -> Result<DateTime<Utc>, QsoError> {
    let value = format!("{} {}", date, time);
    // Fixed widths, chrono would also accept `930` for 09:30 or `2018-5-30`
    if date.len() != 10 || time.len() != 4 {
        return Err(QsoError::invalid("timestamp", &value));
    }

    NaiveDateTime::parse_from_str(&value, &format!("{} {}", FORMAT_DATE, FORMAT_TIME))
        .map(|d| d.and_utc())
        .map_err(|_| QsoError::invalid("timestamp", &value))
}
