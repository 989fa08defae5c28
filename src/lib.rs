// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! This crate provides the QSO record of Cabrillo contest logs.
//! The module [qso] implements the record itself, its canonical line representation and a parser for such lines.
//! The operating mode is validated against the Cabrillo mode set defined in [mode].
//! The module [frequency] interprets the frequency column, which may hold a frequency in kHz or a band designator.

pub mod error;
pub mod frequency;
pub mod mode;
pub mod qso;

pub use error::QsoError;
pub use mode::Mode;
pub use qso::{Qso, QsoLayout};
