//! Per-cycle diagnostic line.
//!
//! Every poll emits one human-readable line:
//!
//! ```text
//! [14:30:05] Gas level: 20112 | Drug level: 13904
//! ```
//!
//! A clock that cannot be read prints `--:--:--`; a failed conversion prints
//! `--` in place of its value.

use core::fmt::{self, Write};

use heapless::String;

use crate::clock::{UNKNOWN_TIMESTAMP, WallTime};

/// Capacity of one formatted line.
pub const LINE_LEN: usize = 96;

/// Shown in place of a value when the conversion failed.
pub const MISSING_VALUE: &str = "--";

/// Separator between readings.
const SEPARATOR: &str = " | ";

/// One labelled value on the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reading<'a> {
    pub label: &'a str,
    pub value: Option<u16>,
}

impl<'a> Reading<'a> {
    pub const fn new(
        label: &'a str,
        value: Option<u16>,
    ) -> Self {
        Self { label, value }
    }
}

impl fmt::Display for Reading<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "{}: {}", self.label, value),
            None => write!(f, "{}: {}", self.label, MISSING_VALUE),
        }
    }
}

/// Format `[HH:MM:SS] a: 1 | b: 2`.
///
/// A reading is appended together with its separator. Once one no longer
/// fits in [`LINE_LEN`], it and every reading after it are left off.
pub fn format_line(
    time: Option<WallTime>,
    readings: &[Reading<'_>],
) -> String<LINE_LEN> {
    let mut line = String::new();
    // Overflow only truncates the line; what fit is still worth logging
    let _ = write_line(&mut line, time, readings);
    line
}

fn write_line(
    out: &mut String<LINE_LEN>,
    time: Option<WallTime>,
    readings: &[Reading<'_>],
) -> fmt::Result {
    match time {
        Some(time) => write!(out, "[{time}]")?,
        None => write!(out, "[{UNKNOWN_TIMESTAMP}]")?,
    }
    for (i, reading) in readings.iter().enumerate() {
        let lead = if i == 0 { " " } else { SEPARATOR };
        let mut piece: String<LINE_LEN> = String::new();
        write!(piece, "{lead}{reading}")?;
        out.push_str(&piece).map_err(|_| fmt::Error)?;
    }
    Ok(())
}
