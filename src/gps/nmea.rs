// src/gps/nmea.rs
//! NMEA sentence decoding and fix extraction
//!
//! Grammar work (field splitting, checksum, DMM to decimal degrees) is left to
//! the `nmea` crate. This module only maps its output onto [`SentenceFields`]
//! and decides whether a decoded sentence carries a usable fix.

use super::data::{ParsedFix, SentenceKind, SentenceType};
use chrono::NaiveTime;
use ::nmea::sentences::rmc::RmcStatusOfFix;
use ::nmea::ParseResult;
use std::borrow::Cow;
use std::fmt;

/// Validity flag reported by the sentence itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixStatus {
    /// Status field present and set to `A`
    Active,
    /// Status field present with any other value
    Void,
    /// Sentence has no status field (GGA)
    NotReported,
}

/// The subset of a decoded sentence the analyzer cares about
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceFields {
    pub kind: SentenceKind,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: FixStatus,
    pub fix_time: Option<NaiveTime>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    Checksum { calculated: u8, found: u8 },
    Unsupported(String),
    Malformed(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Checksum { calculated, found } => write!(
                f,
                "checksum mismatch: calculated {:02X}, found {:02X}",
                calculated, found
            ),
            DecodeError::Unsupported(what) => write!(f, "unsupported sentence: {}", what),
            DecodeError::Malformed(msg) => write!(f, "malformed sentence: {}", msg),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Decode one sentence into its position-related fields.
///
/// A checksum is verified only when the sentence carries one.
pub fn decode(line: &str) -> Result<SentenceFields, DecodeError> {
    let sentence = with_checksum(line.trim());
    let parsed = ::nmea::parse_str(&sentence).map_err(|e| match e {
        ::nmea::Error::ChecksumMismatch { calculated, found } => {
            DecodeError::Checksum { calculated, found }
        }
        other => DecodeError::Malformed(other.to_string()),
    })?;

    match parsed {
        ParseResult::GGA(gga) => Ok(SentenceFields {
            kind: SentenceKind::Gga,
            latitude: gga.latitude,
            longitude: gga.longitude,
            status: FixStatus::NotReported,
            fix_time: gga.fix_time,
        }),
        ParseResult::GLL(gll) => Ok(SentenceFields {
            kind: SentenceKind::Gll,
            latitude: gll.latitude,
            longitude: gll.longitude,
            status: if gll.valid {
                FixStatus::Active
            } else {
                FixStatus::Void
            },
            fix_time: Some(gll.fix_time),
        }),
        ParseResult::RMC(rmc) => Ok(SentenceFields {
            kind: SentenceKind::Rmc,
            latitude: rmc.lat,
            longitude: rmc.lon,
            status: match rmc.status_of_fix {
                RmcStatusOfFix::Autonomous => FixStatus::Active,
                _ => FixStatus::Void,
            },
            fix_time: rmc.fix_time,
        }),
        other => Err(DecodeError::Unsupported(format!("{:?}", other))),
    }
}

/// Append the `*hh` suffix to sentences logged without one
fn with_checksum(sentence: &str) -> Cow<'_, str> {
    if sentence.contains('*') {
        return Cow::Borrowed(sentence);
    }
    let body = sentence.strip_prefix('$').unwrap_or(sentence);
    let checksum = body.bytes().fold(0u8, |acc, b| acc ^ b);
    Cow::Owned(format!("{}*{:02X}", sentence, checksum))
}

/// Extract a fix from a line already known to be of `sentence_type`.
///
/// Decode failures, checksum mismatches included, are expected in raw logs
/// and simply yield `None`.
pub fn parse_fix(line: &str, sentence_type: SentenceType) -> Option<ParsedFix> {
    let fields = match decode(line) {
        Ok(fields) => fields,
        Err(e) => {
            log::trace!("skipping {} sentence: {}", sentence_type, e);
            return None;
        }
    };

    if fields.kind != sentence_type.kind() {
        return None;
    }

    // GGA quality indicator is deliberately not consulted
    if sentence_type.has_status_gate() && fields.status != FixStatus::Active {
        return None;
    }

    // Empty coordinate fields mean no position, not (0, 0)
    let (latitude, longitude) = (fields.latitude?, fields.longitude?);
    Some(ParsedFix::new(latitude, longitude).with_time(fields.fix_time))
}
