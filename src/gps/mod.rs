// src/gps/mod.rs
//! NMEA line validation, decoding and fix data

pub mod data;
pub mod nmea;
pub mod validator;

pub use data::{ParsedFix, PositionSeries, SentenceKind, SentenceType};
pub use self::nmea::{decode, parse_fix, DecodeError, FixStatus, SentenceFields};
pub use validator::is_valid_sentence;
