// src/gps/data.rs
//! Position fix data structures

use chrono::NaiveTime;
use std::fmt;

/// The sentence types the loader extracts positions from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceType {
    Gngll,
    Gpgga,
    Gprmc,
    Gnrmc,
}

/// Sentence formatter as reported by the decoder, independent of talker id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceKind {
    Gga,
    Gll,
    Rmc,
}

impl SentenceType {
    pub const ALL: [SentenceType; 4] = [
        SentenceType::Gngll,
        SentenceType::Gpgga,
        SentenceType::Gprmc,
        SentenceType::Gnrmc,
    ];

    /// Exact line prefix, `$` included
    pub fn prefix(&self) -> &'static str {
        match self {
            SentenceType::Gngll => "$GNGLL",
            SentenceType::Gpgga => "$GPGGA",
            SentenceType::Gprmc => "$GPRMC",
            SentenceType::Gnrmc => "$GNRMC",
        }
    }

    /// Match the 6-character prefix of a line (case-sensitive)
    pub fn from_line(line: &str) -> Option<Self> {
        let head = line.get(..6)?;
        Self::ALL.into_iter().find(|t| t.prefix() == head)
    }

    pub fn kind(&self) -> SentenceKind {
        match self {
            SentenceType::Gngll => SentenceKind::Gll,
            SentenceType::Gpgga => SentenceKind::Gga,
            SentenceType::Gprmc | SentenceType::Gnrmc => SentenceKind::Rmc,
        }
    }

    /// Whether the sentence carries its own status field that must read active
    pub fn has_status_gate(&self) -> bool {
        !matches!(self, SentenceType::Gpgga)
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix()[1..])
    }
}

/// A single position sample extracted from a sentence with a usable fix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedFix {
    pub latitude: f64,
    pub longitude: f64,
    pub fix_time: Option<NaiveTime>,
}

impl ParsedFix {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            fix_time: None,
        }
    }

    pub fn with_time(mut self, fix_time: Option<NaiveTime>) -> Self {
        self.fix_time = fix_time;
        self
    }
}

/// Every fix extracted from one log, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionSeries {
    fixes: Vec<ParsedFix>,
}

impl PositionSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fix: ParsedFix) {
        self.fixes.push(fix);
    }

    pub fn len(&self) -> usize {
        self.fixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty()
    }

    pub fn fixes(&self) -> &[ParsedFix] {
        &self.fixes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParsedFix> {
        self.fixes.iter()
    }

    pub fn latitudes(&self) -> impl Iterator<Item = f64> + '_ {
        self.fixes.iter().map(|fix| fix.latitude)
    }

    pub fn longitudes(&self) -> impl Iterator<Item = f64> + '_ {
        self.fixes.iter().map(|fix| fix.longitude)
    }

    /// Earliest and latest fix time seen, if any sentence carried one
    pub fn time_span(&self) -> Option<(NaiveTime, NaiveTime)> {
        let mut times = self.fixes.iter().filter_map(|fix| fix.fix_time);
        let first = times.next()?;
        Some(times.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
    }
}

impl FromIterator<ParsedFix> for PositionSeries {
    fn from_iter<I: IntoIterator<Item = ParsedFix>>(iter: I) -> Self {
        Self {
            fixes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PositionSeries {
    type Item = &'a ParsedFix;
    type IntoIter = std::slice::Iter<'a, ParsedFix>;

    fn into_iter(self) -> Self::IntoIter {
        self.fixes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_dispatch() {
        assert_eq!(SentenceType::from_line("$GNGLL,..."), Some(SentenceType::Gngll));
        assert_eq!(SentenceType::from_line("$GPGGA,..."), Some(SentenceType::Gpgga));
        assert_eq!(SentenceType::from_line("$GPRMC,..."), Some(SentenceType::Gprmc));
        assert_eq!(SentenceType::from_line("$GNRMC,..."), Some(SentenceType::Gnrmc));
        assert_eq!(SentenceType::from_line("$GNGGA,..."), None);
        assert_eq!(SentenceType::from_line("$gpgga,..."), None);
        assert_eq!(SentenceType::from_line("$GP"), None);
    }

    #[test]
    fn test_status_gate() {
        assert!(!SentenceType::Gpgga.has_status_gate());
        assert!(SentenceType::Gngll.has_status_gate());
        assert!(SentenceType::Gnrmc.has_status_gate());
        assert_eq!(SentenceType::Gnrmc.kind(), SentenceKind::Rmc);
        assert_eq!(SentenceType::Gpgga.to_string(), "GPGGA");
    }

    #[test]
    fn test_time_span() {
        let t1 = NaiveTime::from_hms_opt(12, 0, 5).unwrap();
        let t2 = NaiveTime::from_hms_opt(12, 0, 1).unwrap();
        let series: PositionSeries = vec![
            ParsedFix::new(1.0, 2.0).with_time(Some(t1)),
            ParsedFix::new(1.0, 2.0),
            ParsedFix::new(1.0, 2.0).with_time(Some(t2)),
        ]
        .into_iter()
        .collect();

        assert_eq!(series.len(), 3);
        assert_eq!(series.time_span(), Some((t2, t1)));
        assert_eq!(PositionSeries::new().time_span(), None);
    }
}
