// src/analysis.rs
//! Static positioning accuracy statistics

use crate::gps::PositionSeries;
use geo::{GeodesicDistance, Point};

/// Percentile levels reported when nothing else is configured
pub const DEFAULT_PERCENTILES: [f64; 2] = [68.0, 95.0];

/// Mean position of a series.
///
/// Latitude and longitude are averaged independently, which is only a good
/// approximation for the small extents a static survey covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    pub latitude: f64,
    pub longitude: f64,
}

impl Centroid {
    pub fn of(series: &PositionSeries) -> Option<Self> {
        if series.is_empty() {
            return None;
        }
        let n = series.len() as f64;
        Some(Self {
            latitude: series.latitudes().sum::<f64>() / n,
            longitude: series.longitudes().sum::<f64>() / n,
        })
    }

    fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileError {
    /// Percentile level in percent, e.g. 68.0
    pub level: f64,
    pub meters: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub centroid: Centroid,
    /// Distance of every fix to the centroid, in series order
    pub errors: Vec<f64>,
    pub rms: f64,
    pub percentiles: Vec<PercentileError>,
}

impl Analysis {
    /// Value for one percentile level, if it was requested
    pub fn percentile(&self, level: f64) -> Option<f64> {
        self.percentiles
            .iter()
            .find(|p| p.level == level)
            .map(|p| p.meters)
    }

    pub fn max_error(&self) -> f64 {
        self.errors.iter().copied().fold(0.0, f64::max)
    }

    pub fn mean_error(&self) -> f64 {
        self.errors.iter().sum::<f64>() / self.errors.len() as f64
    }
}

/// Run the full analysis. `None` when the series holds no fix.
pub fn analyze(series: &PositionSeries, levels: &[f64]) -> Option<Analysis> {
    let centroid = Centroid::of(series)?;
    let errors = error_series(series, &centroid);
    let rms = rms(&errors)?;
    let percentiles = percentiles(&errors, levels)?;

    Some(Analysis {
        centroid,
        errors,
        rms,
        percentiles,
    })
}

/// Geodesic (WGS84) distance in meters from each fix to `centroid`
pub fn error_series(series: &PositionSeries, centroid: &Centroid) -> Vec<f64> {
    let center = centroid.point();
    series
        .iter()
        .map(|fix| center.geodesic_distance(&Point::new(fix.longitude, fix.latitude)))
        .collect()
}

/// Root mean square of the errors, `None` for an empty slice
pub fn rms(errors: &[f64]) -> Option<f64> {
    if errors.is_empty() {
        return None;
    }
    let mean_square = errors.iter().map(|e| e * e).sum::<f64>() / errors.len() as f64;
    Some(mean_square.sqrt())
}

/// Percentiles with linear interpolation between order statistics.
///
/// `None` for an empty slice: an unavailable result, not zero.
pub fn percentiles(errors: &[f64], levels: &[f64]) -> Option<Vec<PercentileError>> {
    if errors.is_empty() {
        return None;
    }
    let mut sorted = errors.to_vec();
    sorted.sort_by(f64::total_cmp);

    Some(
        levels
            .iter()
            .map(|&level| PercentileError {
                level,
                meters: interpolate(&sorted, level),
            })
            .collect(),
    )
}

fn interpolate(sorted: &[f64], level: f64) -> f64 {
    let rank = (level.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gps::ParsedFix;

    fn series(points: &[(f64, f64)]) -> PositionSeries {
        points
            .iter()
            .map(|&(lat, lon)| ParsedFix::new(lat, lon))
            .collect()
    }

    #[test]
    fn test_empty_series() {
        let empty = PositionSeries::new();
        assert!(Centroid::of(&empty).is_none());
        assert!(analyze(&empty, &DEFAULT_PERCENTILES).is_none());
        assert!(rms(&[]).is_none());
        assert!(percentiles(&[], &DEFAULT_PERCENTILES).is_none());
    }

    #[test]
    fn test_identical_points() {
        let s = series(&[(37.4212, -122.0841); 5]);
        let analysis = analyze(&s, &DEFAULT_PERCENTILES).unwrap();

        assert!(analysis.rms < 1e-6);
        assert!(analysis.percentile(68.0).unwrap() < 1e-6);
        assert!(analysis.percentile(95.0).unwrap() < 1e-6);
        assert_eq!(analysis.errors.len(), 5);
    }

    #[test]
    fn test_single_point_has_zero_error() {
        let s = series(&[(37.4212, -122.0841)]);
        let analysis = analyze(&s, &DEFAULT_PERCENTILES).unwrap();
        assert!(analysis.rms < 1e-9);
        assert_eq!(analysis.centroid.latitude, 37.4212);
    }

    #[test]
    fn test_symmetric_points() {
        let s = series(&[(0.0, -0.001), (0.0, 0.001)]);
        let centroid = Centroid::of(&s).unwrap();
        assert_eq!(centroid.latitude, 0.0);
        assert_eq!(centroid.longitude, 0.0);

        let expected = Point::new(0.0, 0.0).geodesic_distance(&Point::new(0.001, 0.0));
        let analysis = analyze(&s, &DEFAULT_PERCENTILES).unwrap();

        assert!((analysis.rms - expected).abs() < 1e-9);
        // 0.001 deg of longitude at the equator is about 111 m
        assert!((analysis.rms - 111.32).abs() < 0.1);
        assert!((analysis.percentile(95.0).unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_rms_definition() {
        let value = rms(&[3.0, 4.0]).unwrap();
        assert!((value - 12.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_percentile_interpolation() {
        let errors = [4.0, 1.0, 3.0, 2.0, 5.0];
        let result = percentiles(&errors, &[0.0, 50.0, 68.0, 95.0, 100.0]).unwrap();
        let values: Vec<f64> = result.iter().map(|p| p.meters).collect();

        assert_eq!(values[0], 1.0);
        assert_eq!(values[1], 3.0);
        assert!((values[2] - 3.72).abs() < 1e-12);
        assert!((values[3] - 4.8).abs() < 1e-12);
        assert_eq!(values[4], 5.0);
    }

    #[test]
    fn test_percentiles_ignore_input_order() {
        let a = percentiles(&[1.0, 9.0, 4.0, 2.5], &DEFAULT_PERCENTILES).unwrap();
        let b = percentiles(&[9.0, 2.5, 1.0, 4.0], &DEFAULT_PERCENTILES).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_error_summary() {
        let s = series(&[(0.0, -0.001), (0.0, 0.001), (0.0, 0.0)]);
        let analysis = analyze(&s, &DEFAULT_PERCENTILES).unwrap();
        assert!(analysis.errors[2] < 1e-9);
        assert!((analysis.max_error() - analysis.errors[0]).abs() < 1e-9);
        assert!(analysis.mean_error() < analysis.max_error());
        assert!(analysis.percentile(50.0).is_none());
    }
}
