//! Canonicalizes raw price series before any computation.
//!
//! Callers supply history in either newest-first or oldest-first order; every
//! downstream component indexes "recent" windows, so the ordering is enforced
//! here once: index 0 is the most recent observation.

use crate::model::{DataError, PricePoint};

/// Aligned numeric view of a price series, newest first.
#[derive(Debug, Clone)]
pub struct NormalizedSeries {
    pub closes: Vec<f64>,
    pub volumes: Vec<f64>,
}

impl NormalizedSeries {
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }
}

/// Validates and orders a raw series. Fails softly with a [`DataError`]
/// sentinel instead of panicking; downstream classifications map the error
/// to an explicit "N/A" label.
pub fn normalize(points: &[PricePoint]) -> Result<NormalizedSeries, DataError> {
    if points.len() < 2 {
        return Err(DataError::Insufficient {
            needed: 2,
            got: points.len(),
        });
    }

    for point in points {
        if !point.close.is_finite() || !point.volume.is_finite() {
            return Err(DataError::Degenerate(format!(
                "non-finite observation on {}",
                point.date
            )));
        }
        if point.close < 0.0 || point.volume < 0.0 {
            return Err(DataError::Degenerate(format!(
                "negative observation on {}",
                point.date
            )));
        }
    }

    let mut ordered: Vec<&PricePoint> = points.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(NormalizedSeries {
        closes: ordered.iter().map(|p| p.close).collect(),
        volumes: ordered.iter().map(|p| p.volume).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(day: u32, close: f64) -> PricePoint {
        let date = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
        PricePoint {
            date,
            open: close,
            high: close,
            low: close,
            close,
            volume: 1000.0,
        }
    }

    #[test]
    fn orders_newest_first_regardless_of_input_order() {
        let oldest_first = vec![point(1, 10.0), point(2, 11.0), point(3, 12.0)];
        let newest_first = vec![point(3, 12.0), point(2, 11.0), point(1, 10.0)];

        let a = normalize(&oldest_first).unwrap();
        let b = normalize(&newest_first).unwrap();

        assert_eq!(a.closes, vec![12.0, 11.0, 10.0]);
        assert_eq!(a.closes, b.closes);
        assert_eq!(a.volumes, b.volumes);
    }

    #[test]
    fn fewer_than_two_points_is_insufficient() {
        let err = normalize(&[point(1, 10.0)]).unwrap_err();
        assert!(matches!(err, DataError::Insufficient { got: 1, .. }));
        assert!(matches!(
            normalize(&[]).unwrap_err(),
            DataError::Insufficient { got: 0, .. }
        ));
    }

    #[test]
    fn rejects_non_finite_and_negative_values() {
        let mut points = vec![point(1, 10.0), point(2, 11.0)];
        points[1].close = f64::NAN;
        assert!(matches!(
            normalize(&points).unwrap_err(),
            DataError::Degenerate(_)
        ));

        let mut points = vec![point(1, 10.0), point(2, 11.0)];
        points[0].volume = -5.0;
        assert!(matches!(
            normalize(&points).unwrap_err(),
            DataError::Degenerate(_)
        ));
    }
}
