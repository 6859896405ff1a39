// Shared descriptive statistics over close/volume vectors.

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation; 0.0 for fewer than two values.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Mean absolute difference between consecutive values.
pub fn mean_abs_change(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let total: f64 = values.windows(2).map(|w| (w[1] - w[0]).abs()).sum();
    total / (values.len() - 1) as f64
}

/// Percent change from `oldest` to `newest`; `None` when the base is zero.
pub fn percent_change(oldest: f64, newest: f64) -> Option<f64> {
    if oldest == 0.0 {
        return None;
    }
    Some((newest - oldest) / oldest * 100.0)
}

/// Coefficient of variation as a percentage; `None` when the mean is zero.
pub fn coefficient_of_variation(values: &[f64]) -> Option<f64> {
    let avg = mean(values);
    if avg == 0.0 {
        return None;
    }
    Some(std_dev(values) / avg * 100.0)
}

/// Day-over-day returns over the most recent `lookback` transitions of a
/// newest-first close vector. Transitions with a zero base price are skipped.
pub fn daily_returns(closes_newest_first: &[f64], lookback: usize) -> Vec<f64> {
    let transitions = lookback.min(closes_newest_first.len().saturating_sub(1));
    let mut returns = Vec::with_capacity(transitions);
    for i in 1..=transitions {
        let base = closes_newest_first[i];
        if base != 0.0 {
            returns.push((closes_newest_first[i - 1] - base) / base);
        }
    }
    returns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_std_dev() {
        let values = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&values) - 5.0).abs() < 1e-12);
        assert!((std_dev(&values) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn std_dev_of_constant_series_is_zero() {
        let values = vec![100.0; 25];
        assert_eq!(std_dev(&values), 0.0);
    }

    #[test]
    fn mean_abs_change_ignores_direction() {
        let values = vec![10.0, 12.0, 9.0, 9.0];
        // |2| + |-3| + |0| over 3 transitions
        assert!((mean_abs_change(&values) - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn percent_change_guards_zero_base() {
        assert_eq!(percent_change(0.0, 50.0), None);
        assert!((percent_change(100.0, 102.0).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn cv_guards_zero_mean() {
        assert_eq!(coefficient_of_variation(&[0.0, 0.0]), None);
        let cv = coefficient_of_variation(&[100.0; 10]).unwrap();
        assert_eq!(cv, 0.0);
    }

    #[test]
    fn daily_returns_newest_first() {
        // newest-first: 110, 100, 80 -> returns 10% then 25%
        let returns = daily_returns(&[110.0, 100.0, 80.0], 20);
        assert_eq!(returns.len(), 2);
        assert!((returns[0] - 0.10).abs() < 1e-12);
        assert!((returns[1] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn daily_returns_respects_lookback_and_zero_base() {
        let closes = vec![5.0, 0.0, 4.0, 4.0];
        let returns = daily_returns(&closes, 2);
        // first transition has zero base and is skipped
        assert_eq!(returns.len(), 1);
    }
}
