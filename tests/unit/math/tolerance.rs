//! Tests for closeness checks and summary statistics

#[cfg(test)]
mod tests {
    use kolam::math::tolerance::{
        all_close_absolute, all_close_relative, is_close, mean, variance,
    };

    // Tests the combined absolute and relative rule
    #[test]
    fn test_is_close() {
        assert!(is_close(1.05, 1.0, 0.0, 0.1));
        assert!(!is_close(1.2, 1.0, 0.0, 0.1));
        assert!(is_close(0.05, 0.0, 0.1, 0.0));
    }

    // Tests relative closeness against a shared reference
    #[test]
    fn test_all_close_relative() {
        assert!(all_close_relative(&[10.0, 10.5, 9.5], 10.0, 0.1));
        assert!(!all_close_relative(&[10.0, 12.0], 10.0, 0.1));
        assert!(all_close_relative::<f64>(&[], 10.0, 0.1));
    }

    // Tests absolute closeness against a shared reference
    #[test]
    fn test_all_close_absolute() {
        assert!(all_close_absolute(&[1.0, 1.05, 0.95], 1.0, 0.1));
        assert!(!all_close_absolute(&[1.0, 1.2], 1.0, 0.1));
    }

    // Tests mean and population variance
    #[test]
    fn test_mean_and_variance() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

        assert_eq!(mean(&values), Some(5.0));
        assert_eq!(variance(&values), Some(4.0));
        assert_eq!(mean::<f64>(&[]), None);
        assert_eq!(variance::<f64>(&[]), None);
    }
}
