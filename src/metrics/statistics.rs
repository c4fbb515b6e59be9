use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

/// Statistics for a collection of values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub mean: f32,
    pub std: f32,
    pub min: f32,
    pub max: f32,
    pub count: usize,
}

impl Statistics {
    fn empty() -> Self {
        Statistics {
            mean: 0.0,
            std: 0.0,
            min: 0.0,
            max: 0.0,
            count: 0,
        }
    }

    /// Compute statistics from an array view (population standard deviation)
    pub fn from_array(array: ArrayView1<f32>) -> Self {
        let mean = match array.mean() {
            Some(mean) => mean,
            None => return Self::empty(),
        };

        let min = array.iter().copied().fold(f32::INFINITY, f32::min);
        let max = array.iter().copied().fold(f32::NEG_INFINITY, f32::max);

        Statistics {
            mean,
            std: array.std(0.0),
            min,
            max,
            count: array.len(),
        }
    }

    /// Compute statistics from a slice of values
    pub fn from_slice(values: &[f32]) -> Self {
        Self::from_array(ArrayView1::from(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_statistics_from_array() {
        let values = array![1.0, 2.0, 3.0, 4.0];
        let stats = Statistics::from_array(values.view());

        assert_eq!(stats.count, 4);
        assert!((stats.mean - 2.5).abs() < 1e-6);
        assert!((stats.std - 1.118034).abs() < 1e-5);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
    }

    #[test]
    fn test_statistics_empty() {
        let stats = Statistics::from_slice(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, 0.0);
    }
}
