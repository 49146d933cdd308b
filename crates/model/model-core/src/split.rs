//! Seeded train/test splitting.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Split rows into shuffled train and test sets.
///
/// The shuffle is driven entirely by `seed`, so the same inputs always
/// produce the same split. The test set gets `test_ratio` of the rows,
/// with at least one row on each side.
pub fn train_test_split(
    x: &[Vec<f64>],
    y: &[f64],
    test_ratio: f64,
    seed: u64,
) -> (Vec<Vec<f64>>, Vec<f64>, Vec<Vec<f64>>, Vec<f64>) {
    let n = x.len();
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test_len = ((n as f64 * test_ratio).round() as usize).clamp(1, n.saturating_sub(1));
    let (test_idx, train_idx) = indices.split_at(test_len);

    let train_x = train_idx.iter().map(|&i| x[i].clone()).collect();
    let train_y = train_idx.iter().map(|&i| y[i]).collect();
    let test_x = test_idx.iter().map(|&i| x[i].clone()).collect();
    let test_y = test_idx.iter().map(|&i| y[i]).collect();

    (train_x, train_y, test_x, test_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: usize) -> (Vec<Vec<f64>>, Vec<f64>) {
        let x: Vec<Vec<f64>> = (0..n).map(|i| vec![i as f64]).collect();
        let y: Vec<f64> = (0..n).map(|i| i as f64 * 10.0).collect();
        (x, y)
    }

    #[test]
    fn test_split_sizes() {
        let (x, y) = sample(100);
        let (train_x, train_y, test_x, test_y) = train_test_split(&x, &y, 0.2, 42);
        assert_eq!(train_x.len(), 80);
        assert_eq!(train_y.len(), 80);
        assert_eq!(test_x.len(), 20);
        assert_eq!(test_y.len(), 20);
    }

    #[test]
    fn test_split_is_deterministic() {
        let (x, y) = sample(50);
        let first = train_test_split(&x, &y, 0.2, 42);
        let second = train_test_split(&x, &y, 0.2, 42);
        assert_eq!(first.0, second.0);
        assert_eq!(first.3, second.3);
    }

    #[test]
    fn test_different_seeds_differ() {
        let (x, y) = sample(50);
        let first = train_test_split(&x, &y, 0.2, 42);
        let second = train_test_split(&x, &y, 0.2, 7);
        assert_ne!(first.0, second.0);
    }

    #[test]
    fn test_rows_stay_paired() {
        let (x, y) = sample(30);
        let (train_x, train_y, test_x, test_y) = train_test_split(&x, &y, 0.2, 1);
        for (row, &target) in train_x.iter().zip(train_y.iter()) {
            assert!((row[0] * 10.0 - target).abs() < 1e-12);
        }
        for (row, &target) in test_x.iter().zip(test_y.iter()) {
            assert!((row[0] * 10.0 - target).abs() < 1e-12);
        }
    }

    #[test]
    fn test_tiny_input_keeps_one_row_per_side() {
        let (x, y) = sample(2);
        let (train_x, _, test_x, _) = train_test_split(&x, &y, 0.2, 42);
        assert_eq!(train_x.len(), 1);
        assert_eq!(test_x.len(), 1);
    }
}
