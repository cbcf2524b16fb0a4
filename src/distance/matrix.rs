//! Dense distance matrix.

use crate::models::Customer;

/// A dense n×n Euclidean distance matrix stored in row-major order.
///
/// Computed once from the node set when the run context is built and
/// read-only thereafter: `dist[i][j] == dist[j][i]` and `dist[i][i] == 0`.
///
/// # Examples
///
/// ```
/// use aco_routing::models::Customer;
/// use aco_routing::distance::DistanceMatrix;
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0, 100.0),
///     Customer::new(1, 3.0, 4.0, 10, 5.0, 0.0, 100.0).unwrap(),
///     Customer::new(2, 6.0, 8.0, 20, 5.0, 0.0, 100.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_customers(&customers);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes a Euclidean distance matrix from customer coordinates.
    ///
    /// O(n²) time and space.
    pub fn from_customers(customers: &[Customer]) -> Self {
        let n = customers.len();
        let mut dm = Self {
            data: vec![0.0; n * n],
            size: n,
        };
        for i in 0..n {
            for j in (i + 1)..n {
                let d = customers[i].distance_to(&customers[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given
    /// tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the candidate nearest to `from`.
    ///
    /// Returns `None` if `candidates` is empty.
    pub fn nearest_among(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates.iter().copied().min_by(|&a, &b| {
            self.get(from, a)
                .partial_cmp(&self.get(from, b))
                .expect("distance should not be NaN")
        })
    }
}
