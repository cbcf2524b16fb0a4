//! Pheromone trail matrix.

/// Learned edge weights over the node set, same indexing as the distance
/// matrix.
///
/// Owned exclusively by the [`Colony`](super::Colony) controller and
/// mutated only between iterations: agents read a snapshot during
/// construction, the controller evaporates and reinforces after the
/// barrier. Every entry stays non-negative through any sequence of
/// updates.
///
/// # Examples
///
/// ```
/// use aco_routing::colony::PheromoneMatrix;
///
/// let mut ph = PheromoneMatrix::new(3, 1.0);
/// ph.evaporate(0.1);
/// ph.deposit(0, 1, 0.5);
/// assert!((ph.get(0, 1) - 1.4).abs() < 1e-10);
/// assert!((ph.get(1, 0) - 0.9).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// Creates a matrix with every entry set to `init`.
    pub fn new(size: usize, init: f64) -> Self {
        Self {
            data: vec![init; size * size],
            size,
        }
    }

    /// Returns the trail weight on the directed edge `from -> to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every entry by `1 - rho`.
    pub fn evaporate(&mut self, rho: f64) {
        let factor = 1.0 - rho;
        for value in &mut self.data {
            *value *= factor;
        }
    }

    /// Adds `amount` to the directed edge `from -> to`.
    pub fn deposit(&mut self, from: usize, to: usize, amount: f64) {
        self.data[from * self.size + to] += amount;
    }

    /// Blends the matrix towards a fresh one: every entry becomes
    /// `weight * old + (1 - weight) * init`.
    ///
    /// Re-injects exploration after stagnation while partially retaining
    /// the learned structure.
    pub fn fuse(&mut self, weight: f64, init: f64) {
        let fresh = (1.0 - weight) * init;
        for value in &mut self.data {
            *value = weight * *value + fresh;
        }
    }
}
