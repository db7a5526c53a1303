//! Extremum scan shared by the GA and the swarm.
//!
//! The GA minimizes its fitness and the swarm maximizes its own, so both
//! loops go through [`best_index`] with the matching [`Direction`].

/// Comparison direction of a fitness scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Lower fitness is better.
    Minimize,
    /// Higher fitness is better.
    Maximize,
}

impl Direction {
    /// Returns `true` if `candidate` is strictly better than `incumbent`.
    ///
    /// Equal values never improve, which keeps the earliest element on ties.
    #[inline]
    pub fn improves<F: PartialOrd>(self, candidate: F, incumbent: F) -> bool {
        match self {
            Direction::Minimize => candidate < incumbent,
            Direction::Maximize => candidate > incumbent,
        }
    }
}

/// Index of the best element of `items` under `direction`.
///
/// The first element is the initial incumbent; a later element replaces it
/// only on strict improvement. Returns `None` for an empty slice.
///
/// # Examples
///
/// ```
/// use u_subsetsum::best::{best_index, Direction};
///
/// let fitness = [4, 1, 7, 1];
/// assert_eq!(best_index(&fitness, Direction::Minimize, |&f| f), Some(1));
/// assert_eq!(best_index(&fitness, Direction::Maximize, |&f| f), Some(2));
/// ```
pub fn best_index<T, F, K>(items: &[T], direction: Direction, key: K) -> Option<usize>
where
    F: PartialOrd + Copy,
    K: Fn(&T) -> F,
{
    let (first, rest) = items.split_first()?;
    let mut best_idx = 0;
    let mut best = key(first);
    for (offset, item) in rest.iter().enumerate() {
        let value = key(item);
        if direction.improves(value, best) {
            best = value;
            best_idx = offset + 1;
        }
    }
    Some(best_idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_best() {
        let empty: [u64; 0] = [];
        assert_eq!(best_index(&empty, Direction::Minimize, |&f| f), None);
    }

    #[test]
    fn test_ties_keep_earliest() {
        let values = [3, 2, 2, 5, 5];
        assert_eq!(best_index(&values, Direction::Minimize, |&v| v), Some(1));
        assert_eq!(best_index(&values, Direction::Maximize, |&v| v), Some(3));
    }

    #[test]
    fn test_all_equal_returns_first() {
        let values = [0i64; 6];
        assert_eq!(best_index(&values, Direction::Maximize, |&v| v), Some(0));
    }

    #[test]
    fn test_key_projection() {
        let pairs = [("a", 9.0), ("b", -1.5), ("c", 3.0)];
        assert_eq!(best_index(&pairs, Direction::Minimize, |p| p.1), Some(1));
    }

    #[test]
    fn test_improves_is_strict() {
        assert!(Direction::Minimize.improves(1, 2));
        assert!(!Direction::Minimize.improves(2, 2));
        assert!(Direction::Maximize.improves(3, 2));
        assert!(!Direction::Maximize.improves(2, 2));
    }
}
