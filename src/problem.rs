//! The subset-sum problem model.
//!
//! A candidate is a bit per item: bit `i` set means `items[i]` is in the
//! subset. [`SubsetSum`] turns such a bit sequence into the subset, its sum,
//! and the two fitness scales used by the solvers.

use crate::error::{Result, SolverError};

/// Immutable items and target of a subset-sum instance.
///
/// # Examples
///
/// ```
/// use u_subsetsum::SubsetSum;
///
/// let problem = SubsetSum::new(vec![3, 34, 4, 12, 5, 2], 9).unwrap();
/// let bits = [true, false, true, false, false, true];
/// assert_eq!(problem.decode(&bits), vec![3, 4, 2]);
/// assert_eq!(problem.sum(&bits), 9);
/// assert_eq!(problem.distance(&bits), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawSubsetSum")
)]
pub struct SubsetSum {
    items: Vec<i64>,
    target: i64,
}

/// Unchecked wire form; deserialization goes through [`SubsetSum::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSubsetSum {
    items: Vec<i64>,
    target: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSubsetSum> for SubsetSum {
    type Error = SolverError;

    fn try_from(raw: RawSubsetSum) -> Result<Self> {
        Self::new(raw.items, raw.target)
    }
}

impl SubsetSum {
    /// Creates a problem instance.
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidConfiguration`] if `items` is empty.
    pub fn new(items: Vec<i64>, target: i64) -> Result<Self> {
        if items.is_empty() {
            return Err(SolverError::config("item list must not be empty"));
        }
        Ok(Self { items, target })
    }

    /// The items, in bit order.
    pub fn items(&self) -> &[i64] {
        &self.items
    }

    /// The target sum.
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Number of items, which is also the candidate length.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; construction rejects empty item lists.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items selected by `bits`, in item order.
    ///
    /// Duplicate values are independent slots and are kept.
    pub fn decode(&self, bits: &[bool]) -> Vec<i64> {
        debug_assert_eq!(bits.len(), self.items.len(), "candidate length mismatch");
        self.selected(bits).collect()
    }

    /// Sum of the subset selected by `bits`, saturating at the `i64` range.
    ///
    /// The total is accumulated in `i128` and clamped once, so the result
    /// does not depend on item order.
    pub fn sum(&self, bits: &[bool]) -> i64 {
        debug_assert_eq!(bits.len(), self.items.len(), "candidate length mismatch");
        let total: i128 = self.selected(bits).map(i128::from).sum();
        i64::try_from(total).unwrap_or(if total < 0 { i64::MIN } else { i64::MAX })
    }

    /// `|target - sum|`. Lower is better and 0 is an exact match.
    pub fn distance(&self, bits: &[bool]) -> u64 {
        self.target.abs_diff(self.sum(bits))
    }

    /// `target - |target - sum|`. Higher is better and `target` is an exact
    /// match.
    pub fn closeness(&self, bits: &[bool]) -> i64 {
        let gap = i64::try_from(self.distance(bits)).unwrap_or(i64::MAX);
        self.target.saturating_sub(gap)
    }

    fn selected<'a>(&'a self, bits: &'a [bool]) -> impl Iterator<Item = i64> + 'a {
        self.items
            .iter()
            .zip(bits)
            .filter_map(|(&item, &bit)| bit.then_some(item))
    }
}
