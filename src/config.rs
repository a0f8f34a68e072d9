//! Receiver acceptance configuration
//!
//! Controls how [`Receiver`](crate::mutate::Receiver) decides whether a supplier
//! fits before a bulk copy.
//!
//! # Examples
//!
//! ```
//! use celda::config::{AcceptConfig, RankComparison};
//!
//! // Default: compare every dimension of either side
//! let strict = AcceptConfig::strict();
//! assert_eq!(strict.rank_comparison, RankComparison::Symmetric);
//!
//! // Only the receiver's dimensions are compared
//! let legacy = AcceptConfig::new()
//!     .with_rank_comparison(RankComparison::ReceiverOnly)
//!     .build();
//! assert_eq!(legacy, AcceptConfig::legacy());
//! ```

/// Which dimensions take part in the per-dimension extent check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankComparison {
    /// Check dimensions `0..max(receiver rank, supplier rank)`
    #[default]
    Symmetric,
    /// Check dimensions `0..receiver rank` only
    ///
    /// Extra supplier dimensions are ignored. The total-count check still
    /// applies, so an accepted copy never runs past the receiver.
    ReceiverOnly,
}

/// Acceptance policy for bulk copies into a receiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AcceptConfig {
    /// Dimensions compared by the extent check
    pub rank_comparison: RankComparison,
}

impl AcceptConfig {
    /// Create a configuration with default values (symmetric comparison)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rank comparison mode
    ///
    /// # Examples
    ///
    /// ```
    /// use celda::config::{AcceptConfig, RankComparison};
    ///
    /// let config = AcceptConfig::new().with_rank_comparison(RankComparison::ReceiverOnly);
    /// assert_eq!(config.rank_comparison, RankComparison::ReceiverOnly);
    /// ```
    pub fn with_rank_comparison(mut self, mode: RankComparison) -> Self {
        self.rank_comparison = mode;
        self
    }

    /// Finalize configuration (no-op, for builder pattern consistency)
    pub fn build(self) -> Self {
        self
    }

    /// Symmetric preset, same as [`AcceptConfig::default`]
    pub fn strict() -> Self {
        Self::new().with_rank_comparison(RankComparison::Symmetric)
    }

    /// Receiver-rank-only preset
    ///
    /// Matches receivers that historically looped over their own rank twice
    /// instead of the larger of the two ranks.
    pub fn legacy() -> Self {
        Self::new().with_rank_comparison(RankComparison::ReceiverOnly)
    }

    /// Number of dimensions to compare for the given ranks
    pub fn compared_rank(&self, receiver_rank: usize, supplier_rank: usize) -> usize {
        match self.rank_comparison {
            RankComparison::Symmetric => receiver_rank.max(supplier_rank),
            RankComparison::ReceiverOnly => receiver_rank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_symmetric() {
        assert_eq!(AcceptConfig::default().rank_comparison, RankComparison::Symmetric);
        assert_eq!(AcceptConfig::new(), AcceptConfig::strict());
    }

    #[test]
    fn test_builder() {
        let config = AcceptConfig::new()
            .with_rank_comparison(RankComparison::ReceiverOnly)
            .build();
        assert_eq!(config, AcceptConfig::legacy());
    }

    #[test]
    fn test_compared_rank() {
        assert_eq!(AcceptConfig::strict().compared_rank(1, 3), 3);
        assert_eq!(AcceptConfig::strict().compared_rank(2, 0), 2);
        assert_eq!(AcceptConfig::legacy().compared_rank(1, 3), 1);
    }
}
