/// Tuning knobs for an [`AStar`](crate::AStar) search.
///
/// # Example
///
/// ```
/// use maze_paths::SearchConfig;
///
/// let config = SearchConfig::new().with_max_expansions(10_000);
/// assert_eq!(config.max_expansions(), Some(10_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Maximum number of nodes moved to the closed set before giving up.
    max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Unlimited search: runs until the goal is reached or the frontier is
    /// exhausted.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_expansions: None,
        }
    }

    /// Stop after expanding `max` nodes.
    #[must_use]
    pub const fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    /// The expansion limit, if any.
    #[must_use]
    pub const fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }
}
