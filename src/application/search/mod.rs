//! Debounced search over a forest
//!
//! `DebouncedSearch` owns the source data, the settled query and the filtered
//! result. Keystrokes go through a [`Debouncer`]; only a settled query
//! recomputes the filter.

mod debounce;

use std::time::{Duration, Instant};

use crate::domain::entities::TreeNode;
use crate::domain::services::{expand_survivors, filter_forest_with, title_matches, FilterOptions};

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_MS};

/// Predicate type used by title search
pub type TitlePredicate = fn(&str, &TreeNode) -> bool;

/// Search state for one list or tree
#[derive(Debug, Clone)]
pub struct DebouncedSearch<P> {
    source: Vec<TreeNode>,
    filtered: Vec<TreeNode>,
    query: String,
    debouncer: Debouncer<String>,
    predicate: P,
    options: FilterOptions,
    auto_expand: bool,
    recomputations: usize,
}

impl DebouncedSearch<TitlePredicate> {
    /// Case-insensitive title search
    pub fn by_title(source: Vec<TreeNode>, delay: Duration) -> Self {
        Self::new(source, delay, title_matches)
    }
}

impl<P> DebouncedSearch<P>
where
    P: Fn(&str, &TreeNode) -> bool,
{
    pub fn new(source: Vec<TreeNode>, delay: Duration, predicate: P) -> Self {
        Self {
            filtered: source.clone(),
            source,
            query: String::new(),
            debouncer: Debouncer::new(delay),
            predicate,
            options: FilterOptions::default(),
            auto_expand: false,
            recomputations: 0,
        }
    }

    pub fn with_options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self.filtered = self.compute();
        self
    }

    /// Expand surviving folders whenever a non-empty query is applied
    pub fn with_auto_expand(mut self, auto_expand: bool) -> Self {
        self.auto_expand = auto_expand;
        self.filtered = self.compute();
        self
    }

    /// Feed raw input text; restarts the debounce delay
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.debouncer.schedule(text.into(), now);
    }

    /// Apply the pending query if it has settled. Returns true if the
    /// filtered result was recomputed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(query) = self.debouncer.poll(now) else {
            return false;
        };
        if query == self.query {
            return false;
        }
        tracing::debug!(query = %query, "search query settled");
        self.query = query;
        self.recompute();
        true
    }

    /// Replace the source data, re-applying the settled query
    pub fn set_source(&mut self, source: Vec<TreeNode>) {
        self.source = source;
        self.recompute();
    }

    /// Drop any pending keystrokes (view going away)
    pub fn cancel(&mut self) {
        if self.debouncer.cancel().is_some() {
            tracing::debug!("pending search cancelled");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Time until the pending query settles
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    /// Settled query
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn source(&self) -> &[TreeNode] {
        &self.source
    }

    pub fn filtered(&self) -> &[TreeNode] {
        &self.filtered
    }

    /// Number of filter recomputations since creation
    pub fn recompute_count(&self) -> usize {
        self.recomputations
    }

    fn recompute(&mut self) {
        self.filtered = self.compute();
        self.recomputations += 1;
    }

    fn compute(&self) -> Vec<TreeNode> {
        let mut result = filter_forest_with(&self.source, &self.query, &self.predicate, self.options);
        if self.auto_expand && !self.query.trim().is_empty() {
            expand_survivors(&mut result);
        }
        result
    }
}
