//! Search over canopy path indexes.
//!
//! Two modes answer a query against the normalized paths of each model tree:
//! - **Stripe search** for queries of two or more tokens: tokens are split into
//!   contiguous groups that must hit consecutive path segments in order
//! - **Phrase search** as the fallback: the whole query inside one segment
//!
//! Hits from every searched model are merged, collapsed to their shallowest
//! ancestors per model, and truncated to the requested limit.

#![warn(missing_docs)]

mod collapse;
mod hit;
mod phrase;
mod stripe;

use canopy_tree::{PathIndex, to_words};
pub use collapse::{collapse_to_ancestors, is_ancestor_or_self};
pub use hit::{ModelHit, PATH_SEPARATOR, SearchHit, sort_hits};
pub use phrase::phrase_matches;
use serde::Serialize;
pub use stripe::{Partitions, partitions, stripe_matches};
use tracing::debug;

/// Default number of hits returned by a search.
pub const DEFAULT_LIMIT: usize = 100;

/// A search query with its model filter and result limit.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Raw query text.
    pub query: String,
    /// Restrict the search to one model.
    pub model: Option<String>,
    /// Maximum number of hits; values below 1 are treated as 1.
    pub limit: usize,
}

impl SearchRequest {
    /// Creates a request across all models with the default limit.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            model: None,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Restricts the request to a single model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Which search mode produced the hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Multi-token contiguous-partition search.
    Stripe,
    /// Whole-query single-segment search.
    Phrase,
    /// Nothing was searched: empty query or unknown model.
    Empty,
}

/// Result of a search, with the details needed to explain it.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    /// Normalized query tokens.
    pub tokens: Vec<String>,
    /// Mode that produced the hits.
    pub mode: SearchMode,
    /// Hits before ancestor collapse.
    pub raw_hits: usize,
    /// Collapsed, ordered, limited hits.
    pub hits: Vec<ModelHit>,
}

impl SearchOutcome {
    /// An outcome with no hits.
    fn empty(tokens: Vec<String>) -> Self {
        Self {
            tokens,
            mode: SearchMode::Empty,
            raw_hits: 0,
            hits: Vec::new(),
        }
    }
}

/// Runs a query against a set of `(model, index)` pairs.
///
/// A model filter naming a model that is not present yields no hits. Stripe
/// search runs first when the query has at least two tokens; phrase search
/// runs when it is skipped or finds nothing.
pub fn search<'a, I>(indexes: I, request: &SearchRequest) -> SearchOutcome
where
    I: IntoIterator<Item = (&'a str, &'a PathIndex)>,
{
    let tokens = to_words(&request.query);
    if tokens.is_empty() {
        debug!("empty query");
        return SearchOutcome::empty(tokens);
    }

    let scoped: Vec<(&str, &PathIndex)> = indexes
        .into_iter()
        .filter(|(model, _)| request.model.as_deref().is_none_or(|m| m == *model))
        .collect();
    if scoped.is_empty() {
        debug!(model = ?request.model, "no model to search");
        return SearchOutcome::empty(tokens);
    }

    let mut mode = SearchMode::Phrase;
    let mut merged = Vec::new();
    if tokens.len() >= 2 {
        for (model, index) in &scoped {
            merged.extend(
                stripe_matches(index, &tokens)
                    .into_iter()
                    .map(|h| ModelHit::new(*model, h)),
            );
        }
        if !merged.is_empty() {
            mode = SearchMode::Stripe;
        }
    }
    if merged.is_empty() {
        let phrase = tokens.join(" ");
        for (model, index) in &scoped {
            merged.extend(
                phrase_matches(index, &phrase)
                    .into_iter()
                    .map(|h| ModelHit::new(*model, h)),
            );
        }
    }

    let raw_hits = merged.len();
    let mut hits = collapse_to_ancestors(merged);
    hits.truncate(request.limit.max(1));
    debug!(
        ?mode,
        tokens = tokens.len(),
        raw_hits,
        hits = hits.len(),
        "search finished"
    );

    SearchOutcome {
        tokens,
        mode,
        raw_hits,
        hits,
    }
}
