//! canopy: hierarchical model tables as trees.
//!
//! A canopy dataset is a table of numbered headings (`3`, `3.3`, `3.3.2`) with one value
//! column per model. canopy rebuilds the heading hierarchy for every model, prunes the
//! branches a model leaves empty, and offers path search and treemap aggregation on top.

#![warn(missing_docs)]

pub mod cli;
mod dataset;

pub use dataset::Dataset;
