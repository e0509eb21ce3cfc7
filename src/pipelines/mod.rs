//! Pipelines.
//!
//! Build steps operating on the dataset file ([build]) and the distribution step ([distribute]),
//! all behind the light [pipeline::Pipeline] trait.
pub mod build;
pub mod distribute;
pub mod pipeline;

pub use build::{Derive, Merge, Reformat};
pub use distribute::Splitter;
pub use pipeline::Pipeline;
