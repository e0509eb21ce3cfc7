pub mod dataset;
pub mod error;
pub mod io;
pub mod pipelines;
pub mod processing;
