//! Report generation module

mod summary;

pub use summary::ConversionSummary;
