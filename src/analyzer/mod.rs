// Analyzer module: turns a match result into the next persisted status.

pub mod reconciler;

pub use reconciler::{reconcile, Reconciliation};
