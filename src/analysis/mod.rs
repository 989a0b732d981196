//! Analysis of conversion results

/// Shape counts and compactness measures
pub mod statistics;
