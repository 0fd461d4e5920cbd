//! Error types and error handling for the checker.
//!
//! Every stage of the pipeline reports failure through [`errors::Error`], which
//! pairs an [`errors::ErrorImpl`] cause with the source position it was found at.
//! Causes fall into two kinds, syntax and type, and the first one found ends
//! the run.

pub mod errors;

#[cfg(test)]
mod tests;
