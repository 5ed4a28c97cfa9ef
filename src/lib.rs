//! evorun: parameter registry for evolutionary-computation experiments
//!
//! A library for declaring, overriding, persisting, and resuming the
//! typed parameters that drive a long-running experimental process.

pub mod params;
