//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> *Result` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`book_weight`] - Paper weight of a bound book from its page size and count

pub mod book_weight;

pub use book_weight::{compute_weight_kg, BookWeightInput, BookWeightResult, GRAMS_PER_SQUARE_MM};
