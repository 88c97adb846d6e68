//! # Unit Types
//!
//! Type-safe wrappers for the handful of units a book weight estimate needs.
//! These are plain f64 newtypes so JSON stays clean (just numbers).
//!
//! ## Units
//!
//! - Length: millimeters (mm)
//! - Area: square millimeters (mm²)
//! - Mass: grams (g), kilograms (kg = 1000 g)
//!
//! ## Example
//!
//! ```rust
//! use bookweight_core::units::{Grams, Kilograms, Millimeters, SquareMillimeters};
//!
//! let area: SquareMillimeters = Millimeters(150.0) * Millimeters(200.0);
//! assert_eq!(area.0, 30000.0);
//!
//! let kg: Kilograms = Grams(721.5).into();
//! assert_eq!(kg.0, 0.7215);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Mul;

// ============================================================================
// Length and Area
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMillimeters(pub f64);

impl Mul for Millimeters {
    type Output = SquareMillimeters;
    fn mul(self, rhs: Self) -> Self::Output {
        SquareMillimeters(self.0 * rhs.0)
    }
}

// ============================================================================
// Mass
// ============================================================================

/// Mass in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub f64);

/// Mass in kilograms (1 kg = 1000 g)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl From<Grams> for Kilograms {
    fn from(g: Grams) -> Self {
        Kilograms(g.0 / 1000.0)
    }
}

/// Scale a mass, e.g. one page's weight by the page count
impl Mul<f64> for Grams {
    type Output = Grams;
    fn mul(self, rhs: f64) -> Self::Output {
        Grams(self.0 * rhs)
    }
}

macro_rules! impl_value {
    ($($type:ty),*) => {
        $(
            impl $type {
                /// Get the raw f64 value
                pub fn value(self) -> f64 {
                    self.0
                }
            }
        )*
    };
}

impl_value!(SquareMillimeters, Grams, Kilograms);
