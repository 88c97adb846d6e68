//! # Book Weight Estimate
//!
//! Estimates the paper weight of a book from its page dimensions and page
//! count using a fixed areal density for paper.
//!
//! ```text
//! page_area   = width * height              (mm²)
//! page_weight = page_area * GRAMS_PER_SQUARE_MM  (g)
//! book_weight = page_count * page_weight    (g)
//! ```
//!
//! No bounds checking happens here. Inputs are expected to come through the
//! prompt loop, which enforces whatever bounds the caller configured.
//!
//! ## Example
//!
//! ```rust
//! use bookweight_core::calculations::book_weight::{calculate, BookWeightInput};
//!
//! let input = BookWeightInput {
//!     width_mm: 150,
//!     height_mm: 200,
//!     page_count: 300,
//! };
//!
//! let result = calculate(&input);
//! assert!((result.book_weight_kg - 0.7215).abs() < 1e-4);
//! println!("{}", result);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::units::{Grams, Kilograms, Millimeters, SquareMillimeters};

/// Grams of paper per square millimeter of page.
///
/// Empirical value for typical book paper.
pub const GRAMS_PER_SQUARE_MM: f64 = 0.0000801667;

/// Page size and page count for a book.
///
/// ## JSON Example
///
/// ```json
/// { "width_mm": 150, "height_mm": 200, "page_count": 300 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookWeightInput {
    /// Page width in millimeters
    pub width_mm: i64,

    /// Page height in millimeters
    pub height_mm: i64,

    /// Number of pages
    pub page_count: i64,
}

impl BookWeightInput {
    /// Page width as a length
    pub fn width(&self) -> Millimeters {
        Millimeters(self.width_mm as f64)
    }

    /// Page height as a length
    pub fn height(&self) -> Millimeters {
        Millimeters(self.height_mm as f64)
    }

    /// Area of a single page (mm²)
    pub fn page_area(&self) -> SquareMillimeters {
        self.width() * self.height()
    }
}

/// Results of a book weight estimate, with every intermediate kept.
///
/// ## JSON Example
///
/// ```json
/// {
///   "page_area_sq_mm": 30000.0,
///   "page_weight_g": 2.405001,
///   "book_weight_g": 721.5003,
///   "book_weight_kg": 0.7215003
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BookWeightResult {
    /// Area of one page (mm²)
    pub page_area_sq_mm: f64,

    /// Weight of one page (g)
    pub page_weight_g: f64,

    /// Weight of all pages (g)
    pub book_weight_g: f64,

    /// Weight of all pages (kg)
    pub book_weight_kg: f64,
}

impl fmt::Display for BookWeightResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding +0.0 turns -0.0 into 0.0
        write!(f, "You book weighs {}kg", self.book_weight_kg + 0.0)
    }
}

/// Estimate the weight of a book.
///
/// Pure function: the same input always gives the same result.
pub fn calculate(input: &BookWeightInput) -> BookWeightResult {
    let page_area = input.page_area();
    let page_weight = Grams(page_area.value() * GRAMS_PER_SQUARE_MM);
    let book_weight = page_weight * input.page_count as f64;
    let book_weight_kg: Kilograms = book_weight.into();

    BookWeightResult {
        page_area_sq_mm: page_area.value(),
        page_weight_g: page_weight.value(),
        book_weight_g: book_weight.value(),
        book_weight_kg: book_weight_kg.value(),
    }
}

/// Estimate the weight of a book in kilograms.
///
/// Shorthand for [`calculate`] when only the final figure matters.
///
/// ```rust
/// use bookweight_core::calculations::compute_weight_kg;
///
/// let kg = compute_weight_kg(150, 200, 300);
/// assert!((kg - 0.7215).abs() < 1e-4);
/// ```
pub fn compute_weight_kg(width_mm: i64, height_mm: i64, page_count: i64) -> f64 {
    calculate(&BookWeightInput {
        width_mm,
        height_mm,
        page_count,
    })
    .book_weight_kg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_book() -> BookWeightInput {
        BookWeightInput {
            width_mm: 150,
            height_mm: 200,
            page_count: 300,
        }
    }

    #[test]
    fn test_intermediates() {
        let result = calculate(&test_book());

        // 150 * 200 = 30000 mm²
        assert_eq!(result.page_area_sq_mm, 30000.0);
        // 30000 * 0.0000801667 = 2.405001 g
        assert!((result.page_weight_g - 2.405001).abs() < 1e-9);
        // 300 * 2.405001 = 721.5003 g
        assert!((result.book_weight_g - 721.5003).abs() < 1e-6);
        assert!((result.book_weight_kg - 0.7215003).abs() < 1e-9);
    }

    #[test]
    fn test_matches_closed_form() {
        for &(w, h, n) in &[(1, 1, 1), (105, 148, 64), (210, 297, 1200), (1000, 1000, 15000)] {
            let expected = n as f64 * w as f64 * h as f64 * GRAMS_PER_SQUARE_MM / 1000.0;
            let actual = compute_weight_kg(w, h, n);
            assert!(
                (actual - expected).abs() <= expected.abs() * 1e-12,
                "{}x{}x{}: {} vs {}",
                w,
                h,
                n,
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(compute_weight_kg(123, 456, 789), compute_weight_kg(123, 456, 789));
    }

    #[test]
    fn test_zero_pages_weigh_nothing() {
        assert_eq!(compute_weight_kg(150, 200, 0), 0.0);
    }

    #[test]
    fn test_no_overflow_for_large_dimensions() {
        // Unbounded prompts may hand us anything that fits in i64
        let kg = compute_weight_kg(i64::MAX, i64::MAX, 2);
        assert!(kg.is_finite() && kg > 0.0);
    }

    #[test]
    fn test_display_line() {
        let result = calculate(&BookWeightInput {
            width_mm: 1000,
            height_mm: 1000,
            page_count: 0,
        });
        assert_eq!(result.to_string(), "You book weighs 0kg");
    }

    #[test]
    fn test_display_never_shows_negative_zero() {
        let result = calculate(&BookWeightInput {
            width_mm: -5,
            height_mm: 10,
            page_count: 0,
        });
        assert_eq!(result.to_string(), "You book weighs 0kg");
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&test_book());
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("book_weight_kg"));

        let roundtrip: BookWeightResult = serde_json::from_str(&json).unwrap();
        assert!((roundtrip.book_weight_kg - result.book_weight_kg).abs() < 1e-12);
        assert_eq!(roundtrip.page_area_sq_mm, 30000.0);
    }
}
