//! # bookweight_core - Book Weight Estimation Engine
//!
//! `bookweight_core` estimates how much the paper in a book weighs from its
//! page size and page count, and provides the validated number prompt that
//! collects those inputs from a user.
//!
//! ## Design Philosophy
//!
//! - **Pure calculation**: the weight estimate is a plain function of its inputs
//! - **Injected I/O**: prompts talk to a [`prompt::Console`], never to stdin directly
//! - **Explicit bounds**: every prompt states its accepted range
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use bookweight_core::calculations::compute_weight_kg;
//!
//! let kg = compute_weight_kg(150, 200, 300);
//! println!("{:.4} kg", kg);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The weight estimate
//! - [`prompt`] - Retry-until-valid integer prompt
//! - [`session`] - The three-question calculator flow
//! - [`settings`] - Prompt messages, bounds and retry policy
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod prompt;
pub mod session;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute_weight_kg, BookWeightInput, BookWeightResult};
pub use errors::{CalcError, CalcResult, PromptError, PromptRejection};
pub use prompt::{Bounds, RetryPolicy, ValidatedNumberPrompt};
pub use session::run_session;
pub use settings::{BoundsPolicy, CalculatorSettings};
