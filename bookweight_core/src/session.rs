//! # Calculator Session
//!
//! Asks for width, height and page count in that order, then estimates the
//! book weight. This is the whole interactive program minus the terminal.
//!
//! ## Example
//!
//! ```rust
//! use bookweight_core::prompt::ScriptedConsole;
//! use bookweight_core::session::run_session;
//! use bookweight_core::settings::CalculatorSettings;
//!
//! let mut console = ScriptedConsole::new(["150", "200", "300"]);
//! let result = run_session(&mut console, &CalculatorSettings::default()).unwrap();
//! assert!((result.book_weight_kg - 0.7215).abs() < 1e-4);
//! ```

use tracing::info;

use crate::calculations::book_weight::{calculate, BookWeightInput, BookWeightResult};
use crate::errors::PromptError;
use crate::prompt::{Console, ValidatedNumberPrompt};
use crate::settings::CalculatorSettings;

/// Collect the three inputs from `console`.
pub fn collect_input<C: Console>(console: C, settings: &CalculatorSettings) -> Result<BookWeightInput, PromptError> {
    let mut prompt = ValidatedNumberPrompt::new(console).with_retry(settings.retry);

    let width_mm = prompt.request_with(&settings.width.request())?;
    let height_mm = prompt.request_with(&settings.height.request())?;
    let page_count = prompt.request_with(&settings.page_count.request())?;

    Ok(BookWeightInput {
        width_mm,
        height_mm,
        page_count,
    })
}

/// Run a full session: prompt for every input, then calculate.
pub fn run_session<C: Console>(console: C, settings: &CalculatorSettings) -> Result<BookWeightResult, PromptError> {
    let input = collect_input(console, settings)?;
    let result = calculate(&input);

    info!(
        width_mm = input.width_mm,
        height_mm = input.height_mm,
        page_count = input.page_count,
        book_weight_kg = result.book_weight_kg,
        "estimated book weight"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{Bounds, RetryPolicy, ScriptedConsole};
    use crate::settings::BoundsPolicy;

    #[test]
    fn test_prompts_in_order() {
        let mut console = ScriptedConsole::new(["150", "200", "300"]);
        let input = collect_input(&mut console, &CalculatorSettings::default()).unwrap();

        assert_eq!(
            input,
            BookWeightInput {
                width_mm: 150,
                height_mm: 200,
                page_count: 300,
            }
        );
        assert_eq!(
            console.prompts,
            vec![
                "How wide is your book in mm?",
                "How tall is your book in mm?",
                "How many pages in your book?",
            ]
        );
    }

    #[test]
    fn test_dimension_cap_differs_from_page_cap() {
        // 2000 is too wide but a fine page count under the capped policy
        let mut console = ScriptedConsole::new(["2000", "150", "200", "2000"]);
        let input = collect_input(&mut console, &CalculatorSettings::default()).unwrap();

        assert_eq!(input.width_mm, 150);
        assert_eq!(input.page_count, 2000);
        assert_eq!(console.warnings, vec!["Number less than 1000 please"]);
    }

    #[test]
    fn test_non_negative_policy_allows_zero() {
        let settings = CalculatorSettings::for_policy(BoundsPolicy::NonNegative);
        let mut console = ScriptedConsole::new(["-1", "0", "0", "0"]);
        let result = run_session(&mut console, &settings).unwrap();

        assert_eq!(result.book_weight_kg, 0.0);
        assert_eq!(console.warnings, vec!["Number greater than 0 please"]);
    }

    #[test]
    fn test_scenario_weight() {
        let mut console = ScriptedConsole::new(["150", "200", "300"]);
        let result = run_session(&mut console, &CalculatorSettings::default()).unwrap();

        assert_eq!(result.page_area_sq_mm, 30000.0);
        assert!((result.page_weight_g - 2.405).abs() < 1e-3);
        assert!((result.book_weight_g - 721.5).abs() < 1e-2);
        assert!((result.book_weight_kg - 0.7215).abs() < 1e-4);
    }

    #[test]
    fn test_closed_mid_session() {
        let mut console = ScriptedConsole::new(["150"]);
        let err = run_session(&mut console, &CalculatorSettings::default()).unwrap_err();
        assert!(matches!(err, PromptError::InputClosed));
        assert_eq!(console.prompts.len(), 2);
    }

    #[test]
    fn test_retry_policy_applies_to_every_prompt() {
        let mut settings = CalculatorSettings::default().with_retry(RetryPolicy::Limited(1));
        settings.height.bounds = Bounds::new(10, 20);

        let mut console = ScriptedConsole::new(["150", "5", "15"]);
        let err = run_session(&mut console, &settings).unwrap_err();
        assert_eq!(err.error_code(), "RETRIES_EXHAUSTED");
    }
}
