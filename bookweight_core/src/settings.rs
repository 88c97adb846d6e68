//! # Calculator Settings
//!
//! Per-prompt messages and bounds, plus the retry policy shared by all
//! prompts. Settings are plain JSON so they can be handed in by a caller,
//! and any field left out falls back to the default.
//!
//! ## Bounds Policies
//!
//! Three validation rules have been used for the same prompts over time.
//! Rather than silently picking one, each is available as a preset:
//!
//! | Policy | Width / height | Page count |
//! |--------|----------------|------------|
//! | [`BoundsPolicy::Capped`] (default) | `1..=1000` | `1..=15000` |
//! | [`BoundsPolicy::Unbounded`] | any integer | any integer |
//! | [`BoundsPolicy::NonNegative`] | `0..` | `0..` |
//!
//! ## Example
//!
//! ```rust
//! use bookweight_core::prompt::Bounds;
//! use bookweight_core::settings::{BoundsPolicy, CalculatorSettings};
//!
//! let settings = CalculatorSettings::for_policy(BoundsPolicy::NonNegative);
//! assert_eq!(settings.page_count.bounds, Bounds::at_least(0));
//!
//! let custom = CalculatorSettings::from_json(r#"{ "retry": { "Limited": 3 } }"#).unwrap();
//! assert_eq!(custom.width.bounds, Bounds::new(1, 1000));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::prompt::{Bounds, PromptRequest, RetryPolicy};

/// Smallest value the capped policy accepts
pub const DEFAULT_MIN: i64 = 1;

/// Largest page count the capped policy accepts
pub const DEFAULT_MAX: i64 = 15000;

/// Largest page width or height (mm) the capped policy accepts
pub const DIMENSION_MAX_MM: i64 = 1000;

/// Preset validation rules for the three prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoundsPolicy {
    /// `[1, 15000]`, with width and height capped at 1000 mm
    #[default]
    Capped,
    /// Accept any integer
    Unbounded,
    /// Accept zero and above
    NonNegative,
}

impl BoundsPolicy {
    /// Bounds for the page width and height prompts
    pub fn dimension_bounds(self) -> Bounds {
        match self {
            BoundsPolicy::Capped => self.count_bounds().with_max(DIMENSION_MAX_MM),
            _ => self.count_bounds(),
        }
    }

    /// Bounds for the page count prompt
    pub fn count_bounds(self) -> Bounds {
        match self {
            BoundsPolicy::Capped => Bounds::new(DEFAULT_MIN, DEFAULT_MAX),
            BoundsPolicy::Unbounded => Bounds::UNBOUNDED,
            BoundsPolicy::NonNegative => Bounds::at_least(0),
        }
    }
}

/// Message and bounds for one prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSettings {
    /// Text shown to the user
    pub message: String,

    /// Accepted range, inclusive
    #[serde(default)]
    pub bounds: Bounds,
}

impl FieldSettings {
    pub fn new(message: impl Into<String>, bounds: Bounds) -> Self {
        FieldSettings {
            message: message.into(),
            bounds,
        }
    }

    /// The prompt request these settings describe
    pub fn request(&self) -> PromptRequest {
        PromptRequest::new(self.message.clone()).with_bounds(self.bounds)
    }
}

/// Settings for a full calculator session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Page width prompt
    pub width: FieldSettings,

    /// Page height prompt
    pub height: FieldSettings,

    /// Page count prompt
    pub page_count: FieldSettings,

    /// Retry policy applied to every prompt
    pub retry: RetryPolicy,
}

impl CalculatorSettings {
    /// Default messages with the bounds of `policy`.
    pub fn for_policy(policy: BoundsPolicy) -> Self {
        CalculatorSettings {
            width: FieldSettings::new("How wide is your book in mm?", policy.dimension_bounds()),
            height: FieldSettings::new("How tall is your book in mm?", policy.dimension_bounds()),
            page_count: FieldSettings::new("How many pages in your book?", policy.count_bounds()),
            retry: RetryPolicy::Unbounded,
        }
    }

    /// Replace the retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Parse settings from JSON and validate them.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: CalculatorSettings =
            serde_json::from_str(json).map_err(|e| CalcError::serialization(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalcError::serialization(e.to_string()))
    }

    /// Reject settings no reply could ever satisfy.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, settings) in [
            ("width", &self.width),
            ("height", &self.height),
            ("page_count", &self.page_count),
        ] {
            if !settings.bounds.is_consistent() {
                return Err(CalcError::invalid_input(
                    format!("{}.bounds", field),
                    settings.bounds.to_string(),
                    "Minimum exceeds maximum",
                ));
            }
        }
        Ok(())
    }
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings::for_policy(BoundsPolicy::default())
    }
}
