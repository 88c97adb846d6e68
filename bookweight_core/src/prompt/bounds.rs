//! Inclusive integer bounds for a prompt.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::PromptRejection;

/// Inclusive `[min, max]` range accepted by a prompt.
///
/// Either side may be open. `Bounds::default()` accepts every integer.
///
/// ## JSON Example
///
/// ```json
/// { "min": 1, "max": 1000 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bounds {
    /// Smallest accepted value, if any
    #[serde(default)]
    pub min: Option<i64>,

    /// Largest accepted value, if any
    #[serde(default)]
    pub max: Option<i64>,
}

impl Bounds {
    /// Accept every integer.
    pub const UNBOUNDED: Bounds = Bounds { min: None, max: None };

    /// Closed range `[min, max]`
    pub fn new(min: i64, max: i64) -> Self {
        Bounds {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Everything from `min` upwards
    pub fn at_least(min: i64) -> Self {
        Bounds {
            min: Some(min),
            max: None,
        }
    }

    /// Everything up to `max`
    pub fn at_most(max: i64) -> Self {
        Bounds {
            min: None,
            max: Some(max),
        }
    }

    /// Replace the upper bound, keeping the lower one.
    pub fn with_max(self, max: i64) -> Self {
        Bounds {
            max: Some(max),
            ..self
        }
    }

    /// Whether `value` lies inside the bounds.
    pub fn contains(&self, value: i64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    /// `false` when no value could ever satisfy these bounds.
    pub fn is_consistent(&self) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }

    /// Pass `value` through, or reject it as out of bounds.
    pub fn check(&self, value: i64) -> Result<i64, PromptRejection> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(PromptRejection::OutOfBounds { value, bounds: *self })
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(min) = self.min {
            write!(f, "{}", min)?;
        }
        f.write_str("..")?;
        if let Some(max) = self.max {
            write!(f, "={}", max)?;
        }
        Ok(())
    }
}
