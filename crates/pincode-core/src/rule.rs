//! Input rules applied to typed characters

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::numeric;

/// Validation policy for segment input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputRule {
    /// Only text that reads as a non-negative number is accepted
    #[default]
    OnlyNumber,
    /// Any character is accepted
    All,
}

impl InputRule {
    /// Every rule, in selector order
    pub const ALL_RULES: [InputRule; 2] = [InputRule::OnlyNumber, InputRule::All];

    /// Selector label
    pub fn as_str(&self) -> &'static str {
        match self {
            InputRule::OnlyNumber => "ONLY_NUMBER",
            InputRule::All => "ALL",
        }
    }

    /// Whether cleaned keystroke text passes this rule
    pub fn accepts(&self, cleaned: &str) -> bool {
        match self {
            InputRule::All => true,
            InputRule::OnlyNumber => numeric::is_non_negative_number(cleaned),
        }
    }

    /// The other rule (the selector only has two options)
    pub fn toggled(&self) -> Self {
        match self {
            InputRule::OnlyNumber => InputRule::All,
            InputRule::All => InputRule::OnlyNumber,
        }
    }
}

impl fmt::Display for InputRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputRule {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ONLY_NUMBER" => Ok(InputRule::OnlyNumber),
            "ALL" => Ok(InputRule::All),
            _ => Err(FormError::InvalidRule(s.to_string())),
        }
    }
}
