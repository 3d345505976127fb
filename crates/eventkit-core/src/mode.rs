use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use eventkit_canonical::coerce;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical production token.
pub const PRODUCTION_TOKEN: &str = "prod";
/// Long-form alias accepted for production.
pub const PRODUCTION_ALIAS: &str = "production";
/// Canonical development token.
pub const DEVELOPMENT_TOKEN: &str = "dev";

/// Whether a loosely typed value selects production.
///
/// The value is coerced to a string and lowercased; `prod` and
/// `production` are production. `None`, `null` and anything else are not.
pub fn is_prod_mode(value: Option<&Value>) -> bool {
    is_prod_str(&coerce::to_string(value))
}

/// String form of [`is_prod_mode`].
pub fn is_prod_str(value: &str) -> bool {
    let lowered = value.to_lowercase();
    lowered == PRODUCTION_TOKEN || lowered == PRODUCTION_ALIAS
}

/// Deployment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Anything that is not production.
    #[default]
    #[serde(rename = "dev")]
    Development,
    /// `prod` or `production`; [`FromStr`] ignores case.
    #[serde(rename = "prod", alias = "production")]
    Production,
}

impl Mode {
    /// Classifies a loosely typed value.
    pub fn from_value(value: Option<&Value>) -> Self {
        if is_prod_mode(value) {
            Mode::Production
        } else {
            Mode::Development
        }
    }

    /// True in production.
    pub fn is_production(self) -> bool {
        self == Mode::Production
    }

    /// Canonical token.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => DEVELOPMENT_TOKEN,
            Mode::Production => PRODUCTION_TOKEN,
        }
    }
}

impl FromStr for Mode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if is_prod_str(s) {
            Mode::Production
        } else {
            Mode::Development
        })
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
