use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::AppError;

/// A validated product identifier.
///
/// Guarantees:
/// - Strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    pub fn new(value: u32) -> Result<Self, AppError> {
        if value == 0 {
            return Err(AppError::InvalidProductId(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 =
            s.trim().parse().map_err(|_| AppError::InvalidProductId(s.to_string()))?;
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u32::deserialize(deserializer)?;
        ProductId::new(value).map_err(serde::de::Error::custom)
    }
}
