//! Ingested rows.
//!
//! A [`Row`] is one `(compound, food)` observation handed over by whatever
//! reads the source table. Values are validated here, at ingestion, rather
//! than assumed by column position downstream.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A validated `(compound, food)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Row {
    compound: String,
    food: String,
}

impl Row {
    /// Create a new row, rejecting blank values.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if either value is empty or
    /// whitespace-only.
    pub fn new(compound: impl Into<String>, food: impl Into<String>) -> CoreResult<Self> {
        let compound = compound.into();
        let food = food.into();

        if compound.trim().is_empty() {
            return Err(CoreError::validation(format!("blank compound value (food: {food:?})")));
        }
        if food.trim().is_empty() {
            return Err(CoreError::validation(format!(
                "blank food value (compound: {compound:?})"
            )));
        }

        Ok(Self { compound, food })
    }

    /// The compound (partition A) value.
    #[inline]
    #[must_use]
    pub fn compound(&self) -> &str {
        &self.compound
    }

    /// The food (partition B) value.
    #[inline]
    #[must_use]
    pub fn food(&self) -> &str {
        &self.food
    }

    /// Consume the row into its `(compound, food)` values.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.compound, self.food)
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawRow {
            compound: String,
            food: String,
        }

        let raw = RawRow::deserialize(deserializer)?;
        Self::new(raw.compound, raw.food).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<(&str, &str)> for Row {
    type Error = CoreError;

    fn try_from((compound, food): (&str, &str)) -> CoreResult<Self> {
        Self::new(compound, food)
    }
}

impl TryFrom<(String, String)> for Row {
    type Error = CoreError;

    fn try_from((compound, food): (String, String)) -> CoreResult<Self> {
        Self::new(compound, food)
    }
}
