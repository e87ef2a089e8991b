//! Row filtering ahead of graph construction.

use std::collections::HashSet;

use nutrinet_core::Row;

/// Restricts a row sequence to selected compounds and foods.
///
/// An empty selection for a role places no restriction on that role, so
/// the default filter keeps every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilter {
    /// Keep only rows whose compound is listed. Empty keeps all.
    pub compounds: HashSet<String>,
    /// Keep only rows whose food is listed. Empty keeps all.
    pub foods: HashSet<String>,
}

impl RowFilter {
    /// Create a filter that keeps every row.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a compound.
    #[must_use]
    pub fn with_compound(mut self, compound: impl Into<String>) -> Self {
        self.compounds.insert(compound.into());
        self
    }

    /// Select several compounds.
    #[must_use]
    pub fn with_compounds<I>(mut self, compounds: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.compounds.extend(compounds.into_iter().map(Into::into));
        self
    }

    /// Select a food.
    #[must_use]
    pub fn with_food(mut self, food: impl Into<String>) -> Self {
        self.foods.insert(food.into());
        self
    }

    /// Select several foods.
    #[must_use]
    pub fn with_foods<I>(mut self, foods: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.foods.extend(foods.into_iter().map(Into::into));
        self
    }

    /// Returns true if the filter keeps every row.
    #[inline]
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.compounds.is_empty() && self.foods.is_empty()
    }

    /// Check whether a row passes the filter.
    #[must_use]
    pub fn matches(&self, row: &Row) -> bool {
        (self.compounds.is_empty() || self.compounds.contains(row.compound()))
            && (self.foods.is_empty() || self.foods.contains(row.food()))
    }

    /// Lazily keep the rows that pass the filter.
    pub fn apply<'a, I>(&'a self, rows: I) -> impl Iterator<Item = Row> + 'a
    where
        I: IntoIterator<Item = Row>,
        I::IntoIter: 'a,
    {
        rows.into_iter().filter(move |row| self.matches(row))
    }
}
