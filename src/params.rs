use crate::types::RowValues;

/// An insertion-ordered mapping from placeholder name to value.
///
/// This is the parameter set bound into a prepared statement, and also the
/// column-to-value "row" and "where" mappings the facade's CRUD helpers take
/// as input. Names are stored without the `:` prefix; iteration order is
/// insertion order, which fixes clause and column order in generated SQL.
///
/// Inserting under an existing name replaces the value in place, so a name
/// can never appear twice.
///
/// ```rust
/// use sql_facade::prelude::*;
///
/// let row = NamedParams::new()
///     .with("name", RowValues::Text("alice".into()))
///     .with("active", RowValues::Bool(true));
/// assert_eq!(row.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedParams {
    entries: Vec<(String, RowValues)>,
}

impl NamedParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A one-entry mapping, used by the single-condition convenience forms.
    #[must_use]
    pub fn single(name: impl Into<String>, value: RowValues) -> Self {
        let mut params = Self::new();
        params.insert(name, value);
        params
    }

    /// Insert a value, replacing any existing entry with the same name
    /// without disturbing its position.
    pub fn insert(&mut self, name: impl Into<String>, value: RowValues) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Chaining form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: RowValues) -> Self {
        self.insert(name, value);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RowValues> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RowValues)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Iterate names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl<N: Into<String>> FromIterator<(N, RowValues)> for NamedParams {
    fn from_iter<I: IntoIterator<Item = (N, RowValues)>>(iter: I) -> Self {
        let mut params = NamedParams::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

impl From<&[(&str, RowValues)]> for NamedParams {
    fn from(pairs: &[(&str, RowValues)]) -> Self {
        pairs.iter().cloned().collect()
    }
}

impl<const N: usize> From<[(&str, RowValues); N]> for NamedParams {
    fn from(pairs: [(&str, RowValues); N]) -> Self {
        pairs.into_iter().collect()
    }
}
