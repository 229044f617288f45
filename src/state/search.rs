#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::SearchResult;

/// Raised before any request is made when a query field is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SearchInputError {
    #[error("both stops are required")]
    MissingStop,
}

/// Stop-to-stop search state. Stateless between searches apart from the
/// last result set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    pub from: String,
    pub to: String,
    pub results: Vec<SearchResult>,
    pub error: Option<String>,
}

impl SearchState {
    /// Validate the query fields. No request may be issued unless this
    /// returns the `(from, to)` pair.
    pub fn validated_query(&self) -> Result<(String, String), SearchInputError> {
        if self.from.is_empty() || self.to.is_empty() {
            return Err(SearchInputError::MissingStop);
        }
        Ok((self.from.clone(), self.to.clone()))
    }

    /// Apply a search response body, replacing the results wholesale in
    /// server-provided order.
    ///
    /// The API signals "no matches" with a non-array body, so anything that
    /// is not an array clears the results rather than failing. Rows that do
    /// not decode are dropped.
    pub fn apply_response(&mut self, body: serde_json::Value) {
        self.error = None;
        self.results = match body {
            serde_json::Value::Array(rows) => rows
                .into_iter()
                .filter_map(|row| serde_json::from_value(row).ok())
                .collect(),
            _ => Vec::new(),
        };
    }
}
