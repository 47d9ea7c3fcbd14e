//! Request parameter assembly

/// Ordered request parameters, built fresh for every call.
///
/// Keys may repeat: list-valued fields such as `target_languages[]` expand to
/// one pair per element, which is how the service expects them on the wire.
#[derive(Debug, Clone, Default)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a scalar field
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), value.to_string()));
    }

    /// Append a scalar field, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Append a list field as repeated pairs under the same key
    pub fn push_list<I, V>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        for value in values {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    /// Value of the first pair with the given key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the parameter set is empty
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Borrow the pairs for query/form serialization
    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}
