//! Splitting a raw input line into context words and a trailing prefix.

/// Largest context the dataset has records for (5-grams).
pub const MAX_CONTEXT_WORDS: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Up to [`MAX_CONTEXT_WORDS`] complete words, most recent last.
    pub context: Vec<String>,
    /// Partially typed final word. Empty when the input ends with a space.
    pub prefix: String,
}

impl Query {
    /// Parse `input`, splitting on the space character only.
    ///
    /// If the input does not end with a space, its last token is the prefix
    /// and never part of the context. Empty tokens from consecutive spaces
    /// are skipped.
    pub fn parse(input: &str) -> Self {
        let mut elems: Vec<&str> = input.split(' ').collect();

        let mut prefix = String::new();
        if let Some(&last) = elems.last() {
            if !last.is_empty() {
                prefix = last.to_string();
                elems.pop();
            }
        }

        let mut context: Vec<String> = elems
            .iter()
            .rev()
            .filter(|e| !e.is_empty())
            .take(MAX_CONTEXT_WORDS)
            .map(|e| e.to_string())
            .collect();
        context.reverse();

        Self { context, prefix }
    }

    pub fn is_empty(&self) -> bool {
        self.context.is_empty() && self.prefix.is_empty()
    }

    /// Every suffix of the context, longest first.
    pub fn context_suffixes(&self) -> impl Iterator<Item = &[String]> + '_ {
        (0..self.context.len()).map(move |i| &self.context[i..])
    }
}

pub fn parse_query(input: &str) -> Query {
    Query::parse(input)
}
