//! Clause table model.
//!
//! A clause table is the raw, mutable form of a username policy: an ordered
//! mapping from clause name to the clause's argument text, exactly as it
//! appears between the parentheses of the policy string.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use warden_core::error::Result;

use crate::model::UsernamePolicy;
use crate::provider::ProviderRegistry;

/// Separator between clauses in the textual form.
pub const CLAUSE_SEPARATOR: &str = " and ";

/// An ordered table of policy clauses.
///
/// Names are unique. Every read, iteration and serialization follows
/// insertion order; overwriting an existing name with [`ClauseTable::put`]
/// keeps the name at its original position.
///
/// The table is a plain single-owner value. Use [`Clone`] to fork an
/// independent copy before handing it to another owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub struct ClauseTable {
    /// Clause names in insertion order.
    order: Vec<String>,

    /// Clause arguments, indexed by name.
    arguments: HashMap<String, Option<String>>,
}

impl ClauseTable {
    /// Create an empty clause table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the textual form of a policy.
    ///
    /// The text is split on the literal separator `" and "` and every
    /// segment is trimmed. A segment without `(` is a bare clause name.
    /// Otherwise the trimmed text before the first `(` is the name and the
    /// text between that `(` and the segment's final character is the
    /// argument, taken verbatim. The final character is assumed to be `)`
    /// and is dropped without being checked.
    ///
    /// Parsing never fails: absent or blank text yields an empty table and
    /// malformed segments are accepted as they are. Trailing empty segments
    /// (text ending with the separator) are ignored.
    ///
    /// # Arguments
    ///
    /// * `raw` - The policy text, if any.
    ///
    /// # Returns
    ///
    /// The parsed clause table.
    pub fn parse(raw: Option<&str>) -> Self {
        let mut table = Self::new();

        let raw = match raw {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return table,
        };

        let mut segments: Vec<&str> = raw.split(CLAUSE_SEPARATOR).collect();
        while segments.last().is_some_and(|segment| segment.is_empty()) {
            segments.pop();
        }

        for segment in segments {
            let segment = segment.trim();

            match segment.find('(') {
                None => {
                    table.put(segment, None);
                }
                Some(open) => {
                    let name = segment[..open].trim();

                    // Drop exactly one trailing character, whatever it is.
                    let end = segment
                        .char_indices()
                        .next_back()
                        .map_or(segment.len(), |(idx, _)| idx);
                    let argument = segment.get(open + 1..end).unwrap_or("");

                    table.put(name, Some(argument));
                }
            }
        }

        log::trace!("Parsed {} clause(s) from policy text", table.len());
        table
    }

    /// Check whether a clause is present.
    pub fn contains(&self, name: &str) -> bool {
        self.arguments.contains_key(name)
    }

    /// Get the argument of a clause.
    ///
    /// # Returns
    ///
    /// * `None` - If no clause with this name is present.
    /// * `Some(None)` - If the clause was declared without an argument.
    /// * `Some(Some(argument))` - The raw argument text.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.arguments.get(name).map(|argument| argument.as_deref())
    }

    /// Insert or overwrite a clause.
    ///
    /// An existing clause keeps its position; a new clause is appended.
    ///
    /// # Returns
    ///
    /// The table, for chaining.
    pub fn put(&mut self, name: impl Into<String>, argument: Option<&str>) -> &mut Self {
        let name = name.into();
        let argument = argument.map(str::to_string);

        if let Some(existing) = self.arguments.get_mut(&name) {
            *existing = argument;
        } else {
            self.order.push(name.clone());
            self.arguments.insert(name, argument);
        }

        self
    }

    /// Remove a clause if present.
    ///
    /// # Returns
    ///
    /// The table, for chaining.
    pub fn remove(&mut self, name: &str) -> &mut Self {
        if self.arguments.remove(name).is_some() {
            self.order.retain(|existing| existing != name);
        }

        self
    }

    /// Number of clauses.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check whether the table holds no clauses.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Clause names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Clauses in order, as `(name, argument)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.order.iter().map(move |name| {
            let argument = self.arguments.get(name).and_then(|argument| argument.as_deref());
            (name.as_str(), argument)
        })
    }

    /// Render the canonical textual form.
    ///
    /// Clauses are joined with `" and "`. An argument is emitted verbatim in
    /// parentheses unless it is absent or blank.
    ///
    /// # Returns
    ///
    /// The policy text, or `None` if the table is empty. The textual form
    /// has no representation for an empty table, so this never returns an
    /// empty string.
    pub fn to_policy_string(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let mut out = String::new();
        for (i, (name, argument)) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(CLAUSE_SEPARATOR);
            }

            out.push_str(name);

            if let Some(argument) = argument.filter(|argument| !argument.trim().is_empty()) {
                out.push('(');
                out.push_str(argument);
                out.push(')');
            }
        }

        Some(out)
    }

    /// Validate this table against a provider registry.
    ///
    /// See [`crate::engine::validate`].
    pub fn build<R>(&self, registry: &R) -> Result<UsernamePolicy>
    where
        R: ProviderRegistry + ?Sized,
    {
        crate::engine::validate(registry, self)
    }
}

impl fmt::Display for ClauseTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_policy_string() {
            Some(text) => write!(f, "{}", text),
            None => Ok(()),
        }
    }
}

impl From<Option<String>> for ClauseTable {
    fn from(raw: Option<String>) -> Self {
        Self::parse(raw.as_deref())
    }
}

impl From<&str> for ClauseTable {
    fn from(raw: &str) -> Self {
        Self::parse(Some(raw))
    }
}

impl From<ClauseTable> for Option<String> {
    fn from(table: ClauseTable) -> Self {
        table.to_policy_string()
    }
}
