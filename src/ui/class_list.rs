// SPDX-License-Identifier: MPL-2.0
//! Ordered set of style class tokens.
//!
//! Components describe their appearance as BEM-style tokens
//! (`button--type-outline`, `spinner__icon--small`). The Iced style functions
//! consume the typed equivalents; the tokens are the stable, host-independent
//! description of the same decision.

use std::fmt;

/// Space-separated list of class tokens, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `token` unless it is empty or already present.
    #[must_use]
    pub fn with(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        if !token.is_empty() && !self.contains(&token) {
            self.0.push(token);
        }
        self
    }

    /// Appends `token` only when `condition` holds.
    #[must_use]
    pub fn with_if(self, token: impl Into<String>, condition: bool) -> Self {
        if condition {
            self.with(token)
        } else {
            self
        }
    }

    /// Appends every token of `other`, keeping order.
    #[must_use]
    pub fn merge(self, other: ClassList) -> Self {
        other.0.into_iter().fold(self, ClassList::with)
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}
