// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

/// Token occurrence counts that remember first-seen order.
///
/// Ranking is by count descending; equal counts keep the order in which the
/// tokens first appeared in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token in `tokens`.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.add(token);
        }
        table
    }

    /// Record one occurrence of `token`.
    pub fn add<S: Into<String>>(&mut self, token: S) {
        let token = token.into();
        match self.index.get(&token) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(token.clone(), self.entries.len());
                self.entries.push((token, 1));
            }
        }
    }

    pub fn get(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// The `n` most frequent tokens. Returns every entry when `n` exceeds
    /// the number of distinct tokens.
    pub fn top(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.entries.clone();
        // sort_by is stable, so first-seen order survives among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}
