// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Free-text filtering over projected rows.

use std::borrow::Cow;

/// Implemented by row types that can be searched.
pub trait Searchable {
    /// The row's searchable fields, concatenated.
    fn haystack(&self) -> String;
}

/// Keep the rows whose haystack contains the query as a case-insensitive
/// substring.
///
/// An empty or whitespace-only query borrows the input unchanged, so
/// callers can cheaply detect the no-op case. Matching rows keep their
/// original relative order; there is no re-sort and no hidden state.
pub fn apply_filter<'a, T>(rows: &'a [T], query: &str) -> Cow<'a, [T]>
where
    T: Searchable + Clone,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Cow::Borrowed(rows);
    }

    Cow::Owned(
        rows.iter()
            .filter(|row| row.haystack().to_lowercase().contains(&needle))
            .cloned()
            .collect(),
    )
}
