//! Ordered, capped list of tags.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Runs of whitespace as matched by a JavaScript `\s`.
    /// Unlike the Unicode `White_Space` class, includes U+FEFF and excludes U+0085.
    static ref WHITESPACE: Regex = Regex::new(
        r"[\t\n\x0B\x0C\r \u{00A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}]+"
    )
    .expect("whitespace pattern should be valid");
}

/// Result of adding raw input to a [`TagList`].
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum AddOutcome {
    /// Segments appended to the list, in order.
    Added(Vec<String>),

    /// Normalized input has one UTF-16 code unit or less.
    TooShort,

    /// Normalized input is already a tag.
    Duplicate,

    /// List already holds its maximum number of tags.
    Full,
}

impl AddOutcome {
    /// Returns whether the list was modified.
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }
}

/// Collapses every run of whitespace into a single space.
///
/// Leading and trailing runs are collapsed, not removed.
pub fn normalize(raw: &str) -> String {
    WHITESPACE.replace_all(raw, " ").into_owned()
}

/// Ordered list of tags with a maximum size.
///
/// # Notes
/// + Validation runs on the whole input of an add, before it is split on commas.
///     A single add containing commas may therefore push the list past
///     `max_tags`, or append segments that are short or duplicated.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct TagList {
    tags: Vec<String>,
    max_tags: usize,
}

impl TagList {
    /// Creates an empty list.
    pub fn new(max_tags: usize) -> Self {
        Self {
            tags: Vec::new(),
            max_tags,
        }
    }

    /// Creates a list holding the given tags.
    /// No validation is performed.
    pub fn with_tags(tags: Vec<String>, max_tags: usize) -> Self {
        Self { tags, max_tags }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn max_tags(&self) -> usize {
        self.max_tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Returns whether no more tags may be added.
    pub fn is_full(&self) -> bool {
        self.tags.len() >= self.max_tags
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Number of tags that may still be added.
    /// Negative if a comma separated add went over the cap.
    pub fn remaining(&self) -> isize {
        self.max_tags as isize - self.tags.len() as isize
    }

    /// Adds raw input to the list.
    ///
    /// See [`Self::add_each`].
    pub fn add(&mut self, raw: &str) -> AddOutcome {
        self.add_each(raw, |_| {})
    }

    /// Adds raw input to the list, calling `on_push` with the current tags
    /// after each appended segment.
    ///
    /// 1. `raw` is normalized with [`normalize`].
    /// 2. Input with one UTF-16 code unit or less, or that equals an existing tag, is rejected.
    /// 3. Nothing is added if the list is full.
    /// 4. Otherwise the input is split on `,` and every segment is appended.
    pub fn add_each(&mut self, raw: &str, mut on_push: impl FnMut(&[String])) -> AddOutcome {
        let tag = normalize(raw);
        if tag.encode_utf16().count() <= 1 {
            return AddOutcome::TooShort;
        }

        if self.contains(&tag) {
            return AddOutcome::Duplicate;
        }

        if self.is_full() {
            return AddOutcome::Full;
        }

        let mut added = Vec::new();
        for segment in tag.split(',') {
            self.tags.push(segment.to_string());
            on_push(&self.tags);
            added.push(segment.to_string());
        }

        AddOutcome::Added(added)
    }

    /// Removes the first occurrence of `tag`, keeping the order of the others.
    ///
    /// # Returns
    /// Index the tag was removed from, or `None` if it was not present.
    pub fn remove(&mut self, tag: &str) -> Option<usize> {
        let index = self.tags.iter().position(|t| t == tag)?;
        self.tags.remove(index);
        Some(index)
    }

    /// Removes all tags.
    pub fn clear(&mut self) {
        self.tags.clear();
    }
}

#[cfg(test)]
#[path = "./tag_list_test.rs"]
mod tag_list_test;
