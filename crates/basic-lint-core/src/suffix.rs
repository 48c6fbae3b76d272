//! Suffix matching for ignore and line-ending rules.

use std::collections::HashSet;

/// An immutable set of path suffixes.
///
/// Matching probes only the suffix lengths that actually occur in the set,
/// so a lookup costs at most `max_len - min_len + 1` hash probes no matter
/// how many suffixes are registered.
///
/// Lengths are counted in characters, so a probe never splits a multi-byte
/// code point.
///
/// # Example
///
/// ```
/// use basic_lint_core::SuffixSet;
///
/// let set = SuffixSet::new([".png", "/build/"]);
/// assert!(set.matches("./assets/logo.png"));
/// assert!(set.matches("./target/build/"));
/// assert!(!set.matches("./build"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SuffixSet {
    suffixes: HashSet<String>,
    /// `(min_len, max_len)` in characters, `None` when the set is empty.
    lengths: Option<(usize, usize)>,
}

impl SuffixSet {
    /// Builds a set from the given suffixes.
    #[must_use]
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let suffixes: HashSet<String> = suffixes.into_iter().map(Into::into).collect();
        let lengths = suffixes
            .iter()
            .map(|s| s.chars().count())
            .fold(None, |acc: Option<(usize, usize)>, len| match acc {
                None => Some((len, len)),
                Some((min, max)) => Some((min.min(len), max.max(len))),
            });

        Self { suffixes, lengths }
    }

    /// Returns true if `candidate` ends with any suffix in the set.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        let Some((min_len, max_len)) = self.lengths else {
            return false;
        };

        // Byte offsets where the last 1, 2, 3, ... characters start.
        let mut starts = candidate.char_indices().rev().map(|(i, _)| i);

        for len in 0..=max_len {
            let start = if len == 0 {
                candidate.len()
            } else {
                match starts.next() {
                    Some(i) => i,
                    None => break,
                }
            };
            if len >= min_len && self.suffixes.contains(&candidate[start..]) {
                return true;
            }
        }

        false
    }

    /// Returns the number of suffixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    /// Returns true if the set holds no suffixes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Returns the suffixes in sorted order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.suffixes.iter().map(String::as_str).collect();
        out.sort_unstable();
        out
    }
}

impl<S: Into<String>> FromIterator<S> for SuffixSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
