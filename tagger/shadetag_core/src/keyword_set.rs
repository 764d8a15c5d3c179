//! Frozen keyword vocabularies.

use rustc_hash::FxHashSet;

/// Immutable, case-sensitive set of reserved words.
///
/// Built once and only read afterwards. Lookups are exact: no prefix
/// matching and no case folding.
#[derive(Clone, Debug, Default)]
pub struct KeywordSet {
    words: FxHashSet<Box<str>>,
    /// Longest word in bytes; longer tokens are rejected without hashing.
    max_len: usize,
}

impl KeywordSet {
    /// Build a set from individual words. Duplicates collapse.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        let words: FxHashSet<Box<str>> = words.into_iter().map(Into::into).collect();
        let max_len = words.iter().map(|w| w.len()).max().unwrap_or(0);
        KeywordSet { words, max_len }
    }

    /// Build a set from a whitespace-separated word list such as
    /// `"attribute const uniform varying"`.
    pub fn from_word_list(list: &str) -> Self {
        Self::new(list.split_whitespace())
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && word.len() <= self.max_len && self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in ascending byte order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(AsRef::as_ref).collect();
        words.sort_unstable();
        words
    }
}

impl<S: Into<Box<str>>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_case_sensitive_lookup() {
        let set = KeywordSet::new(["uniform", "vec3"]);
        assert!(set.contains("uniform"));
        assert!(set.contains("vec3"));
        assert!(!set.contains("Uniform"));
        assert!(!set.contains("unif"));
        assert!(!set.contains("uniforms"));
    }

    #[test]
    fn empty_word_never_matches() {
        let set = KeywordSet::new(["int"]);
        assert!(!set.contains(""));
        assert!(!KeywordSet::default().contains(""));
    }

    #[test]
    fn word_list_splits_on_any_whitespace() {
        let set = KeywordSet::from_word_list("  attribute const\nuniform\tvarying  const ");
        assert_eq!(set.len(), 4);
        assert_eq!(set.sorted(), vec!["attribute", "const", "uniform", "varying"]);
    }

    #[test]
    fn collect_from_owned_strings() {
        let set: KeywordSet = vec![String::from("M_PI_F"), String::from("CLK_R")]
            .into_iter()
            .collect();
        assert!(set.contains("M_PI_F"));
        assert!(!set.is_empty());
    }

    #[test]
    fn empty_set_matches_nothing() {
        let set = KeywordSet::default();
        assert!(set.is_empty());
        assert!(!set.contains("int"));
    }
}
