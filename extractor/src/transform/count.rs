//! Name normalization and occurrence counting.

use std::collections::BTreeMap;

/// Title-case a group name.
///
/// Each whitespace-separated word gets its first alphabetic character
/// upper-cased and every other character lower-cased. Whitespace is kept
/// as is, so `"o'neil-smith  TEAM"` becomes `"O'neil-smith  Team"`.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut capitalize_next = true;

    for ch in name.chars() {
        if ch.is_whitespace() {
            capitalize_next = true;
            out.push(ch);
        } else if capitalize_next && ch.is_alphabetic() {
            capitalize_next = false;
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }

    out
}

/// Occurrences per normalized group name, iterated in ascending name order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupCounter {
    counts: BTreeMap<String, usize>,
}

impl GroupCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold raw names into a counter.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counter = Self::new();
        for token in tokens {
            counter.add(token.as_ref());
        }
        counter
    }

    /// Count one raw name under its title-cased form.
    pub fn add(&mut self, raw: &str) {
        *self.counts.entry(title_case(raw)).or_insert(0) += 1;
    }

    pub fn get(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(name, count)` pairs sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

impl<S: AsRef<str>> FromIterator<S> for GroupCounter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_words() {
        assert_eq!(title_case("team alpha"), "Team Alpha");
        assert_eq!(title_case("TEAM ALPHA"), "Team Alpha");
        assert_eq!(title_case("Team alpha"), "Team Alpha");
        assert_eq!(title_case("red  TEAM\tops"), "Red  Team\tOps");
    }

    #[test]
    fn test_title_case_punctuation() {
        assert_eq!(title_case("o'neil"), "O'neil");
        assert_eq!(title_case("NETWORK-OPS"), "Network-ops");
        assert_eq!(title_case("3rd line"), "3Rd Line");
        assert_eq!(title_case("(emea) desk"), "(Emea) Desk");
    }

    #[test]
    fn test_title_case_non_ascii() {
        assert_eq!(title_case("équipe RÉSEAU"), "Équipe Réseau");
    }

    #[test]
    fn test_case_variants_collapse() {
        let counter = GroupCounter::from_tokens(["team Alpha", "TEAM ALPHA", "Team alpha"]);
        assert_eq!(counter.len(), 1);
        assert_eq!(counter.get("Team Alpha"), 3);
    }

    #[test]
    fn test_total_matches_token_count() {
        let tokens = ["Ops", "Desk", "ops", "Network Ops", "DESK", "desk"];
        let counter: GroupCounter = tokens.iter().collect();
        assert_eq!(counter.total(), tokens.len());
        assert_eq!(counter.get("Desk"), 3);
        assert_eq!(counter.get("Missing"), 0);
    }

    #[test]
    fn test_iteration_sorted() {
        let counter = GroupCounter::from_tokens(["zulu", "Alpha", "mike", "alpha"]);
        let pairs: Vec<_> = counter.iter().collect();
        assert_eq!(pairs, vec![("Alpha", 2), ("Mike", 1), ("Zulu", 1)]);
    }

    #[test]
    fn test_empty_counter() {
        let counter = GroupCounter::from_tokens(Vec::<String>::new());
        assert!(counter.is_empty());
        assert_eq!(counter.total(), 0);
    }
}
