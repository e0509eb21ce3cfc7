//! Stable grouping of word pairs by category.
//!
//! Categories come out in first-seen order, and pairs keep their relative order inside a category.
//! This is what the canonical form is built on.
use std::collections::HashMap;

use super::WordPair;

/// Pairs sharing a category, borrowed from the record they come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub pairs: Vec<&'a WordPair>,
}

/// Group `pairs` by category.
pub fn group_by_category(pairs: &[WordPair]) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for pair in pairs {
        let category = pair.category.as_str();
        match positions.get(category) {
            Some(&pos) => groups[pos].pairs.push(pair),
            None => {
                positions.insert(category, groups.len());
                groups.push(CategoryGroup {
                    category,
                    pairs: vec![pair],
                });
            }
        }
    }

    groups
}

/// Flatten groups back into a sequence of pairs, categories contiguous.
pub fn flatten(groups: &[CategoryGroup<'_>]) -> Vec<WordPair> {
    groups
        .iter()
        .flat_map(|g| g.pairs.iter().map(|p| (*p).clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interleaved() -> Vec<WordPair> {
        vec![
            WordPair::new("Hello", "Hola", "phrases"),
            WordPair::new("bread", "pan", "food"),
            WordPair::new("mother", "madre", "family"),
            WordPair::new("Please", "Por favor", "phrases"),
            WordPair::new("rice", "arroz", "food"),
            WordPair::new("Thank you", "Gracias", "phrases"),
        ]
    }

    #[test]
    fn first_seen_order() {
        let pairs = interleaved();
        let groups = group_by_category(&pairs);
        let categories: Vec<&str> = groups.iter().map(|g| g.category).collect();
        assert_eq!(categories, vec!["phrases", "food", "family"]);

        let phrases: Vec<&str> = groups[0]
            .pairs
            .iter()
            .map(|p| p.source_word.as_str())
            .collect();
        assert_eq!(phrases, vec!["Hello", "Please", "Thank you"]);
    }

    #[test]
    fn empty() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn regrouping_is_stable() {
        let pairs = interleaved();
        let once = flatten(&group_by_category(&pairs));
        let twice = flatten(&group_by_category(&once));
        assert_eq!(once, twice);
        assert_eq!(group_by_category(&once), group_by_category(&pairs));
    }

    #[test]
    fn no_pair_lost_or_duplicated() {
        let pairs = interleaved();

        // rotate the input so that category order changes
        for shift in 0..pairs.len() {
            let mut rotated = pairs.clone();
            rotated.rotate_left(shift);

            let mut flat = flatten(&group_by_category(&rotated));
            assert_eq!(flat.len(), rotated.len());

            let mut expected = rotated.clone();
            flat.sort_by(|a, b| a.source_word.cmp(&b.source_word));
            expected.sort_by(|a, b| a.source_word.cmp(&b.source_word));
            assert_eq!(flat, expected);
        }
    }

    #[test]
    fn categories_are_contiguous() {
        let pairs = interleaved();
        let flat = flatten(&group_by_category(&pairs));
        let cats: Vec<&str> = flat.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(
            cats,
            vec!["phrases", "phrases", "phrases", "food", "food", "family"]
        );
    }
}
