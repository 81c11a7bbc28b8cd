//! Category-based regrouping of a tag list

use crate::domain::classifier::classify;
use crate::domain::{Category, Tag, Taxonomy};

/// Tags partitioned by category, input order kept inside each bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement<'a> {
    pub uncategorized: Vec<Tag>,
    pub categorized: Vec<(&'a Category, Vec<Tag>)>,
}

impl Arrangement<'_> {
    /// Flatten: uncategorized first, then categories in taxonomy order
    pub fn into_tags(self) -> Vec<Tag> {
        let mut tags = self.uncategorized;
        for (_, bucket) in self.categorized {
            tags.extend(bucket);
        }
        tags
    }

    pub fn len(&self) -> usize {
        self.uncategorized.len()
            + self
                .categorized
                .iter()
                .map(|(_, bucket)| bucket.len())
                .sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Single stable pass: one bucket per category plus the uncategorized one
pub fn group<'a>(tags: &[Tag], taxonomy: &'a Taxonomy) -> Arrangement<'a> {
    let mut uncategorized = Vec::new();
    let mut categorized: Vec<(&Category, Vec<Tag>)> = taxonomy
        .categories()
        .iter()
        .map(|category| (category, Vec::new()))
        .collect();

    for tag in tags {
        match classify(tag, taxonomy) {
            Some(index) => categorized[index].1.push(tag.clone()),
            None => uncategorized.push(tag.clone()),
        }
    }

    Arrangement {
        uncategorized,
        categorized,
    }
}

/// Reorder tags by category, uncategorized tags first
pub fn arrange(tags: &[Tag], taxonomy: &Taxonomy) -> Vec<Tag> {
    group(tags, taxonomy).into_tags()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(text: &str) -> Tag {
        Tag::from_text(text)
    }

    fn texts(tags: &[Tag]) -> Vec<&str> {
        tags.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_stable_partition_uncategorized_first() {
        let taxonomy =
            Taxonomy::new(vec![Category::new("cat1", "#111", ["A", "C"])]).unwrap();
        let input = vec![tag("A"), tag("B"), tag("C")];

        assert_eq!(texts(&arrange(&input, &taxonomy)), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_categories_follow_taxonomy_order() {
        let taxonomy = Taxonomy::new(vec![
            Category::new("first", "#111", ["f1", "f2"]),
            Category::new("second", "#222", ["s1"]),
        ])
        .unwrap();
        let input = vec![tag("s1"), tag("u1"), tag("f2"), tag("(f1)"), tag("u2")];

        assert_eq!(
            texts(&arrange(&input, &taxonomy)),
            vec!["u1", "u2", "f2", "(f1)", "s1"]
        );
    }

    #[test]
    fn test_arrange_is_idempotent() {
        let taxonomy = Taxonomy::builtin();
        let input = vec![
            tag("8k"),
            tag("cat"),
            tag("((shiny skin))"),
            tag("detailed background"),
            tag("{realistic}"),
            tag("dog"),
        ];

        let once = arrange(&input, &taxonomy);
        let twice = arrange(&once, &taxonomy);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_arrange_preserves_ids() {
        let taxonomy = Taxonomy::new(vec![Category::new("c", "#111", ["x"])]).unwrap();
        let input = vec![Tag::new("id-x", "x"), Tag::new("id-y", "y")];

        let output = arrange(&input, &taxonomy);
        assert_eq!(output, vec![Tag::new("id-y", "y"), Tag::new("id-x", "x")]);
    }

    #[test]
    fn test_arrange_empty_input() {
        assert!(arrange(&[], &Taxonomy::builtin()).is_empty());
    }

    #[test]
    fn test_group_exposes_buckets() {
        let taxonomy = Taxonomy::builtin();
        let input = vec![tag("cat"), tag("8k"), tag("smooth")];

        let arrangement = group(&input, &taxonomy);
        assert_eq!(texts(&arrangement.uncategorized), vec!["cat"]);
        assert_eq!(arrangement.categorized.len(), taxonomy.len());
        assert_eq!(arrangement.categorized[0].0.name, "picture-quality");
        assert_eq!(texts(&arrangement.categorized[0].1), vec!["8k"]);
        assert_eq!(texts(&arrangement.categorized[1].1), vec!["smooth"]);
        assert!(arrangement.categorized[5].1.is_empty());
        assert_eq!(arrangement.len(), 3);
    }
}
