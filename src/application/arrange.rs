//! Category review and arrangement use cases

use crate::domain::arranger::group;
use crate::domain::classifier::category_of;
use crate::domain::{Category, Tag, Taxonomy};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, TagRepository};

/// Owned name/color pair of a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLabel {
    pub name: String,
    pub color: String,
}

impl From<&Category> for CategoryLabel {
    fn from(category: &Category) -> Self {
        CategoryLabel {
            name: category.name.clone(),
            color: category.color.clone(),
        }
    }
}

/// A tag together with the category that owns it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedTag {
    pub tag: Tag,
    pub category: Option<CategoryLabel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: CategoryLabel,
    pub tags: Vec<Tag>,
}

/// Grouped view of the tag list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub uncategorized: Vec<Tag>,
    pub groups: Vec<CategoryGroup>,
    /// Whether arranging reorders the stored list
    pub changed: bool,
}

impl Review {
    /// Tags in arranged order
    pub fn tags(&self) -> Vec<Tag> {
        let mut tags = self.uncategorized.clone();
        for group in &self.groups {
            tags.extend(group.tags.iter().cloned());
        }
        tags
    }
}

/// Service for reviewing and arranging tags by category
pub struct ArrangeService {
    repository: FileSystemRepository,
}

impl ArrangeService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ArrangeService { repository }
    }

    fn load(&self) -> Result<(Vec<Tag>, Taxonomy)> {
        let config = self.repository.load_config()?;
        let taxonomy = self.repository.load_taxonomy(&config)?;
        let tags = self.repository.load_tags()?;
        Ok((tags, taxonomy))
    }

    /// Each stored tag in list order with its category
    pub fn annotate(&self) -> Result<Vec<AnnotatedTag>> {
        let (tags, taxonomy) = self.load()?;
        Ok(tags
            .into_iter()
            .map(|tag| {
                let category = category_of(&tag, &taxonomy).map(CategoryLabel::from);
                AnnotatedTag { tag, category }
            })
            .collect())
    }

    /// Group the stored tags without saving
    pub fn review(&self) -> Result<Review> {
        let (tags, taxonomy) = self.load()?;
        Ok(build_review(&tags, &taxonomy))
    }

    /// Group the stored tags and save them in arranged order
    pub fn apply(&self) -> Result<Review> {
        let (tags, taxonomy) = self.load()?;
        let review = build_review(&tags, &taxonomy);

        if review.changed {
            self.repository.save_tags(&review.tags())?;
            log::info!("Arranged {} tags", tags.len());
        } else {
            log::debug!("Tags already arranged");
        }

        Ok(review)
    }
}

fn build_review(tags: &[Tag], taxonomy: &Taxonomy) -> Review {
    let arrangement = group(tags, taxonomy);

    let review = Review {
        uncategorized: arrangement.uncategorized,
        groups: arrangement
            .categorized
            .into_iter()
            .map(|(category, tags)| CategoryGroup {
                category: CategoryLabel::from(category),
                tags,
            })
            .collect(),
        changed: false,
    };

    let changed = review.tags() != tags;
    Review { changed, ..review }
}
