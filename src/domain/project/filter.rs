//! Listing filter and ordering for public project queries

use std::cmp::Ordering;

use super::entity::{Category, Project};

/// Optional narrowing of the public project list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    pub category: Option<Category>,
    pub featured_only: bool,
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn featured_only(mut self) -> Self {
        self.featured_only = true;
        self
    }

    pub fn matches(&self, project: &Project) -> bool {
        if let Some(category) = self.category {
            if project.category() != category {
                return false;
            }
        }

        !self.featured_only || project.is_featured()
    }
}

/// Most recently completed first; ties broken by newest record
pub fn listing_order(a: &Project, b: &Project) -> Ordering {
    b.completion_date()
        .cmp(&a.completion_date())
        .then_with(|| b.created_at().cmp(&a.created_at()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::ProjectId;
    use chrono::{TimeZone, Utc};

    fn project(category: Category, featured: bool, year: i32) -> Project {
        Project::new(
            ProjectId::generate(),
            format!("Project {}", year),
            "Description",
            "/uploads/projects/p.png",
            vec!["Rust".to_string()],
            category,
            Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
        )
        .with_featured(featured)
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = ProjectFilter::new();
        assert!(filter.matches(&project(Category::Other, false, 2020)));
    }

    #[test]
    fn test_category_filter() {
        let filter = ProjectFilter::new().with_category(Category::MobileApp);

        assert!(filter.matches(&project(Category::MobileApp, false, 2020)));
        assert!(!filter.matches(&project(Category::WebDevelopment, false, 2020)));
    }

    #[test]
    fn test_featured_filter_combined_with_category() {
        let filter = ProjectFilter::new()
            .with_category(Category::WebDevelopment)
            .featured_only();

        assert!(filter.matches(&project(Category::WebDevelopment, true, 2020)));
        assert!(!filter.matches(&project(Category::WebDevelopment, false, 2020)));
        assert!(!filter.matches(&project(Category::Other, true, 2020)));
    }

    #[test]
    fn test_listing_order_newest_completion_first() {
        let mut projects = vec![
            project(Category::Other, false, 2019),
            project(Category::Other, false, 2023),
            project(Category::Other, false, 2021),
        ];

        projects.sort_by(listing_order);

        let years: Vec<String> = projects.iter().map(|p| p.title().to_string()).collect();
        assert_eq!(years, vec!["Project 2023", "Project 2021", "Project 2019"]);
    }
}
