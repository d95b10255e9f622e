//! Product suite selector and use-case gallery filtering.

use crate::models::{ProductSuite, UseCase};

/// Suite with the given id, falling back to the first suite.
///
/// `suites` is never empty once content has loaded.
pub fn select_suite<'a>(suites: &'a [ProductSuite], id: Option<&str>) -> &'a ProductSuite {
    id.and_then(|id| suites.iter().find(|s| s.id == id))
        .unwrap_or(&suites[0])
}

#[derive(Debug, Clone)]
pub struct Gallery {
    pub categories: Vec<String>,
    pub selected: Option<String>,
    pub cases: Vec<UseCase>,
}

impl Gallery {
    pub fn build(all: &[UseCase], category: Option<&str>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for case in all {
            if !categories.contains(&case.category) {
                categories.push(case.category.clone());
            }
        }

        let selected = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(|c| {
                categories
                    .iter()
                    .find(|known| known.eq_ignore_ascii_case(c))
                    .cloned()
                    .unwrap_or_else(|| c.to_string())
            });

        let cases = all
            .iter()
            .filter(|case| {
                selected
                    .as_deref()
                    .map_or(true, |c| case.category.eq_ignore_ascii_case(c))
            })
            .cloned()
            .collect();

        Self {
            categories,
            selected,
            cases,
        }
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected.as_deref() == Some(category)
    }
}
