//! In-memory filtering over a loaded dataset

use super::types::{App, SearchFilters, SearchResults};

/// Apply `filters` to `apps`.
///
/// Stages narrow one after another: free-text query, then category, then
/// tags (match-any). Source order is preserved.
pub fn search(apps: &[App], filters: &SearchFilters) -> SearchResults {
    let query = filters.query.trim();
    let needle = query.to_lowercase();
    let category = filters.category.as_deref().filter(|c| !c.is_empty());
    let tags = filters.tags.as_deref().filter(|t| !t.is_empty());

    let matched: Vec<App> = apps
        .iter()
        .filter(|app| needle.is_empty() || matches_query(app, &needle))
        .filter(|app| category.map_or(true, |c| app.in_category(c)))
        .filter(|app| tags.map_or(true, |wanted| has_any_tag(app, wanted)))
        .cloned()
        .collect();

    SearchResults {
        total: matched.len(),
        apps: matched,
        query: query.to_string(),
    }
}

/// All apps in `category` (exact, case-sensitive)
pub fn by_category(apps: &[App], category: &str) -> Vec<App> {
    apps.iter()
        .filter(|app| app.in_category(category))
        .cloned()
        .collect()
}

/// First app whose id equals `id`
pub fn by_id<'a>(apps: &'a [App], id: &str) -> Option<&'a App> {
    apps.iter().find(|app| app.id == id)
}

/// Distinct categories with their app counts, in first-seen order
pub fn categories(apps: &[App]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for category in apps.iter().filter_map(|app| app.category.as_deref()) {
        match counts.iter_mut().find(|(name, _)| name == category) {
            Some((_, count)) => *count += 1,
            None => counts.push((category.to_string(), 1)),
        }
    }
    counts
}

/// `needle` must already be lower-cased
fn matches_query(app: &App, needle: &str) -> bool {
    app.title.to_lowercase().contains(needle)
        || app.description.to_lowercase().contains(needle)
        || app.tags().iter().any(|tag| tag.to_lowercase().contains(needle))
}

fn has_any_tag(app: &App, wanted: &[String]) -> bool {
    app.tags().iter().any(|tag| wanted.contains(tag))
}
