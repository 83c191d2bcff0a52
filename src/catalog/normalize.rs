//! Load-time normalization of dataset records

use std::collections::HashSet;

use chrono::{DateTime, SecondsFormat, Utc};

use tracing::warn;

use super::types::{App, AppRecord};

/// Positional fallback identifier for the record at `index` (0-based)
pub fn fallback_id(index: usize) -> String {
    format!("app-{}", index + 1)
}

/// Format a load time the way timestamps are stored in the dataset
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Turn dataset records into apps.
///
/// Missing or empty ids become `app-<n>` by 1-based position; missing or
/// empty timestamps become `loaded_at`. Colliding ids are kept as they are;
/// lookups by id return the first app carrying it.
pub fn normalize(records: Vec<AppRecord>, loaded_at: DateTime<Utc>) -> Vec<App> {
    let now = timestamp(loaded_at);
    let mut seen = HashSet::with_capacity(records.len());
    let mut apps = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let id = non_empty(record.id).unwrap_or_else(|| fallback_id(index));
        if !seen.insert(id.clone()) {
            warn!(id = %id, position = index + 1, "duplicate app id");
        }

        apps.push(App {
            id,
            title: record.title,
            description: record.description,
            image_url: record.image_url,
            app_url: record.app_url,
            category: record.category,
            tags: record.tags,
            created_at: non_empty(record.created_at).unwrap_or_else(|| now.clone()),
            updated_at: non_empty(record.updated_at).unwrap_or_else(|| now.clone()),
        });
    }

    apps
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(id: Option<&str>, title: &str) -> AppRecord {
        AppRecord {
            id: id.map(str::to_string),
            title: title.to_string(),
            description: format!("{title} description"),
            image_url: "/img.png".to_string(),
            app_url: "https://example.com".to_string(),
            ..AppRecord::default()
        }
    }

    fn load_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_assigns_positional_ids() {
        let apps = normalize(
            vec![record(None, "One"), record(Some("custom"), "Two"), record(None, "Three")],
            load_time(),
        );

        assert_eq!(apps[0].id, "app-1");
        assert_eq!(apps[1].id, "custom");
        assert_eq!(apps[2].id, "app-3");
    }

    #[test]
    fn test_empty_id_gets_fallback() {
        let apps = normalize(vec![record(Some(""), "One")], load_time());
        assert_eq!(apps[0].id, "app-1");
    }

    #[test]
    fn test_defaults_timestamps_to_load_time() {
        let apps = normalize(vec![record(None, "One")], load_time());

        assert_eq!(apps[0].created_at, "2024-03-01T10:30:00.000Z");
        assert_eq!(apps[0].updated_at, "2024-03-01T10:30:00.000Z");
    }

    #[test]
    fn test_keeps_existing_timestamps() {
        let mut rec = record(None, "One");
        rec.created_at = Some("2023-05-05T00:00:00.000Z".to_string());

        let apps = normalize(vec![rec], load_time());
        assert_eq!(apps[0].created_at, "2023-05-05T00:00:00.000Z");
        assert_eq!(apps[0].updated_at, "2024-03-01T10:30:00.000Z");
    }

    #[test]
    fn test_duplicate_explicit_ids_are_kept() {
        let apps = normalize(
            vec![record(Some("same"), "One"), record(Some("same"), "Two")],
            load_time(),
        );

        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].id, "same");
        assert_eq!(apps[1].id, "same");
    }

    #[test]
    fn test_explicit_id_colliding_with_fallback_is_kept() {
        let apps = normalize(vec![record(Some("app-2"), "One"), record(None, "Two")], load_time());

        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].id, "app-2");
        assert_eq!(apps[1].id, "app-2");
        assert_eq!(apps[1].title, "Two");
    }

    #[test]
    fn test_normalizing_normalized_data_is_stable() {
        let first = normalize(vec![record(None, "One"), record(None, "Two")], load_time());

        let again: Vec<AppRecord> = first
            .iter()
            .map(|app| AppRecord {
                id: Some(app.id.clone()),
                title: app.title.clone(),
                description: app.description.clone(),
                image_url: app.image_url.clone(),
                app_url: app.app_url.clone(),
                category: app.category.clone(),
                tags: app.tags.clone(),
                created_at: Some(app.created_at.clone()),
                updated_at: Some(app.updated_at.clone()),
            })
            .collect();
        let later = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(normalize(again, later), first);
    }
}
