use serde::{Deserialize, Serialize};

/// A catalog entry as stored in the dataset file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub app_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Top-level shape of the dataset file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub apps: Vec<AppRecord>,
}

/// A normalized catalog entry: identifier and timestamps are always set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub app_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub created_at: String,
    pub updated_at: String,
}

impl App {
    /// Tags of this app, empty when none are set
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Check whether this app belongs to the given category (exact match)
    pub fn in_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }
}

/// Criteria for narrowing the dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Free-text query, matched case-insensitively
    #[serde(default)]
    pub query: String,
    /// Exact category constraint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Match-any tag constraint (exact, case-sensitive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl SearchFilters {
    /// Filter matching on free text only
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

/// Outcome of a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub apps: Vec<App>,
    pub total: usize,
    /// The trimmed query that produced this result
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_without_optional_fields() {
        let json = r#"{
            "title": "Budget Tracker",
            "description": "Track expenses",
            "imageUrl": "/images/budget.png",
            "appUrl": "https://budget.example.com"
        }"#;

        let record: AppRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "Budget Tracker");
        assert_eq!(record.image_url, "/images/budget.png");
        assert!(record.id.is_none());
        assert!(record.tags.is_none());
        assert!(record.created_at.is_none());
    }

    #[test]
    fn test_record_requires_title() {
        let json = r#"{"description": "x", "imageUrl": "y", "appUrl": "z"}"#;
        assert!(serde_json::from_str::<AppRecord>(json).is_err());
    }

    #[test]
    fn test_app_serializes_camel_case() {
        let app = App {
            id: "app-1".to_string(),
            title: "Notes".to_string(),
            description: "Write notes".to_string(),
            image_url: "/notes.png".to_string(),
            app_url: "https://notes.example.com".to_string(),
            category: None,
            tags: None,
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
            updated_at: "2024-01-01T00:00:00.000Z".to_string(),
        };

        let value = serde_json::to_value(&app).unwrap();
        assert_eq!(value["imageUrl"], "/notes.png");
        assert_eq!(value["createdAt"], "2024-01-01T00:00:00.000Z");
        assert!(value.get("category").is_none());
        assert!(app.tags().is_empty());
    }

    #[test]
    fn test_filters_builder() {
        let filters = SearchFilters::query("todo")
            .with_category("Productivity")
            .with_tags(["tasks", "lists"]);

        assert_eq!(filters.query, "todo");
        assert_eq!(filters.category.as_deref(), Some("Productivity"));
        assert_eq!(filters.tags.unwrap(), vec!["tasks", "lists"]);
    }
}
