use serde::Serialize;

use crate::catalog::App;
use crate::error::Result;

/// Format apps as JSON
pub fn format_apps(apps: &[App]) -> Result<String> {
    Ok(serde_json::to_string_pretty(apps)?)
}

/// Format a single app as JSON
pub fn format_app(app: &App) -> Result<String> {
    Ok(serde_json::to_string_pretty(app)?)
}

/// Format category counts as JSON objects
pub fn format_categories(categories: &[(String, usize)]) -> Result<String> {
    let entries: Vec<_> = categories
        .iter()
        .map(|(name, count)| serde_json::json!({ "category": name, "count": count }))
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

/// Format any serializable value as JSON
pub fn format_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_categories_shape() {
        let out = format_categories(&[("Finance".to_string(), 2)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["category"], "Finance");
        assert_eq!(value[0]["count"], 2);
    }

    #[test]
    fn test_format_apps_empty_is_array() {
        assert_eq!(format_apps(&[]).unwrap(), "[]");
    }
}
