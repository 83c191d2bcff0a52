use colored::Colorize;

use crate::catalog::{App, SearchResults};

/// Safely truncate a string to n characters, appending "..." if truncated.
/// Works correctly with multi-byte UTF-8 characters.
fn truncate_str(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > max_chars {
        let truncated: String = chars.iter().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a list of apps for pretty output
pub fn format_apps(apps: &[App]) -> String {
    if apps.is_empty() {
        return "No apps found.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{} ({} app{})\n",
        "Apps".bold(),
        apps.len(),
        if apps.len() == 1 { "" } else { "s" }
    ));
    output.push_str(&"─".repeat(70));
    output.push('\n');

    for app in apps {
        match app.category {
            Some(ref category) => {
                output.push_str(&format!("{} [{}]\n", app.title.bold(), category.magenta()))
            }
            None => output.push_str(&format!("{}\n", app.title.bold())),
        }

        // Show id prominently for easy copy-paste
        output.push_str(&format!("  {} {}\n", "Id:".cyan(), app.id));
        output.push_str(&format!(
            "  {}\n",
            truncate_str(&app.description, 66).dimmed()
        ));
        if !app.tags().is_empty() {
            output.push_str(&format!("  {} {}\n", "Tags:".cyan(), format_tags(app.tags())));
        }
        output.push('\n');
    }

    output.trim_end().to_string()
}

/// Format a single app for pretty output
pub fn format_app(app: &App) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", app.title.bold()));
    output.push_str(&"─".repeat(50));
    output.push('\n');

    output.push_str(&format!("{} {}\n", "Id:".cyan(), app.id));
    if let Some(ref category) = app.category {
        output.push_str(&format!("{} {}\n", "Category:".cyan(), category));
    }
    if !app.tags().is_empty() {
        output.push_str(&format!("{} {}\n", "Tags:".cyan(), format_tags(app.tags())));
    }
    output.push_str(&format!("\n{}\n\n", app.description));

    output.push_str(&format!("{} {}\n", "Image:".cyan(), app.image_url));
    output.push_str(&format!("{} {}\n", "Created:".cyan(), app.created_at));
    output.push_str(&format!("{} {}\n", "Updated:".cyan(), app.updated_at));

    output.push_str(&format!("\n{} {}\n", "URL:".cyan(), app.app_url));

    output
}

/// Format search results for pretty output
pub fn format_search_results(results: &SearchResults) -> String {
    let mut output = String::new();
    if results.query.is_empty() {
        output.push_str(&format!("{} result{}\n\n", results.total, plural(results.total)));
    } else {
        output.push_str(&format!(
            "{} result{} for \"{}\"\n\n",
            results.total,
            plural(results.total),
            results.query.bold()
        ));
    }
    output.push_str(&format_apps(&results.apps));
    output
}

/// Format category counts for pretty output
pub fn format_categories(categories: &[(String, usize)]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{}\n", "Categories".bold()));
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for (name, count) in categories {
        output.push_str(&format!("  {:30} {}\n", name, count.to_string().dimmed()));
    }

    output.trim_end().to_string()
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
