//! Category display formatting

use crate::models::Category;

/// Format categories as a table
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {}\n",
        "ID",
        "Name",
        "Type",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:-<7}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for category in categories {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {}\n",
            category.id.short(),
            category.name,
            category.kind,
            name_width = name_width,
        ));
    }

    output
}
