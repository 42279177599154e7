//! # Rendering Module
//!
//! Turns the library's mount point into terminal text.
//!
//! The mount point already holds everything to show: item nodes with their
//! tab indexes, converted price labels, and details rows for expanded items.
//! This module reads those values, does the width math, and hands plain
//! structs to the templates. The `style` filter applies a named
//! [`console::Style`] from the theme, or returns the text untouched when
//! color is off.

use super::styles::SHELF_THEME;
use super::templates::{CATALOG_TEMPLATE, CONFIG_TEMPLATE, DETAILS_TEMPLATE, OPTIONS_TEMPLATE};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use shelf::render::{DisplayItem, MountPoint, NO_RESULTS_MESSAGE};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const NAME_WIDTH: usize = 44;
const INDEX_WIDTH: usize = 5;

#[derive(Serialize)]
struct ItemLine {
    index: String,
    name: String,
    padding: String,
    brand: String,
    price: String,
}

#[derive(Serialize)]
struct CatalogData {
    items: Vec<ItemLine>,
    empty: bool,
    message: String,
    summary: String,
}

#[derive(Serialize)]
struct RowLine {
    label: String,
    padding: String,
    value: String,
}

#[derive(Serialize)]
struct DetailsData {
    index: String,
    name: String,
    rows: Vec<RowLine>,
}

#[derive(Serialize)]
struct OptionsData {
    options: Vec<String>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

fn render_template<T: Serialize>(template: &str, data: &T, use_color: bool) -> Result<String, Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        match SHELF_THEME.get(name.as_str()) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            _ => text,
        }
    });
    env.add_template("_inline", template)?;
    env.get_template("_inline")?.render(data)
}

fn format_index(tab_index: u64) -> String {
    format!("{:>width$}.", tab_index, width = INDEX_WIDTH)
}

/// Renders the mounted catalog: one line per item, or the placeholder.
pub fn render_catalog(mount: &MountPoint, use_color: bool) -> String {
    let items: Vec<ItemLine> = mount.items().iter().map(item_line).collect();
    let data = CatalogData {
        empty: items.is_empty(),
        message: mount
            .placeholder()
            .map(|p| p.text_content())
            .unwrap_or_else(|| NO_RESULTS_MESSAGE.to_string()),
        summary: format!(
            "{} product{}",
            items.len(),
            if items.len() == 1 { "" } else { "s" }
        ),
        items,
    };

    render_template(CATALOG_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn item_line(item: &DisplayItem) -> ItemLine {
    let name = truncate_to_width(item.product.name_or_empty(), NAME_WIDTH);
    let padding = " ".repeat(NAME_WIDTH.saturating_sub(name.width()));
    ItemLine {
        index: format_index(item.tab_index),
        name,
        padding,
        brand: item.product.brand.clone().unwrap_or_default(),
        price: item.price_label().to_string(),
    }
}

/// Renders the details rows of an expanded item.
pub fn render_details(item: &DisplayItem, use_color: bool) -> String {
    let rows = item.details().unwrap_or_default();
    let label_width = rows.iter().map(|r| r.label.width()).max().unwrap_or(0);
    let data = DetailsData {
        index: format_index(item.tab_index),
        name: item.product.name_or_empty().to_string(),
        rows: rows
            .iter()
            .map(|r| RowLine {
                label: r.label.to_string(),
                padding: " ".repeat(label_width - r.label.width()),
                value: r.value.clone(),
            })
            .collect(),
    };

    render_template(DETAILS_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_options(options: Vec<String>) -> String {
    render_template(OPTIONS_TEMPLATE, &OptionsData { options }, false)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_config(entries: Vec<(String, String)>, use_color: bool) -> String {
    let data = ConfigData {
        entries: entries
            .into_iter()
            .map(|(key, value)| ConfigEntry { key, value })
            .collect(),
    };
    render_template(CONFIG_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf::model::Product;
    use shelf::render::{render, FocusCounter};

    fn mounted(products: &[Product]) -> MountPoint {
        let mut mount = MountPoint::default();
        let mut focus = FocusCounter::new();
        render(products, &mut mount, &mut focus);
        mount
    }

    #[test]
    fn catalog_lists_items_with_index_and_price() {
        let mount = mounted(&[
            Product::new("Matte Lipstick").with_brand("nyx").with_price("6.0"),
            Product::new("Lash").with_brand("l'oreal").with_price("2"),
        ]);

        let output = render_catalog(&mount, false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("    1. Matte Lipstick"));
        assert!(lines[0].ends_with("nyx  R$ 33,00"));
        assert!(lines[1].contains("l'oreal  R$ 11,00"));
        assert_eq!(lines[2], "2 products");
    }

    #[test]
    fn catalog_shows_placeholder_when_empty() {
        let mount = mounted(&[Product::new("Free").with_price("0")]);
        let output = render_catalog(&mount, false);
        assert_eq!(output.trim(), NO_RESULTS_MESSAGE);
    }

    #[test]
    fn plain_output_has_no_ansi_codes() {
        let mount = mounted(&[Product::new("A").with_brand("b").with_price("1")]);
        assert!(!render_catalog(&mount, false).contains('\u{1b}'));
        assert!(render_catalog(&mount, true).contains('\u{1b}'));
    }

    #[test]
    fn details_align_labels() {
        let mut mount = mounted(&[Product::new("Lip")
            .with_brand("nyx")
            .with_price("6.0")
            .with_product_type("lipstick")]);
        mount.expand(1);

        let output = render_details(mount.item(1).unwrap(), false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "    1. Lip");
        assert_eq!(lines[1], "    Brand         nyx");
        assert_eq!(lines[2], "    Price         R$ 6.0");
        assert_eq!(lines[3], "    Product_type  lipstick");
    }

    #[test]
    fn truncates_long_names() {
        let long = "x".repeat(60);
        let truncated = truncate_to_width(&long, 10);
        assert_eq!(truncated.width(), 10);
        assert!(truncated.ends_with('…'));
        assert_eq!(truncate_to_width("short", 10), "short");
    }
}
