//! # Render Engine
//!
//! Converts an ordered product list into display nodes inside a [`MountPoint`].
//!
//! ## Rendering
//!
//! [`render`] always clears the mount point before filling it, so calling it
//! any number of times with the same list leaves the same nodes behind.
//! Records whose price fails [`is_valid_price`] are skipped here even if they
//! survived filtering and sorting. When nothing is left to show, a single
//! placeholder node is mounted instead.
//!
//! ## Focus Order
//!
//! Each rendered item takes the next number from a [`FocusCounter`]. The
//! counter belongs to the caller and is never reset, so tab indexes keep
//! growing across renders and never repeat within a session.
//!
//! ## Details
//!
//! [`MountPoint::expand`] builds an item's details section the first time it
//! is asked for and appends it to the item's node. Later calls find it
//! already there and leave it alone.

use crate::config::ShelfConfig;
use crate::model::{Product, Scalar};
use crate::validity::{coerce_price, is_valid_price, PriceValue};
use tracing::debug;

pub mod node;

pub use node::Node;

pub const NO_RESULTS_MESSAGE: &str = "No Products Found with the current filter/sorting...";
/// A details value equal to this is treated as empty.
pub const EMPTY_PRICE: &str = "R$ 0,00";
pub const IMAGE_SIZE: u32 = 215;
pub const DETAILS_MAX_WIDTH: &str = "250px";

/// Values that shape rendered output.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub conversion_rate: f64,
    pub currency_prefix: String,
    pub fallback_image: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&ShelfConfig::default())
    }
}

impl From<&ShelfConfig> for RenderOptions {
    fn from(config: &ShelfConfig) -> Self {
        Self {
            conversion_rate: config.conversion_rate,
            currency_prefix: config.currency_prefix.clone(),
            fallback_image: config.fallback_image.clone(),
        }
    }
}

/// Hands out focus-order integers, starting at 1.
#[derive(Debug, Clone)]
pub struct FocusCounter {
    next: u64,
}

impl Default for FocusCounter {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl FocusCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_index(&mut self) -> u64 {
        let index = self.next;
        self.next += 1;
        index
    }

    /// The index the next rendered item will receive.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

/// An image source with the fallback used when the primary fails to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub src: Option<String>,
    pub fallback: String,
}

impl ImageRef {
    pub fn resolve(&self, load_failed: bool) -> &str {
        match &self.src {
            Some(src) if !load_failed && !src.is_empty() => src,
            _ => &self.fallback,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// A rendered product plus its render-only state.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub product: Product,
    pub tab_index: u64,
    pub node: Node,
    pub image: ImageRef,
    details: Option<Vec<DetailRow>>,
}

impl DisplayItem {
    pub fn is_expanded(&self) -> bool {
        self.details.is_some()
    }

    pub fn details(&self) -> Option<&[DetailRow]> {
        self.details.as_deref()
    }

    /// The converted price label shown on the item.
    pub fn price_label(&self) -> &str {
        self.node
            .find_by_class("background-price")
            .and_then(|n| n.text.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountState {
    /// Nothing has been rendered yet.
    Unloaded,
    /// Rendered, but no item qualified; the placeholder is showing.
    Empty,
    Listing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    Expanded,
    AlreadyExpanded,
    NotFound,
}

/// The container the render engine clears and fills.
#[derive(Debug, Clone)]
pub struct MountPoint {
    state: MountState,
    items: Vec<DisplayItem>,
    placeholder: Option<Node>,
    options: RenderOptions,
}

impl Default for MountPoint {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl MountPoint {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            state: MountState::Unloaded,
            items: Vec::new(),
            placeholder: None,
            options,
        }
    }

    pub fn state(&self) -> MountState {
        self.state
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn placeholder(&self) -> Option<&Node> {
        self.placeholder.as_ref()
    }

    pub fn item(&self, tab_index: u64) -> Option<&DisplayItem> {
        self.items.iter().find(|i| i.tab_index == tab_index)
    }

    /// The mounted top-level nodes: the placeholder or one node per item.
    pub fn nodes(&self) -> Vec<&Node> {
        match &self.placeholder {
            Some(p) => vec![p],
            None => self.items.iter().map(|i| &i.node).collect(),
        }
    }

    fn clear(&mut self) {
        self.items.clear();
        self.placeholder = None;
    }

    /// Builds the details section of the item with `tab_index`, once.
    pub fn expand(&mut self, tab_index: u64) -> Expansion {
        let options = &self.options;
        let Some(item) = self.items.iter_mut().find(|i| i.tab_index == tab_index) else {
            return Expansion::NotFound;
        };
        if item.details.is_some() {
            return Expansion::AlreadyExpanded;
        }

        let rows = detail_rows(&item.product, options);
        item.node.append(details_node(&rows));
        item.details = Some(rows);
        debug!(tab_index, "expanded item details");
        Expansion::Expanded
    }

    /// The whole mount as an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut catalog = Node::new("div").class("catalog");
        for node in self.nodes() {
            catalog.append(node.clone());
        }
        catalog.to_html()
    }
}

/// Clears `mount` and renders `products` into it. Returns the number of
/// items mounted.
pub fn render(products: &[Product], mount: &mut MountPoint, focus: &mut FocusCounter) -> usize {
    mount.clear();

    for product in products {
        if !is_valid_price(product.price.as_ref()) {
            continue;
        }
        let tab_index = focus.next_index();
        let item = product_item(product, tab_index, &mount.options);
        mount.items.push(item);
    }

    if mount.items.is_empty() {
        mount.placeholder = Some(Node::new("h1").text(NO_RESULTS_MESSAGE));
        mount.state = MountState::Empty;
    } else {
        mount.state = MountState::Listing;
    }

    debug!(
        received = products.len(),
        rendered = mount.items.len(),
        next_tab_index = focus.peek(),
        "render complete"
    );
    mount.items.len()
}

/// `price × rate`, two decimals, comma as the decimal separator.
///
/// Prices that are not numbers are shown as received.
pub fn format_price_label(price: Option<&Scalar>, options: &RenderOptions) -> String {
    let amount = match coerce_price(price) {
        PriceValue::Number(n) => format!("{:.2}", n * options.conversion_rate).replace('.', ","),
        PriceValue::Unparseable => price.map(|p| p.to_string()).unwrap_or_default(),
    };
    format!("{}{}", options.currency_prefix, amount)
}

fn product_item(product: &Product, tab_index: u64, options: &RenderOptions) -> DisplayItem {
    let name = product.name_or_empty();
    let image = ImageRef {
        src: product.image_link.clone(),
        fallback: options.fallback_image.clone(),
    };

    let img = Node::new("img")
        .attr("src", product.image_link.as_deref().unwrap_or(""))
        .attr("width", IMAGE_SIZE)
        .attr("height", IMAGE_SIZE)
        .attr("alt", name)
        .attr(
            "onerror",
            format!("this.onerror=null;this.src='{}';", options.fallback_image),
        );

    let node = Node::new("div")
        .class("product")
        .attr("data-name", name)
        .attr("data-brand", product.brand.as_deref().unwrap_or(""))
        .attr("data-type", product.product_type.as_deref().unwrap_or(""))
        .attr("tabindex", tab_index)
        .child(Node::new("figure").class("product-figure").child(img))
        .child(
            Node::new("section")
                .class("product-description")
                .child(Node::new("h1").class("product-name").text(name))
                .child(
                    Node::new("div")
                        .class("product-brands")
                        .child(
                            Node::new("span")
                                .class("product-brand")
                                .class("background-brand")
                                .text(product.brand.as_deref().unwrap_or("")),
                        )
                        .child(
                            Node::new("span")
                                .class("product-brand")
                                .class("background-price")
                                .text(format_price_label(product.price.as_ref(), options)),
                        ),
                ),
        );

    DisplayItem {
        product: product.clone(),
        tab_index,
        node,
        image,
        details: None,
    }
}

/// The details rows for `product`, in display order, with empty rows left out.
pub fn detail_rows(product: &Product, options: &RenderOptions) -> Vec<DetailRow> {
    let price = product
        .price
        .as_ref()
        .map(|p| format!("{}{}", options.currency_prefix, p));

    let candidates = [
        ("Brand", product.brand.clone()),
        ("Price", price),
        ("Rating", product.rating.as_ref().and_then(rating_text)),
        ("Category", product.category.clone()),
        ("Product_type", product.product_type.clone()),
    ];

    candidates
        .into_iter()
        .filter_map(|(label, value)| {
            let value = value.filter(|v| !v.is_empty() && v != EMPTY_PRICE)?;
            Some(DetailRow { label, value })
        })
        .collect()
}

// A zero rating counts as empty.
fn rating_text(rating: &Scalar) -> Option<String> {
    match rating {
        Scalar::Number(n) if *n == 0.0 => None,
        other => Some(other.to_string()),
    }
}

fn details_node(rows: &[DetailRow]) -> Node {
    let mut section = Node::new("section").class("product-details");
    for row in rows {
        section.append(
            Node::new("div")
                .class("details-row")
                .child(Node::new("div").text(row.label))
                .child(
                    Node::new("div").class("details-bar").child(
                        Node::new("div")
                            .class("details-bar-bg")
                            .attr("style", format!("max-width: {}", DETAILS_MAX_WIDTH))
                            .text(row.value.clone()),
                    ),
                ),
        );
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("Lip")
                .with_brand("nyx")
                .with_price("10")
                .with_rating(4.5)
                .with_category("lipstick")
                .with_product_type("lipstick")
                .with_image_link("http://img/lip.png"),
            Product::new("Free").with_brand("dior").with_price("0.0"),
            Product::new("Blush").with_brand("dior").with_price(3.2),
        ]
    }

    fn tab_indexes(mount: &MountPoint) -> Vec<u64> {
        mount.items().iter().map(|i| i.tab_index).collect()
    }

    #[test]
    fn skips_invalid_prices_and_numbers_items() {
        let mut mount = MountPoint::default();
        let mut focus = FocusCounter::new();

        let rendered = render(&catalog(), &mut mount, &mut focus);

        assert_eq!(rendered, 2);
        assert_eq!(mount.state(), MountState::Listing);
        assert_eq!(tab_indexes(&mount), vec![1, 2]);
        assert_eq!(mount.items()[0].node.get_attr("tabindex"), Some("1"));
        assert_eq!(mount.items()[1].product.name.as_deref(), Some("Blush"));
    }

    #[test]
    fn render_is_idempotent_and_focus_keeps_growing() {
        let products = catalog();
        let mut mount = MountPoint::default();
        let mut focus = FocusCounter::new();

        render(&products, &mut mount, &mut focus);
        let first = tab_indexes(&mount);
        render(&products, &mut mount, &mut focus);
        let second = tab_indexes(&mount);

        assert_eq!(mount.nodes().len(), 2);
        assert_eq!(first, vec![1, 2]);
        assert_eq!(second, vec![3, 4]);
        let all: Vec<u64> = first.iter().chain(&second).copied().collect();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn unloaded_is_distinct_from_empty() {
        let mut mount = MountPoint::default();
        let mut focus = FocusCounter::new();
        assert_eq!(mount.state(), MountState::Unloaded);
        assert!(mount.nodes().is_empty());

        render(&[], &mut mount, &mut focus);
        assert_eq!(mount.state(), MountState::Empty);
        let nodes = mount.nodes();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].text.as_deref(), Some(NO_RESULTS_MESSAGE));
        assert_eq!(focus.peek(), 1);
    }

    #[test]
    fn only_invalid_prices_shows_placeholder() {
        let products = vec![Product::new("B").with_brand("Y").with_price("0")];
        let mut mount = MountPoint::default();
        let mut focus = FocusCounter::new();

        assert_eq!(render(&products, &mut mount, &mut focus), 0);
        assert_eq!(mount.state(), MountState::Empty);
        assert!(mount.placeholder().is_some());
    }

    #[test]
    fn rerender_replaces_placeholder() {
        let mut mount = MountPoint::default();
        let mut focus = FocusCounter::new();

        render(&[], &mut mount, &mut focus);
        render(&catalog(), &mut mount, &mut focus);
        assert!(mount.placeholder().is_none());
        assert_eq!(mount.nodes().len(), 2);
    }

    #[test]
    fn price_label_is_converted_with_comma_decimals() {
        let options = RenderOptions::default();
        assert_eq!(
            format_price_label(Some(&Scalar::from("10")), &options),
            "R$ 55,00"
        );
        assert_eq!(
            format_price_label(Some(&Scalar::Number(3.2)), &options),
            "R$ 17,60"
        );
        assert_eq!(
            format_price_label(Some(&Scalar::from("free")), &options),
            "R$ free"
        );
        assert_eq!(
            format_price_label(Some(&Scalar::from(" ")), &options),
            "R$ 0,00"
        );
    }

    #[test]
    fn item_node_carries_data_attributes_and_image_fallback() {
        let mut mount = MountPoint::default();
        let mut focus = FocusCounter::new();
        render(&catalog(), &mut mount, &mut focus);

        let item = &mount.items()[0];
        assert_eq!(item.node.get_attr("data-name"), Some("Lip"));
        assert_eq!(item.node.get_attr("data-brand"), Some("nyx"));
        assert_eq!(item.node.get_attr("data-type"), Some("lipstick"));
        assert_eq!(item.price_label(), "R$ 55,00");

        let img = item.node.find_by_class("product-figure").unwrap();
        assert_eq!(img.children[0].get_attr("src"), Some("http://img/lip.png"));
        assert_eq!(item.image.resolve(false), "http://img/lip.png");
        assert_eq!(item.image.resolve(true), "img/unavailable.png");

        // No image link at all falls straight back.
        assert_eq!(mount.items()[1].image.resolve(false), "img/unavailable.png");
    }

    #[test]
    fn expand_builds_details_once() {
        let mut mount = MountPoint::default();
        let mut focus = FocusCounter::new();
        render(&catalog(), &mut mount, &mut focus);

        assert!(!mount.item(1).unwrap().is_expanded());
        assert_eq!(mount.expand(1), Expansion::Expanded);
        assert_eq!(mount.expand(1), Expansion::AlreadyExpanded);
        assert_eq!(mount.expand(99), Expansion::NotFound);

        let item = mount.item(1).unwrap();
        assert!(item.is_expanded());
        assert_eq!(item.node.find_all_by_class("product-details").len(), 1);

        let labels: Vec<_> = item.details().unwrap().iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec!["Brand", "Price", "Rating", "Category", "Product_type"]
        );
        assert_eq!(item.details().unwrap()[1].value, "R$ 10");
    }

    #[test]
    fn detail_rows_omit_empty_values() {
        let options = RenderOptions::default();
        let product = Product::new("Sparse")
            .with_brand("")
            .with_price("0,00")
            .with_rating(0.0)
            .with_product_type("mascara");

        let rows = detail_rows(&product, &options);
        assert_eq!(
            rows,
            vec![DetailRow {
                label: "Product_type",
                value: "mascara".into()
            }]
        );
    }

    #[test]
    fn rerender_drops_expanded_state() {
        let products = catalog();
        let mut mount = MountPoint::default();
        let mut focus = FocusCounter::new();

        render(&products, &mut mount, &mut focus);
        mount.expand(1);
        render(&products, &mut mount, &mut focus);

        assert!(mount.items().iter().all(|i| !i.is_expanded()));
        assert_eq!(mount.expand(1), Expansion::NotFound);
    }

    #[test]
    fn mount_serializes_to_html() {
        let mut mount = MountPoint::default();
        let mut focus = FocusCounter::new();
        render(&catalog()[..1], &mut mount, &mut focus);

        let html = mount.to_html();
        assert!(html.starts_with("<div class=\"catalog\"><div class=\"product\""));
        assert!(html.contains("tabindex=\"1\""));
        assert!(html.contains("R$ 55,00"));
        assert!(html.contains("onerror=\"this.onerror=null;this.src=&#39;img/unavailable.png&#39;;\""));
    }
}
