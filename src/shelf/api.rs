//! # API Facade
//!
//! [`CatalogApi`] is the single entry point a UI drives. It owns everything a
//! browsing session needs: the record store, the current filter and sort
//! selections, the focus counter and the mount point.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Records input events** (selection changes) without doing any work
//! - **Refreshes** on demand: loads the store once, runs the query pipeline,
//!   renders into the mount point
//! - **Dispatches** expand requests to the mount point
//!
//! It does not format anything for a terminal or a browser; callers read the
//! mount point and present it however they like.
//!
//! ## Generic Over ProductSource
//!
//! `CatalogApi<S: ProductSource>` is generic over where records come from:
//! - Production: `CatalogApi<HttpSource>` or `CatalogApi<FileSource>`
//! - Testing: `CatalogApi<InMemorySource>`

use crate::filter::{Choice, FilterSelection};
use crate::model::Product;
use crate::query::run_query;
use crate::render::{render, Expansion, FocusCounter, MountPoint, RenderOptions};
use crate::sort::SortStrategy;
use crate::store::{ProductSource, RecordStore};

/// Outcome of a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSummary {
    /// Records in the snapshot.
    pub total: usize,
    /// Records left after filtering and sorting.
    pub matched: usize,
    /// Items actually mounted (matched records with a valid price).
    pub rendered: usize,
}

pub struct CatalogApi<S: ProductSource> {
    source: S,
    store: RecordStore,
    selection: FilterSelection,
    sort: Option<SortStrategy>,
    focus: FocusCounter,
    mount: MountPoint,
}

impl<S: ProductSource> CatalogApi<S> {
    pub fn new(source: S, options: RenderOptions) -> Self {
        Self {
            source,
            store: RecordStore::new(),
            selection: FilterSelection::new(),
            sort: Some(SortStrategy::default()),
            focus: FocusCounter::new(),
            mount: MountPoint::new(options),
        }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn sort(&self) -> Option<SortStrategy> {
        self.sort
    }

    pub fn mount(&self) -> &MountPoint {
        &self.mount
    }

    pub fn is_loaded(&self) -> bool {
        self.store.is_loaded()
    }

    /// Sets the sort from a UI label or identifier. Unknown values select
    /// no strategy, leaving results in filtered order.
    pub fn set_sort_label(&mut self, label: &str) {
        self.sort = SortStrategy::from_label(label);
    }

    pub fn set_sort(&mut self, sort: Option<SortStrategy>) {
        self.sort = sort;
    }

    pub fn set_name_filter(&mut self, value: &str) {
        self.selection.name = Some(value.to_string());
    }

    pub fn set_type_filter(&mut self, value: &str) {
        self.selection.product_type = Choice::from_input(value);
    }

    pub fn set_brand_filter(&mut self, value: &str) {
        self.selection.brand = Choice::from_input(value);
    }

    pub fn set_selection(&mut self, selection: FilterSelection) {
        self.selection = selection;
    }

    /// Runs the query for the current selections without rendering.
    pub fn query(&mut self) -> Vec<Product> {
        let products = self.store.load(&self.source);
        run_query(products, &self.selection, self.sort)
    }

    /// Loads (once), queries and re-renders the mount point.
    pub fn refresh(&mut self) -> RefreshSummary {
        let products = self.store.load(&self.source);
        let total = products.len();
        let ordered = run_query(products, &self.selection, self.sort);
        let rendered = render(&ordered, &mut self.mount, &mut self.focus);

        RefreshSummary {
            total,
            matched: ordered.len(),
            rendered,
        }
    }

    pub fn expand(&mut self, tab_index: u64) -> Expansion {
        self.mount.expand(tab_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MountState;
    use crate::store::memory::fixtures::{sample_products, SourceFixture};
    use crate::store::memory::InMemorySource;

    fn api() -> CatalogApi<InMemorySource> {
        CatalogApi::new(SourceFixture::new().source, RenderOptions::default())
    }

    fn mounted_names<S: ProductSource>(api: &CatalogApi<S>) -> Vec<String> {
        api.mount()
            .items()
            .iter()
            .map(|i| i.product.name_or_empty().to_string())
            .collect()
    }

    #[test]
    fn nothing_is_loaded_before_first_refresh() {
        let api = api();
        assert!(!api.is_loaded());
        assert_eq!(api.mount().state(), MountState::Unloaded);
    }

    #[test]
    fn refresh_renders_best_rated_by_default() {
        let mut api = api();
        let summary = api.refresh();

        assert_eq!(summary.total, sample_products().len());
        assert_eq!(summary.matched, 6);
        // "Sample Blush" has a zero price and is not rendered.
        assert_eq!(summary.rendered, 5);
        assert_eq!(
            mounted_names(&api),
            vec!["Lash Paradise", "Matte Lipstick", "Dior Addict", "butter gloss", ""]
        );
    }

    #[test]
    fn selections_compose_across_events() {
        let mut api = api();
        api.set_brand_filter("nyx");
        api.set_type_filter("lipstick");
        api.set_sort_label("A-Z");
        api.refresh();
        assert_eq!(mounted_names(&api), vec!["butter gloss", "Matte Lipstick"]);

        api.set_name_filter("MATTE");
        api.refresh();
        assert_eq!(mounted_names(&api), vec!["Matte Lipstick"]);

        api.set_brand_filter("Todos");
        api.set_name_filter("");
        api.set_sort_label("lowest-price");
        api.refresh();
        assert_eq!(
            mounted_names(&api),
            vec!["butter gloss", "Matte Lipstick", "Dior Addict"]
        );
    }

    #[test]
    fn typed_sort_selection() {
        let mut api = api();
        api.set_sort(Some(SortStrategy::HighestPrice));
        api.refresh();
        assert_eq!(
            mounted_names(&api),
            vec!["Dior Addict", "", "Lash Paradise", "Matte Lipstick", "butter gloss"]
        );

        api.set_sort(None);
        assert_eq!(api.query().len(), sample_products().len());
    }

    #[test]
    fn unknown_sort_keeps_source_order() {
        let mut api = api();
        api.set_sort_label("Most Popular");
        assert_eq!(api.sort(), None);

        let names: Vec<_> = api
            .query()
            .iter()
            .map(|p| p.name_or_empty().to_string())
            .collect();
        let expected: Vec<_> = sample_products()
            .iter()
            .map(|p| p.name_or_empty().to_string())
            .collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn source_is_fetched_once_per_session() {
        let mut api = api();
        api.refresh();
        api.set_brand_filter("dior");
        api.refresh();
        api.query();
        assert_eq!(api.source.fetch_count(), 1);
    }

    #[test]
    fn tab_indexes_grow_across_refreshes() {
        let mut api = api();
        api.refresh();
        let first: Vec<u64> = api.mount().items().iter().map(|i| i.tab_index).collect();
        api.set_type_filter("lipstick");
        api.refresh();
        let second: Vec<u64> = api.mount().items().iter().map(|i| i.tab_index).collect();

        assert_eq!(first, vec![1, 2, 3, 4, 5]);
        assert_eq!(second, vec![6, 7, 8]);
    }

    #[test]
    fn empty_result_shows_placeholder() {
        let mut api = api();
        api.set_brand_filter("nyx");
        api.set_type_filter("blush");
        let summary = api.refresh();

        assert_eq!(summary.matched, 1);
        assert_eq!(summary.rendered, 0);
        assert_eq!(api.mount().state(), MountState::Empty);
    }

    #[test]
    fn failed_fetch_renders_empty_catalog() {
        let mut api = CatalogApi::new(InMemorySource::failing(), RenderOptions::default());
        let summary = api.refresh();

        assert_eq!(summary.total, 0);
        assert_eq!(api.mount().state(), MountState::Empty);
        assert!(!api.is_loaded());
    }

    #[test]
    fn expand_dispatches_to_mount() {
        let mut api = api();
        api.refresh();
        assert_eq!(api.expand(1), Expansion::Expanded);
        assert_eq!(api.expand(1), Expansion::AlreadyExpanded);
        assert_eq!(api.expand(42), Expansion::NotFound);
    }
}
