/// Integration tests for the application layer
mod test_utilities;

use std::sync::Arc;
use test_utilities::mocks::*;
use vendor_discovery::prelude::*;

type TestEngine =
    DiscoveryEngine<MockCatalog, MockSavedStore, MockNotifier, MockNavigator, RecordingShare>;

fn vendor(id: &str, category: &str, price: u64, rating: f64) -> VendorSummary {
    VendorSummary {
        id: VendorId::new(id).unwrap(),
        slug: id.to_string(),
        name: format!("Vendor {}", id),
        logo: None,
        gallery: Vec::new(),
        categories: vec![category.to_string()],
        description: String::new(),
        rating,
        starting_price: price,
        is_recommended: false,
        coordinates: None,
        city: Some("mumbai".to_string()),
        occasions: Vec::new(),
    }
}

/// 20 photography vendors, exactly 7 of them priced 500-3000 with rating >= 4
fn photography_catalog() -> Vec<VendorSummary> {
    let mut vendors = Vec::new();
    let matching = [500, 800, 1200, 1500, 2000, 2500, 3000];
    for (i, price) in matching.iter().enumerate() {
        vendors.push(vendor(&format!("match-{}", i), "photography", *price, 4.2));
    }
    // right price, rating too low
    for i in 0..5 {
        vendors.push(vendor(&format!("low-rated-{}", i), "photography", 1000, 3.5));
    }
    // right rating, price out of range
    for i in 0..8 {
        let price = if i % 2 == 0 { 200 } else { 5000 };
        vendors.push(vendor(&format!("priced-out-{}", i), "photography", price, 4.8));
    }
    // another category entirely
    vendors.push(vendor("decor-1", "decor", 1000, 4.5));
    vendors
}

fn engine_with(catalog: MockCatalog, store: MockSavedStore, bus: Arc<HoverBus>) -> TestEngine {
    DiscoveryEngine::new(
        catalog,
        store,
        MockNotifier::new(),
        MockNavigator::new(),
        RecordingShare::new(),
        DiscoveryOptions::default(),
        bus,
    )
}

fn engine(catalog: MockCatalog) -> TestEngine {
    engine_with(catalog, MockSavedStore::new(), Arc::new(HoverBus::new()))
}

#[tokio::test]
async fn test_filtered_photography_listing() {
    let engine = engine(MockCatalog::new(photography_catalog()));

    let view = engine
        .mount("mainCategory=photography&minPrice=500&maxPrice=3000&rating=4")
        .await;

    assert!(!view.is_error());
    assert_eq!(view.vendor_count(), 7);
    assert!(view.pagination().is_none());

    let listing = engine.current_listing().unwrap();
    assert_eq!(listing.total_pages(), 1);
    for item in listing.items() {
        assert!(item.rating >= 4.0);
        assert!((500..=3000).contains(&item.starting_price));
    }
}

#[tokio::test]
async fn test_price_sort_orders_listing() {
    let engine = engine(MockCatalog::new(photography_catalog()));

    engine
        .mount("mainCategory=photography&sort=price-high&pageSize=50")
        .await;

    let prices: Vec<u64> = engine
        .current_listing()
        .unwrap()
        .items()
        .iter()
        .map(|v| v.starting_price)
        .collect();
    assert_eq!(prices.len(), 20);
    assert!(prices.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_failed_save_toggle_rolls_back_with_notification() {
    let catalog = MockCatalog::new(photography_catalog());
    let engine = engine_with(
        catalog,
        MockSavedStore::with_failure(),
        Arc::new(HoverBus::new()),
    );
    engine.mount("").await;
    let id = VendorId::new("match-0").unwrap();

    let outcome = engine.toggle_saved(&id).await;

    assert!(matches!(outcome, ToggleOutcome::RolledBack { .. }));
    assert!(!engine.saved_vendors().contains(&id));

    let view = engine.render_current().unwrap();
    match view.body {
        ViewBody::List { cards, .. } => {
            let card = cards.iter().find(|c| c.id == id).unwrap();
            assert!(!card.saved);
        }
        other => panic!("unexpected body {:?}", other),
    }
}

#[tokio::test]
async fn test_successful_save_toggle_updates_cards() {
    let store = MockSavedStore::with_saved(&["match-1"]);
    let engine = engine_with(
        MockCatalog::new(photography_catalog()),
        store.clone(),
        Arc::new(HoverBus::new()),
    );
    engine.mount("").await;
    let id = VendorId::new("match-0").unwrap();

    assert_eq!(engine.toggle_saved(&id).await, ToggleOutcome::Saved);
    assert!(engine.saved_vendors().contains(&id));
    assert!(engine
        .saved_vendors()
        .contains(&VendorId::new("match-1").unwrap()));
    assert_eq!(store.toggle_calls.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_stale_fetch_does_not_overwrite_newer() {
    let catalog = MockCatalog::new(photography_catalog()).with_delay(1, 80);
    let engine = engine(catalog.clone());

    let (_slow, fast) = futures::join!(
        engine.navigate("pageSize=5&page=1"),
        engine.navigate("pageSize=5&page=2")
    );

    assert_eq!(fast.pagination().unwrap().current_page, 2);
    assert_eq!(engine.current_listing().unwrap().current_page(), 2);
    assert_eq!(catalog.request_count(), 2);
}

#[tokio::test]
async fn test_page_past_end_is_empty_not_error() {
    let engine = engine(MockCatalog::new(photography_catalog()));

    // 20 vendors at 12 per page is 2 pages
    let view = engine.mount("page=3").await;

    assert!(view.is_empty());
    assert!(!view.is_error());
}

#[tokio::test]
async fn test_retry_after_catalog_failure() {
    let catalog = MockCatalog::new(photography_catalog()).failing_first(1);
    let engine = engine(catalog);

    let failed = engine.mount("mainCategory=photography").await;
    assert!(failed.is_error());

    let recovered = engine.retry().await;
    assert!(!recovered.is_error());
    assert_eq!(recovered.vendor_count(), 12);
}

#[tokio::test]
async fn test_filter_changes_are_pushed_to_history() {
    let history_navigator;
    let engine = {
        let navigator = MockNavigator::new();
        history_navigator = navigator.clone();
        DiscoveryEngine::new(
            MockCatalog::new(photography_catalog()),
            MockSavedStore::new(),
            MockNotifier::new(),
            navigator,
            RecordingShare::new(),
            DiscoveryOptions::default(),
            Arc::new(HoverBus::new()),
        )
    };
    engine.mount("").await;

    engine
        .select_facet(FacetSelection::MainCategory("photography".to_string()))
        .await;
    engine.go_to_page(2).await;
    engine.switch_view(ViewMode::Map).await;

    assert_eq!(
        history_navigator.queries(),
        vec![
            "mainCategory=photography",
            "mainCategory=photography&page=2",
            "mainCategory=photography&page=2&view=map",
        ]
    );
}

#[tokio::test]
async fn test_two_engines_are_hover_isolated() {
    let bus = Arc::new(HoverBus::new());
    let first = engine_with(
        MockCatalog::new(photography_catalog()),
        MockSavedStore::new(),
        Arc::clone(&bus),
    );
    let second = engine_with(
        MockCatalog::new(photography_catalog()),
        MockSavedStore::new(),
        Arc::clone(&bus),
    );
    assert_ne!(first.token(), second.token());

    let mut first_map = first.subscribe_map();
    let mut second_map = second.subscribe_map();

    let a = VendorId::new("match-0").unwrap();
    let b = VendorId::new("match-1").unwrap();
    first.pointer_enter(a.clone());
    first.pointer_enter(b.clone());
    first.pointer_leave();

    assert_eq!(
        first_map.drain(),
        vec![
            PopupTransition::Opened(a.clone()),
            PopupTransition::Switched {
                closed: a,
                opened: b.clone()
            },
            PopupTransition::Closed(b),
        ]
    );
    assert!(second_map.drain().is_empty());
    assert!(second_map.open_popup().is_none());
}

#[tokio::test]
async fn test_share_records_absolute_link() {
    let engine = engine(MockCatalog::new(photography_catalog()));
    engine.mount("").await;

    let outcome = engine.share(&VendorId::new("match-0").unwrap()).unwrap();

    assert_eq!(outcome, ShareOutcome::Shared);
}
