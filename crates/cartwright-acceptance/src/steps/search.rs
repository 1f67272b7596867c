use crate::config::HarnessConfig;
use crate::world::ShopWorld;
use cartwright_browser::pages::ProductDetailPage;
use cucumber::{given, then, when};

#[given(expr = "the user is on the storefront home page")]
async fn on_home_page(world: &mut ShopWorld) {
    let config = HarnessConfig::global();

    world
        .session()
        .goto(config.base_url.as_str())
        .await
        .unwrap_or_else(|e| panic!("cannot open {}: {e}", config.base_url));

    world
        .home_page()
        .validate_title_contains(&config.title_marker)
        .await
        .unwrap_or_else(|e| panic!("home page did not load: {e}"));
}

#[when(expr = "the user searches for {string}")]
async fn search_for(world: &mut ShopWorld, query: String) {
    world
        .home_page()
        .search(&query)
        .await
        .unwrap_or_else(|e| panic!("search for {query:?} failed: {e}"));
}

#[then(expr = "the search results page is displayed")]
async fn results_displayed(world: &mut ShopWorld) {
    world
        .results_page()
        .assert_displayed()
        .await
        .unwrap_or_else(|e| panic!("search results page not displayed: {e}"));
}

#[when(expr = "the user opens the first result")]
async fn open_first_result(world: &mut ShopWorld) {
    world
        .results_page()
        .open_candidate(0)
        .await
        .unwrap_or_else(|e| panic!("cannot open first result: {e}"));
}

#[then(expr = "the product detail page is displayed in a new tab")]
async fn detail_page_in_new_tab(world: &mut ShopWorld) {
    let wait = world.session().wait();
    let page = world
        .session_mut()
        .switch_to_detail()
        .await
        .unwrap_or_else(|e| panic!("no detail tab appeared: {e}"));

    ProductDetailPage::new(page, wait)
        .assert_displayed()
        .await
        .unwrap_or_else(|e| panic!("product detail page not displayed: {e}"));
}

#[when(expr = "the user filters results between minimum price {string} and maximum price {string}")]
async fn filter_by_price(world: &mut ShopWorld, min: String, max: String) {
    world
        .results_page()
        .filter_by_price(&min, &max)
        .await
        .unwrap_or_else(|e| panic!("price filter {min}..{max} failed: {e}"));
}

#[then(expr = "every displayed price is between {int} and {int}")]
async fn prices_within_range(world: &mut ShopWorld, min: u64, max: u64) {
    let prices = world
        .results_page()
        .displayed_prices()
        .await
        .unwrap_or_else(|e| panic!("cannot read displayed prices: {e}"));

    assert!(!prices.is_empty(), "no prices displayed after filtering");

    // The storefront's own filter is inclusive at both bounds.
    for (position, price) in prices.iter().enumerate() {
        assert!(
            (min..=max).contains(price),
            "price {price} at position {position} is outside {min}..={max}"
        );
    }
}
