use crate::steps::tables;
use crate::world::ShopWorld;
use cartwright_browser::pages::{ProductDetailPage, SearchResultsPage};
use cartwright_core::{CartAddition, ProductRequest, first_under_limit};
use cucumber::gherkin::Step;
use cucumber::{then, when};

#[when(expr = "the user adds the products listed below, each under its price limit")]
async fn add_products_under_limits(world: &mut ShopWorld, step: &Step) {
    let table = step.table.as_ref().expect("this step needs a data table");
    let requests =
        tables::product_requests(&table.rows).unwrap_or_else(|e| panic!("bad data table: {e}"));

    world.requested = requests.len();
    for request in &requests {
        add_one_product(world, request).await;
        tracing::info!(
            item = %request.item,
            quantity = %request.quantity,
            "product added to cart"
        );
    }
}

#[then(expr = "the cart is updated with the requested products and quantities")]
async fn cart_updated(world: &mut ShopWorld) {
    world.assert_cart_complete();
}

/// The per-request workflow: search, select the first candidate under the
/// limit, open its detail tab, set the quantity, add to cart, require the
/// confirmation, then close the tab and hand focus back to the results view.
/// Each request runs to completion before the next starts; a failure stops
/// the scenario but leaves earlier additions in place.
async fn add_one_product(world: &mut ShopWorld, request: &ProductRequest) {
    let wait = world.session().wait();

    world
        .home_page()
        .search(&request.item)
        .await
        .unwrap_or_else(|e| panic!("search for {:?} failed: {e}", request.item));

    let results = SearchResultsPage::new(world.session().results_page(), wait);
    let candidates = results
        .candidates()
        .await
        .unwrap_or_else(|e| panic!("cannot read candidates for {:?}: {e}", request.item));

    let selected = first_under_limit(&candidates, request.price_limit)
        .unwrap_or_else(|e| panic!("{e}"))
        .clone();
    tracing::info!(
        name = %selected.name,
        price = selected.price,
        position = selected.position,
        "selected candidate under {}",
        request.price_limit
    );

    results
        .open_candidate(selected.position)
        .await
        .unwrap_or_else(|e| panic!("cannot activate {:?}: {e}", selected.name));

    let detail_tab = world
        .session_mut()
        .switch_to_detail()
        .await
        .unwrap_or_else(|e| panic!("detail tab for {:?} did not open: {e}", selected.name));

    let detail = ProductDetailPage::new(detail_tab, wait);
    detail
        .assert_displayed()
        .await
        .unwrap_or_else(|e| panic!("detail page for {:?} not displayed: {e}", selected.name));

    detail
        .select_quantity(&request.quantity)
        .await
        .unwrap_or_else(|e| panic!("cannot set quantity {:?}: {e}", request.quantity));

    detail
        .add_to_cart()
        .await
        .unwrap_or_else(|e| panic!("add-to-cart click failed: {e}"));

    detail
        .assert_added_to_cart()
        .await
        .unwrap_or_else(|e| panic!("no confirmation for {:?}: {e}", selected.name));

    world
        .session_mut()
        .close_detail_and_return()
        .await
        .unwrap_or_else(|e| panic!("cannot return to results view: {e}"));

    world.cart_additions.push(CartAddition {
        item: request.item.clone(),
        quantity: request.quantity.clone(),
    });
}
