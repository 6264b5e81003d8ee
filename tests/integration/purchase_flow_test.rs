// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{expect_assertion, fake_ui, FakeStorefront};
use saucecheck::domain::models::checkout::CheckoutInfo;
use saucecheck::domain::models::purchase::PurchaseStage;
use saucecheck::scenarios::purchase::{self, BACKPACK_PRODUCT_ID};

#[tokio::test]
async fn test_complete_purchase_reaches_order_complete() {
    let store = FakeStorefront::new();
    let ui = fake_ui(&store);

    let stage = purchase::purchase(&ui, BACKPACK_PRODUCT_ID, &purchase::sample_shopper())
        .await
        .unwrap();
    assert_eq!(stage, PurchaseStage::OrderComplete);
    assert!(stage.is_terminal());

    let orders = store.state(|s| s.orders.clone());
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].items, vec![BACKPACK_PRODUCT_ID.to_string()]);
    assert_eq!(orders[0].first_name, "Rosângela");
    assert_eq!(orders[0].last_name, "Soares");
    assert_eq!(orders[0].postal_code, "69000-000");
    assert!(store.state(|s| s.cart.is_empty()));
}

#[tokio::test]
async fn test_complete_purchase_case() {
    let store = FakeStorefront::new().with_render_lag(2);
    let ui = fake_ui(&store);

    purchase::complete_purchase(&ui).await.unwrap();
    assert_eq!(store.state(|s| s.orders.len()), 1);
}

#[tokio::test(start_paused = true)]
async fn test_unknown_product_stops_before_cart() {
    let store = FakeStorefront::new();
    let ui = fake_ui(&store);
    let mut stage = PurchaseStage::Anonymous;

    let err = purchase::walk_purchase(&ui, "flux-capacitor", &purchase::sample_shopper(), &mut stage)
        .await
        .unwrap_err();
    assert_eq!(stage, PurchaseStage::Authenticated);

    let (expectation, observed) = expect_assertion(err);
    assert!(expectation.contains("add-to-cart-flux-capacitor"));
    assert_eq!(observed, "no matching element");
    assert!(store.state(|s| s.cart.is_empty() && s.orders.is_empty()));
}

#[tokio::test(start_paused = true)]
async fn test_leftover_cart_item_fails_the_badge_check() {
    let store = FakeStorefront::new();
    store.state_mut(|s| s.cart.push("sauce-labs-onesie".to_string()));
    let ui = fake_ui(&store);

    let err = purchase::complete_purchase(&ui).await.unwrap_err();

    let (_, observed) = expect_assertion(err);
    assert!(observed.contains("\"2\""));
    assert!(store.state(|s| s.orders.is_empty()));
}

#[tokio::test(start_paused = true)]
async fn test_missing_postal_code_stops_on_information_form() {
    let store = FakeStorefront::new();
    let ui = fake_ui(&store);
    let shopper = CheckoutInfo::new("Rosângela", "Soares", "");
    let mut stage = PurchaseStage::Anonymous;

    let err = purchase::walk_purchase(&ui, BACKPACK_PRODUCT_ID, &shopper, &mut stage)
        .await
        .unwrap_err();
    // The checkout click opened the form; the rejected continue never reached the overview.
    assert_eq!(stage, PurchaseStage::CheckoutInfo);

    let (expectation, _) = expect_assertion(err);
    assert!(expectation.contains("summary_total_label"));
    assert!(store.state(|s| s.orders.is_empty()));
}

#[tokio::test(start_paused = true)]
async fn test_leftover_cart_item_stops_after_login() {
    let store = FakeStorefront::new();
    store.state_mut(|s| s.cart.push("sauce-labs-onesie".to_string()));
    let ui = fake_ui(&store);
    let mut stage = PurchaseStage::Anonymous;

    let result = purchase::walk_purchase(
        &ui,
        BACKPACK_PRODUCT_ID,
        &purchase::sample_shopper(),
        &mut stage,
    )
    .await;

    assert!(result.is_err());
    assert_eq!(stage, PurchaseStage::Authenticated);
}
