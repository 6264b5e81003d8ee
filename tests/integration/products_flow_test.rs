// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{
    expect_assertion, fake_ui, test_wait_policy, texts, FakeProduct, FakeStorefront,
};
use saucecheck::domain::messages::SORT_PRICE_LOW_TO_HIGH;
use saucecheck::domain::selectors::hooks;
use saucecheck::scenarios::products;
use saucecheck::utils::errors::ScenarioError;

#[tokio::test]
async fn test_add_first_product_to_cart() {
    let store = FakeStorefront::new();
    let ui = fake_ui(&store);

    products::logged_in_as_standard_user(&ui).await.unwrap();
    products::add_first_product_to_cart(&ui).await.unwrap();

    assert_eq!(
        store.state(|s| s.cart.clone()),
        vec!["sauce-labs-backpack".to_string()]
    );
}

#[tokio::test(start_paused = true)]
async fn test_add_to_cart_fails_when_cart_was_not_empty() {
    let store = FakeStorefront::new();
    let ui = fake_ui(&store);

    products::logged_in_as_standard_user(&ui).await.unwrap();
    store.state_mut(|s| s.cart.push("sauce-labs-onesie".to_string()));

    let err = products::add_first_product_to_cart(&ui).await.unwrap_err();
    let (expectation, observed) = expect_assertion(err);
    assert!(expectation.contains("shopping_cart_badge"));
    assert!(observed.contains("\"2\""));
}

#[tokio::test]
async fn test_sort_by_price_low_to_high() {
    let store = FakeStorefront::new();
    let ui = fake_ui(&store);

    products::logged_in_as_standard_user(&ui).await.unwrap();
    products::sort_by_price_low_to_high(&ui).await.unwrap();

    let labels = texts(&ui, &hooks::inventory_item_price()).await;
    assert_eq!(labels.first().map(String::as_str), Some("$7.99"));
    assert_eq!(labels.last().map(String::as_str), Some("$49.99"));
}

#[tokio::test(start_paused = true)]
async fn test_sort_failure_waits_and_names_both_orders() {
    let store = FakeStorefront::new().ignoring_sort();
    let ui = fake_ui(&store);

    products::logged_in_as_standard_user(&ui).await.unwrap();
    let err = products::sort_by_price_low_to_high(&ui).await.unwrap_err();

    match err {
        ScenarioError::Assertion {
            expectation,
            observed,
            waited,
        } => {
            assert!(expectation.contains("ascending order"));
            assert!(observed.starts_with("[29.99, 9.99"));
            assert!(observed.contains("ascending would be [7.99, 9.99"));
            assert!(waited >= test_wait_policy().timeout);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_sort_waits_for_list_to_rerender() {
    let store = FakeStorefront::new().with_sort_lag(2);
    let ui = fake_ui(&store);

    products::logged_in_as_standard_user(&ui).await.unwrap();
    products::sort_by_price_low_to_high(&ui).await.unwrap();

    let labels = texts(&ui, &hooks::inventory_item_price()).await;
    assert_eq!(labels.first().map(String::as_str), Some("$7.99"));
}

#[tokio::test]
async fn test_unparseable_price_fails_without_waiting() {
    let store = FakeStorefront::new().with_products(vec![FakeProduct::new(
        "mystery",
        "Mystery Box",
        f64::NAN,
    )]);
    let ui = fake_ui(&store);

    products::logged_in_as_standard_user(&ui).await.unwrap();
    let err = products::sort_by_price_low_to_high(&ui).await.unwrap_err();

    assert!(matches!(err, ScenarioError::InvalidPrice(_)));
}

#[tokio::test]
async fn test_sort_with_no_products_passes() {
    let store = FakeStorefront::new().with_products(vec![]);
    let ui = fake_ui(&store);

    products::logged_in_as_standard_user(&ui).await.unwrap();
    products::sort_by_price_low_to_high(&ui).await.unwrap();
}

#[tokio::test]
async fn test_sort_with_single_product_passes() {
    let store = FakeStorefront::new()
        .ignoring_sort()
        .with_products(vec![FakeProduct::new("solo", "Solo", 12.00)]);
    let ui = fake_ui(&store);

    products::logged_in_as_standard_user(&ui).await.unwrap();
    products::sort_by_price_low_to_high(&ui).await.unwrap();
}

#[tokio::test]
async fn test_sort_accepts_tied_prices() {
    let store = FakeStorefront::new().ignoring_sort().with_products(vec![
        FakeProduct::new("a", "A", 15.99),
        FakeProduct::new("b", "B", 15.99),
        FakeProduct::new("c", "C", 20.00),
    ]);
    let ui = fake_ui(&store);

    products::logged_in_as_standard_user(&ui).await.unwrap();
    products::sort_by_price_low_to_high(&ui).await.unwrap();
}

#[tokio::test]
async fn test_unknown_sort_value_keeps_default_order() {
    let store = FakeStorefront::new();
    let ui = fake_ui(&store);

    products::logged_in_as_standard_user(&ui).await.unwrap();
    ui.select(&hooks::sort_container(), "bogus").await.unwrap();
    let before = texts(&ui, &hooks::inventory_item_price()).await;
    assert_eq!(before.first().map(String::as_str), Some("$29.99"));

    ui.select(&hooks::sort_container(), SORT_PRICE_LOW_TO_HIGH)
        .await
        .unwrap();
    let after = texts(&ui, &hooks::inventory_item_price()).await;
    assert_eq!(after.first().map(String::as_str), Some("$7.99"));
}
