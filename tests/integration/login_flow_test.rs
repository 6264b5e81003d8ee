// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{expect_assertion, fake_ui, texts, FakeStorefront};
use saucecheck::browser::traits::PageDriver;
use saucecheck::domain::messages::{INVENTORY_PATH, LOCKED_OUT_MESSAGE};
use saucecheck::domain::models::credentials::Credentials;
use saucecheck::domain::selectors::hooks;
use saucecheck::scenarios::login;

#[tokio::test]
async fn test_valid_user_reaches_inventory() {
    let store = FakeStorefront::new();
    let ui = fake_ui(&store);

    login::valid_user_reaches_inventory(&ui).await.unwrap();

    let url = ui.driver().current_url().await.unwrap();
    assert!(url.ends_with(INVENTORY_PATH));
    assert_eq!(
        store.state(|s| s.session_user.clone()).as_deref(),
        Some("standard_user")
    );
}

#[tokio::test]
async fn test_locked_out_user_sees_error() {
    let store = FakeStorefront::new();
    let ui = fake_ui(&store);

    login::locked_out_user_sees_error(&ui).await.unwrap();

    let banner = texts(&ui, &hooks::error_banner()).await;
    assert_eq!(banner, vec![LOCKED_OUT_MESSAGE.to_string()]);
    assert!(store.state(|s| s.session_user.is_none()));
}

#[tokio::test]
async fn test_wrong_password_sees_error() {
    let store = FakeStorefront::new();
    let ui = fake_ui(&store);

    login::wrong_password_sees_error(&ui).await.unwrap();
    assert!(store.state(|s| s.session_user.is_none()));
}

#[tokio::test]
async fn test_repeated_login_is_idempotent() {
    let store = FakeStorefront::new();
    let ui = fake_ui(&store);

    login::repeated_login_is_idempotent(&ui).await.unwrap();

    // Two root visits, one per login
    assert_eq!(store.state(|s| s.visits.len()), 2);
}

#[tokio::test]
async fn test_login_waits_for_slow_rendering() {
    let store = FakeStorefront::new().with_render_lag(5);
    let ui = fake_ui(&store);

    login::valid_user_reaches_inventory(&ui).await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_locked_out_user_never_reaches_inventory() {
    let store = FakeStorefront::new();
    let ui = fake_ui(&store);

    login::login(&ui, &Credentials::locked_out_user())
        .await
        .unwrap();
    let err = login::expect_inventory(&ui).await.unwrap_err();

    let (expectation, observed) = expect_assertion(err);
    assert!(expectation.contains(INVENTORY_PATH));
    assert!(observed.contains("fake.saucedemo.test"));
}

#[tokio::test(start_paused = true)]
async fn test_locked_out_check_fails_for_valid_user() {
    let store = FakeStorefront::new();
    let ui = fake_ui(&store);

    login::login(&ui, &Credentials::standard_user())
        .await
        .unwrap();
    let err = ui
        .expect_visible_containing(&hooks::error_banner(), LOCKED_OUT_MESSAGE)
        .await
        .unwrap_err();

    let (expectation, _) = expect_assertion(err);
    assert!(expectation.contains(LOCKED_OUT_MESSAGE));
}

#[tokio::test]
async fn test_empty_username_is_reported_by_the_store() {
    let store = FakeStorefront::new();
    let ui = fake_ui(&store);

    login::login(&ui, &Credentials::new("", "secret_sauce"))
        .await
        .unwrap();
    ui.expect_visible_containing(&hooks::error_banner(), "Username is required")
        .await
        .unwrap();
}
