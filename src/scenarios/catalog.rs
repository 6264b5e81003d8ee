// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::browser::ui::Ui;
use crate::runner::suite::Suite;
use crate::scenarios::{login, products, purchase};
use crate::utils::errors::ScenarioResult;

fn open_login_page(ui: &Ui) -> BoxFuture<'_, ScenarioResult> {
    login::open_login_page(ui).boxed()
}

fn valid_login(ui: &Ui) -> BoxFuture<'_, ScenarioResult> {
    login::valid_user_reaches_inventory(ui).boxed()
}

fn locked_out_login(ui: &Ui) -> BoxFuture<'_, ScenarioResult> {
    login::locked_out_user_sees_error(ui).boxed()
}

fn wrong_password_login(ui: &Ui) -> BoxFuture<'_, ScenarioResult> {
    login::wrong_password_sees_error(ui).boxed()
}

fn repeated_login(ui: &Ui) -> BoxFuture<'_, ScenarioResult> {
    login::repeated_login_is_idempotent(ui).boxed()
}

fn logged_in(ui: &Ui) -> BoxFuture<'_, ScenarioResult> {
    products::logged_in_as_standard_user(ui).boxed()
}

fn add_to_cart(ui: &Ui) -> BoxFuture<'_, ScenarioResult> {
    products::add_first_product_to_cart(ui).boxed()
}

fn price_sort(ui: &Ui) -> BoxFuture<'_, ScenarioResult> {
    products::sort_by_price_low_to_high(ui).boxed()
}

fn full_purchase(ui: &Ui) -> BoxFuture<'_, ScenarioResult> {
    purchase::complete_purchase(ui).boxed()
}

pub fn login_suite() -> Suite {
    Suite::new("Swag Labs - Login")
        .before_each(open_login_page)
        .case("logs in with a valid user", valid_login)
        .case("shows an error for a locked out user", locked_out_login)
        .case("shows an error for a wrong password", wrong_password_login)
        .case("stays logged in when logging in twice", repeated_login)
}

pub fn products_suite() -> Suite {
    Suite::new("Swag Labs - Products")
        .before_each(logged_in)
        .case("adds a product to the cart", add_to_cart)
        .case("sorts products by price low to high", price_sort)
}

pub fn purchase_suite() -> Suite {
    Suite::new("Swag Labs - Purchase flow")
        .case("completes a purchase from login to confirmation", full_purchase)
}

/// 全部套件，按执行顺序
pub fn all_suites() -> Vec<Suite> {
    vec![login_suite(), products_suite(), purchase_suite()]
}
