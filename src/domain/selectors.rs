// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

/// CSS 选择器
///
/// 只是一个带名字的 CSS 字符串；构造函数对应站点上两类稳定钩子：
/// `data-test` 属性和 class 名。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector(String);

impl Selector {
    /// `[data-test="value"]`
    pub fn data_test(value: &str) -> Self {
        Self(format!("[data-test=\"{}\"]", value))
    }

    /// `[data-test^="prefix"]`
    pub fn data_test_prefix(prefix: &str) -> Self {
        Self(format!("[data-test^=\"{}\"]", prefix))
    }

    /// `.class`
    pub fn class(name: &str) -> Self {
        Self(format!(".{}", name))
    }

    /// 后代选择器 `self descendant`
    pub fn descendant(&self, descendant: &str) -> Self {
        Self(format!("{} {}", self.0, descendant))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 被测站点上使用的全部选择器钩子
pub mod hooks {
    use super::Selector;

    // Login page
    pub fn username() -> Selector {
        Selector::data_test("username")
    }

    pub fn password() -> Selector {
        Selector::data_test("password")
    }

    pub fn login_button() -> Selector {
        Selector::data_test("login-button")
    }

    pub fn error_banner() -> Selector {
        Selector::data_test("error")
    }

    // Inventory page
    pub fn page_title() -> Selector {
        Selector::class("title")
    }

    pub fn inventory_list() -> Selector {
        Selector::class("inventory_list")
    }

    pub fn inventory_item() -> Selector {
        Selector::class("inventory_item")
    }

    /// Buttons inside product rows, in DOM order.
    pub fn inventory_item_button() -> Selector {
        inventory_item().descendant("button")
    }

    pub fn inventory_item_price() -> Selector {
        Selector::class("inventory_item_price")
    }

    pub fn sort_container() -> Selector {
        Selector::data_test("product_sort_container")
    }

    /// Every "add to cart" control, whatever the product.
    pub fn any_add_to_cart() -> Selector {
        Selector::data_test_prefix("add-to-cart-")
    }

    /// The "add to cart" control for one product id, e.g. `sauce-labs-backpack`.
    pub fn add_to_cart(product_id: &str) -> Selector {
        Selector::data_test(&format!("add-to-cart-{}", product_id))
    }

    // Cart
    pub fn cart_badge() -> Selector {
        Selector::class("shopping_cart_badge")
    }

    pub fn cart_link() -> Selector {
        Selector::class("shopping_cart_link")
    }

    pub fn cart_item() -> Selector {
        Selector::class("cart_item")
    }

    // Checkout
    pub fn checkout_button() -> Selector {
        Selector::data_test("checkout")
    }

    pub fn first_name() -> Selector {
        Selector::data_test("firstName")
    }

    pub fn last_name() -> Selector {
        Selector::data_test("lastName")
    }

    pub fn postal_code() -> Selector {
        Selector::data_test("postalCode")
    }

    pub fn continue_button() -> Selector {
        Selector::data_test("continue")
    }

    pub fn summary_total() -> Selector {
        Selector::class("summary_total_label")
    }

    pub fn finish_button() -> Selector {
        Selector::data_test("finish")
    }

    pub fn complete_header() -> Selector {
        Selector::class("complete-header")
    }

    pub fn back_to_products() -> Selector {
        Selector::data_test("back-to-products")
    }
}
