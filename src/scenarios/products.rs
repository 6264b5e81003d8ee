// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::info;

use crate::browser::ui::Ui;
use crate::domain::messages::{
    INVENTORY_PATH, ONE_ITEM_BADGE, REMOVE_LABEL, SORT_PRICE_LOW_TO_HIGH,
};
use crate::domain::models::credentials::Credentials;
use crate::domain::selectors::hooks;
use crate::scenarios::login::login;
use crate::utils::errors::ScenarioResult;

/// 套件前置：以标准用户登录并确认进入商品列表
pub async fn logged_in_as_standard_user(ui: &Ui) -> ScenarioResult {
    login(ui, &Credentials::standard_user()).await?;
    ui.expect_url_contains(INVENTORY_PATH).await?;
    Ok(())
}

/// 点击 DOM 顺序上第一个 "add to cart" 按钮
pub async fn add_first_product_to_cart(ui: &Ui) -> ScenarioResult {
    ui.click(&hooks::any_add_to_cart()).await?;
    ui.expect_text(&hooks::cart_badge(), ONE_ITEM_BADGE).await?;
    ui.expect_text(&hooks::inventory_item_button(), REMOVE_LABEL)
        .await
}

/// 价格从低到高排序后，页面顺序必须等于数值升序
pub async fn sort_by_price_low_to_high(ui: &Ui) -> ScenarioResult {
    ui.expect_visible(&hooks::inventory_list()).await?;
    ui.select(&hooks::sort_container(), SORT_PRICE_LOW_TO_HIGH)
        .await?;

    let prices = ui
        .expect_prices_ascending(&hooks::inventory_item_price())
        .await?;
    info!("Collected {} prices: {}", prices.len(), prices);
    Ok(())
}
