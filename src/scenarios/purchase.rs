// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::info;

use crate::browser::ui::Ui;
use crate::domain::messages::{INVENTORY_PATH, ONE_ITEM_BADGE, ORDER_COMPLETE_HEADING};
use crate::domain::models::checkout::CheckoutInfo;
use crate::domain::models::credentials::Credentials;
use crate::domain::models::purchase::PurchaseStage;
use crate::domain::selectors::hooks;
use crate::scenarios::login::login;
use crate::utils::errors::ScenarioResult;

/// 购买流程使用的商品
pub const BACKPACK_PRODUCT_ID: &str = "sauce-labs-backpack";

/// 结账表单样例数据
pub fn sample_shopper() -> CheckoutInfo {
    CheckoutInfo::new("Rosângela", "Soares", "69000-000")
}

/// 完整购买流程，任一步失败即终止
pub async fn complete_purchase(ui: &Ui) -> ScenarioResult {
    purchase(ui, BACKPACK_PRODUCT_ID, &sample_shopper())
        .await
        .map(|_| ())
}

/// 以标准用户购买 `product_id`，成功时返回终态
pub async fn purchase(
    ui: &Ui,
    product_id: &str,
    shopper: &CheckoutInfo,
) -> ScenarioResult<PurchaseStage> {
    let mut stage = PurchaseStage::Anonymous;
    walk_purchase(ui, product_id, shopper, &mut stage).await?;
    Ok(stage)
}

/// 逐步推进购买流程
///
/// 每个阶段在对应的点击动作完成并确认后前进；失败时 `stage` 停在
/// 最后一个已到达的阶段。
pub async fn walk_purchase(
    ui: &Ui,
    product_id: &str,
    shopper: &CheckoutInfo,
    stage: &mut PurchaseStage,
) -> ScenarioResult {
    // 1. Login
    login(ui, &Credentials::standard_user()).await?;
    ui.expect_url_contains(INVENTORY_PATH).await?;
    stage.advance(PurchaseStage::Authenticated)?;

    // 2. Add the product
    ui.click(&hooks::add_to_cart(product_id)).await?;
    ui.expect_text(&hooks::cart_badge(), ONE_ITEM_BADGE).await?;
    stage.advance(PurchaseStage::ItemInCart)?;

    // 3. Cart
    ui.click(&hooks::cart_link()).await?;
    ui.expect_count(&hooks::cart_item(), 1).await?;
    stage.advance(PurchaseStage::CartView)?;

    // 4. Checkout information form
    ui.click(&hooks::checkout_button()).await?;
    ui.expect_visible(&hooks::first_name()).await?;
    stage.advance(PurchaseStage::CheckoutInfo)?;

    ui.type_into(&hooks::first_name(), &shopper.first_name)
        .await?;
    ui.type_into(&hooks::last_name(), &shopper.last_name).await?;
    ui.type_into(&hooks::postal_code(), &shopper.postal_code)
        .await?;

    // 5. Overview
    ui.click(&hooks::continue_button()).await?;
    ui.expect_visible(&hooks::summary_total()).await?;
    stage.advance(PurchaseStage::CheckoutOverview)?;

    // 6. Confirmation
    ui.click(&hooks::finish_button()).await?;
    ui.expect_text(&hooks::complete_header(), ORDER_COMPLETE_HEADING)
        .await?;
    ui.expect_visible(&hooks::back_to_products()).await?;
    stage.advance(PurchaseStage::OrderComplete)?;

    info!("Order for {} completed", product_id);
    Ok(())
}
