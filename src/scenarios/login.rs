// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::info;

use crate::browser::ui::Ui;
use crate::domain::messages::{
    CREDENTIAL_MISMATCH_MESSAGE, INVENTORY_PATH, LOCKED_OUT_MESSAGE, PRODUCTS_HEADING,
};
use crate::domain::models::credentials::Credentials;
use crate::domain::selectors::hooks;
use crate::utils::errors::ScenarioResult;

/// 登录
///
/// 打开首页、填写用户名和密码、提交。结果由调用方断言。
pub async fn login(ui: &Ui, credentials: &Credentials) -> ScenarioResult {
    info!("Logging in as {}", credentials.username);
    ui.visit_root().await?;
    ui.type_into(&hooks::username(), &credentials.username).await?;
    ui.type_into(&hooks::password(), &credentials.password).await?;
    ui.click(&hooks::login_button()).await
}

/// 断言位于商品列表页
pub async fn expect_inventory(ui: &Ui) -> ScenarioResult {
    ui.expect_url_contains(INVENTORY_PATH).await?;
    ui.expect_visible_text(&hooks::page_title(), PRODUCTS_HEADING)
        .await
}

/// 套件前置：打开首页
pub async fn open_login_page(ui: &Ui) -> ScenarioResult {
    ui.visit_root().await
}

pub async fn valid_user_reaches_inventory(ui: &Ui) -> ScenarioResult {
    login(ui, &Credentials::standard_user()).await?;
    expect_inventory(ui).await
}

pub async fn locked_out_user_sees_error(ui: &Ui) -> ScenarioResult {
    login(ui, &Credentials::locked_out_user()).await?;
    ui.expect_visible_containing(&hooks::error_banner(), LOCKED_OUT_MESSAGE)
        .await
}

pub async fn wrong_password_sees_error(ui: &Ui) -> ScenarioResult {
    login(ui, &Credentials::wrong_password()).await?;
    ui.expect_visible_containing(&hooks::error_banner(), CREDENTIAL_MISMATCH_MESSAGE)
        .await
}

/// 同一凭据连续登录两次，会话仍停留在商品列表
pub async fn repeated_login_is_idempotent(ui: &Ui) -> ScenarioResult {
    let credentials = Credentials::standard_user();
    login(ui, &credentials).await?;
    expect_inventory(ui).await?;
    login(ui, &credentials).await?;
    expect_inventory(ui).await
}
