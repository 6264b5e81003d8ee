// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 站点上可观察到的固定文本

/// 登录成功后的 URL 片段
pub const INVENTORY_PATH: &str = "/inventory.html";

/// 商品列表页标题
pub const PRODUCTS_HEADING: &str = "Products";

pub const LOCKED_OUT_MESSAGE: &str = "Epic sadface: Sorry, this user has been locked out.";

pub const CREDENTIAL_MISMATCH_MESSAGE: &str =
    "Epic sadface: Username and password do not match any user in this service";

/// 购物车角标在加入一件商品后的文本
pub const ONE_ITEM_BADGE: &str = "1";

/// 已加入购物车的商品按钮文本
pub const REMOVE_LABEL: &str = "Remove";

/// 排序下拉框 "Price (low to high)" 选项的 value
pub const SORT_PRICE_LOW_TO_HIGH: &str = "lohi";

pub const ORDER_COMPLETE_HEADING: &str = "Thank you for your order!";
