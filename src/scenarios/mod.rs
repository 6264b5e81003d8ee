// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 场景模块
///
/// 登录、商品列表与完整购买流程的用例体，以及把它们组织成套件的目录
pub mod catalog;
pub mod login;
pub mod products;
pub mod purchase;
