// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 浏览器模块
///
/// 页面驱动接口、Chromium 实现、显式等待与场景操作层
pub mod chrome;
pub mod traits;
pub mod ui;
pub mod wait;
