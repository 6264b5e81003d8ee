// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 被测站点的领域知识：
/// - 选择器钩子（selectors）：定位页面元素的稳定属性和 class
/// - 固定文本（messages）：断言期望的标题、错误信息、URL 片段
/// - 领域模型（models）：凭据、价格快照、结账信息、购买阶段
pub mod messages;
pub mod models;
pub mod selectors;
