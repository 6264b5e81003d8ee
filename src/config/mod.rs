// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理被测站点、浏览器、等待策略与运行选项的配置
pub mod settings;
