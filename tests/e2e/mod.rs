// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 端到端测试模块
///
/// 通过 Chrome 访问真实站点。未设置 `SAUCECHECK_E2E` 时跳过。
pub mod live_site_test;
