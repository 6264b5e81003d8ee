// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 浏览器模块
///
/// 页面驱动接口、基于 chromiumoxide 的实现、显式等待与场景操作层
pub mod browser;

/// 配置模块
///
/// 处理被测站点、浏览器和运行选项的配置
pub mod config;

/// 领域模块
///
/// 选择器钩子、期望文本与领域模型
pub mod domain;

/// 运行器模块
///
/// 套件定义、顺序执行与结果汇总
pub mod runner;

/// 场景模块
///
/// 登录、商品列表与购买流程的用例
pub mod scenarios;

/// 工具模块
///
/// 错误类型与日志初始化
pub mod utils;
