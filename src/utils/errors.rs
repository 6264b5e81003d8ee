// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;
use thiserror::Error;

use crate::browser::traits::DriverError;
use crate::domain::models::price::PriceParseError;
use crate::domain::models::purchase::InvalidTransition;

/// 场景错误类型
///
/// 任何一个变体都意味着当前用例失败并立即终止
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// 断言在等待时限内未成立
    #[error("Expected {expectation}, but observed {observed} after {waited:?}")]
    Assertion {
        expectation: String,
        observed: String,
        waited: Duration,
    },

    /// 浏览器驱动错误
    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),

    /// 价格文本无法解析
    #[error("Price error: {0}")]
    InvalidPrice(#[from] PriceParseError),

    /// 购买流程阶段跳转非法
    #[error("Flow error: {0}")]
    InvalidTransition(#[from] InvalidTransition),
}

pub type ScenarioResult<T = ()> = Result<T, ScenarioError>;
