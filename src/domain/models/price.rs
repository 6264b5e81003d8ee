// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;
use thiserror::Error;

/// 价格解析错误
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unparseable price label {label:?}")]
pub struct PriceParseError {
    pub label: String,
}

/// 解析价格标签，如 `"$29.99"`
///
/// 去掉首尾空白和一个前导 `$`，其余部分必须是有限的十进制数。
pub fn parse_price(label: &str) -> Result<f64, PriceParseError> {
    let trimmed = label.trim();
    let amount = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();

    match amount.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(PriceParseError {
            label: label.to_string(),
        }),
    }
}

/// 价格列表快照
///
/// 按页面渲染顺序采集的价格，只在一次排序校验中存活
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceList(Vec<f64>);

impl PriceList {
    pub fn new(prices: Vec<f64>) -> Self {
        Self(prices)
    }

    /// 从页面上的价格文本构造
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Result<Self, PriceParseError> {
        labels
            .iter()
            .map(|label| parse_price(label.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 升序排列的参考副本
    pub fn sorted_ascending(&self) -> Vec<f64> {
        let mut sorted = self.0.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        sorted
    }

    /// 渲染顺序是否已经等于数值升序
    ///
    /// 按值逐个比较，相等价格的先后不影响结果。
    pub fn is_ascending(&self) -> bool {
        self.0 == self.sorted_ascending()
    }
}

impl fmt::Display for PriceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, price) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.2}", price)?;
        }
        write!(f, "]")
    }
}
