// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 结账表单信息
///
/// 自由文本，站点不做校验，这里也不做
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutInfo {
    pub first_name: String,
    pub last_name: String,
    pub postal_code: String,
}

impl CheckoutInfo {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            postal_code: postal_code.into(),
        }
    }
}
