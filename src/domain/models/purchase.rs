// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;
use thiserror::Error;

/// 购买流程阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PurchaseStage {
    /// 未登录
    Anonymous,
    /// 已登录，位于商品列表
    Authenticated,
    /// 购物车中有一件商品
    ItemInCart,
    /// 购物车页面
    CartView,
    /// 结账信息表单已提交
    CheckoutInfo,
    /// 订单概览
    CheckoutOverview,
    /// 订单完成
    OrderComplete,
}

/// 非法阶段跳转
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid purchase transition {from} -> {to}")]
pub struct InvalidTransition {
    pub from: PurchaseStage,
    pub to: PurchaseStage,
}

impl PurchaseStage {
    /// 唯一合法的下一阶段，终态返回 `None`
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Anonymous => Some(Self::Authenticated),
            Self::Authenticated => Some(Self::ItemInCart),
            Self::ItemInCart => Some(Self::CartView),
            Self::CartView => Some(Self::CheckoutInfo),
            Self::CheckoutInfo => Some(Self::CheckoutOverview),
            Self::CheckoutOverview => Some(Self::OrderComplete),
            Self::OrderComplete => None,
        }
    }

    /// 前进到 `to`；不可跳过、不可回退
    pub fn advance(&mut self, to: PurchaseStage) -> Result<(), InvalidTransition> {
        if self.next() != Some(to) {
            return Err(InvalidTransition { from: *self, to });
        }
        tracing::info!("Purchase stage {} -> {}", self, to);
        *self = to;
        Ok(())
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for PurchaseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Anonymous => "Anonymous",
            Self::Authenticated => "Authenticated",
            Self::ItemInCart => "ItemInCart",
            Self::CartView => "CartView",
            Self::CheckoutInfo => "CheckoutInfo",
            Self::CheckoutOverview => "CheckoutOverview",
            Self::OrderComplete => "OrderComplete",
        };
        f.write_str(name)
    }
}
