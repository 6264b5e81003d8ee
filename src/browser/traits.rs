// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::selectors::Selector;

/// 浏览器驱动错误类型
#[derive(Error, Debug)]
pub enum DriverError {
    /// 浏览器启动或连接失败
    #[error("Browser launch failed: {0}")]
    Launch(String),
    /// 页面导航失败
    #[error("Navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },
    /// 没有元素匹配选择器
    #[error("No element matches {0}")]
    ElementNotFound(String),
    /// 脚本执行失败
    #[error("Script evaluation failed: {0}")]
    Script(String),
    /// CDP 协议错误
    #[error("CDP error: {0}")]
    Protocol(String),
}

/// 元素快照
///
/// 查询时刻元素的可观察状态，断言只针对快照进行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSnapshot {
    /// 元素的 textContent
    pub text: String,
    /// 元素是否可见（有尺寸且未被 CSS 隐藏）
    pub visible: bool,
}

impl ElementSnapshot {
    pub fn visible(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visible: true,
        }
    }

    pub fn hidden(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visible: false,
        }
    }
}

/// 页面驱动特质
///
/// 场景代码只通过这个接口与浏览器交互。所有方法都是"立即执行"的：
/// 不做任何等待，等待语义由 `browser::wait` 和 `browser::ui` 显式提供。
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// 导航到指定 URL 并等待加载完成
    async fn visit(&self, url: &str) -> Result<(), DriverError>;

    /// 当前页面 URL
    async fn current_url(&self) -> Result<String, DriverError>;

    /// 按 DOM 顺序返回所有匹配元素的快照
    async fn query(&self, selector: &Selector) -> Result<Vec<ElementSnapshot>, DriverError>;

    /// 点击第一个匹配元素
    async fn click(&self, selector: &Selector) -> Result<(), DriverError>;

    /// 向第一个匹配元素输入文本
    async fn type_text(&self, selector: &Selector, text: &str) -> Result<(), DriverError>;

    /// 在第一个匹配的 `<select>` 上选择指定 value
    async fn select_option(&self, selector: &Selector, value: &str) -> Result<(), DriverError>;

    /// 清空 cookies 以及 `origin` 下的 Web Storage
    async fn reset_session(&self, origin: &str) -> Result<(), DriverError>;

    /// 整页 PNG 截图
    async fn screenshot(&self) -> Result<Vec<u8>, DriverError>;

    /// 关闭页面
    async fn close(&self) -> Result<(), DriverError>;
}

/// 页面提供者
///
/// 为每个用例打开一个全新的页面
#[async_trait]
pub trait PageProvider: Send + Sync {
    async fn open_page(&self) -> Result<Arc<dyn PageDriver>, DriverError>;

    /// 提供者名称，用于日志
    fn name(&self) -> &'static str;
}
