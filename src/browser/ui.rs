// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::debug;
use url::Url;

use crate::browser::traits::{DriverError, ElementSnapshot, PageDriver};
use crate::browser::wait::{Probe, WaitPolicy};
use crate::domain::models::price::PriceList;
use crate::domain::selectors::Selector;
use crate::utils::errors::ScenarioResult;

/// 场景使用的页面操作层
///
/// 在 `PageDriver` 之上提供带等待的交互和断言：交互前等待目标元素
/// 出现且可见，断言在 `WaitPolicy` 时限内反复探测。
pub struct Ui {
    driver: Arc<dyn PageDriver>,
    wait: WaitPolicy,
    base_url: Url,
}

fn describe(snapshots: &[ElementSnapshot]) -> String {
    match snapshots {
        [] => "no matching element".to_string(),
        [first] => format!("{:?} (visible: {})", first.text, first.visible),
        [first, ..] => format!(
            "{} elements, first {:?} (visible: {})",
            snapshots.len(),
            first.text,
            first.visible
        ),
    }
}

impl Ui {
    pub fn new(driver: Arc<dyn PageDriver>, wait: WaitPolicy, base_url: Url) -> Self {
        Self {
            driver,
            wait,
            base_url,
        }
    }

    pub fn driver(&self) -> &Arc<dyn PageDriver> {
        &self.driver
    }

    /// 打开应用首页
    pub async fn visit_root(&self) -> ScenarioResult {
        self.visit(self.base_url.as_str()).await
    }

    pub async fn visit(&self, url: &str) -> ScenarioResult {
        debug!("visit {}", url);
        self.driver.visit(url).await?;
        Ok(())
    }

    /// 等待第一个匹配元素出现并可见
    async fn actionable(&self, selector: &Selector) -> ScenarioResult<ElementSnapshot> {
        let expectation = format!("{} to be visible", selector);
        self.wait
            .poll_until(&expectation, move || async move {
                let snapshots = self.driver.query(selector).await?;
                Ok::<_, DriverError>(match snapshots.first() {
                    Some(first) if first.visible => Probe::Ready(first.clone()),
                    _ => Probe::Pending(describe(&snapshots)),
                })
            })
            .await
    }

    pub async fn click(&self, selector: &Selector) -> ScenarioResult {
        self.actionable(selector).await?;
        debug!("click {}", selector);
        self.driver.click(selector).await?;
        Ok(())
    }

    pub async fn type_into(&self, selector: &Selector, text: &str) -> ScenarioResult {
        self.actionable(selector).await?;
        debug!("type into {}", selector);
        self.driver.type_text(selector, text).await?;
        Ok(())
    }

    pub async fn select(&self, selector: &Selector, value: &str) -> ScenarioResult {
        self.actionable(selector).await?;
        debug!("select {:?} on {}", value, selector);
        self.driver.select_option(selector, value).await?;
        Ok(())
    }

    /// 断言当前 URL 包含指定片段
    pub async fn expect_url_contains(&self, fragment: &str) -> ScenarioResult<String> {
        let expectation = format!("URL to include {:?}", fragment);
        self.wait
            .poll_until(&expectation, move || async move {
                let url = self.driver.current_url().await?;
                Ok::<_, DriverError>(if url.contains(fragment) {
                    Probe::Ready(url)
                } else {
                    Probe::Pending(format!("{:?}", url))
                })
            })
            .await
    }

    pub async fn expect_visible(&self, selector: &Selector) -> ScenarioResult<ElementSnapshot> {
        self.actionable(selector).await
    }

    /// 断言第一个匹配元素的文本完全等于 `expected`
    pub async fn expect_text(&self, selector: &Selector, expected: &str) -> ScenarioResult {
        let expectation = format!("{} to have text {:?}", selector, expected);
        self.wait
            .poll_until(&expectation, move || async move {
                let snapshots = self.driver.query(selector).await?;
                Ok::<_, DriverError>(match snapshots.first() {
                    Some(first) if first.text == expected => Probe::Ready(()),
                    _ => Probe::Pending(describe(&snapshots)),
                })
            })
            .await
    }

    /// 断言第一个匹配元素可见且文本完全等于 `expected`
    pub async fn expect_visible_text(&self, selector: &Selector, expected: &str) -> ScenarioResult {
        let expectation = format!("{} to be visible with text {:?}", selector, expected);
        self.wait
            .poll_until(&expectation, move || async move {
                let snapshots = self.driver.query(selector).await?;
                Ok::<_, DriverError>(match snapshots.first() {
                    Some(first) if first.visible && first.text == expected => Probe::Ready(()),
                    _ => Probe::Pending(describe(&snapshots)),
                })
            })
            .await
    }

    /// 断言第一个匹配元素可见且文本包含 `fragment`
    pub async fn expect_visible_containing(
        &self,
        selector: &Selector,
        fragment: &str,
    ) -> ScenarioResult {
        let expectation = format!("{} to be visible and contain {:?}", selector, fragment);
        self.wait
            .poll_until(&expectation, move || async move {
                let snapshots = self.driver.query(selector).await?;
                Ok::<_, DriverError>(match snapshots.first() {
                    Some(first) if first.visible && first.text.contains(fragment) => {
                        Probe::Ready(())
                    }
                    _ => Probe::Pending(describe(&snapshots)),
                })
            })
            .await
    }

    /// 断言匹配元素的数量
    pub async fn expect_count(&self, selector: &Selector, expected: usize) -> ScenarioResult {
        let expectation = format!("{} to match {} element(s)", selector, expected);
        self.wait
            .poll_until(&expectation, move || async move {
                let snapshots = self.driver.query(selector).await?;
                Ok::<_, DriverError>(if snapshots.len() == expected {
                    Probe::Ready(())
                } else {
                    Probe::Pending(format!("{} element(s)", snapshots.len()))
                })
            })
            .await
    }

    /// 等待匹配元素的价格文本按数值升序排列，返回最后采集到的列表
    ///
    /// 价格文本无法解析时立即失败，不再等待。
    pub async fn expect_prices_ascending(&self, selector: &Selector) -> ScenarioResult<PriceList> {
        let expectation = format!("prices of {} in ascending order", selector);
        let collected = self
            .wait
            .poll_until(&expectation, move || async move {
                let labels: Vec<String> = self
                    .driver
                    .query(selector)
                    .await?
                    .into_iter()
                    .map(|s| s.text)
                    .collect();
                Ok::<_, DriverError>(match PriceList::from_labels(&labels) {
                    Ok(prices) if !prices.is_ascending() => Probe::Pending(format!(
                        "{}, ascending would be {}",
                        prices,
                        PriceList::new(prices.sorted_ascending())
                    )),
                    parsed => Probe::Ready(parsed),
                })
            })
            .await?;
        Ok(collected?)
    }
}
