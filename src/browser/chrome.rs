// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::input::InsertTextParams;
use chromiumoxide::cdp::browser_protocol::network::ClearBrowserCookiesParams;
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::cdp::browser_protocol::storage::ClearDataForOriginParams;
use chromiumoxide::error::CdpError;
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::browser::traits::{DriverError, ElementSnapshot, PageDriver, PageProvider};
use crate::config::settings::BrowserSettings;
use crate::domain::selectors::Selector;

fn protocol_error(e: impl std::fmt::Display) -> DriverError {
    DriverError::Protocol(e.to_string())
}

/// `find_element` on a selector with no match resolves node id 0, which
/// Chrome rejects with "Could not find node with given id".
fn is_missing_element(error: &CdpError) -> bool {
    matches!(error, CdpError::NotFound) || error.to_string().contains("Could not find node")
}

/// JSON-quote a selector so it can be embedded in a script.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Chromium 会话
///
/// 本地启动或连接远程调试端口，持有 CDP 事件处理任务
pub struct ChromeSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    remote: bool,
}

impl ChromeSession {
    /// 按配置启动或连接浏览器
    pub async fn launch(settings: &BrowserSettings) -> Result<Self, DriverError> {
        let remote = settings.remote_debugging_url.is_some();

        let (browser, mut handler) = if let Some(ref url) = settings.remote_debugging_url {
            info!("Connecting to remote Chrome instance at: {}", url);
            Browser::connect(url.as_str()).await.map_err(|e| {
                DriverError::Launch(format!("Failed to connect to remote Chrome: {}", e))
            })?
        } else {
            let mut builder = BrowserConfig::builder()
                .no_sandbox()
                .request_timeout(Duration::from_secs(settings.request_timeout_secs))
                .window_size(settings.window_width, settings.window_height)
                .arg("--disable-gpu")
                .arg("--disable-dev-shm-usage");

            if !settings.headless {
                builder = builder.with_head();
            }
            if let Some(ref path) = settings.chrome_executable {
                builder = builder.chrome_executable(path);
            }

            info!(
                "Launching Chrome (headless: {}, {}x{})",
                settings.headless, settings.window_width, settings.window_height
            );
            Browser::launch(builder.build().map_err(DriverError::Launch)?)
                .await
                .map_err(|e| DriverError::Launch(e.to_string()))?
        };

        // Drive CDP events for the lifetime of the session.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("CDP handler event error: {}", e);
                }
            }
        });

        Ok(Self {
            browser,
            handler_task,
            remote,
        })
    }

    /// 关闭会话
    ///
    /// 远程浏览器只断开连接，不关闭进程
    pub async fn close(mut self) -> Result<(), DriverError> {
        if !self.remote {
            self.browser.close().await.map_err(protocol_error)?;
            if let Err(e) = self.browser.wait().await {
                warn!("Chrome did not exit cleanly: {}", e);
            }
        }
        self.handler_task.abort();
        Ok(())
    }
}

#[async_trait]
impl PageProvider for ChromeSession {
    async fn open_page(&self) -> Result<Arc<dyn PageDriver>, DriverError> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(protocol_error)?;
        Ok(Arc::new(ChromePage { page }))
    }

    fn name(&self) -> &'static str {
        "chrome"
    }
}

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    text: String,
    visible: bool,
}

/// 基于 chromiumoxide 的页面驱动
pub struct ChromePage {
    page: Page,
}

impl ChromePage {
    async fn first_element(
        &self,
        selector: &Selector,
    ) -> Result<chromiumoxide::Element, DriverError> {
        self.page
            .find_element(selector.as_str())
            .await
            .map_err(|e| {
                if is_missing_element(&e) {
                    DriverError::ElementNotFound(selector.to_string())
                } else {
                    protocol_error(e)
                }
            })
    }
}

#[async_trait]
impl PageDriver for ChromePage {
    async fn visit(&self, url: &str) -> Result<(), DriverError> {
        // goto waits for the load event
        self.page
            .goto(url)
            .await
            .map_err(|e| DriverError::Navigation {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        Ok(())
    }

    async fn current_url(&self) -> Result<String, DriverError> {
        Ok(self
            .page
            .url()
            .await
            .map_err(protocol_error)?
            .unwrap_or_default())
    }

    async fn query(&self, selector: &Selector) -> Result<Vec<ElementSnapshot>, DriverError> {
        let script = format!(
            r#"(() => Array.from(document.querySelectorAll({sel})).map((el) => {{
                const style = window.getComputedStyle(el);
                const rect = el.getBoundingClientRect();
                const visible = style.display !== 'none'
                    && style.visibility !== 'hidden'
                    && rect.width > 0 && rect.height > 0;
                return {{ text: el.textContent || '', visible }};
            }}))()"#,
            sel = js_string(selector.as_str())
        );

        let raw: Vec<RawSnapshot> = self
            .page
            .evaluate(script)
            .await
            .map_err(|e| DriverError::Script(e.to_string()))?
            .into_value()
            .map_err(|e| DriverError::Script(e.to_string()))?;

        Ok(raw
            .into_iter()
            .map(|r| ElementSnapshot {
                text: r.text,
                visible: r.visible,
            })
            .collect())
    }

    async fn click(&self, selector: &Selector) -> Result<(), DriverError> {
        self.first_element(selector)
            .await?
            .click()
            .await
            .map_err(|e| DriverError::Protocol(format!("Click failed: {}", e)))?;
        Ok(())
    }

    async fn type_text(&self, selector: &Selector, text: &str) -> Result<(), DriverError> {
        self.first_element(selector)
            .await?
            .focus()
            .await
            .map_err(|e| DriverError::Protocol(format!("Focus failed: {}", e)))?;

        // insertText handles non-ASCII input that per-key dispatch cannot.
        self.page
            .execute(InsertTextParams::new(text))
            .await
            .map_err(|e| DriverError::Protocol(format!("Input failed: {}", e)))?;
        Ok(())
    }

    async fn select_option(&self, selector: &Selector, value: &str) -> Result<(), DriverError> {
        // The native setter is required for React to observe the change.
        let script = format!(
            r#"(() => {{
                const el = document.querySelector({sel});
                if (!el) return false;
                const setter = Object.getOwnPropertyDescriptor(HTMLSelectElement.prototype, 'value').set;
                setter.call(el, {value});
                el.dispatchEvent(new Event('change', {{ bubbles: true }}));
                return true;
            }})()"#,
            sel = js_string(selector.as_str()),
            value = js_string(value)
        );

        let found: bool = self
            .page
            .evaluate(script)
            .await
            .map_err(|e| DriverError::Script(e.to_string()))?
            .into_value()
            .map_err(|e| DriverError::Script(e.to_string()))?;

        if !found {
            return Err(DriverError::ElementNotFound(selector.to_string()));
        }
        Ok(())
    }

    async fn reset_session(&self, origin: &str) -> Result<(), DriverError> {
        self.page
            .execute(ClearBrowserCookiesParams::default())
            .await
            .map_err(protocol_error)?;
        self.page
            .execute(ClearDataForOriginParams::new(origin, "all"))
            .await
            .map_err(protocol_error)?;
        Ok(())
    }

    async fn screenshot(&self) -> Result<Vec<u8>, DriverError> {
        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .full_page(true)
            .build();

        self.page
            .screenshot(params)
            .await
            .map_err(|e| DriverError::Protocol(format!("Page screenshot failed: {}", e)))
    }

    async fn close(&self) -> Result<(), DriverError> {
        self.page.clone().close().await.map_err(protocol_error)
    }
}
