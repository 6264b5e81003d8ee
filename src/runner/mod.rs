// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 运行器模块
///
/// 按顺序执行套件中的用例：每个用例使用新页面和清空的会话，
/// 先运行套件前置钩子，再运行用例体，遇到第一个失败即终止该用例。
pub mod report;
pub mod suite;

use chrono::Utc;
use config::ConfigError;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{error, info, warn};
use url::Url;

use crate::browser::traits::{PageDriver, PageProvider};
use crate::browser::ui::Ui;
use crate::browser::wait::WaitPolicy;
use crate::config::settings::Settings;
use crate::utils::errors::ScenarioResult;
use report::{slug, CaseOutcome, CaseStatus, RunReport};
use suite::{Case, Suite};

/// 套件运行器
pub struct SuiteRunner<P: PageProvider> {
    provider: P,
    wait: WaitPolicy,
    base_url: Url,
    filter: Option<String>,
    screenshot_dir: Option<PathBuf>,
}

impl<P: PageProvider> SuiteRunner<P> {
    pub fn new(provider: P, wait: WaitPolicy, base_url: Url) -> Self {
        Self {
            provider,
            wait,
            base_url,
            filter: None,
            screenshot_dir: None,
        }
    }

    /// 按配置构建
    pub fn from_settings(provider: P, settings: &Settings) -> Result<Self, ConfigError> {
        let mut runner = Self::new(provider, settings.wait_policy(), settings.base_url()?);
        runner.filter = settings.run.filter.clone();
        runner.screenshot_dir = settings.run.screenshot_dir.as_ref().map(PathBuf::from);
        Ok(runner)
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_screenshot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.screenshot_dir = Some(dir.into());
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn into_provider(self) -> P {
        self.provider
    }

    /// 运行全部选中的用例
    pub async fn run(&self, suites: &[Suite]) -> RunReport {
        let mut report = RunReport::new(Utc::now());
        let filter = self.filter.as_deref();

        for suite in suites {
            let selected: Vec<&Case> = suite.selected(filter).collect();
            if selected.is_empty() {
                continue;
            }
            info!("Suite: {} ({} case(s))", suite.name, selected.len());

            for case in selected {
                let outcome = self.run_case(suite, case).await;
                report.record(outcome);
            }
        }

        if report.total() == 0 {
            warn!("No case matched filter {:?}", filter);
        }
        info!("Run finished: {}", report.summary());
        report
    }

    async fn run_case(&self, suite: &Suite, case: &Case) -> CaseOutcome {
        let name = suite.qualified_name(case);
        info!("Running {} on {}", name, self.provider.name());
        let start = Instant::now();

        let page = match self.provider.open_page().await {
            Ok(page) => page,
            Err(e) => {
                error!("FAILED {}: could not open page: {}", name, e);
                return CaseOutcome {
                    suite: suite.name.to_string(),
                    case: case.name.to_string(),
                    status: CaseStatus::Failed {
                        reason: e.to_string(),
                    },
                    duration: start.elapsed(),
                    screenshot: None,
                };
            }
        };

        let ui = Ui::new(page.clone(), self.wait, self.base_url.clone());
        let result = self.execute(&ui, suite, case).await;

        let (status, screenshot) = match result {
            Ok(()) => {
                info!("PASSED {} ({:?})", name, start.elapsed());
                (CaseStatus::Passed, None)
            }
            Err(e) => {
                error!("FAILED {}: {}", name, e);
                let screenshot = self.capture_screenshot(&page, suite, case).await;
                (
                    CaseStatus::Failed {
                        reason: e.to_string(),
                    },
                    screenshot,
                )
            }
        };

        if let Err(e) = page.close().await {
            warn!("Failed to close page for {}: {}", name, e);
        }

        CaseOutcome {
            suite: suite.name.to_string(),
            case: case.name.to_string(),
            status,
            duration: start.elapsed(),
            screenshot,
        }
    }

    async fn execute(&self, ui: &Ui, suite: &Suite, case: &Case) -> ScenarioResult {
        let origin = self.base_url.origin().ascii_serialization();
        ui.driver().reset_session(&origin).await?;

        if let Some(setup) = suite.setup {
            setup(ui).await?;
        }
        (case.body)(ui).await
    }

    async fn capture_screenshot(
        &self,
        page: &Arc<dyn PageDriver>,
        suite: &Suite,
        case: &Case,
    ) -> Option<PathBuf> {
        let dir = self.screenshot_dir.as_ref()?;

        let bytes = match page.screenshot().await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Screenshot failed: {}", e);
                return None;
            }
        };

        if let Err(e) = tokio::fs::create_dir_all(dir).await {
            warn!("Cannot create screenshot dir {}: {}", dir.display(), e);
            return None;
        }

        let path = dir.join(format!("{}__{}.png", slug(suite.name), slug(case.name)));
        match tokio::fs::write(&path, bytes).await {
            Ok(()) => {
                info!("Screenshot saved to {}", path.display());
                Some(path)
            }
            Err(e) => {
                warn!("Cannot write screenshot {}: {}", path.display(), e);
                None
            }
        }
    }
}
