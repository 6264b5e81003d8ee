// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Duration;

/// 用例结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseStatus {
    Passed,
    Failed { reason: String },
}

/// 单个用例的执行记录
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub suite: String,
    pub case: String,
    pub status: CaseStatus,
    pub duration: Duration,
    /// 失败截图路径
    pub screenshot: Option<PathBuf>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.status == CaseStatus::Passed
    }
}

/// 一次运行的汇总
#[derive(Debug, Clone)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub outcomes: Vec<CaseOutcome>,
}

impl RunReport {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            outcomes: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: CaseOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// 进程退出码：全部通过为 0，否则为 1
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    pub fn summary(&self) -> String {
        let elapsed: Duration = self.outcomes.iter().map(|o| o.duration).sum();
        format!(
            "{} passed, {} failed, {} total in {:.1}s",
            self.passed(),
            self.failed(),
            self.total(),
            elapsed.as_secs_f64()
        )
    }
}

/// 文件名安全的名称：小写字母数字，其余折叠为 `-`
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}
