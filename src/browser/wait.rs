// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

use crate::browser::traits::DriverError;
use crate::utils::errors::{ScenarioError, ScenarioResult};

/// 默认等待时限
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(4000);

/// 默认轮询间隔
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// 一次探测的结果
#[derive(Debug, Clone, PartialEq)]
pub enum Probe<T> {
    /// 条件成立，携带观察到的值
    Ready(T),
    /// 条件尚未成立，携带当前观察到的状态（用于失败信息）
    Pending(String),
}

/// 等待策略配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    /// 最长等待时间
    pub timeout: Duration,
    /// 两次探测之间的间隔
    pub poll_interval: Duration,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl WaitPolicy {
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }

    /// 反复探测直到条件成立或超时
    ///
    /// 至少探测一次。驱动错误不重试，直接返回；超时返回
    /// `ScenarioError::Assertion`，其中带有最后一次观察到的状态。
    pub async fn poll_until<T, F, Fut>(&self, expectation: &str, mut probe: F) -> ScenarioResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Probe<T>, DriverError>>,
    {
        let start = Instant::now();
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            let observed = match probe().await? {
                Probe::Ready(value) => {
                    debug!("{} held after {} probe(s)", expectation, attempts);
                    return Ok(value);
                }
                Probe::Pending(observed) => observed,
            };

            let waited = start.elapsed();
            if waited >= self.timeout {
                warn!(
                    "Timed out after {:?} ({} probes) waiting for {}; last observed {}",
                    waited, attempts, expectation, observed
                );
                return Err(ScenarioError::Assertion {
                    expectation: expectation.to_string(),
                    observed,
                    waited,
                });
            }

            sleep(self.poll_interval.min(self.timeout - waited)).await;
        }
    }
}
