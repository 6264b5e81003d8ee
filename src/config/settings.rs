// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::browser::wait::WaitPolicy;

/// 应用程序配置设置
///
/// 包含被测站点、浏览器、等待策略和运行选项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 被测站点配置
    pub target: TargetSettings,
    /// 浏览器配置
    pub browser: BrowserSettings,
    /// 等待策略配置
    pub wait: WaitSettings,
    /// 运行选项
    #[serde(default)]
    pub run: RunSettings,
}

/// 被测站点配置
#[derive(Debug, Clone, Deserialize)]
pub struct TargetSettings {
    /// 应用首页地址
    pub base_url: String,
}

/// 浏览器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserSettings {
    /// 是否无头运行
    pub headless: bool,
    /// 远程调试地址（设置后连接而不是启动）
    pub remote_debugging_url: Option<String>,
    /// Chrome 可执行文件路径
    pub chrome_executable: Option<String>,
    /// CDP 请求超时时间（秒）
    pub request_timeout_secs: u64,
    /// 窗口宽度
    pub window_width: u32,
    /// 窗口高度
    pub window_height: u32,
}

/// 等待策略配置
#[derive(Debug, Clone, Deserialize)]
pub struct WaitSettings {
    /// 断言最长等待时间（毫秒）
    pub timeout_ms: u64,
    /// 轮询间隔（毫秒）
    pub poll_interval_ms: u64,
}

/// 运行选项
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunSettings {
    /// 只运行 "套件 / 用例" 名称包含该子串的用例
    pub filter: Option<String>,
    /// 失败截图目录
    pub screenshot_dir: Option<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加：内置默认值、`config/default`、`config/{APP_ENVIRONMENT}`、
    /// `SAUCECHECK__` 前缀的环境变量
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// 从指定目录加载配置文件，环境名和覆盖变量取自进程环境
    pub fn load_from(config_dir: &Path) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::load_with(config_dir, &env, None)
    }

    /// 使用给定的环境名加载
    ///
    /// `vars` 为 `Some` 时代替进程环境变量作为 `SAUCECHECK__` 覆盖来源
    pub fn load_with(
        config_dir: &Path,
        env: &str,
        vars: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let default_file = config_dir.join("default");
        let env_file = config_dir.join(env);

        let builder = Config::builder()
            // Target
            .set_default("target.base_url", "https://www.saucedemo.com/")?
            // Browser
            .set_default("browser.headless", true)?
            .set_default("browser.request_timeout_secs", 30)?
            .set_default("browser.window_width", 1280)?
            .set_default("browser.window_height", 720)?
            // Waiting
            .set_default("wait.timeout_ms", 4000)?
            .set_default("wait.poll_interval_ms", 50)?
            .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(File::with_name(&env_file.to_string_lossy()).required(false))
            .add_source(
                Environment::with_prefix("SAUCECHECK")
                    .separator("__")
                    .source(vars),
            );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.base_url()?;
        Ok(settings)
    }

    /// 解析后的首页地址
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.target.base_url).map_err(|e| {
            ConfigError::Message(format!(
                "target.base_url {:?} is not a valid URL: {}",
                self.target.base_url, e
            ))
        })
    }

    pub fn wait_policy(&self) -> WaitPolicy {
        WaitPolicy::new(
            Duration::from_millis(self.wait.timeout_ms),
            Duration::from_millis(self.wait.poll_interval_ms),
        )
    }
}
