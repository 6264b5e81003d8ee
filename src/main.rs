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

use saucecheck::browser::chrome::ChromeSession;
use saucecheck::config::settings::Settings;
use saucecheck::runner::SuiteRunner;
use saucecheck::scenarios::catalog;
use saucecheck::utils::telemetry;
use tracing::{error, info, warn};

/// 主函数
///
/// 加载配置、启动浏览器、顺序运行全部套件，并以退出码报告结果
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting saucecheck...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Target: {}", settings.target.base_url);

    // 3. Start the browser
    let session = ChromeSession::launch(&settings.browser).await?;
    info!("Browser session ready");

    // 4. Run suites
    let runner = SuiteRunner::from_settings(session, &settings)?;
    let report = runner.run(&catalog::all_suites()).await;

    for failure in report.failures() {
        error!("{} / {}: {:?}", failure.suite, failure.case, failure.status);
    }

    // 5. Shut down
    if let Err(e) = runner.into_provider().close().await {
        warn!("Browser shutdown failed: {}", e);
    }

    info!("{}", report.summary());
    std::process::exit(report.exit_code());
}
