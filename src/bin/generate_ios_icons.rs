//! 从 `assets/images/new_logo.png` 生成 iOS AppIcon 图标集与 `Contents.json`。

use std::process::ExitCode;

use app_icon_gen::icon_gen::{self, GeneratorConfig};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut stdout = std::io::stdout().lock();
    match icon_gen::run_ios(GeneratorConfig::default(), &mut stdout) {
        Ok(status) => status.exit_code(),
        Err(err) => {
            log::error!("写入标准输出失败: {err}");
            ExitCode::FAILURE
        }
    }
}
