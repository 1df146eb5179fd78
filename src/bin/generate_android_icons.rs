//! 从 `assets/images/new_logo.png` 生成 Android mipmap 图标与自适应前景层。

use std::process::ExitCode;

use app_icon_gen::icon_gen::{self, GeneratorConfig};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut stdout = std::io::stdout().lock();
    match icon_gen::run_android(GeneratorConfig::default(), &mut stdout) {
        Ok(status) => status.exit_code(),
        Err(err) => {
            log::error!("写入标准输出失败: {err}");
            ExitCode::FAILURE
        }
    }
}
