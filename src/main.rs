use anyhow::Result;
use sheet_codegen::config::{Config, CONFIG_FILE_NAME};
use sheet_codegen::utils::logging;
use sheet_codegen::App;
use std::path::Path;

fn main() -> Result<()> {
    // 加载配置
    let config = Config::load(Path::new(CONFIG_FILE_NAME))?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config)?.run()?;

    Ok(())
}
