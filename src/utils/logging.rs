/// 日志工具模块
///
/// 初始化日志输出，以及生成过程中所有需要打印的汇报信息
use crate::config::Config;
use crate::models::SheetTopic;
use crate::services::LocateReport;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// 初始化日志（输出到标准输出）
///
/// 日志级别只由配置决定，不读取环境变量，汇报信息总会打印
///
/// # 参数
/// - `verbose`: 是否输出 debug 级别日志
pub fn init(verbose: bool) {
    let filter = EnvFilter::new(if verbose { "debug" } else { "info" });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 程序配置
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 题单生成启动");
    info!("📁 项目根目录: {}", config.project_root.display());
    info!("🎨 配色数量: {}", config.topic_colors.len());
    info!("{}", "=".repeat(60));
}

/// 打印定位结果和诊断信息
///
/// # 参数
/// - `report`: 定位报告
pub fn log_locate_report(report: &LocateReport) {
    match &report.sheet_path {
        Some(path) => info!("Looking for sheet at: {}", path.display()),
        None => info!("Looking for sheet at: None"),
    }
    info!("File exists: {}", report.exists);

    if let Some(listing) = &report.scripts_listing {
        info!(
            "Scripts dir contents ({}): {:?}",
            report.scripts_dir.display(),
            listing
        );
    }

    match &report.cwd {
        Some(cwd) => info!("CWD: {}", cwd.display()),
        None => info!("CWD: <unknown>"),
    }
    info!("CWD contents: {:?}", report.cwd_listing);

    if report.sheet_path.is_none() || !report.exists {
        error!("❌ ERROR: sheet.json not found!");
    }
}

/// 记录原始题目数量
pub fn log_raw_count(total: usize) {
    info!("✓ Total raw questions: {}", total);
}

/// 打印每个专题的子专题数和题目数，以及总计
///
/// # 参数
/// - `topics`: 分组后的专题
pub fn log_topic_summary(topics: &[SheetTopic]) {
    info!("\n{}", "─".repeat(60));
    for topic in topics {
        info!(
            "  {}: {} sub-topics, {} questions",
            topic.title,
            topic.sub_topics.len(),
            topic.question_count()
        );
    }
    let total_questions: usize = topics.iter().map(SheetTopic::question_count).sum();
    info!("{}", "─".repeat(60));
    info!("📊 Total: {} topics, {} questions", topics.len(), total_questions);
}

/// 打印最终结果
///
/// # 参数
/// - `output_path`: 输出文件路径
/// - `bytes_written`: 写入字节数
pub fn print_final_stats(output_path: &Path, bytes_written: usize) {
    info!("\n{}", "=".repeat(60));
    info!(
        "✅ Written to {} ({} bytes)",
        output_path.display(),
        bytes_written
    );
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}
