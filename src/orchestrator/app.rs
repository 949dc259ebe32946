//! 题单生成器 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：校验配置和配色表
//! 2. **定位**：找到 sheet.json 并打印诊断信息
//! 3. **解析**：读取 `data.questions`
//! 4. **转换**：委托 `SheetFlow` 分组并渲染
//! 5. **写出**：整个模块生成成功后才写文件，任何前置失败都不会触碰旧文件
//! 6. **汇报**：输出统计信息

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{load_sheet_questions, Palette};
use crate::services::{OutputWriter, SheetLocator};
use crate::utils::logging::{
    log_locate_report, log_raw_count, log_startup, log_topic_summary, print_final_stats,
};
use crate::workflow::SheetFlow;
use std::path::PathBuf;
use tracing::info;

/// 应用主结构
pub struct App {
    config: Config,
    palette: Palette,
}

/// 生成统计
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationStats {
    pub sheet_path: PathBuf,
    pub raw_questions: usize,
    pub topics: usize,
    pub questions: usize,
    pub output_path: PathBuf,
    pub bytes_written: usize,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> AppResult<Self> {
        let palette = config.palette()?;

        log_startup(&config);

        Ok(Self { config, palette })
    }

    /// 运行应用主逻辑
    pub fn run(&self) -> AppResult<GenerationStats> {
        let sheet_path = self.locate_sheet()?;

        let questions = load_sheet_questions(&sheet_path)?;
        log_raw_count(questions.len());

        let generated = SheetFlow::new(&self.palette).run(&questions)?;
        log_topic_summary(&generated.topics);

        let writer = OutputWriter::new(self.config.output_file());
        let bytes_written = writer.write(&generated.module)?;
        print_final_stats(writer.path(), bytes_written);

        Ok(GenerationStats {
            sheet_path,
            raw_questions: questions.len(),
            topics: generated.topic_count(),
            questions: generated.question_count(),
            output_path: writer.path().to_path_buf(),
            bytes_written,
        })
    }

    /// 定位题单文件
    fn locate_sheet(&self) -> AppResult<PathBuf> {
        info!("\n📁 正在查找题单文件...");
        let report = SheetLocator::new(&self.config).inspect();
        log_locate_report(&report);

        Ok(report.into_sheet_path()?)
    }
}
