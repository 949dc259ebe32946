//! 输出写入服务 - 业务能力层
//!
//! 只负责"把生成的模块写到磁盘"能力，直接覆盖已有文件

use crate::error::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 输出写入服务
pub struct OutputWriter {
    output_path: PathBuf,
}

impl OutputWriter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.output_path
    }

    /// 写入内容，返回写入的字节数
    ///
    /// 父目录不存在时会先创建
    pub fn write(&self, content: &str) -> AppResult<usize> {
        debug!(
            "写入输出: {} | 长度: {}",
            self.output_path.display(),
            content.len()
        );

        let parent = self
            .output_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty());
        if let Some(parent) = parent {
            fs::create_dir_all(parent).map_err(|e| AppError::file_write_failed(parent, e))?;
        }

        fs::write(&self.output_path, content)
            .map_err(|e| AppError::file_write_failed(&self.output_path, e))?;

        Ok(content.len())
    }
}
