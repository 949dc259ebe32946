use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入文件定位错误
    #[error(transparent)]
    Locate(#[from] LocateError),
    /// 文件操作错误
    #[error(transparent)]
    File(#[from] FileError),
    /// 配置错误
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// 生成 TypeScript 模块时序列化失败
    #[error("生成 TypeScript 模块失败")]
    Render(#[from] serde_json::Error),
}

/// 输入文件定位错误
#[derive(Debug, Error)]
pub enum LocateError {
    /// 所有候选路径都没有找到题单文件
    #[error("sheet.json not found! (项目根目录: {})", .project_root.display())]
    NotFound { project_root: PathBuf },
    /// 找到了路径，但文件已经不存在
    #[error("sheet.json not found! (路径: {})", .path.display())]
    Missing { path: PathBuf },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({}): {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// JSON 解析失败（包括缺少 data.questions）
    #[error("JSON解析失败 ({}): {source}", .path.display())]
    JsonParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({}): {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({}): {source}", .path.display())]
    TomlParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 调色板为空
    #[error("调色板不能为空")]
    EmptyPalette,
    /// 调色板中存在非法颜色
    #[error("调色板第 {index} 项不是合法的十六进制颜色: '{value}'")]
    InvalidColor { index: usize, value: String },
    /// 颜色校验规则无法编译
    #[error("颜色校验规则无效: {0}")]
    Pattern(#[from] regex::Error),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
