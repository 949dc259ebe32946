use crate::error::{AppError, AppResult, FileError};
use crate::models::palette::{Palette, DEFAULT_TOPIC_COLORS};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// 可选配置文件名（在当前工作目录下查找）
pub const CONFIG_FILE_NAME: &str = "sheet-codegen.toml";

/// 程序配置
///
/// 所有路径都相对于 `project_root`，绝对路径则原样使用
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 项目根目录
    pub project_root: PathBuf,
    /// 存放题单文件的脚本目录
    pub scripts_dir: PathBuf,
    /// 首选的题单文件名
    pub input_file_name: String,
    /// 脚本目录下的备选匹配模式
    pub input_glob: String,
    /// 遍历项目目录时的文件名前缀
    pub walk_prefix: String,
    /// 遍历项目目录时的文件名后缀
    pub walk_suffix: String,
    /// 遍历项目目录时跳过的目录名
    pub walk_skip_dirs: Vec<String>,
    /// 生成的 TypeScript 文件
    pub output_path: PathBuf,
    /// 专题配色
    pub topic_colors: Vec<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            scripts_dir: PathBuf::from("scripts"),
            input_file_name: "sheet.json".to_string(),
            input_glob: "sheet-*.json".to_string(),
            walk_prefix: "sheet".to_string(),
            walk_suffix: ".json".to_string(),
            walk_skip_dirs: vec![".git".to_string(), "node_modules".to_string()],
            output_path: PathBuf::from("lib/sheet-data.ts"),
            topic_colors: DEFAULT_TOPIC_COLORS.iter().map(|c| c.to_string()).collect(),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 读取配置文件；文件不存在时使用默认配置
    pub fn load(config_path: &Path) -> AppResult<Self> {
        if !config_path.is_file() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)
            .map_err(|e| AppError::file_read_failed(config_path, e))?;

        toml::from_str(&content).map_err(|source| {
            FileError::TomlParseFailed {
                path: config_path.to_path_buf(),
                source,
            }
            .into()
        })
    }

    /// 以指定目录为项目根目录的默认配置
    pub fn for_project(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            ..Self::default()
        }
    }

    pub fn scripts_path(&self) -> PathBuf {
        self.project_root.join(&self.scripts_dir)
    }

    pub fn output_file(&self) -> PathBuf {
        self.project_root.join(&self.output_path)
    }

    /// 校验后的配色表
    pub fn palette(&self) -> AppResult<Palette> {
        Palette::new(self.topic_colors.clone())
    }
}
