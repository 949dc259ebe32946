//! 题单定位服务 - 业务能力层
//!
//! 只负责"找到 sheet.json"能力，按以下顺序尝试：
//!
//! 1. `scripts/sheet.json`
//! 2. `scripts/sheet-*.json`（按路径排序取第一个）
//! 3. 遍历整个项目目录，取第一个 `sheet*.json`
//!
//! 遍历顺序是确定的：同一目录下的条目按名称排序，先看文件再进入子目录，
//! 找到第一个匹配后立即停止。

use crate::config::Config;
use crate::error::LocateError;
use glob::{glob, Pattern};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 题单定位服务
#[derive(Debug, Clone)]
pub struct SheetLocator {
    project_root: PathBuf,
    scripts_dir: PathBuf,
    input_file_name: String,
    input_glob: String,
    walk_prefix: String,
    walk_suffix: String,
    walk_skip_dirs: Vec<String>,
}

impl SheetLocator {
    pub fn new(config: &Config) -> Self {
        Self {
            project_root: config.project_root.clone(),
            scripts_dir: config.scripts_path(),
            input_file_name: config.input_file_name.clone(),
            input_glob: config.input_glob.clone(),
            walk_prefix: config.walk_prefix.clone(),
            walk_suffix: config.walk_suffix.clone(),
            walk_skip_dirs: config.walk_skip_dirs.clone(),
        }
    }

    /// 按候选顺序查找题单文件
    pub fn locate(&self) -> Option<PathBuf> {
        self.primary_candidate()
            .or_else(|| self.glob_candidate())
            .or_else(|| self.walk_candidate())
    }

    /// 收集定位结果和诊断信息
    pub fn inspect(&self) -> LocateReport {
        let sheet_path = self.locate();
        let exists = sheet_path.as_deref().is_some_and(Path::exists);
        let scripts_listing = self
            .scripts_dir
            .exists()
            .then(|| list_dir(&self.scripts_dir));
        let cwd = std::env::current_dir().ok();
        let cwd_listing = list_dir(Path::new("."));

        LocateReport {
            project_root: self.project_root.clone(),
            sheet_path,
            exists,
            scripts_dir: self.scripts_dir.clone(),
            scripts_listing,
            cwd,
            cwd_listing,
        }
    }

    fn primary_candidate(&self) -> Option<PathBuf> {
        let path = self.scripts_dir.join(&self.input_file_name);
        debug!("尝试首选路径: {}", path.display());
        path.is_file().then_some(path)
    }

    fn glob_candidate(&self) -> Option<PathBuf> {
        let pattern = format!(
            "{}/{}",
            Pattern::escape(&self.scripts_dir.to_string_lossy()),
            self.input_glob
        );
        debug!("尝试匹配模式: {}", pattern);

        let mut matches: Vec<PathBuf> = match glob(&pattern) {
            Ok(paths) => paths.flatten().filter(|p| p.is_file()).collect(),
            Err(e) => {
                debug!("匹配模式无效 {}: {}", pattern, e);
                return None;
            }
        };
        matches.sort();
        matches.into_iter().next()
    }

    fn walk_candidate(&self) -> Option<PathBuf> {
        debug!("遍历项目目录: {}", self.project_root.display());
        self.walk_dir(&self.project_root)
    }

    fn walk_dir(&self, dir: &Path) -> Option<PathBuf> {
        let mut entries: Vec<(PathBuf, fs::FileType)> = fs::read_dir(dir)
            .ok()?
            .flatten()
            .filter_map(|entry| entry.file_type().ok().map(|ft| (entry.path(), ft)))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let found = entries
            .iter()
            .filter(|(_, ft)| !ft.is_dir())
            .map(|(path, _)| path)
            .find(|path| self.is_walk_match(path));
        if let Some(path) = found {
            return Some(path.clone());
        }

        entries
            .iter()
            .filter(|(path, ft)| ft.is_dir() && !self.is_skipped(path))
            .find_map(|(path, _)| self.walk_dir(path))
    }

    fn is_walk_match(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| {
                name.starts_with(&self.walk_prefix) && name.ends_with(&self.walk_suffix)
            })
    }

    fn is_skipped(&self, dir: &Path) -> bool {
        dir.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.walk_skip_dirs.iter().any(|skip| skip == name))
    }
}

/// 定位结果及诊断信息
#[derive(Debug, Clone)]
pub struct LocateReport {
    pub project_root: PathBuf,
    pub sheet_path: Option<PathBuf>,
    pub exists: bool,
    pub scripts_dir: PathBuf,
    /// 脚本目录不存在时为 None
    pub scripts_listing: Option<Vec<String>>,
    pub cwd: Option<PathBuf>,
    pub cwd_listing: Vec<String>,
}

impl LocateReport {
    /// 取出可用的题单路径
    pub fn into_sheet_path(self) -> Result<PathBuf, LocateError> {
        match self.sheet_path {
            None => Err(LocateError::NotFound {
                project_root: self.project_root,
            }),
            Some(path) if !self.exists => Err(LocateError::Missing { path }),
            Some(path) => Ok(path),
        }
    }
}

/// 列出目录下的条目名称（已排序），目录不可读时返回空列表
fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "{}").unwrap();
    }

    fn locator_for(root: &Path) -> SheetLocator {
        SheetLocator::new(&Config::for_project(root))
    }

    #[test]
    fn test_primary_path_wins() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("scripts/sheet.json"));
        touch(&dir.path().join("scripts/sheet-a.json"));

        let found = locator_for(dir.path()).locate().unwrap();
        assert_eq!(found, dir.path().join("scripts/sheet.json"));
    }

    #[test]
    fn test_glob_takes_first_sorted_match() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("scripts/sheet-b.json"));
        touch(&dir.path().join("scripts/sheet-a.json"));

        let found = locator_for(dir.path()).locate().unwrap();
        assert_eq!(found, dir.path().join("scripts/sheet-a.json"));
    }

    #[test]
    fn test_walk_is_deterministic_and_short_circuits() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a/deep/sheet_late.json"));
        touch(&dir.path().join("a/sheet_first.json"));
        touch(&dir.path().join("b/sheet_other.json"));

        let found = locator_for(dir.path()).locate().unwrap();
        assert_eq!(found, dir.path().join("a/sheet_first.json"));
    }

    #[test]
    fn test_walk_prefers_files_before_subdirectories() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("aaa/sheet-nested.json"));
        touch(&dir.path().join("sheets.json"));

        let found = locator_for(dir.path()).locate().unwrap();
        assert_eq!(found, dir.path().join("sheets.json"));
    }

    #[test]
    fn test_walk_skips_configured_dirs() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("node_modules/pkg/sheet.json"));

        assert!(locator_for(dir.path()).locate().is_none());
    }

    #[test]
    fn test_walk_ignores_non_matching_names() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("data/my-sheet.json"));
        touch(&dir.path().join("data/sheet.txt"));

        assert!(locator_for(dir.path()).locate().is_none());
    }

    #[test]
    fn test_report_without_match_is_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("scripts")).unwrap();
        touch(&dir.path().join("scripts/parse-sheet.py"));

        let report = locator_for(dir.path()).inspect();
        assert!(report.sheet_path.is_none());
        assert!(!report.exists);
        assert_eq!(
            report.scripts_listing,
            Some(vec!["parse-sheet.py".to_string()])
        );
        assert!(matches!(
            report.into_sheet_path(),
            Err(LocateError::NotFound { .. })
        ));
    }

    #[test]
    fn test_report_with_vanished_file_is_missing() {
        let report = LocateReport {
            project_root: PathBuf::from("."),
            sheet_path: Some(PathBuf::from("gone/sheet.json")),
            exists: false,
            scripts_dir: PathBuf::from("scripts"),
            scripts_listing: None,
            cwd: None,
            cwd_listing: Vec::new(),
        };

        assert!(matches!(
            report.into_sheet_path(),
            Err(LocateError::Missing { .. })
        ));
    }
}
