use crate::error::{AppError, AppResult, FileError};
use crate::models::raw::{RawQuestion, SheetDocument};
use std::fs;
use std::path::Path;

/// 读取题单 JSON 文件，取出 `data.questions`
///
/// 文件不是合法 JSON 或缺少 `data.questions` 时直接返回错误，不做任何兜底
pub fn load_sheet_questions(sheet_path: &Path) -> AppResult<Vec<RawQuestion>> {
    let content =
        fs::read_to_string(sheet_path).map_err(|e| AppError::file_read_failed(sheet_path, e))?;

    parse_sheet_questions(&content).map_err(|source| {
        FileError::JsonParseFailed {
            path: sheet_path.to_path_buf(),
            source,
        }
        .into()
    })
}

/// 从 JSON 文本中解析题目列表
pub fn parse_sheet_questions(content: &str) -> Result<Vec<RawQuestion>, serde_json::Error> {
    let document: SheetDocument = serde_json::from_str(content)?;
    Ok(document.data.questions)
}
