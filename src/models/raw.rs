//! 题单原始数据结构
//!
//! 与 `sheet.json` 的结构一一对应。所有字段都是可选的，缺省值在
//! 转换为 [`SheetQuestion`] 时统一补齐。

use crate::models::sheet::{Difficulty, SheetQuestion};
use serde::Deserialize;

/// 缺少标题时使用的占位标题
pub const DEFAULT_TITLE: &str = "Untitled";
/// 缺少专题时归入的专题
pub const DEFAULT_TOPIC: &str = "Uncategorized";
/// 缺少子专题时归入的子专题
pub const DEFAULT_SUB_TOPIC: &str = "General";

/// 输入文件顶层结构：`{ "data": { "questions": [...] } }`
#[derive(Debug, Clone, Deserialize)]
pub struct SheetDocument {
    pub data: SheetData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetData {
    pub questions: Vec<RawQuestion>,
}

/// 原始题目记录
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuestion {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub sub_topic: Option<String>,
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub question_id: Option<RawQuestionId>,
}

/// 原始题目中嵌套的 `questionId` 记录
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuestionId {
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub problem_url: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
}

impl RawQuestion {
    /// 专题名称，缺省为 `Uncategorized`
    pub fn topic_name(&self) -> &str {
        self.topic.as_deref().unwrap_or(DEFAULT_TOPIC)
    }

    /// 子专题名称，缺省为 `General`
    pub fn sub_topic_name(&self) -> &str {
        self.sub_topic.as_deref().unwrap_or(DEFAULT_SUB_TOPIC)
    }
}

impl From<&RawQuestion> for SheetQuestion {
    fn from(raw: &RawQuestion) -> Self {
        let qid = raw.question_id.as_ref();
        let difficulty = qid
            .and_then(|qid| qid.difficulty.as_deref())
            .map(Difficulty::parse)
            .unwrap_or_default();

        Self {
            title: raw.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            difficulty,
            link: qid.and_then(|qid| qid.problem_url.clone()).unwrap_or_default(),
            resource: raw.resource.clone().unwrap_or_default(),
            platform: qid.and_then(|qid| qid.platform.clone()).unwrap_or_default(),
        }
    }
}
