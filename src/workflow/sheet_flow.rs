//! 题单转换流程
//!
//! 定义"一份题单"的完整转换：分组 → 渲染。
//! 不接触文件系统，配色表由调用方传入。

use crate::error::AppResult;
use crate::models::{Palette, RawQuestion, SheetTopic};
use crate::services::{render_module, TopicGrouper};

/// 转换结果
#[derive(Debug, Clone)]
pub struct GeneratedSheet {
    /// 分组后的专题
    pub topics: Vec<SheetTopic>,
    /// 渲染好的 TypeScript 模块
    pub module: String,
}

impl GeneratedSheet {
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    pub fn question_count(&self) -> usize {
        self.topics.iter().map(SheetTopic::question_count).sum()
    }
}

/// 题单转换流程
pub struct SheetFlow<'a> {
    palette: &'a Palette,
}

impl<'a> SheetFlow<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    /// 执行转换
    pub fn run(&self, questions: &[RawQuestion]) -> AppResult<GeneratedSheet> {
        let topics = TopicGrouper::new(self.palette).group(questions);
        let module = render_module(&topics)?;

        Ok(GeneratedSheet { topics, module })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::loaders::sheet_loader::parse_sheet_questions;

    const SCENARIO: &str = r#"{"data":{"questions":[{"title":"Two Sum","topic":"Arrays","subTopic":"Hashing","resource":"LeetCode","questionId":{"difficulty":"Easy","problemUrl":"https://x/1","platform":"LeetCode"}}]}}"#;

    #[test]
    fn test_flow_counts_match_input() {
        let palette = Palette::default();
        let questions = parse_sheet_questions(SCENARIO).unwrap();

        let generated = SheetFlow::new(&palette).run(&questions).unwrap();

        assert_eq!(generated.topic_count(), 1);
        assert_eq!(generated.question_count(), questions.len());
        assert!(generated.module.contains("\"difficulty\": \"easy\""));
        assert!(generated.module.contains("\"color\": \"#f97316\""));
    }

    #[test]
    fn test_flow_uses_given_palette() {
        let palette = Palette::new(vec!["#123456".to_string()]).unwrap();
        let questions = parse_sheet_questions(
            r#"{"data":{"questions":[{"topic":"A"},{"topic":"B"}]}}"#,
        )
        .unwrap();

        let generated = SheetFlow::new(&palette).run(&questions).unwrap();

        assert!(generated.topics.iter().all(|t| t.color == "#123456"));
    }

    #[test]
    fn test_flow_is_repeatable() {
        let palette = Palette::default();
        let questions = parse_sheet_questions(SCENARIO).unwrap();
        let flow = SheetFlow::new(&palette);

        assert_eq!(
            flow.run(&questions).unwrap().module,
            flow.run(&questions).unwrap().module
        );
    }
}
