//! 专题分组服务 - 业务能力层
//!
//! 把扁平的题目列表折叠成 专题 → 子专题 → 题目 的两级结构。
//! 专题与子专题都保持首次出现的顺序，专题颜色按出现顺序从配色表循环取用。

use crate::models::{Palette, RawQuestion, SheetQuestion, SheetSubTopic, SheetTopic};
use indexmap::IndexMap;

/// 专题分组服务
pub struct TopicGrouper<'a> {
    palette: &'a Palette,
}

impl<'a> TopicGrouper<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    /// 分组，每条原始记录恰好落入一个子专题
    pub fn group(&self, questions: &[RawQuestion]) -> Vec<SheetTopic> {
        let mut topic_map: IndexMap<&str, IndexMap<&str, Vec<SheetQuestion>>> = IndexMap::new();

        for raw in questions {
            topic_map
                .entry(raw.topic_name())
                .or_default()
                .entry(raw.sub_topic_name())
                .or_default()
                .push(SheetQuestion::from(raw));
        }

        topic_map
            .into_iter()
            .enumerate()
            .map(|(idx, (topic_name, sub_map))| SheetTopic {
                title: topic_name.to_string(),
                color: self.palette.color_for(idx).to_string(),
                sub_topics: sub_map
                    .into_iter()
                    .map(|(sub_name, questions)| SheetSubTopic {
                        title: sub_name.to_string(),
                        questions,
                    })
                    .collect(),
            })
            .collect()
    }
}
