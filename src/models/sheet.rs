use serde::Serialize;

/// 难度别名表（键均为小写），未列出的取值一律视为 Medium
static DIFFICULTY_ALIASES: phf::Map<&'static str, Difficulty> = phf::phf_map! {
    "easy" => Difficulty::Easy,
    "basic" => Difficulty::Easy,
    "hard" => Difficulty::Hard,
};

/// 题目难度
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// 不区分大小写地解析难度，无法识别的取值归为 Medium
    pub fn parse(raw: &str) -> Self {
        DIFFICULTY_ALIASES
            .get(raw.to_lowercase().as_str())
            .copied()
            .unwrap_or(Difficulty::Medium)
    }
}

/// 规范化后的题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetQuestion {
    pub title: String,
    pub difficulty: Difficulty,
    pub link: String,
    pub resource: String,
    pub platform: String,
}

/// 子专题
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetSubTopic {
    pub title: String,
    pub questions: Vec<SheetQuestion>,
}

/// 专题
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetTopic {
    pub title: String,
    pub color: String,
    pub sub_topics: Vec<SheetSubTopic>,
}

impl SheetTopic {
    /// 该专题下所有子专题的题目总数
    pub fn question_count(&self) -> usize {
        self.sub_topics.iter().map(|st| st.questions.len()).sum()
    }
}
