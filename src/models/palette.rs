//! 专题配色表
//!
//! 专题按首次出现的顺序依次取色，超出长度后循环使用。

use crate::error::{AppResult, ConfigError};
use regex::Regex;

/// 默认配色（27 项，顺序有意义）
pub const DEFAULT_TOPIC_COLORS: [&str; 27] = [
    "#f97316", "#ea580c", "#fb923c", "#c2410c", "#f59e0b",
    "#d97706", "#ef4444", "#f43f5e", "#e11d48", "#ec4899",
    "#10b981", "#14b8a6", "#3b82f6", "#6366f1", "#8b5cf6",
    "#f97316", "#ea580c", "#fb923c", "#c2410c", "#f59e0b",
    "#d97706", "#ef4444", "#f43f5e", "#e11d48", "#ec4899",
    "#10b981", "#14b8a6",
];

/// 经过校验的非空配色表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// 校验并创建配色表
    ///
    /// 配色表不能为空，每一项必须是 `#rgb` 或 `#rrggbb` 形式
    pub fn new(colors: Vec<String>) -> AppResult<Self> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette.into());
        }

        let re = Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").map_err(ConfigError::from)?;
        if let Some((index, value)) = colors.iter().enumerate().find(|(_, c)| !re.is_match(c)) {
            return Err(ConfigError::InvalidColor {
                index,
                value: value.clone(),
            }
            .into());
        }

        Ok(Self { colors })
    }

    /// 第 `index` 个专题的颜色
    pub fn color_for(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_TOPIC_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_color_assignment_is_cyclic() {
        let palette = Palette::default();

        assert_eq!(DEFAULT_TOPIC_COLORS.len(), 27);
        assert_eq!(palette.color_for(0), "#f97316");
        assert_eq!(palette.color_for(14), "#8b5cf6");
        assert_eq!(palette.color_for(26), "#14b8a6");
        assert_eq!(palette.color_for(27), palette.color_for(0));
        assert_eq!(palette.color_for(28), "#ea580c");
    }

    #[test]
    fn test_empty_palette_is_rejected() {
        let err = Palette::new(Vec::new()).unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::EmptyPalette)));
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let colors = vec!["#fff".to_string(), "#A0B1C2".to_string(), "red".to_string()];
        let err = Palette::new(colors).unwrap_err();

        match err {
            AppError::Config(ConfigError::InvalidColor { index, value }) => {
                assert_eq!(index, 2);
                assert_eq!(value, "red");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
