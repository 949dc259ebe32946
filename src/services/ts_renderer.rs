//! TypeScript 模块渲染 - 业务能力层
//!
//! 输出三个 interface 声明和一个导出常量 `SHEET_DATA`，常量内容是
//! 两空格缩进的 JSON 字面量。相同输入总是得到逐字节相同的输出。

use crate::models::SheetTopic;

/// 文件头注释
pub const GENERATED_HEADER: &str = "// Auto-generated from sheet.json - Do not edit manually";

/// 导出常量名
pub const EXPORT_NAME: &str = "SHEET_DATA";

const TYPE_DECLARATIONS: &str = r#"export interface SheetQuestion {
  title: string;
  difficulty: "easy" | "medium" | "hard";
  link: string;
  resource: string;
  platform: string;
}

export interface SheetSubTopic {
  title: string;
  questions: SheetQuestion[];
}

export interface SheetTopic {
  title: string;
  color: string;
  subTopics: SheetSubTopic[];
}
"#;

/// 渲染完整的 TypeScript 模块
pub fn render_module(topics: &[SheetTopic]) -> Result<String, serde_json::Error> {
    let literal = serde_json::to_string_pretty(topics)?;

    Ok(format!(
        "{GENERATED_HEADER}\n\n{TYPE_DECLARATIONS}\nexport const {EXPORT_NAME}: SheetTopic[] = {literal};\n"
    ))
}
