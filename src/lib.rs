//! # Sheet Codegen
//!
//! 把题单 JSON（`{ data: { questions: [...] } }`）转换成带类型声明的
//! TypeScript 模块，按 专题 → 子专题 分组，并为每个专题分配固定的颜色。
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 原始记录、规范化记录、配色表
//! - `models::loaders` - 读取并解析题单文件
//!
//! ### ② 业务能力层（Services）
//! - `SheetLocator` - 查找 sheet.json
//! - `TopicGrouper` - 按首次出现顺序分组并配色
//! - `render_module` - 渲染 TypeScript 模块
//! - `OutputWriter` - 写出生成文件
//!
//! ### ③ 流程层（Workflow）
//! - `SheetFlow` - 一份题单的完整转换（分组 → 渲染）
//!
//! ### ④ 编排层（Orchestration）
//! - `App` - 定位 → 解析 → 转换 → 写出 → 汇报
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Difficulty, Palette, RawQuestion, SheetQuestion, SheetSubTopic, SheetTopic};
pub use orchestrator::{App, GenerationStats};
pub use workflow::{GeneratedSheet, SheetFlow};
