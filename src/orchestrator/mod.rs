//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责把各个能力按顺序串起来，是整个程序的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (定位 → 解析 → 转换 → 写出 → 汇报)
//!     ↓
//! workflow::SheetFlow (分组 → 渲染，不接触文件系统)
//!     ↓
//! services (能力层：locator / grouper / renderer / writer)
//!     ↓
//! models (数据结构与加载)
//! ```
//!
//! ## 设计原则
//!
//! 1. **向下依赖**：编排层 → workflow → services → models
//! 2. **无业务逻辑**：只做调度和统计，不做具体转换

pub mod app;

pub use app::{App, GenerationStats};
