//! `pinsort_core`：拼音字母序排序的纯逻辑层，不做任何 I/O。
//!
//! 声调字母（ā á ǎ à …）是字母表里的独立字母，有固定表位，
//! 不走通用 locale 排序，也不做音节切分。
//!
//! 设计目标：
//! - **核心可复用**：CLI/服务端/词典工具复用同一套比较逻辑
//! - **分层清晰**：collate（权重表）-> compare（两遍比较）-> sort（排序适配）
//! - **可并发**：权重表一次构建后只读共享，比较器无共享可变状态
pub mod collate;
pub mod compare;
pub mod sort;
