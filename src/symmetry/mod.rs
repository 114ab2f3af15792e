//! # 空间群对称性模块
//!
//! 空间群符号表与符号解析。
//!
//! ## 依赖关系
//! - 被 `cif/space_group.rs` 使用
//! - 子模块: table（静态数据）, registry（解析）

pub mod registry;
mod table;

pub use registry::{normalize_setting, split_setting, SpaceGroupEntry, SymbolRegistry};
