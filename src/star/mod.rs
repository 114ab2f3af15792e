//! # STAR 层
//!
//! CIF 语义层之下的通用 STAR 表示：分词解析、文档模型、值格式化。
//!
//! ## 依赖关系
//! - 被 `cif/` 和 `models/` 使用
//! - 子模块: dom, parse, format

pub mod dom;
pub mod format;
pub mod parse;

pub use dom::{normalize_tag, Block, Datum, Document, Loop, StarItem, ToStar, Value};
pub use format::{format_datum, format_number, quote_text};
pub use parse::parse;
