//! # 统一错误处理模块
//!
//! 定义 qucif 的所有错误类型，使用 `thiserror` 派生。
//!
//! 软问题（清洗修正、缺省占有率、非数值 ADP 等）不是错误，只作为警告返回；
//! 这里只列出会中止某一项提取的硬错误。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// qucif 统一错误类型
#[derive(Error, Debug)]
pub enum CifError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 分词错误
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed CIF text at byte {offset}: {reason}")]
    Tokenize { offset: usize, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 提取错误
    // ─────────────────────────────────────────────────────────────
    #[error("Block '{block}' has no atom-site loop with fields: {}", missing.join(", "))]
    MissingLoop { block: String, missing: Vec<String> },

    #[error("Block '{block}' mixes ADP types: '{label}' is {second} but earlier atoms are {first}")]
    ConflictingAdpType {
        block: String,
        first: String,
        second: String,
        label: String,
    },

    #[error("Missing field: {field}")]
    MissingField { field: String },

    #[error("Block index {index} out of range ({count} block(s))")]
    BlockIndex { index: usize, count: usize },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, CifError>;
