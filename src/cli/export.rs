//! # export 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/export.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// CSV 分隔符
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Delimiter {
    /// Comma separated
    Comma,
    /// Tab separated
    Tab,
}

impl Delimiter {
    pub fn as_byte(&self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
        }
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Delimiter::Comma => write!(f, "comma"),
            Delimiter::Tab => write!(f, "tab"),
        }
    }
}

/// export 子命令参数
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// CIF file to read
    pub file: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "atom_sites.csv")]
    pub output: PathBuf,

    /// Index of the data block to export (0-based)
    #[arg(short, long, default_value_t = 0)]
    pub block: usize,

    /// Field delimiter
    #[arg(short, long, value_enum, default_value_t = Delimiter::Comma)]
    pub delimiter: Delimiter,
}
