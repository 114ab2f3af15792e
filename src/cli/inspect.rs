//! # inspect 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/inspect.rs`

use clap::Args;
use std::path::PathBuf;

/// inspect 子命令参数
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// CIF file to inspect
    pub file: PathBuf,

    /// Index of the data block to show (0-based)
    #[arg(short, long, default_value_t = 0, conflicts_with = "all")]
    pub block: usize,

    /// Show every data block in the file
    #[arg(short, long, default_value_t = false)]
    pub all: bool,
}
