//! # normalize 子命令 CLI 定义
//!
//! 批量规范化 CIF 文件：解析、清洗、按固定格式重写。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/normalize.rs`

use clap::Args;
use std::path::PathBuf;

/// normalize 子命令参数
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Input CIF file or directory containing CIF files
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory for normalized files
    #[arg(short, long)]
    pub output: PathBuf,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Glob pattern(s) for input files, comma separated
    #[arg(short, long, default_value = "*.cif")]
    pub pattern: String,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Print parser warnings for every file
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
