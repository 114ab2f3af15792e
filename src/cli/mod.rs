//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `inspect`: 查看单个 CIF 文件
//! - `normalize`: 批量规范化 CIF 文件
//! - `export`: 导出原子位点
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: inspect, normalize, export

pub mod export;
pub mod inspect;
pub mod normalize;

use clap::{Parser, Subcommand};

/// qucif - CIF 晶体结构文件工具
#[derive(Parser)]
#[command(name = "qucif")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Read, sanitize and rewrite Crystallographic Information Files", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Show lattice, space group, atom sites and warnings of a CIF file
    Inspect(inspect::InspectArgs),

    /// Parse CIF files and rewrite them in canonical form
    Normalize(normalize::NormalizeArgs),

    /// Export atom sites of a CIF block to CSV
    Export(export::ExportArgs),
}
