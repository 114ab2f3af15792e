//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `utils/` 与 `qucif` 库
//! - 子模块: inspect, normalize, export

pub mod export;
pub mod inspect;
pub mod normalize;

use crate::cli::Commands;
use qucif::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Inspect(args) => inspect::execute(args),
        Commands::Normalize(args) => normalize::execute(args),
        Commands::Export(args) => export::execute(args),
    }
}
