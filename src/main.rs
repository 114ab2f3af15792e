//! # qucif - CIF 晶体结构文件命令行工具
//!
//! 检查、规范化、导出 CIF 文件。
//!
//! ## 子命令
//! - `inspect`   - 显示晶格、空间群、原子位点与解析警告
//! - `normalize` - 批量解析并以规范格式重写 CIF 文件
//! - `export`    - 将原子位点导出为 CSV
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── qucif  (库：解析、提取、写出)
//!   ├── batch/      (批量文件处理)
//!   └── utils/      (工具函数)
//! ```

mod batch;
mod cli;
mod commands;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
