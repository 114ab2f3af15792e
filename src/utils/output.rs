//! # 美化输出工具
//!
//! 提供统一的终端输出样式。解析警告统一经 [`print_warning`] 输出。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印一组解析警告，可带来源前缀（文件或数据块）
pub fn print_warnings<S: AsRef<str>>(source: Option<&str>, warnings: &[S]) {
    for warning in warnings {
        match source {
            Some(src) => print_warning(&format!("{}: {}", src.dimmed(), warning.as_ref())),
            None => print_warning(warning.as_ref()),
        }
    }
}
