//! # normalize 命令实现
//!
//! 批量读取 CIF 文件，经清洗与提取后按规范格式重写到输出目录。
//!
//! ## 功能
//! - 单文件或目录输入，目录下可递归
//! - 输出保持输入的相对目录结构
//! - 并行处理，每个文件独立解析
//! - 已存在的输出默认跳过
//!
//! ## 依赖关系
//! - 使用 `cli/normalize.rs` 定义的参数
//! - 使用 `batch/` 收集与并行执行
//! - 使用 `qucif::CifIO` 读写
//! - 使用 `utils/output.rs`

use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::normalize::NormalizeArgs;
use crate::utils::output;

use qucif::error::{CifError, Result};
use qucif::CifIO;

use std::fs;
use std::path::{Path, PathBuf};

/// 执行 normalize 命令
pub fn execute(args: NormalizeArgs) -> Result<()> {
    output::print_header("Normalizing CIF files");

    let collector = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)
        .recursive(args.recursive);
    let files = collector.collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            args.pattern,
            args.input.display()
        ));
        return Ok(());
    }

    fs::create_dir_all(&args.output).map_err(|e| CifError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!(
        "Found {} file(s), using {} job(s)",
        files.len(),
        runner.jobs()
    ));

    let result = runner.run(&files, "Normalizing", |file| {
        let target = args.output.join(collector.relative_path(file));
        normalize_file(file, &target, args.overwrite)
    })?;

    if args.verbose {
        for (path, warning) in &result.warnings {
            output::print_warnings(Some(path.as_str()), &[warning]);
        }
    }
    for (path, err) in &result.failures {
        output::print_error(&format!("{}: {}", path, err));
    }

    output::print_done(&format!(
        "Normalized {} of {} file(s) into '{}' ({} skipped, {} failed, {} warning(s))",
        result.success,
        result.total(),
        args.output.display(),
        result.skipped,
        result.failed,
        result.warnings.len()
    ));

    Ok(())
}

/// 规范化单个文件
fn normalize_file(input: &PathBuf, target: &Path, overwrite: bool) -> ProcessResult {
    let name = input.display().to_string();

    if target.exists() && !overwrite {
        return ProcessResult::Skipped(name);
    }

    match rewrite(input, target) {
        Ok(warnings) => ProcessResult::Success(name, warnings),
        Err(e) => ProcessResult::Failed(name, e.to_string()),
    }
}

fn rewrite(input: &Path, target: &Path) -> Result<Vec<String>> {
    let io = CifIO::from_file(input)?;

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| CifError::FileWriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }
    io.write_file(target)?;

    Ok(io.warnings)
}
