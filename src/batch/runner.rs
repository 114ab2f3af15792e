//! # 批量执行器
//!
//! 并行执行批量处理任务。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代，每个文件一个独立任务
//! - 进度条显示
//! - 错误与解析警告的收集汇总
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::utils::progress;
use qucif::error::{CifError, Result};

use rayon::prelude::*;
use std::path::PathBuf;

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 处理成功，附带解析警告
    Success(String, Vec<String>),
    /// 跳过（如文件已存在）
    Skipped(String),
    /// 处理失败
    Failed(String, String), // (文件路径, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
    /// 警告详情 (文件路径, 警告)
    pub warnings: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(path, warnings) => {
                self.success += 1;
                self.warnings
                    .extend(warnings.into_iter().map(|w| (path.clone(), w)));
            }
            ProcessResult::Skipped(_) => self.skipped += 1,
            ProcessResult::Failed(path, err) => {
                self.failed += 1;
                self.failures.push((path, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器；0 表示使用全部 CPU
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理文件列表，结果按输入顺序汇总
    pub fn run<F>(&self, files: &[PathBuf], message: &str, processor: F) -> Result<BatchResult>
    where
        F: Fn(&PathBuf) -> ProcessResult + Sync + Send,
    {
        let pb = progress::create_progress_bar(files.len() as u64, message);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| CifError::Other(format!("Failed to build thread pool: {}", e)))?;

        let results: Vec<ProcessResult> = pool.install(|| {
            files
                .par_iter()
                .map(|file| {
                    let result = processor(file);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        Ok(batch_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_counts() {
        let mut result = BatchResult::default();
        result.merge(ProcessResult::Success("a.cif".into(), vec!["w1".into(), "w2".into()]));
        result.merge(ProcessResult::Skipped("b.cif".into()));
        result.merge(ProcessResult::Failed("c.cif".into(), "boom".into()));

        assert_eq!(result.total(), 3);
        assert_eq!(result.warnings.len(), 2);
        assert_eq!(result.warnings[0], ("a.cif".to_string(), "w1".to_string()));
        assert_eq!(result.failures, vec![("c.cif".to_string(), "boom".to_string())]);
    }

    #[test]
    fn test_run_keeps_input_order() {
        let files: Vec<PathBuf> = (0..20).map(|i| PathBuf::from(format!("{}.cif", i))).collect();
        let runner = BatchRunner::new(4);
        assert_eq!(runner.jobs(), 4);

        let result = runner
            .run(&files, "Testing", |f| {
                let name = f.display().to_string();
                if name.starts_with('1') {
                    ProcessResult::Failed(name, "bad".into())
                } else {
                    ProcessResult::Success(name.clone(), vec![name])
                }
            })
            .unwrap();

        assert_eq!(result.total(), 20);
        assert_eq!(result.failed, 11);
        assert_eq!(result.warnings[0].1, "0.cif");
        assert_eq!(result.failures[0].0, "1.cif");
    }
}
