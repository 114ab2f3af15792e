//! # 文件收集器
//!
//! 根据输入路径和模式收集待处理的 CIF 文件列表。
//!
//! ## 功能
//! - 支持单文件和目录输入
//! - 逗号分隔的多个 glob 模式，文件名匹配不区分大小写（`*.cif` 匹配 `A.CIF`）
//! - 递归目录搜索
//! - 结果按路径排序
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs` 调用
//! - 使用 `walkdir` 遍历目录

use qucif::error::{CifError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入路径
    input: PathBuf,
    /// 匹配模式列表（小写）
    patterns: Vec<String>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器，默认匹配 `*.cif`
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            patterns: vec!["*.cif".to_string()],
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.patterns = pattern
            .split(',')
            .map(|s| s.trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        if self.patterns.is_empty() {
            self.patterns = vec!["*".to_string()];
        }
        self
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件；单文件输入不做模式过滤
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if self.input.is_file() {
            return Ok(vec![self.input.clone()]);
        }

        if !self.input.is_dir() {
            return Err(CifError::DirectoryNotFound {
                path: self.input.display().to_string(),
            });
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|entry| self.matches_patterns(entry.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        Ok(files)
    }

    /// 输入目录下的相对路径，用于在输出目录中保持目录结构
    pub fn relative_path<'a>(&self, file: &'a Path) -> &'a Path {
        if self.input.is_file() {
            return file.file_name().map(Path::new).unwrap_or(file);
        }
        file.strip_prefix(&self.input).unwrap_or(file)
    }

    /// 检查文件是否匹配任一模式
    fn matches_patterns(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_ascii_lowercase(),
            None => return false,
        };

        self.patterns
            .iter()
            .any(|pattern| Self::glob_match(pattern, &filename))
    }

    /// 简单 glob 匹配（支持 * 和 ? 通配符）
    fn glob_match(pattern: &str, text: &str) -> bool {
        let pattern = pattern.as_bytes();
        let text = text.as_bytes();

        let mut p = 0;
        let mut t = 0;
        let mut star_p = None;
        let mut star_t = 0;

        while t < text.len() {
            if p < pattern.len() && (pattern[p] == b'?' || pattern[p] == text[t]) {
                p += 1;
                t += 1;
            } else if p < pattern.len() && pattern[p] == b'*' {
                star_p = Some(p);
                star_t = t;
                p += 1;
            } else if let Some(sp) = star_p {
                p = sp + 1;
                star_t += 1;
                t = star_t;
            } else {
                return false;
            }
        }

        while p < pattern.len() && pattern[p] == b'*' {
            p += 1;
        }

        p == pattern.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_glob_match() {
        assert!(FileCollector::glob_match("*.cif", "quartz.cif"));
        assert!(FileCollector::glob_match("*.cif", "icsd-123.cif"));
        assert!(!FileCollector::glob_match("*.cif", "quartz.res"));
        assert!(FileCollector::glob_match("fe?.cif", "fe2.cif"));
        assert!(!FileCollector::glob_match("fe?.cif", "fe23.cif"));
        assert!(FileCollector::glob_match("*", "anything"));
    }

    #[test]
    fn test_collect_directory() {
        let dir = std::env::temp_dir().join(format!("qucif-collect-{}", std::process::id()));
        let nested = dir.join("nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.join("b.cif"), "data_b\n").unwrap();
        fs::write(dir.join("A.CIF"), "data_a\n").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();
        fs::write(nested.join("c.cif"), "data_c\n").unwrap();

        let flat = FileCollector::new(dir.clone()).collect().unwrap();
        assert_eq!(flat, vec![dir.join("A.CIF"), dir.join("b.cif")]);

        let collector = FileCollector::new(dir.clone()).with_pattern("*.cif, *.txt").recursive(true);
        let all = collector.collect().unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(collector.relative_path(&nested.join("c.cif")), Path::new("nested/c.cif"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_input() {
        let err = FileCollector::new(PathBuf::from("/nonexistent/qucif")).collect().unwrap_err();
        assert!(matches!(err, CifError::DirectoryNotFound { .. }));
    }
}
