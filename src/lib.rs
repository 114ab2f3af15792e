//! # qucif - CIF 晶体结构文件读写库
//!
//! 解析 CIF 文本，清洗常见的数据缺陷，提取晶格、空间群与原子位点，
//! 再以规范格式写回 CIF。
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── star/      (STAR 分词与文档模型)
//!   ├── symmetry/  (空间群符号注册表)
//!   ├── models/    (晶格、空间群、原子位点、物相)
//!   ├── cif/       (清洗、提取、写出、读写组合)
//!   └── error.rs   (错误处理)
//! ```

pub mod cif;
pub mod error;
pub mod models;
pub mod star;
pub mod symmetry;

pub use cif::{parse_file, parse_string, CifDocument, CifIO, CifParser};
pub use error::{CifError, Result};
pub use models::{AtomSite, Lattice, Phase, SpaceGroup};
pub use symmetry::SymbolRegistry;
