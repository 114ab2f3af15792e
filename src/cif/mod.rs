//! # CIF 语义层
//!
//! 在 STAR 文档之上实现 CIF 的读写：清洗、空间群解析、晶格与原子位点提取、写出。
//!
//! ## 数据流
//! 文本 → `star::parse` → [`sanitize`] → 提取器 → 模型对象
//! 模型对象 → `ToStar` → 标签改写 → [`render`]
//!
//! ## 依赖关系
//! - 使用 `star/`, `models/`, `symmetry/`
//! - 被命令行 `commands/` 使用
//! - 子模块: tags, sanitize, space_group, extract, labels, writer, parser, io

pub mod extract;
pub mod io;
pub mod labels;
pub mod parser;
pub mod sanitize;
pub mod space_group;
pub mod tags;
pub mod writer;

pub use extract::{extract_atoms, extract_lattice, is_magnetic};
pub use io::CifIO;
pub use parser::{parse_file, parse_string, CifDocument, CifParser};
pub use sanitize::sanitize;
pub use space_group::extract_space_group;
pub use tags::LoopKind;
pub use writer::{render, render_phase, render_phases, write_file};
