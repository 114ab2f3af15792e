//! # 数据模型模块
//!
//! 定义晶格、空间群、原子位点与物相的数据模型，以及它们到通用 STAR 条目的转换。
//!
//! ## 依赖关系
//! - 被 `cif/`, `symmetry/` 和命令行使用
//! - 子模块: structure, atom, space_group

pub mod atom;
pub mod space_group;
pub mod structure;

pub use atom::{AdpType, AtomSite, Displacement, Susceptibility, ATOM_SITE_FIELDS, TENSOR_COMPONENTS};
pub use space_group::{SpaceGroup, SPACE_GROUP_FIELDS};
pub use structure::{CrystalSystem, Lattice, Parameter, Phase, LATTICE_FIELDS};
