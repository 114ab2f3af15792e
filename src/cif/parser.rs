//! # CIF 解析入口
//!
//! [`CifParser`] 持有清洗后的数据块并提供三个提取器；
//! [`CifDocument`] 是面向用户的解析结果：每个数据块的晶格、空间群、原子位点
//! 在解析时一次性提取，查询时返回副本。
//!
//! ## 错误与警告
//! - 分词失败：整个文档解析失败
//! - 提取失败（缺少原子位点循环、ADP 类型冲突）：只影响该数据块的 `atoms(i)`
//! - 清洗与提取中的修正：按数据块记录为警告
//!
//! ## 依赖关系
//! - 使用 `star/parse.rs`, `cif/sanitize.rs`, `cif/extract.rs`, `cif/space_group.rs`
//! - 被 `cif/io.rs` 与命令行调用

use super::extract::{extract_atoms, extract_lattice, is_magnetic};
use super::sanitize::sanitize;
use super::space_group::extract_space_group;
use crate::error::{CifError, Result};
use crate::models::{AtomSite, Lattice, Phase, SpaceGroup};
use crate::star::{self, Block, Document};

use std::path::Path;

/// 清洗后的数据块集合与提取器
#[derive(Debug, Clone, Default)]
pub struct CifParser {
    blocks: Vec<Block>,
    /// 每个数据块的清洗警告
    sanitize_warnings: Vec<Vec<String>>,
}

impl CifParser {
    pub fn new(document: &Document) -> Self {
        let (blocks, sanitize_warnings) = document.blocks.iter().map(sanitize).unzip();
        CifParser {
            blocks,
            sanitize_warnings,
        }
    }

    pub fn from_text(text: &str) -> Result<Self> {
        Ok(Self::new(&star::parse(text)?))
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn block_names(&self) -> Vec<&str> {
        self.blocks.iter().map(|b| b.name.as_str()).collect()
    }

    /// 清洗后的数据块
    pub fn block(&self, index: usize) -> Result<&Block> {
        self.blocks.get(index).ok_or(CifError::BlockIndex {
            index,
            count: self.blocks.len(),
        })
    }

    pub fn sanitize_warnings(&self, index: usize) -> &[String] {
        self.sanitize_warnings.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn lattice(&self, index: usize, warnings: &mut Vec<String>) -> Result<Option<Lattice>> {
        Ok(extract_lattice(self.block(index)?, warnings))
    }

    pub fn space_group(&self, index: usize, warnings: &mut Vec<String>) -> Result<Option<SpaceGroup>> {
        Ok(extract_space_group(self.block(index)?, warnings))
    }

    pub fn atoms(&self, index: usize, warnings: &mut Vec<String>) -> Result<Vec<AtomSite>> {
        extract_atoms(self.block(index)?, warnings)
    }

    pub fn is_magnetic(&self, index: usize) -> bool {
        self.blocks.get(index).is_some_and(is_magnetic)
    }
}

/// 单个数据块的提取结果；原子位点提取失败时为 `None`
#[derive(Debug)]
struct BlockFacets {
    name: String,
    lattice: Option<Lattice>,
    space_group: Option<SpaceGroup>,
    atoms: Option<Vec<AtomSite>>,
    magnetic: bool,
    warnings: Vec<String>,
}

/// CIF 解析结果
#[derive(Debug)]
pub struct CifDocument {
    parser: CifParser,
    blocks: Vec<BlockFacets>,
}

/// 解析 CIF 文本
pub fn parse_string(text: &str) -> Result<CifDocument> {
    Ok(CifDocument::from_parser(CifParser::from_text(text)?))
}

/// 读取并解析 CIF 文件
pub fn parse_file(path: impl AsRef<Path>) -> Result<CifDocument> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CifError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|e| CifError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_string(&text)
}

impl CifDocument {
    pub fn from_parser(parser: CifParser) -> Self {
        let blocks = (0..parser.block_count())
            .map(|i| {
                let mut warnings = parser.sanitize_warnings(i).to_vec();
                let lattice = parser.lattice(i, &mut warnings).ok().flatten();
                let space_group = parser.space_group(i, &mut warnings).ok().flatten();
                let atoms = parser.atoms(i, &mut warnings).ok();
                BlockFacets {
                    name: parser.block_names()[i].to_string(),
                    lattice,
                    space_group,
                    atoms,
                    magnetic: parser.is_magnetic(i),
                    warnings,
                }
            })
            .collect();
        CifDocument { parser, blocks }
    }

    pub fn parser(&self) -> &CifParser {
        &self.parser
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn block_names(&self) -> Vec<&str> {
        self.blocks.iter().map(|b| b.name.as_str()).collect()
    }

    fn facets(&self, index: usize) -> Result<&BlockFacets> {
        self.blocks.get(index).ok_or(CifError::BlockIndex {
            index,
            count: self.blocks.len(),
        })
    }

    pub fn lattice(&self, index: usize) -> Option<Lattice> {
        self.blocks.get(index).and_then(|b| b.lattice.clone())
    }

    pub fn space_group(&self, index: usize) -> Option<SpaceGroup> {
        self.blocks.get(index).and_then(|b| b.space_group.clone())
    }

    /// 提取失败的数据块重新提取一次以返回错误，警告已在解析时记录
    pub fn atoms(&self, index: usize) -> Result<Vec<AtomSite>> {
        match &self.facets(index)?.atoms {
            Some(atoms) => Ok(atoms.clone()),
            None => self.parser.atoms(index, &mut Vec::new()),
        }
    }

    /// 全部警告，按数据块顺序
    pub fn warnings(&self) -> Vec<String> {
        self.blocks.iter().flat_map(|b| b.warnings.iter().cloned()).collect()
    }

    pub fn has_warnings(&self) -> bool {
        self.blocks.iter().any(|b| !b.warnings.is_empty())
    }

    pub fn block_warnings(&self, index: usize) -> &[String] {
        self.blocks.get(index).map(|b| b.warnings.as_slice()).unwrap_or(&[])
    }

    pub fn is_magnetic(&self, index: usize) -> bool {
        self.blocks.get(index).is_some_and(|b| b.magnetic)
    }

    /// 数据块对应的物相
    pub fn phase(&self, index: usize) -> Result<Phase> {
        let facets = self.facets(index)?;
        Ok(Phase {
            name: facets.name.clone(),
            lattice: facets.lattice.clone(),
            space_group: facets.space_group.clone(),
            atoms: self.atoms(index)?,
        })
    }

    /// 全部物相；任一数据块提取失败即返回该错误
    pub fn phases(&self) -> Result<Vec<Phase>> {
        (0..self.block_count()).map(|i| self.phase(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Displacement, Parameter};

    const SI: &str = "
data_si
_cell_length_a 5.43
_cell_length_b 5.43
_cell_length_c 5.43
_cell_angle_alpha 90
_cell_angle_beta 90
_cell_angle_gamma 90
_space_group_name_H-M_alt 'Fd-3m:2'
loop_
_atom_site_label
_atom_site_type_symbol
_atom_site_fract_x
_atom_site_fract_y
_atom_site_fract_z
_atom_site_occupancy
_atom_site_adp_type
_atom_site_U_iso_or_equiv
Si Si 0.125 0.125 0.125 1 Uiso 0.02
";

    #[test]
    fn test_silicon_end_to_end() {
        let doc = parse_string(SI).unwrap();
        assert_eq!(doc.block_names(), vec!["si"]);

        let lattice = doc.lattice(0).unwrap();
        assert_eq!(lattice.parameters(), (5.43, 5.43, 5.43, 90.0, 90.0, 90.0));

        let sg = doc.space_group(0).unwrap();
        assert_eq!(sg.symbol, "F d -3 m");
        assert_eq!(sg.setting.as_deref(), Some("2"));

        let atoms = doc.atoms(0).unwrap();
        assert_eq!(atoms.len(), 1);
        let si = &atoms[0];
        assert_eq!(si.label, "Si");
        assert_eq!(si.specie, "Si");
        assert_eq!(si.position(), [0.125, 0.125, 0.125]);
        assert_eq!(si.occupancy.value, 1.0);
        assert_eq!(si.adp, Some(Displacement::Uiso(Parameter::new(0.02))));

        assert!(doc.warnings().is_empty());
        assert!(!doc.has_warnings());
        assert!(!doc.is_magnetic(0));
    }

    #[test]
    fn test_multiple_blocks_and_per_block_errors() {
        let text = format!("{}\ndata_empty\n_cell_length_a 3\n", SI);
        let doc = parse_string(&text).unwrap();
        assert_eq!(doc.block_count(), 2);
        assert_eq!(doc.block_names(), vec!["si", "empty"]);

        assert!(doc.atoms(0).is_ok());
        assert!(matches!(doc.atoms(1), Err(CifError::MissingLoop { .. })));
        // 失败的数据块可以重复查询
        match doc.atoms(1) {
            Err(CifError::MissingLoop { block, missing }) => {
                assert_eq!(block, "empty");
                assert_eq!(missing.len(), 6);
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert!(matches!(doc.atoms(5), Err(CifError::BlockIndex { index: 5, count: 2 })));

        assert!(doc.block_warnings(0).is_empty());
        assert_eq!(doc.block_warnings(1).len(), 1);
        assert!(doc.has_warnings());
        assert!(doc.phases().is_err());
        assert_eq!(doc.phase(0).unwrap().name, "si");
    }

    #[test]
    fn test_tokenize_error_fails_document() {
        let err = parse_string("data_x\n_title 'unterminated\n").unwrap_err();
        assert!(matches!(err, CifError::Tokenize { .. }));
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file("/nonexistent/structure.cif").unwrap_err();
        assert!(matches!(err, CifError::FileNotFound { .. }));
    }

    #[test]
    fn test_parser_keeps_sanitized_blocks() {
        let parser = CifParser::from_text(
            "data_t
loop_
_atom_site_label
_atom_site_type_symbol
_atom_site_fract_x
_atom_site_fract_y
_atom_site_fract_z
Ga1 Ga 0.3333 0 0
",
        )
        .unwrap();
        assert_eq!(parser.sanitize_warnings(0).len(), 1);
        let block = parser.block(0).unwrap();
        assert!(block.loops[0].has_tag("_atom_site_occupancy"));
        assert!(parser.block(1).is_err());
    }
}
