//! # 空间群字段解析
//!
//! 按优先级依次尝试数据块中的空间群字段，第一个能解析的字段为准：
//!
//! 1. H-M 符号: `_space_group_name_H-M_alt`, `_symmetry_space_group_name_H-M`
//! 2. Hall 符号: `_space_group_name_Hall`, `_symmetry_space_group_name_Hall`
//! 3. `_space_group_name_H-M_ref`
//! 4. `_space_group_name_H-M_full`
//! 5. 国际表编号: `_space_group_IT_number`, `_symmetry_Int_Tables_number`
//!
//! 符号中没有 `:设定` 后缀时，读取 `_space_group_IT_coordinate_system_code`。
//!
//! ## 依赖关系
//! - 被 `cif/parser.rs` 调用
//! - 使用 `symmetry/registry.rs`, `cif/tags.rs`

use super::tags;
use crate::models::SpaceGroup;
use crate::star::Block;
use crate::symmetry::{normalize_setting, SymbolRegistry};

/// 字段的解析方式
#[derive(Debug, Clone, Copy)]
enum SymbolKind {
    HermannMauguin,
    Hall,
}

/// 从数据块解析空间群
pub fn extract_space_group(block: &Block, warnings: &mut Vec<String>) -> Option<SpaceGroup> {
    let registry = SymbolRegistry::global();
    let setting = block
        .get(tags::SETTING)
        .and_then(|d| d.as_str())
        .map(normalize_setting)
        .filter(|s| !s.is_empty());

    let cascade = tags::HM_ALT
        .iter()
        .map(|t| (*t, SymbolKind::HermannMauguin))
        .chain(tags::HALL.iter().map(|t| (*t, SymbolKind::Hall)))
        .chain([
            (tags::HM_REF, SymbolKind::HermannMauguin),
            (tags::HM_FULL, SymbolKind::HermannMauguin),
        ]);

    let mut unresolved = Vec::new();
    for (tag, kind) in cascade {
        let Some(raw) = block.get(tag).and_then(|d| d.as_str()) else {
            continue;
        };
        let resolved = match kind {
            SymbolKind::HermannMauguin => registry.resolve_with_setting(raw, setting.as_deref()),
            SymbolKind::Hall => registry.resolve_hall(raw),
        };
        match resolved {
            Some(sg) => return Some(sg),
            None => unresolved.push(raw.to_string()),
        }
    }

    let number = tags::IT_NUMBER
        .iter()
        .find_map(|t| block.get(t).and_then(|d| d.as_f64()));
    let resolved = number
        .filter(|n| n.fract() == 0.0)
        .and_then(|n| registry.from_int_number(n as i64, setting.as_deref()));

    for raw in &unresolved {
        warnings.push(format!("Unrecognized space group symbol '{}'", raw));
    }
    match (&resolved, number) {
        (Some(sg), _) if !unresolved.is_empty() => {
            warnings.push(format!("Space group taken from IT number {}", sg.number));
        }
        (None, Some(n)) => warnings.push(format!("Invalid space group number {}", n)),
        _ => {}
    }
    resolved
}
