//! # 语义提取
//!
//! 从清洗后的数据块提取晶格与原子位点（含 ADP 与 MSP）。
//!
//! ## 晶格
//! 六个晶胞参数齐全时直接构造；缺少字段时按晶系提示
//! (`_symmetry_cell_setting` / `_space_group_crystal_system`) 只读取该晶系需要的参数。
//!
//! ## 原子位点
//! - 主循环必须包含 label, type_symbol, occupancy, fract_x/y/z
//! - 出现在各向异性循环中的原子取 Uani/Bani，否则取各向同性值
//! - 同一数据块中 ADP 类型不一致是硬错误
//! - 非数值的 ADP/MSP 记为 0.0 并按原子警告
//!
//! ## 依赖关系
//! - 被 `cif/parser.rs` 调用
//! - 使用 `cif/tags.rs`, `models/`, `star/dom.rs`

use super::tags::{self, LoopKind};
use crate::error::{CifError, Result};
use crate::models::{
    AdpType, AtomSite, CrystalSystem, Displacement, Lattice, Parameter, Susceptibility, LATTICE_FIELDS,
    TENSOR_COMPONENTS,
};
use crate::star::{normalize_tag, Block, Datum, Loop};

use std::collections::{HashMap, HashSet};

// ─────────────────────────────────────────────────────────────
// 晶格
// ─────────────────────────────────────────────────────────────

fn read_cell(block: &Block, fields: &[&str]) -> Result<Vec<Parameter>> {
    fields
        .iter()
        .map(|f| {
            let tag = format!("cell_{}", f);
            block
                .get(&tag)
                .and_then(Parameter::from_datum)
                .ok_or(CifError::MissingField { field: tag })
        })
        .collect()
}

/// 提取晶格
pub fn extract_lattice(block: &Block, warnings: &mut Vec<String>) -> Option<Lattice> {
    let missing = match read_cell(block, &LATTICE_FIELDS) {
        Ok(params) => return CrystalSystem::Triclinic.build(&params),
        Err(e) => e,
    };

    let system = tags::CRYSTAL_SYSTEM_HINTS
        .iter()
        .find_map(|t| block.get(t).and_then(|d| d.as_str()))
        .and_then(CrystalSystem::from_hint);

    let lattice = system.and_then(|s| read_cell(block, s.required_fields()).ok().and_then(|p| s.build(&p)));
    match (lattice, system) {
        (Some(lattice), Some(system)) => {
            warnings.push(format!("{}; cell derived from {} crystal system", missing, system));
            Some(lattice)
        }
        _ => {
            if tags::CELL_FIELDS.iter().any(|t| block.get(t).is_some()) {
                warnings.push(format!("Incomplete cell parameters: {}", missing));
            }
            None
        }
    }
}

// ─────────────────────────────────────────────────────────────
// 原子位点
// ─────────────────────────────────────────────────────────────

fn text_of(datum: Option<&Datum>) -> String {
    match datum {
        Some(d) => d.as_str().unwrap_or("?").to_string(),
        None => String::new(),
    }
}

/// 读取数值；非数值记为 0.0 并警告
fn coerce(datum: Option<&Datum>, label: &str, field: &str, warnings: &mut Vec<String>) -> Parameter {
    match datum.and_then(Parameter::from_datum) {
        Some(p) => p,
        None => {
            warnings.push(format!("Atom '{}': non-numeric _{}, using 0.0", label, field));
            Parameter::new(0.0)
        }
    }
}

fn coerce_tensor(lp: &Loop, row: usize, prefix: &str, label: &str, warnings: &mut Vec<String>) -> [Parameter; 6] {
    TENSOR_COMPONENTS.map(|c| {
        let field = format!("{}{}", prefix, c);
        coerce(lp.get(row, &field), label, &field, warnings)
    })
}

/// 各向异性 ADP：标签 → 张量
fn aniso_adp(block: &Block, warnings: &mut Vec<String>) -> HashMap<String, Displacement> {
    let mut map = HashMap::new();
    for lp in tags::loops_of_kind(&block.loops, LoopKind::AnisoAdp) {
        let label_tag = if lp.has_tag(tags::ANISO_LABEL) {
            tags::ANISO_LABEL
        } else {
            tags::LABEL
        };
        let is_u = lp.has_tag(tags::ANISO_U_11);
        for row in 0..lp.nrows() {
            let label = text_of(lp.get(row, label_tag));
            let adp = if is_u {
                Displacement::Uani(coerce_tensor(lp, row, tags::ANISO_U_PREFIX, &label, warnings))
            } else {
                Displacement::Bani(coerce_tensor(lp, row, tags::ANISO_B_PREFIX, &label, warnings))
            };
            map.entry(label).or_insert(adp);
        }
    }
    map
}

/// 各向同性 ADP 来源：含标签列与 U/B 列的循环中的一行
struct IsoSource<'a> {
    lp: &'a Loop,
    row: usize,
}

fn iso_sources(block: &Block) -> HashMap<String, IsoSource<'_>> {
    let mut map = HashMap::new();
    for lp in block.loops.iter().filter(|lp| {
        matches!(LoopKind::classify(lp), LoopKind::CoreAtomFields | LoopKind::IsoAdp)
            && lp.has_tag(tags::LABEL)
            && (lp.has_tag(tags::U_ISO) || lp.has_tag(tags::B_ISO))
    }) {
        for row in 0..lp.nrows() {
            map.entry(text_of(lp.get(row, tags::LABEL)))
                .or_insert(IsoSource { lp, row });
        }
    }
    map
}

impl IsoSource<'_> {
    /// U 列优先；同时有 U/B 列时按该行的 adp_type 选择
    fn displacement(&self, label: &str, warnings: &mut Vec<String>) -> Displacement {
        let prefer_b = self
            .lp
            .get(self.row, tags::ADP_TYPE)
            .and_then(|d| d.as_str())
            .and_then(AdpType::parse)
            .is_some_and(|t| matches!(t, AdpType::Biso | AdpType::Bani));
        let use_b = !self.lp.has_tag(tags::U_ISO) || (prefer_b && self.lp.has_tag(tags::B_ISO));
        if use_b {
            Displacement::Biso(coerce(self.lp.get(self.row, tags::B_ISO), label, tags::B_ISO, warnings))
        } else {
            Displacement::Uiso(coerce(self.lp.get(self.row, tags::U_ISO), label, tags::U_ISO, warnings))
        }
    }
}

/// 磁化率：标签 → MSP
fn susceptibilities(block: &Block, warnings: &mut Vec<String>) -> Option<HashMap<String, Susceptibility>> {
    let mut found = false;
    let mut map = HashMap::new();
    for lp in tags::loops_of_kind(&block.loops, LoopKind::Susceptibility) {
        found = true;
        let iso_tag = tags::CHI_ISO.iter().copied().find(|t| lp.has_tag(t)).unwrap_or(tags::CHI_ISO[0]);
        for row in 0..lp.nrows() {
            let label = text_of(lp.get(row, tags::SUSCEPTIBILITY_LABEL));
            let anisotropic = match lp.get(row, tags::CHI_TYPE).and_then(|d| d.as_str()) {
                Some(chi_type) => chi_type.to_ascii_lowercase().contains("ani"),
                None => lp.has_tag(&format!("{}11", tags::CHI_PREFIX)),
            };
            let msp = if anisotropic {
                Susceptibility::Cani(coerce_tensor(lp, row, tags::CHI_PREFIX, &label, warnings))
            } else {
                Susceptibility::Ciso(coerce(lp.get(row, iso_tag), &label, iso_tag, warnings))
            };
            map.entry(label).or_insert(msp);
        }
    }
    found.then_some(map)
}

/// 是否为磁性 CIF（含磁矩、磁化率或磁空间群字段）
pub fn is_magnetic(block: &Block) -> bool {
    let magnetic = |tag: &str| {
        let tag = normalize_tag(tag);
        tags::MAGNETIC_PREFIXES.iter().any(|p| tag.starts_with(p))
    };
    block.entries.iter().any(|(tag, _)| magnetic(tag.as_str()))
        || block.loops.iter().any(|lp| lp.tags.iter().any(|t| magnetic(t.as_str())))
}

/// 提取原子位点
pub fn extract_atoms(block: &Block, warnings: &mut Vec<String>) -> Result<Vec<AtomSite>> {
    let core = block
        .loops
        .iter()
        .find(|lp| lp.has_all(&tags::CORE_ATOM_FIELDS))
        .ok_or_else(|| {
            let candidate = tags::loops_of_kind(&block.loops, LoopKind::CoreAtomFields).next();
            CifError::MissingLoop {
                block: block.name.clone(),
                missing: tags::CORE_ATOM_FIELDS
                    .iter()
                    .filter(|t| !candidate.is_some_and(|lp| lp.has_tag(t)))
                    .map(|t| format!("_{}", t))
                    .collect(),
            }
        })?;

    let occupancy_defaulted = core.is_synthesized(tags::OCCUPANCY);
    let mut atoms = Vec::with_capacity(core.nrows());
    let mut seen = HashSet::new();
    for row in 0..core.nrows() {
        let label = text_of(core.get(row, tags::LABEL));
        if !seen.insert(label.clone()) {
            warnings.push(format!("Duplicate atom label '{}'", label));
        }
        let mut read = |field: &str| coerce(core.get(row, field), &label, field, warnings);
        let fract_x = read(tags::FRACT_X);
        let fract_y = read(tags::FRACT_Y);
        let fract_z = read(tags::FRACT_Z);
        let occupancy = read(tags::OCCUPANCY);
        atoms.push(AtomSite {
            specie: text_of(core.get(row, tags::TYPE_SYMBOL)),
            label,
            fract_x,
            fract_y,
            fract_z,
            occupancy,
            occupancy_defaulted,
            adp: None,
            msp: None,
        });
    }

    assign_adp(block, &mut atoms, warnings)?;
    assign_msp(block, &mut atoms, warnings);
    Ok(atoms)
}

fn assign_adp(block: &Block, atoms: &mut [AtomSite], warnings: &mut Vec<String>) -> Result<()> {
    let aniso = aniso_adp(block, warnings);
    let iso = iso_sources(block);
    if aniso.is_empty() && iso.is_empty() {
        warnings.push("No ADP defined".to_string());
        return Ok(());
    }

    let mut first: Option<AdpType> = None;
    for atom in atoms.iter_mut() {
        atom.adp = match (aniso.get(&atom.label), iso.get(&atom.label)) {
            (Some(adp), _) => Some(adp.clone()),
            (None, Some(source)) => Some(source.displacement(&atom.label, warnings)),
            (None, None) => {
                warnings.push(format!("Atom '{}' has no ADP", atom.label));
                None
            }
        };
    }

    for atom in atoms.iter() {
        let Some(t) = atom.adp.as_ref().map(Displacement::adp_type) else {
            continue;
        };
        match first {
            None => first = Some(t),
            Some(f) if f != t => {
                return Err(CifError::ConflictingAdpType {
                    block: block.name.clone(),
                    first: f.to_string(),
                    second: t.to_string(),
                    label: atom.label.clone(),
                });
            }
            _ => {}
        }
    }
    Ok(())
}

fn assign_msp(block: &Block, atoms: &mut [AtomSite], warnings: &mut Vec<String>) {
    match susceptibilities(block, warnings) {
        Some(map) => {
            for atom in atoms.iter_mut() {
                atom.msp = map.get(&atom.label).cloned();
            }
        }
        None if is_magnetic(block) => warnings.push("No MSP defined".to_string()),
        None => {}
    }
}
