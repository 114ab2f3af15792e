//! # CIF 标签与循环分类
//!
//! 规范化后的 CIF 标签常量（见 [`normalize_tag`](crate::star::normalize_tag)），
//! 以及把循环按标签集合一次性归类的 [`LoopKind`]。
//!
//! ## 依赖关系
//! - 被 `cif/sanitize.rs`, `cif/extract.rs`, `cif/space_group.rs` 使用
//! - 使用 `star/dom.rs`

use crate::star::Loop;

// ─────────────────────────────────────────────────────────────
// 原子位点
// ─────────────────────────────────────────────────────────────
pub const LABEL: &str = "atom_site_label";
pub const TYPE_SYMBOL: &str = "atom_site_type_symbol";
pub const FRACT_X: &str = "atom_site_fract_x";
pub const FRACT_Y: &str = "atom_site_fract_y";
pub const FRACT_Z: &str = "atom_site_fract_z";
pub const OCCUPANCY: &str = "atom_site_occupancy";
pub const ATTACHED_HYDROGENS: &str = "atom_site_attached_hydrogens";
pub const ADP_TYPE: &str = "atom_site_adp_type";

pub const FRACT_FIELDS: [&str; 3] = [FRACT_X, FRACT_Y, FRACT_Z];

/// 原子位点主循环必须包含的字段
pub const CORE_ATOM_FIELDS: [&str; 6] = [LABEL, TYPE_SYMBOL, OCCUPANCY, FRACT_X, FRACT_Y, FRACT_Z];

// ─────────────────────────────────────────────────────────────
// ADP
// ─────────────────────────────────────────────────────────────
pub const U_ISO: &str = "atom_site_u_iso_or_equiv";
pub const B_ISO: &str = "atom_site_b_iso_or_equiv";
pub const ANISO_LABEL: &str = "atom_site_aniso_label";
pub const ANISO_U_PREFIX: &str = "atom_site_aniso_u_";
pub const ANISO_B_PREFIX: &str = "atom_site_aniso_b_";
pub const ANISO_U_11: &str = "atom_site_aniso_u_11";
pub const ANISO_B_11: &str = "atom_site_aniso_b_11";

// ─────────────────────────────────────────────────────────────
// MSP
// ─────────────────────────────────────────────────────────────
pub const SUSCEPTIBILITY_LABEL: &str = "atom_site_susceptibility_label";
pub const CHI_TYPE: &str = "atom_site_susceptibility_chi_type";
pub const CHI_PREFIX: &str = "atom_site_susceptibility_chi_";
/// 各向同性磁化率的两种写法
pub const CHI_ISO: [&str; 2] = ["atom_site_susceptibility_chi", "atom_site_susceptibility_chi_iso"];

/// 磁性 CIF 特有的标签前缀
pub const MAGNETIC_PREFIXES: [&str; 4] = [
    "atom_site_moment",
    "atom_site_susceptibility",
    "space_group_magn",
    "parent_space_group",
];

// ─────────────────────────────────────────────────────────────
// 晶胞
// ─────────────────────────────────────────────────────────────
pub const CELL_FIELDS: [&str; 6] = [
    "cell_length_a",
    "cell_length_b",
    "cell_length_c",
    "cell_angle_alpha",
    "cell_angle_beta",
    "cell_angle_gamma",
];

/// 晶系提示
pub const CRYSTAL_SYSTEM_HINTS: [&str; 2] = ["symmetry_cell_setting", "space_group_crystal_system"];

// ─────────────────────────────────────────────────────────────
// 空间群
// ─────────────────────────────────────────────────────────────
pub const HM_ALT: [&str; 2] = ["space_group_name_h-m_alt", "symmetry_space_group_name_h-m"];
pub const HALL: [&str; 2] = ["space_group_name_hall", "symmetry_space_group_name_hall"];
pub const HM_REF: &str = "space_group_name_h-m_ref";
pub const HM_FULL: &str = "space_group_name_h-m_full";
pub const IT_NUMBER: [&str; 2] = ["space_group_it_number", "symmetry_int_tables_number"];
pub const SETTING: &str = "space_group_it_coordinate_system_code";

const SYMOP_FIELDS: [&str; 4] = [
    "space_group_symop_operation_xyz",
    "symmetry_equiv_pos_as_xyz",
    "space_group_symop_id",
    "symmetry_equiv_pos_site_id",
];

/// 循环类型，由标签集合一次性判定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopKind {
    /// 原子位点主循环（标签 + 分数坐标）
    CoreAtomFields,
    /// 各向异性 ADP（`aniso_U_*` / `aniso_B_*`）
    AnisoAdp,
    /// 单独列出的各向同性 ADP
    IsoAdp,
    /// 磁化率
    Susceptibility,
    Lattice,
    /// 对称操作或空间群字段
    SpaceGroup,
    Unknown,
}

impl LoopKind {
    pub fn classify(lp: &Loop) -> Self {
        let tags = lp.normalized_tags();
        let has = |t: &str| tags.iter().any(|x| x == t);

        if has(SUSCEPTIBILITY_LABEL) || has(CHI_TYPE) {
            LoopKind::Susceptibility
        } else if has(ANISO_U_11) || has(ANISO_B_11) {
            LoopKind::AnisoAdp
        } else if has(LABEL) && FRACT_FIELDS.iter().any(|t| has(t)) {
            LoopKind::CoreAtomFields
        } else if has(U_ISO) || has(B_ISO) {
            LoopKind::IsoAdp
        } else if tags.iter().any(|t| t.starts_with("cell_")) {
            LoopKind::Lattice
        } else if SYMOP_FIELDS.iter().any(|t| has(t)) || tags.iter().any(|t| t.starts_with("space_group_name")) {
            LoopKind::SpaceGroup
        } else {
            LoopKind::Unknown
        }
    }
}

/// 按类型筛选数据块中的循环
pub fn loops_of_kind(loops: &[Loop], kind: LoopKind) -> impl Iterator<Item = &Loop> {
    loops.iter().filter(move |lp| LoopKind::classify(lp) == kind)
}
