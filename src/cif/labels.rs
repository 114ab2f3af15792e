//! # 通用标签 → CIF 标签
//!
//! 模型对象通过 [`ToStar`](crate::star::ToStar) 产生带通用标签（`length_a`、`fract_x`）
//! 的条目，写出前按标签集合判断实体类型，再查表改写为规范 CIF 标签。
//! 识别不出类型的条目原样写出。
//!
//! ## 依赖关系
//! - 被 `cif/writer.rs` 使用
//! - 表的完整性由 `models/` 的通用标签常量在测试中校验

/// 写出的实体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Lattice,
    SpaceGroup,
    AtomSites,
    AnisoU,
    AnisoB,
    Susceptibility,
}

pub const LATTICE_LABELS: &[(&str, &str)] = &[
    ("length_a", "_cell_length_a"),
    ("length_b", "_cell_length_b"),
    ("length_c", "_cell_length_c"),
    ("angle_alpha", "_cell_angle_alpha"),
    ("angle_beta", "_cell_angle_beta"),
    ("angle_gamma", "_cell_angle_gamma"),
];

pub const SPACE_GROUP_LABELS: &[(&str, &str)] = &[
    ("name_hm", "_space_group_name_H-M_alt"),
    ("setting", "_space_group_IT_coordinate_system_code"),
    ("number", "_space_group_IT_number"),
    ("name_hall", "_space_group_name_Hall"),
];

pub const ATOM_SITE_LABELS: &[(&str, &str)] = &[
    ("label", "_atom_site_label"),
    ("specie", "_atom_site_type_symbol"),
    ("fract_x", "_atom_site_fract_x"),
    ("fract_y", "_atom_site_fract_y"),
    ("fract_z", "_atom_site_fract_z"),
    ("occupancy", "_atom_site_occupancy"),
    ("adp_type", "_atom_site_adp_type"),
    ("Uiso", "_atom_site_U_iso_or_equiv"),
    ("Biso", "_atom_site_B_iso_or_equiv"),
];

pub const ANISO_U_LABELS: &[(&str, &str)] = &[
    ("label", "_atom_site_aniso_label"),
    ("U_11", "_atom_site_aniso_U_11"),
    ("U_12", "_atom_site_aniso_U_12"),
    ("U_13", "_atom_site_aniso_U_13"),
    ("U_22", "_atom_site_aniso_U_22"),
    ("U_23", "_atom_site_aniso_U_23"),
    ("U_33", "_atom_site_aniso_U_33"),
];

pub const ANISO_B_LABELS: &[(&str, &str)] = &[
    ("label", "_atom_site_aniso_label"),
    ("B_11", "_atom_site_aniso_B_11"),
    ("B_12", "_atom_site_aniso_B_12"),
    ("B_13", "_atom_site_aniso_B_13"),
    ("B_22", "_atom_site_aniso_B_22"),
    ("B_23", "_atom_site_aniso_B_23"),
    ("B_33", "_atom_site_aniso_B_33"),
];

pub const SUSCEPTIBILITY_LABELS: &[(&str, &str)] = &[
    ("label", "_atom_site_susceptibility_label"),
    ("chi_type", "_atom_site_susceptibility_chi_type"),
    ("chi", "_atom_site_susceptibility_chi"),
    ("chi_11", "_atom_site_susceptibility_chi_11"),
    ("chi_12", "_atom_site_susceptibility_chi_12"),
    ("chi_13", "_atom_site_susceptibility_chi_13"),
    ("chi_22", "_atom_site_susceptibility_chi_22"),
    ("chi_23", "_atom_site_susceptibility_chi_23"),
    ("chi_33", "_atom_site_susceptibility_chi_33"),
];

impl EntityKind {
    /// 按通用标签集合识别实体类型
    pub fn classify<S: AsRef<str>>(labels: &[S]) -> Option<Self> {
        let has = |name: &str| labels.iter().any(|l| l.as_ref() == name);
        if has("length_a") {
            Some(EntityKind::Lattice)
        } else if has("name_hm") {
            Some(EntityKind::SpaceGroup)
        } else if has("fract_x") {
            Some(EntityKind::AtomSites)
        } else if has("U_11") {
            Some(EntityKind::AnisoU)
        } else if has("B_11") {
            Some(EntityKind::AnisoB)
        } else if has("chi_type") {
            Some(EntityKind::Susceptibility)
        } else {
            None
        }
    }

    pub fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            EntityKind::Lattice => LATTICE_LABELS,
            EntityKind::SpaceGroup => SPACE_GROUP_LABELS,
            EntityKind::AtomSites => ATOM_SITE_LABELS,
            EntityKind::AnisoU => ANISO_U_LABELS,
            EntityKind::AnisoB => ANISO_B_LABELS,
            EntityKind::Susceptibility => SUSCEPTIBILITY_LABELS,
        }
    }

    /// 改写单个标签；表中没有的标签补上前导 `_`
    pub fn rename(&self, generic: &str) -> String {
        match self.table().iter().find(|(g, _)| *g == generic) {
            Some((_, cif)) => cif.to_string(),
            None => passthrough(generic),
        }
    }
}

/// 未识别的标签：保证有前导 `_`
pub fn passthrough(label: &str) -> String {
    if label.starts_with('_') {
        label.to_string()
    } else {
        format!("_{}", label)
    }
}
