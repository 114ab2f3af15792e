//! # 晶体结构数据模型
//!
//! 晶格参数（带标准不确定度与固定标志）、晶系约束以及"物相"（一个 CIF 数据块
//! 对应的模型对象集合）。
//!
//! ## 依赖关系
//! - 被 `cif/` 提取器与写出器使用
//! - 使用 `star/dom.rs` 实现 `ToStar`

use super::atom::AtomSite;
use super::space_group::SpaceGroup;
use crate::star::{Datum, StarItem, ToStar};

use serde::Serialize;
use std::fmt;

/// 晶格字段的通用标签，顺序为 a, b, c, alpha, beta, gamma
pub const LATTICE_FIELDS: [&str; 6] = [
    "length_a",
    "length_b",
    "length_c",
    "angle_alpha",
    "angle_beta",
    "angle_gamma",
];

/// 可精修参数：数值 + 可选标准不确定度 + 可选固定标志
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Parameter {
    pub value: f64,
    pub error: Option<f64>,
    pub fixed: Option<bool>,
}

impl Parameter {
    pub fn new(value: f64) -> Self {
        Parameter {
            value,
            error: None,
            fixed: None,
        }
    }

    pub fn with_error(mut self, error: f64) -> Self {
        self.error = Some(error);
        self.fixed = Some(false);
        self
    }

    /// 从 STAR 值读取；非数值返回 `None`
    pub fn from_datum(datum: &Datum) -> Option<Self> {
        datum.number.map(|value| Parameter {
            value,
            error: datum.error,
            fixed: datum.fixed,
        })
    }

    pub fn to_datum(&self) -> Datum {
        Datum::numeric(self.value, self.error, self.fixed)
    }
}

impl From<f64> for Parameter {
    fn from(value: f64) -> Self {
        Parameter::new(value)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::star::format_number(self.value, self.error, self.fixed))
    }
}

/// 七大晶系（三方晶系区分六方轴与菱面体轴）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CrystalSystem {
    Triclinic,
    Monoclinic,
    Orthorhombic,
    Tetragonal,
    /// 三方晶系，六方轴
    Trigonal,
    /// 三方晶系，菱面体轴
    Rhombohedral,
    Hexagonal,
    Cubic,
}

impl CrystalSystem {
    /// 从 `_symmetry_cell_setting` / `_space_group_crystal_system` 的值解析（忽略大小写）
    pub fn from_hint(hint: &str) -> Option<Self> {
        match hint.trim().to_ascii_lowercase().as_str() {
            "triclinic" | "anorthic" => Some(CrystalSystem::Triclinic),
            "monoclinic" => Some(CrystalSystem::Monoclinic),
            "orthorhombic" => Some(CrystalSystem::Orthorhombic),
            "tetragonal" => Some(CrystalSystem::Tetragonal),
            "trigonal" => Some(CrystalSystem::Trigonal),
            "rhombohedral" => Some(CrystalSystem::Rhombohedral),
            "hexagonal" => Some(CrystalSystem::Hexagonal),
            "cubic" | "isometric" => Some(CrystalSystem::Cubic),
            _ => None,
        }
    }

    /// 该晶系构造晶格所需的通用字段（`LATTICE_FIELDS` 的子集）
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            CrystalSystem::Cubic => &["length_a"],
            CrystalSystem::Tetragonal | CrystalSystem::Trigonal | CrystalSystem::Hexagonal => {
                &["length_a", "length_c"]
            }
            CrystalSystem::Rhombohedral => &["length_a", "angle_alpha"],
            CrystalSystem::Orthorhombic => &["length_a", "length_b", "length_c"],
            CrystalSystem::Monoclinic => &["length_a", "length_b", "length_c", "angle_beta"],
            CrystalSystem::Triclinic => &LATTICE_FIELDS,
        }
    }

    /// 用 `required_fields` 顺序的参数构造晶格
    pub fn build(&self, params: &[Parameter]) -> Option<Lattice> {
        if params.len() != self.required_fields().len() {
            return None;
        }
        let p = params;
        Some(match self {
            CrystalSystem::Cubic => Lattice::cubic(p[0]),
            CrystalSystem::Tetragonal => Lattice::tetragonal(p[0], p[1]),
            CrystalSystem::Trigonal | CrystalSystem::Hexagonal => Lattice::hexagonal(p[0], p[1]),
            CrystalSystem::Rhombohedral => Lattice::rhombohedral(p[0], p[1]),
            CrystalSystem::Orthorhombic => Lattice::orthorhombic(p[0], p[1], p[2]),
            CrystalSystem::Monoclinic => Lattice::monoclinic(p[0], p[1], p[2], p[3]),
            CrystalSystem::Triclinic => Lattice::new(p[0], p[1], p[2], p[3], p[4], p[5]),
        })
    }
}

impl fmt::Display for CrystalSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CrystalSystem::Triclinic => "triclinic",
            CrystalSystem::Monoclinic => "monoclinic",
            CrystalSystem::Orthorhombic => "orthorhombic",
            CrystalSystem::Tetragonal => "tetragonal",
            CrystalSystem::Trigonal => "trigonal",
            CrystalSystem::Rhombohedral => "rhombohedral",
            CrystalSystem::Hexagonal => "hexagonal",
            CrystalSystem::Cubic => "cubic",
        };
        f.write_str(name)
    }
}

/// 晶格参数表示，角度单位：度
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lattice {
    pub a: Parameter,
    pub b: Parameter,
    pub c: Parameter,
    pub alpha: Parameter,
    pub beta: Parameter,
    pub gamma: Parameter,
}

impl Lattice {
    pub fn new(
        a: Parameter,
        b: Parameter,
        c: Parameter,
        alpha: Parameter,
        beta: Parameter,
        gamma: Parameter,
    ) -> Self {
        Lattice {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        }
    }

    /// 从纯数值 (a, b, c, alpha, beta, gamma) 创建
    pub fn from_parameters(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        Lattice::new(
            a.into(),
            b.into(),
            c.into(),
            alpha.into(),
            beta.into(),
            gamma.into(),
        )
    }

    pub fn cubic(a: Parameter) -> Self {
        let right = Parameter::new(90.0);
        Lattice::new(a, a, a, right, right, right)
    }

    pub fn tetragonal(a: Parameter, c: Parameter) -> Self {
        let right = Parameter::new(90.0);
        Lattice::new(a, a, c, right, right, right)
    }

    pub fn orthorhombic(a: Parameter, b: Parameter, c: Parameter) -> Self {
        let right = Parameter::new(90.0);
        Lattice::new(a, b, c, right, right, right)
    }

    /// 六方轴（六方与三方晶系）：a = b, γ = 120°
    pub fn hexagonal(a: Parameter, c: Parameter) -> Self {
        let right = Parameter::new(90.0);
        Lattice::new(a, a, c, right, right, Parameter::new(120.0))
    }

    /// 菱面体轴：a = b = c, α = β = γ
    pub fn rhombohedral(a: Parameter, alpha: Parameter) -> Self {
        Lattice::new(a, a, a, alpha, alpha, alpha)
    }

    pub fn monoclinic(a: Parameter, b: Parameter, c: Parameter, beta: Parameter) -> Self {
        let right = Parameter::new(90.0);
        Lattice::new(a, b, c, right, beta, right)
    }

    /// 参数数值 (a, b, c, alpha, beta, gamma)
    pub fn parameters(&self) -> (f64, f64, f64, f64, f64, f64) {
        (
            self.a.value,
            self.b.value,
            self.c.value,
            self.alpha.value,
            self.beta.value,
            self.gamma.value,
        )
    }

    /// 按 `LATTICE_FIELDS` 顺序的参数
    pub fn fields(&self) -> [&Parameter; 6] {
        [
            &self.a,
            &self.b,
            &self.c,
            &self.alpha,
            &self.beta,
            &self.gamma,
        ]
    }

    /// 晶格向量矩阵 (3x3)，行向量表示 a, b, c
    pub fn matrix(&self) -> [[f64; 3]; 3] {
        let (a, b, c, alpha, beta, gamma) = self.parameters();
        let cos_alpha = alpha.to_radians().cos();
        let cos_beta = beta.to_radians().cos();
        let gamma_rad = gamma.to_radians();
        let cos_gamma = gamma_rad.cos();
        let sin_gamma = gamma_rad.sin();

        let a_vec = [a, 0.0, 0.0];
        let b_vec = [b * cos_gamma, b * sin_gamma, 0.0];

        let c1 = c * cos_beta;
        let c2 = c * (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
        let c3 = (c * c - c1 * c1 - c2 * c2).sqrt();

        [a_vec, b_vec, [c1, c2, c3]]
    }

    /// 晶胞体积 (Å³)
    pub fn volume(&self) -> f64 {
        let [a, b, c] = self.matrix();
        (a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
            + a[2] * (b[0] * c[1] - b[1] * c[0]))
            .abs()
    }
}

impl ToStar for Lattice {
    fn to_star(&self) -> Vec<StarItem> {
        let entries = LATTICE_FIELDS
            .iter()
            .zip(self.fields())
            .map(|(name, p)| (name.to_string(), p.to_datum()))
            .collect();
        vec![StarItem::Section(entries)]
    }
}

/// 物相：写入同一个 CIF 数据块的模型对象集合
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Phase {
    pub name: String,
    pub lattice: Option<Lattice>,
    pub space_group: Option<SpaceGroup>,
    pub atoms: Vec<AtomSite>,
}

impl Phase {
    pub fn new(name: impl Into<String>) -> Self {
        Phase {
            name: name.into(),
            lattice: None,
            space_group: None,
            atoms: Vec::new(),
        }
    }

    /// 化学式（按元素符号排序）
    pub fn formula(&self) -> String {
        use std::collections::BTreeMap;
        let mut counts: BTreeMap<&str, f64> = BTreeMap::new();

        for atom in &self.atoms {
            *counts.entry(atom.specie.as_str()).or_insert(0.0) += atom.occupancy.value;
        }

        counts
            .into_iter()
            .map(|(el, count)| {
                if (count - 1.0).abs() < 1e-9 {
                    el.to_string()
                } else {
                    format!("{}{}", el, (count * 1000.0).round() / 1000.0)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

impl ToStar for Phase {
    fn to_star(&self) -> Vec<StarItem> {
        let mut items = Vec::new();
        if let Some(lattice) = &self.lattice {
            items.extend(lattice.to_star());
        }
        if let Some(sg) = &self.space_group {
            items.extend(sg.to_star());
        }
        items.extend(self.atoms.to_star());
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_cubic_volume() {
        let lattice = Lattice::cubic(Parameter::new(5.0));
        assert!((lattice.volume() - 125.0).abs() < 1e-6);

        let m = lattice.matrix();
        assert!((m[1][1] - 5.0).abs() < 1e-9);
        assert!(m[2][0].abs() < 1e-9);
    }

    #[test]
    fn test_lattice_hexagonal() {
        let lattice = Lattice::hexagonal(Parameter::new(3.0), Parameter::new(5.0));
        let (a, b, c, alpha, _, gamma) = lattice.parameters();
        assert_eq!(a, b);
        assert_eq!(c, 5.0);
        assert_eq!(alpha, 90.0);
        assert_eq!(gamma, 120.0);
        // V = a² c sin(120°)
        assert!((lattice.volume() - 9.0 * 5.0 * 120f64.to_radians().sin()).abs() < 1e-6);
    }

    #[test]
    fn test_crystal_system_hint() {
        assert_eq!(CrystalSystem::from_hint("Cubic"), Some(CrystalSystem::Cubic));
        assert_eq!(CrystalSystem::from_hint(" TETRAGONAL "), Some(CrystalSystem::Tetragonal));
        assert_eq!(CrystalSystem::from_hint("spherical"), None);
    }

    #[test]
    fn test_crystal_system_build_matches_required_fields() {
        let monoclinic = CrystalSystem::Monoclinic;
        let params: Vec<Parameter> = [5.0, 6.0, 7.0, 101.5].iter().map(|&v| Parameter::new(v)).collect();
        let lattice = monoclinic.build(&params).unwrap();
        assert_eq!(lattice.parameters(), (5.0, 6.0, 7.0, 90.0, 101.5, 90.0));

        assert!(CrystalSystem::Cubic.build(&params).is_none());
    }

    #[test]
    fn test_rhombohedral_shares_angle() {
        let lattice = Lattice::rhombohedral(Parameter::new(5.0).with_error(0.001), Parameter::new(60.0));
        assert_eq!(lattice.beta.value, 60.0);
        assert_eq!(lattice.c.error, Some(0.001));
    }

    #[test]
    fn test_lattice_to_star_uses_generic_labels() {
        let items = Lattice::cubic(Parameter::new(5.43)).to_star();
        match &items[0] {
            StarItem::Section(entries) => {
                let names: Vec<_> = entries.iter().map(|(k, _)| k.as_str()).collect();
                assert_eq!(names, LATTICE_FIELDS.to_vec());
                assert_eq!(entries[5].1.number, Some(90.0));
            }
            other => panic!("unexpected item {:?}", other),
        }
    }

    #[test]
    fn test_parameter_display() {
        assert_eq!(Parameter::new(5.4307).with_error(0.0002).to_string(), "5.4307(2)");
        assert_eq!(Parameter::new(90.0).to_string(), "90");
    }

    #[test]
    fn test_phase_formula_uses_occupancy() {
        let mut phase = Phase::new("NbZr");
        phase.atoms.push(AtomSite::new("Nb_fix", "Nb", [0.0, 0.0, 0.0]).with_occupancy(0.8));
        phase.atoms.push(AtomSite::new("Zr_fix", "Zr", [0.0, 0.0, 0.0]).with_occupancy(0.2));
        assert_eq!(phase.formula(), "Nb0.8Zr0.2");
    }
}
