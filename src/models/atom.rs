//! # 原子位点数据模型
//!
//! 原子位点、原子位移参数 (ADP) 与磁化率参数 (MSP)。
//!
//! ## 张量分量顺序
//! 各向异性张量统一按 11, 12, 13, 22, 23, 33 存储。
//!
//! ## 依赖关系
//! - 被 `cif/extract.rs` 构造，被 `cif/writer.rs` 写出
//! - 使用 `models/structure.rs` 的 Parameter

use super::structure::Parameter;
use crate::star::{Datum, Loop, StarItem, ToStar, Value};

use serde::Serialize;
use std::fmt;

/// 张量分量后缀
pub const TENSOR_COMPONENTS: [&str; 6] = ["11", "12", "13", "22", "23", "33"];

/// 原子位点主循环的通用标签
pub const ATOM_SITE_FIELDS: [&str; 6] = ["label", "specie", "fract_x", "fract_y", "fract_z", "occupancy"];

/// ADP 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AdpType {
    Uiso,
    Uani,
    Biso,
    Bani,
}

impl AdpType {
    /// 从 `_atom_site_adp_type` 的值解析
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uiso" => Some(AdpType::Uiso),
            "uani" => Some(AdpType::Uani),
            "biso" => Some(AdpType::Biso),
            "bani" => Some(AdpType::Bani),
            _ => None,
        }
    }

    pub fn is_anisotropic(&self) -> bool {
        matches!(self, AdpType::Uani | AdpType::Bani)
    }
}

impl fmt::Display for AdpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AdpType::Uiso => "Uiso",
            AdpType::Uani => "Uani",
            AdpType::Biso => "Biso",
            AdpType::Bani => "Bani",
        };
        f.write_str(name)
    }
}

/// 原子位移参数
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Displacement {
    Uiso(Parameter),
    Biso(Parameter),
    Uani([Parameter; 6]),
    Bani([Parameter; 6]),
}

impl Displacement {
    pub fn adp_type(&self) -> AdpType {
        match self {
            Displacement::Uiso(_) => AdpType::Uiso,
            Displacement::Biso(_) => AdpType::Biso,
            Displacement::Uani(_) => AdpType::Uani,
            Displacement::Bani(_) => AdpType::Bani,
        }
    }
}

/// 磁化率参数
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Susceptibility {
    Ciso(Parameter),
    Cani([Parameter; 6]),
}

impl Susceptibility {
    pub fn chi_type(&self) -> &'static str {
        match self {
            Susceptibility::Ciso(_) => "Ciso",
            Susceptibility::Cani(_) => "Cani",
        }
    }
}

/// 原子位点
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtomSite {
    /// 位点标签，数据块内唯一
    pub label: String,
    /// 元素/离子符号
    pub specie: String,
    pub fract_x: Parameter,
    pub fract_y: Parameter,
    pub fract_z: Parameter,
    pub occupancy: Parameter,
    /// 占有率由清洗步骤补全（文件中没有占有率列）
    pub occupancy_defaulted: bool,
    pub adp: Option<Displacement>,
    pub msp: Option<Susceptibility>,
}

impl AtomSite {
    pub fn new(label: impl Into<String>, specie: impl Into<String>, position: [f64; 3]) -> Self {
        AtomSite {
            label: label.into(),
            specie: specie.into(),
            fract_x: position[0].into(),
            fract_y: position[1].into(),
            fract_z: position[2].into(),
            occupancy: Parameter::new(1.0),
            occupancy_defaulted: false,
            adp: None,
            msp: None,
        }
    }

    pub fn with_occupancy(mut self, occupancy: f64) -> Self {
        self.occupancy = occupancy.into();
        self
    }

    pub fn with_adp(mut self, adp: Displacement) -> Self {
        self.adp = Some(adp);
        self
    }

    pub fn with_msp(mut self, msp: Susceptibility) -> Self {
        self.msp = Some(msp);
        self
    }

    /// 分数坐标数值 [x, y, z]
    pub fn position(&self) -> [f64; 3] {
        [self.fract_x.value, self.fract_y.value, self.fract_z.value]
    }
}

fn fill() -> Datum {
    Datum::from_value(Value::Inapplicable)
}

fn tensor_loop(prefix: &str, rows: Vec<(&str, &[Parameter; 6])>) -> Loop {
    let mut tags = vec!["label".to_string()];
    tags.extend(TENSOR_COMPONENTS.iter().map(|c| format!("{}_{}", prefix, c)));
    let mut lp = Loop::new(tags);
    for (label, tensor) in rows {
        let mut row = vec![Datum::text(label)];
        row.extend(tensor.iter().map(|p| p.to_datum()));
        lp.rows.push(row);
    }
    lp
}

/// 原子位点列表 → 主循环 + 各向异性 ADP 循环 + MSP 循环
impl ToStar for Vec<AtomSite> {
    fn to_star(&self) -> Vec<StarItem> {
        if self.is_empty() {
            return Vec::new();
        }

        let has_type = |t: AdpType| self.iter().any(|a| a.adp.as_ref().map(|d| d.adp_type()) == Some(t));
        let any_adp = self.iter().any(|a| a.adp.is_some());

        // 主循环；占有率全部为补全的 1.0 时不写出该列
        let write_occupancy = !self.iter().all(|a| a.occupancy_defaulted && a.occupancy.value == 1.0);
        let mut tags: Vec<String> = ATOM_SITE_FIELDS
            .iter()
            .filter(|f| write_occupancy || **f != "occupancy")
            .map(|s| s.to_string())
            .collect();
        if any_adp {
            tags.push("adp_type".to_string());
        }
        let iso_columns: Vec<AdpType> = [AdpType::Uiso, AdpType::Biso]
            .into_iter()
            .filter(|t| has_type(*t))
            .collect();
        for t in &iso_columns {
            tags.push(t.to_string());
        }

        let mut core = Loop::new(tags);
        for atom in self {
            let mut row = vec![
                Datum::text(&atom.label),
                Datum::text(&atom.specie),
                atom.fract_x.to_datum(),
                atom.fract_y.to_datum(),
                atom.fract_z.to_datum(),
            ];
            if write_occupancy {
                row.push(atom.occupancy.to_datum());
            }
            if any_adp {
                row.push(match &atom.adp {
                    Some(adp) => Datum::text(adp.adp_type().to_string()),
                    None => fill(),
                });
            }
            for t in &iso_columns {
                row.push(match (&atom.adp, t) {
                    (Some(Displacement::Uiso(p)), AdpType::Uiso) => p.to_datum(),
                    (Some(Displacement::Biso(p)), AdpType::Biso) => p.to_datum(),
                    _ => fill(),
                });
            }
            core.rows.push(row);
        }
        let mut items = vec![StarItem::Loop(core)];

        // 各向异性 ADP
        let u_rows: Vec<_> = self
            .iter()
            .filter_map(|a| match &a.adp {
                Some(Displacement::Uani(t)) => Some((a.label.as_str(), t)),
                _ => None,
            })
            .collect();
        if !u_rows.is_empty() {
            items.push(StarItem::Loop(tensor_loop("U", u_rows)));
        }
        let b_rows: Vec<_> = self
            .iter()
            .filter_map(|a| match &a.adp {
                Some(Displacement::Bani(t)) => Some((a.label.as_str(), t)),
                _ => None,
            })
            .collect();
        if !b_rows.is_empty() {
            items.push(StarItem::Loop(tensor_loop("B", b_rows)));
        }

        // 磁化率
        let magnetic: Vec<&AtomSite> = self.iter().filter(|a| a.msp.is_some()).collect();
        if !magnetic.is_empty() {
            let any_iso = magnetic.iter().any(|a| matches!(a.msp, Some(Susceptibility::Ciso(_))));
            let any_ani = magnetic.iter().any(|a| matches!(a.msp, Some(Susceptibility::Cani(_))));

            let mut tags = vec!["label".to_string(), "chi_type".to_string()];
            if any_iso {
                tags.push("chi".to_string());
            }
            if any_ani {
                tags.extend(TENSOR_COMPONENTS.iter().map(|c| format!("chi_{}", c)));
            }
            let mut lp = Loop::new(tags);
            for atom in magnetic {
                let Some(msp) = &atom.msp else { continue };
                let mut row = vec![Datum::text(&atom.label), Datum::text(msp.chi_type())];
                if any_iso {
                    row.push(match msp {
                        Susceptibility::Ciso(p) => p.to_datum(),
                        Susceptibility::Cani(_) => fill(),
                    });
                }
                if any_ani {
                    match msp {
                        Susceptibility::Cani(t) => row.extend(t.iter().map(|p| p.to_datum())),
                        Susceptibility::Ciso(_) => row.extend((0..6).map(|_| fill())),
                    }
                }
                lp.rows.push(row);
            }
            items.push(StarItem::Loop(lp));
        }

        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loops(items: &[StarItem]) -> Vec<&Loop> {
        items
            .iter()
            .filter_map(|i| match i {
                StarItem::Loop(lp) => Some(lp),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_adp_type_parse() {
        assert_eq!(AdpType::parse("Uani"), Some(AdpType::Uani));
        assert_eq!(AdpType::parse(" biso"), Some(AdpType::Biso));
        assert_eq!(AdpType::parse("Umpe"), None);
        assert!(AdpType::Bani.is_anisotropic());
    }

    #[test]
    fn test_atom_site_builder() {
        let atom = AtomSite::new("Si1", "Si", [0.125, 0.125, 0.125])
            .with_adp(Displacement::Uiso(Parameter::new(0.02)));
        assert_eq!(atom.position(), [0.125, 0.125, 0.125]);
        assert_eq!(atom.occupancy.value, 1.0);
        assert_eq!(atom.adp.unwrap().adp_type(), AdpType::Uiso);
    }

    #[test]
    fn test_iso_atoms_single_loop() {
        let atoms = vec![AtomSite::new("Si", "Si", [0.0; 3]).with_adp(Displacement::Uiso(Parameter::new(0.02)))];
        let items = atoms.to_star();
        let lps = loops(&items);
        assert_eq!(lps.len(), 1);
        assert_eq!(lps[0].tags.last().map(String::as_str), Some("Uiso"));
        assert_eq!(lps[0].get(0, "adp_type").and_then(|d| d.as_str()), Some("Uiso"));
    }

    #[test]
    fn test_aniso_and_msp_loops() {
        let tensor = [Parameter::new(0.01); 6];
        let atoms = vec![
            AtomSite::new("Fe1", "Fe3+", [0.0; 3])
                .with_adp(Displacement::Uani(tensor))
                .with_msp(Susceptibility::Cani(tensor)),
            AtomSite::new("O1", "O", [0.5; 3]).with_adp(Displacement::Uani(tensor)),
        ];
        let items = atoms.to_star();
        let lps = loops(&items);
        assert_eq!(lps.len(), 3);
        assert_eq!(lps[1].tags[1], "U_11");
        assert_eq!(lps[1].nrows(), 2);
        assert_eq!(lps[2].nrows(), 1);
        assert!(lps[2].has_tag("chi_33"));
        assert!(!lps[2].has_tag("chi"));
    }

    #[test]
    fn test_defaulted_occupancy_not_written() {
        let mut atom = AtomSite::new("Na1", "Na", [0.0; 3]);
        atom.occupancy_defaulted = true;
        let items = vec![atom.clone()].to_star();
        assert!(!loops(&items)[0].has_tag("occupancy"));

        let items = vec![atom, AtomSite::new("Cl1", "Cl", [0.5; 3])].to_star();
        assert!(loops(&items)[0].has_tag("occupancy"));
    }

    #[test]
    fn test_empty_atom_list_produces_nothing() {
        assert!(Vec::<AtomSite>::new().to_star().is_empty());
    }
}
