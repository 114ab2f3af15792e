//! # 空间群数据模型
//!
//! 解析后的规范空间群：带空格的 Hermann-Mauguin 符号 + 可选坐标系设定。
//!
//! ## 依赖关系
//! - 由 `symmetry/registry.rs` 构造
//! - 被 `cif/writer.rs` 写出

use crate::star::{Datum, StarItem, ToStar};

use serde::Serialize;
use std::fmt;

/// 空间群条目的通用标签
pub const SPACE_GROUP_FIELDS: [&str; 4] = ["name_hm", "setting", "number", "name_hall"];

/// 规范空间群
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpaceGroup {
    /// 规范 H-M 符号，如 `F d -3 m`
    pub symbol: String,
    /// IT 坐标系代码，如 `2`、`H`、`b1`
    pub setting: Option<String>,
    /// 国际表编号 1..=230
    pub number: u16,
    /// Hall 符号
    pub hall: String,
}

impl SpaceGroup {
    /// 带设定后缀的符号，如 `F d -3 m:2`
    pub fn full_symbol(&self) -> String {
        match &self.setting {
            Some(s) => format!("{}:{}", self.symbol, s),
            None => self.symbol.clone(),
        }
    }
}

impl fmt::Display for SpaceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (No. {})", self.full_symbol(), self.number)
    }
}

impl ToStar for SpaceGroup {
    fn to_star(&self) -> Vec<StarItem> {
        let mut entries = vec![(SPACE_GROUP_FIELDS[0].to_string(), Datum::text(&self.symbol))];
        if let Some(setting) = &self.setting {
            entries.push((SPACE_GROUP_FIELDS[1].to_string(), Datum::text(setting)));
        }
        entries.push((
            SPACE_GROUP_FIELDS[2].to_string(),
            Datum::numeric(f64::from(self.number), None, None),
        ));
        entries.push((SPACE_GROUP_FIELDS[3].to_string(), Datum::text(&self.hall)));
        vec![StarItem::Section(entries)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fd3m() -> SpaceGroup {
        SpaceGroup {
            symbol: "F d -3 m".to_string(),
            setting: Some("2".to_string()),
            number: 227,
            hall: "-F 4vw 2vw 3".to_string(),
        }
    }

    #[test]
    fn test_full_symbol_and_display() {
        let sg = fd3m();
        assert_eq!(sg.full_symbol(), "F d -3 m:2");
        assert_eq!(sg.to_string(), "F d -3 m:2 (No. 227)");
    }

    #[test]
    fn test_to_star_skips_missing_setting() {
        let mut sg = fd3m();
        sg.setting = None;
        match &sg.to_star()[0] {
            StarItem::Section(entries) => {
                assert_eq!(entries.len(), 3);
                assert_eq!(entries[1].1.number, Some(227.0));
            }
            other => panic!("unexpected item {:?}", other),
        }
    }
}
