//! # 空间群符号注册表
//!
//! 把各种写法的空间群符号解析为规范的 [`SpaceGroup`]。
//!
//! ## 支持的写法
//! - 短 H-M 符号: `Fd-3m`, `P21/c`, `P2_1/c`
//! - 格式化 H-M 符号: `F d -3 m`, `P 1 21/c 1`
//! - 带设定后缀: `Fd-3m:1`, `R -3 m:H`
//! - Hall 符号: `-F 4vw 2vw 3`
//! - 完整 H-M 符号: `F 41/d -3 2/m`
//! - 国际表编号: 1..=230
//!
//! H-M 比较忽略空白、下划线与大小写；Hall 比较只忽略多余空白。
//!
//! ## 依赖关系
//! - 使用 `symmetry/table.rs` 的静态数据
//! - 被 `cif/space_group.rs` 调用

use super::table::{FULL_SYMBOLS, SPACE_GROUPS};
use crate::models::SpaceGroup;

use std::sync::LazyLock;

/// 注册表中的一个空间群设定
#[derive(Debug, Clone)]
pub struct SpaceGroupEntry {
    pub number: u16,
    /// IT 坐标系代码，空串表示唯一设定
    pub setting: &'static str,
    /// 格式化 H-M 符号
    pub hermann_mauguin_fmt: &'static str,
    /// 短 H-M 符号
    pub hermann_mauguin: &'static str,
    pub hall: &'static str,
    hm_key: String,
    fmt_key: String,
    hall_key: String,
}

impl SpaceGroupEntry {
    fn from_row(row: &(u16, &'static str, &'static str, &'static str, &'static str)) -> Self {
        let (number, setting, fmt, short, hall) = *row;
        SpaceGroupEntry {
            number,
            setting,
            hermann_mauguin_fmt: fmt,
            hermann_mauguin: short,
            hall,
            hm_key: compact_hm(short),
            fmt_key: compact_hm(fmt),
            hall_key: compact_hall(hall),
        }
    }

    /// 带设定的统一符号，如 `F d -3 m:2`
    pub fn universal_h_m(&self) -> String {
        if self.setting.is_empty() {
            self.hermann_mauguin_fmt.to_string()
        } else {
            format!("{}:{}", self.hermann_mauguin_fmt, self.setting)
        }
    }

    pub fn to_space_group(&self) -> SpaceGroup {
        SpaceGroup {
            symbol: self.hermann_mauguin_fmt.to_string(),
            setting: (!self.setting.is_empty()).then(|| self.setting.to_string()),
            number: self.number,
            hall: self.hall.to_string(),
        }
    }

    fn matches_hm(&self, key: &str) -> bool {
        self.hm_key == key || self.fmt_key == key
    }

    fn matches_setting(&self, setting: &str) -> bool {
        self.setting.eq_ignore_ascii_case(setting)
    }
}

/// 空间群符号注册表（进程内只构建一次）
#[derive(Debug)]
pub struct SymbolRegistry {
    entries: Vec<SpaceGroupEntry>,
    /// (压缩后的完整符号, 短符号)
    full_symbols: Vec<(String, &'static str)>,
}

static REGISTRY: LazyLock<SymbolRegistry> = LazyLock::new(SymbolRegistry::build);

/// H-M 比较键：去掉空白和下划线，小写
fn compact_hm(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Hall 比较键：合并连续空白（Hall 符号中空格有意义，`P 32` 与 `P 3 2` 不同）
fn compact_hall(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 拆分 `符号:设定`
pub fn split_setting(raw: &str) -> (&str, Option<String>) {
    match raw.split_once(':') {
        Some((symbol, setting)) => {
            let setting = normalize_setting(setting);
            (symbol.trim(), (!setting.is_empty()).then_some(setting))
        }
        None => (raw.trim(), None),
    }
}

/// 规范化设定代码：`2.0` → `2`，其余原样（去空白）
pub fn normalize_setting(s: &str) -> String {
    let s = s.trim();
    match s.parse::<f64>() {
        Ok(v) if v.fract() == 0.0 && v.is_finite() => format!("{}", v as i64),
        _ => s.to_string(),
    }
}

impl SymbolRegistry {
    fn build() -> Self {
        let entries = SPACE_GROUPS.iter().map(SpaceGroupEntry::from_row).collect();
        let full_symbols = FULL_SYMBOLS
            .iter()
            .map(|(short, full)| (compact_hm(full), *short))
            .collect();
        SymbolRegistry {
            entries,
            full_symbols,
        }
    }

    /// 全局注册表
    pub fn global() -> &'static SymbolRegistry {
        &REGISTRY
    }

    pub fn entries(&self) -> &[SpaceGroupEntry] {
        &self.entries
    }

    /// 某编号的全部设定，缺省设定在前
    pub fn entries_for_number(&self, number: u16) -> Vec<&SpaceGroupEntry> {
        self.entries.iter().filter(|e| e.number == number).collect()
    }

    /// 在候选中按设定选择；设定缺失或不匹配时取第一个（缺省设定）
    fn pick<'a>(candidates: Vec<&'a SpaceGroupEntry>, setting: Option<&str>) -> Option<&'a SpaceGroupEntry> {
        if let Some(s) = setting {
            if let Some(e) = candidates.iter().copied().find(|e| e.matches_setting(s)) {
                return Some(e);
            }
        }
        candidates.first().copied()
    }

    /// 按 H-M 符号查找（短或格式化写法）
    pub fn find_hermann_mauguin(&self, symbol: &str, setting: Option<&str>) -> Option<&SpaceGroupEntry> {
        let key = compact_hm(symbol);
        if key.is_empty() {
            return None;
        }
        let candidates: Vec<_> = self.entries.iter().filter(|e| e.matches_hm(&key)).collect();
        Self::pick(candidates, setting)
    }

    /// 按 Hall 符号查找
    pub fn find_hall(&self, hall: &str) -> Option<&SpaceGroupEntry> {
        let key = compact_hall(hall);
        if key.is_empty() {
            return None;
        }
        self.entries.iter().find(|e| e.hall_key == key)
    }

    /// 按完整 H-M 符号查找
    pub fn find_full(&self, symbol: &str, setting: Option<&str>) -> Option<&SpaceGroupEntry> {
        let key = compact_hm(symbol);
        let short = self
            .full_symbols
            .iter()
            .find(|(full, _)| *full == key)
            .map(|(_, short)| *short)?;
        self.find_hermann_mauguin(short, setting)
    }

    /// 解析任意写法的符号：H-M → Hall → 完整 H-M
    pub fn resolve(&self, raw: &str) -> Option<SpaceGroup> {
        self.resolve_with_setting(raw, None)
    }

    /// 解析符号；符号内的 `:设定` 后缀优先于 `setting` 参数
    pub fn resolve_with_setting(&self, raw: &str, setting: Option<&str>) -> Option<SpaceGroup> {
        let (symbol, suffix) = split_setting(raw);
        let setting = suffix.as_deref().or(setting);
        self.find_hermann_mauguin(symbol, setting)
            .or_else(|| self.find_hall(raw))
            .or_else(|| self.find_full(symbol, setting))
            .map(SpaceGroupEntry::to_space_group)
    }

    /// 解析 Hall 字段：Hall 优先，再退回 H-M 写法
    pub fn resolve_hall(&self, raw: &str) -> Option<SpaceGroup> {
        match self.find_hall(raw) {
            Some(entry) => Some(entry.to_space_group()),
            None => self.resolve(raw),
        }
    }

    /// 按国际表编号解析
    pub fn from_int_number(&self, number: i64, setting: Option<&str>) -> Option<SpaceGroup> {
        let number = u16::try_from(number).ok()?;
        Self::pick(self.entries_for_number(number), setting).map(SpaceGroupEntry::to_space_group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn registry() -> &'static SymbolRegistry {
        SymbolRegistry::global()
    }

    #[test]
    fn test_table_covers_all_numbers() {
        let numbers: HashSet<u16> = registry().entries().iter().map(|e| e.number).collect();
        assert_eq!(numbers.len(), 230);
        assert!((1..=230).all(|n| numbers.contains(&n)));
    }

    #[test]
    fn test_hall_symbols_unique() {
        let mut seen = HashSet::new();
        for e in registry().entries() {
            assert!(seen.insert(e.hall), "duplicate Hall symbol {}", e.hall);
        }
    }

    #[test]
    fn test_universal_symbols_unique() {
        let mut seen = HashSet::new();
        for e in registry().entries() {
            assert!(seen.insert(e.universal_h_m()), "duplicate symbol {}", e.universal_h_m());
        }
    }

    #[test]
    fn test_separator_invariance() {
        let forms = ["Fd-3m", "F d -3 m", "  F d-3m ", "fd-3m"];
        for form in forms {
            let sg = registry().resolve(form).unwrap();
            assert_eq!(sg.symbol, "F d -3 m", "form {:?}", form);
            assert_eq!(sg.number, 227);
        }
        assert_eq!(registry().resolve("P2_1/c").unwrap().number, 14);
    }

    #[test]
    fn test_setting_suffix() {
        let sg = registry().resolve("Fd-3m:2").unwrap();
        assert_eq!(sg.symbol, "F d -3 m");
        assert_eq!(sg.setting.as_deref(), Some("2"));

        let sg = registry().resolve("Fd-3m:1").unwrap();
        assert_eq!(sg.setting.as_deref(), Some("1"));
        assert_eq!(sg.hall, "F 4d 2 3 -1d");

        let sg = registry().resolve("R -3 m:R").unwrap();
        assert_eq!(sg.hall, "-P 3* 2");
    }

    #[test]
    fn test_default_setting_without_suffix() {
        assert_eq!(registry().resolve("Fd-3m").unwrap().setting.as_deref(), Some("2"));
        assert_eq!(registry().resolve("R-3m").unwrap().setting.as_deref(), Some("H"));
        assert_eq!(registry().resolve("Pm-3m").unwrap().setting, None);
    }

    #[test]
    fn test_explicit_setting_argument() {
        let sg = registry().resolve_with_setting("Fd-3m", Some("1")).unwrap();
        assert_eq!(sg.setting.as_deref(), Some("1"));
        let sg = registry().resolve_with_setting("Fd-3m:2", Some("1")).unwrap();
        assert_eq!(sg.setting.as_deref(), Some("2"));
    }

    #[test]
    fn test_monoclinic_cell_choices() {
        let sg = registry().resolve("P 1 21/n 1").unwrap();
        assert_eq!(sg.number, 14);
        assert_eq!(sg.setting.as_deref(), Some("b2"));
        assert_eq!(registry().resolve("P21/c").unwrap().setting.as_deref(), Some("b1"));
    }

    #[test]
    fn test_hall_lookup() {
        let sg = registry().resolve_hall("-F 4vw 2vw 3").unwrap();
        assert_eq!(sg.number, 227);
        assert_eq!(sg.setting.as_deref(), Some("2"));

        // "P32" 同时是 #145 的 H-M 写法，Hall 字段必须先按 Hall 解析
        assert_eq!(registry().resolve_hall("P 3 2").unwrap().number, 149);
        assert_eq!(registry().resolve("P 3 2").unwrap().number, 145);
    }

    #[test]
    fn test_full_symbol_lookup() {
        let sg = registry().resolve("F 41/d -3 2/m").unwrap();
        assert_eq!(sg.number, 227);
        assert_eq!(sg.symbol, "F d -3 m");
        assert_eq!(registry().resolve("P 21/n 21/m 21/a").unwrap().number, 62);
    }

    #[test]
    fn test_number_lookup() {
        let sg = registry().from_int_number(227, None).unwrap();
        assert_eq!(sg.symbol, "F d -3 m");
        assert_eq!(sg.setting.as_deref(), Some("2"));
        assert_eq!(registry().from_int_number(166, Some("R")).unwrap().setting.as_deref(), Some("R"));
        assert!(registry().from_int_number(0, None).is_none());
        assert!(registry().from_int_number(231, None).is_none());
        assert!(registry().from_int_number(-5, None).is_none());
    }

    #[test]
    fn test_malformed_input() {
        assert!(registry().resolve("").is_none());
        assert!(registry().resolve("not a group").is_none());
        assert!(registry().resolve("Xq-9z").is_none());
        assert!(registry().resolve(":2").is_none());
    }

    #[test]
    fn test_normalize_setting() {
        assert_eq!(normalize_setting("2.0"), "2");
        assert_eq!(normalize_setting(" H "), "H");
        assert_eq!(split_setting("Fd-3m: 1"), ("Fd-3m", Some("1".to_string())));
        assert_eq!(split_setting("Fd-3m:"), ("Fd-3m", None));
    }
}
