//! # STAR 文档对象模型
//!
//! CIF/STAR 文件的无类型表示：数据块、单值条目与循环表。
//! 每个值同时保留原始文本与数值解释（数值、标准不确定度、固定标志）。
//!
//! ## 标签匹配
//! 标签比较忽略大小写与分隔符：`_atom_site.fract_x`、`_atom_site_fract_x`
//! 与 `_ATOM_SITE_FRACT_X` 视为同一标签，见 [`normalize_tag`]。
//!
//! ## 依赖关系
//! - 被 `star/parse.rs`, `star/format.rs` 和 `cif/` 使用
//! - 无外部模块依赖

/// 由多个数据块组成的 STAR 文档
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// 一个 `data_NAME` 数据块
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub name: String,
    /// 单值条目，保持文件中的顺序
    pub entries: Vec<(String, Datum)>,
    pub loops: Vec<Loop>,
}

/// 循环表：共享同一组标签的多行数据
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Loop {
    pub tags: Vec<String>,
    pub rows: Vec<Vec<Datum>>,
    /// 由清洗步骤补全（非用户提供）的列，存放规范化后的标签
    pub synthesized: Vec<String>,
}

/// 原始值
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 字符串值（无引号、单/双引号或分号文本块）
    Str(String),
    /// 不适用标记 `.`
    Inapplicable,
    /// 未知标记 `?`
    Unknown,
}

/// 带数值解释的值
#[derive(Debug, Clone, PartialEq)]
pub struct Datum {
    pub value: Value,
    /// 数值（若文本可解析为 CIF 数字）
    pub number: Option<f64>,
    /// 标准不确定度，如 `5.4307(2)` 中的 0.0002
    pub error: Option<f64>,
    /// `Some(false)` 表示可精修参数（带括号），`None` 表示未声明
    pub fixed: Option<bool>,
}

/// 规范化标签：去掉前导 `_`，小写，`.` 变为 `_`，去掉尾部 `_`
pub fn normalize_tag(tag: &str) -> String {
    tag.trim()
        .trim_start_matches('_')
        .to_ascii_lowercase()
        .replace('.', "_")
        .trim_end_matches('_')
        .to_string()
}

impl Value {
    /// 字符串内容，`.` / `?` 返回 `None`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Value::Str(_))
    }
}

impl Datum {
    /// 从原始值构造，并尝试数值解释
    pub fn from_value(value: Value) -> Self {
        let parsed = value.as_str().and_then(parse_number);
        match parsed {
            Some((number, error, fixed)) => Datum {
                value,
                number: Some(number),
                error,
                fixed,
            },
            None => Datum {
                value,
                number: None,
                error: None,
                fixed: None,
            },
        }
    }

    /// 纯文本值（不做数值解释）
    pub fn text(s: impl Into<String>) -> Self {
        Datum {
            value: Value::Str(s.into()),
            number: None,
            error: None,
            fixed: None,
        }
    }

    /// 数值
    pub fn numeric(number: f64, error: Option<f64>, fixed: Option<bool>) -> Self {
        Datum {
            value: Value::Str(number.to_string()),
            number: Some(number),
            error,
            fixed,
        }
    }

    pub fn unknown() -> Self {
        Datum::from_value(Value::Unknown)
    }

    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.number
    }

    pub fn is_present(&self) -> bool {
        self.value.is_present()
    }
}

/// 解析 CIF 数字：`1.5`, `-0.25`, `5.4307(2)`, `1.5()`, `1.2e-3(4)`
///
/// 返回 (数值, 不确定度, 固定标志)。非数字文本返回 `None`。
pub(crate) fn parse_number(s: &str) -> Option<(f64, Option<f64>, Option<bool>)> {
    let s = s.trim();
    let (body, su) = match s.find('(') {
        Some(open) => {
            let rest = &s[open + 1..];
            let close = rest.find(')')?;
            if close + 1 != rest.len() {
                return None;
            }
            (&s[..open], Some(&rest[..close]))
        }
        None => (s, None),
    };

    // f64::from_str 也接受 "nan"/"inf"，这里只允许数字字符
    if body.is_empty()
        || !body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        || !body.chars().any(|c| c.is_ascii_digit())
    {
        return None;
    }
    let value: f64 = body.parse().ok()?;

    match su {
        None => Some((value, None, None)),
        Some("") => Some((value, None, Some(false))),
        Some(digits) => {
            if !digits.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            let su: f64 = digits.parse().ok()?;
            let (mantissa, exponent) = match body.find(['e', 'E']) {
                Some(idx) => (&body[..idx], body[idx + 1..].parse::<i32>().ok()?),
                None => (body, 0),
            };
            let decimals = mantissa
                .find('.')
                .map(|dot| mantissa.len() - dot - 1)
                .unwrap_or(0) as i32;
            let error = su / 10f64.powi(decimals - exponent);
            Some((value, Some(error), Some(false)))
        }
    }
}

impl Loop {
    pub fn new(tags: Vec<String>) -> Self {
        Loop {
            tags,
            rows: Vec::new(),
            synthesized: Vec::new(),
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// 列索引（忽略大小写与分隔符）
    pub fn column_index(&self, tag: &str) -> Option<usize> {
        let key = normalize_tag(tag);
        self.tags.iter().position(|t| normalize_tag(t) == key)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.column_index(tag).is_some()
    }

    /// 是否包含全部给定标签
    pub fn has_all(&self, tags: &[&str]) -> bool {
        tags.iter().all(|t| self.has_tag(t))
    }

    /// 获取 (行, 标签) 处的值
    pub fn get(&self, row: usize, tag: &str) -> Option<&Datum> {
        let col = self.column_index(tag)?;
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// 规范化后的标签集合
    pub fn normalized_tags(&self) -> Vec<String> {
        self.tags.iter().map(|t| normalize_tag(t)).collect()
    }

    pub fn is_synthesized(&self, tag: &str) -> bool {
        let key = normalize_tag(tag);
        self.synthesized.iter().any(|t| *t == key)
    }
}

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Block {
            name: name.into(),
            entries: Vec::new(),
            loops: Vec::new(),
        }
    }

    /// 按标签获取单值条目
    pub fn get(&self, tag: &str) -> Option<&Datum> {
        let key = normalize_tag(tag);
        self.entries
            .iter()
            .find(|(k, _)| normalize_tag(k) == key)
            .map(|(_, v)| v)
    }

    /// 查找包含给定标签的第一个循环
    pub fn find_loop(&self, tag: &str) -> Option<&Loop> {
        self.loops.iter().find(|lp| lp.has_tag(tag))
    }

    /// 查找包含全部给定标签的第一个循环
    pub fn find_loop_with_all(&self, tags: &[&str]) -> Option<&Loop> {
        self.loops.iter().find(|lp| lp.has_all(tags))
    }

    /// 标签是否出现在单值条目或任意循环中
    pub fn has_tag(&self, tag: &str) -> bool {
        self.get(tag).is_some() || self.find_loop(tag).is_some()
    }
}

/// 通用 STAR 条目：模型对象转换为 CIF 之前的中间形式
#[derive(Debug, Clone, PartialEq)]
pub enum StarItem {
    /// 一组单值条目（一个对象的若干字段）
    Section(Vec<(String, Datum)>),
    /// 循环表
    Loop(Loop),
}

/// 模型对象转换为通用 STAR 条目的能力
///
/// 产生的标签是通用标签（如 `length_a`），由 CIF 写出器重命名为规范 CIF 标签。
pub trait ToStar {
    fn to_star(&self) -> Vec<StarItem>;
}

impl<T: ToStar + ?Sized> ToStar for &T {
    fn to_star(&self) -> Vec<StarItem> {
        (**self).to_star()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tag_variants() {
        assert_eq!(normalize_tag("_atom_site.fract_x"), "atom_site_fract_x");
        assert_eq!(normalize_tag("_ATOM_SITE_FRACT_X"), "atom_site_fract_x");
        assert_eq!(
            normalize_tag("_symmetry_space_group_name_H-M_"),
            "symmetry_space_group_name_h-m"
        );
    }

    #[test]
    fn test_parse_number_forms() {
        assert_eq!(parse_number("1.5"), Some((1.5, None, None)));
        assert_eq!(parse_number("1.5()"), Some((1.5, None, Some(false))));

        let (v, e, f) = parse_number("5.4307(2)").unwrap();
        assert!((v - 5.4307).abs() < 1e-12);
        assert!((e.unwrap() - 0.0002).abs() < 1e-12);
        assert_eq!(f, Some(false));

        let (_, e, _) = parse_number("123(25)").unwrap();
        assert!((e.unwrap() - 25.0).abs() < 1e-12);

        let (v, e, _) = parse_number("1.2e-3(4)").unwrap();
        assert!((v - 1.2e-3).abs() < 1e-15);
        assert!((e.unwrap() - 4e-4).abs() < 1e-12);
    }

    #[test]
    fn test_parse_number_rejects_text() {
        assert_eq!(parse_number("Si"), None);
        assert_eq!(parse_number("nan"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("1.5(x)"), None);
        assert_eq!(parse_number("-"), None);
    }

    #[test]
    fn test_loop_lookup_is_separator_insensitive() {
        let mut lp = Loop::new(vec!["_atom_site.label".into(), "_atom_site.fract_x".into()]);
        lp.rows.push(vec![Datum::text("Si1"), Datum::numeric(0.125, None, None)]);

        assert_eq!(lp.column_index("_atom_site_fract_x"), Some(1));
        assert_eq!(lp.get(0, "_ATOM_SITE_LABEL").and_then(|d| d.as_str()), Some("Si1"));
        assert!(lp.has_all(&["atom_site_label", "atom_site_fract_x"]));
    }

    #[test]
    fn test_block_entry_lookup() {
        let mut block = Block::new("test");
        block
            .entries
            .push(("_cell.length_a".into(), Datum::from_value(Value::Str("5.43".into()))));
        assert_eq!(block.get("_cell_length_a").and_then(|d| d.as_f64()), Some(5.43));
        assert!(block.has_tag("cell_length_a"));
        assert!(!block.has_tag("cell_length_b"));
    }
}
