//! # 数据块清洗
//!
//! 在语义提取之前修正常见的 CIF 不规范写法，每一项修正都追加一条警告。
//! [`sanitize`] 是纯函数：输入数据块不被修改，返回新的数据块与警告列表。
//!
//! ## 修正规则（按执行顺序）
//! 1. 无序位点拆分：`type_symbol` 为 `0.8Nb + 0.2Zr` 而标签不含 `+` 时，
//!    每一段拆成独立的行，标签改为 `<元素>_fix`
//! 2. 缺省占有率：有 `type_symbol` 但无占有率列时补一列 1.0（不警告）
//! 3. 分数坐标取整：与 1/3、2/3 的相对偏差不超过 1e-4 的坐标替换为精确值
//! 4. 隐式氢：`attached_hydrogens` 列有非零值时警告
//!
//! ## 占有率数字约定
//! 段首数字按 `^\s*(\d+(?:\.\d*)?|\.\d+)` 匹配；数值大于 1 时按 `0.<数字>` 解释
//! （`8Nb` → 0.8，`15Nb` → 0.15）；没有数字时占有率为 0 并额外警告。
//! 括号中的不确定度（`0.8(1)Nb`）先被去掉。
//!
//! ## 依赖关系
//! - 被 `cif/parser.rs` 调用
//! - 使用 `cif/tags.rs`, `star/dom.rs`
//! - 使用 regex 匹配占有率数字

use super::tags::{self, LoopKind};
use crate::star::{normalize_tag, Block, Datum, Loop};

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// 分数坐标取整容差，相对于目标值 1/3 或 2/3
pub const FRACTION_TOLERANCE: f64 = 1e-4;

const THIRDS: [f64; 2] = [1.0 / 3.0, 2.0 / 3.0];

static SEGMENT_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\+\s+").expect("valid segment regex"));
static LEADING_NUMERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+(?:\.\d*)?|\.\d+)").expect("valid numeral regex"));
static UNCERTAINTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\d*\)").expect("valid uncertainty regex"));

/// 清洗数据块
pub fn sanitize(block: &Block) -> (Block, Vec<String>) {
    let mut warnings = Vec::new();
    let mut loops = Vec::with_capacity(block.loops.len());

    for lp in &block.loops {
        if LoopKind::classify(lp) != LoopKind::CoreAtomFields {
            loops.push(lp.clone());
            continue;
        }
        let lp = split_disordered(lp, &mut warnings);
        let lp = default_occupancy(lp);
        let lp = snap_fractions(lp, &mut warnings);
        check_implicit_hydrogens(&lp, &block.name, &mut warnings);
        loops.push(lp);
    }

    let sanitized = Block {
        name: block.name.clone(),
        entries: block.entries.clone(),
        loops,
    };
    (sanitized, warnings)
}

// ─────────────────────────────────────────────────────────────
// 无序位点拆分
// ─────────────────────────────────────────────────────────────

/// 一段 `0.8Nb` 拆出的元素与占有率
#[derive(Debug, Clone, PartialEq)]
pub struct DisorderSegment {
    pub symbol: String,
    pub occupancy: Option<f64>,
}

/// 解析 `0.8(1)Nb` 形式的一段
pub fn parse_segment(segment: &str) -> DisorderSegment {
    let cleaned = UNCERTAINTY.replace_all(segment, "");
    let cleaned = cleaned.trim();
    match LEADING_NUMERAL.captures(cleaned) {
        Some(caps) => {
            let whole = caps.get(0).map_or(0, |m| m.end());
            let digits = caps.get(1).map_or("", |m| m.as_str());
            DisorderSegment {
                symbol: cleaned[whole..].trim().to_string(),
                occupancy: numeral_occupancy(digits),
            }
        }
        None => DisorderSegment {
            symbol: cleaned.to_string(),
            occupancy: None,
        },
    }
}

/// 数字 → 占有率；大于 1 时把全部数字放到小数点之后
fn numeral_occupancy(digits: &str) -> Option<f64> {
    let value: f64 = digits.parse().ok()?;
    if value <= 1.0 {
        return Some(value);
    }
    let packed: String = digits.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("0.{}", packed).parse().ok()
}

fn unique_label(base: &str, taken: &mut HashSet<String>) -> String {
    let mut label = base.to_string();
    let mut n = 2;
    while taken.contains(&label) {
        label = format!("{}{}", base, n);
        n += 1;
    }
    taken.insert(label.clone());
    label
}

fn split_disordered(lp: &Loop, warnings: &mut Vec<String>) -> Loop {
    let (Some(label_col), Some(symbol_col)) = (lp.column_index(tags::LABEL), lp.column_index(tags::TYPE_SYMBOL))
    else {
        return lp.clone();
    };

    let is_merged = |row: &Vec<Datum>| {
        let label = row[label_col].as_str().unwrap_or("");
        let symbol = row[symbol_col].as_str().unwrap_or("");
        SEGMENT_SEPARATOR.is_match(symbol) && !label.contains('+')
    };
    if !lp.rows.iter().any(|row| is_merged(row)) {
        return lp.clone();
    }

    let mut out = lp.clone();
    let occ_col = match lp.column_index(tags::OCCUPANCY) {
        Some(col) => col,
        None => {
            out.tags.push(format!("_{}", tags::OCCUPANCY));
            for row in &mut out.rows {
                row.push(Datum::numeric(1.0, None, None));
            }
            out.tags.len() - 1
        }
    };

    let mut taken: HashSet<String> = out
        .rows
        .iter()
        .filter(|row| !is_merged(row))
        .filter_map(|row| row[label_col].as_str().map(str::to_string))
        .collect();

    // 拆出的新行追加在末尾
    let mut rows = Vec::with_capacity(out.rows.len());
    let mut split_rows = Vec::new();
    for row in out.rows {
        if !is_merged(&row) {
            rows.push(row);
            continue;
        }
        let merged = row[symbol_col].as_str().unwrap_or("").to_string();
        for segment in SEGMENT_SEPARATOR.split(&merged) {
            let parsed = parse_segment(segment);
            let occupancy = parsed.occupancy.unwrap_or_else(|| {
                warnings.push(format!(
                    "Disordered site '{}': no occupancy in segment '{}', using 0",
                    merged,
                    segment.trim()
                ));
                0.0
            });
            let mut new_row = row.clone();
            new_row[label_col] = Datum::text(unique_label(&format!("{}_fix", parsed.symbol), &mut taken));
            new_row[symbol_col] = Datum::text(&parsed.symbol);
            new_row[occ_col] = Datum::numeric(occupancy, None, None);
            split_rows.push(new_row);
        }
    }
    rows.extend(split_rows);
    out.rows = rows;

    warnings.push("Split disordered sites with merged type symbols into separate '_fix' sites".to_string());
    out
}

// ─────────────────────────────────────────────────────────────
// 缺省占有率
// ─────────────────────────────────────────────────────────────

fn default_occupancy(mut lp: Loop) -> Loop {
    if !lp.has_tag(tags::TYPE_SYMBOL) || lp.has_tag(tags::OCCUPANCY) {
        return lp;
    }
    lp.tags.push(format!("_{}", tags::OCCUPANCY));
    for row in &mut lp.rows {
        row.push(Datum::numeric(1.0, None, None));
    }
    lp.synthesized.push(normalize_tag(tags::OCCUPANCY));
    lp
}

// ─────────────────────────────────────────────────────────────
// 分数坐标取整
// ─────────────────────────────────────────────────────────────

/// 与 ±1/3、±2/3 的相对偏差不超过容差但不精确的坐标返回精确值
///
/// 四位小数的 `0.3333` 恰好落在边界上，比较时留出浮点舍入的余量。
pub fn snap_third(value: f64) -> Option<f64> {
    THIRDS.iter().find_map(|&t| {
        let diff = (value.abs() - t).abs();
        (diff > 0.0 && diff <= FRACTION_TOLERANCE * t + f64::EPSILON).then(|| t.copysign(value))
    })
}

fn snap_fractions(mut lp: Loop, warnings: &mut Vec<String>) -> Loop {
    let cols: Vec<usize> = tags::FRACT_FIELDS.iter().filter_map(|t| lp.column_index(t)).collect();
    let mut snapped = 0;
    for row in &mut lp.rows {
        for &col in &cols {
            let Some(exact) = row[col].number.and_then(snap_third) else {
                continue;
            };
            let (error, fixed) = (row[col].error, row[col].fixed);
            row[col] = Datum::numeric(exact, error, fixed);
            snapped += 1;
        }
    }
    if snapped > 0 {
        warnings.push(format!(
            "Snapped {} fractional coordinate(s) to exact 1/3 or 2/3",
            snapped
        ));
    }
    lp
}

// ─────────────────────────────────────────────────────────────
// 隐式氢
// ─────────────────────────────────────────────────────────────

fn check_implicit_hydrogens(lp: &Loop, block: &str, warnings: &mut Vec<String>) {
    let Some(col) = lp.column_index(tags::ATTACHED_HYDROGENS) else {
        return;
    };
    let implicit = lp
        .rows
        .iter()
        .any(|row| row[col].number.is_some_and(|n| n != 0.0));
    if implicit {
        warnings.push(format!(
            "Block '{}' has implicit hydrogens (atom_site_attached_hydrogens) not represented as sites",
            block
        ));
    }
}
