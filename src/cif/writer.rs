//! # CIF 写出
//!
//! 模型对象 → 通用 STAR 条目 → 规范 CIF 标签 → 文本。
//!
//! ## 输出格式
//! ```text
//! data_<name>
//!
//! _cell_length_a   5.4307(2)
//! ...
//!
//! loop_
//! _atom_site_label
//! ...
//! ```
//! 数据块头之后先写全部单值条目，再写全部循环；各段之间空一行。
//! 相同输入的输出逐字节相同。
//!
//! ## 依赖关系
//! - 被 `cif/io.rs` 与命令行调用
//! - 使用 `cif/labels.rs`, `star/format.rs`, `models/`

use super::labels::{passthrough, EntityKind};
use crate::error::{CifError, Result};
use crate::models::Phase;
use crate::star::{format_datum, Datum, Loop, StarItem, ToStar};

use std::ops::{Bound, RangeBounds};
use std::path::Path;

/// 写出前的数据块名：空白替换为 `_`
fn block_header(name: &str) -> String {
    let name: String = name
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    if name.is_empty() {
        "data_unnamed".to_string()
    } else {
        format!("data_{}", name)
    }
}

fn rename_labels(labels: &[String]) -> Vec<String> {
    match EntityKind::classify(labels) {
        Some(kind) => labels.iter().map(|l| kind.rename(l)).collect(),
        None => labels.iter().map(|l| passthrough(l)).collect(),
    }
}

fn write_section(out: &mut String, entries: &[(String, Datum)]) {
    let keys: Vec<String> = entries.iter().map(|(k, _)| k.clone()).collect();
    let tags = rename_labels(&keys);
    let width = tags.iter().map(|t| t.len()).max().unwrap_or(0);
    for (tag, (_, datum)) in tags.iter().zip(entries) {
        out.push_str(&format!("{:<width$} {}\n", tag, format_datum(datum), width = width));
    }
}

fn write_loop(out: &mut String, lp: &Loop) {
    out.push_str("loop_\n");
    for tag in rename_labels(&lp.tags) {
        out.push_str(&tag);
        out.push('\n');
    }
    for row in &lp.rows {
        let values: Vec<String> = row.iter().map(format_datum).collect();
        out.push_str(&values.join(" "));
        out.push('\n');
    }
}

/// 渲染一个数据块
pub fn render(entities: &[&dyn ToStar], block_name: &str) -> String {
    let items: Vec<StarItem> = entities.iter().flat_map(|e| e.to_star()).collect();

    let mut out = block_header(block_name);
    out.push('\n');

    for item in &items {
        if let StarItem::Section(entries) = item {
            if entries.is_empty() {
                continue;
            }
            out.push('\n');
            write_section(&mut out, entries);
        }
    }
    for item in &items {
        if let StarItem::Loop(lp) = item {
            if lp.tags.is_empty() {
                continue;
            }
            out.push('\n');
            write_loop(&mut out, lp);
        }
    }
    out
}

/// 渲染单个物相
pub fn render_phase(phase: &Phase) -> String {
    render(&[phase as &dyn ToStar], &phase.name)
}

/// 渲染物相列表中的一段，数据块之间空一行
pub fn render_phases<R: RangeBounds<usize>>(phases: &[Phase], range: R) -> Result<String> {
    let bounds: (Bound<usize>, Bound<usize>) = (range.start_bound().cloned(), range.end_bound().cloned());
    let selected = phases.get(bounds).ok_or_else(|| {
        let index = match bounds.1 {
            Bound::Included(i) => i,
            Bound::Excluded(i) => i.saturating_sub(1),
            Bound::Unbounded => match bounds.0 {
                Bound::Included(i) => i,
                Bound::Excluded(i) => i + 1,
                Bound::Unbounded => 0,
            },
        };
        CifError::BlockIndex {
            index,
            count: phases.len(),
        }
    })?;
    Ok(selected.iter().map(render_phase).collect::<Vec<_>>().join("\n"))
}

/// 渲染并写入文件
pub fn write_file(path: impl AsRef<Path>, entities: &[&dyn ToStar], block_name: &str) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, render(entities, block_name)).map_err(|e| CifError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AtomSite, Displacement, Lattice, Parameter, SpaceGroup};

    fn si_phase() -> Phase {
        let mut phase = Phase::new("si");
        phase.lattice = Some(Lattice::cubic(Parameter::new(5.4307).with_error(0.0002)));
        phase.space_group = Some(SpaceGroup {
            symbol: "F d -3 m".to_string(),
            setting: Some("2".to_string()),
            number: 227,
            hall: "-F 4vw 2vw 3".to_string(),
        });
        phase.atoms =
            vec![AtomSite::new("Si", "Si", [0.125, 0.125, 0.125]).with_adp(Displacement::Uiso(Parameter::new(0.02)))];
        phase
    }

    #[test]
    fn test_render_layout() {
        let text = render_phase(&si_phase());
        let expected = "data_si

_cell_length_a    5.4307(2)
_cell_length_b    5.4307(2)
_cell_length_c    5.4307(2)
_cell_angle_alpha 90
_cell_angle_beta  90
_cell_angle_gamma 90

_space_group_name_H-M_alt              'F d -3 m'
_space_group_IT_coordinate_system_code 2
_space_group_IT_number                 227
_space_group_name_Hall                 '-F 4vw 2vw 3'

loop_
_atom_site_label
_atom_site_type_symbol
_atom_site_fract_x
_atom_site_fract_y
_atom_site_fract_z
_atom_site_occupancy
_atom_site_adp_type
_atom_site_U_iso_or_equiv
Si Si 0.125 0.125 0.125 1 Uiso 0.02
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_is_stable() {
        let phase = si_phase();
        assert_eq!(render_phase(&phase), render_phase(&phase));
    }

    #[test]
    fn test_unknown_items_pass_through() {
        struct Note;
        impl ToStar for Note {
            fn to_star(&self) -> Vec<StarItem> {
                vec![StarItem::Section(vec![(
                    "publ_section_title".to_string(),
                    Datum::text("A title"),
                )])]
            }
        }
        let text = render(&[&Note], "n");
        assert!(text.contains("_publ_section_title 'A title'"));
        assert!(text.starts_with("data_n\n"));
    }

    #[test]
    fn test_render_phases_slice() {
        let mut other = si_phase();
        other.name = "second phase".to_string();
        let phases = vec![si_phase(), other];

        let text = render_phases(&phases, ..).unwrap();
        assert!(text.contains("data_si\n"));
        assert!(text.contains("\ndata_second_phase\n"));

        let text = render_phases(&phases, 1..2).unwrap();
        assert!(!text.contains("data_si\n"));

        assert!(matches!(
            render_phases(&phases, 0..3),
            Err(CifError::BlockIndex { count: 2, .. })
        ));
    }
}
