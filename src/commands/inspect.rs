//! # inspect 命令实现
//!
//! 显示 CIF 文件中数据块的晶格、空间群、原子位点表与解析警告。
//!
//! ## 依赖关系
//! - 使用 `cli/inspect.rs` 定义的参数
//! - 使用 `qucif::parse_file`
//! - 使用 `utils/output.rs`

use crate::cli::inspect::InspectArgs;
use crate::utils::output;

use qucif::error::{CifError, Result};
use qucif::models::{AtomSite, Displacement, Susceptibility};
use qucif::CifDocument;

use tabled::{Table, Tabled};

/// 原子位点表格行
#[derive(Debug, Clone, Tabled)]
struct AtomRow {
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Specie")]
    specie: String,
    #[tabled(rename = "x")]
    x: String,
    #[tabled(rename = "y")]
    y: String,
    #[tabled(rename = "z")]
    z: String,
    #[tabled(rename = "Occ.")]
    occupancy: String,
    #[tabled(rename = "ADP")]
    adp: String,
    #[tabled(rename = "MSP")]
    msp: String,
}

impl From<&AtomSite> for AtomRow {
    fn from(atom: &AtomSite) -> Self {
        let adp = match &atom.adp {
            Some(Displacement::Uiso(p)) => format!("Uiso {}", p),
            Some(Displacement::Biso(p)) => format!("Biso {}", p),
            Some(Displacement::Uani(t)) => format!("Uani {} ...", t[0]),
            Some(Displacement::Bani(t)) => format!("Bani {} ...", t[0]),
            None => "-".to_string(),
        };
        let msp = match &atom.msp {
            Some(Susceptibility::Ciso(p)) => format!("Ciso {}", p),
            Some(Susceptibility::Cani(t)) => format!("Cani {} ...", t[0]),
            None => "-".to_string(),
        };
        let occupancy = if atom.occupancy_defaulted {
            format!("{}*", atom.occupancy)
        } else {
            atom.occupancy.to_string()
        };
        AtomRow {
            label: atom.label.clone(),
            specie: atom.specie.clone(),
            x: atom.fract_x.to_string(),
            y: atom.fract_y.to_string(),
            z: atom.fract_z.to_string(),
            occupancy,
            adp,
            msp,
        }
    }
}

/// 执行 inspect 命令
pub fn execute(args: InspectArgs) -> Result<()> {
    let doc = qucif::parse_file(&args.file)?;

    if doc.block_count() == 0 {
        output::print_warning(&format!("No data blocks in {}", args.file.display()));
        return Ok(());
    }

    if args.all {
        output::print_info(&format!(
            "{} data block(s) in {}",
            doc.block_count(),
            args.file.display()
        ));
        for index in 0..doc.block_count() {
            // 单个数据块失败不影响其他数据块
            if let Err(e) = show_block(&doc, index) {
                output::print_error(&format!("{}", e));
            }
        }
        return Ok(());
    }

    if args.block >= doc.block_count() {
        return Err(CifError::BlockIndex {
            index: args.block,
            count: doc.block_count(),
        });
    }
    show_block(&doc, args.block)
}

fn show_block(doc: &CifDocument, index: usize) -> Result<()> {
    let name = doc.block_names()[index].to_string();
    output::print_header(&format!("data_{}", name));

    match doc.lattice(index) {
        Some(lattice) => {
            println!(
                "  Cell     a = {}  b = {}  c = {}",
                lattice.a, lattice.b, lattice.c
            );
            println!(
                "           alpha = {}  beta = {}  gamma = {}",
                lattice.alpha, lattice.beta, lattice.gamma
            );
            println!("  Volume   {:.4} Å³", lattice.volume());
        }
        None => println!("  Cell     -"),
    }

    match doc.space_group(index) {
        Some(sg) => println!("  Group    {} (#{}, Hall '{}')", sg.full_symbol(), sg.number, sg.hall),
        None => println!("  Group    -"),
    }

    if doc.is_magnetic(index) {
        println!("  Magnetic yes");
    }

    let result = doc.phase(index).map(|phase| {
        println!("  Formula  {}", phase.formula());
        println!();
        let rows: Vec<AtomRow> = phase.atoms.iter().map(AtomRow::from).collect();
        if !rows.is_empty() {
            println!("{}", Table::new(&rows));
        }
    });

    output::print_warnings(None, doc.block_warnings(index));

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_row_marks_defaulted_occupancy() {
        let mut atom = AtomSite::new("Fe1", "Fe", [0.0, 0.5, 0.25]);
        atom.occupancy_defaulted = true;
        let row = AtomRow::from(&atom);
        assert_eq!(row.occupancy, "1*");
        assert_eq!(row.adp, "-");
        assert_eq!(row.z, "0.25");
    }

    #[test]
    fn test_atom_row_adp_summary() {
        let atom = AtomSite::new("O1", "O", [0.0, 0.0, 0.0])
            .with_adp(Displacement::Biso(qucif::models::Parameter::new(0.5)));
        assert_eq!(AtomRow::from(&atom).adp, "Biso 0.5");
    }
}
