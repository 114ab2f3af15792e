//! # export 命令实现
//!
//! 将一个数据块的原子位点写成 CSV，每个原子一行。
//! 标准不确定度写在 `_su` 列，缺失时留空。
//!
//! ## 依赖关系
//! - 使用 `cli/export.rs` 定义的参数
//! - 使用 `qucif::parse_file`
//! - 使用 `csv` + `serde` 写出

use crate::cli::export::ExportArgs;
use crate::utils::output;

use qucif::error::{CifError, Result};
use qucif::models::{AdpType, AtomSite, Displacement, Parameter, Susceptibility};

use serde::Serialize;
use std::path::Path;

/// CSV 记录
#[derive(Debug, Serialize, PartialEq)]
struct AtomRecord {
    label: String,
    specie: String,
    fract_x: f64,
    fract_x_su: Option<f64>,
    fract_y: f64,
    fract_y_su: Option<f64>,
    fract_z: f64,
    fract_z_su: Option<f64>,
    occupancy: f64,
    occupancy_defaulted: bool,
    adp_type: Option<AdpType>,
    adp_iso: Option<f64>,
    adp_11: Option<f64>,
    adp_12: Option<f64>,
    adp_13: Option<f64>,
    adp_22: Option<f64>,
    adp_23: Option<f64>,
    adp_33: Option<f64>,
    chi_type: Option<String>,
    chi_iso: Option<f64>,
    chi_11: Option<f64>,
    chi_12: Option<f64>,
    chi_13: Option<f64>,
    chi_22: Option<f64>,
    chi_23: Option<f64>,
    chi_33: Option<f64>,
}

fn tensor_values(tensor: Option<&[Parameter; 6]>) -> [Option<f64>; 6] {
    match tensor {
        Some(t) => (*t).map(|p| Some(p.value)),
        None => [None; 6],
    }
}

impl From<&AtomSite> for AtomRecord {
    fn from(atom: &AtomSite) -> Self {
        let (adp_iso, adp_tensor) = match &atom.adp {
            Some(Displacement::Uiso(p)) | Some(Displacement::Biso(p)) => (Some(p.value), None),
            Some(Displacement::Uani(t)) | Some(Displacement::Bani(t)) => (None, Some(t)),
            None => (None, None),
        };
        let (chi_iso, chi_tensor) = match &atom.msp {
            Some(Susceptibility::Ciso(p)) => (Some(p.value), None),
            Some(Susceptibility::Cani(t)) => (None, Some(t)),
            None => (None, None),
        };
        let [adp_11, adp_12, adp_13, adp_22, adp_23, adp_33] = tensor_values(adp_tensor);
        let [chi_11, chi_12, chi_13, chi_22, chi_23, chi_33] = tensor_values(chi_tensor);

        AtomRecord {
            label: atom.label.clone(),
            specie: atom.specie.clone(),
            fract_x: atom.fract_x.value,
            fract_x_su: atom.fract_x.error,
            fract_y: atom.fract_y.value,
            fract_y_su: atom.fract_y.error,
            fract_z: atom.fract_z.value,
            fract_z_su: atom.fract_z.error,
            occupancy: atom.occupancy.value,
            occupancy_defaulted: atom.occupancy_defaulted,
            adp_type: atom.adp.as_ref().map(Displacement::adp_type),
            adp_iso,
            adp_11,
            adp_12,
            adp_13,
            adp_22,
            adp_23,
            adp_33,
            chi_type: atom.msp.as_ref().map(|m| m.chi_type().to_string()),
            chi_iso,
            chi_11,
            chi_12,
            chi_13,
            chi_22,
            chi_23,
            chi_33,
        }
    }
}

/// 执行 export 命令
pub fn execute(args: ExportArgs) -> Result<()> {
    let doc = qucif::parse_file(&args.file)?;
    let atoms = doc.atoms(args.block)?;

    output::print_warnings(None, doc.block_warnings(args.block));

    write_csv(&atoms, &args.output, args.delimiter.as_byte())?;
    output::print_success(&format!(
        "Exported {} atom site(s) from block '{}' to '{}'",
        atoms.len(),
        doc.block_names()[args.block],
        args.output.display()
    ));

    Ok(())
}

fn write_csv(atoms: &[AtomSite], output_path: &Path, delimiter: u8) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(output_path)?;

    for atom in atoms {
        wtr.serialize(AtomRecord::from(atom))?;
    }

    wtr.flush().map_err(|e| CifError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_anisotropic_atom() {
        let tensor = [0.01, 0.0, 0.0, 0.02, 0.0, 0.03].map(Parameter::new);
        let atom = AtomSite::new("Fe1", "Fe", [0.0, 0.0, 0.3553]).with_adp(Displacement::Uani(tensor));
        let record = AtomRecord::from(&atom);
        assert_eq!(record.adp_type, Some(AdpType::Uani));
        assert_eq!(record.adp_iso, None);
        assert_eq!(record.adp_22, Some(0.02));
        assert_eq!(record.chi_type, None);
    }

    #[test]
    fn test_write_csv_file() {
        let dir = std::env::temp_dir().join(format!("qucif-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("atoms.csv");

        let atoms = vec![
            AtomSite::new("Si1", "Si", [0.125, 0.125, 0.125]).with_adp(Displacement::Uiso(Parameter::new(0.02))),
            AtomSite::new("O1", "O", [0.0, 0.5, 0.25]),
        ];
        write_csv(&atoms, &path, b',').unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("label,specie,fract_x,fract_x_su"));
        let si = lines.next().unwrap();
        assert!(si.starts_with("Si1,Si,0.125,,"));
        assert!(si.contains(",Uiso,0.02,"));
        assert!(lines.next().unwrap().starts_with("O1,O,0.0,,0.5"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
