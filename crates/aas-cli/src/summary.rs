//! Operator-facing summary of an import operation.

use std::fmt::Write as _;
use std::path::PathBuf;

use aas_import::UnknownReference;

use crate::cli::ImportModeArg;

#[derive(Debug)]
pub struct ImportReport {
    pub catalog: String,
    pub mode: ImportModeArg,
    pub selected: usize,
    pub imported: usize,
    pub unresolved: Vec<UnknownReference>,
    pub output: Option<PathBuf>,
}

impl ImportReport {
    pub fn succeeded(&self) -> bool {
        self.imported > 0
    }
}

pub fn render_report(report: &ImportReport) -> String {
    let mut out = String::new();
    let mode = match report.mode {
        ImportModeArg::Submodels => "submodels",
        ImportModeArg::Elements => "submodel elements",
    };
    let _ = writeln!(out, "Catalog: {}", report.catalog);
    let _ = writeln!(
        out,
        "Imported {} of {} selected entries as {mode}",
        report.imported, report.selected
    );
    if report.unresolved.is_empty() {
        let _ = writeln!(out, "No unknown references.");
    } else {
        let _ = writeln!(out, "Unknown references ({}):", report.unresolved.len());
        for unknown in &report.unresolved {
            let _ = writeln!(out, "  - {unknown}");
        }
    }
    if let Some(path) = &report.output {
        let _ = writeln!(out, "Document written to {}", path.display());
    }
    out
}

pub fn print_report(report: &ImportReport) {
    eprint!("{}", render_report(report));
}
