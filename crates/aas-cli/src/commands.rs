//! Command implementations.

use std::fs;
use std::sync::Arc;

use anyhow::Context;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use aas_catalog::{Catalog, CatalogSelectionProvider};
use aas_import::{
    IdGenerator, SequentialIdGenerator, TemplateShellBuilder, TracingReport,
    import_submodel_elements, import_submodels,
};
use aas_model::{
    AdministrationShell, ElementTarget, Environment, IdKind, IdShort, Identifier, Submodel,
};

use crate::cli::{ImportArgs, ImportModeArg, ListArgs};
use crate::summary::ImportReport;

pub fn run_import(args: &ImportArgs) -> anyhow::Result<ImportReport> {
    let catalog = Arc::new(Catalog::from_path(&args.catalog)?);
    let catalog_name = catalog.name().to_string();
    let mut provider = CatalogSelectionProvider::new(Arc::clone(&catalog), &args.select)?;
    let selected = provider.selected_count();

    let mut env = Environment::new();
    let sink = TracingReport;
    let ids = SequentialIdGenerator::new();

    let outcome = match args.mode {
        ImportModeArg::Submodels => {
            let shell = match &args.shell_id {
                Some(id) => {
                    let shell = AdministrationShell::new(
                        Identifier::new(IdKind::Iri, id.clone())?,
                        IdShort::sanitized("ImportedShell"),
                    );
                    Some(env.add_shell(shell))
                }
                None => None,
            };
            let builder = TemplateShellBuilder::new(ids, args.id_template.clone());
            import_submodels(&mut env, shell, &mut provider, &builder, &sink)?
        }
        ImportModeArg::Elements => {
            let id = ids.generate(&args.id_template)?;
            let submodel = Submodel::new(
                Identifier::new(IdKind::Iri, id)?,
                IdShort::sanitized("Import"),
            );
            let handle = env.add_submodel(submodel);
            let target = ElementTarget::submodel(handle);
            import_submodel_elements(&mut env, &target, &mut provider, &sink)?
        }
    };

    let json = serde_json::to_string_pretty(&env).context("serialize document")?;
    match &args.output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("write document to {}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(ImportReport {
        catalog: catalog_name,
        mode: args.mode,
        selected,
        imported: outcome.imported,
        unresolved: outcome.unresolved,
        output: args.output.clone(),
    })
}

pub fn run_list(args: &ListArgs) -> anyhow::Result<()> {
    let catalog = Catalog::from_path(&args.catalog)?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Code", "Kind", "Name", "Value type", "Unit"]);
    for entry in catalog.entries() {
        table.add_row(vec![
            entry.code.as_str(),
            entry.kind.as_str(),
            entry.preferred_name.as_str(),
            entry.value_type.as_deref().unwrap_or("-"),
            entry.unit.as_deref().unwrap_or("-"),
        ]);
    }
    println!("{} ({} entries)", catalog.name(), catalog.len());
    println!("{table}");
    Ok(())
}
