//! Orchestration of one import operation.
//!
//! The two entry points bind an [`ImportMode`] to its conversion capability
//! statically, so the wrong capability for a mode cannot be invoked. Both
//! share the same driver: obtain the selection, convert each element in
//! selection order against one fresh [`ImportContext`], count successes, and
//! surface unknown references through the report sink.

use aas_model::{ElementTarget, Environment, ShellHandle};

use crate::collaborators::{ContainerBuilder, ReportSink, Selection, SelectionProvider};
use crate::context::{ImportContext, UnknownReference};
use crate::error::ImportError;
use crate::source::{ImportMode, SourceElement};

/// Aggregate result of one import operation.
#[derive(Debug)]
pub struct ImportOutcome {
    /// Number of selected elements whose conversion created at least one
    /// target node.
    pub imported: usize,
    /// Unresolved relationship descriptors, in encounter order. Advisory
    /// only; an unresolved reference never fails the operation.
    pub unresolved: Vec<UnknownReference>,
}

impl ImportOutcome {
    fn empty() -> Self {
        Self {
            imported: 0,
            unresolved: Vec::new(),
        }
    }

    /// The operation succeeded iff at least one element was imported.
    #[must_use]
    pub fn any_imported(&self) -> bool {
        self.imported > 0
    }
}

/// Imports the selection as submodels under an administration shell.
///
/// When `shell` is `None`, a new empty shell is requested from the builder
/// before conversion starts; no shell is created when the selection turns
/// out to be empty or cancelled.
pub fn import_submodels<P, B, S>(
    env: &mut Environment,
    shell: Option<ShellHandle>,
    provider: &mut P,
    builder: &B,
    sink: &S,
) -> Result<ImportOutcome, ImportError>
where
    P: SelectionProvider + ?Sized,
    B: ContainerBuilder + ?Sized,
    S: ReportSink + ?Sized,
{
    let elements = obtain_selection(provider, ImportMode::Submodels)?;
    if elements.is_empty() {
        return Ok(ImportOutcome::empty());
    }
    let shell = match shell {
        Some(handle) => handle,
        None => builder.create_shell(env)?,
    };
    run_batch(&elements, sink, |element, ctx| {
        element.import_submodel_into(env, shell, ctx)
    })
}

/// Imports the selection as submodel elements under an existing parent
/// (a submodel or a nested collection).
pub fn import_submodel_elements<P, S>(
    env: &mut Environment,
    target: &ElementTarget,
    provider: &mut P,
    sink: &S,
) -> Result<ImportOutcome, ImportError>
where
    P: SelectionProvider + ?Sized,
    S: ReportSink + ?Sized,
{
    if target.peek(env).is_none() {
        return Err(ImportError::InvalidTarget);
    }
    let elements = obtain_selection(provider, ImportMode::SubmodelElements)?;
    if elements.is_empty() {
        return Ok(ImportOutcome::empty());
    }
    run_batch(&elements, sink, |element, ctx| {
        element.import_submodel_elements_into(env, target, ctx)
    })
}

fn obtain_selection<P>(
    provider: &mut P,
    mode: ImportMode,
) -> Result<Vec<Box<dyn SourceElement>>, ImportError>
where
    P: SelectionProvider + ?Sized,
{
    match provider.select(mode)? {
        Selection::Cancelled => {
            tracing::debug!(%mode, "selection cancelled, nothing to import");
            Ok(Vec::new())
        }
        Selection::Elements(elements) => {
            tracing::debug!(%mode, count = elements.len(), "selection obtained");
            Ok(elements)
        }
    }
}

fn run_batch<F, S>(
    elements: &[Box<dyn SourceElement>],
    sink: &S,
    mut convert: F,
) -> Result<ImportOutcome, ImportError>
where
    F: FnMut(&dyn SourceElement, &mut ImportContext) -> bool,
    S: ReportSink + ?Sized,
{
    let mut ctx = ImportContext::new();
    let mut imported = 0usize;
    for element in elements {
        let created = convert(element.as_ref(), &mut ctx);
        tracing::debug!(
            key = %element.key(),
            name = element.display_name(),
            kind = %element.kind(),
            created,
            "converted source element"
        );
        if created {
            imported += 1;
        }
    }
    let unresolved = ctx.into_unknown_references();
    if !unresolved.is_empty() {
        sink.unresolved_references(&unresolved);
    }
    tracing::info!(
        imported,
        selected = elements.len(),
        unresolved = unresolved.len(),
        "import finished"
    );
    Ok(ImportOutcome {
        imported,
        unresolved,
    })
}
