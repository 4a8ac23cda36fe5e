//! Contracts for the external collaborators of the import engine, with
//! default implementations suitable for embedders and tests.

use std::sync::atomic::{AtomicU64, Ordering};

use aas_model::{AdministrationShell, Environment, IdKind, IdShort, Identifier, ShellHandle};

use crate::context::UnknownReference;
use crate::error::ImportError;
use crate::source::{ImportMode, SourceElement};

/// Result of the selection step. Cancellation is handled exactly like an
/// empty selection: the operation becomes a no-op, not an error.
pub enum Selection {
    Cancelled,
    Elements(Vec<Box<dyn SourceElement>>),
}

/// Produces the elements to import, in user-selection order. Owned by the
/// embedding application (dialog, CLI argument list, test fixture).
pub trait SelectionProvider {
    fn select(&mut self, mode: ImportMode) -> Result<Selection, ImportError>;
}

/// Opaque identifier-generation strategy for new top-level nodes.
pub trait IdGenerator {
    fn generate(&self, template: &str) -> Result<String, ImportError>;
}

/// Counter-based [`IdGenerator`] appending a running number to the template.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self, template: &str) -> Result<String, ImportError> {
        let number = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let separator = if template.ends_with('/') { "" } else { "/" };
        Ok(format!("{template}{separator}{number:04}"))
    }
}

/// Creates the destination container when the caller did not supply one.
pub trait ContainerBuilder {
    fn create_shell(&self, env: &mut Environment) -> Result<ShellHandle, ImportError>;
}

/// [`ContainerBuilder`] creating an empty shell whose identifier comes from
/// an injected [`IdGenerator`] and template.
pub struct TemplateShellBuilder<G> {
    ids: G,
    template: String,
}

impl<G: IdGenerator> TemplateShellBuilder<G> {
    pub fn new(ids: G, template: impl Into<String>) -> Self {
        Self {
            ids,
            template: template.into(),
        }
    }
}

impl<G: IdGenerator> ContainerBuilder for TemplateShellBuilder<G> {
    fn create_shell(&self, env: &mut Environment) -> Result<ShellHandle, ImportError> {
        let id = self.ids.generate(&self.template)?;
        let identifier = Identifier::new(IdKind::Iri, id)
            .map_err(|error| ImportError::IdGeneration(error.to_string()))?;
        let shell = AdministrationShell::new(identifier, IdShort::sanitized("ImportedShell"));
        Ok(env.add_shell(shell))
    }
}

/// Receives the advisory unresolved-reference summary after a batch.
pub trait ReportSink {
    fn unresolved_references(&self, references: &[UnknownReference]);
}

/// [`ReportSink`] emitting a single `tracing` info event.
#[derive(Debug, Default)]
pub struct TracingReport;

impl ReportSink for TracingReport {
    fn unresolved_references(&self, references: &[UnknownReference]) {
        let rendered: Vec<String> = references.iter().map(ToString::to_string).collect();
        tracing::info!(
            count = references.len(),
            "found {} unknown references during import: {}",
            references.len(),
            rendered.join(", ")
        );
    }
}
