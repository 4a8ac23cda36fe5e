//! Selection of catalog entries by explicit code list.

use std::sync::Arc;

use aas_import::{ImportError, ImportMode, Selection, SelectionProvider, SourceElement};
use aas_model::ConceptKey;

use crate::catalog::Catalog;
use crate::element::CatalogElement;
use crate::error::CatalogError;

/// A [`SelectionProvider`] resolving requested codes against a loaded
/// catalog. Unknown codes fail at construction, before the engine runs, so
/// the batch only ever sees valid elements.
pub struct CatalogSelectionProvider {
    catalog: Arc<Catalog>,
    selection: Vec<usize>,
}

impl CatalogSelectionProvider {
    pub fn new(catalog: Arc<Catalog>, codes: &[String]) -> Result<Self, CatalogError> {
        let mut selection = Vec::with_capacity(codes.len());
        for code in codes {
            let key = ConceptKey::new(code.clone()).map_err(|_| CatalogError::BlankCode)?;
            let index = catalog
                .entry_index(&key)
                .ok_or_else(|| CatalogError::UnknownCode { code: code.clone() })?;
            selection.push(index);
        }
        Ok(Self { catalog, selection })
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }
}

impl SelectionProvider for CatalogSelectionProvider {
    fn select(&mut self, mode: ImportMode) -> Result<Selection, ImportError> {
        tracing::debug!(
            %mode,
            catalog = self.catalog.name(),
            count = self.selection.len(),
            "providing catalog selection"
        );
        let elements = self
            .selection
            .iter()
            .map(|index| {
                Box::new(CatalogElement::at(Arc::clone(&self.catalog), *index))
                    as Box<dyn SourceElement>
            })
            .collect();
        Ok(Selection::Elements(elements))
    }
}
