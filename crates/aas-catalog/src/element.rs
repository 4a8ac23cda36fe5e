//! Conversion of catalog entries into target-tree fragments.

use std::sync::Arc;

use aas_import::{ImportContext, RelationKind, SourceElement, SourceKind};
use aas_model::{
    Collection, ConceptDescription, ConceptKey, DataTypeDef, ElementTarget, Environment, IdKind,
    IdShort, Identifier, Property, Reference, ShellHandle, Submodel, SubmodelElement,
};

use crate::catalog::{Catalog, CatalogEntry, EntryKind};

/// A catalog entry viewed through the engine's source-element contract.
#[derive(Debug, Clone)]
pub struct CatalogElement {
    catalog: Arc<Catalog>,
    index: usize,
}

impl CatalogElement {
    pub fn new(catalog: Arc<Catalog>, code: &ConceptKey) -> Option<Self> {
        let index = catalog.entry_index(code)?;
        Some(Self { catalog, index })
    }

    pub(crate) fn at(catalog: Arc<Catalog>, index: usize) -> Self {
        Self { catalog, index }
    }

    fn entry(&self) -> &CatalogEntry {
        self.catalog.entry_at(self.index)
    }

    /// Identifier of the concept description created for an entry. Codes
    /// that look like IRDIs keep their scheme; everything else becomes a
    /// custom identifier scoped by the catalog name.
    fn concept_identifier(&self, entry: &CatalogEntry) -> Identifier {
        let code = entry.code.as_str();
        let (kind, id) = if code.contains('#') {
            (IdKind::Irdi, code.to_string())
        } else {
            (IdKind::Custom, format!("{}/{}", self.catalog.name(), code))
        };
        // Codes are validated non-blank when the catalog is loaded.
        Identifier { kind, id }
    }

    fn id_short(&self, entry: &CatalogEntry) -> IdShort {
        let raw = entry
            .short_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&entry.preferred_name);
        if raw.trim().is_empty() {
            IdShort::sanitized(entry.code.as_str())
        } else {
            IdShort::sanitized(raw)
        }
    }

    /// Returns the reference for this entry's concept description, creating
    /// and registering the description on first use.
    fn ensure_concept(&self, env: &mut Environment, ctx: &mut ImportContext) -> Reference {
        let entry = self.entry();
        if let Some(existing) = ctx.lookup(&entry.code) {
            return existing.clone();
        }

        let identifier = self.concept_identifier(entry);
        let mut concept = ConceptDescription::new(identifier.clone(), entry.preferred_name.clone());
        concept.short_name = entry.short_name.clone();
        concept.definition = entry.definition.clone();
        concept.unit = entry.unit.clone();
        concept.value_type = entry.value_type.as_deref().map(DataTypeDef::parse);
        concept.source_of_definition = Some(self.catalog.name().to_string());

        if let Some(superclass) = &entry.superclass {
            if let Some(resolved) =
                ctx.resolve_or_record(superclass, &entry.code, RelationKind::DefiningClass)
            {
                concept.is_case_of.push(resolved);
            }
        }
        if let Some(value_list) = &entry.value_list {
            if let Some(resolved) =
                ctx.resolve_or_record(value_list, &entry.code, RelationKind::ValueList)
            {
                concept.is_case_of.push(resolved);
            }
        }

        env.add_concept_description(concept);
        let reference = Reference::to_concept(&identifier);
        ctx.register_created(entry.code.clone(), reference.clone());
        reference
    }

    fn property_element(&self, env: &mut Environment, ctx: &mut ImportContext) -> SubmodelElement {
        let entry = self.entry();
        let semantic = self.ensure_concept(env, ctx);
        let value_type = entry
            .value_type
            .as_deref()
            .map(DataTypeDef::parse)
            .unwrap_or_default();
        SubmodelElement::Property(
            Property::new(self.id_short(entry), value_type).with_semantic_id(semantic),
        )
    }

    fn value_list_element(
        &self,
        env: &mut Environment,
        ctx: &mut ImportContext,
    ) -> SubmodelElement {
        let entry = self.entry();
        let semantic = self.ensure_concept(env, ctx);
        let mut collection = Collection::new(self.id_short(entry)).with_semantic_id(semantic);
        for value in &entry.values {
            collection.elements.push(SubmodelElement::Property(
                Property::new(IdShort::sanitized(value.code.as_str()), DataTypeDef::String)
                    .with_value(value.name.clone()),
            ));
        }
        SubmodelElement::Collection(collection)
    }

    /// Builds the child elements of a class entry, one per listed property
    /// code, resolving against the catalog first and the import context
    /// second.
    fn class_children(
        &self,
        env: &mut Environment,
        ctx: &mut ImportContext,
    ) -> Vec<SubmodelElement> {
        let entry = self.entry();
        let mut children = Vec::new();
        for code in &entry.properties {
            if let Some(child) = CatalogElement::new(Arc::clone(&self.catalog), code) {
                children.push(child.child_element(env, ctx));
                continue;
            }
            // Not in this catalog; link to a node created earlier in the
            // operation, or record the miss.
            if let Some(resolved) =
                ctx.resolve_or_record(code, &entry.code, RelationKind::PropertyOfClass)
            {
                children.push(SubmodelElement::Property(
                    Property::new(IdShort::sanitized(code.as_str()), DataTypeDef::String)
                        .with_semantic_id(resolved),
                ));
            }
        }
        children
    }

    fn child_element(&self, env: &mut Environment, ctx: &mut ImportContext) -> SubmodelElement {
        match self.entry().kind {
            EntryKind::Property => self.property_element(env, ctx),
            EntryKind::ValueList => self.value_list_element(env, ctx),
            EntryKind::Class => {
                let entry = self.entry();
                // A class created earlier in this operation links back
                // instead of expanding again; this keeps cyclic class
                // hierarchies finite.
                if let Some(existing) = ctx.lookup(&entry.code) {
                    return SubmodelElement::Property(
                        Property::new(self.id_short(entry), DataTypeDef::String)
                            .with_semantic_id(existing.clone()),
                    );
                }
                let semantic = self.ensure_concept(env, ctx);
                let mut collection =
                    Collection::new(self.id_short(entry)).with_semantic_id(semantic);
                collection.elements = self.class_children(env, ctx);
                SubmodelElement::Collection(collection)
            }
        }
    }

    /// A class with neither a usable name nor properties maps to nothing.
    fn class_is_importable(&self, entry: &CatalogEntry) -> bool {
        !entry.preferred_name.trim().is_empty() || !entry.properties.is_empty()
    }
}

impl SourceElement for CatalogElement {
    fn key(&self) -> &ConceptKey {
        &self.entry().code
    }

    fn display_name(&self) -> &str {
        &self.entry().preferred_name
    }

    fn kind(&self) -> SourceKind {
        match self.entry().kind {
            EntryKind::Class => SourceKind::Class,
            EntryKind::Property => SourceKind::Property,
            EntryKind::ValueList => SourceKind::ValueList,
        }
    }

    fn import_submodel_into(
        &self,
        env: &mut Environment,
        shell: ShellHandle,
        ctx: &mut ImportContext,
    ) -> bool {
        let entry = self.entry();
        if entry.kind != EntryKind::Class || !self.class_is_importable(entry) {
            return false;
        }
        // At most one target node per concept and operation; a repeated
        // selection maps to nothing new.
        if ctx.lookup(&entry.code).is_some() {
            return false;
        }
        let semantic = self.ensure_concept(env, ctx);
        let children = self.class_children(env, ctx);
        let identifier = self.concept_identifier(entry);
        let mut submodel =
            Submodel::new(identifier, self.id_short(entry)).with_semantic_id(semantic);
        submodel.elements = children;
        env.attach_submodel(shell, submodel);
        true
    }

    fn import_submodel_elements_into(
        &self,
        env: &mut Environment,
        target: &ElementTarget,
        ctx: &mut ImportContext,
    ) -> bool {
        let entry = self.entry();
        if ctx.lookup(&entry.code).is_some() {
            return false;
        }
        let built = match entry.kind {
            EntryKind::Class => {
                if !self.class_is_importable(entry) {
                    return false;
                }
                self.child_element(env, ctx)
            }
            EntryKind::Property | EntryKind::ValueList => self.child_element(env, ctx),
        };
        let Some(elements) = target.resolve(env) else {
            return false;
        };
        elements.push(built);
        true
    }
}
