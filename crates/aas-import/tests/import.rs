//! End-to-end tests for the import orchestrator, using a fake source format.

use std::cell::RefCell;
use std::rc::Rc;

use aas_import::{
    ContainerBuilder, ImportContext, ImportError, ImportMode, RelationKind, ReportSink,
    Selection, SelectionProvider, SequentialIdGenerator, SourceElement, SourceKind,
    TemplateShellBuilder, UnknownReference, import_submodel_elements, import_submodels,
};
use aas_model::{
    ConceptDescription, ConceptKey, DataTypeDef, ElementTarget, Environment, IdKind, IdShort,
    Identifier, Property, Reference, ShellHandle, Submodel, SubmodelElement,
};
use proptest::prelude::*;

/// A minimal source format: one element per concept key, with optional
/// references to other concepts of the same format.
struct FakeElement {
    key: ConceptKey,
    name: String,
    refs: Vec<ConceptKey>,
    calls: Option<Rc<RefCell<Vec<String>>>>,
}

impl FakeElement {
    fn identifier(&self) -> Identifier {
        Identifier::new(IdKind::Custom, format!("fake/{}", self.key)).expect("valid identifier")
    }

    fn log(&self, capability: &str) {
        if let Some(calls) = &self.calls {
            calls.borrow_mut().push(format!("{capability}:{}", self.key));
        }
    }

    /// Creates the concept description for this element unless one already
    /// exists, resolving references eagerly into `is_case_of`.
    fn ensure_concept(&self, env: &mut Environment, ctx: &mut ImportContext) -> Option<Reference> {
        if ctx.lookup(&self.key).is_some() {
            return None;
        }
        let identifier = self.identifier();
        let mut concept = ConceptDescription::new(identifier.clone(), self.name.clone());
        for target in &self.refs {
            if let Some(resolved) =
                ctx.resolve_or_record(target, &self.key, RelationKind::DefiningClass)
            {
                concept.is_case_of.push(resolved);
            }
        }
        env.add_concept_description(concept);
        let reference = Reference::to_concept(&identifier);
        ctx.register_created(self.key.clone(), reference.clone());
        Some(reference)
    }
}

impl SourceElement for FakeElement {
    fn key(&self) -> &ConceptKey {
        &self.key
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Property
    }

    fn import_submodel_into(
        &self,
        env: &mut Environment,
        shell: ShellHandle,
        ctx: &mut ImportContext,
    ) -> bool {
        self.log("submodels");
        let Some(reference) = self.ensure_concept(env, ctx) else {
            return false;
        };
        let submodel = Submodel::new(self.identifier(), IdShort::sanitized(self.key.as_str()))
            .with_semantic_id(reference);
        env.attach_submodel(shell, submodel);
        true
    }

    fn import_submodel_elements_into(
        &self,
        env: &mut Environment,
        target: &ElementTarget,
        ctx: &mut ImportContext,
    ) -> bool {
        self.log("elements");
        let Some(reference) = self.ensure_concept(env, ctx) else {
            return false;
        };
        let property = Property::new(IdShort::sanitized(self.key.as_str()), DataTypeDef::String)
            .with_semantic_id(reference);
        let Some(elements) = target.resolve(env) else {
            return false;
        };
        elements.push(SubmodelElement::Property(property));
        true
    }
}

fn element(key: &str, refs: &[&str]) -> Box<dyn SourceElement> {
    Box::new(FakeElement {
        key: ConceptKey::new(key).unwrap(),
        name: format!("concept {key}"),
        refs: refs.iter().map(|r| ConceptKey::new(*r).unwrap()).collect(),
        calls: None,
    })
}

fn logged_element(key: &str, calls: &Rc<RefCell<Vec<String>>>) -> Box<dyn SourceElement> {
    Box::new(FakeElement {
        key: ConceptKey::new(key).unwrap(),
        name: format!("concept {key}"),
        refs: Vec::new(),
        calls: Some(Rc::clone(calls)),
    })
}

/// Hands out one prepared selection, like a dialog that was already confirmed.
struct StaticProvider {
    selection: Option<Selection>,
}

impl StaticProvider {
    fn of(elements: Vec<Box<dyn SourceElement>>) -> Self {
        Self {
            selection: Some(Selection::Elements(elements)),
        }
    }

    fn cancelled() -> Self {
        Self {
            selection: Some(Selection::Cancelled),
        }
    }
}

impl SelectionProvider for StaticProvider {
    fn select(&mut self, _mode: ImportMode) -> Result<Selection, ImportError> {
        Ok(self
            .selection
            .take()
            .unwrap_or(Selection::Elements(Vec::new())))
    }
}

struct FailingProvider;

impl SelectionProvider for FailingProvider {
    fn select(&mut self, _mode: ImportMode) -> Result<Selection, ImportError> {
        Err(ImportError::Selection("catalog unavailable".to_string()))
    }
}

/// Captures the advisory report instead of logging it.
#[derive(Default)]
struct CollectingSink {
    reports: RefCell<Vec<Vec<UnknownReference>>>,
}

impl ReportSink for CollectingSink {
    fn unresolved_references(&self, references: &[UnknownReference]) {
        self.reports.borrow_mut().push(references.to_vec());
    }
}

fn builder() -> TemplateShellBuilder<SequentialIdGenerator> {
    TemplateShellBuilder::new(SequentialIdGenerator::new(), "http://example.com/ids/aas")
}

fn elements_env() -> (Environment, ElementTarget) {
    let mut env = Environment::new();
    let handle = env.add_submodel(Submodel::new(
        Identifier::new(IdKind::Iri, "http://example.com/sm/import").unwrap(),
        IdShort::new("Import").unwrap(),
    ));
    (env, ElementTarget::submodel(handle))
}

#[test]
fn example_scenario_imports_three_elements_with_one_unknown_reference() {
    let (mut env, target) = elements_env();
    let mut provider = StaticProvider::of(vec![
        element("X1", &[]),
        element("X2", &["X1"]),
        element("X3", &["X9"]),
    ]);
    let sink = CollectingSink::default();

    let outcome = import_submodel_elements(&mut env, &target, &mut provider, &sink).unwrap();

    assert_eq!(outcome.imported, 3);
    assert!(outcome.any_imported());
    assert_eq!(env.concept_descriptions.len(), 3);
    assert_eq!(
        outcome.unresolved,
        vec![UnknownReference {
            target: ConceptKey::new("X9").unwrap(),
            referenced_by: ConceptKey::new("X3").unwrap(),
            relation: RelationKind::DefiningClass,
        }]
    );

    // X2 resolved X1 eagerly to the node created for X1.
    let x2 = &env.concept_descriptions[1];
    assert_eq!(x2.is_case_of, vec![Reference::to_concept(
        &Identifier::new(IdKind::Custom, "fake/X1").unwrap()
    )]);

    // The advisory report was surfaced exactly once.
    assert_eq!(sink.reports.borrow().len(), 1);
    assert_eq!(sink.reports.borrow()[0], outcome.unresolved);
}

#[test]
fn duplicate_keys_create_one_concept_node() {
    let (mut env, target) = elements_env();
    let mut provider = StaticProvider::of(vec![
        element("X1", &[]),
        element("X1", &[]),
        element("X2", &["X1"]),
    ]);
    let sink = CollectingSink::default();

    let outcome = import_submodel_elements(&mut env, &target, &mut provider, &sink).unwrap();

    // The repeated element maps to nothing new.
    assert_eq!(outcome.imported, 2);
    assert_eq!(env.concept_descriptions.len(), 2);
    assert!(outcome.unresolved.is_empty());
    assert!(sink.reports.borrow().is_empty());
}

#[test]
fn target_nodes_preserve_selection_order() {
    let (mut env, target) = elements_env();
    let mut provider = StaticProvider::of(vec![
        element("B2", &[]),
        element("A1", &[]),
        element("C3", &[]),
    ]);
    let sink = CollectingSink::default();

    import_submodel_elements(&mut env, &target, &mut provider, &sink).unwrap();

    let ids: Vec<&str> = env.submodels[0]
        .elements
        .iter()
        .map(|element| element.id_short().as_str())
        .collect();
    assert_eq!(ids, vec!["B2", "A1", "C3"]);
}

#[test]
fn empty_selection_is_a_no_op() {
    let (mut env, target) = elements_env();
    let mut provider = StaticProvider::of(Vec::new());
    let sink = CollectingSink::default();

    let outcome = import_submodel_elements(&mut env, &target, &mut provider, &sink).unwrap();

    assert!(!outcome.any_imported());
    assert!(outcome.unresolved.is_empty());
    assert!(env.concept_descriptions.is_empty());
    assert!(sink.reports.borrow().is_empty());
}

#[test]
fn cancelled_selection_creates_no_shell() {
    let mut env = Environment::new();
    let mut provider = StaticProvider::cancelled();
    let sink = CollectingSink::default();

    let outcome =
        import_submodels(&mut env, None, &mut provider, &builder(), &sink).unwrap();

    assert!(!outcome.any_imported());
    assert!(env.shells.is_empty());
}

#[test]
fn missing_shell_is_created_before_conversion() {
    let mut env = Environment::new();
    let mut provider = StaticProvider::of(vec![element("X1", &[]), element("X2", &[])]);
    let sink = CollectingSink::default();

    let outcome =
        import_submodels(&mut env, None, &mut provider, &builder(), &sink).unwrap();

    assert_eq!(outcome.imported, 2);
    assert_eq!(env.shells.len(), 1);
    assert_eq!(env.shells[0].submodels.len(), 2);
    assert_eq!(env.submodels.len(), 2);
}

#[test]
fn supplied_shell_is_reused() {
    let mut env = Environment::new();
    let shell = builder().create_shell(&mut env).unwrap();
    let mut provider = StaticProvider::of(vec![element("X1", &[])]);
    let sink = CollectingSink::default();

    import_submodels(&mut env, Some(shell), &mut provider, &builder(), &sink).unwrap();

    assert_eq!(env.shells.len(), 1);
    assert_eq!(env.shell(shell).submodels.len(), 1);
}

#[test]
fn orchestrator_invokes_only_the_mode_matching_capability() {
    let calls = Rc::new(RefCell::new(Vec::new()));

    let mut env = Environment::new();
    let mut provider = StaticProvider::of(vec![
        logged_element("X1", &calls),
        logged_element("X2", &calls),
    ]);
    let sink = CollectingSink::default();
    import_submodels(&mut env, None, &mut provider, &builder(), &sink).unwrap();
    assert_eq!(&*calls.borrow(), &["submodels:X1", "submodels:X2"]);

    calls.borrow_mut().clear();
    let (mut env, target) = elements_env();
    let mut provider = StaticProvider::of(vec![
        logged_element("X1", &calls),
        logged_element("X2", &calls),
    ]);
    import_submodel_elements(&mut env, &target, &mut provider, &sink).unwrap();
    assert_eq!(&*calls.borrow(), &["elements:X1", "elements:X2"]);
}

#[test]
fn fresh_contexts_produce_identical_fragments() {
    let sink = CollectingSink::default();

    let (mut first_env, first_target) = elements_env();
    let mut provider = StaticProvider::of(vec![element("X1", &[]), element("X2", &["X1"])]);
    import_submodel_elements(&mut first_env, &first_target, &mut provider, &sink).unwrap();

    let (mut second_env, second_target) = elements_env();
    let mut provider = StaticProvider::of(vec![element("X1", &[]), element("X2", &["X1"])]);
    import_submodel_elements(&mut second_env, &second_target, &mut provider, &sink).unwrap();

    assert_eq!(first_env, second_env);
}

#[test]
fn rerun_against_same_context_creates_no_additional_nodes() {
    let (mut env, target) = elements_env();
    let elements = [element("X1", &[]), element("X2", &["X1"])];
    let mut ctx = ImportContext::new();

    for element in &elements {
        assert!(element.import_submodel_elements_into(&mut env, &target, &mut ctx));
    }
    assert_eq!(env.concept_descriptions.len(), 2);

    for element in &elements {
        assert!(!element.import_submodel_elements_into(&mut env, &target, &mut ctx));
    }
    assert_eq!(env.concept_descriptions.len(), 2);
    assert_eq!(ctx.created_count(), 2);
}

#[test]
fn invalid_target_is_rejected_before_selection() {
    let mut env = Environment::new();
    let handle = env.add_submodel(Submodel::new(
        Identifier::new(IdKind::Iri, "http://example.com/sm/import").unwrap(),
        IdShort::new("Import").unwrap(),
    ));
    let bogus = ElementTarget::submodel(handle).child(3);
    let mut provider = StaticProvider::of(vec![element("X1", &[])]);
    let sink = CollectingSink::default();

    let result = import_submodel_elements(&mut env, &bogus, &mut provider, &sink);
    assert!(matches!(result, Err(ImportError::InvalidTarget)));
}

#[test]
fn provider_failure_propagates_cleanly() {
    let (mut env, target) = elements_env();
    let sink = CollectingSink::default();

    let result = import_submodel_elements(&mut env, &target, &mut FailingProvider, &sink);

    assert!(matches!(result, Err(ImportError::Selection(_))));
    assert!(env.concept_descriptions.is_empty());
}

proptest! {
    /// For any selection sequence, concept descriptions are unique per
    /// distinct key and appear in first-occurrence order.
    #[test]
    fn concepts_are_unique_and_first_occurrence_ordered(
        keys in proptest::collection::vec(
            prop::sample::select(vec!["X1", "X2", "X3", "X4", "X5"]),
            0..12,
        )
    ) {
        let (mut env, target) = elements_env();
        let mut provider = StaticProvider::of(
            keys.iter().map(|key| element(key, &[])).collect(),
        );
        let sink = CollectingSink::default();

        let outcome =
            import_submodel_elements(&mut env, &target, &mut provider, &sink).unwrap();

        let mut expected: Vec<&str> = Vec::new();
        for key in &keys {
            if !expected.contains(key) {
                expected.push(*key);
            }
        }

        let created: Vec<String> = env
            .concept_descriptions
            .iter()
            .map(|concept| concept.identifier.id.clone())
            .collect();
        let expected_ids: Vec<String> =
            expected.iter().map(|key| format!("fake/{key}")).collect();

        prop_assert_eq!(created, expected_ids);
        prop_assert_eq!(outcome.imported, expected.len());
        prop_assert!(outcome.unresolved.is_empty());
    }
}
