//! Tests for aas-model types.

use aas_model::{
    AdministrationShell, ConceptDescription, DataTypeDef, Environment, IdKind, IdShort,
    Identifier, Property, Reference, Submodel, SubmodelElement,
};

fn iri(id: &str) -> Identifier {
    Identifier::new(IdKind::Iri, id).expect("valid identifier")
}

fn build_document() -> Environment {
    let mut env = Environment::new();
    let shell = env.add_shell(AdministrationShell::new(
        iri("http://example.com/aas/0001"),
        IdShort::new("Device").expect("valid idShort"),
    ));

    let concept_id = Identifier::new(IdKind::Irdi, "0173-1#02-AAO677#002").expect("valid irdi");
    let mut concept = ConceptDescription::new(concept_id.clone(), "manufacturer name");
    concept.value_type = Some(DataTypeDef::String);
    concept.definition = Some("legally valid designation of the natural or judicial person".into());
    env.add_concept_description(concept);

    let mut submodel = Submodel::new(
        iri("http://example.com/sm/0001"),
        IdShort::new("Nameplate").expect("valid idShort"),
    );
    submodel.elements.push(SubmodelElement::Property(
        Property::new(
            IdShort::new("ManufacturerName").expect("valid idShort"),
            DataTypeDef::String,
        )
        .with_semantic_id(Reference::to_concept(&concept_id)),
    ));
    env.attach_submodel(shell, submodel);
    env
}

#[test]
fn document_serializes_round_trip() {
    let env = build_document();
    let json = serde_json::to_string(&env).expect("serialize environment");
    let round: Environment = serde_json::from_str(&json).expect("deserialize environment");
    assert_eq!(round, env);
}

#[test]
fn semantic_reference_resolves_against_concept_descriptions() {
    let env = build_document();
    let submodel = &env.submodels[0];
    let semantic = submodel.elements[0]
        .semantic_id()
        .expect("property has semantic id");
    let concept = env
        .concept_descriptions
        .iter()
        .find(|concept| Some(concept.identifier.id.as_str()) == semantic.first_value())
        .expect("semantic id resolves");
    assert_eq!(concept.preferred_name, "manufacturer name");
}

#[test]
fn environment_appends_preserve_existing_nodes() {
    let mut env = build_document();
    let shells_before = env.shells.clone();
    let submodels_before = env.submodels.clone();

    let shell = env.add_shell(AdministrationShell::new(
        iri("http://example.com/aas/0002"),
        IdShort::new("Second").expect("valid idShort"),
    ));
    env.attach_submodel(
        shell,
        Submodel::new(
            iri("http://example.com/sm/0002"),
            IdShort::new("Extra").expect("valid idShort"),
        ),
    );

    assert_eq!(&env.shells[..shells_before.len()], &shells_before[..]);
    assert_eq!(&env.submodels[..submodels_before.len()], &submodels_before[..]);
}
