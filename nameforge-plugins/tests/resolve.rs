use nameforge_naming::{
    EnumNameGenerator, GeneratorOverrides, NamingPipeline, PluginLoader, PropertyNameGenerator,
    Slot, SlotSource, TypeNameGenerator,
};
use nameforge_schema::{EnumValue, ReservedNames, Schema};

// Referencing the crate keeps its registrations linked into this test binary.
use nameforge_plugins as _;

#[test]
fn test_bundled_plugins_are_registered() {
    let types = PluginLoader::new().available_types();
    let bundled: Vec<_> = types
        .iter()
        .filter(|ty| ty.assembly == "nameforge_plugins")
        .map(|ty| (ty.name, ty.slots.clone()))
        .collect();

    assert_eq!(
        bundled,
        vec![
            ("nameforge_plugins::PrefixedTypeNames", vec![Slot::Type]),
            ("nameforge_plugins::ScreamingEnumNames", vec![Slot::Enum]),
            ("nameforge_plugins::SnakeCasePropertyNames", vec![Slot::Property]),
        ]
    );
}

#[test]
fn test_pipeline_with_bundled_plugins() {
    let overrides = GeneratorOverrides::new()
        .with_type_name_generator("nameforge-plugins:nameforge_plugins::PrefixedTypeNames")
        .with_property_name_generator("nameforge_plugins.SnakeCasePropertyNames")
        .with_enum_name_generator("nameforge_plugins::ScreamingEnumNames");

    let mut pipeline = NamingPipeline::new();
    pipeline.apply_overrides(&overrides).unwrap();
    for slot in Slot::ALL {
        assert!(matches!(pipeline.source(slot), SlotSource::Plugin(_)));
    }

    let schema = Schema::new()
        .with_title("order_line")
        .with_property("unitPrice", Schema::new());
    assert_eq!(
        pipeline
            .generate_type_name(&schema, None, &ReservedNames::new())
            .unwrap(),
        "ApiOrderLine"
    );
    assert_eq!(
        pipeline
            .generate_property_name(&schema.property("unitPrice").unwrap())
            .unwrap(),
        "unit_price"
    );
    assert_eq!(
        pipeline
            .generate_enum_name(0, "in_stock", &EnumValue::Null, &schema)
            .unwrap(),
        "IN_STOCK"
    );
}
