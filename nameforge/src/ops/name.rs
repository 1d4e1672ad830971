//! Name operation - generate identifiers for a schema.

use nameforge_naming::{
    EnumNameGenerator, NamingPipeline, PropertyNameGenerator, Result, Slot, TypeNameGenerator,
};
use nameforge_schema::{ReservedNames, Schema};

use crate::reports::{NameReport, NamedItem};

/// Execute the name operation.
///
/// Names the root schema and, depth first, every nested schema that declares
/// properties or enumeration members. Type names generated earlier are
/// reserved for the ones generated later.
pub fn name(pipeline: &NamingPipeline, schema: &Schema, hint: Option<&str>) -> Result<NameReport> {
    let mut walker = Walker {
        pipeline,
        reserved: ReservedNames::new(),
        items: Vec::new(),
    };
    walker.name_schema(schema, hint)?;

    Ok(NameReport {
        items: walker.items,
    })
}

struct Walker<'a> {
    pipeline: &'a NamingPipeline,
    reserved: ReservedNames,
    items: Vec<NamedItem>,
}

impl Walker<'_> {
    fn name_schema(&mut self, schema: &Schema, hint: Option<&str>) -> Result<()> {
        let type_name = self
            .pipeline
            .generate_type_name(schema, hint, &self.reserved)?;
        self.reserved.insert(type_name.clone());
        self.items.push(NamedItem {
            slot: Slot::Type,
            path: schema
                .title
                .as_deref()
                .or(hint)
                .unwrap_or_default()
                .to_string(),
            identifier: type_name.clone(),
        });

        for member in schema.enum_members() {
            let identifier = self.pipeline.generate_enum_name(
                member.index,
                &member.name,
                member.value,
                schema,
            )?;
            self.items.push(NamedItem {
                slot: Slot::Enum,
                path: format!("{type_name}.{}", member.name),
                identifier,
            });
        }

        for property in schema.properties() {
            let identifier = self.pipeline.generate_property_name(&property)?;
            self.items.push(NamedItem {
                slot: Slot::Property,
                path: format!("{type_name}.{}", property.name()),
                identifier,
            });

            let nested = property.schema();
            if !nested.properties.is_empty() || nested.is_enum() {
                self.name_schema(nested, Some(property.name()))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use nameforge_naming::GeneratorOverrides;

    use super::*;

    fn order_schema() -> Schema {
        serde_json::from_str(
            r#"{
                "title": "order",
                "type": "object",
                "properties": {
                    "order_id": { "type": "integer" },
                    "@odata.type": { "type": "string" },
                    "status": {
                        "type": "string",
                        "enum": ["in_stock", "sold-out", 3]
                    },
                    "customer": {
                        "type": "object",
                        "properties": { "first_name": { "type": "string" } }
                    }
                }
            }"#,
        )
        .unwrap()
    }

    fn render(report: &NameReport) -> String {
        report
            .items
            .iter()
            .map(|item| format!("{} {} -> {}", item.slot, item.path, item.identifier))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_name_with_defaults() {
        let pipeline = NamingPipeline::new();
        let report = name(&pipeline, &order_schema(), Some("orders")).unwrap();

        insta::assert_snapshot!(render(&report), @r"
        type order -> Order
        property Order.order_id -> OrderId
        property Order.@odata.type -> OdataType
        property Order.status -> Status
        type status -> Status
        enum Status.in_stock -> InStock
        enum Status.sold-out -> SoldOut
        enum Status.3 -> N3
        property Order.customer -> Customer
        type customer -> Customer
        property Customer.first_name -> FirstName
        ");
    }

    #[test]
    fn test_name_reserves_type_names() {
        let schema: Schema =
            serde_json::from_str(r#"{ "title": "Item", "properties": { "item": { "properties": { "id": {} } } } }"#)
                .unwrap();

        let report = name(&NamingPipeline::new(), &schema, None).unwrap();
        let types: Vec<_> = report
            .items
            .iter()
            .filter(|item| item.slot == Slot::Type)
            .map(|item| item.identifier.as_str())
            .collect();
        assert_eq!(types, ["Item", "Item2"]);
    }

    #[test]
    fn test_name_starts_pipeline() {
        let mut pipeline = NamingPipeline::new();
        name(&pipeline, &order_schema(), None).unwrap();
        assert!(
            pipeline
                .apply_overrides(&GeneratorOverrides::new())
                .is_err()
        );
    }
}
