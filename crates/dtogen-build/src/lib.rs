//! DTO synthesis engine.
//!
//! [`generate_class`] runs the collector once for a class and the renderer
//! once per resulting group. [`Processor`] drives that over many classes,
//! hands artifacts to an [`EmitSink`] and turns failures into per-class
//! diagnostics.

pub mod collect;
pub mod diagnostic;
pub mod emit;
pub mod naming;
pub mod processor;
pub mod render;

pub use collect::{BASE_GROUP, DEFAULT_GROUP, FULL_GROUP, Groups, collect};
pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
pub use emit::{EmitError, EmitSink, FsSink, MemorySink};
pub use processor::{Processor, Report};
pub use render::{DtoTarget, render_dto};

use crate::{collect::CollectError, naming::dto_type_name, render::RenderError};
use dtogen_schema::prelude::*;
use std::path::PathBuf;
use thiserror::Error as ThisError;
use tracing::debug;

///
/// GenerateError
///

#[derive(Debug, ThisError)]
pub enum GenerateError {
    #[error(transparent)]
    CollectError(#[from] CollectError),

    #[error("cannot render '{type_name}': {source}")]
    RenderError {
        type_name: String,
        source: RenderError,
    },

    #[error(transparent)]
    EmitError(#[from] EmitError),
}

///
/// GeneratedArtifact
/// One rendered record, not yet emitted.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedArtifact {
    pub package: String,
    pub type_name: String,
    pub group: String,
    pub body: String,
}

impl GeneratedArtifact {
    #[must_use]
    pub fn qualified_name(&self) -> String {
        emit::qualified(&self.package, &self.type_name)
    }

    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        emit::relative_path(&self.package, &self.type_name)
    }
}

/// Collect and render every DTO of one class. Nothing is emitted.
pub fn generate_class<P>(
    provider: &P,
    class: &ClassDescriptor,
) -> Result<Vec<GeneratedArtifact>, GenerateError>
where
    P: MetadataProvider + ?Sized,
{
    let groups = collect(provider, class)?;
    let package = provider.package_of(class);
    let original = provider.qualified_name(class);
    let simple_name = provider.simple_name(class);

    groups
        .iter()
        .map(|(group, fields)| -> Result<GeneratedArtifact, GenerateError> {
            let type_name = dto_type_name(simple_name, group);
            debug!(class = %original, dto = %type_name, fields = fields.len(), "rendering dto");

            let target = DtoTarget {
                package,
                original: &original,
                type_name: &type_name,
            };
            let body = render_dto(provider, target, fields).map_err(|source| {
                GenerateError::RenderError {
                    type_name: type_name.clone(),
                    source,
                }
            })?;

            Ok(GeneratedArtifact {
                package: package.to_string(),
                type_name,
                group: group.to_string(),
                body,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop() -> Schema {
        Schema::from_classes(vec![
            ClassDescriptor::new("com.acme", "Order")
                .annotated()
                .field(FieldDescriptor::new("id", "int"))
                .field(FieldDescriptor::new("total", "double"))
                .field(
                    FieldDescriptor::new("customer", "com.acme.Customer")
                        .with_relation(Relation::new("id", "com.acme.Customer").id_type("int")),
                )
                .field(FieldDescriptor::new("secretNote", "String").secret()),
            ClassDescriptor::new("com.acme", "Entity").field(FieldDescriptor::new("id", "long")),
            ClassDescriptor::new("com.acme", "Product")
                .annotated()
                .extends("Entity")
                .field(FieldDescriptor::new("sku", "String").in_dto("Card"))
                .field(FieldDescriptor::new("cost", "double").secret()),
        ])
        .unwrap()
    }

    fn names(artifacts: &[GeneratedArtifact]) -> Vec<String> {
        let mut names: Vec<_> = artifacts.iter().map(GeneratedArtifact::qualified_name).collect();
        names.sort();
        names
    }

    #[test]
    fn order_example_yields_one_dto() {
        let schema = shop();
        let order = schema.get_class("com.acme.Order").unwrap();

        let artifacts = generate_class(&schema, order).unwrap();
        assert_eq!(names(&artifacts), vec!["com.acme.OrderDTO"]);

        let dto = &artifacts[0];
        assert_eq!(dto.group, DEFAULT_GROUP);
        assert_eq!(dto.relative_path(), PathBuf::from("com/acme/OrderDTO.java"));
        assert!(
            dto.body
                .contains("public record OrderDTO(int id, double total, int customer) {")
        );
        assert!(!dto.body.contains("secretNote"));
    }

    #[test]
    fn subclass_yields_base_full_and_custom_dtos() {
        let schema = shop();
        let product = schema.get_class("com.acme.Product").unwrap();

        let artifacts = generate_class(&schema, product).unwrap();
        assert_eq!(
            names(&artifacts),
            vec![
                "com.acme.ProductBaseDTO",
                "com.acme.ProductCardDTO",
                "com.acme.ProductFullDTO",
            ]
        );

        let full = artifacts.iter().find(|a| a.group == FULL_GROUP).unwrap();
        assert!(full.body.contains("(String sku, long id)"));
        assert!(full.body.contains("public ProductFullDTO(com.acme.Product original)"));
    }

    #[test]
    fn relation_without_type_fails_the_class() {
        let mut rel = Relation::new("id", "x");
        rel.related_type = None;
        let schema = Schema::from_classes(vec![
            ClassDescriptor::new("p", "A")
                .annotated()
                .field(FieldDescriptor::new("ok", "int"))
                .field(FieldDescriptor::new("b", "p.B").with_relation(rel)),
        ])
        .unwrap();
        let class = schema.get_class("p.A").unwrap();

        let err = generate_class(&schema, class).unwrap_err();
        assert!(matches!(err, GenerateError::RenderError { ref type_name, .. } if type_name == "ADTO"));
    }
}
