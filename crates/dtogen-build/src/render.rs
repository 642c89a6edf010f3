//! Record rendering.
//!
//! Turns one group of fields into the source of a record type with a
//! constructor from the original class and a `toOriginal()` method going
//! back. Relation members carry the related entity's identifier only.

use crate::naming::{getter, setter};
use dtogen_schema::prelude::*;
use std::fmt;
use thiserror::Error as ThisError;

/// Sequence type wrapping collection relation identifiers.
pub const LIST_TYPE: &str = "java.util.List";

const INDENT: &str = "    ";

///
/// RenderError
///

#[derive(Debug, ThisError)]
pub enum RenderError {
    #[error("relation field '{field}' has no {missing}")]
    MissingRelationType { field: String, missing: &'static str },
}

///
/// DtoTarget
/// Where a rendered record goes and what it converts from.
///

#[derive(Clone, Copy, Debug)]
pub struct DtoTarget<'a> {
    pub package: &'a str,
    pub original: &'a str,
    pub type_name: &'a str,
}

///
/// Member
/// A record component resolved from one field.
///

#[derive(Clone, Debug, Eq, PartialEq)]
struct Member<'a> {
    name: &'a str,
    ty: String,
    source: Source<'a>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Source<'a> {
    Plain,
    Single { id_field: &'a str },
    Collection { id_field: &'a str, related_type: &'a str },
}

impl<'a> Member<'a> {
    fn resolve<P>(provider: &P, field: &'a FieldDescriptor) -> Result<Self, RenderError>
    where
        P: MetadataProvider + ?Sized,
    {
        let name = field.name.as_str();
        let Some(rel) = provider.relation(field) else {
            return Ok(Self {
                name,
                ty: field.ty.clone(),
                source: Source::Plain,
            });
        };

        let missing = |missing| RenderError::MissingRelationType {
            field: field.name.clone(),
            missing,
        };
        let related_type = rel.related_type().ok_or_else(|| missing("related type"))?;
        let id_type = rel.resolved_id_type().ok_or_else(|| missing("id type"))?;
        let id_field = rel.id_field.as_str();

        let member = if rel.collection {
            Self {
                name,
                ty: format!("{LIST_TYPE}<{id_type}>"),
                source: Source::Collection {
                    id_field,
                    related_type,
                },
            }
        } else {
            Self {
                name,
                ty: id_type.to_string(),
                source: Source::Single { id_field },
            }
        };

        Ok(member)
    }

    // component
    fn component(&self) -> String {
        format!("{} {}", self.ty, self.name)
    }

    // forward
    // value read from `original`
    fn forward(&self) -> String {
        let read = format!("original.{}()", getter(self.name));

        match self.source {
            Source::Plain => read,
            Source::Single { id_field } => format!("{read}.{}()", getter(id_field)),
            Source::Collection {
                id_field,
                related_type,
            } => format!(
                "{read}.stream().map({related_type}::{}).toList()",
                getter(id_field)
            ),
        }
    }

    // reverse
    // one statement of toOriginal(); relations are left unset
    fn reverse(&self) -> String {
        let set = setter(self.name);

        match self.source {
            Source::Plain => format!("{INDENT}{INDENT}obj.{set}(this.{});\n", self.name),
            Source::Single { .. } | Source::Collection { .. } => format!(
                "{INDENT}{INDENT}// obj.{set}(null); // relation cannot be rebuilt from its id alone\n"
            ),
        }
    }
}

/// Render the record source for one group.
pub fn render_dto<P>(
    provider: &P,
    target: DtoTarget<'_>,
    fields: &[&FieldDescriptor],
) -> Result<String, RenderError>
where
    P: MetadataProvider + ?Sized,
{
    let members = fields
        .iter()
        .map(|&field| Member::resolve(provider, field))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Record {
        target,
        members: &members,
    }
    .to_string())
}

///
/// Record
///

struct Record<'a> {
    target: DtoTarget<'a>,
    members: &'a [Member<'a>],
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let DtoTarget {
            package,
            original,
            type_name,
        } = self.target;
        let members = self.members;

        if !package.is_empty() {
            writeln!(f, "package {package};")?;
            writeln!(f)?;
        }

        let components = join(members, Member::component);
        writeln!(f, "public record {type_name}({components}) {{")?;

        // constructor from the original
        let args = join(members, Member::forward);
        writeln!(f, "{INDENT}public {type_name}({original} original) {{")?;
        writeln!(f, "{INDENT}{INDENT}this({args});")?;
        writeln!(f, "{INDENT}}}")?;
        writeln!(f)?;

        // back to the original
        writeln!(f, "{INDENT}public {original} toOriginal() {{")?;
        writeln!(f, "{INDENT}{INDENT}{original} obj = new {original}();")?;
        for member in members {
            f.write_str(&member.reverse())?;
        }
        writeln!(f, "{INDENT}{INDENT}return obj;")?;
        writeln!(f, "{INDENT}}}")?;

        writeln!(f, "}}")
    }
}

fn join<T>(items: &[T], f: impl Fn(&T) -> String) -> String {
    items.iter().map(f).collect::<Vec<_>>().join(", ")
}

///
/// TESTS
///
