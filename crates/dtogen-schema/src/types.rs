use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Identifier type used by a relation when none is given (boxed 32-bit int).
pub const DEFAULT_ID_TYPE: &str = "java.lang.Integer";

/// Names that denote the universal root type; walks stop before it.
pub const UNIVERSAL_ROOT: [&str; 2] = ["java.lang.Object", "Object"];

const PRIMITIVES: [&str; 9] = [
    "boolean", "byte", "char", "double", "float", "int", "long", "short", "void",
];

///
/// ClassKind
/// What sort of type a descriptor stands for. Only `Class` can carry
/// the generate tag.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[remain::sorted]
pub enum ClassKind {
    Annotation,
    #[default]
    Class,
    Enum,
    Interface,
    Record,
}

impl ClassKind {
    #[must_use]
    pub const fn is_class(self) -> bool {
        matches!(self, Self::Class)
    }
}

/// True when `name` is the universal root type.
#[must_use]
pub fn is_universal_root(name: &str) -> bool {
    UNIVERSAL_ROOT.contains(&name.trim())
}

/// True when `name` is a primitive kind.
#[must_use]
pub fn is_primitive(name: &str) -> bool {
    PRIMITIVES.contains(&name.trim())
}

/// Strip generic arguments, `Base<T>` -> `Base`.
#[must_use]
pub fn erase_generics(name: &str) -> &str {
    name.split_once('<').map_or(name, |(head, _)| head).trim()
}
