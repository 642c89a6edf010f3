use crate::{node::Schema, prelude::*};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// LoadError
///

#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("failed to read schema file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse schema file {path:?}: {source}")]
    Parse { path: PathBuf, source: ParseError },

    #[error("unsupported schema file extension: {0:?} (expected .toml or .json)")]
    UnknownFormat(PathBuf),

    #[error("schema validation failed: {0}")]
    Validation(ErrorTree),
}

///
/// ParseError
///

#[derive(Debug, ThisError)]
pub enum ParseError {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

///
/// Format
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Parse one schema document into its class descriptors.
    pub fn parse(self, src: &str) -> Result<Vec<ClassDescriptor>, ParseError> {
        let file: SchemaFile = match self {
            Self::Toml => toml::from_str(src)?,
            Self::Json => serde_json::from_str(src)?,
        };

        Ok(file.classes)
    }
}

///
/// SchemaFile
/// On-disk shape: a list of `class` tables.
///

#[derive(Debug, Deserialize)]
struct SchemaFile {
    #[serde(default, rename = "class", alias = "classes")]
    classes: Vec<ClassDescriptor>,
}

/// Read one schema file.
pub fn load_file(path: &Path) -> Result<Vec<ClassDescriptor>, LoadError> {
    let format = Format::from_path(path).ok_or_else(|| LoadError::UnknownFormat(path.into()))?;
    let src = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.into(),
        source,
    })?;

    format.parse(&src).map_err(|source| LoadError::Parse {
        path: path.into(),
        source,
    })
}

/// Read and merge several schema files into one validated schema.
pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<Schema, LoadError> {
    let mut classes = Vec::new();
    for path in paths {
        classes.extend(load_file(path.as_ref())?);
    }

    Schema::from_classes(classes).map_err(LoadError::Validation)
}
