use std::{
    collections::BTreeMap,
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// Extension of written source units.
pub const SOURCE_EXTENSION: &str = "java";

///
/// EmitError
///

#[derive(Debug, ThisError)]
pub enum EmitError {
    #[error("source unit '{0}' already exists")]
    AlreadyExists(String),

    #[error("failed to write source unit '{name}' to {path:?}: {source}")]
    Io {
        name: String,
        path: PathBuf,
        source: io::Error,
    },
}

///
/// EmitSink
/// Receives each generated unit exactly once per qualified name.
///

pub trait EmitSink {
    fn emit(&mut self, package: &str, type_name: &str, body: &str) -> Result<(), EmitError>;
}

impl<S: EmitSink + ?Sized> EmitSink for &mut S {
    fn emit(&mut self, package: &str, type_name: &str, body: &str) -> Result<(), EmitError> {
        (**self).emit(package, type_name, body)
    }
}

/// `package.TypeName`, or the bare type name in the default package.
#[must_use]
pub fn qualified(package: &str, type_name: &str) -> String {
    if package.is_empty() {
        type_name.to_string()
    } else {
        format!("{package}.{type_name}")
    }
}

/// Path of a unit relative to a source root, one directory per package segment.
#[must_use]
pub fn relative_path(package: &str, type_name: &str) -> PathBuf {
    let mut path: PathBuf = package.split('.').filter(|s| !s.is_empty()).collect();
    path.push(format!("{type_name}.{SOURCE_EXTENSION}"));

    path
}

///
/// MemorySink
/// Keeps units in memory, keyed by qualified name.
///

#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    units: BTreeMap<String, String>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, qualified_name: &str) -> Option<&str> {
        self.units.get(qualified_name).map(String::as_str)
    }

    pub fn units(&self) -> impl Iterator<Item = (&str, &str)> {
        self.units.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl EmitSink for MemorySink {
    fn emit(&mut self, package: &str, type_name: &str, body: &str) -> Result<(), EmitError> {
        let name = qualified(package, type_name);
        if self.units.contains_key(&name) {
            return Err(EmitError::AlreadyExists(name));
        }
        self.units.insert(name, body.to_string());

        Ok(())
    }
}

///
/// FsSink
/// Writes units under a source root; never replaces an existing file.
///

#[derive(Clone, Debug)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl EmitSink for FsSink {
    fn emit(&mut self, package: &str, type_name: &str, body: &str) -> Result<(), EmitError> {
        let name = qualified(package, type_name);
        let path = self.root.join(relative_path(package, type_name));
        let io_err = |source| EmitError::Io {
            name: name.clone(),
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(EmitError::AlreadyExists(name.clone()));
            }
            Err(e) => return Err(io_err(e)),
        };
        file.write_all(body.as_bytes()).map_err(io_err)?;

        Ok(())
    }
}
