use crate::{
    Diagnostic, Diagnostics, EmitSink, GenerateError, GeneratedArtifact, generate_class,
};
use dtogen_schema::prelude::*;
use tracing::{debug, error, info, warn};

///
/// Report
/// Outcome of one processing pass.
///

#[derive(Clone, Debug, Default)]
pub struct Report {
    /// Qualified names of emitted units, in emission order.
    pub emitted: Vec<String>,
    pub diagnostics: Diagnostics,
}

impl Report {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

///
/// Processor
///
/// Runs generation for each tagged class and emits the results. A failure
/// is reported against the class that caused it and never stops the
/// remaining classes.
///

pub struct Processor<'a, P: ?Sized, S> {
    provider: &'a P,
    sink: S,
}

impl<'a, P, S> Processor<'a, P, S>
where
    P: MetadataProvider + ?Sized,
    S: EmitSink,
{
    pub const fn new(provider: &'a P, sink: S) -> Self {
        Self { provider, sink }
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Process every class in order; untagged classes are skipped.
    pub fn process<'c, I>(&mut self, classes: I) -> Report
    where
        I: IntoIterator<Item = &'c ClassDescriptor>,
    {
        let mut report = Report::default();

        for class in classes {
            if !class.generate_dto {
                continue;
            }

            let element = self.provider.qualified_name(class);
            let before = report.emitted.len();
            match self.process_class(class, &mut report.emitted) {
                Ok(()) if report.emitted.len() == before => {
                    warn!(class = %element, "no fields selected, nothing generated");
                    report.diagnostics.push(Diagnostic::warning(
                        element,
                        "no fields selected for any DTO, nothing generated",
                    ));
                }
                Ok(()) => {
                    let count = report.emitted.len() - before;
                    info!(class = %element, count, "generated DTOs");
                }
                Err(diagnostic) => {
                    error!(class = %element, "{}", diagnostic.message);
                    report.diagnostics.push(diagnostic);
                }
            }
        }

        report
    }

    // process_class
    // misuse is reported without generating anything
    fn process_class(
        &mut self,
        class: &ClassDescriptor,
        emitted: &mut Vec<String>,
    ) -> Result<(), Diagnostic> {
        let element = self.provider.qualified_name(class);

        if !class.kind.is_class() {
            return Err(Diagnostic::error(
                element,
                format!(
                    "generate_dto can only be applied to classes, found {}",
                    class.kind
                ),
            ));
        }

        self.generate_and_emit(class, emitted)
            .map_err(|e| Diagnostic::error(element, format!("error generating DTO: {e}")))
    }

    // generate_and_emit
    // everything is rendered before the first unit is emitted; units written
    // before a failing emit stay recorded in `emitted`
    fn generate_and_emit(
        &mut self,
        class: &ClassDescriptor,
        emitted: &mut Vec<String>,
    ) -> Result<(), GenerateError> {
        let artifacts = generate_class(self.provider, class)?;

        for artifact in artifacts {
            self.emit(&artifact)?;
            emitted.push(artifact.qualified_name());
        }

        Ok(())
    }

    fn emit(&mut self, artifact: &GeneratedArtifact) -> Result<(), GenerateError> {
        debug!(unit = %artifact.qualified_name(), "emitting");
        self.sink
            .emit(&artifact.package, &artifact.type_name, &artifact.body)?;

        Ok(())
    }
}
