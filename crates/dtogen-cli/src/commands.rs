use crate::{
    cli::{GenerateArgs, PrintArgs, SchemaArgs},
    settings::Settings,
};
use anyhow::{Context, Result, anyhow, bail};
use dtogen_build::{FsSink, MemorySink, Processor, Report, generate_class};
use dtogen_schema::{
    load::load_files,
    node::{ClassDescriptor, Schema},
};
use std::{fs, process::ExitCode};
use tracing::info;

// generate
pub fn generate(settings: &Settings, args: &GenerateArgs) -> Result<ExitCode> {
    let schema = load(settings, &args.schema)?;
    let out_dir = settings.out_dir(args.out.as_deref());

    if settings.clean(args.clean) && out_dir.exists() {
        info!(dir = %out_dir.display(), "cleaning output directory");
        fs::remove_dir_all(&out_dir)
            .with_context(|| format!("failed to clean {}", out_dir.display()))?;
    }

    let report = Processor::new(&schema, FsSink::new(&out_dir)).process(schema.classes());
    for name in &report.emitted {
        println!("wrote {name}");
    }

    Ok(finish(&report))
}

// check
pub fn check(settings: &Settings, args: &SchemaArgs) -> Result<ExitCode> {
    let schema = load(settings, args)?;

    let report = Processor::new(&schema, MemorySink::new()).process(schema.classes());
    for name in &report.emitted {
        println!("{name}");
    }

    Ok(finish(&report))
}

// print
pub fn print(settings: &Settings, args: &PrintArgs) -> Result<ExitCode> {
    let schema = load(settings, &args.schema)?;
    let class = find_class(&schema, &args.class)?;
    if !class.kind.is_class() {
        bail!(
            "generate_dto can only be applied to classes, '{}' is {}",
            class.qualified_name(),
            class.kind
        );
    }

    let artifacts = generate_class(&schema, class)
        .with_context(|| format!("error generating DTO for {}", class.qualified_name()))?;

    for (i, artifact) in artifacts.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("// {}", artifact.relative_path().display());
        print!("{}", artifact.body);
    }

    Ok(ExitCode::SUCCESS)
}

fn load(settings: &Settings, args: &SchemaArgs) -> Result<Schema> {
    let paths = settings.schemas(args)?;
    let schema = load_files(&paths)?;
    info!(classes = schema.len(), files = paths.len(), "schema loaded");

    Ok(schema)
}

// find_class
// qualified name first, then a unique simple name
fn find_class<'a>(schema: &'a Schema, name: &str) -> Result<&'a ClassDescriptor> {
    if let Some(class) = schema.get_class(name) {
        return Ok(class);
    }

    let mut matches = schema.classes().filter(|c| c.name == name);
    match (matches.next(), matches.next()) {
        (Some(class), None) => Ok(class),
        (Some(_), Some(_)) => Err(anyhow!(
            "class name '{name}' is ambiguous, use the qualified name"
        )),
        (None, _) => Err(anyhow!("class '{name}' not found")),
    }
}

fn finish(report: &Report) -> ExitCode {
    for diagnostic in report.diagnostics.iter() {
        eprintln!("{diagnostic}");
    }

    if report.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtogen_build::Diagnostic;
    use dtogen_config_build::Config;
    use std::path::Path;

    fn shop_args() -> SchemaArgs {
        SchemaArgs {
            schemas: vec![
                Path::new(env!("CARGO_MANIFEST_DIR")).join("../../schema/demo/shop.toml"),
            ],
        }
    }

    fn bare_settings() -> Settings {
        Settings {
            config: Config::default(),
            origin: None,
        }
    }

    fn generate_args(out: &Path, clean: bool) -> GenerateArgs {
        GenerateArgs {
            schema: shop_args(),
            out: Some(out.to_path_buf()),
            clean,
        }
    }

    #[test]
    fn generate_writes_units_and_clean_allows_a_rerun() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let settings = bare_settings();
        let order = out.join("com/acme/shop/OrderDTO.java");

        let code = generate(&settings, &generate_args(&out, false)).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(order.is_file());

        // second pass collides with the files already written
        let code = generate(&settings, &generate_args(&out, false)).unwrap();
        assert_eq!(code, ExitCode::FAILURE);

        let stale = out.join("Stale.java");
        fs::write(&stale, "old").unwrap();
        let code = generate(&settings, &generate_args(&out, true)).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(order.is_file());
        assert!(!stale.exists());
    }

    #[test]
    fn check_succeeds_on_the_demo_schema() {
        let code = check(&bare_settings(), &shop_args()).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn missing_schemas_is_an_error() {
        assert!(check(&bare_settings(), &SchemaArgs::default()).is_err());
    }

    #[test]
    fn finish_fails_only_on_errors() {
        let mut report = Report::default();
        report.diagnostics.push(Diagnostic::warning("p.A", "nothing selected"));
        assert_eq!(finish(&report), ExitCode::SUCCESS);

        report.diagnostics.push(Diagnostic::error("p.B", "broken"));
        assert_eq!(finish(&report), ExitCode::FAILURE);
    }

    #[test]
    fn find_class_accepts_unique_simple_names() {
        let schema = Schema::from_classes(vec![
            ClassDescriptor::new("a", "Order"),
            ClassDescriptor::new("a", "Item"),
            ClassDescriptor::new("b", "Item"),
        ])
        .unwrap();

        assert_eq!(find_class(&schema, "a.Item").unwrap().package, "a");
        assert_eq!(find_class(&schema, "Order").unwrap().package, "a");
        assert!(find_class(&schema, "Item").is_err());
        assert!(find_class(&schema, "Nope").is_err());
    }
}
