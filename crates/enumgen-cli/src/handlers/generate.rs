//! Generate command handler

use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use enumgen_core::{EnumTransformer, JavaRenderer};
use std::fs;
use tracing::{debug, info, instrument};

/// Handle the generate command
#[instrument(skip(config, output), fields(definition = %args.definition.display()))]
pub fn handle_generate(
    args: GenerateArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let _timer = Timer::new("generate_command");

    let package = args
        .package
        .as_deref()
        .unwrap_or(&config.generator.package);
    let out_dir = args
        .out_dir
        .as_deref()
        .unwrap_or(&config.generator.out_dir);

    info!(package, out_dir = %out_dir.display(), "starting generation");
    output.info(&format!(
        "Generating enum classes from {}",
        args.definition.display()
    ))?;

    let model = super::load_definition(&args.definition)?;
    if model.enums.is_empty() {
        output.warning("No enumerations found in the interface definition")?;
        return Ok(());
    }

    let transformer = EnumTransformer::new(package);
    let renderer = JavaRenderer::new();

    if !args.dry_run {
        fs::create_dir_all(out_dir)?;
    }

    let mut written = 0usize;
    for enum_model in &model.enums {
        let record = transformer.transform(enum_model);
        let source = renderer.render(&record)?;
        let file_name = renderer.file_name(&record);

        debug!(
            class = %record.class_name,
            kind = %record.kind,
            members = record.params.len(),
            "rendered enum class"
        );

        if args.dry_run {
            output.info(&format!("  [dry-run] {file_name} ({})", record.kind))?;
        } else {
            let path = out_dir.join(&file_name);
            fs::write(&path, source)?;
            output.info(&format!("  wrote {}", path.display()))?;
            written += 1;
        }
    }

    if args.dry_run {
        output.success(&format!(
            "✓ {} enum class(es) generated (dry run, nothing written)",
            model.enums.len()
        ))?;
    } else {
        output.success(&format!(
            "✓ {} enum class(es) written to {}",
            written,
            out_dir.display()
        ))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use std::path::PathBuf;

    fn write_definition(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("api.json");
        fs::write(
            &path,
            r#"{
                "enums": [
                    {
                        "name": "ButtonName",
                        "elements": { "OK": { "name": "OK" } }
                    },
                    {
                        "name": "Language",
                        "elements": { "EN-US": { "name": "EN-US", "internal_name": "EN-US" } }
                    }
                ]
            }"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_generate_writes_one_file_per_enum() {
        let dir = tempfile::tempdir().unwrap();
        let definition = write_definition(dir.path());
        let out_dir = dir.path().join("generated");

        let args = GenerateArgs {
            definition,
            package: Some("org.acme.enums".to_string()),
            out_dir: Some(out_dir.clone()),
            dry_run: false,
        };
        let mut output = OutputWriter::new(OutputFormat::Human, false, true);

        handle_generate(args, &Config::default(), &mut output).unwrap();

        let button = fs::read_to_string(out_dir.join("ButtonName.java")).unwrap();
        assert!(button.starts_with("package org.acme.enums;\n"));
        let language = fs::read_to_string(out_dir.join("Language.java")).unwrap();
        assert!(language.contains("import java.util.EnumSet;"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let definition = write_definition(dir.path());
        let out_dir = dir.path().join("generated");

        let args = GenerateArgs {
            definition,
            package: None,
            out_dir: Some(out_dir.clone()),
            dry_run: true,
        };
        let mut output = OutputWriter::new(OutputFormat::Human, false, true);

        handle_generate(args, &Config::default(), &mut output).unwrap();
        assert!(!out_dir.exists());
    }

    #[test]
    fn test_missing_definition_is_file_not_found() {
        let args = GenerateArgs {
            definition: PathBuf::from("/nonexistent/api.json"),
            package: None,
            out_dir: None,
            dry_run: true,
        };
        let mut output = OutputWriter::new(OutputFormat::Human, false, true);

        let err = handle_generate(args, &Config::default(), &mut output).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
