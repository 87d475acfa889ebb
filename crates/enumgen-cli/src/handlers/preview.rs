//! Preview command handler

use crate::cli::PreviewArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use enumgen_core::{EnumTransformer, JavaRenderer};
use tracing::instrument;

/// Handle the preview command
#[instrument(skip(config, output), fields(definition = %args.definition.display()))]
pub fn handle_preview(args: PreviewArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("preview_command");

    let package = args
        .package
        .as_deref()
        .unwrap_or(&config.generator.package);

    let model = super::load_definition(&args.definition)?;

    let selected: Vec<_> = match &args.enum_name {
        Some(name) => {
            let found = model
                .enums
                .iter()
                .find(|e| e.name == *name)
                .ok_or_else(|| Error::EnumNotFound { name: name.clone() })?;
            vec![found]
        }
        None => model.enums.iter().collect(),
    };

    let transformer = EnumTransformer::new(package);
    let renderer = JavaRenderer::new();

    for enum_model in selected {
        let record = transformer.transform(enum_model);
        if args.source {
            output.raw(&renderer.render(&record)?)?;
        } else {
            output.record(&record)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use std::path::PathBuf;

    #[test]
    fn test_unknown_enum_name_errors() {
        let dir = tempfile::tempdir().unwrap();
        let definition = dir.path().join("api.json");
        std::fs::write(&definition, r#"{ "enums": [] }"#).unwrap();

        let args = PreviewArgs {
            definition,
            enum_name: Some("Missing".to_string()),
            package: None,
            source: false,
        };
        let mut output = OutputWriter::new(OutputFormat::Human, false, true);

        let err = handle_preview(args, &Config::default(), &mut output).unwrap_err();
        assert!(matches!(err, Error::EnumNotFound { .. }));
    }

    #[test]
    fn test_preview_all_enums_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let definition = dir.path().join("api.json");
        std::fs::write(
            &definition,
            r#"{
                "enums": [
                    { "name": "Result", "elements": { "SUCCESS": { "name": "SUCCESS" } } }
                ]
            }"#,
        )
        .unwrap();

        let args = PreviewArgs {
            definition,
            enum_name: None,
            package: None,
            source: true,
        };
        let mut output = OutputWriter::new(OutputFormat::Human, false, true);

        handle_preview(args, &Config::default(), &mut output).unwrap();
    }

    #[test]
    fn test_missing_definition_file() {
        let args = PreviewArgs {
            definition: PathBuf::from("/nonexistent/api.json"),
            enum_name: None,
            package: None,
            source: false,
        };
        let mut output = OutputWriter::new(OutputFormat::Human, false, true);

        let err = handle_preview(args, &Config::default(), &mut output).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
