use std::fs;
use std::io::Write;
use std::path::Path;

use crate::cli::{Command, ExportArgs, PresetCommand};
use crate::clipboard::ClipboardBackend;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::export::{self, ExportFormat};
use crate::model::ButtonConfig;
use crate::presets::PresetStore;
use crate::preview;

pub fn load_button_config(path: &Path) -> AppResult<ButtonConfig> {
    let serialized = fs::read_to_string(path).map_err(|source| AppError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&serialized).map_err(|source| AppError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Command runner. Owns the preset store and borrows a clipboard backend so
/// tests can swap both out.
pub struct App<'a> {
    config: AppConfig,
    presets: PresetStore,
    clipboard: &'a dyn ClipboardBackend,
}

impl<'a> App<'a> {
    pub fn new(
        config: AppConfig,
        presets: PresetStore,
        clipboard: &'a dyn ClipboardBackend,
    ) -> Self {
        Self {
            config,
            presets,
            clipboard,
        }
    }

    pub fn presets(&self) -> &PresetStore {
        &self.presets
    }

    pub fn execute(&mut self, command: &Command, out: &mut dyn Write) -> AppResult<()> {
        match command {
            Command::Export(args) => self.export(args, out),
            Command::Defaults => {
                let defaults = serde_json::to_string_pretty(&ButtonConfig::default())?;
                writeln!(out, "{defaults}")?;
                Ok(())
            }
            Command::Presets(PresetCommand::List) => {
                for name in self.presets.names() {
                    writeln!(out, "{name}")?;
                }
                Ok(())
            }
            Command::Presets(PresetCommand::Save { name, input }) => {
                let config = match input {
                    Some(path) => load_button_config(path)?,
                    None => ButtonConfig::default(),
                };
                self.presets.save(name, &config)?;
                Ok(())
            }
        }
    }

    fn resolve_input(&self, args: &ExportArgs) -> AppResult<ButtonConfig> {
        if let Some(path) = &args.input {
            return load_button_config(path);
        }
        if let Some(name) = &args.preset {
            return self
                .presets
                .find(name)
                .map(|preset| preset.config.clone())
                .ok_or_else(|| AppError::UnknownPreset(name.clone()));
        }
        Ok(ButtonConfig::default())
    }

    fn export(&self, args: &ExportArgs, out: &mut dyn Write) -> AppResult<()> {
        let config = self.resolve_input(args)?;
        let format = args
            .format
            .or(self.config.default_format)
            .unwrap_or_default();

        let mut output = export::generate(&config, format);
        let preview_id = args
            .preview_id
            .as_deref()
            .or(self.config.preview_element_id.as_deref());
        if let (ExportFormat::Css, Some(element_id)) = (format, preview_id) {
            output = preview::scope_stylesheet(&output, element_id);
        }

        if args.copy {
            self.clipboard.copy_text(&output)?;
            tracing::info!(%format, "copied export to clipboard");
        } else {
            writeln!(out, "{output}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardResult;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingBackend {
        copied: RefCell<Vec<String>>,
    }

    impl ClipboardBackend for RecordingBackend {
        fn copy_text(&self, text: &str) -> ClipboardResult<()> {
            self.copied.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        path.push(format!("buttonsmith-app-{}-{nanos}", std::process::id()));
        path
    }

    fn with_temp_root<F: FnOnce(&Path)>(f: F) {
        let root = fixture_root();
        fs::create_dir_all(&root).unwrap();
        f(&root);
        let _ = fs::remove_dir_all(&root);
    }

    fn export_args() -> ExportArgs {
        ExportArgs {
            input: None,
            preset: None,
            format: None,
            preview_id: None,
            copy: false,
        }
    }

    fn run(app: &mut App<'_>, command: Command) -> AppResult<String> {
        let mut out = Vec::new();
        app.execute(&command, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn export_defaults_to_css_of_default_config() {
        with_temp_root(|root| {
            let clipboard = RecordingBackend::default();
            let mut app = App::new(
                AppConfig::default(),
                PresetStore::at(root.join("presets.json")),
                &clipboard,
            );
            let output = run(&mut app, Command::Export(export_args())).unwrap();
            assert_eq!(
                output,
                format!("{}\n", export::stylesheet(&ButtonConfig::default()))
            );
        });
    }

    #[test]
    fn export_uses_configured_default_format_and_preview_id() {
        with_temp_root(|root| {
            let clipboard = RecordingBackend::default();
            let config = AppConfig {
                default_format: Some(ExportFormat::Css),
                preview_element_id: Some("preview-button".to_string()),
            };
            let mut app = App::new(config, PresetStore::at(root.join("p.json")), &clipboard);
            let output = run(&mut app, Command::Export(export_args())).unwrap();
            assert!(output.starts_with("#preview-button {"));

            let args = ExportArgs {
                format: Some(ExportFormat::Tailwind),
                ..export_args()
            };
            let output = run(&mut app, Command::Export(args)).unwrap();
            assert!(!output.contains("#preview-button"));
            assert!(output.starts_with("w-auto "));
        });
    }

    #[test]
    fn export_reads_input_file() {
        with_temp_root(|root| {
            let mut config = ButtonConfig::default();
            config.layout.padding = crate::model::Spacing::uniform(12.0);
            let input = root.join("button.json");
            fs::write(&input, serde_json::to_string(&config).unwrap()).unwrap();

            let clipboard = RecordingBackend::default();
            let mut app = App::new(
                AppConfig::default(),
                PresetStore::at(root.join("p.json")),
                &clipboard,
            );
            let args = ExportArgs {
                input: Some(input),
                format: Some(ExportFormat::Tailwind),
                ..export_args()
            };
            let output = run(&mut app, Command::Export(args)).unwrap();
            assert!(output.contains(" p-[12px] "));
        });
    }

    #[test]
    fn export_reports_unparseable_input() {
        with_temp_root(|root| {
            let input = root.join("broken.json");
            fs::write(&input, "{").unwrap();
            let clipboard = RecordingBackend::default();
            let mut app = App::new(
                AppConfig::default(),
                PresetStore::at(root.join("p.json")),
                &clipboard,
            );
            let args = ExportArgs {
                input: Some(input),
                ..export_args()
            };
            let err = run(&mut app, Command::Export(args)).unwrap_err();
            assert!(matches!(err, AppError::ParseInput { .. }));
        });
    }

    #[test]
    fn export_copy_sends_output_to_clipboard() {
        with_temp_root(|root| {
            let clipboard = RecordingBackend::default();
            let mut app = App::new(
                AppConfig::default(),
                PresetStore::at(root.join("p.json")),
                &clipboard,
            );
            let args = ExportArgs {
                format: Some(ExportFormat::Tokens),
                copy: true,
                ..export_args()
            };
            let output = run(&mut app, Command::Export(args)).unwrap();
            assert!(output.is_empty());
            assert_eq!(
                *clipboard.copied.borrow(),
                vec![export::design_tokens(&ButtonConfig::default())]
            );
        });
    }

    #[test]
    fn presets_save_list_and_export_by_name() {
        with_temp_root(|root| {
            let clipboard = RecordingBackend::default();
            let mut app = App::new(
                AppConfig::default(),
                PresetStore::at(root.join("p.json")),
                &clipboard,
            );
            let save = Command::Presets(PresetCommand::Save {
                name: "primary".to_string(),
                input: None,
            });
            run(&mut app, save).unwrap();
            assert_eq!(app.presets().presets().len(), 1);

            let listed = run(&mut app, Command::Presets(PresetCommand::List)).unwrap();
            assert_eq!(listed, "primary\n");

            let args = ExportArgs {
                preset: Some("primary".to_string()),
                format: Some(ExportFormat::Tailwind),
                ..export_args()
            };
            let output = run(&mut app, Command::Export(args)).unwrap();
            assert_eq!(
                output,
                format!("{}\n", export::utility_classes(&ButtonConfig::default()))
            );

            let missing = ExportArgs {
                preset: Some("nope".to_string()),
                ..export_args()
            };
            let err = run(&mut app, Command::Export(missing)).unwrap_err();
            assert!(matches!(err, AppError::UnknownPreset(name) if name == "nope"));
        });
    }

    #[test]
    fn defaults_command_prints_parseable_config() {
        with_temp_root(|root| {
            let clipboard = RecordingBackend::default();
            let mut app = App::new(
                AppConfig::default(),
                PresetStore::at(root.join("p.json")),
                &clipboard,
            );
            let output = run(&mut app, Command::Defaults).unwrap();
            let parsed: ButtonConfig = serde_json::from_str(&output).unwrap();
            assert_eq!(parsed, ButtonConfig::default());
        });
    }
}
