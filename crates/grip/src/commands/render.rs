//! `grip render` command implementation.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use grip_config::{CliSettings, Config, Theme};
use grip_renderer::Parser;

use super::page::render_page;
use crate::error::CliError;
use crate::output::Output;

/// Title used for standalone pages rendered from stdin.
const STDIN_TITLE: &str = "stdin";

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render; `-` or nothing reads stdin.
    input: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover grip.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Color theme: light, dark or auto (overrides config).
    #[arg(short, long)]
    theme: Option<Theme>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wrap the fragment in a complete HTML page.
    #[arg(long)]
    standalone: bool,

    /// Page title for standalone output (overrides config).
    #[arg(long)]
    title: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, input or output fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            theme: self.theme,
            standalone: self.standalone.then_some(true),
            title: self.title.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }

        let input = self.input_path();
        let markdown = read_input(input)?;
        let parser = Parser::new(config.render.theme.as_str());

        let mut writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(io::stdout().lock()),
        };

        if config.output.standalone {
            let fragment = String::from_utf8_lossy(&parser.md_to_html(&markdown)).into_owned();
            let title = config
                .output
                .title
                .clone()
                .unwrap_or_else(|| default_title(input));
            let page = render_page(&title, config.render.theme, &fragment)?;
            writer.write_all(page.as_bytes())?;
        } else {
            parser.render_to(&markdown, &mut writer)?;
        }
        writer.flush()?;

        if let Some(path) = &self.output {
            Output::new().success(&format!("Rendered HTML to {}", path.display()));
        }
        Ok(())
    }

    /// Input file, or `None` for stdin.
    fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|path| *path != Path::new("-"))
    }
}

/// Read markdown from a file or stdin.
fn read_input(path: Option<&Path>) -> Result<Vec<u8>, CliError> {
    match path {
        Some(path) => Ok(std::fs::read(path)?),
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Page title derived from the input file name.
fn default_title(path: Option<&Path>) -> String {
    match path.and_then(Path::file_name) {
        Some(name) => name.to_string_lossy().into_owned(),
        None => STDIN_TITLE.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(input: Option<PathBuf>, output: Option<PathBuf>, standalone: bool) -> RenderArgs {
        RenderArgs {
            input,
            config: None,
            theme: Some(Theme::Light),
            output,
            standalone,
            title: None,
            verbose: false,
        }
    }

    #[test]
    fn test_default_title() {
        assert_eq!(
            default_title(Some(Path::new("docs/README.md"))),
            "README.md"
        );
        assert_eq!(default_title(None), STDIN_TITLE);
    }

    #[test]
    fn test_dash_means_stdin() {
        let args = args(Some(PathBuf::from("-")), None, false);
        assert_eq!(args.input_path(), None);
    }

    #[test]
    fn test_read_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.md");
        std::fs::write(&path, "# Hi").unwrap();
        assert_eq!(read_input(Some(&path)).unwrap(), b"# Hi");
    }

    #[test]
    fn test_execute_writes_fragment() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("note.md");
        let output = dir.path().join("note.html");
        std::fs::write(&input, "- [x] done :tada:").unwrap();
        let config = dir.path().join("grip.toml");
        std::fs::write(&config, "").unwrap();

        let mut args = args(Some(input), Some(output.clone()), false);
        args.config = Some(config);
        args.execute().unwrap();

        let html = std::fs::read_to_string(output).unwrap();
        assert!(html.contains(r#"<li class="task-list-item">"#), "{html}");
        assert!(html.contains("🎉"), "{html}");
        assert!(!html.contains("<html"), "{html}");
    }

    #[test]
    fn test_execute_writes_standalone_page() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("guide.md");
        let output = dir.path().join("guide.html");
        std::fs::write(&input, "> [!TIP]\n> Read this").unwrap();
        let config = dir.path().join("grip.toml");
        std::fs::write(&config, "[output]\ntitle = \"Guide\"\n").unwrap();

        let mut args = args(Some(input), Some(output.clone()), true);
        args.config = Some(config);
        args.execute().unwrap();

        let html = std::fs::read_to_string(output).unwrap();
        assert!(html.contains("<title>Guide</title>"), "{html}");
        assert!(html.contains("markdown-alert-tip"), "{html}");
    }

    #[test]
    fn test_execute_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("grip.toml");
        std::fs::write(&config, "").unwrap();

        let mut args = args(Some(dir.path().join("missing.md")), None, false);
        args.config = Some(config);

        assert!(matches!(args.execute(), Err(CliError::Io(_))));
    }
}
