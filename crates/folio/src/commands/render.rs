//! `folio render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_page::{DocsData, Page};

use crate::error::CliError;
use crate::output::Output;
use crate::renderers::{render_html, renderer_table};

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Page data JSON produced by the documentation extractor.
    data: PathBuf,

    /// Reference of the page to render (required when the data has several pages).
    #[arg(short, long)]
    page: Option<String>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fail if any content node renders as an error.
    #[arg(long)]
    strict: bool,

    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            strict: self.strict.then_some(true),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let data = DocsData::load(&self.data)?;
        let page = select_page(&data, self.page.as_deref())?;

        let table = renderer_table(&config);
        let (rendered, html) = render_html(page, &table, &config);
        output.failures(rendered.errors.len());

        if let Some(path) = &self.output {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &html)?;
            output.rendered(&format!("page '{}'", page.reference), path);
        } else {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
        }

        if config.render.strict && rendered.has_errors() {
            return Err(CliError::Strict {
                count: rendered.errors.len(),
            });
        }

        Ok(())
    }
}

/// Pick the page to render.
///
/// Without a reference, the data must hold exactly one page.
fn select_page<'a>(data: &'a DocsData, reference: Option<&str>) -> Result<&'a Page, CliError> {
    if let Some(reference) = reference {
        return data
            .get(reference)
            .ok_or_else(|| CliError::Validation(format!("Page not found: {reference}")));
    }

    let mut pages = data.pages();
    match (pages.next(), pages.next()) {
        (Some(page), None) => Ok(page),
        (None, _) => Err(CliError::Validation("Page data contains no pages".to_owned())),
        (Some(_), Some(_)) => Err(CliError::Validation(format!(
            "Page data contains {} pages; select one with --page",
            data.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(references: &[&str]) -> DocsData {
        DocsData::from_pages(references.iter().map(|r| Page::new(*r)))
    }

    #[test]
    fn test_select_single_page() {
        let data = data(&["intro"]);
        assert_eq!(select_page(&data, None).unwrap().reference, "intro");
    }

    #[test]
    fn test_select_by_reference() {
        let data = data(&["a", "b"]);
        assert_eq!(select_page(&data, Some("b")).unwrap().reference, "b");
    }

    #[test]
    fn test_select_requires_reference_for_many_pages() {
        let data = data(&["a", "b"]);
        let err = select_page(&data, None).unwrap_err();
        assert!(err.to_string().contains("--page"));
    }

    #[test]
    fn test_select_unknown_reference() {
        let data = data(&["a"]);
        let err = select_page(&data, Some("missing")).unwrap_err();
        assert_eq!(err.to_string(), "Page not found: missing");
    }

    #[test]
    fn test_select_empty_data() {
        let err = select_page(&DocsData::default(), None).unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
    }

    #[test]
    fn test_execute_writes_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let data_path = temp_dir.path().join("page.json");
        let config_path = temp_dir.path().join("folio.toml");
        let out_path = temp_dir.path().join("out/page.html");
        std::fs::write(
            &data_path,
            r#"{"reference": "intro", "contents": ["<p>Intro</p>", {"tag": "interface"}]}"#,
        )
        .unwrap();
        std::fs::write(&config_path, "").unwrap();

        let args = RenderArgs {
            data: data_path,
            page: None,
            output: Some(out_path.clone()),
            strict: false,
            config: Some(config_path),
            verbose: false,
        };
        args.execute().unwrap();

        let html = std::fs::read_to_string(out_path).unwrap();
        assert_eq!(
            html,
            r#"<div class="docs-page" data-page-id="intro"><div class="docs-section pt-running-text"><p>Intro</p></div><h3><code>Unknown @tag: interface</code></h3></div>"#
        );
    }

    #[test]
    fn test_execute_strict_fails_but_writes() {
        let temp_dir = tempfile::tempdir().unwrap();
        let data_path = temp_dir.path().join("page.json");
        let config_path = temp_dir.path().join("folio.toml");
        let out_path = temp_dir.path().join("page.html");
        std::fs::write(
            &data_path,
            r#"{"reference": "intro", "contents": [{"tag": "interface"}]}"#,
        )
        .unwrap();
        std::fs::write(&config_path, "").unwrap();

        let args = RenderArgs {
            data: data_path,
            page: None,
            output: Some(out_path.clone()),
            strict: true,
            config: Some(config_path),
            verbose: false,
        };
        let err = args.execute().unwrap_err();

        assert!(matches!(err, CliError::Strict { count: 1 }));
        assert!(out_path.exists());
    }
}
