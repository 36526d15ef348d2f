//! `folio build` command implementation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_page::{DocsData, Page, RenderedPage, RendererTable};
use rayon::prelude::*;

use crate::error::CliError;
use crate::output::Output;
use crate::renderers::{render_html, renderer_table};

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Page data JSON produced by the documentation extractor.
    data: PathBuf,

    /// Output directory for rendered pages (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

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

impl BuildArgs {
    /// Execute the build command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output_dir: self.output_dir,
            strict: self.strict.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let output_dir = &config.output_resolved.dir;

        let data = DocsData::load(&self.data)?;
        let pages: Vec<&Page> = data.pages().collect();
        check_file_names(&pages)?;

        output.field("Data", self.data.display());
        output.field("Output", output_dir.display());
        std::fs::create_dir_all(output_dir)?;

        let table = renderer_table(&config);
        let results: Vec<Result<RenderedPage, CliError>> = pages
            .par_iter()
            .map(|page| build_page(page, &table, &config, output_dir))
            .collect();

        let mut failed_nodes = 0;
        for result in results {
            failed_nodes += result?.errors.len();
        }

        output.rendered(&format!("{} page(s)", pages.len()), output_dir);
        output.failures(failed_nodes);

        if config.render.strict && failed_nodes > 0 {
            return Err(CliError::Strict {
                count: failed_nodes,
            });
        }

        Ok(())
    }
}

/// Render one page into the output directory.
fn build_page(
    page: &Page,
    table: &RendererTable,
    config: &Config,
    output_dir: &Path,
) -> Result<RenderedPage, CliError> {
    let (rendered, html) = render_html(page, table, config);

    let path = output_dir.join(format!("{}.html", page_file_name(&page.reference)));
    std::fs::write(&path, html)?;
    tracing::info!(reference = %page.reference, path = %path.display(), "Rendered page");

    Ok(rendered)
}

/// File stem for a page reference.
///
/// Characters outside `[A-Za-z0-9._-]` become `_`; an empty reference maps
/// to `index`.
fn page_file_name(reference: &str) -> String {
    if reference.is_empty() {
        return "index".to_owned();
    }
    reference
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Reject page sets where two references map to the same output file.
fn check_file_names(pages: &[&Page]) -> Result<(), CliError> {
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(pages.len());
    for page in pages {
        let name = page_file_name(&page.reference);
        if let Some(other) = seen.insert(name.clone(), &page.reference) {
            return Err(CliError::Validation(format!(
                "Pages '{other}' and '{}' both map to {name}.html",
                page.reference
            )));
        }
    }
    Ok(())
}
