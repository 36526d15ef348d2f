//! Renderer table setup and page rendering shared by commands.

use folio_config::Config;
use folio_page::{Page, PageRenderer, RenderedPage, RendererTable, SilentRenderer};

/// Build the tag renderer table for a configuration.
///
/// Starts from the built-in renderers; tags listed in `render.ignore_tags`
/// render as no output, overriding a built-in of the same name.
pub(crate) fn renderer_table(config: &Config) -> RendererTable {
    let mut table = RendererTable::with_builtins();
    for tag in &config.render.ignore_tags {
        table.insert(tag.as_str(), SilentRenderer);
    }
    tracing::debug!(tags = ?table.names(), "Renderer table ready");
    table
}

/// Render a page and its HTML.
pub(crate) fn render_html(
    page: &Page,
    table: &RendererTable,
    config: &Config,
) -> (RenderedPage, String) {
    let rendered = PageRenderer::new(table).render(page);
    let html = rendered.to_html(&config.html_options());
    (rendered, html)
}

#[cfg(test)]
mod tests {
    use folio_page::TagNode;

    use super::*;

    fn config_with_ignored(tags: &[&str]) -> Config {
        let mut config = Config::default();
        config.render.ignore_tags = tags.iter().map(|t| (*t).to_owned()).collect();
        config
    }

    #[test]
    fn test_default_table_has_builtins() {
        let table = renderer_table(&Config::default());
        assert_eq!(table.names(), vec!["heading"]);
    }

    #[test]
    fn test_ignored_tags_render_nothing() {
        let config = config_with_ignored(&["method"]);
        let table = renderer_table(&config);
        let page = Page::new("p")
            .with_tag(TagNode::new("method"))
            .with_markup("<p>x</p>");

        let (rendered, html) = render_html(&page, &table, &config);

        assert!(!rendered.has_errors());
        assert_eq!(
            html,
            r#"<div class="docs-page" data-page-id="p"><div class="docs-section pt-running-text"><p>x</p></div></div>"#
        );
    }

    #[test]
    fn test_ignore_overrides_builtin() {
        let config = config_with_ignored(&["heading"]);
        let table = renderer_table(&config);
        let page = Page::new("p").with_tag(
            TagNode::new("heading")
                .with_value("Title")
                .with_attribute("level", 1),
        );

        let (rendered, _) = render_html(&page, &table, &config);
        assert!(rendered.nodes.is_empty());
    }

    #[test]
    fn test_render_html_uses_configured_classes() {
        let mut config = Config::default();
        config.html.page_class = "page".to_owned();
        let table = renderer_table(&config);

        let (_, html) = render_html(&Page::new("ref"), &table, &config);
        assert_eq!(html, r#"<div class="page" data-page-id="ref"></div>"#);
    }
}
