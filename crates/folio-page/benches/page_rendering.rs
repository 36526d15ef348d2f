//! Benchmarks for page rendering performance.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use folio_page::{HtmlOptions, Page, PageRenderer, RenderedNode, RendererTable, TagNode};

/// Generate a page alternating headings, markup blocks and interface tags.
fn generate_page(sections: usize, blocks_per_section: usize) -> Page {
    let mut page = Page::new("bench").with_title("Benchmark");

    for i in 0..sections {
        page = page.with_tag(
            TagNode::new("heading")
                .with_value(format!("Section {i}"))
                .with_attribute("level", 2)
                .with_attribute("route", format!("bench.section-{i}")),
        );
        for j in 0..blocks_per_section {
            page = page.with_markup(format!(
                "<p>This is block {j} in section {i}. It contains <strong>bold</strong> text.</p>"
            ));
        }
        page = page.with_tag(TagNode::new("interface").with_value(format!("IProps{i}")));
    }
    page
}

fn table() -> RendererTable {
    RendererTable::with_builtins().with_fn("interface", |tag, _key, _page| {
        Ok(Some(
            RenderedNode::element("pre")
                .with_attr("class", "docs-interface")
                .with_child(RenderedNode::text(tag.value_str().unwrap_or_default())),
        ))
    })
}

fn bench_render_simple(c: &mut Criterion) {
    let page = Page::new("simple").with_markup("<p>Simple content.</p>");
    let table = RendererTable::new();
    let renderer = PageRenderer::new(&table);

    c.bench_function("render_simple_page", |b| {
        b.iter(|| renderer.render(&page));
    });
}

fn bench_render_unknown_tags(c: &mut Criterion) {
    let page = generate_page(10, 2);
    let table = RendererTable::new();
    let renderer = PageRenderer::new(&table);

    c.bench_function("render_unknown_tags_10_sections", |b| {
        b.iter(|| renderer.render(&page));
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let table = table();
    let renderer = PageRenderer::new(&table);
    let options = HtmlOptions::default();

    let mut group = c.benchmark_group("render_by_size");

    for (sections, blocks) in [(5, 2), (20, 3), (50, 5)] {
        let page = generate_page(sections, blocks);
        group.throughput(Throughput::Elements(page.contents.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("html", format!("{sections}s_{blocks}b")),
            &page,
            |b, page| b.iter(|| renderer.render(page).to_html(&options)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render_simple,
    bench_render_unknown_tags,
    bench_render_varying_sizes
);
criterion_main!(benches);
