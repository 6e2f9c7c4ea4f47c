//! Benchmarks for the layout pass and transition round trips
//!
//! Run with: cargo bench layout

use std::time::Duration;

use offcanvas::{MemoryDocument, MemoryElement, OffCanvasConfig, Side, Slidebars, Style};

fn main() {
    divan::main();
}

fn page(panel_count: usize) -> MemoryDocument {
    let mut doc = MemoryDocument::new(Some("900px".to_string()));
    doc.push(
        MemoryElement::new("div")
            .attr("canvas", "container")
            .style("height", "600px"),
    );
    for i in 0..panel_count {
        let side = Side::ALL[i % Side::ALL.len()];
        let style = Style::ALL[i % Style::ALL.len()];
        doc.push(
            MemoryElement::new("div")
                .attr("off-canvas", format!("panel-{} {} {}", i, side, style))
                .style("width", "250px")
                .style("height", "120px"),
        );
    }
    doc
}

// ============================================================================
// Init (discovery + layout pass)
// ============================================================================

#[divan::bench(args = [4, 32, 256])]
fn init(bencher: divan::Bencher, panel_count: usize) {
    bencher
        .with_inputs(|| Slidebars::new(page(panel_count), OffCanvasConfig::default()))
        .bench_values(|mut sb| {
            sb.init().unwrap();
            divan::black_box(sb)
        });
}

// ============================================================================
// Create (layout pass re-runs over every panel)
// ============================================================================

#[divan::bench(args = [4, 32, 256])]
fn create_into(bencher: divan::Bencher, panel_count: usize) {
    bencher
        .with_inputs(|| {
            let mut sb = Slidebars::new(page(panel_count), OffCanvasConfig::default());
            sb.init().unwrap();
            sb
        })
        .bench_values(|mut sb| {
            sb.create("extra", "left", "push", None).unwrap();
            divan::black_box(sb)
        });
}

// ============================================================================
// Open/close round trip
// ============================================================================

#[divan::bench]
fn open_close_round_trip(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| {
            let mut sb = Slidebars::new(page(4), OffCanvasConfig::default());
            sb.init().unwrap();
            sb
        })
        .bench_values(|mut sb| {
            sb.open("panel-1").unwrap();
            sb.advance(Duration::from_millis(300));
            sb.close(Some("panel-1")).unwrap();
            sb.advance(Duration::from_millis(300));
            divan::black_box(sb)
        });
}
