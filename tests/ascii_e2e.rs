//! End-to-end tests for text-art rendering.
//!
//! These tests drive whole images through the public API:
//! - Known small images render to exact text
//! - Gradients and patterns produce meaningful character variation
//! - Every mode agrees with the shared grid geometry
//! - Formatted output (ANSI, HTML) wraps the same glyphs

use glyphcast::ascii::{
    grid_dimensions, CharSet, PixelBuffer, Ramp, RenderMode, RenderOptions, Rendered,
    SampleFilter,
};
use glyphcast::renderer::{self, OutputFormat};
use glyphcast::{
    render_atkinson, render_bayer, render_braille, render_classic, render_color, render_edges,
    render_floyd,
};
use std::collections::HashSet;

/// Helper to create a test image with the named pattern.
fn make_test_image(pattern: &str, width: u32, height: u32) -> PixelBuffer {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = match pattern {
                // Left dark, right bright
                "gradient_h" => (x * 255 / (width - 1).max(1)) as u8,
                // Top dark, bottom bright
                "gradient_v" => (y * 255 / (height - 1).max(1)) as u8,
                "checker" => {
                    if (x / 4 + y / 4) % 2 == 0 {
                        0
                    } else {
                        255
                    }
                }
                // Bright disc on a dark background
                "disc" => {
                    let dx = x as f32 - width as f32 / 2.0;
                    let dy = y as f32 - height as f32 / 2.0;
                    let r = width.min(height) as f32 / 3.0;
                    if dx * dx + dy * dy <= r * r {
                        255
                    } else {
                        0
                    }
                }
                _ => 128,
            };
            data.extend_from_slice(&[v, v, v]);
        }
    }
    PixelBuffer::from_rgb(width, height, &data).unwrap()
}

fn lines(text: &str) -> Vec<&str> {
    text.split_terminator('\n').collect()
}

// ==================== Exact output ====================

#[test]
fn test_two_by_two_classic() {
    let src =
        PixelBuffer::from_rgb(2, 2, &[0, 0, 0, 255, 255, 255, 0, 0, 0, 255, 255, 255]).unwrap();
    let options = RenderOptions::default()
        .with_width(2)
        .with_ramp(Ramp::custom("01"))
        .with_aspect_ratio(1.0);

    assert_eq!(render_classic(&src, &options).unwrap(), "01\n01\n");
    assert_eq!(
        render_classic(&src, &options.clone().with_invert(true)).unwrap(),
        "10\n10\n"
    );
    // Pure black and white survive dithering unchanged
    assert_eq!(render_floyd(&src, &options).unwrap(), "01\n01\n");
    assert_eq!(render_atkinson(&src, &options).unwrap(), "01\n01\n");
}

#[test]
fn test_two_by_two_color_cells() {
    let src =
        PixelBuffer::from_rgb(2, 2, &[0, 0, 0, 255, 255, 255, 0, 0, 0, 255, 255, 255]).unwrap();
    let options = RenderOptions::default()
        .with_width(2)
        .with_ramp(Ramp::custom("01"))
        .with_aspect_ratio(1.0);

    let grid = render_color(&src, &options).unwrap();
    let glyphs: Vec<char> = grid.cells().iter().map(|c| c.glyph).collect();
    assert_eq!(glyphs, vec!['0', '1', '0', '1']);
    assert_eq!(grid.cells()[1].r, 255);
    assert_eq!(grid.to_text(), "01\n01\n");
}

#[test]
fn test_braille_half_dark_block() {
    // Left dot column black, right column white
    let values = [0u8, 255, 0, 255, 0, 255, 0, 255];
    let rgb: Vec<u8> = values.iter().flat_map(|&v| [v, v, v]).collect();
    let src = PixelBuffer::from_rgb(2, 4, &rgb).unwrap();
    let options = RenderOptions::default().with_width(1).with_aspect_ratio(1.0);

    // Dots 1, 2, 3, 7
    assert_eq!(render_braille(&src, &options).unwrap(), "\u{2847}\n");
    assert_eq!(
        render_braille(&src, &options.with_invert(true)).unwrap(),
        "\u{28B8}\n"
    );
}

// ==================== Patterns ====================

#[test]
fn test_gradient_produces_progressive_characters() {
    let src = make_test_image("gradient_h", 200, 50);
    let options = RenderOptions::default()
        .with_width(40)
        .with_ramp(CharSet::Simple);
    let text = render_classic(&src, &options).unwrap();

    let ramp = CharSet::Simple.chars();
    for line in lines(&text) {
        let indices: Vec<usize> = line
            .chars()
            .map(|c| ramp.iter().position(|&g| g == c).unwrap())
            .collect();
        assert!(
            indices.windows(2).all(|w| w[0] <= w[1]),
            "row not monotonic: {}",
            line
        );
        assert_eq!(indices[0], 0);
        // Nearest sampling never lands on the last source column
        let distinct: HashSet<usize> = indices.iter().copied().collect();
        assert!(distinct.len() >= ramp.len() - 1, "{}", line);
    }
}

#[test]
fn test_disc_is_recognizable() {
    let src = make_test_image("disc", 80, 80);
    let options = RenderOptions::default()
        .with_width(20)
        .with_aspect_ratio(1.0)
        .with_ramp(CharSet::Binary);
    let text = render_classic(&src, &options).unwrap();
    let rows = lines(&text);

    // Corners are background, center is the disc
    assert_eq!(rows[0].chars().next(), Some('█'));
    assert_eq!(rows[10].chars().nth(10), Some(' '));
}

#[test]
fn test_different_charsets_produce_different_output() {
    let src = make_test_image("gradient_v", 60, 60);
    let mut outputs = HashSet::new();
    for cs in [
        CharSet::Standard,
        CharSet::Detailed,
        CharSet::Simple,
        CharSet::Blocks,
        CharSet::Dots,
        CharSet::Binary,
        CharSet::Tech,
    ] {
        let options = RenderOptions::default().with_width(30).with_ramp(cs);
        outputs.insert(render_classic(&src, &options).unwrap());
    }
    assert_eq!(outputs.len(), 7);
}

#[test]
fn test_edges_trace_checkerboard() {
    let src = make_test_image("checker", 32, 32);
    let options = RenderOptions::default()
        .with_width(32)
        .with_aspect_ratio(1.0)
        .with_threshold(100);
    let text = render_edges(&src, &options).unwrap();

    let glyphs: HashSet<char> = text.chars().filter(|&c| c != '\n').collect();
    assert!(glyphs.contains(&'│'));
    assert!(glyphs.contains(&'─'));
    assert!(glyphs.contains(&' '));
}

#[test]
fn test_dithered_modes_spread_midtones() {
    let src = make_test_image("flat", 32, 32);
    let options = RenderOptions::default()
        .with_width(32)
        .with_aspect_ratio(1.0)
        .with_ramp(CharSet::Binary);

    // 128 sits between the two levels; error diffusion mixes both glyphs
    for text in [
        render_floyd(&src, &options).unwrap(),
        render_atkinson(&src, &options).unwrap(),
    ] {
        assert!(text.contains('█'));
        assert!(text.contains(' '));
    }
    // Classic has no error to spread
    let classic = render_classic(&src, &options).unwrap();
    let glyphs: HashSet<char> = classic.chars().filter(|&c| c != '\n').collect();
    assert_eq!(glyphs.len(), 1);

    // Bayer spreads a midtone over the ramp by matrix position
    let bayer = render_bayer(&src, &options.with_ramp(CharSet::Simple)).unwrap();
    let glyphs: HashSet<char> = bayer.chars().filter(|&c| c != '\n').collect();
    assert!(glyphs.len() > 4, "{:?}", glyphs);
}

// ==================== Geometry ====================

#[test]
fn test_aspect_ratio_preserved() {
    let src = make_test_image("gradient_h", 320, 240);
    for (aspect, expected_rows) in [(0.5, 30), (1.0, 60), (0.25, 15)] {
        let options = RenderOptions::default()
            .with_width(80)
            .with_aspect_ratio(aspect);
        assert_eq!(grid_dimensions(320, 240, 80, aspect), (80, expected_rows));
        let text = render_classic(&src, &options).unwrap();
        assert_eq!(lines(&text).len(), expected_rows as usize);
    }
}

#[test]
fn test_area_filter_keeps_grid_shape() {
    let src = make_test_image("checker", 64, 64);
    let nearest = RenderOptions::default().with_width(16).with_aspect_ratio(1.0);
    let area = nearest.clone().with_filter(SampleFilter::Area);

    let a = render_classic(&src, &nearest).unwrap();
    let b = render_classic(&src, &area).unwrap();
    assert_eq!(lines(&a).len(), lines(&b).len());
    // 4x4 source blocks land whole in each cell either way
    assert_eq!(a, b);
}

#[test]
fn test_area_filter_averages_fine_detail() {
    // 1-pixel stripes average to 127 under Area
    let mut rgb = Vec::new();
    for _y in 0..8 {
        for x in 0..8 {
            let v = if x % 2 == 0 { 0 } else { 255 };
            rgb.extend_from_slice(&[v, v, v]);
        }
    }
    let src = PixelBuffer::from_rgb(8, 8, &rgb).unwrap();
    let options = RenderOptions::default()
        .with_width(4)
        .with_aspect_ratio(1.0)
        .with_ramp(Ramp::custom("0123"));

    assert_eq!(render_classic(&src, &options).unwrap(), "0000\n".repeat(4));
    let area = options.with_filter(SampleFilter::Area);
    assert_eq!(render_classic(&src, &area).unwrap(), "1111\n".repeat(4));
}

#[test]
fn test_all_modes_through_dispatch() {
    let src = make_test_image("disc", 48, 48);
    let options = RenderOptions::default().with_width(24);
    for mode in RenderMode::ALL {
        let rendered = mode.render(&src, &options).unwrap();
        assert!(!rendered.text().is_empty(), "{}", mode.name());
        assert_eq!(
            matches!(rendered, Rendered::Colored(_)),
            mode == RenderMode::Color
        );
    }
}

// ==================== Presentation ====================

#[test]
fn test_ansi_and_html_wrap_same_glyphs() {
    let src = make_test_image("gradient_h", 16, 8);
    let options = RenderOptions::default().with_width(8).with_ramp(CharSet::Simple);
    let rendered = RenderMode::Color.render(&src, &options).unwrap();

    let plain = renderer::format(&rendered, OutputFormat::Plain);
    let ansi = renderer::format(&rendered, OutputFormat::Ansi);
    let html = renderer::format(&rendered, OutputFormat::Html);

    assert_eq!(plain, rendered.text());
    assert!(ansi.contains("\x1b[38;2;"));
    assert_eq!(ansi.matches("\x1b[0m\n").count(), lines(&plain).len());
    assert!(html.starts_with("<pre>"));
    assert!(html.ends_with("</pre>\n"));
    assert!(html.contains("<span style=\"color:rgb("));
}
