//! SVG painter backend.
//!
//! Renders the painter operation stream as an SVG fragment: line subpaths
//! become polylines (polygons when filled), vertex markers become rect and
//! ellipse elements. Useful for snapshot tests and for exporting annotated
//! images without a GUI toolkit in the loop.

use crate::painter::Painter;
use crate::path::{Path, PathEl};
use crate::types::{Color, Pt};

/// Painter that accumulates SVG elements.
#[derive(Clone, Debug)]
pub struct SvgPainter {
    body: String,
    stroke_color: Color,
    stroke_width: f64,
    font_size: f64,
    font_bold: bool,
}

impl Default for SvgPainter {
    fn default() -> Self {
        SvgPainter {
            body: String::new(),
            stroke_color: Color::BLACK,
            stroke_width: 1.0,
            font_size: 8.0,
            font_bold: false,
        }
    }
}

impl SvgPainter {
    pub fn new() -> SvgPainter {
        SvgPainter::default()
    }

    /// Consume the painter and return the finished SVG document.
    pub fn finish(self) -> String {
        format!("<svg xmlns=\"http://www.w3.org/2000/svg\">\n{}</svg>", self.body)
    }

    fn emit_path(&mut self, path: &Path, paint: PaintAttrs) {
        let attrs = paint.attrs();
        let mut polyline: Vec<Pt> = Vec::new();
        for el in path.elements() {
            match *el {
                PathEl::MoveTo(p) => {
                    self.flush_polyline(&mut polyline, paint);
                    polyline.push(p);
                }
                PathEl::LineTo(p) => polyline.push(p),
                PathEl::Rect {
                    origin,
                    width,
                    height,
                } => {
                    self.flush_polyline(&mut polyline, paint);
                    self.body.push_str(&format!(
                        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}/>\n",
                        num(origin.x),
                        num(origin.y),
                        num(width),
                        num(height),
                        attrs,
                    ));
                }
                PathEl::Ellipse { center, rx, ry } => {
                    self.flush_polyline(&mut polyline, paint);
                    self.body.push_str(&format!(
                        "<ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\"{}/>\n",
                        num(center.x),
                        num(center.y),
                        num(rx),
                        num(ry),
                        attrs,
                    ));
                }
            }
        }
        self.flush_polyline(&mut polyline, paint);
    }

    fn flush_polyline(&mut self, polyline: &mut Vec<Pt>, paint: PaintAttrs) {
        if polyline.len() >= 2 {
            let points: Vec<String> = polyline
                .iter()
                .map(|p| format!("{},{}", num(p.x), num(p.y)))
                .collect();
            // Filled subpaths close implicitly, matching the even-odd
            // containment rule; stroked subpaths stay open.
            let tag = match paint {
                PaintAttrs::Stroke { .. } => "polyline",
                PaintAttrs::Fill(_) => "polygon",
            };
            self.body.push_str(&format!(
                "<{} points=\"{}\"{}/>\n",
                tag,
                points.join(" "),
                paint.attrs(),
            ));
        }
        polyline.clear();
    }
}

#[derive(Clone, Copy)]
enum PaintAttrs {
    Stroke { color: Color, width: f64 },
    Fill(Color),
}

impl PaintAttrs {
    fn attrs(self) -> String {
        match self {
            PaintAttrs::Stroke { color, width } => format!(
                " fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"",
                color,
                num(width)
            ),
            PaintAttrs::Fill(color) => format!(" fill=\"{}\"", color),
        }
    }
}

impl Painter for SvgPainter {
    fn set_stroke(&mut self, color: Color, width: f64) {
        self.stroke_color = color;
        self.stroke_width = width;
    }

    fn set_font(&mut self, point_size: f64, bold: bool) {
        self.font_size = point_size;
        self.font_bold = bold;
    }

    fn stroke_path(&mut self, path: &Path) {
        self.emit_path(
            path,
            PaintAttrs::Stroke {
                color: self.stroke_color,
                width: self.stroke_width,
            },
        );
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        self.emit_path(path, PaintAttrs::Fill(color));
    }

    fn draw_text(&mut self, anchor: Pt, text: &str) {
        let weight = if self.font_bold {
            " font-weight=\"bold\""
        } else {
            ""
        };
        self.body.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\"{}>{}</text>\n",
            num(anchor.x),
            num(anchor.y),
            num(self.font_size),
            weight,
            escape_text(text),
        ));
    }
}

/// Format a coordinate with at most 4 decimal places, trimming the fraction
/// entirely for whole numbers.
fn num(v: f64) -> String {
    let rounded = (v * 10_000.0).round() / 10_000.0;
    if rounded.fract() == 0.0 && rounded.abs() < 1e15 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::dvec2;

    #[test]
    fn num_trims_whole_values() {
        assert_eq!(num(10.0), "10");
        assert_eq!(num(-1.0), "-1");
        assert_eq!(num(2.5), "2.5");
        assert_eq!(num(0.333333333), "0.3333");
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(escape_text("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn svg_output_snapshot() {
        let mut painter = SvgPainter::new();
        painter.set_stroke(Color::rgba(0, 255, 0, 128), 2.0);

        let mut outline = Path::new();
        outline.move_to(dvec2(0.0, 0.0));
        outline.line_to(dvec2(10.0, 0.0));
        outline.line_to(dvec2(10.0, 5.0));
        outline.line_to(dvec2(0.0, 5.0));
        outline.line_to(dvec2(0.0, 0.0));
        painter.stroke_path(&outline);

        let mut markers = Path::new();
        markers.add_ellipse(dvec2(0.0, 0.0), 4.0, 4.0);
        markers.add_rect(dvec2(8.0, -2.0), 4.0, 4.0);
        painter.stroke_path(&markers);
        painter.fill_path(&markers, Color::rgb(0, 255, 0));

        painter.set_font(3.0, false);
        painter.draw_text(dvec2(0.0, -1.0), "10.0 x 5.0 pix.");

        insta::assert_snapshot!(painter.finish(), @r#"
        <svg xmlns="http://www.w3.org/2000/svg">
        <polyline points="0,0 10,0 10,5 0,5 0,0" fill="none" stroke="rgba(0,255,0,0.502)" stroke-width="2"/>
        <ellipse cx="0" cy="0" rx="4" ry="4" fill="none" stroke="rgba(0,255,0,0.502)" stroke-width="2"/>
        <rect x="8" y="-2" width="4" height="4" fill="none" stroke="rgba(0,255,0,0.502)" stroke-width="2"/>
        <ellipse cx="0" cy="0" rx="4" ry="4" fill="rgb(0,255,0)"/>
        <rect x="8" y="-2" width="4" height="4" fill="rgb(0,255,0)"/>
        <text x="0" y="-1" font-size="3">10.0 x 5.0 pix.</text>
        </svg>
        "#);
    }

    #[test]
    fn filled_polyline_becomes_polygon() {
        let mut painter = SvgPainter::new();
        let mut path = Path::new();
        path.move_to(dvec2(0.0, 0.0));
        path.line_to(dvec2(4.0, 0.0));
        path.line_to(dvec2(4.0, 4.0));
        painter.fill_path(&path, Color::rgba(255, 0, 0, 128));
        let svg = painter.finish();
        assert!(svg.contains("<polygon points=\"0,0 4,0 4,4\" fill=\"rgba(255,0,0,0.502)\"/>"));
    }
}
