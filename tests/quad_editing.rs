//! End-to-end exercises of the editing flow a host canvas drives: placing
//! points click by click, undoing, sealing the quad, hit-testing, zooming,
//! duplicating, and painting with and without ground-sample data.

use quadbox::{
    dvec2, Gsd, GsdTable, HighlightMode, NoGsd, PaintContext, PaintOp, RecordingPainter, Shape,
    ShapeStyle, SvgPainter, GSD_MISS_AREA,
};

fn draw_quad(corners: [(f64, f64); 4]) -> Shape {
    let mut shape = Shape::new();
    for (x, y) in corners {
        shape.add_point(dvec2(x, y));
    }
    shape.close();
    shape
}

#[test]
fn interactive_drawing_flow() {
    let mut shape = Shape::with_label("building", Some("site_04.tif".to_string()));

    // Click four corners; a stray fifth click is swallowed.
    shape.add_point(dvec2(0.0, 0.0));
    shape.add_point(dvec2(40.0, 0.0));
    shape.add_point(dvec2(40.0, 30.0));
    // Misclick, undo, re-click.
    shape.add_point(dvec2(38.0, 31.0));
    assert_eq!(shape.pop_point(), Some(dvec2(38.0, 31.0)));
    shape.add_point(dvec2(0.0, 30.0));
    shape.add_point(dvec2(99.0, 99.0));
    assert_eq!(shape.len(), 4);

    shape.close();
    assert!(shape.is_closed());

    // Hover near a corner, then grab and drag it.
    let hit = shape.nearest_vertex(dvec2(39.6, 0.4), 1.0);
    assert_eq!(hit, Some(1));
    shape.highlight_vertex(1, HighlightMode::NearVertex);
    shape.highlight_vertex(1, HighlightMode::MoveVertex);
    shape.move_vertex_by(1, dvec2(2.0, 0.0));
    assert_eq!(shape[1], dvec2(42.0, 0.0));
    shape.highlight_clear();

    // Drag the whole box and bring it back.
    shape.move_by(dvec2(5.0, 5.0));
    shape.move_by(dvec2(-5.0, -5.0));
    assert_eq!(shape[0], dvec2(0.0, 0.0));

    let rect = shape.bounding_rect().unwrap();
    assert_eq!(rect.origin(), dvec2(0.0, 0.0));
    assert_eq!(rect.width(), 42.0);
    assert!(shape.contains_point(dvec2(20.0, 15.0)).unwrap());
    assert!(!shape.contains_point(dvec2(60.0, 15.0)).unwrap());
}

#[test]
fn painting_with_ground_sample_data() {
    let mut table = GsdTable::new();
    table.insert("site_04.tif", Gsd::new(0.25, 0.5));

    let mut shape = draw_quad([(0.0, 0.0), (40.0, 0.0), (40.0, 30.0), (0.0, 30.0)]);
    shape.image_name = Some("site_04.tif".to_string());

    let style = ShapeStyle::default();
    let mut painter = RecordingPainter::new();
    shape.paint(
        &mut painter,
        &PaintContext {
            style: &style,
            show_box_size: true,
            gsd: &table,
        },
    );

    // 40 px * 0.25 m/px by 30 px * 0.5 m/px.
    assert_eq!(painter.texts(), vec!["10.0 x 15.0 m"]);
    assert_eq!(shape.area(), Some(150.0));
}

#[test]
fn repaint_after_losing_gsd_entry_degrades_safely() {
    let mut table = GsdTable::new();
    table.insert("a.tif", Gsd::new(1.0, 1.0));

    let mut shape = draw_quad([(0.0, 0.0), (20.0, 0.0), (20.0, 10.0), (0.0, 10.0)]);
    shape.image_name = Some("a.tif".to_string());

    let style = ShapeStyle::default();
    let ctx = PaintContext {
        style: &style,
        show_box_size: false,
        gsd: &table,
    };
    let mut painter = RecordingPainter::new();
    shape.paint(&mut painter, &ctx);
    assert_eq!(shape.area(), Some(200.0));

    // Same shape repainted against a host without geo data.
    let mut painter = RecordingPainter::new();
    shape.paint(
        &mut painter,
        &PaintContext {
            style: &style,
            show_box_size: false,
            gsd: &NoGsd,
        },
    );
    assert_eq!(shape.area(), Some(GSD_MISS_AREA));
}

#[test]
fn duplicate_then_drag_leaves_original_untouched() {
    let mut shape = draw_quad([(0.0, 0.0), (20.0, 0.0), (20.0, 10.0), (0.0, 10.0)]);
    shape.label = Some("car".to_string());
    shape.selected = true;

    let mut copy = shape.duplicate();
    copy.move_by(dvec2(30.0, 0.0));
    copy.selected = true;
    shape.selected = false;

    assert_eq!(shape[0], dvec2(0.0, 0.0));
    assert_eq!(copy[0], dvec2(30.0, 0.0));
    assert_eq!(copy.label.as_deref(), Some("car"));
    assert!(copy.is_closed());
}

#[test]
fn zoomed_out_pending_shape_renders_thicker_strokes() {
    let mut shape = Shape::new();
    shape.add_point(dvec2(0.0, 0.0));
    shape.add_point(dvec2(10.0, 0.0));
    shape.set_scale(0.5);

    let style = ShapeStyle::default();
    let mut painter = RecordingPainter::new();
    shape.paint(
        &mut painter,
        &PaintContext {
            style: &style,
            show_box_size: true,
            gsd: &NoGsd,
        },
    );

    match painter.ops()[0] {
        PaintOp::SetStroke { width, .. } => assert_eq!(width, 4.0),
        ref other => panic!("expected SetStroke first, got {other:?}"),
    }
    // A two-point pending shape never attempts the size label.
    assert!(painter.texts().is_empty());
    assert_eq!(shape.area(), None);
}

#[test]
fn svg_export_of_a_labeled_quad() {
    let mut table = GsdTable::new();
    table.insert("roof.png", Gsd::new(0.5, 0.5));

    let mut shape = draw_quad([(0.0, 0.0), (20.0, 0.0), (20.0, 10.0), (0.0, 10.0)]);
    shape.image_name = Some("roof.png".to_string());
    shape.filled = true;

    let style = ShapeStyle::default();
    let mut painter = SvgPainter::new();
    shape.paint(
        &mut painter,
        &PaintContext {
            style: &style,
            show_box_size: true,
            gsd: &table,
        },
    );
    let svg = painter.finish();

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("<polyline points=\"0,0 20,0 20,10 0,10 0,0\""));
    assert!(svg.contains(">10.0 x 5.0 m</text>"));
    // Outline fill uses the default translucent fill color.
    assert!(svg.contains("<polygon points=\"0,0 20,0 20,10 0,10 0,0\" fill=\"rgba(255,0,0,0.502)\"/>"));
}
