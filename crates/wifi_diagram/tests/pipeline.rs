//! End-to-end tests: record text through layout to SVG

use wifi_diagram::*;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_two_ghz_record_to_pixels() {
    let records = parse_records("home,6,-65,20\n");
    let diagram = WifiSignalDiagram::new(DiagramConfig::default(), &records);

    let curves = diagram.curves();
    assert_eq!(curves[0].start, PlotUnitPoint { x: 37.0, y: 10.0 });
    assert_eq!(curves[0].mid, PlotUnitPoint { x: 47.0, y: 6.5 });
    assert_eq!(curves[0].end, PlotUnitPoint { x: 57.0, y: 10.0 });

    let layout = diagram.layout(CanvasSize::new(400.0, 300.0));
    assert_close(layout.metrics.x_scale, 3.5);
    assert_close(layout.metrics.y_scale, 23.1);

    let curve = &layout.curves[0];
    assert_close(curve.start.x, 45.0 + 37.0 * 3.5);
    assert_close(curve.mid.x, 45.0 + 47.0 * 3.5);
    assert_close(curve.mid.y, 28.0 + 6.5 * 23.1);
    assert_close(curve.end.y, 28.0 + 231.0);
}

#[test]
fn test_five_ghz_wide_channel() {
    let records = parse_records_strict("wide,100,-72,160").unwrap();
    let config = DiagramConfig::new(RadioBand::FiveGHz, AxisCeiling::Zero);
    let diagram = WifiSignalDiagram::new(config, &records);

    let curve = diagram.curves()[0];
    assert_eq!(curve.start.x, 36.0);
    assert_eq!(curve.mid.x, 52.0);
    assert_eq!(curve.end.x, 68.0);
    assert_close(curve.mid.y, 7.2);
}

#[test]
fn test_gap_channel_collapses() {
    for bandwidth in [20.0, 80.0, 160.0] {
        let span = bounds(GAP_CHANNEL, bandwidth, RadioBand::FiveGHz);
        assert_eq!(span.min, span.max);
        assert_eq!(span.min, center_position(GAP_CHANNEL, RadioBand::FiveGHz));
    }
}

#[test]
fn test_ceiling_shifts_curves_and_labels() {
    let records = vec![NetworkRecord::new("a", 6, -50.0, 20.0)];
    let canvas = CanvasSize::default();

    let zero = WifiSignalDiagram::new(DiagramConfig::default(), &records).layout(canvas);
    let minus_twenty = WifiSignalDiagram::new(
        DiagramConfig::new(RadioBand::TwoPointFourGHz, AxisCeiling::NegativeTwenty),
        &records,
    )
    .layout(canvas);

    assert_eq!(zero.gridlines.len(), 11);
    assert_eq!(minus_twenty.gridlines.len(), 9);
    assert_eq!(zero.y_labels[0].text, "0");
    assert_eq!(minus_twenty.y_labels[0].text, "-20");
    assert!(minus_twenty.curves[0].mid.y < zero.curves[0].mid.y);
}

#[test]
fn test_lenient_pipeline_drops_invalid_channels() {
    let text = "\
ok,36,-60,40
fallback,abc,-70
other_band,6,-50
";
    let records = retain_valid(parse_records(text), RadioBand::FiveGHz);
    assert_eq!(records.len(), 1);

    let diagram = WifiSignalDiagram::new(
        DiagramConfig::new(RadioBand::FiveGHz, AxisCeiling::NegativeTen),
        &records,
    );
    let svg = diagram.render_svg(CanvasSize::new(640.0, 320.0));
    assert!(svg.contains(">ok</text>"));
    assert!(!svg.contains(">other_band</text>"));
}

#[test]
fn test_five_ghz_axis_ticks() {
    let config = DiagramConfig::new(RadioBand::FiveGHz, AxisCeiling::Zero);
    let diagram = WifiSignalDiagram::new(config, &[]);
    let layout = diagram.layout(CanvasSize::new(600.0, 300.0));

    let labels: Vec<&str> = layout
        .x_ticks
        .iter()
        .filter_map(|tick| tick.label.as_ref().map(|l| l.text.as_str()))
        .collect();
    assert_eq!(
        labels,
        vec!["36", "40", "44", "48", "52", "56", "60", "64", "100", "116", "132", "149", "165"]
    );

    let gap = layout
        .x_ticks
        .iter()
        .find(|tick| tick.channel == GAP_CHANNEL)
        .unwrap();
    assert_close(gap.tick.start.x, layout.metrics.to_canvas(PlotUnitPoint { x: 48.0, y: 0.0 }).x);
}

#[test]
fn test_layout_serializes() {
    let records = parse_records("home,6,-65\ncafe,11,-80,40\n");
    let diagram = WifiSignalDiagram::new(DiagramConfig::default(), &records);
    let layout = diagram.layout(CanvasSize::default());

    let json = serde_json::to_value(&layout).unwrap();
    assert_eq!(json["curves"][0]["ssid"], "cafe");
    assert_eq!(json["curves"][0]["color"], "#FF0000");
    assert_eq!(json["x_axis_title"]["text"], "Wifi Channels");
}

#[test]
fn test_degenerate_canvas_does_not_panic() {
    let records = vec![NetworkRecord::new("a", 1, -40.0, 20.0)];
    let diagram = WifiSignalDiagram::new(DiagramConfig::default(), &records);
    let layout = diagram.layout(CanvasSize::new(10.0, 10.0));
    assert!(layout.metrics.x_scale < 0.0);
    assert!(layout.metrics.y_scale < 0.0);
    assert!(diagram.render_svg(CanvasSize::new(10.0, 10.0)).ends_with("</svg>"));
}

#[test]
fn test_config_file_drives_render() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diagram.json");
    std::fs::write(
        &path,
        r##"{"band": "5ghz", "style": {"background_color": "#000000", "colors": ["#00FF00"]}}"##,
    )
    .unwrap();

    let config = DiagramConfig::load(&path).unwrap();
    let records = vec![NetworkRecord::new("lab", 149, -55.0, 80.0)];
    let rendered = WifiSignalDiagram::new(config, &records).render(CanvasSize::default());

    assert!(matches!(
        &rendered.primitives[0],
        RenderPrimitive::Rect { fill, .. } if fill == "rgb(0, 0, 0)"
    ));
    assert!(rendered.primitives.iter().any(|p| matches!(
        p,
        RenderPrimitive::Path { stroke: Some(stroke), .. } if stroke == "rgb(0, 255, 0)"
    )));
}
