use blockflow::{
    AssetBundle, Blockflow, BlockflowError, BlockflowOptions, LineStyle, RecordingRenderer,
    VizData,
};
use blockflow_core::AssetError;

fn fixture_data() -> VizData {
    serde_json::from_str(
        r#"{
            "assets": ["sangbleu.woff"],
            "assetsFolder": "assets/",
            "blocks": [
                {
                    "title": "Alpha",
                    "width": 40.0,
                    "height": 60.0,
                    "dots": [
                        { "dotType": "web", "color": 16711680, "x": 10.0, "y": 10.0 },
                        { "dotType": "print", "color": 255, "x": 20.0, "y": 20.0 }
                    ]
                },
                {
                    "title": "Beta",
                    "width": 40.0,
                    "height": 60.0,
                    "dots": [
                        { "dotType": "web", "color": 11141120, "x": 5.0, "y": 5.0 }
                    ]
                },
                {
                    "width": 40.0,
                    "height": 60.0
                }
            ]
        }"#,
    )
    .unwrap()
}

fn ready_flow() -> Blockflow<RecordingRenderer> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let options = BlockflowOptions::new(400.0, 300.0, fixture_data()).with_seed(42);
    let (mut flow, handle) = Blockflow::new(options, RecordingRenderer::new()).unwrap();
    handle.complete(AssetBundle::default());
    assert!(flow.poll_assets().unwrap());
    flow
}

#[test]
fn stays_loading_until_assets_resolve() {
    let options = BlockflowOptions::new(400.0, 300.0, fixture_data()).with_seed(42);
    let (mut flow, handle) = Blockflow::new(options, RecordingRenderer::new()).unwrap();

    assert!(!flow.ready());
    assert!(!flow.poll_assets().unwrap());
    assert!(flow.blocks().is_empty());

    handle.complete(AssetBundle::default());
    assert!(flow.poll_assets().unwrap());
    assert!(flow.ready());
    assert_eq!(flow.blocks().len(), 3);
    assert_eq!(flow.profiling.layout_count, 1);
}

#[test]
fn asset_failure_surfaces_once() {
    let options = BlockflowOptions::new(400.0, 300.0, fixture_data());
    let (mut flow, handle) = Blockflow::new(options, RecordingRenderer::new()).unwrap();
    handle.fail("missing font");

    assert_eq!(
        flow.poll_assets(),
        Err(BlockflowError::Assets(AssetError::Failed(
            "missing font".to_string()
        )))
    );
    // The boundary is consumed; later polls report ready rather than
    // replaying the error.
    assert!(flow.ready());
}

#[test]
fn dropped_handle_cancels_loading() {
    let options = BlockflowOptions::new(400.0, 300.0, fixture_data());
    let (mut flow, handle) = Blockflow::new(options, RecordingRenderer::new()).unwrap();
    drop(handle);

    assert_eq!(
        flow.poll_assets(),
        Err(BlockflowError::Assets(AssetError::Cancelled))
    );
}

#[test]
fn rejects_degenerate_viewport() {
    let options = BlockflowOptions::new(0.0, 300.0, fixture_data());
    assert!(matches!(
        Blockflow::new(options, RecordingRenderer::new()),
        Err(BlockflowError::Config(_))
    ));
}

#[test]
fn first_layout_builds_scene_and_resizes_surface() {
    let flow = ready_flow();

    // 3 block rects + 3 dot markers, titles on the two named blocks.
    let scene = flow.scene();
    let rects = scene
        .blocks
        .items
        .iter()
        .filter(|item| matches!(item, blockflow_scene::DisplayItem::Rect { .. }))
        .count();
    let texts = scene
        .blocks
        .items
        .iter()
        .filter(|item| matches!(item, blockflow_scene::DisplayItem::Text { .. }))
        .count();
    assert_eq!(rects, 6);
    assert_eq!(texts, 2);

    // One curve: "web" has two dots, "print" only one.
    assert_eq!(scene.lines.items.len(), 1);

    // Surface width tracks the DIP width; height never drops below the
    // viewport and grows to min_height when content overflows.
    let renderer = flow.renderer();
    assert!(!renderer.resizes.is_empty());
    assert_eq!(renderer.size.0, 400.0);
    let expected_height = 300.0_f32.max(flow.size().min_height);
    assert_eq!(renderer.size.1, expected_height);
}

#[test]
fn tick_records_frames() {
    let mut flow = ready_flow();
    flow.tick();
    flow.tick();

    assert_eq!(flow.profiling.frame_count, 2);
    let renderer = flow.renderer();
    assert_eq!(renderer.frames.len(), 2);
    let frame = renderer.last_frame().unwrap();
    assert_eq!(frame.rects, 6);
    assert_eq!(frame.polylines, 1);
}

#[test]
fn resize_reflows_and_omitted_sides_fall_back() {
    let mut flow = ready_flow();
    let layouts_before = flow.profiling.layout_count;

    flow.on_resize(Some(800.0), None).unwrap();
    assert_eq!(flow.size().w, 800.0);
    assert_eq!(flow.size().h, 300.0);
    assert_eq!(flow.profiling.layout_count, layouts_before + 1);

    flow.on_resize(None, None).unwrap();
    assert_eq!(flow.size().w, 800.0);
    assert_eq!(flow.profiling.layout_count, layouts_before + 2);
}

#[test]
fn line_style_change_regenerates_curves_only() {
    let mut flow = ready_flow();
    let layouts_before = flow.profiling.layout_count;
    let lines_before = flow.profiling.line_count;

    let default_points = match &flow.scene().lines.items[0] {
        blockflow_scene::DisplayItem::Polyline { points, .. } => points.len(),
        other => panic!("expected a polyline, got {other:?}"),
    };
    // Single span with the default budget of 150: anchor + 150 samples.
    assert_eq!(default_points, 151);

    flow.set_line_style(LineStyle {
        segments: 30,
        ..LineStyle::default()
    });

    let resampled = match &flow.scene().lines.items[0] {
        blockflow_scene::DisplayItem::Polyline { points, .. } => points.len(),
        other => panic!("expected a polyline, got {other:?}"),
    };
    assert_eq!(resampled, 31);
    assert_eq!(flow.profiling.layout_count, layouts_before);
    assert_eq!(flow.profiling.line_count, lines_before + 1);
}

#[test]
fn block_positions_stay_inside_the_viewport_width() {
    let flow = ready_flow();
    let wr = flow.size().wr;
    for block in flow.blocks() {
        assert!(block.position.x >= 0.0);
        assert!(
            block.position.x + block.width() <= wr + 1e-3,
            "block at {} overflows viewport {wr}",
            block.position.x
        );
    }
}
