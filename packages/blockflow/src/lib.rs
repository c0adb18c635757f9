//! Facade crate: owns the viewport, blocks, scene, and renderer, and wires
//! the layout engine and line generator into the resize / asset / frame
//! events.

use blockflow_core::assets::{self, AssetTicket};
use blockflow_core::lines;
use blockflow_core::{
    AssetError, Block, ConfigError, LayoutEngine, LayoutError, SeededRandom, Viewport,
};
use blockflow_scene::{DisplayItem, Scene};
use glam::Vec2;
use thiserror::Error;

pub use blockflow_core::{
    AssetBundle, AssetEntry, AssetHandle, BlockRecord, Color, DotRecord, LineStyle, VizData,
};
pub use blockflow_scene::{RecordingRenderer, Renderer};

const BLOCK_FILL: [f32; 4] = [0.96, 0.96, 0.94, 1.0];
const TITLE_COLOR: [f32; 4] = [0.1, 0.1, 0.1, 1.0];
const TITLE_FONT_SIZE: f32 = 12.0;
const DOT_MARKER_SIZE: f32 = 4.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BlockflowError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Assets(#[from] AssetError),
}

/// Construction input. `width` and `height` are required and must be
/// positive; everything else has defaults.
#[derive(Debug, Clone)]
pub struct BlockflowOptions {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
    pub auto_render: bool,
    pub mobile: bool,
    pub show_debug: bool,
    /// Fixed seed for reproducible layouts; entropy-seeded when absent.
    pub seed: Option<u64>,
    pub data: VizData,
}

impl BlockflowOptions {
    pub fn new(width: f32, height: f32, data: VizData) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio: 1.0,
            auto_render: true,
            mobile: false,
            show_debug: false,
            seed: None,
            data,
        }
    }

    pub fn with_mobile(mut self, mobile: bool) -> Self {
        self.mobile = mobile;
        self
    }

    pub fn with_device_pixel_ratio(mut self, ratio: f32) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_show_debug(mut self, show_debug: bool) -> Self {
        self.show_debug = show_debug;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Profiling {
    pub frame_count: u64,
    pub layout_count: u64,
    pub line_count: u64,
}

/// The orchestrator. Generic over the drawing backend so hosts can plug in
/// a real surface while tests record frames headlessly.
pub struct Blockflow<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    layout: LayoutEngine,
    line_style: LineStyle,
    rng: SeededRandom,
    data: VizData,
    blocks: Vec<Block>,
    scene: Scene,
    ticket: Option<AssetTicket>,
    auto_render: bool,
    show_debug: bool,
    pub profiling: Profiling,
}

impl<R: Renderer> Blockflow<R> {
    /// Validates the options, seeds the viewport, and opens the asset
    /// boundary. The returned handle must be resolved by the host; blocks
    /// are built and laid out once `poll_assets` observes the resolution.
    pub fn new(options: BlockflowOptions, renderer: R) -> Result<(Self, AssetHandle), BlockflowError> {
        let viewport = Viewport::new(options.width, options.height, options.device_pixel_ratio)?;
        let (handle, ticket) = assets::begin(
            options.data.assets.clone(),
            options.data.assets_folder.clone(),
        );
        let rng = match options.seed {
            Some(seed) => SeededRandom::new(seed),
            None => SeededRandom::from_entropy(),
        };

        tracing::info!(
            blocks = options.data.blocks.len(),
            mobile = options.mobile,
            "blockflow constructed, waiting for assets"
        );

        let flow = Self {
            renderer,
            viewport,
            layout: LayoutEngine::new(options.mobile),
            line_style: LineStyle::default(),
            rng,
            data: options.data,
            blocks: Vec::new(),
            scene: Scene::new(),
            ticket: Some(ticket),
            auto_render: options.auto_render,
            show_debug: options.show_debug,
            profiling: Profiling::default(),
        };
        Ok((flow, handle))
    }

    pub fn ready(&self) -> bool {
        self.ticket.is_none()
    }

    pub fn auto_render(&self) -> bool {
        self.auto_render
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn line_style(&self) -> &LineStyle {
        &self.line_style
    }

    pub fn size(&self) -> blockflow_core::Size {
        self.viewport.size()
    }

    /// Probes the asset boundary. On resolution, builds the blocks from the
    /// data payload and runs the first full layout. Returns whether the
    /// scene is ready; asset failure, timeout, or cancellation surfaces
    /// here, once.
    pub fn poll_assets(&mut self) -> Result<bool, BlockflowError> {
        let Some(ticket) = self.ticket.as_mut() else {
            return Ok(true);
        };
        match ticket.try_take() {
            Ok(Some(_bundle)) => {
                self.ticket = None;
                tracing::info!("assets complete");
                self.blocks = self.data.blocks.iter().map(Block::from_record).collect();
                self.reflow()?;
                Ok(true)
            }
            Ok(None) => Ok(false),
            Err(err) => {
                self.ticket = None;
                Err(err.into())
            }
        }
    }

    /// Host-driven viewport update; omitted sides fall back to the
    /// last-known dimensions.
    pub fn on_resize(
        &mut self,
        width: Option<f32>,
        height: Option<f32>,
    ) -> Result<(), BlockflowError> {
        self.viewport.resize(width, height);
        if self.ready() {
            self.reflow()?;
        } else {
            let (w, h) = self.viewport.size().render_size();
            self.renderer.resize(w, h);
        }
        Ok(())
    }

    /// Replaces the curve tunables and regenerates the lines in place.
    /// Layout and row membership are untouched.
    pub fn set_line_style(&mut self, style: LineStyle) {
        self.line_style = style;
        if self.ready() {
            self.regenerate_lines();
        }
    }

    /// Renders the current scene once. The host calls this per frame when
    /// `auto_render` is on; layout and line work always completes inside
    /// the event that triggered it, so a tick only ever observes settled
    /// state.
    pub fn tick(&mut self) {
        self.renderer.render(&self.scene);
        self.profiling.frame_count += 1;
    }

    /// Full pipeline for one layout pass: position blocks, rebuild the
    /// block layer, regenerate curves, then grow the surface to fit.
    fn reflow(&mut self) -> Result<(), BlockflowError> {
        let size = self.viewport.size();
        let report = self.layout.reflow(&mut self.blocks, &size, &mut self.rng)?;
        self.profiling.layout_count += 1;

        if self.show_debug {
            tracing::info!(
                max_per_row = report.max_per_row,
                rows = ?self.layout.rows(),
                rebuilt = report.rows_rebuilt,
                "layout pass"
            );
        }

        self.rebuild_block_layer();
        self.regenerate_lines();

        self.viewport.set_content_height(self.scene.content_height());
        let (w, h) = self.viewport.size().render_size();
        self.renderer.resize(w, h);
        Ok(())
    }

    fn rebuild_block_layer(&mut self) {
        self.scene.blocks.clear();
        for block in &self.blocks {
            self.scene.blocks.push(DisplayItem::Rect {
                min: block.position,
                size: Vec2::new(block.width(), block.height()),
                color: BLOCK_FILL,
            });
            if !block.title.is_empty() {
                self.scene.blocks.push(DisplayItem::Text {
                    pos: block.position,
                    content: block.title.clone(),
                    font_size: TITLE_FONT_SIZE,
                    color: TITLE_COLOR,
                });
            }
            for dot in block.dots() {
                let center = dot.global_point(block.position);
                self.scene.blocks.push(DisplayItem::Rect {
                    min: center - Vec2::splat(DOT_MARKER_SIZE / 2.0),
                    size: Vec2::splat(DOT_MARKER_SIZE),
                    color: dot.color.to_rgba(),
                });
            }
        }
    }

    fn regenerate_lines(&mut self) {
        self.scene.clear_lines();
        let curves = lines::generate(&self.blocks, &self.line_style, &mut self.rng);
        for curve in curves {
            self.scene.lines.push(DisplayItem::Polyline {
                points: curve.points,
                color: curve.color.to_rgba(),
                width: curve.width,
            });
        }
        self.profiling.line_count += 1;
    }
}
