use tiny_skia::Pixmap;

use super::interaction::{DragSession, DragTuning, apply_wheel};
use super::loader::{LoadKind, LoadOutcome, LoadTicket, LoadTracker};
use super::messages::EditorMsg;
use crate::config::EditorConfig;
use crate::domain::{
    DragMode, ImageTransform, Point, TransformSummary, UvTopology, Viewport, WheelDirection,
};
use crate::error::Result;
use crate::publish::{BakedTexture, TexturePublisher};
use crate::render::{WireframeStyle, rasterize_wireframe, render_bake, render_preview};
use crate::source::OverlayImage;

/// Whether the editor has a model to show
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorStatus {
    /// Waiting for the model's UV topology
    #[default]
    Loading,
    Ready,
    /// The last model load failed; the editor stays usable
    Failed(String),
}

/// One editing session over one model.
///
/// Owns the topology, the overlay, its transform and any open drag. Every
/// mutation recomposes the preview from scratch. Uploads, resets, pointer-up,
/// wheel steps and apply additionally bake and publish.
pub struct Editor {
    viewport: Viewport,
    tuning: DragTuning,
    style: WireframeStyle,
    status: EditorStatus,
    topology: Option<UvTopology>,
    wireframe: Option<Pixmap>,
    overlay: Option<OverlayImage>,
    transform: ImageTransform,
    mode: DragMode,
    drag: Option<DragSession>,
    loads: LoadTracker,
    preview: Pixmap,
    publisher: Box<dyn TexturePublisher>,
}

impl Editor {
    pub fn new(config: &EditorConfig, publisher: impl TexturePublisher + 'static) -> Result<Self> {
        let viewport = Viewport::new(config.viewport_width, config.viewport_height)?;
        let transform = ImageTransform::IDENTITY;
        let preview = render_preview(viewport, None, None, &transform)?;
        Ok(Self {
            viewport,
            tuning: DragTuning::from(config),
            style: WireframeStyle {
                color: config.wireframe_color,
                width: config.wireframe_width,
            },
            status: EditorStatus::Loading,
            topology: None,
            wireframe: None,
            overlay: None,
            transform,
            mode: DragMode::default(),
            drag: None,
            loads: LoadTracker::default(),
            preview,
            publisher: Box::new(publisher),
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn status(&self) -> &EditorStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == EditorStatus::Loading
    }

    pub fn topology(&self) -> Option<&UvTopology> {
        self.topology.as_ref()
    }

    pub fn overlay(&self) -> Option<&OverlayImage> {
        self.overlay.as_ref()
    }

    /// True until an image has been uploaded
    pub fn needs_image(&self) -> bool {
        self.overlay.is_none()
    }

    pub fn transform(&self) -> &ImageTransform {
        &self.transform
    }

    pub fn summary(&self) -> TransformSummary {
        self.transform.summary()
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The most recently composed preview
    pub fn preview(&self) -> &Pixmap {
        &self.preview
    }

    /// Resize the interactive surface. The wireframe is rebuilt for the new
    /// size; the transform is kept in viewport pixels as-is.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        if viewport == self.viewport {
            return Ok(());
        }
        self.viewport = viewport;
        self.rebuild_wireframe()?;
        self.refresh_preview()
    }

    // ------------------------------------------------------------------
    // Model loading
    // ------------------------------------------------------------------

    /// Start a model load; any earlier load still in flight becomes stale
    pub fn begin_model_load(&mut self) -> LoadTicket {
        self.status = EditorStatus::Loading;
        self.loads.issue(LoadKind::Model)
    }

    /// Deliver the result of a model load started with `begin_model_load`
    pub fn finish_model_load<E: std::fmt::Display>(
        &mut self,
        ticket: LoadTicket,
        result: std::result::Result<UvTopology, E>,
    ) -> Result<LoadOutcome> {
        if !self.loads.is_current(ticket) {
            log::info!("Dropping stale model load result");
            return Ok(LoadOutcome::Stale);
        }
        match result {
            Ok(topology) => {
                self.set_topology(topology)?;
                Ok(LoadOutcome::Applied)
            }
            Err(err) => {
                let message = err.to_string();
                log::error!("An error occurred loading the model: {message}");
                self.status = EditorStatus::Failed(message.clone());
                Ok(LoadOutcome::Failed(message))
            }
        }
    }

    /// Replace the topology wholesale and rebuild the cached wireframe
    pub fn set_topology(&mut self, topology: UvTopology) -> Result<()> {
        self.topology = Some(topology);
        self.status = EditorStatus::Ready;
        self.rebuild_wireframe()?;
        self.refresh_preview()
    }

    fn rebuild_wireframe(&mut self) -> Result<()> {
        self.wireframe = match &self.topology {
            Some(topology) => Some(rasterize_wireframe(topology, self.viewport, self.style)?),
            None => None,
        };
        Ok(())
    }

    // ------------------------------------------------------------------
    // Image upload
    // ------------------------------------------------------------------

    /// Start an image load; any earlier upload still in flight becomes stale
    pub fn begin_image_load(&mut self) -> LoadTicket {
        self.loads.issue(LoadKind::Image)
    }

    /// Decode and install uploaded image bytes.
    ///
    /// A decode failure leaves the previous overlay in place and is returned
    /// so the caller can tell the user.
    pub fn finish_image_load(&mut self, ticket: LoadTicket, bytes: &[u8]) -> Result<LoadOutcome> {
        if !self.loads.is_current(ticket) {
            log::info!("Dropping stale image upload");
            return Ok(LoadOutcome::Stale);
        }
        let overlay = OverlayImage::decode(bytes).inspect_err(|err| {
            log::warn!("Ignoring upload: {err}");
        })?;
        self.set_image(overlay)?;
        Ok(LoadOutcome::Applied)
    }

    /// Install a new overlay, reset its transform to identity and publish.
    /// A drag left open across the upload is dropped.
    pub fn set_image(&mut self, overlay: OverlayImage) -> Result<Option<BakedTexture>> {
        self.overlay = Some(overlay);
        self.transform.reset();
        self.drag = None;
        self.refresh_preview()?;
        self.publish()
    }

    // ------------------------------------------------------------------
    // Interaction
    // ------------------------------------------------------------------

    /// Choose the mode for future drags. An open drag keeps its own mode.
    pub fn set_mode(&mut self, mode: DragMode) {
        self.mode = mode;
    }

    pub fn pointer_down(&mut self, at: Point) {
        self.drag = Some(DragSession::begin(self.mode, at));
    }

    pub fn pointer_move(&mut self, at: Point) -> Result<()> {
        let Some(drag) = self.drag.as_mut() else {
            return Ok(());
        };
        drag.advance(at, &mut self.transform, &self.tuning);
        self.refresh_preview()
    }

    /// Close the drag and publish the result. Does nothing without an
    /// open drag.
    pub fn pointer_up(&mut self) -> Result<Option<BakedTexture>> {
        if self.drag.take().is_none() {
            return Ok(None);
        }
        self.refresh_preview()?;
        self.publish()
    }

    pub fn wheel(&mut self, direction: WheelDirection) -> Result<Option<BakedTexture>> {
        apply_wheel(&mut self.transform, direction, &self.tuning);
        self.refresh_preview()?;
        self.publish()
    }

    pub fn reset(&mut self) -> Result<Option<BakedTexture>> {
        self.transform.reset();
        self.refresh_preview()?;
        self.publish()
    }

    /// Bake and publish the current state
    pub fn apply(&mut self) -> Result<Option<BakedTexture>> {
        self.publish()
    }

    /// Handle one control message
    pub fn update(&mut self, msg: EditorMsg) -> Result<Option<BakedTexture>> {
        match msg {
            EditorMsg::SetMode(mode) => self.set_mode(mode),
            EditorMsg::PointerDown(at) => self.pointer_down(at),
            EditorMsg::PointerMove(at) => self.pointer_move(at)?,
            EditorMsg::PointerUp => return self.pointer_up(),
            EditorMsg::Wheel(direction) => return self.wheel(direction),
            EditorMsg::Reset => return self.reset(),
            EditorMsg::Apply => return self.apply(),
        }
        Ok(None)
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    fn refresh_preview(&mut self) -> Result<()> {
        self.preview = render_preview(
            self.viewport,
            self.wireframe.as_ref(),
            self.overlay.as_ref(),
            &self.transform,
        )?;
        Ok(())
    }

    /// Render and encode the bake target without publishing it.
    /// `None` when no overlay has been uploaded.
    pub fn bake(&self) -> Result<Option<BakedTexture>> {
        let Some(overlay) = &self.overlay else {
            return Ok(None);
        };
        let pixmap = render_bake(self.viewport, overlay, &self.transform)?;
        Ok(Some(BakedTexture::encode(&pixmap)?))
    }

    fn publish(&mut self) -> Result<Option<BakedTexture>> {
        let Some(texture) = self.bake()? else {
            log::debug!("Nothing to publish: no overlay image");
            return Ok(None);
        };
        log::debug!(
            "Publishing {}x{} texture ({} bytes)",
            texture.width(),
            texture.height(),
            texture.png_bytes().len()
        );
        self.publisher.publish(&texture);
        Ok(Some(texture))
    }
}
