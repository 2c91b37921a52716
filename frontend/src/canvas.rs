use common::{render_frame, Color, Frame, Palette, Presenter, Rect, Surface};
use std::f64::consts::TAU;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::NodeRef;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(CanvasSurface {
            ctx,
            width: f64::from(canvas.width()),
            height: f64::from(canvas.height()),
        })
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ctx.clear_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn fill_ellipse(&mut self, rect: Rect, color: &Color) {
        let center = rect.center();
        self.ctx.begin_path();
        if let Err(err) = self
            .ctx
            .ellipse(center.x, center.y, rect.w / 2.0, rect.h / 2.0, 0.0, 0.0, TAU)
        {
            warn!("ellipse rejected by canvas: {:?}", err);
            return;
        }
        self.ctx.set_fill_style_str(color.as_str());
        self.ctx.fill();
    }
}

pub struct CanvasView {
    canvas: NodeRef,
    palette: Palette,
}

impl CanvasView {
    pub fn new(canvas: NodeRef, palette: Palette) -> Self {
        CanvasView { canvas, palette }
    }
}

impl Presenter for CanvasView {
    fn present(&mut self, frame: Frame<'_>) {
        let canvas = match self.canvas.cast::<HtmlCanvasElement>() {
            Some(canvas) if canvas.is_connected() => canvas,
            _ => {
                debug!("canvas not mounted, skipping draw");
                return;
            }
        };
        let mut surface = match CanvasSurface::from_canvas(&canvas) {
            Some(surface) => surface,
            None => {
                warn!("canvas has no 2d context");
                return;
            }
        };
        render_frame(&mut surface, frame.state, frame.legal_actions, &self.palette);
    }
}
