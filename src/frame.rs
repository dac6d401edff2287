use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom;
use crate::loading::LoadingOverlay;
use crate::viewport::ViewportTracker;
use instant::Instant;
use portfolio_core::AppState;
use portfolio_render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub app: Rc<RefCell<AppState>>,
    pub loading: LoadingOverlay,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<GpuState<'a>>,
    pub viewport: ViewportTracker,
    pub last_instant: Instant,
    /// Cursor last written to the body, to avoid a style write per frame.
    pub cursor_pointer: bool,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        self.loading.tick(dt, &mut rand::thread_rng());

        let mut app = self.app.borrow_mut();
        if let Some((w, h)) = self.viewport.update(self.canvas.width(), self.canvas.height()) {
            app.resize(w, h);
            if let Some(g) = &mut self.gpu {
                g.resize_if_needed(w, h);
            }
        }
        app.tick(dt);

        let pointer = app.hovered().is_some();
        if pointer != self.cursor_pointer {
            dom::set_body_cursor(&self.document, if pointer { "pointer" } else { "auto" });
            self.cursor_pointer = pointer;
        }

        if let Some(g) = &mut self.gpu {
            match g.render(&app.scene, &app.camera) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    app: &RefCell<AppState>,
) -> Option<GpuState<'static>> {
    // Upload from a snapshot; no borrow may be held across the await
    let scene = app.borrow().scene.clone();
    let target = wgpu::SurfaceTarget::Canvas(canvas.clone());
    match GpuState::new(target, canvas.width(), canvas.height(), &scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
