#![cfg(target_arch = "wasm32")]
use instant::Instant;
use portfolio_core::{build_scene, AppState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod loading;
mod panel;
mod viewport;

use constants::{CANVAS_ID, PANEL_CLOSE_SELECTOR};
use loading::LoadingOverlay;
use panel::DomPanel;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Every DOM hook is resolved up front; a page missing one is a startup error
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
    let close_button = dom::query_html(&document, PANEL_CLOSE_SELECTOR)?;
    let panel = Rc::new(RefCell::new(DomPanel::from_document(&document)?));
    let loading = LoadingOverlay::from_document(&document)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let scene = build_scene(&mut rand::thread_rng());
    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let app = Rc::new(RefCell::new(AppState::new(scene, aspect)));
    log::info!(
        "[init] scene nodes={} canvas={}x{}",
        app.borrow().scene.nodes().len(),
        canvas.width(),
        canvas.height()
    );

    events::wire_keyboard(&window, &document, app.clone(), panel.clone());
    events::wire_pointer(&canvas, app.clone(), panel.clone());
    events::wire_close_button(&close_button, app.clone(), panel);

    let initial_size = (canvas.width(), canvas.height());
    let gpu = frame::init_gpu(&canvas, &app).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app,
        loading,
        canvas,
        document,
        gpu,
        viewport: viewport::ViewportTracker::new(initial_size.0, initial_size.1),
        last_instant: Instant::now(),
        cursor_pointer: false,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
