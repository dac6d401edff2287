use crate::panel::DomPanel;
use portfolio_core::input::pointer_ndc;
use portfolio_core::AppState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position in NDC relative to the canvas' CSS box.
fn canvas_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> glam::Vec2 {
    let rect = canvas.get_bounding_client_rect();
    pointer_ndc(
        (ev.client_x() as f64 - rect.left()) as f32,
        (ev.client_y() as f64 - rect.top()) as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Hover on move, clear on leave, select on click. Clicks are taken from
/// the canvas only, so presses on the panel never reach the scene.
pub fn wire_pointer(
    canvas: &web::HtmlCanvasElement,
    app: Rc<RefCell<AppState>>,
    panel: Rc<RefCell<DomPanel>>,
) {
    let app_move = app.clone();
    let canvas_move = canvas.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let ndc = canvas_ndc(&ev, &canvas_move);
        app_move.borrow_mut().pointer_move(ndc);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref());
    on_move.forget();

    let app_leave = app.clone();
    let on_leave = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        app_leave.borrow_mut().pointer_leave();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerleave", on_leave.as_ref().unchecked_ref());
    on_leave.forget();

    let canvas_click = canvas.clone();
    let on_click = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let ndc = canvas_ndc(&ev, &canvas_click);
        let mut panel = panel.borrow_mut();
        if let Some(id) = app.borrow_mut().click_at(ndc, &mut *panel) {
            log::debug!("[pointer] selected node {}", id.0);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

pub fn wire_close_button(
    button: &web::HtmlElement,
    app: Rc<RefCell<AppState>>,
    panel: Rc<RefCell<DomPanel>>,
) {
    crate::dom::add_click_listener(button, move || {
        let mut panel = panel.borrow_mut();
        app.borrow_mut().close_panel(&mut *panel);
    });
}
