use crate::panel::DomPanel;
use portfolio_core::{AppState, Direction};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// What a key event means for the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Move(Direction),
    ClosePanel,
}

#[inline]
pub fn action_for_code(code: &str) -> Option<KeyAction> {
    if code == "Escape" {
        return Some(KeyAction::ClosePanel);
    }
    Direction::from_key_code(code).map(KeyAction::Move)
}

pub fn wire_keyboard(
    window: &web::Window,
    document: &web::Document,
    app: Rc<RefCell<AppState>>,
    panel: Rc<RefCell<DomPanel>>,
) {
    let app_down = app.clone();
    let keydown = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        match action_for_code(&ev.code()) {
            Some(KeyAction::Move(dir)) => app_down.borrow_mut().key_down(dir),
            Some(KeyAction::ClosePanel) if !ev.repeat() => {
                let mut panel = panel.borrow_mut();
                app_down.borrow_mut().close_panel(&mut *panel);
            }
            _ => {}
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();

    let app_up = app.clone();
    let keyup = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if let Some(KeyAction::Move(dir)) = action_for_code(&ev.code()) {
            app_up.borrow_mut().key_up(dir);
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());
    keyup.forget();

    // Keys released while the tab is unfocused never deliver keyup.
    let blur = Closure::wrap(Box::new(move || {
        app.borrow_mut().input.release_all();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref());
    blur.forget();
}
