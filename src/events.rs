use crate::dom;
use crate::input::{self, PointerKind};
use crate::render::GpuState;
use crate::rig::OrbitRig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedRig = Rc<RefCell<OrbitRig<GpuState>>>;

#[derive(Clone)]
pub struct RigWiring {
    pub container: web::HtmlElement,
    pub rig: SharedRig,
}

/// Presses start on the container; moves and releases are tracked on the
/// window so a drag that leaves the container still ends.
pub fn wire_rig_input(w: RigWiring) {
    dom::set_style(&w.container, "cursor", "grab");
    wire_mousedown(&w);
    wire_mousemove(&w);
    wire_mouseup(&w);
    wire_touchstart(&w);
    wire_touchmove(&w);
    wire_touchend(&w);
    wire_resize(&w);
}

fn wire_mousedown(w: &RigWiring) {
    let w = w.clone();
    let target = w.container.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        w.rig
            .borrow_mut()
            .pointer_down(PointerKind::Mouse, input::mouse_client_px(&ev));
        dom::set_style(&w.container, "cursor", "grabbing");
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mousemove(w: &RigWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let mut rig = w.rig.borrow_mut();
        if rig.is_dragging() {
            rig.pointer_move(PointerKind::Mouse, input::mouse_client_px(&ev));
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_mouseup(w: &RigWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        w.rig.borrow_mut().pointer_up();
        dom::set_style(&w.container, "cursor", "grab");
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touchstart(w: &RigWiring) {
    let w = w.clone();
    let target = w.container.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(pos) = input::first_touch_client_px(&ev) {
            w.rig.borrow_mut().pointer_down(PointerKind::Touch, pos);
        }
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchmove(w: &RigWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let Some(pos) = input::first_touch_client_px(&ev) else {
            return;
        };
        let mut rig = w.rig.borrow_mut();
        if rig.is_dragging() {
            rig.pointer_move(PointerKind::Touch, pos);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touchend(w: &RigWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
        w.rig.borrow_mut().pointer_up();
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_resize(w: &RigWiring) {
    let w = w.clone();
    if let Some(wnd) = web::window() {
        dom::add_listener(&wnd, "resize", move || {
            let (width, height) = dom::client_size(&w.container);
            w.rig.borrow_mut().resize(width, height);
        });
    }
}
