//! Browser driver for [`TextCycler`]: one pending `setTimeout` at a time.

use crate::typing::TextCycler;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Inner {
    cycler: TextCycler,
    element: web::Element,
    pending: Option<i32>,
    callback: Option<Closure<dyn FnMut()>>,
}

pub struct TypingTicker {
    inner: Rc<RefCell<Inner>>,
}

impl TypingTicker {
    pub fn new(cycler: TextCycler, element: web::Element) -> Self {
        let inner = Rc::new(RefCell::new(Inner {
            cycler,
            element,
            pending: None,
            callback: None,
        }));
        let weak: Weak<RefCell<Inner>> = Rc::downgrade(&inner);
        let callback = Closure::wrap(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                fire(&inner);
            }
        }) as Box<dyn FnMut()>);
        inner.borrow_mut().callback = Some(callback);
        Self { inner }
    }

    pub fn start(&self) {
        let first = {
            let mut i = self.inner.borrow_mut();
            let first = i.cycler.start();
            if first.is_some() {
                i.element.set_text_content(Some(""));
            }
            first
        };
        if let Some(delay) = first {
            log::info!("[typing] cycling {} phrases", self.inner.borrow().cycler.phrase_count());
            schedule(&self.inner, delay);
        }
    }

    pub fn stop(&self) {
        let mut i = self.inner.borrow_mut();
        i.cycler.stop();
        if let Some(handle) = i.pending.take() {
            if let Some(w) = web::window() {
                w.clear_timeout_with_handle(handle);
            }
        }
    }
}

impl Drop for TypingTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn fire(inner: &Rc<RefCell<Inner>>) {
    let next = {
        let mut i = inner.borrow_mut();
        i.pending = None;
        let step = i.cycler.step();
        if let Some(s) = step {
            if s.text_changed {
                let text = i.cycler.text();
                i.element.set_text_content(Some(&text));
            }
        }
        step.map(|s| s.delay)
    };
    if let Some(delay) = next {
        schedule(inner, delay);
    }
}

fn schedule(inner: &Rc<RefCell<Inner>>, delay: Duration) {
    let Some(window) = web::window() else {
        return;
    };
    let mut guard = inner.borrow_mut();
    let i = &mut *guard;
    let Some(callback) = &i.callback else {
        return;
    };
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        delay.as_millis().min(i32::MAX as u128) as i32,
    ) {
        Ok(handle) => i.pending = Some(handle),
        Err(e) => log::error!("[typing] setTimeout failed: {:?}", e),
    }
}
