//! Page-level wiring: load sequence, navbar, scroll reveal and the two
//! animated subsystems.

use crate::config::SiteConfig;
use crate::constants::REVEAL_THRESHOLD;
use crate::dom;
use crate::error::SiteError;
use crate::events::{self, RigWiring};
use crate::frame::{self, FrameContext};
use crate::lifecycle::{self, StartOnce};
use crate::overlay;
use crate::render::GpuState;
use crate::rig::{OrbitRig, RigHost};
use crate::snippet;
use crate::ticker::TypingTicker;
use crate::typing::TextCycler;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

thread_local! {
    // Keeps the typing driver alive for the page session
    static TICKER: RefCell<Option<TypingTicker>> = const { RefCell::new(None) };
    static LOAD_HANDLED: StartOnce = const { StartOnce::new() };
    static RIG_STARTED: StartOnce = const { StartOnce::new() };
}

/// Wire everything that does not wait for `load`, then schedule the rest.
pub fn init(config: SiteConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    crate::theme::wire_theme_toggle(&document, config.theme_toggle_id);
    wire_navbar(&document, &config);
    wire_scroll_reveal(&document, &config);

    let config = Rc::new(config);
    // The module may instantiate after `load` has already fired
    if lifecycle::load_already_fired(&document.ready_state()) {
        on_load(config);
    } else {
        dom::add_listener(&window, "load", move || on_load(config.clone()));
    }
    Ok(())
}

fn on_load(config: Rc<SiteConfig>) {
    if !LOAD_HANDLED.with(StartOnce::claim) {
        return;
    }
    let Some(document) = dom::window_document() else {
        return;
    };
    overlay::dismiss_loader(
        &document,
        config.loader_id,
        config.loader_duration_ms,
        config.loader_fade_ms,
    );

    let cfg = config.clone();
    dom::set_timeout(config.typing_start_delay_ms, move || {
        let Some(document) = dom::window_document() else {
            return;
        };
        if let Err(e) = start_typing(&document, &cfg) {
            log::warn!("[typing] skipped: {}", e);
        }
        render_editor(&document, &cfg);
    });

    let cfg = config.clone();
    dom::set_timeout(config.rig_start_delay_ms, move || {
        if let Some(document) = dom::window_document() {
            if let Err(e) = start_rig(&document, &cfg) {
                log::warn!("[rig] skipped: {}", e);
            }
        }
    });
}

fn start_typing(document: &web::Document, config: &SiteConfig) -> Result<(), SiteError> {
    let element = dom::query(document, config.subtitle_selector)
        .ok_or_else(|| SiteError::MissingElement(config.subtitle_selector.into()))?;
    let cycler = TextCycler::new(config.phrases.clone(), config.cycler.clone())?;
    TICKER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            log::warn!("[typing] already started");
            return;
        }
        let ticker = TypingTicker::new(cycler, element);
        ticker.start();
        *slot = Some(ticker);
    });
    Ok(())
}

fn render_editor(document: &web::Document, config: &SiteConfig) {
    if let Some(title) = dom::query(document, config.editor_title_selector) {
        title.set_text_content(Some(snippet::EDITOR_TITLE));
    }
    let Some(code) = document.get_element_by_id(config.code_block_id) else {
        return;
    };
    if let Err(e) = snippet::render(document, &code, snippet::DEVELOPER_SNIPPET) {
        log::error!("[editor] {:?}", e);
    }
}

fn wire_navbar(document: &web::Document, config: &SiteConfig) {
    let navbar = document.get_element_by_id(config.navbar_id);
    let hamburger = dom::query(document, config.hamburger_selector);
    let (Some(navbar), Some(hamburger)) = (navbar, hamburger) else {
        log::warn!("[nav] navbar or hamburger missing; menu toggle skipped");
        return;
    };
    {
        let navbar = navbar.clone();
        let button = hamburger.clone();
        dom::add_listener(&hamburger, "click", move || {
            _ = navbar.class_list().toggle("active");
            let expanded = button.get_attribute("aria-expanded").as_deref() == Some("true");
            _ = button.set_attribute("aria-expanded", if expanded { "false" } else { "true" });
        });
    }
    for link in dom::query_all(document, config.nav_link_selector) {
        let navbar = navbar.clone();
        let button = hamburger.clone();
        dom::add_listener(&link, "click", move || {
            _ = navbar.class_list().remove_1("active");
            _ = button.set_attribute("aria-expanded", "false");
        });
    }
}

fn wire_scroll_reveal(document: &web::Document, config: &SiteConfig) {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    _ = target.class_list().add_1("fade-in");
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[reveal] IntersectionObserver unavailable: {:?}", e);
            return;
        }
    };
    callback.forget();
    let targets = dom::query_all(document, config.reveal_selector);
    for el in &targets {
        observer.observe(el);
    }
    log::info!("[reveal] observing {} elements", targets.len());
}

struct DomHost {
    element: web::HtmlElement,
}

impl RigHost for DomHost {
    fn size(&self) -> (u32, u32) {
        dom::client_size(&self.element)
    }

    fn show_error(&mut self, html: &str) {
        overlay::show_error(&self.element, html);
    }
}

async fn create_surface(
    document: &web::Document,
    container: &web::HtmlElement,
) -> anyhow::Result<GpuState> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let (width, height) = dom::client_size(container);
    dom::sync_canvas_backing_size(&canvas, width, height);
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    match GpuState::new(canvas.clone()).await {
        Ok(gpu) => Ok(gpu),
        Err(e) => {
            canvas.remove();
            Err(e)
        }
    }
}

fn start_rig(document: &web::Document, config: &SiteConfig) -> Result<(), SiteError> {
    let container = document
        .get_element_by_id(config.scene_container_id)
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
        .ok_or_else(|| SiteError::MissingElement(format!("#{}", config.scene_container_id)))?;
    if !RIG_STARTED.with(StartOnce::claim) {
        return Ok(());
    }
    log::info!("[rig] initializing desk scene");
    let document = document.clone();
    let rig_config = config.rig.clone();
    spawn_local(async move {
        let surface = match create_surface(&document, &container).await {
            Ok(s) => Some(s),
            Err(e) => {
                log::error!("[rig] WebGPU init error: {:?}", e);
                None
            }
        };
        let mut host = DomHost {
            element: container.clone(),
        };
        let rig = match OrbitRig::mount(&mut host, surface, rig_config) {
            Ok(r) => Rc::new(RefCell::new(r)),
            Err(e) => {
                log::error!("[rig] {}", e);
                return;
            }
        };
        events::wire_rig_input(RigWiring {
            container,
            rig: rig.clone(),
        });
        frame::start_loop(Rc::new(RefCell::new(FrameContext::new(rig))));
    });
    Ok(())
}
