use crate::core::config::Selectors;
use crate::core::cursor::{
    position_style, CursorMode, CursorProxy, InteractiveMatcher, InteractiveTree,
};
use crate::core::{Capabilities, EffectsConfig, FrameLoop, FrameScheduler};
use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const VISIBLE_CLASS: &str = "is-visible";
const DOWN_CLASS: &str = "is-down";
const HOVER_CLASS: &str = "is-hover";

/// Live DOM as an `InteractiveTree`: parents via `parentElement`, matching
/// on tag name and class list.
pub struct DomTree {
    matcher: InteractiveMatcher,
}

impl DomTree {
    pub fn new(selectors: &Selectors) -> Self {
        Self {
            matcher: InteractiveMatcher::new(
                &selectors.interactive_tags,
                &selectors.interactive_classes,
            ),
        }
    }
}

impl InteractiveTree for DomTree {
    type Node = web::Element;

    fn parent(&self, node: &web::Element) -> Option<web::Element> {
        node.parent_element()
    }

    fn is_interactive(&self, node: &web::Element) -> bool {
        let list = node.class_list();
        self.matcher
            .matches_with(&node.tag_name(), |class| list.contains(class))
    }
}

#[derive(Clone)]
struct CursorWiring {
    element: web::HtmlElement,
    proxy: Rc<RefCell<CursorProxy>>,
    tree: Rc<DomTree>,
}

fn event_element(target: Option<web::EventTarget>) -> Option<web::Element> {
    target.and_then(|t| t.dyn_into::<web::Element>().ok())
}

/// Starts the cursor proxy, or removes its element when the environment
/// rules it out.
pub fn wire_cursor(
    window: &web::Window,
    document: &web::Document,
    cfg: &EffectsConfig,
    caps: &Capabilities,
    scheduler: Rc<dyn FrameScheduler>,
) {
    let Some(el) = dom::query_one(document, &cfg.selectors.cursor) else {
        return;
    };
    if CursorMode::for_capabilities(caps) == CursorMode::Disabled {
        log::info!(
            "[cursor] disabled (fine_pointer={} reduced_motion={})",
            caps.fine_pointer,
            caps.reduced_motion
        );
        el.remove();
        return;
    }
    let Some(element) = dom::as_html(el) else {
        return;
    };
    dom::set_class(&element, VISIBLE_CLASS, true);

    let (width, height) = dom::viewport_size(window);
    let w = CursorWiring {
        element,
        proxy: Rc::new(RefCell::new(CursorProxy::new(
            Vec2::new(width * 0.5, height * 0.5),
            cfg.cursor.smoothing,
        ))),
        tree: Rc::new(DomTree::new(&cfg.selectors)),
    };

    wire_mousemove(window, &w);
    wire_press(window, &w);
    wire_hover(document, &w);

    let tick = w.clone();
    let looping = FrameLoop::start(scheduler, move || {
        let pos = tick.proxy.borrow_mut().step();
        dom::set_styles(&tick.element, position_style(pos));
    });
    if looping {
        log::info!("[cursor] running");
    } else {
        log::warn!("[cursor] no frame callbacks; proxy placed once and left static");
    }
}

fn wire_mousemove(window: &web::Window, w: &CursorWiring) {
    let proxy = w.proxy.clone();
    dom::add_passive_listener(window, "mousemove", move |ev: web::MouseEvent| {
        proxy
            .borrow_mut()
            .pointer_move(ev.client_x() as f32, ev.client_y() as f32);
    });
}

fn wire_press(window: &web::Window, w: &CursorWiring) {
    let down = w.clone();
    dom::add_passive_listener(window, "mousedown", move |_: web::MouseEvent| {
        down.proxy.borrow_mut().pointer_down();
        dom::set_class(&down.element, DOWN_CLASS, true);
    });
    let up = w.clone();
    dom::add_passive_listener(window, "mouseup", move |_: web::MouseEvent| {
        up.proxy.borrow_mut().pointer_up();
        dom::set_class(&up.element, DOWN_CLASS, false);
    });
}

fn wire_hover(document: &web::Document, w: &CursorWiring) {
    let over = w.clone();
    dom::add_passive_listener(document, "pointerover", move |ev: web::PointerEvent| {
        let Some(target) = event_element(ev.target()) else {
            return;
        };
        if over.proxy.borrow_mut().pointer_over(&*over.tree, &target).is_some() {
            dom::set_class(&over.element, HOVER_CLASS, true);
        }
    });

    let out = w.clone();
    dom::add_passive_listener(document, "pointerout", move |ev: web::PointerEvent| {
        let Some(from) = event_element(ev.target()) else {
            return;
        };
        let to = event_element(ev.related_target());
        let changed = out
            .proxy
            .borrow_mut()
            .pointer_out(&*out.tree, &from, to.as_ref());
        if changed.is_some() {
            dom::set_class(&out.element, HOVER_CLASS, false);
        }
    });
}
