use crate::core::config::{GateConfig, RevealConfig};
use crate::core::reveal::{ObserveMode, RevealObserver, Transition};
use crate::core::{Capabilities, EffectsConfig};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const REVEALED_CLASS: &str = "is-visible";
const ACTIVE_CLASS: &str = "is-active";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

pub fn wire_reveals(document: &web::Document, cfg: &EffectsConfig, caps: &Capabilities) {
    let reveals = Rc::new(dom::query_all(document, &cfg.selectors.reveal));
    let gates = Rc::new(dom::query_all(document, &cfg.selectors.gated));
    let state = Rc::new(RefCell::new(RevealObserver::new(
        reveals.len(),
        gates.len(),
        caps.intersection_observer,
    )));
    log::info!("[reveal] reveal={} gated={}", reveals.len(), gates.len());

    if state.borrow().mode() == ObserveMode::Fallback {
        log::warn!("[reveal] IntersectionObserver unavailable; activating all targets");
        mark_all(&reveals, REVEALED_CLASS);
        mark_all(&gates, ACTIVE_CLASS);
        return;
    }

    observe_reveals(reveals, state.clone(), &cfg.reveal);
    observe_gates(gates, state, &cfg.gate);
}

fn mark_all(els: &[web::Element], class: &str) {
    for el in els {
        dom::set_class(el, class, true);
    }
}

/// Yields `(index, target, is_intersecting)` for entries whose target is known.
fn entries<'a>(
    batch: &'a js_sys::Array,
    targets: &'a [web::Element],
) -> impl Iterator<Item = (usize, web::Element, bool)> + 'a {
    batch.iter().filter_map(move |v| {
        let entry = v.dyn_into::<web::IntersectionObserverEntry>().ok()?;
        let target = entry.target();
        let index = targets.iter().position(|el| *el == target)?;
        Some((index, target, entry.is_intersecting()))
    })
}

fn observe(
    targets: &[web::Element],
    callback: ObserverCallback,
    threshold: f64,
    root_margin: &str,
) -> bool {
    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(threshold));
    opts.set_root_margin(root_margin);
    let io = web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts);
    let ok = match io {
        Ok(io) => {
            for el in targets {
                io.observe(el);
            }
            true
        }
        Err(e) => {
            log::warn!("[reveal] observer construction failed: {:?}", e);
            false
        }
    };
    callback.forget();
    ok
}

fn observe_reveals(
    targets: Rc<Vec<web::Element>>,
    state: Rc<RefCell<RevealObserver>>,
    cfg: &RevealConfig,
) {
    if targets.is_empty() {
        return;
    }
    let cb_targets = targets.clone();
    let cb_state = state.clone();
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |batch: js_sys::Array, observer: web::IntersectionObserver| {
            let mut st = cb_state.borrow_mut();
            for (index, target, hit) in entries(&batch, &cb_targets) {
                if st.reveals.on_intersection(index, hit) == Transition::Reveal {
                    dom::set_class(&target, REVEALED_CLASS, true);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    if !observe(&targets, callback, cfg.threshold, &cfg.root_margin) {
        state.borrow_mut().reveals.reveal_all();
        mark_all(&targets, REVEALED_CLASS);
    }
}

fn observe_gates(
    targets: Rc<Vec<web::Element>>,
    state: Rc<RefCell<RevealObserver>>,
    cfg: &GateConfig,
) {
    if targets.is_empty() {
        return;
    }
    let cb_targets = targets.clone();
    let cb_state = state.clone();
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |batch: js_sys::Array, _observer: web::IntersectionObserver| {
            let mut st = cb_state.borrow_mut();
            for (index, target, hit) in entries(&batch, &cb_targets) {
                match st.gates.on_intersection(index, hit) {
                    Transition::Activate => dom::set_class(&target, ACTIVE_CLASS, true),
                    Transition::Deactivate => dom::set_class(&target, ACTIVE_CLASS, false),
                    _ => {}
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    if !observe(&targets, callback, cfg.threshold, &cfg.root_margin) {
        state.borrow_mut().gates.activate_all();
        mark_all(&targets, ACTIVE_CLASS);
    }
}
