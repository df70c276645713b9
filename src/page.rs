// Page chrome around the effects: loader, in-page anchors, navigation
// toggle, visibility flag and platform stacking.

use crate::core::config::LoaderConfig;
use crate::core::loader::{hide_delay_ms, DocumentPhase};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

const LOADER_ID: &str = "loader";
const HIDDEN_CLASS: &str = "is-hidden";
const ACTIVE_CLASS: &str = "is-active";

#[inline]
pub fn hide_loader(window: &web::Window, document: &web::Document, remove_after_ms: i32) {
    if let Some(el) = document.get_element_by_id(LOADER_ID) {
        dom::set_class(&el, HIDDEN_CLASS, true);
        dom::set_timeout(window, remove_after_ms, move || el.remove());
    }
}

pub fn wire_loader(
    window: &web::Window,
    document: &web::Document,
    cfg: &LoaderConfig,
    reduced_motion: bool,
) {
    if document.get_element_by_id(LOADER_ID).is_none() {
        return;
    }
    let cfg = *cfg;
    let phase = if document.ready_state() == "complete" {
        DocumentPhase::Complete
    } else {
        DocumentPhase::Loading
    };
    let delay = hide_delay_ms(phase, reduced_motion, &cfg);
    let schedule_hide = {
        let window = window.clone();
        let document = document.clone();
        move || {
            let (w, d) = (window.clone(), document.clone());
            dom::set_timeout(&window, delay, move || hide_loader(&w, &d, cfg.remove_after_ms));
        }
    };
    match phase {
        DocumentPhase::Complete => schedule_hide(),
        DocumentPhase::Loading => {
            let mut once = Some(schedule_hide);
            dom::add_listener(window, "load", move |_: web::Event| {
                if let Some(f) = once.take() {
                    f();
                }
            });
        }
    }
}

/// `a[href^="#"]` links glide to their target instead of jumping.
pub fn wire_anchor_scroll(document: &web::Document) {
    for link in dom::query_all(document, "a[href^=\"#\"]") {
        let doc = document.clone();
        let anchor = link.clone();
        dom::add_listener(&link, "click", move |ev: web::MouseEvent| {
            let Some(href) = anchor.get_attribute("href").filter(|h| h != "#") else {
                return;
            };
            if let Some(target) = dom::query_one(&doc, &href) {
                ev.prevent_default();
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}

/// Mirrors `document.hidden` as `is-page-hidden` on the root element so
/// the stylesheet can pause its animations.
pub fn wire_visibility(document: &web::Document) {
    let doc = document.clone();
    dom::add_listener(document, "visibilitychange", move |_: web::Event| {
        if let Some(root) = doc.document_element() {
            dom::set_class(&root, "is-page-hidden", doc.hidden());
        }
    });
}

pub fn wire_platform_hover(document: &web::Document) {
    for platform in dom::query_all(document, ".platform") {
        let Some(el) = dom::as_html(platform) else {
            continue;
        };
        let enter = el.clone();
        dom::add_passive_listener(&el, "mouseenter", move |_: web::MouseEvent| {
            _ = enter.style().set_property("z-index", "10");
        });
        let leave = el.clone();
        dom::add_passive_listener(&el, "mouseleave", move |_: web::MouseEvent| {
            _ = leave.style().remove_property("z-index");
        });
    }
}

pub fn wire_nav(document: &web::Document) {
    let burger = dom::query_one(document, ".burger");
    let nav = dom::query_one(document, ".nav");
    let (Some(burger), Some(nav)) = (burger, nav) else {
        return;
    };
    let root = document.document_element();
    let close = {
        let (burger, nav, root) = (burger.clone(), nav.clone(), root.clone());
        move || {
            dom::set_class(&burger, ACTIVE_CLASS, false);
            dom::set_class(&nav, ACTIVE_CLASS, false);
            if let Some(r) = &root {
                dom::set_class(r, "nav-open", false);
            }
        }
    };

    {
        let (b, n, r) = (burger.clone(), nav.clone(), root.clone());
        dom::add_listener(&burger, "click", move |ev: web::MouseEvent| {
            ev.stop_propagation();
            let open = !n.class_list().contains(ACTIVE_CLASS);
            dom::set_class(&b, ACTIVE_CLASS, open);
            dom::set_class(&n, ACTIVE_CLASS, open);
            if let Some(r) = &r {
                dom::set_class(r, "nav-open", open);
            }
        });
    }

    {
        let (b, n, close) = (burger.clone(), nav.clone(), close.clone());
        dom::add_listener(document, "click", move |ev: web::MouseEvent| {
            let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
            let inside = |el: &web::Element| target.as_ref().is_some_and(|t| el.contains(Some(t)));
            if n.class_list().contains(ACTIVE_CLASS) && !inside(&n) && !inside(&b) {
                close();
            }
        });
    }

    for link in nav.query_selector_all("a").ok().into_iter().flat_map(|list| {
        (0..list.length()).filter_map(move |i| list.item(i))
    }) {
        let close = close.clone();
        dom::add_listener(&link, "click", move |_: web::MouseEvent| close());
    }
}
