use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Every element matching `selector`, in document order. An invalid
/// selector yields no targets rather than an error.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("[dom] invalid selector {:?}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query_one(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

#[inline]
pub fn as_html(el: web::Element) -> Option<web::HtmlElement> {
    el.dyn_into::<web::HtmlElement>().ok()
}

pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

pub fn set_styles<'a>(el: &web::HtmlElement, props: impl IntoIterator<Item = (&'a str, String)>) {
    let style = el.style();
    for (name, value) in props {
        _ = style.set_property(name, &value);
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

/// Register a listener that never calls `preventDefault`, so scrolling is
/// never blocked on it. The closure lives for the page lifetime.
pub fn add_passive_listener<E>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(window: &web::Window, ms: i32, f: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(f);
    if let Err(e) =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
    {
        log::warn!("[dom] setTimeout failed: {:?}", e);
    }
}
