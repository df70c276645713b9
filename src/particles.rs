use crate::core::ambient::{self, ParticleSpec};
use crate::core::{Capabilities, EffectsConfig};
use crate::dom;
use web_sys as web;

/// Fills the ambient container with decorative particles, once. Their
/// motion lives entirely in the stylesheet.
pub fn emit_particles(document: &web::Document, cfg: &EffectsConfig, caps: &Capabilities) {
    if !caps.ambient_enabled() {
        log::info!("[ambient] reduced motion; no particles");
        return;
    }
    let Some(container) = dom::query_one(document, &cfg.selectors.ambient_container) else {
        return;
    };
    let mut rng = rand::thread_rng();
    let specs = ambient::emit(&mut rng, &cfg.ambient, caps);
    let inserted = specs
        .iter()
        .filter(|spec| insert(document, &container, spec))
        .count();
    log::info!("[ambient] particles={}/{}", inserted, specs.len());
}

fn insert(document: &web::Document, container: &web::Element, spec: &ParticleSpec) -> bool {
    let Some(node) = document.create_element("span").ok().and_then(dom::as_html) else {
        return false;
    };
    node.set_class_name(spec.kind.class_name());
    _ = node.set_attribute("aria-hidden", "true");
    dom::set_styles(&node, spec.style_properties());
    container.append_child(&node).is_ok()
}
