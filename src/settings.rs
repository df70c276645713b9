use crate::core::EffectsConfig;
use web_sys as web;

pub const CONFIG_ELEMENT_ID: &str = "sky-effects-config";

/// Reads the inline JSON override block, if the page has one. A broken
/// block is reported and ignored.
pub fn load(document: &web::Document) -> EffectsConfig {
    let Some(el) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return EffectsConfig::default();
    };
    let src = el.text_content().unwrap_or_default();
    match EffectsConfig::from_json(&src) {
        Ok(cfg) => {
            log::info!("[config] loaded overrides from #{}", CONFIG_ELEMENT_ID);
            cfg
        }
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            EffectsConfig::default()
        }
    }
}
