use crate::constants::NEO_BODY_CLASS;
use crate::core::theme::{location_update, theme_from_location, LocationUpdate};
use crate::core::{
    ChangeSource, Theme, ThemeChange, PARTICLE_NEO_OPACITY, PARTICLE_NEO_SIZE,
};
use crate::events;
use crate::stage::Stage;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Subscribe the body class, particle material and location marker to theme
/// changes, apply the theme named by the location and wire the hidden
/// triggers.
pub fn install(stage: &Stage) {
    {
        let mut switch = stage.theme.borrow_mut();

        let body = stage.body.clone();
        switch.subscribe(move |change: &ThemeChange| {
            let cl = body.class_list();
            _ = match change.theme {
                Theme::Neo => cl.add_1(NEO_BODY_CLASS),
                Theme::Default => cl.remove_1(NEO_BODY_CLASS),
            };
        });

        let material = stage.material.clone();
        switch.subscribe(move |change: &ThemeChange| {
            let mut m = material.borrow_mut();
            m.color = change.theme.particle_color();
            if change.theme.is_neo() && change.source == ChangeSource::Location {
                m.size = PARTICLE_NEO_SIZE;
                m.opacity = PARTICLE_NEO_OPACITY;
            }
        });

        let window = stage.window.clone();
        let document = stage.document.clone();
        switch.subscribe(move |change: &ThemeChange| {
            if change.source != ChangeSource::Location {
                persist(&window, &document, change.theme);
            }
        });
    }

    let location = stage.window.location();
    let hash = location.hash().unwrap_or_default();
    let pathname = location.pathname().unwrap_or_default();
    if theme_from_location(&hash, &pathname) == Theme::Neo {
        stage
            .theme
            .borrow_mut()
            .apply(Theme::Neo, ChangeSource::Location);
        log::info!("[theme] neo from location");
    }

    events::wire_secret_keys(stage);
    events::wire_triple_tap(stage);
}

fn persist(window: &web::Window, document: &web::Document, theme: Theme) {
    let location = window.location();
    let pathname = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    match location_update(theme, &pathname, &search) {
        LocationUpdate::SetHash(marker) => {
            _ = location.set_hash(marker);
        }
        LocationUpdate::PushUrl(url) => {
            if let Ok(history) = window.history() {
                _ = history.push_state_with_url(&JsValue::from_str(""), &document.title(), Some(&url));
            }
        }
    }
}
