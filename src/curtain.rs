use crate::constants::{CURTAIN_ID, CURTAIN_TRANSITION};
use crate::core::curtain::{intercepts, Curtain, CurtainStyle, LinkInfo};
use crate::core::{CURTAIN_FADE_MS, CURTAIN_REVEAL_DELAY_MS};
use crate::dom;
use crate::stage::Stage;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn paint(el: &web::HtmlElement, style: CurtainStyle) {
    dom::set_style(el, "opacity", if style.opacity > 0.0 { "1" } else { "0" });
    dom::set_style(el, "display", if style.displayed { "block" } else { "none" });
}

fn create(document: &web::Document) -> Option<web::HtmlElement> {
    let el = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    el.set_id(CURTAIN_ID);
    dom::set_styles(
        &el,
        &[
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("background-color", "#000"),
            ("z-index", "99999"),
            ("pointer-events", "none"),
            ("opacity", "1"),
            ("transition", CURTAIN_TRANSITION),
        ],
    );
    Some(el)
}

/// Cover the page, fade out after the first paint, and fade back in before
/// same-site navigations.
pub fn install(stage: &Stage) {
    let Some(el) = create(&stage.document) else {
        log::error!("[curtain] could not create overlay");
        return;
    };
    if let Err(e) = stage.body.append_child(&el) {
        log::error!("[curtain] append failed: {:?}", e);
        return;
    }
    let state = Rc::new(RefCell::new(Curtain::default()));

    {
        let el = el.clone();
        let state = state.clone();
        let window = stage.window.clone();
        dom::next_frame(&stage.window, move || {
            dom::set_timeout(&window, CURTAIN_REVEAL_DELAY_MS, move || {
                let style = state.borrow_mut().reveal();
                paint(&el, style);
            });
        });
    }

    {
        let target = el.clone();
        let state = state.clone();
        dom::listen(el.as_ref(), "transitionend", move |_: web::Event| {
            let style = state.borrow_mut().transition_ended();
            paint(&target, style);
        });
    }

    wire_links(stage, &el, &state);
}

fn wire_links(stage: &Stage, el: &web::HtmlElement, state: &Rc<RefCell<Curtain>>) {
    let location = stage.window.location();
    let page_host = location.hostname().unwrap_or_default();
    let page_href = location.href().unwrap_or_default();

    let mut wired = 0;
    for a in dom::query_all(&stage.document, "a") {
        let Ok(a) = a.dyn_into::<web::HtmlAnchorElement>() else {
            continue;
        };
        let (hostname, hash, target, href) = (a.hostname(), a.hash(), a.target(), a.href());
        let link = LinkInfo {
            hostname: &hostname,
            hash: &hash,
            target: &target,
            href: &href,
        };
        if !intercepts(&link, &page_host, &page_href) {
            continue;
        }

        let curtain = el.clone();
        let state = state.clone();
        let window = stage.window.clone();
        let anchor = a.clone();
        dom::listen(a.as_ref(), "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let href = anchor.href();
            dom::set_style(&curtain, "display", "block");
            // Force a layout flush so the opacity transition restarts
            _ = curtain.offset_width();
            let style = state.borrow_mut().close(&href);
            paint(&curtain, style);

            let state = state.clone();
            let nav_window = window.clone();
            dom::set_timeout(&window, CURTAIN_FADE_MS, move || {
                if let Some(href) = state.borrow().pending_navigation() {
                    _ = nav_window.location().set_href(href);
                }
            });
        });
        wired += 1;
    }
    log::info!("[curtain] {} links intercepted", wired);
}
