use crate::constants::{ENTRANCE_SELECTOR, STAT_SELECTOR};
use crate::core::intro::{counter_text, entrance_end_ms, entrance_frame, parse_stat, StatText};
use crate::core::{FrameClock, FrameLayer, LayerStatus, COUNTER_DURATION_MS};
use crate::dom;
use crate::stage::Stage;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Entrance stagger and stat counters; finishes once both have settled.
struct IntroLayer {
    entrances: Vec<web::HtmlElement>,
    counters: Vec<(web::HtmlElement, StatText)>,
    end_ms: f64,
}

impl FrameLayer for IntroLayer {
    fn name(&self) -> &'static str {
        "intro"
    }

    fn update(&mut self, clock: &FrameClock) -> LayerStatus {
        let t = clock.elapsed_ms;
        for (i, el) in self.entrances.iter().enumerate() {
            let (opacity, rise) = entrance_frame(i, t);
            dom::set_style(el, "opacity", &format!("{opacity:.3}"));
            dom::set_style(el, "transform", &format!("translateY({rise:.2}px)"));
        }
        for (el, stat) in &self.counters {
            el.set_inner_text(&counter_text(stat, t));
        }
        if t >= self.end_ms {
            LayerStatus::Finished
        } else {
            LayerStatus::Running
        }
    }
}

fn html_elements(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    dom::query_all(document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn install(stage: &Stage) {
    let entrances = html_elements(&stage.document, ENTRANCE_SELECTOR);
    for el in &entrances {
        dom::set_style(el, "opacity", "0");
    }
    let counters: Vec<_> = html_elements(&stage.document, STAT_SELECTOR)
        .into_iter()
        .filter_map(|el| parse_stat(&el.inner_text()).map(|stat| (el, stat)))
        .collect();
    if entrances.is_empty() && counters.is_empty() {
        return;
    }
    let end_ms = if counters.is_empty() {
        entrance_end_ms(entrances.len())
    } else {
        entrance_end_ms(entrances.len()).max(COUNTER_DURATION_MS)
    };
    log::info!(
        "[intro] {} entrances, {} counters",
        entrances.len(),
        counters.len()
    );
    stage.scheduler.borrow_mut().add(Box::new(IntroLayer {
        entrances,
        counters,
        end_ms,
    }));
}
