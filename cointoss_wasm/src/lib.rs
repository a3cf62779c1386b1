//! Binds the flip controller to the page: `#flipBtn` and `#coin` clicks,
//! Space/Enter, and double-click on `.stats` to reset.

use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    EventTarget, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

use cointoss_core::{is_flip_key, Delay, FlipController, HttpOutcomeService};

pub mod dom;
pub mod storage;
pub mod timer;

use dom::{DomView, STATS_SELECTOR};
use storage::LocalStore;
use timer::TimeoutDelay;

type Controller = FlipController<HttpOutcomeService, LocalStore, DomView, TimeoutDelay>;

const NARROW_VIEWPORT: f64 = 768.0;
const SCROLL_DELAY: Duration = Duration::from_millis(1000);

fn backend_url(window: &Window) -> String {
    match option_env!("BACKEND_URL") {
        Some(url) => url.to_string(),
        None => window
            .location()
            .origin()
            .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string()),
    }
}

fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // listeners live as long as the page
    closure.forget();
    Ok(())
}

fn spawn_flip(controller: &Rc<Controller>) {
    let controller = Rc::clone(controller);
    spawn_local(async move {
        controller.trigger_flip().await;
    });
}

fn scroll_to_result(controller: &Rc<Controller>) {
    let controller = Rc::clone(controller);
    spawn_local(async move {
        TimeoutDelay.sleep(SCROLL_DELAY).await;
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Center);
        controller
            .view()
            .result()
            .scroll_into_view_with_scroll_into_view_options(&opts);
    });
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let view = DomView::bind(window.clone(), &document)?;
    let service = HttpOutcomeService::new(&backend_url(&window));
    log::info!("flip endpoint {}", service.url());
    let controller: Rc<Controller> = Rc::new(FlipController::attach(
        service,
        LocalStore::from_window(&window),
        view,
        TimeoutDelay,
    ));

    {
        let c = Rc::clone(&controller);
        listen(controller.view().button(), "click", move |_| spawn_flip(&c))?;
    }
    {
        let c = Rc::clone(&controller);
        let narrow = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .is_some_and(|w| w <= NARROW_VIEWPORT);
        listen(controller.view().coin(), "click", move |_| {
            spawn_flip(&c);
            if narrow {
                scroll_to_result(&c);
            }
        })?;
    }
    {
        let c = Rc::clone(&controller);
        listen(&document, "keydown", move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if is_flip_key(&key.code()) {
                key.prevent_default();
                spawn_flip(&c);
            }
        })?;
    }
    if let Some(stats) = document.query_selector(STATS_SELECTOR)? {
        let c = Rc::clone(&controller);
        listen(&stats, "dblclick", move |_| {
            let c = Rc::clone(&c);
            spawn_local(async move {
                c.reset_statistics().await;
            });
        })?;
    } else {
        log::warn!("no {STATS_SELECTOR} container, reset gesture disabled");
    }

    Ok(())
}
