//! ViewSurface over the page's fixed markup.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, Window};

use cointoss_core::{CoinFace, Statistics, ViewSurface};

pub const COIN_ID: &str = "coin";
pub const BUTTON_ID: &str = "flipBtn";
pub const RESULT_ID: &str = "result";
pub const RESULT_VALUE_ID: &str = "resultValue";
pub const STATS_SELECTOR: &str = ".stats";

const HIDDEN: &str = "hidden";
const NOTICE: &str = "notice";
const FLIPPING: &str = "flipping";

pub fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("#{id} has the wrong element type")))
}

pub struct DomView {
    window: Window,
    coin: HtmlElement,
    button: HtmlButtonElement,
    result: Element,
    result_value: Element,
    heads: Element,
    tails: Element,
    total: Element,
}

impl DomView {
    pub fn bind(window: Window, document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            coin: element(document, COIN_ID)?,
            button: element(document, BUTTON_ID)?,
            result: element(document, RESULT_ID)?,
            result_value: element(document, RESULT_VALUE_ID)?,
            heads: element(document, "headsCount")?,
            tails: element(document, "tailsCount")?,
            total: element(document, "totalCount")?,
            window,
        })
    }

    pub fn coin(&self) -> &HtmlElement {
        &self.coin
    }

    pub fn button(&self) -> &HtmlButtonElement {
        &self.button
    }

    pub fn result(&self) -> &Element {
        &self.result
    }

    fn show_panel(&self, text: &str, notice: bool) {
        self.result_value.set_text_content(Some(text));
        let classes = self.result.class_list();
        let _ = classes.toggle_with_force(NOTICE, notice);
        let _ = classes.remove_1(HIDDEN);
    }

    fn hide_panel(&self) {
        let classes = self.result.class_list();
        let _ = classes.add_1(HIDDEN);
        let _ = classes.remove_1(NOTICE);
    }
}

impl ViewSurface for DomView {
    fn set_button(&self, enabled: bool, label: &str) {
        self.button.set_disabled(!enabled);
        // keep the styled inner span when the markup has one
        match self.button.query_selector(".button-text").ok().flatten() {
            Some(span) => span.set_text_content(Some(label)),
            None => self.button.set_text_content(Some(label)),
        }
    }

    fn show_result(&self, text: &str) {
        self.show_panel(text, false);
    }

    fn hide_result(&self) {
        self.hide_panel();
    }

    fn show_notice(&self, text: &str) {
        self.show_panel(text, true);
    }

    fn hide_notice(&self) {
        self.hide_panel();
    }

    fn set_coin_flipping(&self, flipping: bool) {
        let _ = self.coin.class_list().toggle_with_force(FLIPPING, flipping);
    }

    fn set_coin_face(&self, face: CoinFace) {
        let _ = self.coin.style().set_property("transform", face.transform());
    }

    fn render_stats(&self, stats: &Statistics) {
        self.heads
            .set_text_content(Some(&stats.heads_count().to_string()));
        self.tails
            .set_text_content(Some(&stats.tails_count().to_string()));
        self.total
            .set_text_content(Some(&stats.total_count().to_string()));
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }
}
