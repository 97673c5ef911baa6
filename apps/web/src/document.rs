//! Live DOM implementation of the controllers' document surface

use clinic_core::dom::{RowHandler, SubmitHandler};
use clinic_core::{Control, Document, Field, FormId, Page, Region, RowAction};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlElement, HtmlFormElement};

pub struct BrowserDocument {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl BrowserDocument {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn raw(&self) -> &web_sys::Document {
        &self.document
    }

    /// Page identity: `<body data-page>` first, then the location's file name
    pub fn page(&self) -> Option<Page> {
        let declared = self
            .document
            .body()
            .and_then(|body| body.get_attribute("data-page"));
        if let Some(key) = declared {
            match key.parse() {
                Ok(page) => return Some(page),
                Err(err) => log::warn!("{}", err),
            }
        }
        let path = self.window.location().pathname().ok()?;
        Page::from_path(&path)
    }

    /// `content` of `<meta name="...">`
    pub fn meta_content(&self, name: &str) -> Option<String> {
        self.select(&format!("meta[name=\"{}\"]", name))?
            .get_attribute("content")
    }

    fn select(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(Some(element)) => Some(element),
            Ok(None) => {
                log::debug!("no element matches {}", selector);
                None
            }
            Err(err) => {
                log::warn!("bad selector {}: {:?}", selector, err);
                None
            }
        }
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        let element = self.document.get_element_by_id(id);
        if element.is_none() {
            log::debug!("no element with id {}", id);
        }
        element
    }
}

/// Attach a listener for the lifetime of the page
fn listen(target: &Element, event: &str, callback: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(callback);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("could not listen for {}: {:?}", event, err);
    }
    closure.forget();
}

/// The row button (if any) a click inside a table landed on
fn row_action(event: &Event) -> Option<RowAction> {
    let target: Element = event.target()?.dyn_into().ok()?;
    let button = target.closest("button[data-action]").ok()??;
    let action = button.get_attribute("data-action")?;
    let id = button.get_attribute("data-id")?;
    RowAction::parse(&action, &id)
}

impl Document for BrowserDocument {
    fn set_html(&self, region: Region, html: &str) {
        if let Some(element) = self.select(region.selector()) {
            element.set_inner_html(html);
        }
    }

    fn set_text(&self, region: Region, text: &str) {
        if let Some(element) = self.select(region.selector()) {
            element.set_text_content(Some(text));
        }
    }

    fn hide(&self, region: Region) {
        let element = self
            .select(region.selector())
            .and_then(|e| e.dyn_into::<HtmlElement>().ok());
        if let Some(element) = element {
            if let Err(err) = element.style().set_property("display", "none") {
                log::warn!("could not hide {}: {:?}", region.selector(), err);
            }
        }
    }

    // Inputs, selects and textareas all expose `value`.
    fn field_value(&self, field: Field) -> String {
        self.by_id(field.id())
            .and_then(|e| js_sys::Reflect::get(&e, &JsValue::from_str("value")).ok())
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    }

    fn set_field_value(&self, field: Field, value: &str) {
        if let Some(element) = self.by_id(field.id()) {
            let set = js_sys::Reflect::set(
                &element,
                &JsValue::from_str("value"),
                &JsValue::from_str(value),
            );
            if let Err(err) = set {
                log::warn!("could not set #{}: {:?}", field.id(), err);
            }
        }
    }

    fn reset_form(&self, form: FormId) {
        let element = self
            .by_id(form.id())
            .and_then(|e| e.dyn_into::<HtmlFormElement>().ok());
        if let Some(element) = element {
            element.reset();
        }
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.window.confirm_with_message(prompt).unwrap_or(false)
    }

    fn navigate(&self, page: Page) {
        if let Err(err) = self.window.location().set_href(page.file()) {
            log::error!("could not navigate to {}: {:?}", page.file(), err);
        }
    }

    fn on_submit(&self, form: FormId, handler: SubmitHandler) {
        if let Some(element) = self.by_id(form.id()) {
            listen(&element, "submit", move |event: Event| {
                event.prevent_default();
                handler();
            });
        }
    }

    fn on_click(&self, control: Control, handler: SubmitHandler) {
        if let Some(element) = self.by_id(control.id()) {
            listen(&element, "click", move |_event: Event| handler());
        }
    }

    fn on_row_action(&self, table: Region, handler: RowHandler) {
        if let Some(element) = self.select(table.selector()) {
            listen(&element, "click", move |event: Event| {
                if let Some(action) = row_action(&event) {
                    handler(action);
                }
            });
        }
    }
}
