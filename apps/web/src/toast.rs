use clinic_core::notify::{toast_style, FADE_MS, VISIBLE_MS};
use clinic_core::{Notice, Notifier};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Fixed-position toast appended to `<body>`, faded and removed on timers
pub struct ToastNotifier {
    document: web_sys::Document,
}

impl ToastNotifier {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        let Some(body) = self.document.body() else {
            log::warn!("no <body> to show notice: {}", notice.message);
            return;
        };
        let toast = match self.document.create_element("div") {
            Ok(toast) => toast,
            Err(err) => {
                log::warn!("could not create notice element: {:?}", err);
                return;
            }
        };

        toast.set_text_content(Some(&notice.message));
        if let Err(err) = toast.set_attribute("style", &toast_style(notice.kind)) {
            log::warn!("could not style notice: {:?}", err);
        }
        if let Err(err) = body.append_child(&toast) {
            log::warn!("could not show notice: {:?}", err);
            return;
        }

        Timeout::new(VISIBLE_MS, move || {
            if let Some(element) = toast.dyn_ref::<HtmlElement>() {
                if let Err(err) = element.style().set_property("opacity", "0") {
                    log::warn!("could not fade notice: {:?}", err);
                }
            }
            Timeout::new(FADE_MS, move || toast.remove()).forget();
        })
        .forget();
    }
}
