pub mod hierarchy;
pub mod invalid_link;
pub mod notifications;
pub mod plans;

use dioxus::prelude::*;

pub fn use_document_title(title: &'static str) {
    use_effect(move || {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            document.set_title(title);
        }
    });
}
