use dioxus::prelude::*;

use crate::route::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "text-center py-16 space-y-4",
            h1 { class: "text-3xl font-bold text-high", "Page Not Found" }
            p { class: "text-mid", "Nothing lives at /{path}." }
            Link { to: Route::Home {}, class: "text-gold", "Return to Campaigns" }
        }
    }
}
