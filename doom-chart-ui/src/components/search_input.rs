//! Free-text disaster search box.

use dioxus::prelude::*;

#[component]
pub fn SearchInput(value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        input {
            r#type: "text",
            style: "width: 100%; padding: 16px; border-radius: 8px; border: 1px solid #d1d5db; font-size: 16px; box-sizing: border-box;",
            placeholder: "Search for a disaster (e.g., country, year, disaster type)",
            value: "{value}",
            oninput: move |evt| on_input.call(evt.value()),
        }
    }
}
