//! Question box for the disaster response chatbot.

use dioxus::prelude::*;

/// Sends on Enter; shows the last answer under the input.
#[component]
pub fn ChatBox(
    question: String,
    #[props(!optional)] response: Option<String>,
    on_input: EventHandler<String>,
    on_ask: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            style: "padding: 16px; border: 1px solid #e5e7eb; border-radius: 8px;",
            h4 { style: "margin: 0 0 12px 0;", "Disaster Response Chatbot" }
            input {
                r#type: "text",
                style: "width: 100%; padding: 8px; border-radius: 4px; border: 1px solid #d1d5db; box-sizing: border-box;",
                placeholder: "Ask a question about the disaster...",
                value: "{question}",
                oninput: move |evt| on_input.call(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        on_ask.call(());
                    }
                },
            }
            if let Some(answer) = response {
                div {
                    role: "status",
                    style: "margin-top: 12px; padding: 12px; background: #f3f4f6; border-radius: 6px; white-space: pre-wrap;",
                    "{answer}"
                }
            }
        }
    }
}
