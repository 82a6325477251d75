//! Panel header with a title and optional caption.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Secondary line under the title, e.g. the selected country and year
    #[props(default = String::new())]
    pub caption: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 12px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 18px; color: #2b2d42;",
                "{props.title}"
            }
            if !props.caption.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #8d99ae;",
                    "{props.caption}"
                }
            }
        }
    }
}
