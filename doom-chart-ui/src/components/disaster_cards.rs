//! Info cards, one per disaster type.

use crate::config::DashboardConfig;
use dioxus::prelude::*;

#[component]
pub fn DisasterCards() -> Element {
    let config = use_context::<DashboardConfig>();
    let cards: Vec<(&'static str, &'static str, String)> = config
        .disaster_types
        .iter()
        .map(|t| (t.label(), t.description(), t.image_path()))
        .collect();

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 24px;",
            for (label, description, image) in cards {
                div {
                    key: "{label}",
                    style: "display: flex; flex-direction: column; background: #edf2f4; border: 1px solid #2b2d42; border-radius: 16px; overflow: hidden;",
                    img {
                        src: "{image}",
                        alt: "{label}",
                        style: "width: 100%; object-fit: contain;",
                    }
                    div {
                        style: "flex-grow: 1; padding: 12px; text-align: center;",
                        h4 {
                            style: "margin: 0 0 6px 0; color: #ef233c; font-family: system-ui; font-weight: bold;",
                            "{label}"
                        }
                        p {
                            style: "margin: 0; color: #2b2d42; font-size: 14px;",
                            "{description}"
                        }
                    }
                }
            }
        }
    }
}
