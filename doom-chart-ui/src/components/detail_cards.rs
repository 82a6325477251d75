//! Headline figures of a disaster detail.

use dioxus::prelude::*;
use doom_core::query::SearchHit;
use doom_data::format::format_count;

fn figure(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => format_count(v.round() as u64),
        _ => "N/A".to_string(),
    }
}

#[component]
pub fn DetailCards(disaster: SearchHit) -> Element {
    let year = disaster
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let cards = [
        ("Year", year),
        ("Total Deaths", figure(disaster.total_deaths)),
        ("Total Affected", figure(disaster.total_affected)),
    ];

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; margin-bottom: 32px;",
            for (title, value) in cards {
                div {
                    key: "{title}",
                    style: "padding: 16px; border-radius: 8px; border: 1px solid #e5e7eb;",
                    h4 { style: "margin: 0 0 8px 0;", "{title}" }
                    p { style: "margin: 0; font-size: 24px;", "{value}" }
                }
            }
        }
    }
}
