//! Summary statistics of the matching records.

use super::{ChartHeader, CARD_STYLE};
use dioxus::prelude::*;
use doom_data::format::{format_count, format_loss};
use doom_data::summary::{ImpactSummary, NO_DATA};

#[component]
pub fn StatsPanel(#[props(!optional)] summary: Option<ImpactSummary>) -> Element {
    let Some(summary) = summary else {
        return rsx! {
            div { style: "{CARD_STYLE}", p { "{NO_DATA}" } }
        };
    };

    let caption = if summary.events == 1 {
        "1 recorded event".to_string()
    } else {
        format!("{} recorded events", summary.events)
    };
    let deaths = format_count(summary.total_deaths);
    let affected = format_count(summary.affected_population);
    let loss = format_loss(summary.economic_loss);

    rsx! {
        div {
            style: "{CARD_STYLE}",
            ChartHeader { title: "Disaster Statistics".to_string(), caption }
            p { "Total Deaths: {deaths}" }
            p { "Affected Population: {affected}" }
            p { "Economic Loss: {loss}" }
        }
    }
}
