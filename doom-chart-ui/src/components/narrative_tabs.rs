//! Tabs over the four narrative sections of a disaster detail.

use dioxus::prelude::*;
use doom_core::query::{DisasterDetail, NarrativeTab};

const TAB_STYLE: &str = "padding: 8px; border: none; border-radius: 6px; background: #edf2f4; color: #2b2d42;";
const ACTIVE_TAB_STYLE: &str = "padding: 8px; border: none; border-radius: 6px; background: #2b2d42; color: #edf2f4;";

/// Tab strip plus the active section. `children` sit beside the
/// engagement plan (the chatbot).
#[component]
pub fn NarrativeTabs(
    detail: DisasterDetail,
    active: NarrativeTab,
    on_select: EventHandler<NarrativeTab>,
    children: Element,
) -> Element {
    let heading = active.heading();
    let text = detail.narrative(active).to_string();
    let with_children = active == NarrativeTab::Engagement;
    let body_style = if with_children {
        "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;"
    } else {
        ""
    };
    let tabs: Vec<(NarrativeTab, &'static str, &'static str)> = NarrativeTab::ALL
        .into_iter()
        .map(|tab| {
            let style = if tab == active { ACTIVE_TAB_STYLE } else { TAB_STYLE };
            (tab, tab.tab_label(), style)
        })
        .collect();

    rsx! {
        div {
            style: "width: 100%;",
            div {
                role: "tablist",
                style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 4px; margin-bottom: 12px;",
                for (tab, label, style) in tabs {
                    button {
                        key: "{label}",
                        role: "tab",
                        style: "{style}",
                        onclick: move |_| on_select.call(tab),
                        "{label}"
                    }
                }
            }
            div {
                style: "{body_style}",
                div {
                    role: "tabpanel",
                    style: "padding: 16px; border: 1px solid #e5e7eb; border-radius: 8px;",
                    h4 { style: "margin: 0 0 8px 0;", "{heading}" }
                    p { style: "margin: 0; white-space: pre-wrap;", "{text}" }
                }
                if with_children {
                    {children}
                }
            }
        }
    }
}
