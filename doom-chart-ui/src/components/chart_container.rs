//! Container for a D3.js chart or Leaflet map.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id the JS side renders into
    pub id: String,
    /// Height in pixels
    #[props(default = 300)]
    pub height: u32,
}

/// A fixed-height div the JS bridge renders into.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!("height: {}px; width: 100%; position: relative;", props.height);

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
