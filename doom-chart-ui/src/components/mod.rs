//! Reusable Dioxus RSX components for DoomIndex apps.

mod chart_container;
mod chart_header;
mod chat_box;
mod country_selector;
mod detail_cards;
mod disaster_cards;
mod disaster_type_selector;
mod error_display;
mod loading_spinner;
mod narrative_tabs;
mod result_picker;
mod search_button;
mod search_input;
mod stats_panel;
mod year_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use chat_box::ChatBox;
pub use country_selector::CountrySelector;
pub use detail_cards::DetailCards;
pub use disaster_cards::DisasterCards;
pub use disaster_type_selector::DisasterTypeSelector;
pub use error_display::{message_prefix, ErrorDisplay};
pub use loading_spinner::LoadingSpinner;
pub use narrative_tabs::NarrativeTabs;
pub use result_picker::ResultPicker;
pub use search_button::{apply_outcome, run_search, SearchButton};
pub use search_input::SearchInput;
pub use stats_panel::StatsPanel;
pub use year_selector::{year_helper_text, YearSelector};

/// Rounded input style shared by the selectors.
pub(crate) const FIELD_STYLE: &str =
    "padding: 12px 16px; border-radius: 30px; border: 1px solid #8d99ae; background: #edf2f4; font-size: 15px; width: 100%;";

/// Card style shared by the result panels.
pub(crate) const CARD_STYLE: &str =
    "height: 100%; padding: 16px; border-radius: 8px; background: #fff; box-shadow: 0 1px 4px rgba(0,0,0,0.15);";
