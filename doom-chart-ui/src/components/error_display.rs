//! Error display component.

use dioxus::prelude::*;
use doom_core::selection::NO_DATA_MESSAGE;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Label shown before a message; the "no data" notice is not an error.
pub fn message_prefix(message: &str) -> &'static str {
    if message == NO_DATA_MESSAGE {
        ""
    } else {
        "Error: "
    }
}

/// Displays an error or notice in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let prefix = message_prefix(&props.message);

    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 16px 0; background: #FFEBEE; color: #d90429; border-radius: 4px; border: 1px solid #EF9A9A;",
            if !prefix.is_empty() {
                strong { "{prefix}" }
            }
            "{props.message}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_notice_has_no_error_prefix() {
        assert_eq!(message_prefix(NO_DATA_MESSAGE), "");
        assert_eq!(
            message_prefix("Failed to fetch disasters: 500 Internal Server Error"),
            "Error: "
        );
    }
}
