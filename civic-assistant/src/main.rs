//! Civic Response Assistant
//!
//! Free-text search over disasters served by the query service. Picking a
//! result loads its detail: impact figures plus four narrative tabs
//! (summary, public information, engagement plan, education). The
//! engagement tab carries a chatbot for questions about the disaster.
//!
//! Responses can arrive out of order. Each search or detail request holds a
//! ticket from a `RequestSequence` and is dropped unless it is still the
//! newest when it completes; detail and chat calls go through a
//! generation-checked `DisasterRef` so they never address a replaced list.

use doom_chart_ui::components::{
    ChartHeader, ChatBox, DetailCards, ErrorDisplay, LoadingSpinner, NarrativeTabs, ResultPicker,
    SearchInput,
};
use doom_chart_ui::config::AssistantConfig;
use doom_chart_ui::state::{apply_chat, AssistantState};
use doom_core::client::{should_chat, should_search, QueryClient};
use doom_core::query::NarrativeTab;
use doom_core::supersede::Settled;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("civic-assistant-root"))
        .launch(App);
}

fn on_search_input(mut assistant: AssistantState, client: QueryClient, term: String) {
    assistant.search_term.set(term.clone());
    if !should_search(&term) {
        return;
    }

    if let Some(previous) = assistant.search_task.take() {
        previous.cancel();
    }
    let ticket = assistant.searches.read().begin();
    let task = spawn(async move {
        match ticket.settle(client.search(&term).await) {
            Settled::Applied(hits) => {
                // Pending detail and chat requests address the old list
                assistant.details.read().cancel_all();
                assistant.chats.read().cancel_all();
                assistant.results.write().replace(hits);
                assistant.selected.set(None);
                assistant.detail.set(None);
                assistant.chat_response.set(None);
                assistant.error_msg.set(None);
            }
            Settled::Failed(e) => {
                log::error!("search '{}' failed: {}", term, e);
                assistant.error_msg.set(Some(e.to_string()));
            }
            Settled::Superseded => log::info!("dropping superseded search '{}'", term),
        }
    });
    assistant.search_task.set(Some(task));
}

fn on_pick(mut assistant: AssistantState, client: QueryClient, index: Option<usize>) {
    let reference = index.and_then(|i| assistant.results.read().reference(i));
    assistant.selected.set(reference);
    assistant.detail.set(None);
    assistant.chat_response.set(None);
    assistant.active_tab.set(NarrativeTab::default());
    assistant.chats.read().cancel_all();
    let Some(reference) = reference else {
        assistant.details.read().cancel_all();
        return;
    };

    let disaster_id = match assistant.results.read().disaster_id(reference) {
        Ok(id) => id,
        Err(e) => {
            assistant.error_msg.set(Some(e.to_string()));
            return;
        }
    };
    let ticket = assistant.details.read().begin();
    spawn(async move {
        let result = client.detail(disaster_id).await;
        let still_listed = assistant.results.peek().resolve(reference).is_some();
        if !ticket.is_current() || !still_listed {
            log::info!("dropping superseded detail for disaster {}", disaster_id);
            return;
        }
        match result {
            Ok(detail) => {
                assistant.detail.set(Some(detail));
                assistant.error_msg.set(None);
            }
            Err(e) => {
                log::error!("detail for disaster {} failed: {}", disaster_id, e);
                assistant.error_msg.set(Some(e.to_string()));
            }
        }
    });
}

fn on_ask(mut assistant: AssistantState, client: QueryClient) {
    let question = assistant.question.peek().clone();
    if !should_chat(&question) {
        return;
    }
    let Some(reference) = *assistant.selected.peek() else {
        return;
    };
    let disaster_id = match assistant.results.peek().disaster_id(reference) {
        Ok(id) => id,
        Err(e) => {
            assistant.error_msg.set(Some(e.to_string()));
            return;
        }
    };

    let ticket = assistant.chats.read().begin();
    spawn(async move {
        let settled = ticket.settle(client.chat(disaster_id, &question).await);
        match &settled {
            Settled::Failed(e) => log::error!("chat about disaster {} failed: {}", disaster_id, e),
            Settled::Superseded => log::info!("dropping superseded answer for disaster {}", disaster_id),
            Settled::Applied(_) => {}
        }
        apply_chat(
            settled,
            &mut assistant.chat_response.write(),
            &mut assistant.error_msg.write(),
        );
    });
}

#[component]
fn App() -> Element {
    let config = use_context_provider(AssistantConfig::from_build_env);
    let client = use_context_provider(|| QueryClient::new(config.api_base_url.clone()));
    let mut assistant = use_context_provider(AssistantState::new);

    let hits = assistant.results.read().hits().to_vec();
    let picked = (assistant.selected)()
        .and_then(|r| assistant.results.read().resolve(r).cloned());
    let detail = (assistant.detail)();

    let search_client = client.clone();
    let pick_client = client.clone();
    let chat_client = client.clone();

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Civic Response Assistant Dashboard".to_string(),
                caption: "Search by country, disaster type or year".to_string(),
            }

            SearchInput {
                value: (assistant.search_term)(),
                on_input: move |term: String| on_search_input(assistant, search_client.clone(), term),
            }

            if let Some(err) = (assistant.error_msg)() {
                ErrorDisplay { message: err }
            }

            ResultPicker {
                hits,
                on_pick: move |index: Option<usize>| on_pick(assistant, pick_client.clone(), index),
            }

            if let Some(disaster) = picked {
                div {
                    style: "display: flex; flex-direction: column; gap: 16px; margin-top: 24px;",
                    DetailCards { disaster }
                    if let Some(detail) = detail {
                        NarrativeTabs {
                            detail,
                            active: (assistant.active_tab)(),
                            on_select: move |tab: NarrativeTab| assistant.active_tab.set(tab),
                            ChatBox {
                                question: (assistant.question)(),
                                response: (assistant.chat_response)(),
                                on_input: move |q: String| assistant.question.set(q),
                                on_ask: move |_| on_ask(assistant, chat_client.clone()),
                            }
                        }
                    } else {
                        LoadingSpinner { message: "Loading disaster details...".to_string() }
                    }
                }
            }
        }
    }
}
