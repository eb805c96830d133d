//! Virtual Tutor screen: checklist column beside the tutoring chat.

use shared::tree::Node;
use shared::{ChatMessage, ChatRequest, SessionState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::client::{self, CHAT_ENDPOINT};
use crate::components::{ChatInput, JsonTree, MessageList, PageHeader, SettingsPanel};
use crate::hooks::use_persistent;
use crate::Route;

const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful medical assistant.";
const DEFAULT_INITIAL_MESSAGE: &str = "Please help me start my medical case analysis.";
const BACKEND_UNREACHABLE: &str = "Error: Could not reach backend.";

/// Fixed checklist shown beside the chat; demo content, not part of the
/// session state.
fn checklist_data() -> Node {
    Node::from(serde_json::json!({
        "examinerName": "Guest User",
        "examinerYear": "D1",
        "exportTime": "05/07/2025 16:45",
        "summary": {
            "date": "2025-07-05",
            "time": "16:42",
            "extern": "Guest User (D1)",
            "reasonForVisit": "",
            "clinicalFindings": {
                "respiratory": {
                    "smokingStatus": "Active smoking",
                    "dependenceLevel": "Strong dependence",
                    "quitAttempts": "3%",
                    "cannabisUse": false,
                    "cough": "Greasy cough",
                    "expectoration": {
                        "abundant": true,
                        "mucous": true,
                    },
                    "chestPain": false,
                    "hemoptysis": false,
                    "dyspnea": {
                        "MMRCStage": 3,
                        "inspiratory": false,
                        "stridor": false,
                        "cornage": false,
                        "wheezing": false,
                        "expiratory": false,
                        "orthopnea": false,
                        "kussmaul": false,
                        "cheyneStokes": false,
                        "apnea": false,
                    },
                    "thoracicExpansion": true,
                },
            },
        },
    }))
}

#[function_component(TutorPage)]
pub fn tutor_page() -> Html {
    let messages = use_state(Vec::<ChatMessage>::new);
    let session_state = use_state(SessionState::default);
    let draft = use_state(String::new);
    let loading = use_state(|| false);
    let show_settings = use_state(|| false);

    let (system_prompt, set_system_prompt) =
        use_persistent("tutor-system-prompt", || DEFAULT_SYSTEM_PROMPT.to_string());
    let (initial_message, set_initial_message) =
        use_persistent("tutor-initial-message", || {
            DEFAULT_INITIAL_MESSAGE.to_string()
        });

    let checklist = use_memo((), |_| checklist_data());

    let on_send = {
        let messages = messages.clone();
        let session_state = session_state.clone();
        let draft = draft.clone();
        let loading = loading.clone();
        let system_prompt = system_prompt.clone();

        Callback::from(move |text: String| {
            let user_turn = ChatMessage::user(text.clone());

            let mut transcript = (*messages).clone();
            transcript.push(user_turn.clone());
            messages.set(transcript.clone());
            draft.set(String::new());
            loading.set(true);

            // The tutor agent reads history off the session state, so the
            // pending user turn is appended there before the request.
            let mut state = (*session_state).clone();
            state.history.push(user_turn);

            let request = ChatRequest {
                message: text,
                state,
                system_prompt: system_prompt.clone(),
                history: None,
            };

            let messages = messages.clone();
            let session_state = session_state.clone();
            let loading = loading.clone();
            spawn_local(async move {
                let mut transcript = transcript;
                match client::send_chat(CHAT_ENDPOINT, &request).await {
                    Ok(reply) => {
                        transcript.push(ChatMessage::assistant(reply.ai_message));
                        messages.set(transcript);
                        session_state.set(reply.state);
                    }
                    Err(e) => {
                        log::error!("Chat request failed: {}", e);
                        transcript.push(ChatMessage::assistant(BACKEND_UNREACHABLE));
                        messages.set(transcript);
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_draft_change = {
        let draft = draft.clone();
        Callback::from(move |text: String| draft.set(text))
    };

    let toggle_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_: MouseEvent| show_settings.set(!*show_settings))
    };

    let on_reset = {
        let messages = messages.clone();
        let session_state = session_state.clone();
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            messages.set(Vec::new());
            session_state.set(SessionState::default());
            draft.set(String::new());
        })
    };

    // Prefill the draft with the configured opener and close the panel.
    let on_use_initial = {
        let draft = draft.clone();
        let show_settings = show_settings.clone();
        Callback::from(move |text: String| {
            draft.set(text);
            show_settings.set(false);
        })
    };

    html! {
        <div class="page tutor-page">
            <PageHeader title="Virtual Tutor" current={Route::Tutor}>
                <button
                    class={classes!("header-button", (*show_settings).then_some("active"))}
                    onclick={toggle_settings}
                >
                    { "Settings" }
                </button>
                <button class="header-button" onclick={on_reset}>
                    { "Reset" }
                </button>
            </PageHeader>

            if *show_settings {
                <SettingsPanel
                    system_prompt={system_prompt.clone()}
                    initial_message={initial_message.clone()}
                    on_system_prompt={set_system_prompt.clone()}
                    on_initial_message={set_initial_message.clone()}
                    on_use_initial={on_use_initial}
                />
            }

            <main class="two-columns">
                <section class="checklist-column">
                    <h4>{ "Patient Checklist Data" }</h4>
                    <JsonTree value={(*checklist).clone()} />
                </section>
                <section class="chat-column">
                    <MessageList messages={(*messages).clone()} />
                    <ChatInput
                        value={(*draft).clone()}
                        on_change={on_draft_change}
                        on_send={on_send}
                        loading={*loading}
                    />
                </section>
            </main>
        </div>
    }
}
