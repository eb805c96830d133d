//! Virtual Patient screen: role-play chat against a patient persona.

use shared::{ChatMessage, ChatRequest, SessionState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::client::{self, SIMPLE_CHAT_ENDPOINT};
use crate::components::{ChatInput, MessageList, PageHeader, SettingsPanel};
use crate::hooks::use_persistent;
use crate::Route;

const DEFAULT_SYSTEM_PROMPT: &str = "\
You are roleplaying as a patient for medical education purposes. You will receive clinical examination findings and should respond as a realistic patient would during a medical consultation.

ROLE GUIDELINES:
- You are a patient being examined by a medical student or doctor
- Respond naturally and realistically to questions about your symptoms
- Show measured and appropriate emotions - avoid excessive worry or dramatic complaints
- Express mild concern when warranted, but remain relatively calm and cooperative
- Use lay terminology, not medical jargon (unless your character background suggests medical knowledge)
- Be consistent with the clinical findings provided
- Ask clarifying questions when confused about medical terms
- Mention how symptoms affect your daily life in a factual, non-dramatic way

RESPONSE STYLE:
- Use first person (\"I feel...\", \"My stomach...\", etc.)
- Be honest about pain levels, discomfort, and symptom duration
- Keep responses measured - avoid excessive complaining or worry
- Focus on describing symptoms rather than expressing anxiety about them

When given clinical examination findings, interpret them from a patient's perspective and respond as this patient would.

PATIENT CONDITION
Pulmonary:
- Shortness of breath
- For a long time
- Cough
- Even more difficulty breathing when lying down";

const DEFAULT_INITIAL_MESSAGE: &str = "Hi, What brings you here today?";
const BACKEND_UNREACHABLE: &str = "Error: Could not reach backend.";

#[function_component(VirtualPatientPage)]
pub fn virtual_patient_page() -> Html {
    let messages = use_state(Vec::<ChatMessage>::new);
    let session_state = use_state(SessionState::default);
    let draft = use_state(String::new);
    let loading = use_state(|| false);
    let show_settings = use_state(|| false);

    let (system_prompt, set_system_prompt) =
        use_persistent("patient-system-prompt", || DEFAULT_SYSTEM_PROMPT.to_string());
    let (initial_message, set_initial_message) =
        use_persistent("patient-initial-message", || {
            DEFAULT_INITIAL_MESSAGE.to_string()
        });

    let on_send = {
        let messages = messages.clone();
        let session_state = session_state.clone();
        let draft = draft.clone();
        let loading = loading.clone();
        let system_prompt = system_prompt.clone();

        Callback::from(move |text: String| {
            let mut transcript = (*messages).clone();
            transcript.push(ChatMessage::user(text.clone()));
            messages.set(transcript.clone());
            draft.set(String::new());
            loading.set(true);

            // Role-play is stateless on the backend: the full transcript
            // travels with each request instead of living in the state.
            let request = ChatRequest {
                message: text,
                state: (*session_state).clone(),
                system_prompt: system_prompt.clone(),
                history: Some(transcript.clone()),
            };

            let messages = messages.clone();
            let session_state = session_state.clone();
            let loading = loading.clone();
            spawn_local(async move {
                let mut transcript = transcript;
                match client::send_chat(SIMPLE_CHAT_ENDPOINT, &request).await {
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

    let on_use_initial = {
        let draft = draft.clone();
        let show_settings = show_settings.clone();
        Callback::from(move |text: String| {
            draft.set(text);
            show_settings.set(false);
        })
    };

    html! {
        <div class="page patient-page">
            <PageHeader title="Virtual Patient" current={Route::VirtualPatient}>
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

            <main class="single-column">
                <MessageList messages={(*messages).clone()} />
                <ChatInput
                    value={(*draft).clone()}
                    on_change={on_draft_change}
                    on_send={on_send}
                    loading={*loading}
                />
            </main>
        </div>
    }
}
