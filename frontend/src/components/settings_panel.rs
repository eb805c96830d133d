use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SettingsPanelProps {
    pub system_prompt: String,
    pub initial_message: String,
    pub on_system_prompt: Callback<String>,
    pub on_initial_message: Callback<String>,
    /// Fired with the initial message when "Use Initial Message" is clicked;
    /// ignored while the initial message is blank.
    pub on_use_initial: Callback<String>,
}

/// Prompt-editing panel shown above the chat while settings are open.
#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    let on_prompt_input = {
        let on_system_prompt = props.on_system_prompt.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_system_prompt.emit(area.value());
        })
    };

    let on_message_input = {
        let on_initial_message = props.on_initial_message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_initial_message.emit(input.value());
        })
    };

    let on_use = {
        let initial_message = props.initial_message.clone();
        let on_use_initial = props.on_use_initial.clone();
        Callback::from(move |_: MouseEvent| {
            if !initial_message.trim().is_empty() {
                on_use_initial.emit(initial_message.clone());
            }
        })
    };

    html! {
        <div class="settings-panel">
            <div class="form-group">
                <label for="system-prompt">{ "System Prompt:" }</label>
                <textarea
                    id="system-prompt"
                    value={props.system_prompt.clone()}
                    oninput={on_prompt_input}
                    placeholder="Enter your custom system prompt..."
                />
            </div>
            <div class="form-group">
                <label for="initial-message">{ "Initial Message:" }</label>
                <input
                    type="text"
                    id="initial-message"
                    value={props.initial_message.clone()}
                    oninput={on_message_input}
                    placeholder="Enter the initial message to start the conversation..."
                />
                <button type="button" onclick={on_use}>
                    { "Use Initial Message" }
                </button>
            </div>
        </div>
    }
}
