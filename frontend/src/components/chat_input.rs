use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChatInputProps {
    /// Current draft text; owned by the page so settings can prefill it.
    pub value: String,
    pub on_change: Callback<String>,
    /// Fired with the trimmed draft on submit; blank drafts are ignored.
    pub on_send: Callback<String>,
    pub loading: bool,
}

/// Message entry form, locked while a reply is pending.
#[function_component(ChatInput)]
pub fn chat_input(props: &ChatInputProps) -> Html {
    let input_ref = use_node_ref();

    // Hand focus back once the reply arrives.
    {
        let input_ref = input_ref.clone();
        use_effect_with(props.loading, move |loading| {
            if !*loading {
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
            }
        });
    }

    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let on_submit = {
        let value = props.value.clone();
        let on_send = props.on_send.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let text = value.trim().to_string();
            if text.is_empty() {
                return;
            }
            on_send.emit(text);
        })
    };

    let blank = props.value.trim().is_empty();

    html! {
        <form class="chat-input" onsubmit={on_submit}>
            <input
                ref={input_ref}
                type="text"
                value={props.value.clone()}
                oninput={on_input}
                placeholder={if props.loading { "Waiting for AI..." } else { "Type your message..." }}
                disabled={props.loading}
            />
            <button type="submit" disabled={props.loading || blank}>
                { "Send" }
            </button>
        </form>
    }
}
