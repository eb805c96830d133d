use shared::{ChatMessage, Role};
use yew::prelude::*;

use super::markdown::render_markdown;

#[derive(Properties, PartialEq)]
pub struct MessageListProps {
    pub messages: Vec<ChatMessage>,
}

/// Scrollable chat transcript. Assistant turns render as markdown, user
/// turns as plain text; the view stays pinned to the newest message.
#[function_component(MessageList)]
pub fn message_list(props: &MessageListProps) -> Html {
    let list_ref = use_node_ref();

    {
        let list_ref = list_ref.clone();
        use_effect_with(props.messages.len(), move |_| {
            if let Some(element) = list_ref.cast::<web_sys::Element>() {
                element.set_scroll_top(element.scroll_height());
            }
        });
    }

    html! {
        <div class="message-list" ref={list_ref}>
            if props.messages.is_empty() {
                <div class="message-list-empty">
                    { "Configure your settings above and send a message to start the conversation..." }
                </div>
            }
            { for props.messages.iter().enumerate().map(|(i, message)| {
                let row_class = match message.role {
                    Role::User => "message-row user",
                    Role::Assistant => "message-row assistant",
                };
                html! {
                    <div key={i} class={row_class}>
                        if message.role == Role::Assistant {
                            <span class="message-body assistant">
                                { render_markdown(&message.content) }
                            </span>
                        } else {
                            <span class="message-body user">{ &message.content }</span>
                        }
                    </div>
                }
            }) }
        </div>
    }
}
