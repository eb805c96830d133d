mod chat_input;
mod json_tree;
mod markdown;
mod message_list;
mod page_header;
mod settings_panel;

pub use chat_input::ChatInput;
pub use json_tree::JsonTree;
pub use message_list::MessageList;
pub use page_header::PageHeader;
pub use settings_panel::SettingsPanel;
