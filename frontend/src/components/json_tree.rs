use shared::tree::{self, Node, Tone, VisualTree};
use yew::prelude::*;

/// Accent color for keys.
const KEY_COLOR: &str = "#4CAF50";
/// Boolean leaves stand out from other scalars.
const BOOL_COLOR: &str = "#FF9800";
const SCALAR_COLOR: &str = "#E3F2FD";

#[derive(Properties, PartialEq)]
pub struct JsonTreeProps {
    pub value: Node,
    #[prop_or(0)]
    pub depth: u32,
}

/// Renders a `Node` as a nested key/value tree with depth-scaled labels.
#[function_component(JsonTree)]
pub fn json_tree(props: &JsonTreeProps) -> Html {
    visual_to_html(&tree::render(&props.value, props.depth))
}

fn visual_to_html(tree: &VisualTree) -> Html {
    match tree {
        VisualTree::Leaf(leaf) => {
            let color = match leaf.tone {
                Tone::Boolean => BOOL_COLOR,
                Tone::Plain => SCALAR_COLOR,
            };
            html! {
                <span
                    class="tree-leaf"
                    style={format!("color: {}; margin-left: 8px; font-size: 14px", color)}
                >
                    { &leaf.text }
                </span>
            }
        }
        VisualTree::Branch(branch) => html! {
            <div class="tree-branch" style={format!("margin-left: {}px", branch.indent)}>
                { for branch.entries.iter().map(|entry| html! {
                    <div class="tree-entry" key={entry.label.text.clone()}>
                        <span
                            class="tree-label"
                            style={format!(
                                "color: {}; font-weight: bold; font-size: {}px",
                                KEY_COLOR, entry.label.size,
                            )}
                        >
                            { format!("{}:", entry.label.text) }
                        </span>
                        { visual_to_html(&entry.child) }
                    </div>
                }) }
            </div>
        },
    }
}
