//! Recursive renderer that turns a JSON-like value into a displayable tree.
//!
//! The transform is pure: the same input value and depth always produce the
//! same [`VisualTree`], with no I/O and no mutation of the input. Presentation
//! rules (indentation, label sizing, leaf text) live here so the widget layer
//! only has to translate the finished tree into markup.

use serde_json::Value;

/// Indentation added per nesting level, in display units (px).
pub const INDENT_STEP: u32 = 20;
/// Label font size at the deepest levels.
pub const BASE_LABEL_SIZE: u32 = 14;
/// How much larger top-level labels may get than [`BASE_LABEL_SIZE`].
pub const LABEL_SHRINK_CAP: u32 = 2;
/// Recursion ceiling used by [`render`]. JSON payloads cannot be cyclic, so
/// this only guards against pathological machine-generated nesting.
pub const DEFAULT_MAX_DEPTH: u32 = 64;
/// Leaf text shown for a composite cut off at the depth ceiling.
pub const TRUNCATION_MARK: &str = "…";

/// A JSON-compatible input value.
///
/// Mapping entries keep their insertion order; it determines display order.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    Sequence(Vec<Node>),
    Mapping(Vec<(String, Node)>),
}

impl Node {
    /// Whether the value nests further (sequence or mapping).
    pub fn is_composite(&self) -> bool {
        matches!(self, Node::Sequence(_) | Node::Mapping(_))
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => Node::Number(n),
            Value::String(s) => Node::Text(s),
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Object(fields) => Node::Mapping(
                fields
                    .into_iter()
                    .map(|(key, child)| (key, Node::from(child)))
                    .collect(),
            ),
        }
    }
}

/// Color role of a leaf; booleans are visually distinguished from other
/// scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Boolean,
    Plain,
}

/// A terminal value rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub text: String,
    pub tone: Tone,
}

/// A key (or synthetic sequence index) rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    /// `14 + max(0, 2 - depth)`: top-level keys are larger, floored at 14.
    pub size: u32,
}

/// One labeled child of a container.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub label: Label,
    pub child: VisualTree,
}

/// A container rendering: entries in insertion order, indented by depth.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub indent: u32,
    pub entries: Vec<Entry>,
}

/// Output of [`render`]: a nested, displayable mirror of the input value.
#[derive(Debug, Clone, PartialEq)]
pub enum VisualTree {
    Leaf(Leaf),
    Branch(Branch),
}

/// Label size for entries of a container at `depth`.
pub fn label_size(depth: u32) -> u32 {
    BASE_LABEL_SIZE + LABEL_SHRINK_CAP.saturating_sub(depth)
}

/// Render `value` at `depth` with the default depth ceiling.
pub fn render(value: &Node, depth: u32) -> VisualTree {
    render_bounded(value, depth, DEFAULT_MAX_DEPTH)
}

/// Render with an explicit depth ceiling. A composite at the ceiling becomes
/// a [`TRUNCATION_MARK`] leaf instead of recursing.
pub fn render_bounded(value: &Node, depth: u32, max_depth: u32) -> VisualTree {
    match value {
        Node::Mapping(fields) if depth < max_depth => VisualTree::Branch(Branch {
            indent: depth * INDENT_STEP,
            entries: fields
                .iter()
                .map(|(key, child)| entry(key.clone(), child, depth, max_depth))
                .collect(),
        }),
        Node::Sequence(items) if depth < max_depth => VisualTree::Branch(Branch {
            indent: depth * INDENT_STEP,
            entries: items
                .iter()
                .enumerate()
                .map(|(index, child)| entry(index.to_string(), child, depth, max_depth))
                .collect(),
        }),
        other => VisualTree::Leaf(leaf(other)),
    }
}

fn entry(key: String, child: &Node, depth: u32, max_depth: u32) -> Entry {
    Entry {
        label: Label {
            text: key,
            size: label_size(depth),
        },
        child: if child.is_composite() {
            render_bounded(child, depth + 1, max_depth)
        } else {
            VisualTree::Leaf(leaf(child))
        },
    }
}

/// Leaf text for a scalar. A composite only reaches here at the depth
/// ceiling and is shown truncated.
fn leaf(value: &Node) -> Leaf {
    let (text, tone) = match value {
        Node::Bool(true) => ("Yes".to_string(), Tone::Boolean),
        Node::Bool(false) => ("No".to_string(), Tone::Boolean),
        Node::Null => ("null".to_string(), Tone::Plain),
        Node::Number(n) => (n.to_string(), Tone::Plain),
        Node::Text(s) => (s.clone(), Tone::Plain),
        Node::Sequence(_) | Node::Mapping(_) => (TRUNCATION_MARK.to_string(), Tone::Plain),
    };
    Leaf { text, tone }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render_json(value: Value) -> VisualTree {
        render(&Node::from(value), 0)
    }

    fn entries(tree: &VisualTree) -> &[Entry] {
        match tree {
            VisualTree::Branch(branch) => &branch.entries,
            VisualTree::Leaf(leaf) => panic!("expected branch, got leaf {:?}", leaf),
        }
    }

    fn leaf_text(tree: &VisualTree) -> &str {
        match tree {
            VisualTree::Leaf(leaf) => &leaf.text,
            VisualTree::Branch(_) => panic!("expected leaf, got branch"),
        }
    }

    #[test]
    fn booleans_render_as_yes_and_no() {
        let tree = render_json(json!({"flag": true}));
        let entry = &entries(&tree)[0];
        assert_eq!(entry.label.text, "flag");
        match &entry.child {
            VisualTree::Leaf(leaf) => {
                assert_eq!(leaf.text, "Yes");
                assert_eq!(leaf.tone, Tone::Boolean);
            }
            other => panic!("expected leaf, got {:?}", other),
        }

        let tree = render_json(json!({"flag": false}));
        assert_eq!(leaf_text(&entries(&tree)[0].child), "No");
    }

    #[test]
    fn mapping_keys_keep_insertion_order() {
        let tree = render_json(json!({"b": 1, "a": 2}));
        let keys: Vec<&str> = entries(&tree)
            .iter()
            .map(|e| e.label.text.as_str())
            .collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn label_size_shrinks_then_floors() {
        assert_eq!(label_size(0), 16);
        assert_eq!(label_size(1), 15);
        assert_eq!(label_size(2), 14);
        assert_eq!(label_size(5), 14);
    }

    #[test]
    fn nested_mappings_terminate_with_leaf() {
        let tree = render_json(json!({"a": {"b": {"c": 1}}}));

        let level0 = entries(&tree);
        assert_eq!(level0[0].label.text, "a");
        assert_eq!(level0[0].label.size, 16);

        let level1 = entries(&level0[0].child);
        assert_eq!(level1[0].label.text, "b");
        assert_eq!(level1[0].label.size, 15);
        match &level0[0].child {
            VisualTree::Branch(branch) => assert_eq!(branch.indent, 20),
            _ => panic!("expected branch"),
        }

        let level2 = entries(&level1[0].child);
        assert_eq!(level2[0].label.text, "c");
        assert_eq!(level2[0].label.size, 14);
        assert_eq!(leaf_text(&level2[0].child), "1");
    }

    #[test]
    fn empty_mapping_is_an_empty_container() {
        let tree = render_json(json!({}));
        assert_eq!(entries(&tree).len(), 0);
        match &tree {
            VisualTree::Branch(branch) => assert_eq!(branch.indent, 0),
            _ => panic!("expected branch"),
        }
    }

    #[test]
    fn rendering_is_pure() {
        let node = Node::from(json!({"a": [1, {"b": false}], "c": null}));
        assert_eq!(render(&node, 0), render(&node, 0));
        assert_eq!(render(&node, 3), render(&node, 3));
    }

    #[test]
    fn bare_scalar_renders_as_leaf() {
        let tree = render_json(json!(42));
        match &tree {
            VisualTree::Leaf(leaf) => {
                assert_eq!(leaf.text, "42");
                assert_eq!(leaf.tone, Tone::Plain);
            }
            _ => panic!("expected leaf"),
        }
    }

    #[test]
    fn null_renders_as_plain_null() {
        let tree = render_json(json!({"missing": null}));
        let entry = &entries(&tree)[0];
        match &entry.child {
            VisualTree::Leaf(leaf) => {
                assert_eq!(leaf.text, "null");
                assert_eq!(leaf.tone, Tone::Plain);
            }
            _ => panic!("expected leaf"),
        }
    }

    #[test]
    fn sequence_elements_get_positional_labels() {
        let tree = render_json(json!({"items": ["x", "y"]}));
        let items = &entries(&tree)[0].child;
        let labels: Vec<&str> = entries(items)
            .iter()
            .map(|e| e.label.text.as_str())
            .collect();
        assert_eq!(labels, ["0", "1"]);
        assert_eq!(leaf_text(&entries(items)[0].child), "x");
        assert_eq!(leaf_text(&entries(items)[1].child), "y");
    }

    #[test]
    fn depth_ceiling_truncates_composites() {
        let node = Node::from(json!({"a": {"b": {"c": {"d": 1}}}}));
        let tree = render_bounded(&node, 0, 2);

        let level1 = &entries(&tree)[0].child;
        // "b" sits at the ceiling: its composite child is cut off.
        let level2 = &entries(level1)[0].child;
        assert_eq!(leaf_text(level2), TRUNCATION_MARK);
    }

    #[test]
    fn conversion_preserves_numbers_and_text() {
        let node = Node::from(json!({"n": 3.5, "s": "hi"}));
        let tree = render(&node, 0);
        assert_eq!(leaf_text(&entries(&tree)[0].child), "3.5");
        assert_eq!(leaf_text(&entries(&tree)[1].child), "hi");
    }
}
