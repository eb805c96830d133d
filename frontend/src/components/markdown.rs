//! Markdown-to-Html conversion for assistant messages.
//!
//! Covers the constructs the backend actually produces: paragraphs,
//! headings, lists, emphasis, inline and fenced code, links, and
//! blockquotes. Parsed with pulldown-cmark and walked recursively with a
//! cursor over the event stream.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use yew::prelude::*;

/// Render markdown text as Yew Html.
pub fn render_markdown(text: &str) -> Html {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let events: Vec<Event> = Parser::new_ext(text, options).collect();
    let mut pos = 0;
    render_until(&events, &mut pos, None)
}

/// Render events until the matching end tag (or the end of the stream).
fn render_until(events: &[Event], pos: &mut usize, stop: Option<&TagEnd>) -> Html {
    let mut parts: Vec<Html> = Vec::new();

    while *pos < events.len() {
        let event = &events[*pos];
        *pos += 1;
        match event {
            Event::End(end) if Some(end) == stop => break,
            Event::Start(tag) => parts.push(render_tag(tag, events, pos)),
            Event::Text(text) => parts.push(html! { { text.to_string() } }),
            Event::Code(code) => {
                parts.push(html! { <code class="md-inline-code">{ code.to_string() }</code> })
            }
            Event::SoftBreak => parts.push(html! { { " " } }),
            Event::HardBreak => parts.push(html! { <br /> }),
            Event::Rule => parts.push(html! { <hr class="md-rule" /> }),
            _ => {}
        }
    }

    html! { <>{ for parts }</> }
}

fn render_tag(tag: &Tag, events: &[Event], pos: &mut usize) -> Html {
    let inner = render_until(events, pos, Some(&end_of(tag)));

    match tag {
        Tag::Paragraph => html! { <p class="md-paragraph">{ inner }</p> },
        Tag::Heading { level, .. } => render_heading(*level, inner),
        Tag::BlockQuote(_) => html! { <blockquote class="md-blockquote">{ inner }</blockquote> },
        Tag::CodeBlock(kind) => {
            let lang_class = match kind {
                CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(format!(
                    "language-{}",
                    lang.split_whitespace().next().unwrap_or("")
                )),
                _ => None,
            };
            html! {
                <pre class="md-code-block">
                    <code class={classes!("md-code", lang_class)}>{ inner }</code>
                </pre>
            }
        }
        Tag::List(Some(start)) => {
            html! { <ol class="md-list" start={start.to_string()}>{ inner }</ol> }
        }
        Tag::List(None) => html! { <ul class="md-list">{ inner }</ul> },
        Tag::Item => html! { <li class="md-list-item">{ inner }</li> },
        Tag::Emphasis => html! { <em>{ inner }</em> },
        Tag::Strong => html! { <strong>{ inner }</strong> },
        Tag::Strikethrough => html! { <del>{ inner }</del> },
        Tag::Link { dest_url, .. } => html! {
            <a href={dest_url.to_string()} target="_blank" rel="noopener noreferrer" class="md-link">
                { inner }
            </a>
        },
        _ => inner,
    }
}

/// End tag that closes `tag`; recursion in `render_tag` consumes nested
/// starts, so the first matching end at this level is the right one.
fn end_of(tag: &Tag) -> TagEnd {
    match tag {
        Tag::Paragraph => TagEnd::Paragraph,
        Tag::Heading { level, .. } => TagEnd::Heading(*level),
        Tag::BlockQuote(kind) => TagEnd::BlockQuote(*kind),
        Tag::CodeBlock(_) => TagEnd::CodeBlock,
        Tag::List(start) => TagEnd::List(start.is_some()),
        Tag::Item => TagEnd::Item,
        Tag::Emphasis => TagEnd::Emphasis,
        Tag::Strong => TagEnd::Strong,
        Tag::Strikethrough => TagEnd::Strikethrough,
        Tag::Link { .. } => TagEnd::Link,
        Tag::Image { .. } => TagEnd::Image,
        Tag::Table(_) => TagEnd::Table,
        Tag::TableHead => TagEnd::TableHead,
        Tag::TableRow => TagEnd::TableRow,
        Tag::TableCell => TagEnd::TableCell,
        _ => TagEnd::Paragraph,
    }
}

fn render_heading(level: HeadingLevel, inner: Html) -> Html {
    match level {
        HeadingLevel::H1 => html! { <h1 class="md-heading">{ inner }</h1> },
        HeadingLevel::H2 => html! { <h2 class="md-heading">{ inner }</h2> },
        HeadingLevel::H3 => html! { <h3 class="md-heading">{ inner }</h3> },
        HeadingLevel::H4 => html! { <h4 class="md-heading">{ inner }</h4> },
        HeadingLevel::H5 => html! { <h5 class="md-heading">{ inner }</h5> },
        HeadingLevel::H6 => html! { <h6 class="md-heading">{ inner }</h6> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_tags_match_their_start_tags() {
        assert_eq!(end_of(&Tag::Paragraph), TagEnd::Paragraph);
        assert_eq!(end_of(&Tag::List(Some(3))), TagEnd::List(true));
        assert_eq!(end_of(&Tag::List(None)), TagEnd::List(false));
        assert_eq!(
            end_of(&Tag::Heading {
                level: HeadingLevel::H2,
                id: None,
                classes: vec![],
                attrs: vec![],
            }),
            TagEnd::Heading(HeadingLevel::H2)
        );
    }
}
