use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};

use super::highlight::highlight_html;

/// Extract the language token from a fence info string: the first
/// ascii-whitespace-separated word. Indented blocks and bare fences carry no
/// hint. Tokens with characters that could not appear in a real language
/// identifier are discarded rather than echoed into markup.
fn language_hint(kind: &CodeBlockKind) -> Option<String> {
    let token = match kind {
        CodeBlockKind::Indented => return None,
        CodeBlockKind::Fenced(info) => info.split_ascii_whitespace().next()?,
    };
    if token.is_empty()
        || !token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '_' | '#' | '.'))
    {
        return None;
    }
    Some(token.to_string())
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES
}

/// Render untrusted markdown to sanitized HTML. Fenced code blocks become
/// `<pre><code class="language-{hint}">` containers with one trailing
/// newline trimmed; inline code spans stay inline with no language tag.
/// The result always passes through the allow-list sanitizer, so script
/// tags, event handlers, and dangerous URI schemes cannot survive.
pub fn render_markdown(text: &str, syntax_enabled: bool) -> String {
    let mut events: Vec<Event> = Vec::new();
    let mut code_block: Option<(Option<String>, String)> = None;

    for event in Parser::new_ext(text, parser_options()) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                code_block = Some((language_hint(&kind), String::new()));
            }
            Event::Text(chunk) if code_block.is_some() => {
                if let Some((_, buf)) = code_block.as_mut() {
                    buf.push_str(&chunk);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((lang, mut buf)) = code_block.take() {
                    if buf.ends_with('\n') {
                        buf.pop();
                    }
                    push_code_block(&mut events, lang.as_deref(), &buf, syntax_enabled);
                }
            }
            other => events.push(other),
        }
    }

    let mut html = String::with_capacity(text.len() * 2);
    pulldown_cmark::html::push_html(&mut html, events.into_iter());
    sanitize_html(&html)
}

fn push_code_block<'a>(
    events: &mut Vec<Event<'a>>,
    lang: Option<&str>,
    code: &str,
    syntax_enabled: bool,
) {
    let mut open = String::from("<pre><code");
    if let Some(lang) = lang {
        open.push_str(" class=\"language-");
        open.push_str(lang);
        open.push('"');
    }
    open.push('>');
    events.push(Event::Html(CowStr::from(open)));

    let highlighted = if syntax_enabled {
        lang.and_then(|hint| highlight_html(hint, code))
    } else {
        None
    };
    match highlighted {
        // Already escaped span markup from the highlighter.
        Some(markup) => events.push(Event::Html(CowStr::from(markup))),
        // Plain text; the HTML writer escapes it.
        None => events.push(Event::Text(CowStr::from(code.to_string()))),
    }

    events.push(Event::Html(CowStr::from("</code></pre>\n".to_string())));
}

/// Allow-list sanitization. Beyond the default safe set, only `class` on the
/// code containers and highlight spans is admitted.
fn sanitize_html(html: &str) -> String {
    ammonia::Builder::default()
        .add_tag_attributes("pre", &["class"])
        .add_tag_attributes("code", &["class"])
        .add_tag_attributes("span", &["class"])
        .clean(html)
        .to_string()
}
