use pulldown_cmark::{html, Event, Options, Parser, TagEnd};

/// Length, in characters, excerpts are pruned to.
pub const EXCERPT_LENGTH: usize = 200;

fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

pub fn render_markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, markdown_options());
    let mut html_out = String::new();
    html::push_html(&mut html_out, parser);
    html_out
}

/// Text content of the document with markup and raw HTML dropped.
pub fn plain_text(markdown: &str) -> String {
    let mut text = String::new();
    for event in Parser::new_ext(markdown, markdown_options()) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak
            | Event::HardBreak
            | Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(..)
                | TagEnd::BlockQuote(..)
                | TagEnd::CodeBlock
                | TagEnd::Item
                | TagEnd::TableCell,
            ) => text.push(' '),
            _ => {}
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cuts `text` to at most `length` characters on a word boundary, marking the cut with `…`.
pub fn prune(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }

    let cut: String = text.chars().take(length).collect();
    let ends_on_word = text.chars().nth(length).is_some_and(char::is_whitespace);
    let kept = match cut.rfind(char::is_whitespace) {
        Some(boundary) if boundary > 0 && !ends_on_word => &cut[..boundary],
        _ => cut.as_str(),
    };
    format!("{}…", kept.trim_end())
}

/// Plain-text excerpt, pruned to [`EXCERPT_LENGTH`].
pub fn excerpt_text(markdown: &str) -> String {
    prune(&plain_text(markdown), EXCERPT_LENGTH)
}
