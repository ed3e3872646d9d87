use maud::{html, Markup};

use super::style::Style;

pub fn card(style: &Style, content: Markup) -> Markup {
    html! {
        div style=[style.to_css()] { (content) }
    }
}

/// A [`card`] laid out as a flex container.
pub fn flex(style: &Style, content: Markup) -> Markup {
    card(&Style::new().display("flex").merge(style), content)
}

pub fn span(style: &Style, content: Markup) -> Markup {
    html! {
        span style=[style.to_css()] { (content) }
    }
}

pub fn list<I>(style: &Style, items: I) -> Markup
where
    I: IntoIterator<Item = Markup>,
{
    html! {
        ul style=[style.to_css()] {
            @for item in items {
                li { (item) }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct LinkProps<'a> {
    pub to: &'a str,
    pub external: bool,
    pub target: &'a str,
    pub class: Option<&'a str>,
    pub style: Style,
}

impl<'a> LinkProps<'a> {
    /// A site-relative route, followed by client-side navigation.
    pub fn internal(to: &'a str) -> Self {
        Self {
            to,
            external: false,
            target: "_blank",
            class: None,
            style: Style::new(),
        }
    }

    /// A literal URL, opened in a new browsing context.
    pub fn external(to: &'a str) -> Self {
        Self {
            external: true,
            ..Self::internal(to)
        }
    }

    pub fn target(mut self, target: &'a str) -> Self {
        self.target = target;
        self
    }

    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

pub fn link(props: &LinkProps<'_>, content: Markup) -> Markup {
    if props.external {
        return html! {
            a href=(props.to) target=(props.target) rel="noopener noreferrer"
                class=[props.class] style=[props.style.to_css()] { (content) }
        };
    }

    let style = Style::new().set("box-shadow", "none").merge(&props.style);
    html! {
        a href=(props.to) data-link="internal" class=[props.class] style=[style.to_css()] {
            (content)
        }
    }
}
