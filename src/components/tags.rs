use maud::{html, Markup};

use crate::system::{flex, span, Style};

/// Tag badges for a post. Absent or empty input renders nothing at all.
pub fn tags(tags: Option<&[&str]>) -> Markup {
    let Some(tags) = tags.filter(|tags| !tags.is_empty()) else {
        return html! {};
    };

    let badge = Style::new()
        .color("orange")
        .px(1)
        .py("2px")
        .border("1px solid orange")
        .border_radius("4px");

    flex(
        &Style::new().py(2),
        html! {
            @for tag in tags {
                (span(&Style::new().pr(2), html! {
                    span.article-tags style=[badge.to_css()] { (tag) }
                }))
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn badge_texts(markup: Markup) -> Vec<String> {
        let fragment = Html::parse_fragment(&markup.into_string());
        let selector = Selector::parse(".article-tags").unwrap();
        fragment
            .select(&selector)
            .map(|el| el.text().collect())
            .collect()
    }

    #[test]
    fn absent_tags_render_nothing() {
        assert!(tags(None).into_string().is_empty());
    }

    #[test]
    fn empty_tags_render_nothing() {
        assert!(tags(Some(&[])).into_string().is_empty());
    }

    #[test]
    fn renders_one_badge_per_tag_in_order() {
        let out = tags(Some(&["a", "b"]));
        assert_eq!(badge_texts(out), vec!["a", "b"]);
    }

    #[test]
    fn badges_sit_in_a_flex_row() {
        let out = tags(Some(&["rust"])).into_string();
        assert!(out.starts_with(r#"<div style="display: flex; padding-top: 8px; padding-bottom: 8px;">"#));
        assert!(out.contains("border: 1px solid orange;"));
    }

    #[test]
    fn tag_text_is_escaped() {
        let out = tags(Some(&["<script>"])).into_string();
        assert!(out.contains("&lt;script&gt;"));
    }
}
