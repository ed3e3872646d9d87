use maud::{html, Markup, PreEscaped};

use crate::components::{bio, layout, seo, tags, SeoProps};
use crate::models::{Post, PostSummary, SiteMetadata};
use crate::system::{link, list, LinkProps, Style};
use crate::theme::rhythm;

fn neighbour(site: &SiteMetadata, post: Option<&PostSummary>, newer: bool) -> Markup {
    let Some(post) = post else {
        return html! {};
    };
    let href = site.path(&post.slug);
    let rel = if newer { "next" } else { "prev" };
    html! {
        @if newer {
            (link(&LinkProps::internal(&href).class(rel), html! { (post.display_title()) " →" }))
        } @else {
            (link(&LinkProps::internal(&href).class(rel), html! { "← " (post.display_title()) }))
        }
    }
}

/// A single post. `older` and `newer` are its neighbours in the post list.
pub fn blog_post(
    site: &SiteMetadata,
    post: &Post,
    older: Option<&PostSummary>,
    newer: Option<&PostSummary>,
) -> Markup {
    let summary = &post.summary;
    let location = site.path(&summary.slug);
    let head = seo(
        site,
        &SeoProps {
            title: Some(summary.display_title()),
            desc: post.description.as_deref().or(Some(post.excerpt_text.as_str())),
            pathname: Some(&summary.slug),
            post: Some(summary),
        },
    );

    let date = Style::new().mb(rhythm(1.0)).mt(rhythm(-1.0));
    let divider = Style::new().mb(rhythm(1.0));
    let nav = Style::new()
        .display("flex")
        .flex_wrap("wrap")
        .justify_content("space-between")
        .no_list_style()
        .p(0);

    let content = html! {
        article {
            header {
                h1 style=[Style::new().mt(rhythm(1.0)).mb(0).to_css()] { (summary.display_title()) }
                p style=[date.to_css()] { small { (summary.date) } }
                (tags(summary.tag_list().as_deref()))
            }
            section { (PreEscaped(&post.html)) }
            hr style=[divider.to_css()];
            footer { (bio(site)) }
        }
        nav {
            (list(&nav, [neighbour(site, older, false), neighbour(site, newer, true)]))
        }
    };

    layout(site, &location, &site.title, &head, content)
}
