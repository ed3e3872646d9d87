use maud::{html, Markup, PreEscaped};

use crate::components::{bio, layout, seo, tags, SeoProps};
use crate::models::{DataProvider, PostSummary, SiteMetadata};
use crate::system::{link, LinkProps, Style};
use crate::theme::rhythm;

fn post_entry(site: &SiteMetadata, post: &PostSummary) -> Markup {
    let href = site.path(&post.slug);
    let to = LinkProps::internal(&href);
    let heading = Style::new().mb(rhythm(0.25));
    let excerpt = Style::new().color("hsla(0,0%,0%,0.9)");

    html! {
        article data-slug=(post.slug) {
            header {
                h3 style=[heading.to_css()] { (link(&to, html! { (post.display_title()) })) }
                small { (post.date) }
                (tags(post.tag_list().as_deref()))
            }
            section {
                // Excerpts are escaped by the content loader.
                (link(&to, html! { p style=[excerpt.to_css()] { (PreEscaped(&post.excerpt)) } }))
            }
        }
    }
}

/// The home page: bio, then every post in the order given.
pub fn blog_index(site: &SiteMetadata, posts: &[PostSummary], location: &str) -> Markup {
    let head = seo(
        site,
        &SeoProps {
            title: Some(&site.title),
            ..SeoProps::default()
        },
    );
    let content = html! {
        (bio(site))
        @for post in posts {
            (post_entry(site, post))
        }
    };
    layout(site, location, &site.title, &head, content)
}

pub fn render_index(provider: &impl DataProvider, location: &str) -> Markup {
    let site = provider.fetch_site_metadata();
    let posts = provider.fetch_posts();
    blog_index(&site, &posts, location)
}
