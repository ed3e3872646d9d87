use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::components::bio::twitter_url;
use crate::components::seo::Head;
use crate::models::SiteMetadata;
use crate::system::{link, LinkProps, Style};
use crate::theme::{rhythm, scale, THEME};

pub fn is_root(site: &SiteMetadata, location: &str) -> bool {
    location == site.root_path()
}

fn header(site: &SiteMetadata, location: &str, title: &str) -> Markup {
    let root = site.root_path();
    let home = link(&LinkProps::internal(&root), html! { (title) });

    if is_root(site, location) {
        let size = scale(0.75);
        let style = Style::new()
            .font_size(size.font_size)
            .line_height(size.line_height)
            .mb(rhythm(1.5))
            .mt(0);
        html! { h1 style=[style.to_css()] { (home) } }
    } else {
        let style = Style::new()
            .font_family("Montserrat, sans-serif")
            .mt(0);
        html! { h3 style=[style.to_css()] { (home) } }
    }
}

fn footer(site: &SiteMetadata) -> Markup {
    let twitter = twitter_url(&site.social.twitter);
    let github = site
        .social
        .github
        .as_deref()
        .map(|handle| format!("https://github.com/{handle}"));

    html! {
        footer {
            (link(&LinkProps::external(&twitter), html! { strong { "twitter" } }))
            @if let Some(github) = &github {
                " · "
                (link(&LinkProps::external(github), html! { strong { "github" } }))
            }
        }
    }
}

/// The page shell: document head, site header, main content and footer.
pub fn layout(
    site: &SiteMetadata,
    location: &str,
    title: &str,
    head: &Head,
    children: Markup,
) -> Markup {
    let container = Style::new()
        .mx("auto")
        .max_width(rhythm(24.0))
        .p(format!("{} {}", rhythm(1.5), rhythm(0.75)));

    html! {
        (DOCTYPE)
        html lang=(head.lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                (head.tags)
                style { (PreEscaped(THEME.stylesheet())) }
            }
            body {
                div style=[container.to_css()] {
                    header { (header(site, location, title)) }
                    main { (children) }
                    (footer(site))
                }
            }
        }
    }
}
