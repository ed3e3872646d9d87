use maud::{html, Markup};

use crate::models::SiteMetadata;
use crate::system::{flex, link, span, LinkProps, Style};
use crate::theme::rhythm;

pub fn twitter_url(handle: &str) -> String {
    format!("https://twitter.com/{handle}")
}

/// Author avatar next to a one-line blurb linking to their profile.
pub fn bio(site: &SiteMetadata) -> Markup {
    let avatar = &site.avatar;
    let avatar_style = Style::new()
        .mr(rhythm(0.5))
        .mb(0)
        .min_width(70)
        .min_height(70)
        .border_radius("100%");
    let profile = twitter_url(&site.social.twitter);

    flex(
        &Style::new().align_items("center"),
        html! {
            img.avatar src=(avatar.src) srcset=[avatar.src_set.as_deref()]
                width=(avatar.width) height=(avatar.height)
                alt=(site.author.name) style=[avatar_style.to_css()];
            (span(&Style::new().max_width(250), html! {
                "This is a blog about nothing by "
                (link(&LinkProps::external(&profile), html! {
                    (span(&Style::new().bold(), html! { (site.author.name) }))
                    "."
                }))
            }))
        },
    )
}
