use maud::{html, Markup};

use crate::components::{layout, seo, SeoProps};
use crate::models::SiteMetadata;

pub fn not_found(site: &SiteMetadata, location: &str) -> Markup {
    let head = seo(
        site,
        &SeoProps {
            title: Some("404: Not Found"),
            ..SeoProps::default()
        },
    );
    let content = html! {
        h1 { "Not Found" }
        p { "Nothing lives at " code { (location) } "." }
    };
    layout(site, location, &site.title, &head, content)
}
