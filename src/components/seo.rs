//! Document head metadata and schema.org structured data.
//!
//! Every page gets a title, description and social card tags, one page
//! document (`WebPage`, or `Article` when rendering a post) and a
//! `BreadcrumbList`. The JSON-LD field names follow schema.org verbatim.

use maud::{html, Markup, PreEscaped};
use serde::Serialize;
use tracing::error;

use crate::models::{PostSummary, SiteMetadata};

const SCHEMA_CONTEXT: &str = "http://schema.org";

/// Per-page overrides; anything left out falls back to the site defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeoProps<'a> {
    pub title: Option<&'a str>,
    pub desc: Option<&'a str>,
    pub pathname: Option<&'a str>,
    pub post: Option<&'a PostSummary>,
}

/// Resolved values shared by the meta tags and the structured data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seo {
    pub title: String,
    pub description: String,
    pub image: String,
    pub url: String,
}

impl Seo {
    pub fn resolve(site: &SiteMetadata, props: &SeoProps<'_>) -> Self {
        Self {
            title: props.title.unwrap_or(&site.title).to_string(),
            description: props.desc.unwrap_or(&site.description).to_string(),
            image: site.site_logo.clone(),
            url: format!("{}{}", site.site_url, props.pathname.unwrap_or("")),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Person {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
}

impl Person {
    fn new(name: &str) -> Self {
        Self {
            kind: "Person",
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub url: String,
}

impl ImageObject {
    fn new(url: &str) -> Self {
        Self {
            kind: "ImageObject",
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Organization {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
    pub logo: ImageObject,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WebPage {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    pub url: String,
    pub headline: String,
    pub in_language: String,
    pub main_entity_of_page: String,
    pub description: String,
    pub name: String,
    pub author: Person,
    pub copyright_holder: Person,
    pub copyright_year: String,
    pub creator: Person,
    pub publisher: Person,
    pub date_published: String,
    pub date_modified: String,
    pub image: ImageObject,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    pub author: Person,
    pub copyright_holder: Person,
    pub copyright_year: String,
    pub creator: Person,
    pub publisher: Organization,
    pub date_published: String,
    pub description: String,
    pub headline: String,
    pub in_language: String,
    pub url: String,
    pub name: String,
    pub image: ImageObject,
    pub main_entity_of_page: String,
}

/// Exactly one of these is emitted per page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PageDocument {
    WebPage(WebPage),
    Article(Article),
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BreadcrumbItem {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ListItem {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub item: BreadcrumbItem,
    pub position: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    pub description: &'static str,
    pub name: &'static str,
    pub item_list_element: Vec<ListItem>,
}

pub fn page_document(site: &SiteMetadata, seo: &Seo, post: Option<&PostSummary>) -> PageDocument {
    let author = Person::new(&site.author.name);

    match post {
        None => PageDocument::WebPage(WebPage {
            context: SCHEMA_CONTEXT,
            kind: "WebPage",
            url: site.site_url.clone(),
            headline: site.headline.clone(),
            in_language: site.site_language.clone(),
            main_entity_of_page: site.site_url.clone(),
            description: site.description.clone(),
            name: site.title.clone(),
            author: author.clone(),
            copyright_holder: author.clone(),
            copyright_year: site.copyright_year.clone(),
            creator: author.clone(),
            publisher: author,
            date_published: site.date_published.clone(),
            date_modified: site.build_time.clone(),
            image: ImageObject::new(&site.site_logo),
        }),
        Some(post) => PageDocument::Article(Article {
            context: SCHEMA_CONTEXT,
            kind: "Article",
            author: author.clone(),
            copyright_holder: author.clone(),
            copyright_year: site.copyright_year.clone(),
            creator: author,
            publisher: Organization {
                kind: "Organization",
                name: site.author.name.clone(),
                logo: ImageObject::new(&site.site_logo),
            },
            date_published: post.date.clone(),
            description: seo.description.clone(),
            headline: seo.title.clone(),
            in_language: site.site_language.clone(),
            url: seo.url.clone(),
            name: seo.title.clone(),
            image: ImageObject::new(&seo.image),
            main_entity_of_page: seo.url.clone(),
        }),
    }
}

/// Homepage first, then the current post when there is one.
pub fn breadcrumb(site: &SiteMetadata, seo: &Seo, post: Option<&PostSummary>) -> BreadcrumbList {
    let mut items = vec![BreadcrumbItem {
        id: site.site_url.clone(),
        name: "Homepage".to_string(),
    }];
    if post.is_some() {
        items.push(BreadcrumbItem {
            id: seo.url.clone(),
            name: seo.title.clone(),
        });
    }

    BreadcrumbList {
        context: SCHEMA_CONTEXT,
        kind: "BreadcrumbList",
        description: "Breadcrumbs list",
        name: "Breadcrumbs",
        item_list_element: items
            .into_iter()
            .zip(1..)
            .map(|(item, position)| ListItem {
                kind: "ListItem",
                item,
                position,
            })
            .collect(),
    }
}

fn json_ld<T: Serialize>(document: &T) -> Markup {
    match serde_json::to_string(document) {
        Ok(json) => html! {
            script type="application/ld+json" { (PreEscaped(json.replace("</", "<\\/"))) }
        },
        Err(e) => {
            error!("Failed to serialize structured data: {}", e);
            html! {}
        }
    }
}

/// Everything a page contributes to the document head.
#[derive(Debug, Clone)]
pub struct Head {
    pub lang: String,
    pub title: String,
    pub tags: Markup,
}

pub fn seo(site: &SiteMetadata, props: &SeoProps<'_>) -> Head {
    let seo = Seo::resolve(site, props);
    let document = page_document(site, &seo, props.post);
    let crumbs = breadcrumb(site, &seo, props.post);
    let og_type = if props.post.is_some() { "article" } else { "website" };

    let tags = html! {
        title { (seo.title) }
        meta name="description" content=(seo.description);
        meta name="image" content=(seo.image);
        meta property="og:url" content=(seo.url);
        meta property="og:type" content=(og_type);
        meta property="og:title" content=(seo.title);
        meta property="og:description" content=(seo.description);
        meta property="og:image" content=(seo.image);
        meta property="og:locale" content=(site.og_language);
        meta name="twitter:card" content="summary_large_image";
        @if let Some(creator) = &site.twitter {
            meta name="twitter:creator" content=(creator);
        }
        meta name="twitter:title" content=(seo.title);
        meta name="twitter:description" content=(seo.description);
        meta name="twitter:image" content=(seo.image);
        (json_ld(&document))
        (json_ld(&crumbs))
    };

    Head {
        lang: site.site_language.clone(),
        title: seo.title,
        tags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;
    use scraper::{Html, Selector};
    use serde_json::Value;

    fn documents(head: &Head) -> Vec<Value> {
        let fragment = Html::parse_fragment(&head.tags.clone().into_string());
        let selector = Selector::parse(r#"script[type="application/ld+json"]"#).unwrap();
        fragment
            .select(&selector)
            .map(|el| serde_json::from_str(&el.text().collect::<String>()).unwrap())
            .collect()
    }

    fn count_of_type(docs: &[Value], kind: &str) -> usize {
        docs.iter().filter(|doc| doc["@type"] == kind).count()
    }

    #[test]
    fn title_defaults_to_site_title() {
        let head = seo(&fixtures::site(), &SeoProps::default());
        assert_eq!(head.title, "Spektor.dev");
        assert!(head.tags.clone().into_string().contains("<title>Spektor.dev</title>"));
    }

    #[test]
    fn overrides_win_over_defaults() {
        let site = fixtures::site();
        let resolved = Seo::resolve(
            &site,
            &SeoProps {
                title: Some("Bug X"),
                desc: Some("A bug"),
                pathname: Some("/bug-x/"),
                post: None,
            },
        );
        assert_eq!(resolved.title, "Bug X");
        assert_eq!(resolved.description, "A bug");
        assert_eq!(resolved.url, "https://www.spektor.dev/bug-x/");
    }

    #[test]
    fn description_defaults_to_site_description() {
        let site = fixtures::site();
        let resolved = Seo::resolve(&site, &SeoProps::default());
        assert_eq!(resolved.description, site.description);
        assert_eq!(resolved.url, site.site_url);
    }

    #[test]
    fn without_post_emits_webpage_and_single_crumb() {
        let head = seo(&fixtures::site(), &SeoProps::default());
        let docs = documents(&head);
        assert_eq!(docs.len(), 2);
        assert_eq!(count_of_type(&docs, "WebPage"), 1);
        assert_eq!(count_of_type(&docs, "Article"), 0);

        let crumbs = &docs[1];
        assert_eq!(crumbs["@type"], "BreadcrumbList");
        let items = crumbs["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[0]["item"]["name"], "Homepage");
    }

    #[test]
    fn with_post_emits_article_and_two_crumbs() {
        let post = fixtures::summary("/bug-x/", Some("Bug X"), Some("a, b"));
        let props = SeoProps {
            title: Some("Bug X"),
            pathname: Some("/bug-x/"),
            post: Some(&post),
            ..SeoProps::default()
        };
        let docs = documents(&seo(&fixtures::site(), &props));
        assert_eq!(count_of_type(&docs, "Article"), 1);
        assert_eq!(count_of_type(&docs, "WebPage"), 0);

        let article = &docs[0];
        assert_eq!(article["datePublished"], "March 01, 2020");
        assert_eq!(article["publisher"]["@type"], "Organization");
        assert_eq!(article["url"], "https://www.spektor.dev/bug-x/");

        let items = docs[1]["itemListElement"].as_array().unwrap();
        let positions: Vec<_> = items.iter().map(|i| i["position"].as_u64().unwrap()).collect();
        assert_eq!(positions, vec![1, 2]);
        assert_eq!(items[1]["item"]["@id"], "https://www.spektor.dev/bug-x/");
        assert_eq!(items[1]["item"]["name"], "Bug X");
    }

    #[test]
    fn webpage_field_names_match_schema_org() {
        let site = fixtures::site();
        let seo = Seo::resolve(&site, &SeoProps::default());
        let json = serde_json::to_value(page_document(&site, &seo, None)).unwrap();
        assert_eq!(json["@context"], "http://schema.org");
        assert_eq!(json["inLanguage"], "en");
        assert_eq!(json["mainEntityOfPage"], "https://www.spektor.dev");
        assert_eq!(json["copyrightHolder"]["@type"], "Person");
        assert_eq!(json["copyrightYear"], "2019");
        assert_eq!(json["dateModified"], "2020-03-21");
        assert_eq!(json["image"]["@type"], "ImageObject");
    }

    #[test]
    fn og_type_follows_post_presence() {
        let site = fixtures::site();
        let page = seo(&site, &SeoProps::default()).tags.into_string();
        assert!(page.contains(r#"<meta property="og:type" content="website">"#));

        let post = fixtures::summary("/bug-x/", Some("Bug X"), None);
        let props = SeoProps {
            post: Some(&post),
            ..SeoProps::default()
        };
        let article = seo(&site, &props).tags.into_string();
        assert!(article.contains(r#"<meta property="og:type" content="article">"#));
    }

    #[test]
    fn script_close_sequence_is_escaped() {
        let site = fixtures::site();
        let props = SeoProps {
            title: Some("</script><b>"),
            ..SeoProps::default()
        };
        let post = fixtures::summary("/x/", None, None);
        let props = SeoProps {
            post: Some(&post),
            ..props
        };
        let html = seo(&site, &props).tags.into_string();
        assert!(!html.contains("\"</script>"));
        assert!(html.contains("<\\/script>"));
    }
}
