use chrono::NaiveDate;
use serde::Deserialize;

/// Separator used by the `tags` frontmatter field.
pub const TAGS_DELIMITER: &str = ", ";

#[derive(Deserialize, Debug, Clone, Default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: String,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub slug: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Author {
    pub name: String,
    pub summary: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Social {
    pub twitter: String,
    #[serde(default)]
    pub github: Option<String>,
}

/// A pre-generated image derivative rendered at a fixed logical size.
#[derive(Deserialize, Debug, Clone)]
pub struct FixedImage {
    pub src: String,
    #[serde(default)]
    pub src_set: Option<String>,
    #[serde(default = "default_avatar_size")]
    pub width: u32,
    #[serde(default = "default_avatar_size")]
    pub height: u32,
}

fn default_avatar_size() -> u32 {
    50
}

fn default_copyright_year() -> String {
    "2019".to_string()
}

fn default_date_published() -> String {
    "2019-01-18T10:30:00+01:00".to_string()
}

/// Site-wide metadata, read from `site.toml` once per content load.
#[derive(Deserialize, Debug, Clone)]
pub struct SiteMetadata {
    pub title: String,
    pub headline: String,
    pub description: String,
    pub author: Author,
    pub social: Social,
    pub site_url: String,
    pub site_language: String,
    pub og_language: String,
    pub site_logo: String,
    /// Twitter card creator, e.g. `@handle`.
    #[serde(default)]
    pub twitter: Option<String>,
    pub avatar: FixedImage,
    #[serde(default = "default_copyright_year")]
    pub copyright_year: String,
    #[serde(default = "default_date_published")]
    pub date_published: String,
    #[serde(default)]
    pub path_prefix: String,
    /// Stamped by the loader, never read from disk.
    #[serde(skip)]
    pub build_time: String,
}

impl SiteMetadata {
    /// Site-relative route with the path prefix applied.
    pub fn path(&self, route: &str) -> String {
        format!("{}{}", self.path_prefix, route)
    }

    pub fn root_path(&self) -> String {
        self.path("/")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    pub slug: String,
    pub title: Option<String>,
    /// Already formatted for display, e.g. `March 01, 2020`.
    pub date: String,
    /// Escaped HTML fragment.
    pub excerpt: String,
    /// Raw `tags` frontmatter value, joined by [`TAGS_DELIMITER`].
    pub tags: Option<String>,
}

impl PostSummary {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.slug)
    }

    pub fn tag_list(&self) -> Option<Vec<&str>> {
        self.tags
            .as_deref()
            .map(|tags| tags.split(TAGS_DELIMITER).collect())
    }
}

#[derive(Debug, Clone)]
pub struct Post {
    pub summary: PostSummary,
    pub description: Option<String>,
    /// Unescaped excerpt, for meta tags.
    pub excerpt_text: String,
    pub html: String,
    pub published: Option<NaiveDate>,
}

/// A loaded snapshot of everything the pages render from.
#[derive(Debug, Clone)]
pub struct Content {
    pub site: SiteMetadata,
    /// Newest first.
    pub posts: Vec<Post>,
}

impl Content {
    /// Looks a post up by slug, returning its index in the ordered list.
    pub fn find_post(&self, slug: &str) -> Option<(usize, &Post)> {
        self.posts
            .iter()
            .enumerate()
            .find(|(_, post)| post.summary.slug == slug)
    }
}

/// Source of the data pages are rendered from.
pub trait DataProvider {
    fn fetch_site_metadata(&self) -> SiteMetadata;
    fn fetch_posts(&self) -> Vec<PostSummary>;
}

impl DataProvider for Content {
    fn fetch_site_metadata(&self) -> SiteMetadata {
        self.site.clone()
    }

    fn fetch_posts(&self) -> Vec<PostSummary> {
        self.posts.iter().map(|post| post.summary.clone()).collect()
    }
}
