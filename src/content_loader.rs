use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use gray_matter::{engine::YAML, Matter};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, error, info, warn};

use crate::markdown::{excerpt_text, render_markdown_to_html};
use crate::models::{Content, FrontMatter, Post, PostSummary, SiteMetadata};
use crate::state::AppState;

pub const SITE_FILE: &str = "site.toml";
pub const POSTS_DIR: &str = "blog";

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
const DATE_DISPLAY_FORMAT: &str = "%B %d, %Y";

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid site.toml: {0}")]
    Site(#[from] toml::de::Error),
    #[error("failed to parse front matter in {}: {message}", path.display())]
    FrontMatter { path: PathBuf, message: String },
    #[error("missing front matter in {}", path.display())]
    MissingFrontMatter { path: PathBuf },
    #[error("post {} resolves to the homepage slug `/`", path.display())]
    RootSlug { path: PathBuf },
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ContentError + '_ {
    move |source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub fn parse_site(source: &str) -> Result<SiteMetadata, ContentError> {
    let mut site: SiteMetadata = toml::from_str(source)?;
    site.build_time = chrono::Local::now().format(DATE_INPUT_FORMAT).to_string();
    Ok(site)
}

/// `/name/` for `name.md`, `/dir/` for `dir/index.md`, relative to the posts root.
fn derive_slug(path: &Path, posts_root: &Path) -> String {
    let relative = path.strip_prefix(posts_root).unwrap_or(path).with_extension("");
    let relative = match relative.file_name() {
        Some(name) if name == "index" => relative.parent().map(Path::to_path_buf).unwrap_or_default(),
        _ => relative,
    };
    let segments: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    normalize_slug(&segments.join("/"))
}

/// `/a/b/` form; empty input is the root `/`.
pub fn normalize_slug(slug: &str) -> String {
    let trimmed = slug.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

/// Builds a post from one Markdown file's source text.
pub fn parse_post(path: &Path, posts_root: &Path, source: &str) -> Result<Post, ContentError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse::<FrontMatter>(source)
        .map_err(|e| ContentError::FrontMatter {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let front_matter = parsed.data.ok_or_else(|| ContentError::MissingFrontMatter {
        path: path.to_path_buf(),
    })?;

    let slug = match front_matter.slug.as_deref() {
        Some(slug) => normalize_slug(slug),
        None => derive_slug(path, posts_root),
    };
    if slug == "/" {
        return Err(ContentError::RootSlug {
            path: path.to_path_buf(),
        });
    }

    let published = NaiveDate::parse_from_str(front_matter.date.trim(), DATE_INPUT_FORMAT).ok();
    let date = match published {
        Some(day) => day.format(DATE_DISPLAY_FORMAT).to_string(),
        None => {
            warn!(path = %path.display(), date = %front_matter.date, "Unrecognized post date");
            front_matter.date.clone()
        }
    };

    let excerpt_text = excerpt_text(&parsed.content);

    Ok(Post {
        summary: PostSummary {
            slug,
            title: front_matter.title,
            date,
            excerpt: htmlescape::encode_minimal(&excerpt_text),
            tags: front_matter.tags.filter(|tags| !tags.trim().is_empty()),
        },
        description: front_matter.description,
        excerpt_text,
        html: render_markdown_to_html(&parsed.content),
        published,
    })
}

async fn collect_markdown(root: &Path) -> Result<Vec<PathBuf>, ContentError> {
    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut entries = fs::read_dir(&dir).await.map_err(io_error(&dir))?;
        while let Some(entry) = entries.next_entry().await.map_err(io_error(&dir))? {
            let path = entry.path();
            let file_type = entry.file_type().await.map_err(io_error(&path))?;
            if file_type.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "md") {
                found.push(path);
            }
        }
    }

    found.sort();
    Ok(found)
}

/// Reads site metadata and every post under `dir`, newest post first.
pub async fn load_content(dir: &Path) -> Result<Content, ContentError> {
    let site_path = dir.join(SITE_FILE);
    let site_source = fs::read_to_string(&site_path)
        .await
        .map_err(io_error(&site_path))?;
    let site = parse_site(&site_source)?;

    let posts_root = dir.join(POSTS_DIR);
    let mut posts = Vec::new();
    for path in collect_markdown(&posts_root).await? {
        let source = fs::read_to_string(&path).await.map_err(io_error(&path))?;
        let post = parse_post(&path, &posts_root, &source)?;
        debug!(slug = %post.summary.slug, "Loaded post");
        posts.push(post);
    }

    // Undated posts sort last.
    posts.sort_by(|a, b| b.published.cmp(&a.published));

    info!(posts = posts.len(), "Content loaded from {}", dir.display());
    Ok(Content { site, posts })
}

pub async fn reload_content(app_state: &AppState) {
    info!("Reloading application content...");
    match load_content(&app_state.content_dir).await {
        Ok(content) => {
            *app_state.content.write().await = content;
            info!("Content successfully reloaded.");
        }
        Err(e) => {
            error!("Failed to reload content: {}", e);
        }
    }
}
