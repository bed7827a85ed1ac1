//! Post card renderer.
//!
//! Renders one post from a search timeline: blog name, timestamp, the
//! content blocks, tags and note count.

use hushfeed_core::{ContentBlock, Media, Post};
use maud::{Markup, html};

use super::components::{format_count, format_timestamp, is_safe_src, is_safe_url};

/// Render a post as a card.
pub fn render(post: &Post) -> Markup {
    let timestamp = format_timestamp(post.timestamp);

    html! {
        article class="card" {
            div class="post-header" {
                span class="post-blog" { (post.blog_name) }
                @if let Some((display, iso)) = timestamp {
                    time class="post-time" datetime=(iso) { (display) }
                }
            }
            div class="post-body" {
                @for block in &post.content {
                    (content_block(block))
                }
            }
            div class="post-footer" {
                div class="post-tags" {
                    @for tag in &post.tags {
                        a href={"/search/" (urlencoding::encode(tag).into_owned())} { "#" (tag) }
                    }
                }
                span title="Notes" { (format_count(post.note_count)) " notes" }
            }
        }
    }
}

/// Render a single content block.
fn content_block(block: &ContentBlock) -> Markup {
    match block {
        ContentBlock::Text { text, subtype } => match subtype.as_deref() {
            Some("heading1") => html! { h2 { (text) } },
            Some("heading2") => html! { h3 { (text) } },
            Some("quote") | Some("indented") => html! { blockquote { (text) } },
            _ => html! { p { (text) } },
        },

        ContentBlock::Image { media, alt_text } => match best_media(media) {
            Some(image) => html! {
                img src=(image.url) alt=(alt_text.as_deref().unwrap_or_default()) loading="lazy";
            },
            None => html! {},
        },

        ContentBlock::Link {
            url,
            title,
            description,
        } => {
            if !is_safe_url(url) {
                return html! {};
            }
            html! {
                a class="link-card" href=(url) rel="noopener noreferrer" {
                    div class="link-card-title" { (title.as_deref().unwrap_or(url)) }
                    @if let Some(desc) = description {
                        div class="link-card-desc" { (desc) }
                    }
                }
            }
        }

        ContentBlock::Video { url, media, poster } => {
            let src = media
                .as_ref()
                .map(|m| m.url.as_str())
                .or(url.as_deref())
                .filter(|u| is_safe_src(u));
            let poster = best_media(poster).map(|p| p.url.as_str());
            match src {
                Some(src) => html! {
                    video controls preload="none" src=(src) poster=[poster] {}
                },
                None => html! {},
            }
        }

        ContentBlock::Audio { url, title, artist } => {
            let label = match (title, artist) {
                (Some(t), Some(a)) => format!("{t} - {a}"),
                (Some(t), None) => t.clone(),
                (None, Some(a)) => a.clone(),
                (None, None) => "Audio".to_string(),
            };
            match url.as_deref().filter(|u| is_safe_src(u)) {
                Some(src) => html! {
                    p { (label) }
                    audio controls preload="none" src=(src) {}
                },
                None => html! { p { (label) } },
            }
        }

        ContentBlock::Unsupported => html! {},
    }
}

/// First safe rendition. The platform lists the largest one first.
fn best_media(media: &[Media]) -> Option<&Media> {
    media.iter().find(|m| is_safe_src(&m.url))
}
