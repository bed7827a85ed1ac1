//! Timeline parsing.
//!
//! Turns a raw timeline page into an ordered list of elements plus the
//! cursor for the next page. Only posts are decoded in full; other element
//! types (blog cards, tag carousels, ads) are kept as placeholders so the
//! ordering of the page is preserved.

use serde::Deserialize;

use crate::client::RawPage;
use crate::error::{Error, Result};

/// Opaque cursor for the next page of a timeline.
pub type Cursor = String;

/// A parsed timeline page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    /// Elements in upstream order.
    pub elements: Vec<TimelineElement>,
    /// Cursor for the next page, if any.
    pub next: Option<Cursor>,
}

impl Timeline {
    /// Iterate over the posts on this page, skipping other element types.
    pub fn posts(&self) -> impl Iterator<Item = &Post> {
        self.elements.iter().filter_map(|e| match e {
            TimelineElement::Post(post) => Some(post.as_ref()),
            TimelineElement::Unsupported { .. } => None,
        })
    }
}

/// One entry in a timeline.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineElement {
    /// A post (boxed to keep the enum small).
    Post(Box<Post>),
    /// An element type the viewer does not render.
    Unsupported {
        /// Upstream `objectType` value.
        object_type: String,
    },
}

/// A single post.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: String,
    pub blog_name: String,
    pub post_url: String,
    /// Unix timestamp of publication.
    pub timestamp: i64,
    pub summary: String,
    pub tags: Vec<String>,
    pub note_count: u64,
    pub content: Vec<ContentBlock>,
}

/// A content block in the platform's block-based post format.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text {
        #[serde(default)]
        text: String,
        #[serde(default)]
        subtype: Option<String>,
    },
    Image {
        #[serde(default)]
        media: Vec<Media>,
        #[serde(default, rename = "altText")]
        alt_text: Option<String>,
    },
    Link {
        url: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        description: Option<String>,
    },
    Video {
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        media: Option<Media>,
        #[serde(default)]
        poster: Vec<Media>,
    },
    Audio {
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        artist: Option<String>,
    },
    #[serde(other)]
    Unsupported,
}

/// A media rendition referenced by a content block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Media {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Wire shape of a post element.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPost {
    #[serde(default)]
    id_string: Option<String>,
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default)]
    blog_name: Option<String>,
    #[serde(default)]
    blog: Option<RawBlog>,
    #[serde(default)]
    post_url: String,
    #[serde(default)]
    timestamp: i64,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    note_count: u64,
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct RawBlog {
    name: String,
}

/// Parse a raw timeline page.
///
/// Accepts either `{"response": {"timeline": {...}}}` or a response whose
/// body is the timeline itself. Fails if no `elements` array is present or
/// a post element cannot be decoded.
pub fn parse_container(mut page: RawPage) -> Result<Timeline> {
    let mut response = page
        .get_mut("response")
        .map(serde_json::Value::take)
        .ok_or_else(|| Error::Parse("missing `response` object".to_string()))?;

    let mut container = match response.get_mut("timeline").map(serde_json::Value::take) {
        Some(timeline) => timeline,
        None => response,
    };

    let elements = match container.get_mut("elements").map(serde_json::Value::take) {
        Some(serde_json::Value::Array(items)) => items,
        Some(_) => return Err(Error::Parse("`elements` is not an array".to_string())),
        None => return Err(Error::Parse("missing `elements` array".to_string())),
    };

    let elements = elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| parse_element(index, element))
        .collect::<Result<Vec<_>>>()?;

    let next = next_cursor(&container);

    Ok(Timeline { elements, next })
}

fn parse_element(index: usize, element: serde_json::Value) -> Result<TimelineElement> {
    let object_type = element
        .get("objectType")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if object_type != "post" {
        return Ok(TimelineElement::Unsupported { object_type });
    }

    let raw: RawPost = serde_json::from_value(element)
        .map_err(|e| Error::Parse(format!("post at index {index}: {e}")))?;

    let id = raw
        .id_string
        .or_else(|| {
            raw.id.map(|v| match v {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
        })
        .ok_or_else(|| Error::Parse(format!("post at index {index} has no id")))?;

    let blog_name = raw
        .blog_name
        .or(raw.blog.map(|b| b.name))
        .unwrap_or_default();

    Ok(TimelineElement::Post(Box::new(Post {
        id,
        blog_name,
        post_url: raw.post_url,
        timestamp: raw.timestamp,
        summary: raw.summary,
        tags: raw.tags,
        note_count: raw.note_count,
        content: raw.content,
    })))
}

/// Pull the next-page cursor out of `links.next`.
///
/// Prefers `queryParams.cursor`; falls back to the `cursor` parameter of
/// `href`.
fn next_cursor(container: &serde_json::Value) -> Option<Cursor> {
    let next = container.get("links")?.get("next")?;

    if let Some(cursor) = next
        .get("queryParams")
        .and_then(|q| q.get("cursor"))
        .and_then(|c| c.as_str())
        .filter(|c| !c.is_empty())
    {
        return Some(cursor.to_string());
    }

    let href = next.get("href")?.as_str()?;
    let (_, query) = href.split_once('?')?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == "cursor")
        .map(|(_, v)| v.into_owned())
        .filter(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_post(id: &str) -> serde_json::Value {
        json!({
            "objectType": "post",
            "idString": id,
            "blogName": "staff",
            "postUrl": format!("https://staff.example.com/post/{id}"),
            "timestamp": 1_700_000_000,
            "summary": "hello",
            "tags": ["cats", "pets"],
            "noteCount": 42,
            "content": [
                {"type": "text", "text": "Hello", "subtype": "heading1"},
                {"type": "image", "media": [{"url": "https://media.example.com/a.jpg", "width": 500}], "altText": "a cat"},
                {"type": "poll", "question": "?"}
            ]
        })
    }

    #[test]
    fn parses_wrapped_timeline() {
        let page = json!({
            "meta": {"status": 200},
            "response": {
                "timeline": {
                    "elements": [sample_post("1"), {"objectType": "blog", "name": "x"}, sample_post("2")],
                    "links": {"next": {"href": "/v2/timeline/search?cursor=abc", "queryParams": {"cursor": "abc%3D"}}}
                }
            }
        });

        let timeline = parse_container(page).unwrap();
        assert_eq!(timeline.elements.len(), 3);
        assert_eq!(timeline.posts().count(), 2);
        assert_eq!(timeline.next.as_deref(), Some("abc%3D"));
        assert!(matches!(
            &timeline.elements[1],
            TimelineElement::Unsupported { object_type } if object_type == "blog"
        ));

        let first = timeline.posts().next().unwrap();
        assert_eq!(first.id, "1");
        assert_eq!(first.blog_name, "staff");
        assert_eq!(first.note_count, 42);
        assert_eq!(first.tags, vec!["cats", "pets"]);
        assert_eq!(first.content.len(), 3);
        assert_eq!(first.content[2], ContentBlock::Unsupported);
        assert!(matches!(
            &first.content[1],
            ContentBlock::Image { media, alt_text } if media[0].width == Some(500) && alt_text.as_deref() == Some("a cat")
        ));
    }

    #[test]
    fn parses_unwrapped_timeline() {
        let page = json!({"response": {"elements": [sample_post("9")]}});
        let timeline = parse_container(page).unwrap();
        assert_eq!(timeline.posts().count(), 1);
        assert_eq!(timeline.next, None);
    }

    #[test]
    fn cursor_falls_back_to_href() {
        let page = json!({"response": {"timeline": {
            "elements": [],
            "links": {"next": {"href": "/v2/timeline/search?query=x&cursor=c%2B1"}}
        }}});
        let timeline = parse_container(page).unwrap();
        assert_eq!(timeline.next.as_deref(), Some("c+1"));
    }

    #[test]
    fn numeric_id_and_nested_blog_name() {
        let page = json!({"response": {"elements": [
            {"objectType": "post", "id": 12345, "blog": {"name": "nested"}}
        ]}});
        let timeline = parse_container(page).unwrap();
        let post = timeline.posts().next().unwrap();
        assert_eq!(post.id, "12345");
        assert_eq!(post.blog_name, "nested");
    }

    #[test]
    fn rejects_missing_response() {
        let err = parse_container(json!({"meta": {}})).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn rejects_missing_elements() {
        let err = parse_container(json!({"response": {"timeline": {}}})).unwrap_err();
        assert!(err.to_string().contains("elements"));
    }

    #[test]
    fn rejects_malformed_post() {
        let page = json!({"response": {"elements": [
            {"objectType": "post", "idString": "1", "timestamp": "yesterday"}
        ]}});
        let err = parse_container(page).unwrap_err();
        assert!(err.to_string().contains("index 0"));
    }

    #[test]
    fn rejects_post_without_id() {
        let page = json!({"response": {"elements": [{"objectType": "post"}]}});
        assert!(parse_container(page).is_err());
    }
}
