//! Shared HTML components used across all pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages.

use maud::{Markup, PreEscaped, html};

/// Inline CSS for all pages.
///
/// Flat layout, no external assets. Accent colour and spacing follow the
/// same variables in light and dark mode.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafafa;--fg:#111;--fg2:#555;--fg3:#999;--accent:#2f6fdd;--accent-hover:#1f56b3;--surface:#fff;--border:rgba(47,111,221,.15);--mono:"SF Mono",SFMono-Regular,ui-monospace,Menlo,monospace}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:680px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
img,video{max-width:100%;height:auto}

.search-form{display:flex;gap:.5rem;margin-bottom:1rem}
.search-form input{flex:1;padding:.55rem .8rem;border:1px solid var(--border);border-radius:6px;font-size:1rem;background:var(--surface);color:var(--fg)}
.search-form button{padding:.55rem 1.1rem;border:none;border-radius:6px;background:var(--accent);color:#fff;font-size:.95rem;cursor:pointer}
.search-form button:hover{background:var(--accent-hover)}

.tabs{display:flex;gap:.35rem;flex-wrap:wrap;margin-bottom:.6rem;font-size:.85rem}
.tabs a,.tabs span{padding:.2rem .7rem;border-radius:100px;border:1px solid var(--border)}
.tabs .active{background:var(--accent);color:#fff;border-color:var(--accent)}
.tabs a:hover{text-decoration:none;border-color:var(--accent)}

.results{display:flex;flex-direction:column;gap:1rem;margin-top:1.25rem}
.empty{color:var(--fg3);text-align:center;padding:2rem 0}

.card{padding:1.25rem 1.5rem;border:1px solid var(--border);border-radius:10px;background:var(--surface)}
.post-header{display:flex;justify-content:space-between;align-items:baseline;margin-bottom:.75rem;gap:1rem}
.post-blog{font-weight:600;color:var(--fg)}
.post-time{font-size:.8rem;color:var(--fg3);white-space:nowrap}
.post-body{word-break:break-word}
.post-body p{margin:.5rem 0;white-space:pre-wrap}
.post-body h2{font-size:1.3rem;margin:.75rem 0 .4rem}
.post-body h3{font-size:1.1rem;margin:.75rem 0 .4rem}
.post-body blockquote{border-left:3px solid var(--border);padding-left:1rem;color:var(--fg2);margin:.5rem 0}
.post-body img{border-radius:6px;margin:.5rem 0;display:block}
.post-body video,.post-body audio{width:100%;margin:.5rem 0;border-radius:6px}
.link-card{display:block;border:1px solid var(--border);border-radius:8px;padding:.7rem 1rem;margin:.5rem 0;color:var(--fg)}
.link-card:hover{border-color:var(--accent);text-decoration:none}
.link-card-title{font-weight:600}
.link-card-desc{font-size:.9rem;color:var(--fg2)}
.post-footer{display:flex;justify-content:space-between;gap:1rem;margin-top:1rem;padding-top:.75rem;border-top:1px solid var(--border);font-size:.85rem;color:var(--fg3)}
.post-tags{display:flex;gap:.5rem;flex-wrap:wrap}
.post-tags a{color:var(--fg3)}

.pager{display:flex;justify-content:center;margin:1.5rem 0}
.pager a{padding:.55rem 1.1rem;background:var(--accent);color:#fff;border-radius:6px;font-weight:500}
.pager a:hover{background:var(--accent-hover);text-decoration:none}

.footer{text-align:center;margin-top:1rem;padding-top:.75rem;font-size:.8rem;color:var(--fg3);width:100%;max-width:680px}

@media(prefers-color-scheme:dark){
:root{--bg:#0d0f14;--fg:#e5e5e5;--fg2:#a0a0a0;--fg3:#666;--accent:#6b9cf0;--accent-hover:#8db3f5;--surface:#13161d;--border:rgba(107,156,240,.2)}
}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#fafafa;color:#1a1a2e;padding:1rem}
.error-page{text-align:center;max-width:400px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#666;margin-bottom:1rem;line-height:1.5}
.error-page a{color:#2f6fdd}
@media(prefers-color-scheme:dark){
body{background:#0d0f14;color:#e0e0e8}
.error-page p{color:#aaa}
.error-page a{color:#6b9cf0}
}
"#;

/// Content-Security-Policy header value.
///
/// No scripts, no iframes. Media only over HTTPS. Forms may only submit
/// back to this origin (the search box).
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src https: data:; media-src https:; form-action 'self'; frame-ancestors 'none'";

/// Render the full HTML page shell.
pub fn page_shell(title: &str, site_name: &str, body_content: Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="referrer" content="no-referrer";
                meta name="robots" content="noindex";
                title { (title) " - " (site_name) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main { (body_content) }
                footer class="footer" {
                    (site_name) " - a private viewer"
                }
            }
        }
    }
}

/// Check if a URL is safe to use in an `href` attribute.
pub fn is_safe_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Check if a URL may be loaded as an image, video or audio `src`.
///
/// HTTPS only, matching `img-src` and `media-src` in [`CSP_HEADER`].
pub fn is_safe_src(url: &str) -> bool {
    url.starts_with("https://")
}

/// Format a Unix timestamp as "Mon DD, YYYY HH:MM UTC" plus its ISO form.
/// Returns None for missing (0) or out-of-range timestamps.
pub fn format_timestamp(timestamp: i64) -> Option<(String, String)> {
    if timestamp == 0 {
        return None;
    }

    let ts = chrono::DateTime::from_timestamp(timestamp, 0)?;
    let display = ts.format("%b %d, %Y %H:%M UTC").to_string();
    let iso = ts.format("%Y-%m-%dT%H:%M:%SZ").to_string();
    Some((display, iso))
}

/// Format a large number with K/M suffixes for display.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_url_schemes() {
        assert!(is_safe_url("https://example.com/a.jpg"));
        assert!(is_safe_url("http://example.com"));
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("data:text/html,hi"));
    }

    #[test]
    fn media_sources_are_https_only() {
        assert!(is_safe_src("https://media.example.com/a.jpg"));
        assert!(!is_safe_src("http://media.example.com/a.jpg"));
        assert!(!is_safe_src("data:image/png;base64,AAAA"));
    }

    #[test]
    fn timestamp_formatting() {
        let (display, iso) = format_timestamp(1_700_000_000).unwrap();
        assert_eq!(display, "Nov 14, 2023 22:13 UTC");
        assert_eq!(iso, "2023-11-14T22:13:20Z");
        assert!(format_timestamp(0).is_none());
    }

    #[test]
    fn count_formatting() {
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_500), "1.5K");
        assert_eq!(format_count(2_000_000), "2.0M");
    }

    #[test]
    fn page_shell_includes_title() {
        let page = page_shell("cats", "hushfeed", html! { p { "hi" } }).into_string();
        assert!(page.contains("<title>cats - hushfeed</title>"));
        assert!(page.contains("<p>hi</p>"));
    }
}
