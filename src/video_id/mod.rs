use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Bare video ID: exactly 11 characters, alphanumeric plus `-` and `_`
static BARE_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_-]{11}$").expect("Invalid video id regex")
});

/// `/v/<id>` and `/embed/<id>` paths on youtube.com
static EMBED_PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/(v|embed)/([a-zA-Z0-9_-]{11})").expect("Invalid embed path regex")
});

/// Parse a YouTube URL or bare video ID and return the canonical video ID.
///
/// Accepts a plain `&str` or an `Option<&str>`; `None` and empty input both yield `None`.
/// A bare 11-character ID is returned unchanged before any URL parsing happens.
/// Recognized URL shapes, first match wins:
///
/// 1. `*youtube.com*/...?v=<id>`
/// 2. `youtu.be/<id>`
/// 3. `*youtube.com*/v/<id>` or `*youtube.com*/embed/<id>`
pub fn parse_video_id<'a>(input: impl Into<Option<&'a str>>) -> Option<String> {
    let input = input.into().filter(|s| !s.is_empty())?;

    if BARE_ID_PATTERN.is_match(input) {
        return Some(input.to_string());
    }

    let url = match Url::parse(input) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!("Not a URL ({}): {}", e, input);
            return None;
        }
    };
    let host = url.host_str().unwrap_or("");

    // youtube.com/watch?v=VIDEO_ID
    if host.contains("youtube.com") {
        if let Some((_, v)) = url.query_pairs().find(|(key, _)| key == "v") {
            return non_empty(&v);
        }
    }

    // youtu.be/VIDEO_ID
    if host == "youtu.be" {
        let path = url.path();
        return non_empty(path.strip_prefix('/').unwrap_or(path));
    }

    // youtube.com/v/VIDEO_ID or youtube.com/embed/VIDEO_ID
    if host.contains("youtube.com") {
        if let Some(caps) = EMBED_PATH_PATTERN.captures(url.path()) {
            return Some(caps[2].to_string());
        }
    }

    None
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
