// src/core/sanitize.rs

/// Minimal HTML entity decoding: the handful the EPA page actually emits.
/// `&nbsp;` becomes a plain space.
pub fn normalize_entities(s: &str) -> String {
    decode_with_nbsp(s, " ")
}

/// Entity decoding as the DOM's `textContent` sees it: `&nbsp;` stays U+00A0.
pub fn decode_entities(s: &str) -> String {
    decode_with_nbsp(s, "\u{a0}")
}

/// `&amp;` goes last so `&amp;lt;` stays literal.
fn decode_with_nbsp(s: &str, nbsp: &str) -> String {
    s.replace("&nbsp;", nbsp)
        .replace("&#160;", nbsp)
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&rsquo;", "\u{2019}")
        .replace("&ndash;", "\u{2013}")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Final non-empty path segment of a URL, ignoring query and fragment.
/// `https://beachsafe.org.au/beach/vic/bayside/hampton/some-beach/` → `some-beach`.
pub fn last_path_segment(url: &str) -> Option<&str> {
    let cut = url.find(['?', '#']).unwrap_or(url.len());
    let path = url[..cut].trim_end_matches('/');
    let seg = path.rsplit('/').next()?;
    // A bare host ("https://beachsafe.org.au") has no path to speak of.
    if seg.is_empty() || path.ends_with(':') || path[..path.len() - seg.len()].ends_with("//") {
        return None;
    }
    Some(seg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nbsp_is_a_space_or_u00a0() {
        assert_eq!(normalize_entities("St&nbsp;Kilda &amp; co"), "St Kilda & co");
        assert_eq!(decode_entities("St&nbsp;Kilda&#160;&amp;lt;"), "St\u{a0}Kilda\u{a0}&lt;");
    }

    #[test]
    fn ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  Good \n\t water  "), "Good water");
    }

    #[test]
    fn last_segment_variants() {
        assert_eq!(last_path_segment("https://beachsafe.org.au/beach/vic/x/some-beach"), Some("some-beach"));
        assert_eq!(last_path_segment("https://beachsafe.org.au/beach/vic/x/some-beach/"), Some("some-beach"));
        assert_eq!(last_path_segment("https://beachsafe.org.au/beach/some-beach?ref=epa#top"), Some("some-beach"));
        assert_eq!(last_path_segment("https://beachsafe.org.au"), None);
        assert_eq!(last_path_segment(""), None);
    }
}
