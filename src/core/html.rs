// src/core/html.rs
//! Tolerant HTML slicing.
//!
//! Tag and attribute *names* match case-insensitively; text and attribute
//! values are returned as written. Element lookup is depth-aware for the
//! element's own tag name, so `<section>` inside `<section>` closes correctly.
//! Good enough for the EPA table markup; not a general HTML5 parser.

use super::sanitize::{decode_entities, normalize_entities, normalize_ws};

/// Elements that never carry a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// ASCII-only lowercasing. Byte offsets stay aligned with the input.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// One element located in a document slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Element<'a> {
    /// Tag name as written in the source (`td`, `TD`, ...).
    pub name: &'a str,
    /// The full opening tag, `<td class="x">`.
    pub open_tag: &'a str,
    /// Everything between the opening and closing tag.
    pub inner: &'a str,
    pub start: usize,
    /// Byte offset just past the closing tag.
    pub end: usize,
}

impl<'a> Element<'a> {
    pub fn is(&self, tag: &str) -> bool {
        self.name.eq_ignore_ascii_case(tag)
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        attr_ci(self.open_tag, name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        has_class(self.open_tag, class)
    }

    /// Visible text: tags dropped, entities decoded, whitespace collapsed.
    pub fn text(&self) -> String {
        visible_text(self.inner)
    }

    /// Text content as written: tags dropped, entities decoded, whitespace kept.
    pub fn raw_text(&self) -> String {
        raw_text(self.inner)
    }
}

/// All elements named `tag` in `s` at any depth, in document order
/// (like `querySelectorAll(tag)`). A nested match is listed after its parent.
pub fn elements<'a>(s: &'a str, tag: &str) -> Vec<Element<'a>> {
    let lc = to_lower(s);
    let pat = format!("<{}", to_lower(tag));
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some(start) = find_tag(&lc, &pat, pos) {
        match element_at(s, &lc, start) {
            Some(el) => {
                pos = start + el.open_tag.len();
                out.push(el);
            }
            None => break,
        }
    }
    out
}

pub fn first_element<'a>(s: &'a str, tag: &str) -> Option<Element<'a>> {
    let lc = to_lower(s);
    let pat = format!("<{}", to_lower(tag));
    let start = find_tag(&lc, &pat, 0)?;
    element_at(s, &lc, start)
}

/// First element of any tag whose class list contains `class`.
pub fn first_with_class<'a>(s: &'a str, class: &str) -> Option<Element<'a>> {
    let lc = to_lower(s);
    let mut pos = 0usize;
    while let Some(start) = next_open_tag(&lc, pos) {
        let open_end = open_tag_end(s, start)?;
        if has_class(&s[start..open_end], class) {
            return element_at(s, &lc, start);
        }
        pos = open_end;
    }
    None
}

/// Top-level elements of `s`, in order. Text between them is skipped.
/// Used for the `nth-child` view of a row's cells.
pub fn child_elements(s: &str) -> Vec<Element<'_>> {
    let lc = to_lower(s);
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some(start) = next_open_tag(&lc, pos) {
        match element_at(s, &lc, start) {
            Some(el) => {
                pos = el.end.max(start + 1);
                out.push(el);
            }
            None => break,
        }
    }
    out
}

/// Read attribute `name` from an opening tag. Handles `"..."`, `'...'` and bare values.
/// Entities in the value are decoded (`&amp;` in hrefs).
pub fn attr_ci(open_tag: &str, name: &str) -> Option<String> {
    let b = open_tag.as_bytes();
    let n = b.len();
    let mut i = 1usize;
    // skip the tag name
    while i < n && !b[i].is_ascii_whitespace() && b[i] != b'>' && b[i] != b'/' {
        i += 1;
    }
    loop {
        while i < n && (b[i].is_ascii_whitespace() || b[i] == b'/') {
            i += 1;
        }
        if i >= n || b[i] == b'>' {
            return None;
        }
        let key_start = i;
        while i < n && !b[i].is_ascii_whitespace() && !matches!(b[i], b'=' | b'>' | b'/') {
            i += 1;
        }
        let key = &open_tag[key_start..i];
        while i < n && b[i].is_ascii_whitespace() {
            i += 1;
        }
        let mut value = "";
        if i < n && b[i] == b'=' {
            i += 1;
            while i < n && b[i].is_ascii_whitespace() {
                i += 1;
            }
            if i < n && (b[i] == b'"' || b[i] == b'\'') {
                let q = b[i];
                let v_start = i + 1;
                let v_end = open_tag[v_start..].bytes().position(|c| c == q).map(|r| v_start + r)?;
                value = &open_tag[v_start..v_end];
                i = v_end + 1;
            } else {
                let v_start = i;
                while i < n && !b[i].is_ascii_whitespace() && b[i] != b'>' {
                    i += 1;
                }
                value = &open_tag[v_start..i];
            }
        }
        if key.eq_ignore_ascii_case(name) {
            return Some(normalize_entities(value));
        }
    }
}

pub fn has_class(open_tag: &str, class: &str) -> bool {
    attr_ci(open_tag, "class")
        .map(|v| v.split_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

/// Drop tags, decode entities, collapse whitespace.
pub fn visible_text(html: &str) -> String {
    normalize_ws(&normalize_entities(&strip_tags(html)))
}

/// Drop tags and decode entities, nothing else. `&nbsp;` stays U+00A0 and
/// line breaks and indentation survive, like `textContent`.
pub fn raw_text(html: &str) -> String {
    decode_entities(&remove_tags(html))
}

/// Remove all HTML tags `<...>` from the string, then collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    normalize_ws(&remove_tags(s.as_ref()))
}

/// Remove all HTML tags `<...>`, leaving the text between them untouched.
pub fn remove_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/* ---------- scanning internals (all offsets are into `lc`, which aligns with the source) ---------- */

fn is_name_end(b: Option<&u8>) -> bool {
    match b {
        None => true,
        Some(c) => c.is_ascii_whitespace() || *c == b'>' || *c == b'/',
    }
}

/// Find `pat` (`<td`, `</td`) at a tag-name boundary, so `<p` does not hit `<path`.
fn find_tag(lc: &str, pat: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    loop {
        let at = lc.get(pos..)?.find(pat)? + pos;
        if is_name_end(lc.as_bytes().get(at + pat.len())) {
            return Some(at);
        }
        pos = at + 1;
    }
}

/// Next `<name` opening tag from `from`, skipping closing tags, comments and doctypes.
fn next_open_tag(lc: &str, from: usize) -> Option<usize> {
    let b = lc.as_bytes();
    let mut pos = from;
    loop {
        let at = lc.get(pos..)?.find('<')? + pos;
        if lc[at..].starts_with("<!--") {
            pos = lc[at..].find("-->").map(|r| at + r + 3)?;
            continue;
        }
        match b.get(at + 1) {
            Some(c) if c.is_ascii_alphabetic() => return Some(at),
            _ => pos = at + 1,
        }
    }
}

/// End of the opening tag starting at `start` (byte after `>`), quote-aware.
fn open_tag_end(s: &str, start: usize) -> Option<usize> {
    let b = s.as_bytes();
    let mut i = start + 1;
    let mut quote: Option<u8> = None;
    while i < b.len() {
        match (quote, b[i]) {
            (None, b'"') | (None, b'\'') => quote = Some(b[i]),
            (Some(q), c) if c == q => quote = None,
            (None, b'>') => return Some(i + 1),
            _ => {}
        }
        i += 1;
    }
    None
}

fn element_at<'a>(s: &'a str, lc: &str, start: usize) -> Option<Element<'a>> {
    let b = lc.as_bytes();
    let mut name_end = start + 1;
    while name_end < b.len() && (b[name_end].is_ascii_alphanumeric() || b[name_end] == b'-') {
        name_end += 1;
    }
    if name_end == start + 1 {
        return None;
    }
    let name = &s[start + 1..name_end];
    let name_lc = &lc[start + 1..name_end];
    let open_end = open_tag_end(s, start)?;
    let open_tag = &s[start..open_end];

    if VOID_TAGS.contains(&name_lc) || open_tag.ends_with("/>") {
        return Some(Element { name, open_tag, inner: "", start, end: open_end });
    }

    let open_pat = format!("<{name_lc}");
    let close_pat = format!("</{name_lc}");
    let mut depth = 1usize;
    let mut i = open_end;
    loop {
        let next_close = find_tag(lc, &close_pat, i);
        let next_open = find_tag(lc, &open_pat, i);
        match (next_open, next_close) {
            (Some(o), Some(c)) if o < c => {
                depth += 1;
                i = o + open_pat.len();
            }
            (_, Some(c)) => {
                depth -= 1;
                if depth == 0 {
                    let end = lc[c..].find('>').map(|r| c + r + 1).unwrap_or(lc.len());
                    return Some(Element { name, open_tag, inner: &s[open_end..c], start, end });
                }
                i = c + close_pat.len();
            }
            // Unclosed: the element runs to the end of the slice.
            (_, None) => {
                return Some(Element { name, open_tag, inner: &s[open_end..], start, end: s.len() });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_same_tag_closes_at_matching_depth() {
        let doc = r#"<section class="a"><section>inner</section><p>after</p></section><p>out</p>"#;
        let secs = elements(doc, "section");
        assert_eq!(secs.len(), 2);
        assert!(secs[0].has_class("a"));
        assert!(secs[0].inner.contains("<p>after</p>"));
        assert!(!secs[0].inner.contains("out"));
        assert_eq!(secs[1].text(), "inner");
    }

    #[test]
    fn tag_boundary_skips_longer_names() {
        let doc = "<path d='x'/><param><p>text</p>";
        let p = first_element(doc, "p").unwrap();
        assert_eq!(p.text(), "text");
    }

    #[test]
    fn attributes_quoted_bare_and_case() {
        let tag = r#"<A HREF="https://x.org/a?b=1&amp;c=2" class=bare data-x='y z'>"#;
        assert_eq!(attr_ci(tag, "href").as_deref(), Some("https://x.org/a?b=1&c=2"));
        assert_eq!(attr_ci(tag, "class").as_deref(), Some("bare"));
        assert_eq!(attr_ci(tag, "data-x").as_deref(), Some("y z"));
        assert_eq!(attr_ci(tag, "missing"), None);
    }

    #[test]
    fn class_tokens_match_whole_words() {
        assert!(has_class(r#"<span class="indicator indicator--good">"#, "indicator"));
        assert!(!has_class(r#"<span class="indicators">"#, "indicator"));
    }

    #[test]
    fn child_elements_are_top_level_only() {
        let row = "<th>Name</th>\n<td><span>a</span></td><!-- <td>x</td> --><td>b</td>";
        let kids = child_elements(row);
        let names: Vec<&str> = kids.iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["th", "td", "td"]);
        assert_eq!(kids[2].text(), "b");
    }

    #[test]
    fn raw_text_keeps_nbsp_and_layout() {
        let p = first_element("<p>\n  Updated&nbsp;5pm\n  <b>AEST</b></p>", "p").unwrap();
        assert_eq!(p.raw_text(), "\n  Updated\u{a0}5pm\n  AEST");
        assert_eq!(p.text(), "Updated 5pm AEST");
    }

    #[test]
    fn visible_text_decodes_after_stripping() {
        assert_eq!(visible_text("<b>Fish &amp; Chips</b>&nbsp; &lt;3"), "Fish & Chips <3");
    }
}
