//! Whitelist-based markup filter for user-supplied free text.
//!
//! Harmless formatting tags (`<strong>`, `<a href=...>`, `<img src=...>`, ...)
//! survive with only their whitelisted attributes. Everything else that looks
//! like markup is neutralised by escaping its angle brackets, so
//! `<script>` comes back as the literal text `&lt;script&gt;`. Comments are
//! dropped.
//!
//! The filter is idempotent: its output contains no bracket that it would
//! escape again, and every re-emitted tag is already in canonical form.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));

/// A start or end tag anchored at the current position.
///
/// Groups: 1 = closing slash, 2 = tag name, 3 = raw attributes,
/// 4 = self-closing slash.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<(/?)([A-Za-z][A-Za-z0-9]*)([^<>]*?)(\s*/)?>").expect("valid regex")
});

/// One attribute: name plus an optional double-quoted, single-quoted or bare
/// value.
static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][A-Za-z0-9_:.-]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("valid regex")
});

/// Attributes holding a URL; their values must use a known-safe scheme.
const URL_ATTRIBUTES: &[&str] = &["href", "src", "cite"];

const SAFE_URL_PREFIXES: &[&str] = &[
    "#", "/", "./", "../", "http://", "https://", "mailto:", "tel:", "ftp://",
];

const UNSAFE_VALUE_MARKERS: &[&str] = &["javascript:", "vbscript:", "expression("];

/// Whitelisted attributes for a tag, or `None` if the tag itself is not
/// allowed.
fn allowed_attributes(tag: &str) -> Option<&'static [&'static str]> {
    let attrs: &'static [&'static str] = match tag {
        "a" => &["href", "title", "target"],
        "abbr" => &["title"],
        "blockquote" => &["cite"],
        "img" => &["src", "alt", "title", "width", "height"],
        "td" | "th" => &["colspan", "rowspan", "align"],
        "b" | "br" | "code" | "del" | "div" | "em" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
        | "hr" | "i" | "li" | "ol" | "p" | "pre" | "s" | "small" | "span" | "strong" | "sub"
        | "sup" | "table" | "tbody" | "thead" | "tr" | "u" | "ul" => &[],
        _ => return None,
    };
    Some(attrs)
}

/// Strip executable and markup content from `input`.
pub fn sanitize(input: &str) -> String {
    let input = COMMENT_RE.replace_all(input, "");
    let mut out = String::with_capacity(input.len());
    let mut rest: &str = &input;

    while let Some(pos) = rest.find(['<', '>']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with('<') {
            if let Some(caps) = TAG_RE.captures(tail) {
                let name = caps[2].to_ascii_lowercase();
                if let Some(allowed) = allowed_attributes(&name) {
                    write_tag(&mut out, &caps, &name, allowed);
                    rest = &tail[caps[0].len()..];
                    continue;
                }
            }
            out.push_str("&lt;");
        } else {
            out.push_str("&gt;");
        }
        rest = &tail[1..];
    }

    out.push_str(rest);
    out
}

fn write_tag(out: &mut String, caps: &Captures<'_>, name: &str, allowed: &[&str]) {
    out.push('<');
    if !caps[1].is_empty() {
        out.push('/');
        out.push_str(name);
        out.push('>');
        return;
    }

    out.push_str(name);
    for attr in ATTR_RE.captures_iter(&caps[3]) {
        let attr_name = attr[1].to_ascii_lowercase();
        if !allowed.contains(&attr_name.as_str()) {
            continue;
        }
        out.push(' ');
        out.push_str(&attr_name);

        let value = attr
            .get(2)
            .or_else(|| attr.get(3))
            .or_else(|| attr.get(4))
            .map(|m| m.as_str());
        if let Some(value) = value.filter(|v| is_safe_value(name, &attr_name, v)) {
            out.push_str("=\"");
            push_escaped_value(out, value);
            out.push('"');
        }
    }
    if caps.get(4).is_some() {
        out.push_str(" /");
    }
    out.push('>');
}

fn is_safe_value(tag: &str, attr: &str, value: &str) -> bool {
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    if URL_ATTRIBUTES.contains(&attr) {
        SAFE_URL_PREFIXES.iter().any(|p| normalized.starts_with(p))
            || (tag == "img" && attr == "src" && normalized.starts_with("data:image/"))
    } else {
        !UNSAFE_VALUE_MARKERS.iter().any(|m| normalized.contains(m))
    }
}

fn push_escaped_value(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
}
