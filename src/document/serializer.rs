//! Turning fragments into final text.
//!
//! Pretty mode puts every tag and every text run on its own line, indented
//! by nesting level. Void elements and self-closing tags do not open a
//! level; comments and doctypes are kept as they are.

use crate::config::DocumentConfig;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    pub pretty: bool,
    /// Spaces per nesting level
    pub indent: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: 1,
        }
    }
}

impl From<&DocumentConfig> for SerializeOptions {
    fn from(config: &DocumentConfig) -> Self {
        Self {
            pretty: config.pretty,
            indent: config.indent,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Open { raw: &'a str, opens_level: bool },
    Close(&'a str),
    Verbatim(&'a str),
    Text(&'a str),
}

/// Join fragments into a document, pretty printed if requested.
pub fn serialize(fragments: &[String], options: &SerializeOptions) -> String {
    let joined = fragments.join("\n");
    if !options.pretty {
        return joined + "\n";
    }
    prettify(&joined, options.indent)
}

/// Re-indent markup one tag or text run per line.
pub fn prettify(markup: &str, indent: usize) -> String {
    let mut out = String::with_capacity(markup.len() + markup.len() / 4);
    let mut level = 0usize;

    let mut push_line = |level: usize, text: &str| {
        out.push_str(&" ".repeat(level * indent));
        out.push_str(text);
        out.push('\n');
    };

    for token in tokenize(markup) {
        match token {
            Token::Open { raw, opens_level } => {
                push_line(level, raw);
                if opens_level {
                    level += 1;
                }
            }
            Token::Close(raw) => {
                level = level.saturating_sub(1);
                push_line(level, raw);
            }
            Token::Verbatim(raw) => push_line(level, raw),
            Token::Text(text) => {
                for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
                    push_line(level, line);
                }
            }
        }
    }

    out
}

fn tokenize(markup: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < markup.len() {
        if markup[pos..].starts_with('<') {
            let end = tag_end(markup, pos);
            tokens.push(classify_tag(&markup[pos..end]));
            pos = end;
        } else {
            let next = markup[pos..].find('<').map_or(markup.len(), |i| pos + i);
            tokens.push(Token::Text(&markup[pos..next]));
            pos = next;
        }
    }

    tokens
}

/// Index just past the `>` closing the tag starting at `start`.
/// Quoted attribute values may contain `>`.
fn tag_end(markup: &str, start: usize) -> usize {
    let rest = &markup[start..];
    if rest.starts_with("<!--") {
        return rest.find("-->").map_or(markup.len(), |i| start + i + 3);
    }

    let mut quote: Option<u8> = None;
    for (i, &b) in rest.as_bytes().iter().enumerate().skip(1) {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'\'' || b == b'"' => quote = Some(b),
            None if b == b'>' => return start + i + 1,
            None => {}
        }
    }
    markup.len()
}

fn classify_tag(raw: &str) -> Token<'_> {
    if raw.starts_with("</") {
        return Token::Close(raw);
    }
    if raw.starts_with("<!") || raw.starts_with("<?") {
        return Token::Verbatim(raw);
    }

    let name: String = raw[1..]
        .chars()
        .take_while(|c| !c.is_whitespace() && *c != '/' && *c != '>')
        .collect::<String>()
        .to_ascii_lowercase();
    let self_closing = raw.ends_with("/>");
    let opens_level = !self_closing && !VOID_ELEMENTS.contains(&name.as_str());

    Token::Open { raw, opens_level }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_joins_with_newlines() {
        let fragments = vec!["<a>".to_string(), "x".to_string(), "</a>".to_string()];
        let options = SerializeOptions {
            pretty: false,
            indent: 1,
        };
        assert_eq!(serialize(&fragments, &options), "<a>\nx\n</a>\n");
    }

    #[test]
    fn test_prettify_nests_elements() {
        let out = prettify(
            "<details style='--depth:0'><summary><span title='a > b'>etc</span></summary></details>",
            2,
        );
        assert_eq!(
            out,
            "<details style='--depth:0'>\n  <summary>\n    <span title='a > b'>\n      etc\n    </span>\n  </summary>\n</details>\n"
        );
    }

    #[test]
    fn test_void_and_self_closing_do_not_nest() {
        let out = prettify(
            "<!DOCTYPE html><head><meta charset='UTF-8'><svg><path d='M0'/></svg></head>",
            1,
        );
        assert_eq!(
            out,
            "<!DOCTYPE html>\n<head>\n <meta charset='UTF-8'>\n <svg>\n  <path d='M0'/>\n </svg>\n</head>\n"
        );
    }

    #[test]
    fn test_comments_are_kept_whole() {
        let out = prettify("<div><!-- a <b> c --></div>", 1);
        assert_eq!(out, "<div>\n <!-- a <b> c -->\n</div>\n");
    }

    #[test]
    fn test_whitespace_text_is_dropped() {
        let out = prettify("<p>\n   \n  hello  \n</p>", 1);
        assert_eq!(out, "<p>\n hello\n</p>\n");
    }

    #[test]
    fn test_unbalanced_close_does_not_underflow() {
        let out = prettify("</div><p>x</p>", 1);
        assert_eq!(out, "</div>\n<p>\n x\n</p>\n");
    }

    #[test]
    fn test_options_from_config() {
        let config = DocumentConfig {
            pretty: false,
            indent: 4,
            ..DocumentConfig::default()
        };
        let options = SerializeOptions::from(&config);
        assert!(!options.pretty);
        assert_eq!(options.indent, 4);
    }
}
