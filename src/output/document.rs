//! Full HTML document wrapper around a rendered tree fragment.

use std::path::Path;

use crate::format::format_now;
use crate::output::html::escape_html;

const STYLE: &str = r#":root {
  color-scheme: light dark;
  --font-stack: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica,
                Arial, sans-serif, "Apple Color Emoji", "Segoe UI Emoji";
}
* { box-sizing: border-box; }
body {
  margin: 0;
  padding: 1.5rem;
  font-family: var(--font-stack);
  line-height: 1.5;
  font-size: 0.95rem;
}
ul { list-style-type: none; padding-left: 1em; margin: 0; }
li { margin: 0.2em 0; }
details > summary {
  cursor: pointer;
  margin: 0.4em 0;
}
summary::-webkit-details-marker { display: none; }
details summary::before {
  content: "\25B8 ";
  display: inline-block;
  transition: transform 0.1s ease-in-out;
}
details[open] summary::before {
  transform: rotate(90deg);
}
strong { font-weight: 600; }
small { opacity: 0.75; }
@media (prefers-color-scheme: dark) {
  body { background: #111; color: #ddd; }
  a { color: #8ab4f8; }
}
"#;

/// Wrap a rendered tree fragment into a complete, self-contained HTML page.
///
/// The page embeds its style sheet (dark-mode aware), names the escaped root
/// path in the title and header, and stamps the generation time in local
/// time.
pub fn render_document(root: &Path, tree_html: &str) -> String {
    let escaped_root = escape_html(&root.display().to_string());
    let generated = format_now();

    let mut doc = String::with_capacity(tree_html.len() + STYLE.len() + 1024);
    doc.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    doc.push_str(&format!("<title>Directory tree for {escaped_root}</title>\n"));
    doc.push_str("<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\n");
    doc.push_str("<style>\n");
    doc.push_str(STYLE);
    doc.push_str("</style>\n</head>\n<body>\n");
    doc.push_str(&format!(
        "<h1>Directory tree for <code>{escaped_root}</code></h1>\n"
    ));
    doc.push_str(&format!(
        "<blockquote>\nGenerated {generated} (local time). Entries sorted by \
         <em>most recently modified</em>.\n</blockquote>\n"
    ));
    doc.push_str("<main>\n");
    doc.push_str(tree_html);
    doc.push_str("</main>\n</body>\n</html>\n");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_structure() {
        let doc = render_document(Path::new("/srv/data"), "<li>x</li>\n");

        assert!(doc.starts_with("<!doctype html>"));
        assert!(doc.contains("<style>"));
        assert!(doc.contains("color-scheme: light dark"));
        assert!(doc.contains("prefers-color-scheme: dark"));
        assert!(doc.contains("<title>Directory tree for /srv/data</title>"));
        assert!(doc.contains("<code>/srv/data</code>"));
        assert!(doc.contains("<main>\n<li>x</li>\n</main>"));
        assert!(doc.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_root_path_is_escaped() {
        let doc = render_document(Path::new("/tmp/a<b&c"), "");
        assert!(doc.contains("/tmp/a&lt;b&amp;c"));
        assert!(!doc.contains("a<b&c"));
    }

    #[test]
    fn test_generation_stamp_shape() {
        let doc = render_document(Path::new("/tmp"), "");
        let start = doc.find("Generated ").unwrap() + "Generated ".len();
        let stamp = &doc[start..start + 19];
        assert_eq!(stamp.as_bytes()[4], b'-');
        assert_eq!(stamp.as_bytes()[10], b' ');
        assert_eq!(stamp.as_bytes()[13], b':');
    }
}
