//! HTML rendering for the city pages and the site index.
//!
//! Pages are plain HTML5 with an inline stylesheet so the output directory
//! can be served as-is from any static host. All dynamic text (city names,
//! source names, URLs, and scraped status text) is escaped here.

use crate::models::CityPage;
use std::fmt::Write;

const STYLE: &str = r#"
    body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
           background: #fff; color: #1d1d1f; max-width: 44rem; margin: 0 auto; padding: 2.5rem 1.25rem; }
    h1 { font-size: 2rem; font-weight: 600; margin: 0 0 1.5rem; }
    a { color: #0066cc; text-decoration: none; }
    a:hover { text-decoration: underline; }
    .back { display: inline-block; margin-bottom: 1rem; font-size: .9rem; }
    .card { border: 1px solid #e5e5ea; border-radius: 12px; padding: 1rem 1.25rem; margin-bottom: 1rem; }
    .card h2 { font-size: 1.05rem; font-weight: 600; margin: 0 0 .35rem; }
    .status { margin: 0; font-size: 1rem; line-height: 1.45; }
    .cities { list-style: none; padding: 0; }
    .cities li { padding: .6rem 0; border-bottom: 1px solid #f0f0f0; font-size: 1.15rem; }
    footer { margin-top: 2rem; color: #86868b; font-size: .8rem; }
"#;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn open_page(html: &mut String, title: &str) {
    writeln!(html, "<!DOCTYPE html>").unwrap();
    writeln!(html, "<html lang=\"en\">").unwrap();
    writeln!(html, "<head>").unwrap();
    writeln!(html, "  <meta charset=\"utf-8\">").unwrap();
    writeln!(
        html,
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
    )
    .unwrap();
    writeln!(html, "  <title>{}</title>", escape_html(title)).unwrap();
    writeln!(html, "  <style>{}</style>", STYLE).unwrap();
    writeln!(html, "</head>").unwrap();
    writeln!(html, "<body>").unwrap();
}

fn close_page(html: &mut String, updated: &str) {
    writeln!(
        html,
        "<footer>Last updated <time datetime=\"{0}\">{0}</time></footer>",
        escape_html(updated)
    )
    .unwrap();
    writeln!(html, "</body>").unwrap();
    writeln!(html, "</html>").unwrap();
}

/// Render one city's status page.
///
/// `updated` is shown verbatim in the footer (normally an RFC 3339 timestamp).
pub fn render_city_page(page: &CityPage, updated: &str) -> String {
    let mut html = String::new();
    open_page(&mut html, &format!("{} status", page.name));

    writeln!(html, "<a class=\"back\" href=\"../\">&larr; All cities</a>").unwrap();
    writeln!(html, "<h1>{}</h1>", escape_html(&page.name)).unwrap();

    for source in &page.sources {
        writeln!(html, "<section class=\"card\">").unwrap();
        writeln!(
            html,
            "  <h2><a href=\"{}\" rel=\"noopener\">{}</a></h2>",
            escape_html(&source.url),
            escape_html(&source.name)
        )
        .unwrap();
        writeln!(html, "  <p class=\"status\">{}</p>", escape_html(&source.status)).unwrap();
        writeln!(html, "</section>").unwrap();
    }

    close_page(&mut html, updated);
    html
}

/// Render the root index linking every city page.
///
/// `cities` holds `(slug, display name)` pairs in display order.
pub fn render_index(cities: &[(String, String)], updated: &str) -> String {
    let mut html = String::new();
    open_page(&mut html, "City status");

    writeln!(html, "<h1>City status</h1>").unwrap();
    writeln!(html, "<ul class=\"cities\">").unwrap();
    for (slug, name) in cities {
        writeln!(
            html,
            "  <li><a href=\"./{}/\">{}</a></li>",
            escape_html(slug),
            escape_html(name)
        )
        .unwrap();
    }
    writeln!(html, "</ul>").unwrap();

    close_page(&mut html, updated);
    html
}
