//! HTML documents served to browsers and the `go` tool.
//!
//! Every interpolated value is HTML-escaped; the route strings themselves come
//! from `ResolvedRoute` verbatim.

use std::fmt::Write;

use crate::config::schema::{LinkConfig, VanityConfig};
use crate::routing::{ResolvedRoute, RouteTable};

const STYLESHEETS: &str = r#"  <meta name="viewport" content="width=device-width, initial-scale=1">
  <link href="https://fonts.googleapis.com/css?family=Raleway:400,300,600" rel="stylesheet" type="text/css">
  <link rel="stylesheet" href="https://docs.golift.io/css/normalize.css">
  <link rel="stylesheet" href="https://docs.golift.io/css/custom.css">
  <link rel="stylesheet" href="https://docs.golift.io/css/skeleton.css">
"#;

/// Escape text for use in HTML content and attribute values.
pub fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(ch),
        }
    }
    result
}

fn render_links(out: &mut String, links: &[LinkConfig]) {
    for link in links {
        let _ = write!(
            out,
            "\n        <li><a href=\"{}\">{}</a></li>",
            html_escape(&link.url),
            html_escape(&link.title)
        );
    }
}

/// The index page listing every non-wildcard package route.
pub fn render_index(config: &VanityConfig, table: &RouteTable) -> String {
    let title = html_escape(&config.title);
    let host = html_escape(&config.host);

    let mut out = String::new();
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <title>{title} - {host}</title>\n  \
         <link rel=\"icon\" href=\"/favicon.ico\" type=\"image/x-icon\"/>\n  \
         <meta name=\"author\" content=\"{title}\">\n{STYLESHEETS}</head>\n<body>\n  <div class=\"container\">\n"
    );

    if !config.logo_url.is_empty() {
        let _ = write!(
            out,
            "    <div class=\"row\" style=\"margin-top: 10%\">\n      <img height=\"200px\" src=\"{}\">\n    </div>\n",
            html_escape(&config.logo_url)
        );
    }

    let _ = write!(
        out,
        "    <div class=\"row\" style=\"margin-top: 5%\">\n      <div class=\"two-thirds column\">\n        \
         <h1>{host} - {title}</h1>\n        <p>{}</p>\n      </div>\n      <div class=\"one-third column\">\n        \
         <h4>Resources</h4>",
        html_escape(&config.description)
    );
    render_links(&mut out, &config.links);
    out.push_str(
        "\n      </div>\n    </div>\n\n    <div class=\"value-props row\">\n      \
         <div class=\"two-thirds column value-prop\">\n        <h5>Go Modules</h5>\n        <ul>",
    );

    for entry in table.entries() {
        if entry.repo.is_empty() || entry.wildcard {
            continue;
        }
        let _ = write!(
            out,
            "\n          <li><a href=\"{}\">{}</a></li>",
            html_escape(&entry.path),
            html_escape(entry.path.strip_prefix('/').unwrap_or(&entry.path))
        );
    }

    let _ = write!(
        out,
        "\n        </ul>\n      </div>\n      <div class=\"one-third column value-prop\">\n        &copy; {title}<br>\n"
    );
    if !config.src.is_empty() {
        let _ = writeln!(out, "        (<a href=\"{}\">source</a>)", html_escape(&config.src));
    }
    out.push_str("      </div>\n    </div>\n  </div>\n</body>\n</html>\n");
    out
}

fn go_import(route: &ResolvedRoute<'_>) -> String {
    let vcs = route
        .entry
        .and_then(|e| e.vcs)
        .map(|v| v.as_str())
        .unwrap_or_default();
    format!(
        "{}{} {} {}",
        route.host,
        route.display_import_path(),
        vcs,
        route.repo_path()
    )
}

/// Minimal document for requests carrying `go-get=1`.
pub fn render_go_get(route: &ResolvedRoute<'_>) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n  <head>\n    \
         <meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\"/>\n    \
         <meta name=\"go-import\" content=\"{}\"/>\n    \
         <meta name=\"go-source\" content=\"{}\"/>\n    \
         <meta http-equiv=\"refresh\" content=\"0; url=https://{}{}\"/>\n  </head>\n</html>\n",
        html_escape(&go_import(route)),
        html_escape(&route.source_path()),
        html_escape(&route.host),
        html_escape(&route.display_import_path()),
    )
}

/// Package page for a matched route.
pub fn render_vanity(route: &ResolvedRoute<'_>, config: &VanityConfig) -> String {
    let package = html_escape(&format!("{}{}", route.host, route.display_import_path()));
    let repo = html_escape(&route.repo_path());
    let title = html_escape(&route.title());
    let index_title = html_escape(&route.index_title);

    let mut out = String::new();
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  \
         <meta http-equiv=\"content-type\" content=\"text/html; charset=UTF-8\">\n  \
         <title>Package {title} - {index_title}</title>\n  \
         <link rel=\"icon\" href=\"/favicon.ico\" type=\"image/x-icon\"/>\n\n  \
         <meta name=\"go-import\" content=\"{}\"/>\n  \
         <meta name=\"go-source\" content=\"{}\"/>\n  \
         <meta name=\"description\" content=\"{repo}\">\n  \
         <meta name=\"author\" content=\"{index_title}\">\n{STYLESHEETS}</head>\n<body>\n  <div class=\"container\">\n",
        html_escape(&go_import(route)),
        html_escape(&route.source_path()),
    );

    let _ = write!(
        out,
        "    <div class=\"row\" style=\"margin-top: 5%\">\n      <div class=\"two-thirds column\">\n        \
         <h1>{package}</h1>\n        <p>{}</p>\n      </div>",
        html_escape(&config.description)
    );
    if !config.links.is_empty() {
        out.push_str("\n      <div class=\"one-third column\">\n        <h4>Resources</h4>");
        render_links(&mut out, &config.links);
        out.push_str("\n      </div>");
    }

    let _ = write!(
        out,
        "\n    </div>\n\n    <div class=\"value-props row\">\n      <div class=\"one-third column value-prop\">\n        \
         <a class=\"button button-primary\" href=\"https://pkg.go.dev/{package}\">Documentation</a>\n      </div>\n      \
         <div class=\"one-third column value-prop\">\n        \
         <a class=\"button button-primary\" href=\"{repo}\">Code Repository</a>\n      </div>\n    </div>\n\n    \
         <div class=\"value-props row\">\n      <div class=\"two-thirds column value-prop\">\n        \
         <p>Download this package.</p>\n        <pre><code>go get {package}</code></pre>\n        \
         <p>Use this package.</p>\n        <pre><code>import (\n  \"{package}\"\n)</code></pre>\n        \
         <p>Refer to the package as <code>{title}</code></p>\n      </div>\n      \
         <div class=\"one-third column value-prop\">"
    );
    if !route.logo_url.is_empty() {
        let _ = write!(
            out,
            "\n        <a href=\"https://{}\"><img class=\"value-img\" src=\"{}\"></a>",
            html_escape(&route.host),
            html_escape(&route.logo_url)
        );
    }
    let _ = write!(
        out,
        "\n        <p>&copy; {index_title}</p>\n      </div>\n    </div>\n  </div>\n</body>\n</html>\n"
    );
    out
}
