//! Link rendering helpers
//!
//! Builds the anchor markup, information tooltips and parent lists used
//! by the reports. All crawled text goes through the escape module.

use crate::graph::{Link, LinkGraph};
use crate::render::{attribute, escape};

/// Renders a link as an anchor.
///
/// The anchor carries `class="internal"` or `class="external"` and a
/// `title` attribute with a multi-line summary of what is known about
/// the target.
pub fn anchor(link: &Link) -> String {
    let class = if link.is_internal {
        "internal"
    } else {
        "external"
    };
    format!(
        "<a href=\"{href}\" class=\"{class}\" title=\"{info}\">{title}</a>",
        href = attribute(&link.url),
        class = class,
        info = attribute(&link_info(link)),
        title = escape(link.display_title()),
    )
}

/// Renders a link as plain text, without an anchor.
///
/// Used for bad links when configuration says not to anchor them, and
/// for references that resolve to no registered link.
pub fn bare(link: &Link) -> String {
    escape(link.display_title())
}

/// Returns a multi-line summary of the information known about a link,
/// used as hover text on its anchors.
pub fn link_info(link: &Link) -> String {
    let mut info = format!("url: {}\n", link.url);
    if let Some(status) = &link.status {
        info.push_str(status);
        info.push('\n');
    }
    if let Some(title) = &link.title {
        info.push_str(&format!("title: {}\n", title.trim()));
    }
    if let Some(author) = &link.author {
        info.push_str(&format!("author: {}\n", author.trim()));
    }
    if link.is_internal {
        info.push_str("internal link");
    } else {
        info.push_str("external link");
    }
    if link.is_yanked {
        info.push_str(", not checked\n");
    } else {
        info.push('\n');
    }
    if link.is_redirect() {
        match link.redirect_target() {
            Some(target) => info.push_str(&format!("redirect: {}\n", target)),
            None => info.push_str("redirect (not followed)\n"),
        }
    }
    match link.parents.len() {
        0 => {}
        1 => info.push_str("linked from 1 page\n"),
        n => info.push_str(&format!("linked from {} pages\n", n)),
    }
    if let Some(mtime) = link.mtime {
        info.push_str(&format!(
            "last modified: {}\n",
            mtime.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }
    if let Some(size) = link.size {
        info.push_str(&format!("size: {}\n", format_size(size)));
    }
    if let Some(mimetype) = &link.mimetype {
        info.push_str(&format!("mime-type: {}\n", mimetype));
    }
    for problem in &link.problems {
        info.push_str(&format!("problem: {}\n", problem));
    }
    info.trim_end().to_string()
}

/// Returns a byte count as a short human-readable string.
pub fn format_size(bytes: u64) -> String {
    const K: f64 = 1024.0;
    const M: f64 = K * 1024.0;
    const G: f64 = M * 1024.0;
    let bytes_f = bytes as f64;
    if bytes > 1024 * 1024 * 999 {
        format!("{}G", float_format(bytes_f / G))
    } else if bytes > 1024 * 999 {
        format!("{}M", float_format(bytes_f / M))
    } else if bytes >= 1024 {
        format!("{}K", float_format(bytes_f / K))
    } else {
        format!("{}", bytes)
    }
}

// Keep the formatted float within three characters: one decimal place
// normally, none once the integer part reaches two digits.
fn float_format(f: f64) -> String {
    let r = format!("{:.1}", f);
    if r.len() > 3 {
        match r.find('.') {
            Some(dot) => r[..dot].to_string(),
            None => r,
        }
    } else {
        r
    }
}

/// Renders the "referenced from" block listing a link's parents, sorted
/// by display title. Produces nothing for links without parents.
pub fn parent_list(link: &Link, graph: &LinkGraph, indent: &str) -> String {
    if link.parents.is_empty() {
        return String::new();
    }
    let mut parents: Vec<&Link> = link
        .parents
        .iter()
        .filter_map(|url| graph.get(url))
        .collect();
    parents.sort_by(|a, b| a.display_title().cmp(b.display_title()));

    let mut out = String::new();
    out.push_str(&format!("{}<div class=\"parents\">\n", indent));
    out.push_str(&format!("{} referenced from:\n", indent));
    out.push_str(&format!("{} <ul>\n", indent));
    for parent in parents {
        out.push_str(&format!("{}  <li>{}</li>\n", indent, anchor(parent)));
    }
    out.push_str(&format!("{} </ul>\n", indent));
    out.push_str(&format!("{}</div>\n", indent));
    out
}
