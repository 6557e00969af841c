//! HTML rendering primitives shared by all reports
//!
//! This module handles:
//! - Escaping crawled text for element bodies and attribute values
//! - Rendering link anchors with an information tooltip
//! - Rendering degraded (unlinked) references and parent lists

mod escape;
mod html;

pub use escape::{attribute, escape};
pub use html::{anchor, bare, format_size, link_info, parent_list};
