//! The link registry and its builder
//!
//! `LinkGraph` owns every `Link` for the lifetime of a report run and is
//! read-only once built. Links refer to each other by URL key, so cycles
//! and shared children need no special ownership handling; traversals
//! track visited URLs themselves.

use crate::graph::{GraphError, GraphResult, Link};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

/// The complete crawled link graph
#[derive(Debug)]
pub struct LinkGraph {
    base: String,
    links: HashMap<String, Link>,
    bad: HashSet<String>,
}

impl LinkGraph {
    /// Looks up a link by URL.
    ///
    /// Fails with `GraphError::NotFound` for URLs that were never
    /// registered. Report code rendering references from crawled pages
    /// should prefer `get` and degrade gracefully: a reference pointing
    /// nowhere is an expected case, not a fault.
    pub fn lookup(&self, url: &str) -> GraphResult<&Link> {
        self.links
            .get(url)
            .ok_or_else(|| GraphError::NotFound(url.to_string()))
    }

    /// Looks up a link by URL, returning `None` when absent.
    pub fn get(&self, url: &str) -> Option<&Link> {
        self.links.get(url)
    }

    /// The base (site root) link. Guaranteed present by construction.
    pub fn base(&self) -> &Link {
        &self.links[&self.base]
    }

    /// The base URL.
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Iterates over all links in no particular order.
    pub fn all(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    /// Number of links in the graph.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns true when the graph holds no links.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Returns true when the URL is in the bad-link registry.
    pub fn is_bad(&self, url: &str) -> bool {
        self.bad.contains(url)
    }

    /// Iterates over the URLs in the bad-link registry, unordered.
    pub fn bad_links(&self) -> impl Iterator<Item = &str> {
        self.bad.iter().map(String::as_str)
    }
}

/// Builder for `LinkGraph`
///
/// The builder is the only way to construct a graph. It keeps the
/// parent/child relation symmetric: `connect(a, b)` records `b` as a
/// child of `a` and `a` as a parent of `b` in one step.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    links: HashMap<String, Link>,
    order: Vec<String>,
    bad: HashSet<String>,
}

impl GraphBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a link.
    ///
    /// Every URL may be registered once; references from other pages
    /// share that single instance.
    pub fn add(&mut self, link: Link) -> GraphResult<()> {
        if self.links.contains_key(&link.url) {
            return Err(GraphError::Duplicate(link.url));
        }
        self.order.push(link.url.clone());
        self.links.insert(link.url.clone(), link);
        Ok(())
    }

    /// Records a parent → child reference, keeping both sides of the
    /// relation consistent. Repeated connections are collapsed.
    pub fn connect(&mut self, parent: &str, child: &str) -> GraphResult<()> {
        {
            let parent_link = self
                .links
                .get_mut(parent)
                .ok_or_else(|| GraphError::NotFound(parent.to_string()))?;
            if !parent_link.children.iter().any(|c| c == child) {
                parent_link.children.push(child.to_string());
            }
        }
        let child_link = self
            .links
            .get_mut(child)
            .ok_or_else(|| GraphError::NotFound(child.to_string()))?;
        child_link.parents.insert(parent.to_string());
        Ok(())
    }

    /// Appends a diagnostic message to a registered link.
    pub fn add_problem(&mut self, url: &str, message: String) -> GraphResult<()> {
        let link = self
            .links
            .get_mut(url)
            .ok_or_else(|| GraphError::NotFound(url.to_string()))?;
        link.problems.push(message);
        Ok(())
    }

    /// Adds a URL to the bad-link registry.
    pub fn mark_bad(&mut self, url: &str) {
        self.bad.insert(url.to_string());
    }

    /// Derives each link's age in whole days from its `mtime`, relative
    /// to `reference`. Links without an `mtime` keep `age = None`.
    pub fn derive_ages(&mut self, reference: DateTime<Utc>) {
        for link in self.links.values_mut() {
            link.age = link.mtime.map(|mtime| (reference - mtime).num_days());
        }
    }

    /// Finalizes the graph. The base URL must have been registered.
    pub fn build(self, base_url: &str) -> GraphResult<LinkGraph> {
        if !self.links.contains_key(base_url) {
            return Err(GraphError::MissingBase(base_url.to_string()));
        }
        Ok(LinkGraph {
            base: base_url.to_string(),
            links: self.links,
            bad: self.bad,
        })
    }
}
