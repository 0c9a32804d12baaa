//! Structural lookup of course entries: anchor, then paragraph, then bold title.

use std::collections::HashSet;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};

use crate::constants::COURSE_ANCHOR_NAME;

static COURSE_ANCHOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(COURSE_ANCHOR_NAME).expect("Failed to compile COURSE_ANCHOR_NAME regex")
});

/// What an element has to look like to be picked: a tag name and, optionally,
/// an attribute whose value matches a pattern.
#[derive(Debug, Clone)]
pub struct Capability {
    tag: &'static str,
    attribute: Option<(&'static str, Regex)>,
}

impl Capability {
    /// Matches any element with the given tag name.
    pub fn tag(tag: &'static str) -> Self {
        Self {
            tag,
            attribute: None,
        }
    }

    /// Additionally requires `name` to be present with a value matching `pattern` anywhere.
    #[must_use]
    pub fn with_attribute(mut self, name: &'static str, pattern: Regex) -> Self {
        self.attribute = Some((name, pattern));
        self
    }

    pub fn matches(&self, element: ElementRef<'_>) -> bool {
        let value = element.value();
        if !value.name().eq_ignore_ascii_case(self.tag) {
            return false;
        }

        match &self.attribute {
            Some((name, pattern)) => value.attr(name).is_some_and(|v| pattern.is_match(v)),
            None => true,
        }
    }

    /// First matching descendant of `element` in document order, `element` itself excluded.
    pub fn first_descendant<'a>(&self, element: ElementRef<'a>) -> Option<ElementRef<'a>> {
        element
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|child| self.matches(*child))
    }

    /// Closest matching ancestor of `element`.
    pub fn first_ancestor<'a>(&self, element: ElementRef<'a>) -> Option<ElementRef<'a>> {
        element
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|parent| self.matches(*parent))
    }

    /// All matching elements of the document in document order.
    pub fn select_all<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|element| self.matches(*element))
            .collect()
    }
}

/// A course entry found in the document, before any text is interpreted.
#[derive(Debug, Clone)]
pub struct CourseNode<'a> {
    /// Upper-cased anchor name, e.g. `CSE142`.
    pub code: String,
    pub paragraph: ElementRef<'a>,
    pub title: ElementRef<'a>,
}

/// Finds course anchors and their nested paragraph and bold title.
#[derive(Debug, Clone)]
pub struct CourseLocator {
    pub anchor: Capability,
    pub paragraph: Capability,
    pub title: Capability,
}

impl Default for CourseLocator {
    fn default() -> Self {
        Self {
            anchor: Capability::tag("a").with_attribute("name", COURSE_ANCHOR_REGEX.clone()),
            paragraph: Capability::tag("p"),
            title: Capability::tag("b"),
        }
    }
}

impl CourseLocator {
    /// Returns one node per course paragraph that holds a bold title, in
    /// document order. Other anchors are skipped.
    ///
    /// The paragraph is looked up below the anchor first, then above it: a
    /// nested MyPlan link makes the HTML parser reopen the anchor inside the
    /// paragraph and leave the original one empty.
    pub fn locate<'a>(&self, document: &'a Html) -> Vec<CourseNode<'a>> {
        let mut nodes = Vec::new();
        let mut seen = HashSet::new();

        for anchor in self.anchor.select_all(document) {
            let code = anchor
                .value()
                .attr("name")
                .unwrap_or_default()
                .to_uppercase();

            let Some(paragraph) = self
                .paragraph
                .first_descendant(anchor)
                .or_else(|| self.paragraph.first_ancestor(anchor))
            else {
                debug!("Skipping {code}: no paragraph");
                continue;
            };
            if !seen.insert(paragraph.id()) {
                continue;
            }
            let Some(title) = self.title.first_descendant(paragraph) else {
                debug!("Skipping {code}: no title");
                continue;
            };

            nodes.push(CourseNode {
                code,
                paragraph,
                title,
            });
        }

        nodes
    }
}
