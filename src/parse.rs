//! Turns located course nodes into course records.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

use crate::catalog::{CatalogTable, CourseRecord};
use crate::clause::parse_title_line;
use crate::constants::MYPLAN_SUFFIX;
use crate::locate::{CourseLocator, CourseNode};

static MYPLAN_SUFFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(MYPLAN_SUFFIX).expect("Failed to compile MYPLAN_SUFFIX regex"));

/// Extracts course records from a catalog page.
///
/// Every anchor named like `cse142` that holds a paragraph with a bold title
/// line yields one record, in document order. Anchors without that structure
/// are skipped, so a page with no usable anchors gives an empty table.
///
/// # Arguments
///
/// * `html` - The full HTML text of the catalog page.
pub fn extract_courses(html: &str) -> CatalogTable {
    let document = Html::parse_document(html);
    let records: Vec<CourseRecord> = CourseLocator::default()
        .locate(&document)
        .iter()
        .map(course_from_node)
        .collect();

    debug!("Extracted {} courses", records.len());
    records.into()
}

/// Builds a record from a located course node.
pub fn course_from_node(node: &CourseNode<'_>) -> CourseRecord {
    let title_line = node.title.text().collect::<String>().trim().to_string();
    let clause = parse_title_line(&title_line);
    let paragraph_text = node.paragraph.text().collect::<String>();

    CourseRecord {
        course_code: node.code.clone(),
        course_name: clause.clean_name,
        credits: clause.credits,
        designations: clause.designations,
        description: parse_description(&paragraph_text, &title_line),
    }
}

/// Removes the title line and the MyPlan link text from a paragraph's text.
pub fn parse_description(paragraph_text: &str, title_line: &str) -> String {
    let description = paragraph_text.replacen(title_line, "", 1);

    MYPLAN_SUFFIX_REGEX
        .replace_all(description.trim(), "")
        .trim()
        .to_string()
}
