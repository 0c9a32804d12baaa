//! Splits a course title line into its clean name and the trailing
//! `(credits designations)` clause.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{CATALOG_CLAUSE, EXTENDED_CLAUSE};

/// A title line broken into its parts. Missing parts are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleClause {
    pub clean_name: String,
    pub credits: String,
    pub designations: String,
}

/// A clause shape. `clause` is searched anywhere in the title, `trailing` strips
/// the same shape only at the end of the line.
struct ClauseRule {
    name: &'static str,
    clause: Regex,
    trailing: Regex,
}

impl ClauseRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            clause: Regex::new(pattern).expect("Failed to compile clause regex"),
            trailing: Regex::new(&format!(r"\s*{pattern}\s*$"))
                .expect("Failed to compile trailing clause regex"),
        }
    }
}

/// Tried in order, first match wins.
static CLAUSE_RULES: Lazy<Vec<ClauseRule>> = Lazy::new(|| {
    vec![
        ClauseRule::new("catalog", CATALOG_CLAUSE),
        ClauseRule::new("extended", EXTENDED_CLAUSE),
    ]
});

/// Parses a title line such as `Special Topics (1-5, max. 15)` or
/// `Programming Abstractions (4; max. 3/quarter R)`.
///
/// A title without a recognizable clause keeps its full text as the name.
pub fn parse_title_line(title: &str) -> TitleClause {
    for rule in CLAUSE_RULES.iter() {
        let Some(captures) = rule.clause.captures(title) else {
            continue;
        };
        debug!("Clause of {title:?} matched by {} rule", rule.name);

        let group = |index: usize| {
            captures
                .get(index)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default()
        };

        return TitleClause {
            clean_name: rule.trailing.replace(title, "").trim().to_string(),
            credits: group(1),
            designations: group(2),
        };
    }

    TitleClause {
        clean_name: title.trim().to_string(),
        ..TitleClause::default()
    }
}
