pub const MODEL_API_KEY_ENV_NAME: &str = "GEMINI_API_KEY";

pub const DEFAULT_MODEL: &str = "google://gemini-1.5-pro";

pub const CATALOG_URL: &str = "https://www.washington.edu/students/crscat/cse.html";

pub const OUTPUT_FILE: &str = "uw_cse_courses.csv";

pub const PREVIEW_ROWS: usize = 5;

pub(crate) const COURSE_ANCHOR_NAME: &str = r"(?i:cse)\d+";

pub(crate) const MYPLAN_SUFFIX: &str = r"View course details in MyPlan: CSE \d+\.?";

/// Clause accepted by the catalog's own title convention, e.g. `(1-5, max. 10 NW)`.
pub(crate) const CATALOG_CLAUSE: &str = r"\(([\d\-, max\.\s]+)(?:\s+([A-Za-z&/]+))?\)";

/// Looser clause for credit expressions with `;` or `/`, e.g. `(4; max. 3/quarter R)`.
pub(crate) const EXTENDED_CLAUSE: &str =
    r"\((\d(?:[\d\-,;/\s]|max\.|quarter)*)(?:\s+([A-Za-z&/]+))?\)";

pub(crate) const PROMPT_INSTRUCTION: &str = "Answer the following question";

pub(crate) const PROMPT_CONNECTIVE: &str = "given the following data";
