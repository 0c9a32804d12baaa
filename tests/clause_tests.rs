use catalogqa::clause::{TitleClause, parse_title_line};
use spectral::prelude::*;

fn clause(clean_name: &str, credits: &str, designations: &str) -> TitleClause {
    TitleClause {
        clean_name: clean_name.to_owned(),
        credits: credits.to_owned(),
        designations: designations.to_owned(),
    }
}

#[test]
fn credits_and_designation_split() {
    assert_that(&parse_title_line("CSE 143 Computer Programming II (5 NW)"))
        .is_equal_to(clause("CSE 143 Computer Programming II", "5", "NW"));
}

#[test]
fn credit_range_with_max() {
    assert_that(&parse_title_line("CSE 498 Undergraduate Thesis (1-5, max. 10)"))
        .is_equal_to(clause("CSE 498 Undergraduate Thesis", "1-5, max. 10", ""));
}

#[test]
fn multi_letter_designations_with_separators() {
    assert_that(&parse_title_line("CSE 160 Data Programming (4 NW/QSR)"))
        .is_equal_to(clause("CSE 160 Data Programming", "4", "NW/QSR"));
    assert_that(&parse_title_line("CSE 131 Science and Art of Digital Photography (5 A&H)"))
        .is_equal_to(clause(
            "CSE 131 Science and Art of Digital Photography",
            "5",
            "A&H",
        ));
}

#[test]
fn extended_credit_expression() {
    assert_that(&parse_title_line("Programming Abstractions (4; max. 3/quarter R)"))
        .is_equal_to(clause("Programming Abstractions", "4; max. 3/quarter", "R"));
}

#[test]
fn clause_followed_by_text_keeps_name() {
    assert_that(&parse_title_line("CSE 142 Computer Programming I (4) NW, QSR")).is_equal_to(
        clause("CSE 142 Computer Programming I (4) NW, QSR", "4", ""),
    );
}

#[test]
fn missing_clause_leaves_parts_empty() {
    assert_that(&parse_title_line("  CSE 390 Special Topics  "))
        .is_equal_to(clause("CSE 390 Special Topics", "", ""));
}

#[test]
fn non_numeric_parenthetical_ignored() {
    assert_that(&parse_title_line("CSE 301 Internship (Credit/no-credit only)"))
        .is_equal_to(clause("CSE 301 Internship (Credit/no-credit only)", "", ""));
}

#[test]
fn digit_led_words_are_not_credits() {
    assert_that(&parse_title_line("CSE 123 Intro (2nd edition)"))
        .is_equal_to(clause("CSE 123 Intro (2nd edition)", "", ""));
    assert_that(&parse_title_line("CSE 457 Graphics (3D Modeling)"))
        .is_equal_to(clause("CSE 457 Graphics (3D Modeling)", "", ""));
}

#[test]
fn grading_note_after_credits_ignored() {
    assert_that(&parse_title_line("CSE 301 Internship (2, credit/no credit only)")).is_equal_to(
        clause("CSE 301 Internship (2, credit/no credit only)", "", ""),
    );
}

#[test]
fn extended_credits_with_multiple_designations() {
    assert_that(&parse_title_line("CSE 399 Research (2-5, max. 15; 3/quarter NW/QSR)"))
        .is_equal_to(clause("CSE 399 Research", "2-5, max. 15; 3/quarter", "NW/QSR"));
}

#[test]
fn whitespace_before_clause_stripped() {
    assert_that(&parse_title_line("CSE 333 Systems Programming   (4)"))
        .is_equal_to(clause("CSE 333 Systems Programming", "4", ""));
}
