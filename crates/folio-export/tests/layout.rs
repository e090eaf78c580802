use folio_core::models::Row;
use folio_export::error::ExportError;
use folio_export::layout::{Block, plan_blocks};
use folio_export::styles::ReportLabels;

fn row(section: &str, number: &str, response: Option<&str>, reviewer: &str) -> Row {
    Row {
        section: section.to_string(),
        question_number: number.to_string(),
        question_text: format!("Question {number}"),
        response_text: response.map(str::to_string),
        reviewer_name: reviewer.to_string(),
    }
}

fn titles(blocks: &[Block]) -> Vec<&str> {
    blocks
        .iter()
        .filter_map(|b| match b {
            Block::SectionTitle { title } => Some(title.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn empty_rows_are_rejected() {
    let err = plan_blocks(&[], &ReportLabels::default()).unwrap_err();
    assert!(matches!(err, ExportError::EmptyInput));
}

#[test]
fn two_sections_in_order() {
    let rows = vec![
        row("A", "1", Some("Yes"), "Ana"),
        row("A", "2", Some("No"), "Ana"),
        row("B", "3", Some("Maybe"), "Ana"),
    ];

    let blocks = plan_blocks(&rows, &ReportLabels::default()).unwrap();
    assert_eq!(
        blocks,
        vec![
            Block::Reviewer { name: "Ana".into() },
            Block::SectionTitle { title: "A".into() },
            Block::Question { number: "1".into(), text: "Question 1".into() },
            Block::Response { text: "Yes".into() },
            Block::Question { number: "2".into(), text: "Question 2".into() },
            Block::Response { text: "No".into() },
            Block::SectionTitle { title: "B".into() },
            Block::Question { number: "3".into(), text: "Question 3".into() },
            Block::Response { text: "Maybe".into() },
        ]
    );
}

#[test]
fn repeated_section_after_interruption_gets_a_second_heading() {
    let rows = vec![
        row("A", "1", Some("Yes"), "Ana"),
        row("B", "2", Some("Yes"), "Ana"),
        row("A", "3", Some("Yes"), "Ana"),
    ];

    let blocks = plan_blocks(&rows, &ReportLabels::default()).unwrap();
    assert_eq!(titles(&blocks), ["A", "B", "A"]);
}

#[test]
fn reviewer_comes_from_first_row_only() {
    let rows = vec![
        row("A", "1", Some("Yes"), "Ana"),
        row("A", "2", Some("Yes"), "Bruno"),
        row("B", "3", Some("Yes"), "Carla"),
    ];

    let blocks = plan_blocks(&rows, &ReportLabels::default()).unwrap();
    let reviewers: Vec<&Block> = blocks
        .iter()
        .filter(|b| matches!(b, Block::Reviewer { .. }))
        .collect();
    assert_eq!(reviewers, [&Block::Reviewer { name: "Ana".into() }]);
    assert_eq!(blocks[0], Block::Reviewer { name: "Ana".into() });
}

#[test]
fn absent_response_uses_placeholder() {
    let rows = vec![row("A", "1", None, "Ana")];

    let blocks = plan_blocks(&rows, &ReportLabels::default()).unwrap();
    assert_eq!(blocks.last(), Some(&Block::Response { text: "No response".into() }));
}

#[test]
fn placeholder_follows_labels() {
    let labels = ReportLabels {
        no_response: "Sem resposta".to_string(),
        ..ReportLabels::default()
    };
    let rows = vec![row("A", "1", None, "Ana")];

    let blocks = plan_blocks(&rows, &labels).unwrap();
    assert_eq!(blocks.last(), Some(&Block::Response { text: "Sem resposta".into() }));
}

#[test]
fn every_row_yields_one_question_and_one_response() {
    let rows: Vec<Row> = (1..=7)
        .map(|n| row(if n % 3 == 0 { "B" } else { "A" }, &n.to_string(), None, "Ana"))
        .collect();

    let blocks = plan_blocks(&rows, &ReportLabels::default()).unwrap();
    let questions: Vec<&str> = blocks
        .iter()
        .filter_map(|b| match b {
            Block::Question { number, .. } => Some(number.as_str()),
            _ => None,
        })
        .collect();
    let responses = blocks
        .iter()
        .filter(|b| matches!(b, Block::Response { .. }))
        .count();

    assert_eq!(questions, ["1", "2", "3", "4", "5", "6", "7"]);
    assert_eq!(responses, 7);
}
