use folio_core::models::{Row, group_sections};

fn row(section: &str, number: &str) -> Row {
    Row {
        section: section.to_string(),
        question_number: number.to_string(),
        question_text: format!("Question {number}"),
        response_text: Some("Yes".to_string()),
        reviewer_name: "Ana".to_string(),
    }
}

#[test]
fn empty_rows_have_no_groups() {
    assert!(group_sections(&[]).is_empty());
}

#[test]
fn contiguous_rows_share_a_group() {
    let rows = vec![row("A", "1"), row("A", "2"), row("B", "3")];

    let groups = group_sections(&rows);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].section, "A");
    assert_eq!(groups[0].rows.len(), 2);
    assert_eq!(groups[1].section, "B");
    assert_eq!(groups[1].rows, &rows[2..]);
}

#[test]
fn interrupted_section_opens_a_new_group() {
    let rows = vec![row("A", "1"), row("B", "2"), row("A", "3")];

    let sections: Vec<&str> = group_sections(&rows).iter().map(|g| g.section).collect();
    assert_eq!(sections, ["A", "B", "A"]);
}

#[test]
fn groups_cover_every_row_in_order() {
    let rows = vec![
        row("A", "1"),
        row("A", "2"),
        row("B", "3"),
        row("C", "4"),
        row("C", "5"),
        row("A", "6"),
    ];

    let numbers: Vec<&str> = group_sections(&rows)
        .iter()
        .flat_map(|g| g.rows.iter().map(|r| r.question_number.as_str()))
        .collect();
    assert_eq!(numbers, ["1", "2", "3", "4", "5", "6"]);
}
