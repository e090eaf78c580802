use folio_core::error::IngestError;
use folio_core::ingest::{read_rows, read_rows_from_slice};

const HEADER: &str = "Section,Question Number,Question,Response Option(s),Reviewer Names\n";

#[test]
fn reads_rows_in_file_order() {
    let csv = format!(
        "{HEADER}\
         Governance,2,Is there a board?,Yes,Ana Souza\n\
         Governance,1,Is there a charter?,No,Bruno Lima\n\
         Finance,3,Are accounts audited?,Partially,Carla Dias\n"
    );

    let rows = read_rows(csv.as_bytes()).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].question_number, "2");
    assert_eq!(rows[1].question_number, "1");
    assert_eq!(rows[2].section, "Finance");
    assert_eq!(rows[0].reviewer_name, "Ana Souza");
    assert_eq!(rows[1].response_text.as_deref(), Some("No"));
}

#[test]
fn column_order_and_extra_columns_do_not_matter() {
    let csv = "Reviewer Names,Notes,Question,Section,Response Option(s),Question Number\n\
               Ana,ignored,Is there a board?,Governance,Yes,1\n";

    let rows = read_rows(csv.as_bytes()).unwrap();
    assert_eq!(rows[0].section, "Governance");
    assert_eq!(rows[0].question_number, "1");
    assert_eq!(rows[0].question_text, "Is there a board?");
    assert_eq!(rows[0].response_text.as_deref(), Some("Yes"));
    assert_eq!(rows[0].reviewer_name, "Ana");
}

#[test]
fn empty_and_marker_responses_are_absent() {
    let csv = format!(
        "{HEADER}\
         A,1,First,,Ana\n\
         A,2,Second,NaN,Ana\n\
         A,3,Third,N/A,Ana\n\
         A,4,Fourth,  ,Ana\n\
         A,5,Fifth,Not applicable,Ana\n"
    );

    let rows = read_rows(csv.as_bytes()).unwrap();
    assert_eq!(rows[0].response_text, None);
    assert_eq!(rows[1].response_text, None);
    assert_eq!(rows[2].response_text, None);
    assert_eq!(rows[3].response_text, None);
    assert_eq!(rows[4].response_text.as_deref(), Some("Not applicable"));
}

#[test]
fn quoted_fields_keep_commas_and_newlines() {
    let csv = format!("{HEADER}A,1,\"Who, when, where?\",\"line one\nline two\",Ana\n");

    let rows = read_rows(csv.as_bytes()).unwrap();
    assert_eq!(rows[0].question_text, "Who, when, where?");
    assert_eq!(rows[0].response_text.as_deref(), Some("line one\nline two"));
}

#[test]
fn byte_order_mark_and_padded_headers_are_accepted() {
    let csv = "\u{feff}Section , Question Number,Question,Response Option(s),Reviewer Names\n\
               A,1,First,Yes,Ana\n";

    let rows = read_rows_from_slice(csv.as_bytes()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].section, "A");
}

#[test]
fn missing_column_is_named() {
    let csv = "Section,Question Number,Question,Reviewer Names\nA,1,First,Ana\n";

    match read_rows(csv.as_bytes()) {
        Err(IngestError::MissingColumn(column)) => assert_eq!(column, "Response Option(s)"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn header_only_file_is_empty_input() {
    assert!(matches!(
        read_rows(HEADER.as_bytes()),
        Err(IngestError::EmptyInput)
    ));
}

#[test]
fn zero_byte_file_is_empty_input() {
    assert!(matches!(
        read_rows_from_slice(b""),
        Err(IngestError::EmptyInput)
    ));
}

#[test]
fn ragged_row_is_a_csv_error() {
    let csv = format!("{HEADER}A,1,First\n");

    assert!(matches!(read_rows(csv.as_bytes()), Err(IngestError::Csv(_))));
}

#[test]
fn invalid_utf8_is_a_csv_error() {
    let mut csv = HEADER.as_bytes().to_vec();
    csv.extend_from_slice(b"A,1,\xff\xfe broken,Yes,Ana\n");

    assert!(matches!(read_rows_from_slice(&csv), Err(IngestError::Csv(_))));
}

#[test]
fn spreadsheet_null_markers_are_absent() {
    let markers = ["#N/A N/A", "-NaN", "-1.#IND", "1.#IND", "-1.#QNAN", "1.#QNAN", "<NA>", "null"];
    let mut csv = HEADER.to_string();
    for (n, marker) in markers.iter().enumerate() {
        csv.push_str(&format!("A,{n},Question,{marker},Ana\n"));
    }

    let rows = read_rows(csv.as_bytes()).unwrap();
    assert_eq!(rows.len(), markers.len());
    assert!(rows.iter().all(|row| row.response_text.is_none()));
}
