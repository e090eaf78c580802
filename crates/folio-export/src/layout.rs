//! Turns review rows into the ordered blocks of a report body.

use folio_core::models::{Row, group_sections};

use crate::error::ExportError;
use crate::styles::ReportLabels;

/// A unit of flowing report content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Credits the reviewer; appears once, first.
    Reviewer { name: String },
    /// Heading that opens a run of rows from the same section.
    SectionTitle { title: String },
    /// `"{number} - {text}"`, set in bold.
    Question { number: String, text: String },
    /// The answer to the preceding question.
    Response { text: String },
}

/// Plan the report body for `rows`.
///
/// The reviewer is always taken from the first row. Each section group gets
/// one title, followed by a question and a response block per row; absent
/// responses are replaced by `labels.no_response`.
pub fn plan_blocks(rows: &[Row], labels: &ReportLabels) -> Result<Vec<Block>, ExportError> {
    let first = rows.first().ok_or(ExportError::EmptyInput)?;

    let mut blocks = Vec::with_capacity(1 + rows.len() * 2);
    blocks.push(Block::Reviewer {
        name: first.reviewer_name.clone(),
    });

    for group in group_sections(rows) {
        blocks.push(Block::SectionTitle {
            title: group.section.to_string(),
        });

        for row in group.rows {
            blocks.push(Block::Question {
                number: row.question_number.clone(),
                text: row.question_text.clone(),
            });
            blocks.push(Block::Response {
                text: row
                    .response_text
                    .clone()
                    .unwrap_or_else(|| labels.no_response.clone()),
            });
        }
    }

    Ok(blocks)
}
