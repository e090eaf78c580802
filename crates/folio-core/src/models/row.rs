use serde::{Deserialize, Serialize};

/// One question of a review, as read from a CSV line.
///
/// Rows are kept in file order; that order is the document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub section: String,
    pub question_number: String,
    pub question_text: String,
    /// `None` when the reviewer left the question unanswered.
    pub response_text: Option<String>,
    pub reviewer_name: String,
}
