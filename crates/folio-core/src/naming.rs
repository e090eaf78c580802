/// Derive the PDF download name from the uploaded file name.
///
/// The last extension is replaced by `pdf` (`review.final.csv` becomes
/// `review.final.pdf`); a name without extension gets `.pdf` appended.
/// Any directory part a browser may send is dropped first.
pub fn pdf_file_name(input_name: &str) -> String {
    let base = input_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(input_name);

    let stem = match base.rsplit_once('.') {
        Some((stem, _extension)) => stem,
        None => base,
    };

    format!("{stem}.pdf")
}
