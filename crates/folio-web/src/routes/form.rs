use axum::response::Html;

/// The upload form.
pub async fn index() -> Html<String> {
    Html(page(None))
}

/// Render the form page, optionally with an error banner above it.
pub fn page(error: Option<&str>) -> String {
    let banner = error
        .map(|message| format!("<p class=\"error\" role=\"alert\">{}</p>\n", escape_html(message)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>CSV to PDF converter</title>
<style>
body {{ font-family: sans-serif; max-width: 40rem; margin: 3rem auto; padding: 0 1rem; }}
.error {{ background: #fde8e8; border: 1px solid #e0a0a0; padding: 0.75rem; }}
</style>
</head>
<body>
<h1>CSV to PDF converter</h1>
<p>Upload a review CSV to convert it to PDF.</p>
{banner}<form action="/convert" method="post" enctype="multipart/form-data">
<input type="file" name="file" accept=".csv,text/csv" required>
<button type="submit">Download PDF</button>
</form>
</body>
</html>
"#
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
