//! Server-rendered upload form and results page.

use html_escape::encode_text;

use crate::matching::policy::SkipWarning;
use crate::models::ScoredResult;

/// Everything the page can show. The default is the empty form.
#[derive(Debug, Default)]
pub struct PageView<'a> {
    pub message: Option<&'a str>,
    pub results: &'a [ScoredResult],
    pub warnings: &'a [SkipWarning],
}

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Resume Matcher</title>
<style>
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }
textarea { width: 100%; }
.message { font-weight: bold; }
.warnings { color: #8a5a00; }
</style>
</head>
<body>
<h1>Resume Matcher</h1>
<form method="post" action="/matcher" enctype="multipart/form-data">
<label for="job_description">Job description</label>
<textarea id="job_description" name="job_description" rows="8" required></textarea>
<label for="resumes">Resumes</label>
<input id="resumes" type="file" name="resumes" multiple accept=".pdf,.docx,.txt" required>
<button type="submit">Match</button>
</form>
"#;

const TAIL: &str = "</body>\n</html>\n";

pub fn render_page(view: &PageView<'_>) -> String {
    let mut html = String::from(HEAD);

    if let Some(message) = view.message {
        html.push_str(&format!("<p class=\"message\">{}</p>\n", encode_text(message)));
    }

    if !view.results.is_empty() {
        html.push_str("<ol class=\"results\">\n");
        for r in view.results {
            html.push_str(&format!(
                "<li>{} (score: {:.2})</li>\n",
                encode_text(&r.filename),
                r.score
            ));
        }
        html.push_str("</ol>\n");
    }

    if !view.warnings.is_empty() {
        html.push_str("<ul class=\"warnings\">\n");
        for w in view.warnings {
            html.push_str(&format!(
                "<li>Skipped {}: {}</li>\n",
                encode_text(&w.filename),
                encode_text(&w.reason.to_string())
            ));
        }
        html.push_str("</ul>\n");
    }

    html.push_str(TAIL);
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::policy::SkipReason;

    #[test]
    fn test_empty_form_has_fields() {
        let html = render_page(&PageView::default());
        assert!(html.contains("name=\"job_description\""));
        assert!(html.contains("name=\"resumes\""));
        assert!(!html.contains("class=\"results\""));
    }

    #[test]
    fn test_results_render_in_order_with_two_decimals() {
        let results = vec![
            ScoredResult {
                filename: "c.txt".into(),
                score: 1.0,
            },
            ScoredResult {
                filename: "a.pdf".into(),
                score: 0.27,
            },
        ];
        let html = render_page(&PageView {
            message: Some("Top matching resumes:"),
            results: &results,
            warnings: &[],
        });
        let first = html.find("c.txt (score: 1.00)").unwrap();
        let second = html.find("a.pdf (score: 0.27)").unwrap();
        assert!(first < second);
        assert!(html.contains("Top matching resumes:"));
    }

    #[test]
    fn test_filenames_are_escaped() {
        let results = vec![ScoredResult {
            filename: "<script>alert(1)</script>.txt".into(),
            score: 0.5,
        }];
        let html = render_page(&PageView {
            message: None,
            results: &results,
            warnings: &[],
        });
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_warnings_are_listed() {
        let warnings = vec![SkipWarning {
            filename: "notes.md".into(),
            reason: SkipReason::UnsupportedFormat,
        }];
        let html = render_page(&PageView {
            message: Some("Top matching resumes:"),
            results: &[],
            warnings: &warnings,
        });
        assert!(html.contains("Skipped notes.md: unsupported file type"));
    }
}
