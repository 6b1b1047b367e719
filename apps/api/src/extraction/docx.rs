use std::panic;
use std::path::Path;

use docx_rs::{
    read_docx, DocumentChild, FooterChild, HeaderChild, Paragraph, ParagraphChild, Run, RunChild,
    StructuredDataTag, StructuredDataTagChild, Table, TableCellContent, TableChild, TableRowChild,
};

use super::ExtractError;

/// Extracts the visible text of a .docx, one paragraph per line: headers,
/// then the body, then footers. Table cells and content controls are
/// walked recursively.
pub fn extract_docx(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    extract_docx_from_mem(&bytes)
}

pub fn extract_docx_from_mem(bytes: &[u8]) -> Result<String, ExtractError> {
    // The reader asserts on some malformed archives.
    let docx = match panic::catch_unwind(|| read_docx(bytes)) {
        Ok(Ok(docx)) => docx,
        Ok(Err(e)) => return Err(ExtractError::Docx(format!("{e:?}"))),
        Err(_) => return Err(ExtractError::Panicked),
    };

    let mut text = TextCollector::default();
    let section = &docx.document.section_property;

    for (_, header) in section.get_headers() {
        for child in &header.children {
            match child {
                HeaderChild::Paragraph(para) => text.paragraph(para),
                HeaderChild::Table(table) => text.table(table),
                HeaderChild::StructuredDataTag(tag) => text.content_control(tag),
            }
        }
    }

    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(para) => text.paragraph(para),
            DocumentChild::Table(table) => text.table(table),
            DocumentChild::StructuredDataTag(tag) => text.content_control(tag),
            _ => {}
        }
    }

    for (_, footer) in section.get_footers() {
        for child in &footer.children {
            match child {
                FooterChild::Paragraph(para) => text.paragraph(para),
                FooterChild::Table(table) => text.table(table),
                FooterChild::StructuredDataTag(tag) => text.content_control(tag),
            }
        }
    }

    Ok(text.lines.join("\n"))
}

#[derive(Default)]
struct TextCollector {
    lines: Vec<String>,
}

impl TextCollector {
    fn paragraph(&mut self, para: &Paragraph) {
        let mut line = String::new();
        push_inline(&para.children, &mut line);
        self.lines.push(line);
    }

    // Row and cell enums have a single variant today.
    #[allow(irrefutable_let_patterns)]
    fn table(&mut self, table: &Table) {
        for row in &table.rows {
            let TableChild::TableRow(row) = row else {
                continue;
            };
            for cell in &row.cells {
                let TableRowChild::TableCell(cell) = cell else {
                    continue;
                };
                for content in &cell.children {
                    match content {
                        TableCellContent::Paragraph(para) => self.paragraph(para),
                        TableCellContent::Table(nested) => self.table(nested),
                        TableCellContent::StructuredDataTag(tag) => self.content_control(tag),
                        _ => {}
                    }
                }
            }
        }
    }

    /// Block-level content control. Bare runs inside it form one line.
    fn content_control(&mut self, tag: &StructuredDataTag) {
        let mut runs = String::new();
        for child in &tag.children {
            match child {
                StructuredDataTagChild::Run(run) => push_run(run, &mut runs),
                StructuredDataTagChild::Paragraph(para) => self.paragraph(para),
                StructuredDataTagChild::Table(table) => self.table(table),
                StructuredDataTagChild::StructuredDataTag(nested) => self.content_control(nested),
                _ => {}
            }
        }
        if !runs.is_empty() {
            self.lines.push(runs);
        }
    }
}

fn push_inline(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, out),
            ParagraphChild::Hyperlink(link) => push_inline(&link.children, out),
            ParagraphChild::StructuredDataTag(tag) => push_inline_control(tag, out),
            _ => {}
        }
    }
}

fn push_inline_control(tag: &StructuredDataTag, out: &mut String) {
    for child in &tag.children {
        match child {
            StructuredDataTagChild::Run(run) => push_run(run, out),
            StructuredDataTagChild::StructuredDataTag(nested) => push_inline_control(nested, out),
            _ => {}
        }
    }
}

fn push_run(run: &Run, out: &mut String) {
    for rc in &run.children {
        match rc {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Footer, Header, TableCell, TableRow};

    fn write_docx(path: &Path, docx: Docx) {
        let file = std::fs::File::create(path).unwrap();
        docx.build().pack(file).unwrap();
    }

    fn para(text: &str) -> Paragraph {
        Paragraph::new().add_run(Run::new().add_text(text))
    }

    #[test]
    fn test_paragraphs_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.docx");
        write_docx(
            &path,
            Docx::new().add_paragraph(para("Jane Doe")).add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Python "))
                    .add_run(Run::new().add_text("developer")),
            ),
        );

        let text = extract_docx(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Jane Doe");
        assert!(lines[1].starts_with("Python"));
        assert!(lines[1].ends_with("developer"));
    }

    #[test]
    fn test_table_cells_are_included() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skills.docx");
        let table = Table::new(vec![TableRow::new(vec![
            TableCell::new().add_paragraph(para("Kubernetes")),
            TableCell::new().add_paragraph(para("Kafka")),
        ])]);
        write_docx(
            &path,
            Docx::new().add_paragraph(para("Skills")).add_table(table),
        );

        let text = extract_docx(&path).unwrap();
        assert!(text.contains("Skills"));
        assert!(text.contains("Kubernetes"));
        assert!(text.contains("Kafka"));
    }

    #[test]
    fn test_nested_table_cells_are_included() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested.docx");
        let inner = Table::new(vec![TableRow::new(vec![
            TableCell::new().add_paragraph(para("Terraform"))
        ])]);
        let outer = Table::new(vec![TableRow::new(vec![TableCell::new()
            .add_paragraph(para("Cloud"))
            .add_table(inner)])]);
        write_docx(&path, Docx::new().add_table(outer));

        let text = extract_docx(&path).unwrap();
        assert!(text.contains("Cloud"));
        assert!(text.contains("Terraform"));
    }

    #[test]
    fn test_header_and_footer_text_is_included() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("letterhead.docx");
        write_docx(
            &path,
            Docx::new()
                .header(Header::new().add_paragraph(para("Jane Doe Kubernetes")))
                .footer(Footer::new().add_paragraph(para("jane@example.com")))
                .add_paragraph(para("Body")),
        );

        let text = extract_docx(&path).unwrap();
        let header = text.find("Jane Doe Kubernetes").unwrap();
        let body = text.find("Body").unwrap();
        let footer = text.find("jane@example.com").unwrap();
        assert!(header < body && body < footer);
    }

    #[test]
    fn test_content_control_text_is_included() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.docx");
        write_docx(
            &path,
            Docx::new()
                .add_paragraph(para("Name"))
                .add_structured_data_tag(StructuredDataTag::new().add_paragraph(para("Site Reliability"))),
        );

        let text = extract_docx(&path).unwrap();
        assert!(text.contains("Name"));
        assert!(text.contains("Site Reliability"));
    }

    #[test]
    fn test_not_a_zip_is_docx_error() {
        let err = extract_docx_from_mem(b"plain text pretending to be docx").unwrap_err();
        assert!(matches!(err, ExtractError::Docx(_) | ExtractError::Panicked));
    }
}
