use docx_dump::{DumpError, document::load_document};
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;

fn write_zip(path: &Path, entries: &[(&str, &str)]) {
    let file = std::fs::File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    for (name, content) in entries {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}

#[cfg(test)]
mod load_error_tests {
    use super::*;

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.docx");

        let err = load_document(&path).unwrap_err();
        assert!(err.to_string().contains("does-not-exist.docx"));
        assert!(err.root_cause().downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_plain_text_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.docx");
        std::fs::write(&path, "just some text").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(err.to_string().contains("not a ZIP archive"));
    }

    #[test]
    fn test_zip_without_document_part_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive.docx");
        write_zip(&path, &[("readme.txt", "hello")]);

        let err = load_document(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DumpError>(),
            Some(DumpError::NotWordDocument(_))
        ));
    }

    #[test]
    fn test_spreadsheet_fails_with_hint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.docx");
        write_zip(&path, &[("xl/workbook.xml", "<workbook/>")]);

        let err = load_document(&path).unwrap_err();
        assert!(err.to_string().contains("Excel"));
    }

    #[test]
    fn test_corrupt_document_xml_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.docx");
        write_zip(
            &path,
            &[
                ("[Content_Types].xml", "<Types"),
                ("word/document.xml", "<w:document><w:body><w:p>"),
            ],
        );

        assert!(load_document(&path).is_err());
    }
}
