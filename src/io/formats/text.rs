//! Pipe-delimited text format.
//!
//! One employee per line as `name|department|salary|email`. Blank lines and
//! lines starting with `#` are ignored. The file carries no ids or hire
//! dates, so every imported employee is a new hire.

use crate::io::traits::{ExportSink, ImportSource, LineError, SourceItem};
use crate::models::{Employee, IdAllocator};
use crate::{Error, Result};
use std::io::{BufRead, Write};

use super::lines::PhysicalLines;

/// Comment line written at the top of an export.
pub const HEADER_COMMENT: &str = "# name|department|salary|email";

/// Lines with fewer fields than this are skipped.
const FIELD_COUNT: usize = 4;

/// Pipe-text import source.
pub struct TextImportSource<R: BufRead> {
    lines: PhysicalLines<R>,
}

impl<R: BufRead> TextImportSource<R> {
    /// Creates a new text import source.
    pub const fn new(reader: R) -> Self {
        Self {
            lines: PhysicalLines::new(reader),
        }
    }
}

impl<R: BufRead> ImportSource for TextImportSource<R> {
    fn next(&mut self, ids: &IdAllocator) -> Result<Option<SourceItem>> {
        loop {
            let Some((line, text)) = self.lines.next_line("read_text")? else {
                return Ok(None);
            };
            let content = match text {
                Ok(content) => content,
                Err(error) => return Ok(Some(SourceItem::Invalid(error))),
            };

            if content.trim().is_empty() || content.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = content.split('|').map(str::trim).collect();
            if parts.len() < FIELD_COUNT {
                return Ok(Some(SourceItem::Skipped { line }));
            }

            let item = match parts[2].parse::<f64>() {
                Ok(salary) => {
                    SourceItem::Record(Employee::new(ids, parts[0], parts[1], salary, parts[3]))
                },
                Err(e) => SourceItem::Invalid(LineError {
                    line,
                    reason: format!("invalid salary '{}': {e}", parts[2]),
                    content,
                }),
            };
            return Ok(Some(item));
        }
    }
}

/// Pipe-text export sink.
///
/// Ids and hire dates are not part of this format and are dropped.
pub struct TextExportSink<W: Write> {
    writer: W,
}

impl<W: Write> TextExportSink<W> {
    /// Creates a new text export sink and writes the header comment.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be written.
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "{HEADER_COMMENT}").map_err(|e| Error::failed("write_text_header", e))?;
        Ok(Self { writer })
    }
}

impl<W: Write> ExportSink for TextExportSink<W> {
    fn write(&mut self, employee: &Employee) -> Result<()> {
        writeln!(
            self.writer,
            "{}|{}|{:.2}|{}",
            employee.name(),
            employee.department(),
            employee.salary(),
            employee.email()
        )
        .map_err(|e| Error::failed("write_text", e))
    }

    fn finalize(mut self: Box<Self>) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::failed("flush_text", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeId;
    use std::io::Cursor;

    fn read_all(input: &str, ids: &IdAllocator) -> Vec<SourceItem> {
        let mut source = TextImportSource::new(Cursor::new(input.to_string()));
        let mut items = Vec::new();
        while let Some(item) = source.next(ids).unwrap() {
            items.push(item);
        }
        items
    }

    #[test]
    fn test_import_assigns_fresh_ids() {
        let input = "# staff list
John Doe|Engineering|75000|john.doe@company.com

  Jane Smith | Marketing | 65000.50 | jane.smith@company.com
";
        let ids = IdAllocator::new();
        ids.observe(EmployeeId::new(41));
        let items = read_all(input, &ids);
        assert_eq!(items.len(), 2);

        let SourceItem::Record(jane) = &items[1] else {
            panic!("expected a record, got {:?}", items[1]);
        };
        assert_eq!(jane.id(), EmployeeId::new(43));
        assert_eq!(jane.name(), "Jane Smith");
        assert_eq!(jane.department(), "Marketing");
        assert!((jane.salary() - 65_000.5).abs() < f64::EPSILON);
        assert_eq!(jane.email(), "jane.smith@company.com");
    }

    #[test]
    fn test_short_and_bad_lines() {
        let input = "Only|Three|Fields
Bad|Eng|n/a|bad@x.com
Good|Eng|10|good@x.com
";
        let items = read_all(input, &IdAllocator::new());
        assert!(matches!(items[0], SourceItem::Skipped { line: 1 }));
        assert!(matches!(
            &items[1],
            SourceItem::Invalid(e) if e.line == 2 && e.content.starts_with("Bad|")
        ));
        assert!(matches!(&items[2], SourceItem::Record(e) if e.name() == "Good"));
    }

    #[test]
    fn test_invalid_utf8_line_does_not_abort() {
        let mut input = b"Good One|Eng|10|one@x.com\n".to_vec();
        input.extend_from_slice(b"Jos\xe9 Latin1|Eng|20|jose@x.com\n");
        input.extend_from_slice(b"Good Two|Eng|30|two@x.com\n");
        let mut source = TextImportSource::new(Cursor::new(input));
        let ids = IdAllocator::new();

        let mut items = Vec::new();
        while let Some(item) = source.next(&ids).unwrap() {
            items.push(item);
        }

        assert_eq!(items.len(), 3);
        assert!(matches!(&items[0], SourceItem::Record(e) if e.name() == "Good One"));
        assert!(matches!(
            &items[1],
            SourceItem::Invalid(e) if e.line == 2 && e.reason.contains("UTF-8")
        ));
        assert!(matches!(&items[2], SourceItem::Record(e) if e.name() == "Good Two"));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let items = read_all("A|B|1|a@x.com|extra\n", &IdAllocator::new());
        assert!(matches!(&items[0], SourceItem::Record(e) if e.email() == "a@x.com"));
    }

    #[test]
    fn test_export_text() {
        let ids = IdAllocator::new();
        let employee = Employee::new(
            &ids,
            "Sarah Wilson",
            "HR",
            60000.0,
            "sarah.wilson@company.com",
        );

        let mut output = Vec::new();
        {
            let mut sink = TextExportSink::new(&mut output).unwrap();
            sink.write(&employee).unwrap();
            Box::new(sink).finalize().unwrap();
        }

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "# name|department|salary|email\nSarah Wilson|HR|60000.00|sarah.wilson@company.com\n"
        );
    }
}
