//! Print/export of the rendered form as a standalone HTML document

use crate::catalog::FormType;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// File name for an export taken at `now`
pub fn export_file_name(form_type: FormType, now: DateTime<Local>) -> String {
    format!(
        "smartdoc-{}-{}.html",
        form_type.id(),
        now.format("%Y%m%d-%H%M%S")
    )
}

/// Wrap form HTML in a printable page. The body is inserted verbatim.
pub fn printable_document(form_type: FormType, body_html: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>body {{ font-family: sans-serif; max-width: 50em; margin: 2em auto; }} @media print {{ body {{ margin: 0; }} }}</style>\n\
         </head>\n\
         <body>\n\
         {body_html}\n\
         </body>\n\
         </html>\n",
        title = form_type.label(),
    )
}

/// Write the printable document into `dir`, creating it if needed
pub fn export_html(
    dir: &Path,
    form_type: FormType,
    body_html: &str,
    now: DateTime<Local>,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let path = dir.join(export_file_name(form_type, now));
    fs::write(&path, printable_document(form_type, body_html))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Exported {} to {}", form_type, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn test_file_name_uses_form_id_and_timestamp() {
        assert_eq!(
            export_file_name(FormType::NuclearTestConsent, fixed_time()),
            "smartdoc-nuclear-test-consent-20260309-140507.html"
        );
    }

    #[test]
    fn test_document_embeds_body_unescaped() {
        let doc = printable_document(FormType::Custom, "<h2>OK</h2><p>a & b</p>");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Custom</title>"));
        assert!(doc.contains("<body>\n<h2>OK</h2><p>a & b</p>\n</body>"));
    }

    #[test]
    fn test_export_writes_into_new_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("exports");

        let path = export_html(
            &dir,
            FormType::CardiologyIntake,
            "<h2>Cardiology</h2>",
            fixed_time(),
        )
        .unwrap();

        assert_eq!(path.parent(), Some(dir.as_path()));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("<h2>Cardiology</h2>"));
        assert!(written.contains("<title>Cardiology Intake Form</title>"));
    }

    #[test]
    fn test_export_into_file_path_fails() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let result = export_html(tmp.path(), FormType::Custom, "<p/>", fixed_time());
        assert!(result.is_err());
    }
}
