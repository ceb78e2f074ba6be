//! Header helpers for streamed file uploads.

use std::path::Path;

use mime::Mime;
use reqwest::header::HeaderValue;

use crate::Error;

/// Header carrying the percent-encoded original file name.
pub const FILE_NAME_HEADER: &str = "crowdin-api-filename";

/// Picks the `Content-Type` of an upload from its extension.
///
/// Text types carry `charset=utf-8`. Unknown extensions fall back to
/// `application/octet-stream`.
pub fn content_type_for(path: &Path) -> Mime {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "txt" => mime::TEXT_PLAIN_UTF_8,
        "csv" => mime::TEXT_CSV_UTF_8,
        "htm" | "html" => mime::TEXT_HTML_UTF_8,
        "css" => mime::TEXT_CSS_UTF_8,
        "js" | "mjs" => mime::TEXT_JAVASCRIPT,
        "xml" => mime::TEXT_XML,
        "json" => mime::APPLICATION_JSON,
        "pdf" => mime::APPLICATION_PDF,
        "png" => mime::IMAGE_PNG,
        "jpg" | "jpeg" => mime::IMAGE_JPEG,
        "gif" => mime::IMAGE_GIF,
        "svg" => mime::IMAGE_SVG,
        "bmp" => mime::IMAGE_BMP,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}

/// The bare file name of `path`, or an error if it has none.
pub fn file_name_of(path: &Path) -> Result<&str, Error> {
    path.file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            Error::InvalidRequest(format!("{} has no usable file name", path.display()))
        })
}

/// Value of [`FILE_NAME_HEADER`]: the file name, form-urlencoded.
pub fn file_name_header(file_name: &str) -> Result<HeaderValue, Error> {
    let encoded: String = url::form_urlencoded::byte_serialize(file_name.as_bytes()).collect();
    HeaderValue::from_str(&encoded)
        .map_err(|e| Error::InvalidRequest(format!("invalid file name header: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_files_get_utf8_plain_text() {
        assert_eq!(
            content_type_for(Path::new("upload.txt")).to_string(),
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        assert_eq!(
            content_type_for(Path::new("upload.xlif")),
            mime::APPLICATION_OCTET_STREAM
        );
        assert_eq!(
            content_type_for(Path::new("README")),
            mime::APPLICATION_OCTET_STREAM
        );
    }

    #[test]
    fn extension_match_ignores_case() {
        assert_eq!(content_type_for(Path::new("strings.JSON")), mime::APPLICATION_JSON);
    }

    #[test]
    fn file_name_header_is_percent_encoded() {
        assert_eq!(file_name_header("upload.txt").unwrap(), "upload.txt");
        assert_eq!(
            file_name_header("my file (1).txt").unwrap(),
            "my+file+%281%29.txt"
        );
    }

    #[test]
    fn file_name_of_takes_last_component() {
        assert_eq!(file_name_of(Path::new("/tmp/dir/upload.txt")).unwrap(), "upload.txt");
        assert!(file_name_of(Path::new("/")).is_err());
    }
}
