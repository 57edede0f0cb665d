use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    PlainText,
    Pdf,
    Other(String),
    Unknown,
}

impl MediaType {
    /// Classifies a declared media type, ignoring parameters such as `charset`.
    pub fn classify(declared_type: Option<&str>) -> Self {
        let Some(declared) = declared_type else {
            return MediaType::Unknown;
        };
        let essence = declared
            .split(';')
            .next()
            .unwrap_or(declared)
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "" => MediaType::Unknown,
            "text/plain" => MediaType::PlainText,
            "application/pdf" => MediaType::Pdf,
            _ => MediaType::Other(essence),
        }
    }
}

/// Media type a browser would declare for a file, judged by its extension.
pub fn declared_type_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let declared = match ext.as_str() {
        "txt" | "text" | "log" => "text/plain",
        "pdf" => "application/pdf",
        "md" | "markdown" => "text/markdown",
        "csv" => "text/csv",
        "htm" | "html" => "text/html",
        "json" => "application/json",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => return None,
    };
    Some(declared)
}
