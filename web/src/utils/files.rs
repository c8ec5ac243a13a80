use shared_types::ReferenceImage;
use web_sys::HtmlInputElement;

/// Metadata for the files currently picked in a file input.
pub fn selected_images(input: &HtmlInputElement) -> Vec<ReferenceImage> {
    let Some(files) = input.files() else {
        return Vec::new();
    };

    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| ReferenceImage {
            file_name: file.name(),
            content_type: file.type_(),
            size_bytes: file.size() as u64,
        })
        .collect()
}

/// Human readable file size for the attachment list.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{} KB", bytes / KB)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::format_size;

    #[test]
    fn sizes() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(52_000), "50 KB");
        assert_eq!(format_size(3 * 1024 * 1024 + 512 * 1024), "3.5 MB");
    }
}
