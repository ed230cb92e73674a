/// Extension used when the uploaded file name does not provide a usable one.
pub const DEFAULT_AVATAR_EXTENSION: &str = ".jpg";

const MAX_EXTENSION_LEN: usize = 10;

/// Derive the on-disk extension (with leading dot) for an uploaded avatar.
///
/// Takes everything after the last `.` of the original name, lower-cased. Falls
/// back to [`DEFAULT_AVATAR_EXTENSION`] when there is no name, no dot, or the
/// suffix is not 1-10 ASCII alphanumerics. The last rule also keeps path
/// separators out of the stored file name.
pub fn avatar_extension(original_filename: Option<&str>) -> String {
    let Some(name) = original_filename.map(str::trim) else {
        return DEFAULT_AVATAR_EXTENSION.to_string();
    };
    let Some((_, suffix)) = name.rsplit_once('.') else {
        return DEFAULT_AVATAR_EXTENSION.to_string();
    };

    let valid = !suffix.is_empty()
        && suffix.len() <= MAX_EXTENSION_LEN
        && suffix.chars().all(|c| c.is_ascii_alphanumeric());
    if !valid {
        return DEFAULT_AVATAR_EXTENSION.to_string();
    }

    format!(".{}", suffix.to_ascii_lowercase())
}

/// Content type served for a stored avatar file.
///
/// PNG, GIF and WebP are reported as such; everything else is served as JPEG.
pub fn avatar_content_type(file_name: &str) -> &'static str {
    match mime_guess::from_path(file_name).first_raw() {
        Some(mime @ ("image/png" | "image/gif" | "image/webp")) => mime,
        _ => "image/jpeg",
    }
}
