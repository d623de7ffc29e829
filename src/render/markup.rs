/// Classification used when a name has no extension.
pub const GENERIC_FILE_TYPE: &str = "generic";

/// Extension of `name` including its leading dot, or `""`.
///
/// Leading dots belong to the stem, so `.bashrc` has no extension, and only
/// the last suffix counts: `archive.tar.gz` gives `.gz`. Case is preserved.
pub fn split_extension(name: &str) -> &str {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(idx) => &name[stem_start + idx..],
        None => "",
    }
}

/// Classification attribute for an extension returned by [`split_extension`].
///
/// Names without an extension are [`GENERIC_FILE_TYPE`]; a lone trailing
/// dot classifies as the empty string.
pub fn file_type(extension: &str) -> &str {
    extension.strip_prefix('.').unwrap_or(GENERIC_FILE_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("script.py"), ".py");
        assert_eq!(split_extension("archive.tar.gz"), ".gz");
        assert_eq!(split_extension("README"), "");
        assert_eq!(split_extension(".bashrc"), "");
        assert_eq!(split_extension("..hidden.txt"), ".txt");
        assert_eq!(split_extension("Photo.JPG"), ".JPG");
        assert_eq!(split_extension("trailing."), ".");
    }

    #[test]
    fn test_file_type() {
        assert_eq!(file_type(".zzz"), "zzz");
        assert_eq!(file_type(".JPG"), "JPG");
        assert_eq!(file_type(""), "generic");
        assert_eq!(file_type("."), "");
    }
}
