//! Built-in SVG icons.

/// Outline used for files whose extension has no icon - neutral grey.
pub const GENERIC_FILE_ICON: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32">"#,
    r##"<path fill="#c5c5c5" d="M20.414 2H5v28h22V8.586ZM7 28V4h12v6h6v18Z"/>"##,
    "</svg>"
);

pub const FOLDER_ICON: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32">"#,
    r##"<path fill="#dcb67a" d="M27.5 5.5h-9.1l-2.1 4.2H4.3v16.8h23.2Zm-2 4.2h-8.1l1.1-2.2h7Z"/>"##,
    "</svg>"
);

// Page outline filled with a per-type tint.
const TINTED_PAGE_PATH: &str = "M20.414 2H5v28h22V8.586ZM7 28V4h12v6h6v18Z";

/// Extension (with leading dot) to tint of the page outline.
const TINTS: &[(&str, &str)] = &[
    (".py", "#3572a5"),
    (".rs", "#dea584"),
    (".js", "#f1e05a"),
    (".ts", "#3178c6"),
    (".json", "#cbcb41"),
    (".html", "#e34c26"),
    (".css", "#563d7c"),
    (".md", "#519aba"),
    (".txt", "#89e051"),
    (".ini", "#6d8086"),
    (".conf", "#6d8086"),
    (".toml", "#9c4221"),
    (".yaml", "#cb171e"),
    (".yml", "#cb171e"),
    (".sh", "#4d5a5e"),
    (".c", "#555555"),
    (".h", "#555555"),
    (".cpp", "#f34b7d"),
    (".java", "#b07219"),
    (".go", "#00add8"),
    (".jpg", "#a074c4"),
    (".jpeg", "#a074c4"),
    (".png", "#a074c4"),
    (".gif", "#a074c4"),
    (".svg", "#ffb13b"),
    (".pdf", "#d0021b"),
    (".doc", "#2b579a"),
    (".docx", "#2b579a"),
    (".xls", "#217346"),
    (".xlsx", "#217346"),
    (".zip", "#afb42b"),
    (".gz", "#afb42b"),
    (".tar", "#afb42b"),
    (".log", "#9e9e9e"),
];

/// Icons shipped with the crate, keyed by extension with its leading dot.
pub fn builtin_file_icons() -> impl Iterator<Item = (&'static str, String)> {
    TINTS
        .iter()
        .map(|(ext, tint)| (*ext, tinted_page(tint)))
}

fn tinted_page(tint: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32"><path fill="{tint}" d="{TINTED_PAGE_PATH}"/></svg>"#
    )
}
