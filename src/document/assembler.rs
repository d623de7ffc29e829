use maud::{html, DOCTYPE};

use crate::config::DocumentConfig;

/// Wrap rendered body fragments in the full page.
///
/// The first container holds the heading and the tree; the second holds
/// the colour toggle and the font selector driven by the page scripts.
pub fn assemble(body: Vec<String>, config: &DocumentConfig) -> Vec<String> {
    let head = html! {
        head {
            @if !config.font_stylesheets.is_empty() {
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
            }
            @for href in &config.font_stylesheets {
                link rel="stylesheet" href=(href);
            }
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" href=(config.stylesheet);
            @for src in &config.scripts {
                script src=(src) defer {}
            }
            title { (config.title) }
        }
    };

    let controls = html! {
        div id="main-cont-1" {
            div class="color-toggle-container" {
                input type="checkbox" id="dark-mode-toggle";
                label for="dark-mode-toggle" { "Invert Color" }
            }
            @if !config.fonts.is_empty() {
                div class="select" {
                    select id="select-font" {
                        @for font in &config.fonts {
                            option value=(font) { (font) }
                        }
                    }
                }
            }
        }
    };

    let mut lines = vec![
        html! { (DOCTYPE) }.into_string(),
        "<html>".to_string(),
        head.into_string(),
        "<body>".to_string(),
        r#"<div id="main-cont-0">"#.to_string(),
        html! { h1 { (config.title) } }.into_string(),
    ];
    lines.extend(body);
    lines.push("</div>".to_string());
    lines.push(controls.into_string());
    lines.push("</body>".to_string());
    lines.push("</html>".to_string());

    lines
}
