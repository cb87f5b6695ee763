use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

fn render_html(source: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let mut out = String::new();
    html::push_html(&mut out, Parser::new_ext(source, opts));
    out
}

/// Render an embedded markdown document as a prose block.
#[component]
pub fn Markdown(source: &'static str, class: &'static str) -> Element {
    let body_html = use_hook(|| render_html(source));

    rsx! {
        div {
            class: "{class}",
            dangerous_inner_html: "{body_html}"
        }
    }
}
