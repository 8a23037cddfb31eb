pub mod markdown;

pub use markdown::{render_markdown, render_markdown_cached, MarkdownCache};
