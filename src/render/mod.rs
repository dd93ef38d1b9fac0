mod highlight;
mod markdown;
mod transcript;

pub use highlight::highlight_html;
pub use markdown::render_markdown;
pub use transcript::{RenderedMessage, TranscriptRenderer};
