pub mod classify;
pub mod palette;
pub mod render;

pub use classify::{summarize, TrendSummary};
pub use palette::Palette;
pub use render::{render_with_palette, RenderPlan};
