//! Render pass: turns view state into Markdown or JSON.

mod json;
mod markdown;

pub use self::json::*;
pub use markdown::*;
