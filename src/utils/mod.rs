pub mod address;
pub mod html;

pub use address::{reverse_address, select_address};
pub use html::escape_html;
