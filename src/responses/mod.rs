pub mod errors;
pub mod html;

pub use errors::error_to_response;
pub use html::{css_response, html_response, no_content, see_other};
