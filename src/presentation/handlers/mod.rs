mod error_response;
mod health;
mod process_audio;
mod process_audio_url;

pub use error_response::{ApiError, ErrorResponse, status_for};
pub use health::{health_handler, root_handler};
pub use process_audio::process_audio_handler;
pub use process_audio_url::{UrlRequest, process_audio_url_handler};
