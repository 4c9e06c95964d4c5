pub mod app;
pub mod custom_cursor;
pub mod host_page;

pub use app::App;
pub use custom_cursor::CustomCursor;
