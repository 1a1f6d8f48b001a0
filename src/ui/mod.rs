mod app;
mod display;

pub use app::App;
pub use display::draw;
