mod display;
mod selection;
mod view;

pub use display::DisplayModel;
pub use selection::FilterSelection;
pub use view::FilteredView;
