mod state;
mod view;
mod widget;

pub use state::CounterState;
pub use view::View;
pub use widget::CounterWidget;
