pub use self::{tip_state::*, ui_state::*};

mod tip_state;
mod ui_state;
