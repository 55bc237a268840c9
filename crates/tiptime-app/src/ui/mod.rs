pub mod icon;
pub mod number_field;
pub mod round_up;
pub mod tip_screen;
pub mod toggle;
