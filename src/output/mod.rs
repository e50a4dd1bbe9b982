// Output formatting — terminal report display.

pub mod terminal;
