// Output — terminal display and the saved feedback file.

pub mod report;
pub mod terminal;
