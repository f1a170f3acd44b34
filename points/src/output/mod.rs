pub mod history;
pub mod results;
