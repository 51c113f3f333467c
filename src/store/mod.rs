/// Property values, the fact store and fact drawing.
pub mod property;
