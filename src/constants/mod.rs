pub mod columns;
pub mod defaults;
pub mod envvars;
pub mod fields;
