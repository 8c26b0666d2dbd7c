mod load;

pub use load::load;
