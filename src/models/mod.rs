pub mod city;
pub mod dataset;

pub use city::*;
pub use dataset::*;
