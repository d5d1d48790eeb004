mod solid;

pub use solid::*;
