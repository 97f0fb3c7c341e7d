mod array;
mod map;
mod set;

pub use self::{array::*, map::*, set::*};
