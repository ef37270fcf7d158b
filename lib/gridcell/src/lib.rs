mod cell;
mod mapper;

pub use cell::{Cell, DIRECTIONS};
pub use mapper::{Convert, Mapper};
