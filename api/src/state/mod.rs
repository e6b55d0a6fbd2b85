mod campaign;
mod list;

pub use campaign::*;
pub use list::*;
