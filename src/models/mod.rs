pub mod site;
pub mod summary;
pub mod budget;

pub use site::*;
pub use summary::*;
pub use budget::*;
