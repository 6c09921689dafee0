pub mod analithics;
pub mod catalog;
pub mod courses;
pub mod docs;
pub mod schedules;

pub use analithics::*;
pub use catalog::*;
pub use courses::*;
pub use docs::*;
pub use schedules::*;
