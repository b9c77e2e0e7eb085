pub mod presence;
pub mod time;
pub mod weekday;

pub use presence::*;
pub use time::*;
pub use weekday::*;
