pub mod constants;
pub mod interaction;
pub mod layout;
pub mod projection;
pub mod scene;
pub mod selection;
pub mod skills;

pub use constants::*;
pub use interaction::*;
pub use layout::*;
pub use projection::*;
pub use scene::*;
pub use selection::*;
pub use skills::*;
