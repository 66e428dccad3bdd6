//! The smallest enclosing ball of a point set in arbitrary dimension.

pub use self::miniball::Miniball;
pub use self::quality::Quality;

mod miniball;
mod quality;
mod subspan;
