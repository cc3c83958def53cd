pub mod category;
pub mod error;
pub mod row;
pub mod sheets;
pub mod slot;
pub mod text;

pub use category::*;
pub use error::*;
pub use row::*;
pub use sheets::*;
pub use slot::*;
pub use text::*;
