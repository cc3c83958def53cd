//! Adapters flatten raw sheet rows into the shapes filters and collectibles
//! consume: rich text becomes plain text, sheet links become resolved
//! values, and absent links become zero.

mod chara_make;
mod item;
mod stain;

pub use chara_make::{CharaMakeCustomizeAdapter, menu_label};
pub use item::{ItemAdapter, adapt_items, equip_slot_of};
pub use stain::StainAdapter;
