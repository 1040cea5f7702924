//! Card builders, one per content block kind.
//!
//! Each turns a record list into uniform `CardView`s; an empty list yields no cards.

pub mod figures;
pub mod practices;
pub mod resources;
pub mod topics;

use crate::content::types::Block;
use crate::pages::view_models::CardView;

pub fn cards(block: &Block, locale: &str) -> Vec<CardView> {
    match block {
        Block::Topics(items) => topics::cards(items, locale),
        Block::Figures(items) => figures::cards(items),
        Block::Resources(items) => resources::cards(items),
        Block::Practices(items) => practices::cards(items),
    }
}
