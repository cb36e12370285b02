/// Input directory listing.
pub mod collect;
/// Image decoding and resizing.
pub mod decode;
/// Font resolution with fallback.
pub mod font;
