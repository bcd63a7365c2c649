//! Bundled catalog data and tab glyphs for the well-known categories.

pub(super) const EMOJI_DATA: &str = include_str!("../../data/emoji-data.json");

/// Tab glyph for a well-known category id.
pub(super) fn icon_for(id: &str) -> Option<&'static str> {
    match id {
        "people" => Some("☺"),
        "nature" => Some("🐾"),
        "foods" => Some("🍴"),
        "activity" => Some("⚽"),
        "places" => Some("🚗"),
        "objects" => Some("💡"),
        "symbols" => Some("♫"),
        "flags" => Some("⚑"),
        _ => None,
    }
}
