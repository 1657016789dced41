//! Color palette selection by skin tone and undertone.
//!
//! A pure lookup: every (tone, undertone) pair maps to five ordered named
//! colors. Order is significant; earlier entries are stronger matches.

use serde::{Deserialize, Serialize};

use crate::skin_tone::{SkinTone, Undertone};

/// An ordered five-color palette.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorPalette(Vec<String>);

impl ColorPalette {
    fn from_names(names: [&str; 5]) -> Self {
        Self(names.iter().map(|name| (*name).to_string()).collect())
    }

    pub fn colors(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

/// Look up the palette for a tone/undertone pair.
///
/// The match is exhaustive over the closed enums, so the Medium-tone
/// fallback of the original table is now unrepresentable rather than a
/// runtime branch.
pub fn palette_for(tone: SkinTone, undertone: Undertone) -> ColorPalette {
    use SkinTone::*;
    use Undertone::*;

    let names = match (tone, undertone) {
        (Fair, Warm) => ["Peach", "Coral", "Ivory", "Buttercream", "Apricot"],
        (Fair, Cool) => ["Powder Blue", "Soft Lavender", "Blush", "Silver", "Mint"],
        (Fair, Neutral) => ["Dusty Rose", "Sage", "Ivory", "Taupe", "Soft White"],
        (Light, Warm) => ["Warm Beige", "Salmon", "Honey", "Cream", "Terracotta"],
        (Light, Cool) => ["Powder Blue", "Soft Lavender", "Blush", "Ivory", "Mint"],
        (Light, Neutral) => ["Blush", "Mint", "Stone", "Ivory", "Rose Gold"],
        (Medium, Warm) => ["Mustard", "Rust", "Olive Green", "Amber", "Bronze"],
        (Medium, Cool) => ["Emerald Green", "Navy Blue", "Burgundy", "Teal", "Cream"],
        (Medium, Neutral) => ["Teal", "Burgundy", "Forest Green", "Charcoal", "Cream"],
        (Deep, Warm) => ["Gold", "Cobalt Blue", "Crimson", "Olive", "White"],
        (Deep, Cool) => ["Royal Blue", "Magenta", "Emerald", "Ice Grey", "Pure White"],
        (Deep, Neutral) => ["Crimson", "Cobalt Blue", "Emerald Green", "Espresso", "Ivory"],
    };
    ColorPalette::from_names(names)
}
