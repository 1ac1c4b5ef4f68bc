//! Fixed display palette for course coloring
//!
//! Ten visually distinct hue families. Each distinct course admitted in a
//! session draws the next palette slot; the index wraps modulo the palette
//! length, so hues cycle deterministically and clearing the routine
//! reproduces the same sequence from the top.

use crate::core::types::PaletteColor;

/// Palette of distinct colors for course blocks
pub const PALETTE: [PaletteColor; 10] = [
    PaletteColor {
        name: "indigo",
        bg: "rgba(99,102,241,0.85)",
        border: "rgba(99,102,241,1)",
        text: "#fff",
    },
    PaletteColor {
        name: "purple",
        bg: "rgba(168,85,247,0.85)",
        border: "rgba(168,85,247,1)",
        text: "#fff",
    },
    PaletteColor {
        name: "pink",
        bg: "rgba(236,72,153,0.85)",
        border: "rgba(236,72,153,1)",
        text: "#fff",
    },
    PaletteColor {
        name: "teal",
        bg: "rgba(20,184,166,0.85)",
        border: "rgba(20,184,166,1)",
        text: "#fff",
    },
    PaletteColor {
        name: "amber",
        bg: "rgba(245,158,11,0.85)",
        border: "rgba(245,158,11,1)",
        text: "#fff",
    },
    PaletteColor {
        name: "green",
        bg: "rgba(34,197,94,0.85)",
        border: "rgba(34,197,94,1)",
        text: "#fff",
    },
    PaletteColor {
        name: "red",
        bg: "rgba(239,68,68,0.85)",
        border: "rgba(239,68,68,1)",
        text: "#fff",
    },
    PaletteColor {
        name: "sky",
        bg: "rgba(14,165,233,0.85)",
        border: "rgba(14,165,233,1)",
        text: "#fff",
    },
    PaletteColor {
        name: "orange",
        bg: "rgba(249,115,22,0.85)",
        border: "rgba(249,115,22,1)",
        text: "#fff",
    },
    PaletteColor {
        name: "emerald",
        bg: "rgba(16,185,129,0.85)",
        border: "rgba(16,185,129,1)",
        text: "#fff",
    },
];

/// Color for the n-th distinct course of the session
pub fn color_at(index: usize) -> PaletteColor {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_distinct_hues() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in PALETTE.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
                assert_ne!(a.bg, b.bg);
            }
        }
    }

    #[test]
    fn test_color_at_wraps() {
        assert_eq!(color_at(0), PALETTE[0]);
        assert_eq!(color_at(9), PALETTE[9]);
        assert_eq!(color_at(10), PALETTE[0]);
        assert_eq!(color_at(23), PALETTE[3]);
    }
}
