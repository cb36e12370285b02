//! Built-in quote lists and accent palettes for the quote overlays.

use crate::foundation::core::Rgb8;

/// Quotes drawn by the centered overlay.
pub const CENTERED_QUOTES: [&str; 9] = [
    "Believe in yourself!",
    "Shine bright ✨",
    "Keep going 💪",
    "Dream big 💭",
    "Stay curious 🔍",
    "Create magic 🌟",
    "Make it happen!",
    "Never give up!",
    "Push your limits 🚀",
];

/// Quotes drawn by the positioned overlay. Plain text only.
pub const POSITIONED_QUOTES: [&str; 9] = [
    "Believe in yourself!",
    "Shine bright sparkle",
    "Keep going strong",
    "Dream big",
    "Stay curious",
    "Create magic",
    "Make it happen!",
    "Never give up!",
    "Push your limits",
];

/// Accent colors of the centered overlay.
pub const CENTERED_PALETTE: [Rgb8; 5] = [
    Rgb8([0xFF, 0x69, 0xB4]),
    Rgb8([0xFF, 0xD7, 0x00]),
    Rgb8([0xAD, 0xFF, 0x2F]),
    Rgb8([0x00, 0xFF, 0xFF]),
    Rgb8([0xFF, 0x45, 0x00]),
];

/// Accent colors of the positioned overlay.
pub const POSITIONED_PALETTE: [Rgb8; 5] = [
    Rgb8([0xFF, 0x69, 0xB4]),
    Rgb8([0xFF, 0xD7, 0x00]),
    Rgb8([0xAD, 0xFF, 0x2F]),
    Rgb8([0x00, 0xFF, 0xFF]),
    Rgb8([0x00, 0xFF, 0xB7]),
];
