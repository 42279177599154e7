//! Fixed option lists for the brand and type selectors.
//!
//! These only populate choices. Selections are never validated against them.

use crate::filter::ALL_SENTINEL;

pub const BRANDS: &[&str] = &[
    "almay",
    "alva",
    "anna sui",
    "annabelle",
    "benefit",
    "boosh",
    "burt's bees",
    "butter london",
    "c'est moi",
    "cargo cosmetics",
    "china glaze",
    "clinique",
    "coastal classic creation",
    "colourpop",
    "covergirl",
    "dalish",
    "deciem",
    "dior",
    "dr. hauschka",
    "e.l.f.",
    "essie",
    "fenty",
    "glossier",
    "green people",
    "iman",
    "l'oreal",
    "lotus cosmetics usa",
    "maia's mineral galaxy",
    "marcelle",
    "marienatie",
    "maybelline",
    "milani",
    "mineral fusion",
    "misa",
    "mistura",
    "moov",
    "nudus",
    "nyx",
    "orly",
    "pacifica",
    "penny lane organics",
    "physicians formula",
    "piggy paint",
    "pure anada",
    "rejuva minerals",
    "revlon",
    "sally b's skin yummies",
    "salon perfect",
    "sante",
    "sinful colours",
    "smashbox",
    "stila",
    "suncoat",
    "w3llpeople",
    "wet n wild",
    "zorah",
    "zorah biocosmetiques",
];

pub const PRODUCT_TYPES: &[&str] = &[
    "blush",
    "bronzer",
    "eyebrow",
    "eyeliner",
    "eyeshadow",
    "foundation",
    "lip_liner",
    "lipstick",
    "mascara",
    "nail_polish",
];

/// Selector options: the "all" sentinel followed by `values`.
pub fn options(values: &[&str]) -> Vec<String> {
    std::iter::once(ALL_SENTINEL)
        .chain(values.iter().copied())
        .map(String::from)
        .collect()
}
