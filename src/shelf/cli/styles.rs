use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub static SHELF_THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        ("index", Style::new().yellow()),
        ("name", Style::new().bold()),
        ("brand", Style::new().cyan()),
        ("price", Style::new().green()),
        ("label", Style::new().color256(246).italic()),
        ("dim", Style::new().dim()),
        ("empty", Style::new().yellow().bold()),
        ("prompt", Style::new().magenta()),
    ])
});
