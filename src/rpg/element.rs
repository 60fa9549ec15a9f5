//! The four-element advantage cycle.
//!
//! Solar beats Halilintar, Halilintar beats Gempa, Gempa beats Taufan and
//! Taufan beats Solar. Every element has exactly one strength and one
//! weakness, so no pair is ever mutually strong.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    Solar,
    Taufan,
    Gempa,
    Halilintar,
}

impl Element {
    pub const ALL: [Element; 4] = [
        Element::Solar,
        Element::Taufan,
        Element::Gempa,
        Element::Halilintar,
    ];

    /// The element this one deals bonus damage to.
    pub fn strength(self) -> Element {
        match self {
            Element::Solar => Element::Halilintar,
            Element::Taufan => Element::Solar,
            Element::Gempa => Element::Taufan,
            Element::Halilintar => Element::Gempa,
        }
    }

    /// The element this one deals reduced damage to.
    pub fn weakness(self) -> Element {
        match self {
            Element::Solar => Element::Taufan,
            Element::Taufan => Element::Gempa,
            Element::Gempa => Element::Halilintar,
            Element::Halilintar => Element::Solar,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::Solar => "Solar",
            Element::Taufan => "Taufan",
            Element::Gempa => "Gempa",
            Element::Halilintar => "Halilintar",
        }
    }

    /// Flavour line announced by a world event of this element.
    pub fn event_message(self) -> &'static str {
        match self {
            Element::Solar => "A solar eclipse empowers Solar element!",
            Element::Taufan => "A great storm enhances Taufan element!",
            Element::Gempa => "Earth tremors boost Gempa element!",
            Element::Halilintar => "Lightning storm strengthens Halilintar element!",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub const STRONG: f64 = 1.5;
pub const NEUTRAL: f64 = 1.0;
pub const WEAK: f64 = 0.5;

/// Damage multiplier for `attacker` hitting `defender`.
///
/// Either side lacking an element is neutral.
pub fn advantage(attacker: Option<Element>, defender: Option<Element>) -> f64 {
    match (attacker, defender) {
        (Some(a), Some(d)) if a.strength() == d => STRONG,
        (Some(a), Some(d)) if a.weakness() == d => WEAK,
        _ => NEUTRAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weakness_is_inverse_of_strength() {
        for e in Element::ALL {
            assert_eq!(e.weakness().strength(), e);
        }
    }

    #[test]
    fn strength_cycle_visits_every_element() {
        let mut e = Element::Solar;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(e);
            e = e.strength();
        }
        assert_eq!(e, Element::Solar);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 4);
    }
}
