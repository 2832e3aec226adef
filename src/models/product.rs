//! Product (vertex) model.
//!
//! A product is one skincare item in the conflict graph. Its name is the
//! vertex identifier; the remaining attributes are informational metadata
//! consumed by presentation (tooltips, schedule annotations).
//!
//! Products are immutable once loaded — the graph never mutates vertices
//! after construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A skincare product (graph vertex).
///
/// The `name` field is the unique vertex identifier used by conflicts,
/// schedules, and color assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product name (vertex identifier).
    pub name: String,
    /// Active ingredient(s).
    pub ingredients: Vec<String>,
    /// What the product does (e.g., "Exfoliation", "UV protection").
    pub function: String,
    /// Recommended usage frequency (e.g., "2x daily", "1-2x weekly").
    pub frequency: String,
    /// Skin types this product is suitable for.
    pub skin_types: Vec<SkinType>,
}

impl Product {
    /// Creates a new product with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            function: String::new(),
            frequency: String::new(),
            skin_types: Vec::new(),
        }
    }

    /// Adds an active ingredient.
    pub fn with_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredients.push(ingredient.into());
        self
    }

    /// Sets the product function.
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = function.into();
        self
    }

    /// Sets the usage frequency.
    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = frequency.into();
        self
    }

    /// Marks the product as suitable for a skin type.
    pub fn with_skin_type(mut self, skin_type: SkinType) -> Self {
        self.skin_types.push(skin_type);
        self
    }

    /// Marks the product as suitable for every skin type.
    pub fn for_all_skin_types(mut self) -> Self {
        self.skin_types = SkinType::ALL.to_vec();
        self
    }

    /// Whether this product suits the given skin type.
    pub fn suits(&self, skin_type: SkinType) -> bool {
        self.skin_types.contains(&skin_type)
    }
}

/// Skin type classification.
///
/// Closed set; schedule tables are keyed by these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    /// Balanced skin.
    Normal,
    /// Excess sebum production.
    Oily,
    /// Lacking moisture or lipids.
    Dry,
    /// Easily irritated.
    Sensitive,
    /// Oily T-zone with dry areas.
    Combination,
}

impl SkinType {
    /// All skin types, in display order.
    pub const ALL: [SkinType; 5] = [
        SkinType::Normal,
        SkinType::Oily,
        SkinType::Dry,
        SkinType::Sensitive,
        SkinType::Combination,
    ];

    /// Lowercase key used by schedule tables and collaborators.
    pub fn key(&self) -> &'static str {
        match self {
            SkinType::Normal => "normal",
            SkinType::Oily => "oily",
            SkinType::Dry => "dry",
            SkinType::Sensitive => "sensitive",
            SkinType::Combination => "combination",
        }
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SkinType {
    type Err = UnknownSkinType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(SkinType::Normal),
            "oily" => Ok(SkinType::Oily),
            "dry" => Ok(SkinType::Dry),
            "sensitive" => Ok(SkinType::Sensitive),
            "combination" => Ok(SkinType::Combination),
            _ => Err(UnknownSkinType(s.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized skin-type key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown skin type: '{0}'")]
pub struct UnknownSkinType(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_builder() {
        let p = Product::new("Vitamin C")
            .with_ingredient("L-Ascorbic Acid")
            .with_function("Brightening, antioxidant")
            .with_frequency("1x daily (morning)")
            .with_skin_type(SkinType::Normal)
            .with_skin_type(SkinType::Dry);

        assert_eq!(p.name, "Vitamin C");
        assert_eq!(p.ingredients, vec!["L-Ascorbic Acid"]);
        assert_eq!(p.function, "Brightening, antioxidant");
        assert!(p.suits(SkinType::Normal));
        assert!(p.suits(SkinType::Dry));
        assert!(!p.suits(SkinType::Oily));
    }

    #[test]
    fn test_for_all_skin_types() {
        let p = Product::new("Cleanser").for_all_skin_types();
        for st in SkinType::ALL {
            assert!(p.suits(st));
        }
    }

    #[test]
    fn test_skin_type_roundtrip() {
        for st in SkinType::ALL {
            assert_eq!(st.key().parse::<SkinType>().unwrap(), st);
        }
        assert!("tzone".parse::<SkinType>().is_err());
    }

    #[test]
    fn test_skin_type_serde_lowercase() {
        let json = serde_json::to_string(&SkinType::Combination).unwrap();
        assert_eq!(json, "\"combination\"");
        let back: SkinType = serde_json::from_str("\"oily\"").unwrap();
        assert_eq!(back, SkinType::Oily);
    }
}
