use serde::{Deserialize, Serialize};

/// Body accepted by `/generate-suggestions`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SuggestionsRequest {
    pub description: String,
}

/// Craft-origin metadata attached to a generated product description.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Provenance {
    pub craft_type: String,
    pub materials: String,
    pub region: String,
}

/// Listing copy generated from a product photo.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProductContent {
    pub product_title: String,
    pub description: String,
    pub provenance: Provenance,
    pub artisans_note: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MarketingSuggestion {
    pub title: String,
    pub idea: String,
}

/// The suggestions prompt asks for exactly three ideas.
pub type MarketingSuggestions = [MarketingSuggestion; 3];
