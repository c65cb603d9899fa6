//! Core types: catalog items, enrichment attributes and ranked results.

use serde::{Deserialize, Serialize};

/// A single artwork record from the catalog provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Stable external identifier (the provider's object number).
    pub id: String,
    /// All known titles, in provider order. May be empty.
    pub titles: Vec<String>,
    /// Creator name. May be empty.
    pub creator: String,
    /// URL of a thumbnail image, if the provider has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Free-text description, if the provider has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Supplementary attributes for one catalog item.
///
/// Every field is optional. A failed lookup is represented by
/// [`Enrichment::default()`], never by an absent value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enrichment {
    /// Artist name(s) in an alternate script.
    #[serde(
        rename = "கலை_navn",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub artist_names: Option<Vec<String>>,
    /// Alternate-language descriptions of the work.
    #[serde(rename = "აღწერა", default, skip_serializing_if = "Option::is_none")]
    pub descriptions: Option<Vec<String>>,
}

impl Enrichment {
    /// Returns `true` when no attribute carries any entry.
    pub fn is_empty(&self) -> bool {
        self.artist_names.as_ref().is_none_or(Vec::is_empty)
            && self.descriptions.as_ref().is_none_or(Vec::is_empty)
    }

    /// Entries of the description attribute, or an empty slice.
    pub fn description_entries(&self) -> &[String] {
        self.descriptions.as_deref().unwrap_or_default()
    }
}

/// A catalog item paired with its enrichment and a relevance in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub item: CatalogItem,
    pub enrichment: Enrichment,
    pub relevance: f64,
}

/// The ordered outcome of one search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<RankedResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_item() -> CatalogItem {
        CatalogItem {
            id: "KMS1".into(),
            titles: vec!["Red Rose".into()],
            creator: "Anon".into(),
            thumbnail_url: None,
            description: None,
        }
    }

    #[test]
    fn catalog_item_serializes_camel_case_and_skips_none() {
        let mut item = make_item();
        item.thumbnail_url = Some("https://iip.smk.dk/kms1.jpg".into());
        let value = serde_json::to_value(&item).expect("serialize");
        assert_eq!(
            value,
            json!({
                "id": "KMS1",
                "titles": ["Red Rose"],
                "creator": "Anon",
                "thumbnailUrl": "https://iip.smk.dk/kms1.jpg"
            })
        );
    }

    #[test]
    fn enrichment_uses_wire_attribute_names() {
        let enrichment = Enrichment {
            artist_names: Some(vec!["أنون".into()]),
            descriptions: Some(vec!["a rose".into()]),
        };
        let value = serde_json::to_value(&enrichment).expect("serialize");
        assert!(value.get("கலை_navn").is_some());
        assert_eq!(value["აღწერა"], json!(["a rose"]));
    }

    #[test]
    fn empty_enrichment_serializes_to_empty_object() {
        let value = serde_json::to_value(Enrichment::default()).expect("serialize");
        assert_eq!(value, json!({}));
    }

    #[test]
    fn enrichment_ignores_unknown_attributes() {
        let decoded: Enrichment = serde_json::from_value(json!({
            "აღწერა": ["landscape"],
            "colours": ["#ffffff"]
        }))
        .expect("deserialize");
        assert_eq!(decoded.description_entries(), ["landscape".to_string()]);
        assert!(decoded.artist_names.is_none());
    }

    #[test]
    fn enrichment_is_empty_treats_empty_lists_as_empty() {
        assert!(Enrichment::default().is_empty());
        let lists = Enrichment {
            artist_names: Some(vec![]),
            descriptions: Some(vec![]),
        };
        assert!(lists.is_empty());
        let filled = Enrichment {
            artist_names: None,
            descriptions: Some(vec!["x".into()]),
        };
        assert!(!filled.is_empty());
    }

    #[test]
    fn search_response_shape() {
        let response = SearchResponse {
            results: vec![RankedResult {
                item: make_item(),
                enrichment: Enrichment::default(),
                relevance: 0.5,
            }],
        };
        let value = serde_json::to_value(&response).expect("serialize");
        assert_eq!(value["results"][0]["relevance"], json!(0.5));
        assert_eq!(value["results"][0]["enrichment"], json!({}));
        assert_eq!(value["results"][0]["item"]["id"], json!("KMS1"));
    }
}
