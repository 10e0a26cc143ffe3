//! Artwork records and the raw API shapes they are normalized from.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub const PLACEHOLDER_TITLE: &str = "Untitled";
pub const PLACEHOLDER_ORIGIN: &str = "Unknown";
pub const PLACEHOLDER_ARTIST: &str = "Unknown Artist";
pub const PLACEHOLDER_INSCRIPTIONS: &str = "No Inscriptions";
pub const PLACEHOLDER_YEAR: &str = "N/A";

/// Stable identifier of an artwork, used as the selection key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(pub u64);

impl ArtworkId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A start or end year. The source omits some, and reports others as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Year {
    Known(i64),
    Unknown,
}

impl Year {
    pub fn from_source(value: Option<i64>) -> Self {
        match value {
            Some(year) if year != 0 => Year::Known(year),
            _ => Year::Unknown,
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Known(year) => write!(f, "{}", year),
            Year::Unknown => f.write_str(PLACEHOLDER_YEAR),
        }
    }
}

/// One normalized artwork row. Every field is populated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub place_of_origin: String,
    pub artist_display: String,
    pub inscriptions: String,
    pub date_start: Year,
    pub date_end: Year,
}

/// An artwork exactly as the API returns it. Unlisted fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawArtwork {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default, deserialize_with = "source_year")]
    pub date_start: Option<i64>,
    #[serde(default, deserialize_with = "source_year")]
    pub date_end: Option<i64>,
}

/// Years arrive as integers, but some records carry them as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum SourceYear {
    Number(i64),
    Text(String),
}

/// Unparseable text decodes as a missing year rather than failing the page.
fn source_year<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<SourceYear>::deserialize(deserializer)? {
        Some(SourceYear::Number(year)) => Some(year),
        Some(SourceYear::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

impl RawArtwork {
    pub fn normalize(self) -> Artwork {
        Artwork {
            id: ArtworkId(self.id),
            title: or_placeholder(self.title, PLACEHOLDER_TITLE),
            place_of_origin: or_placeholder(self.place_of_origin, PLACEHOLDER_ORIGIN),
            artist_display: or_placeholder(self.artist_display, PLACEHOLDER_ARTIST),
            inscriptions: or_placeholder(self.inscriptions, PLACEHOLDER_INSCRIPTIONS),
            date_start: Year::from_source(self.date_start),
            date_end: Year::from_source(self.date_end),
        }
    }
}

fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => placeholder.to_string(),
    }
}

/// Pagination block of an `/artworks` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub current_page: Option<u64>,
}

/// Body of `GET /artworks?page=&limit=`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtworksResponse {
    pub data: Vec<RawArtwork>,
    pub pagination: Pagination,
}

impl ArtworksResponse {
    pub fn into_page(self) -> ArtworkPage {
        ArtworkPage {
            records: self.data.into_iter().map(RawArtwork::normalize).collect(),
            total: self.pagination.total,
        }
    }
}

/// The normalized result of fetching one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtworkPage {
    pub records: Vec<Artwork>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_missing_fields_get_placeholders() {
        let artwork = RawArtwork {
            id: 7,
            ..RawArtwork::default()
        }
        .normalize();

        assert_eq!(artwork.id, ArtworkId(7));
        assert_eq!(artwork.title, PLACEHOLDER_TITLE);
        assert_eq!(artwork.place_of_origin, PLACEHOLDER_ORIGIN);
        assert_eq!(artwork.artist_display, PLACEHOLDER_ARTIST);
        assert_eq!(artwork.inscriptions, PLACEHOLDER_INSCRIPTIONS);
        assert_eq!(artwork.date_start, Year::Unknown);
        assert_eq!(artwork.date_end.to_string(), "N/A");
    }

    #[test]
    fn test_empty_string_and_zero_year_count_as_missing() {
        let artwork = RawArtwork {
            id: 1,
            title: Some(String::new()),
            date_start: Some(0),
            date_end: Some(1890),
            ..RawArtwork::default()
        }
        .normalize();

        assert_eq!(artwork.title, PLACEHOLDER_TITLE);
        assert_eq!(artwork.date_start, Year::Unknown);
        assert_eq!(artwork.date_end, Year::Known(1890));
    }

    #[test]
    fn test_response_decodes_from_api_json() {
        let body = r#"{
            "pagination": {"total": 100, "limit": 12, "offset": 0,
                           "total_pages": 9, "current_page": 1},
            "data": [
                {"id": 27992, "title": "A Sunday on La Grande Jatte", "place_of_origin": "France",
                 "artist_display": "Georges Seurat", "inscriptions": null,
                 "date_start": 1884, "date_end": 1886, "image_id": "abc"},
                {"id": 3, "title": null}
            ]
        }"#;

        let response: ArtworksResponse = serde_json::from_str(body).unwrap();
        let page = response.into_page();

        assert_eq!(page.total, 100);
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.records[0].artist_display, "Georges Seurat");
        assert_eq!(page.records[0].inscriptions, PLACEHOLDER_INSCRIPTIONS);
        assert_eq!(page.records[0].date_start, Year::Known(1884));
        assert_eq!(page.records[1].title, PLACEHOLDER_TITLE);
    }

    #[test]
    fn test_string_years_decode_into_year() {
        let body = r#"{
            "pagination": {"total": 3},
            "data": [
                {"id": 1, "date_start": "1884", "date_end": " 1886 "},
                {"id": 2, "date_start": "c. 1500", "date_end": null},
                {"id": 3, "date_start": "0", "date_end": 1910}
            ]
        }"#;

        let page = serde_json::from_str::<ArtworksResponse>(body)
            .unwrap()
            .into_page();

        assert_eq!(page.records.len(), 3);
        assert_eq!(page.records[0].date_start, Year::Known(1884));
        assert_eq!(page.records[0].date_end, Year::Known(1886));
        assert_eq!(page.records[1].date_start, Year::Unknown);
        assert_eq!(page.records[1].date_end, Year::Unknown);
        assert_eq!(page.records[2].date_start, Year::Unknown);
        assert_eq!(page.records[2].date_end, Year::Known(1910));
    }

    #[test]
    fn test_response_without_pagination_total_is_rejected() {
        let body = r#"{"data": [], "pagination": {}}"#;
        assert!(serde_json::from_str::<ArtworksResponse>(body).is_err());
    }

    proptest! {
        #[test]
        fn prop_normalized_fields_never_empty(
            title in proptest::option::of(".{0,12}"),
            origin in proptest::option::of(".{0,12}"),
            artist in proptest::option::of(".{0,12}"),
            inscriptions in proptest::option::of(".{0,12}"),
            start in proptest::option::of(-3000i64..2100),
        ) {
            let artwork = RawArtwork {
                id: 1,
                title,
                place_of_origin: origin,
                artist_display: artist,
                inscriptions,
                date_start: start,
                date_end: None,
            }
            .normalize();

            prop_assert!(!artwork.title.is_empty());
            prop_assert!(!artwork.place_of_origin.is_empty());
            prop_assert!(!artwork.artist_display.is_empty());
            prop_assert!(!artwork.inscriptions.is_empty());
            prop_assert!(!artwork.date_start.to_string().is_empty());
        }
    }
}
