use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Terrain {
    #[serde(rename = "urban overlook")]
    UrbanOverlook,
    #[serde(rename = "coastal bluff")]
    CoastalBluff,
    #[serde(rename = "mountain summit")]
    MountainSummit,
    #[serde(rename = "desert ridge")]
    DesertRidge,
    #[serde(rename = "lakefront")]
    Lakefront,
    #[serde(rename = "park hill")]
    ParkHill,
    #[serde(rename = "canyon rim")]
    CanyonRim,
}

impl Terrain {
    pub fn label(self) -> &'static str {
        match self {
            Terrain::UrbanOverlook => "urban overlook",
            Terrain::CoastalBluff => "coastal bluff",
            Terrain::MountainSummit => "mountain summit",
            Terrain::DesertRidge => "desert ridge",
            Terrain::Lakefront => "lakefront",
            Terrain::ParkHill => "park hill",
            Terrain::CanyonRim => "canyon rim",
        }
    }
}

/// A curated viewpoint. Records live in a process-wide constant table and are
/// only ever borrowed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SunsetSpot {
    pub id: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: f64,
    pub elevation_meters: f64,
    pub ideal_azimuth: f64,
    pub terrain: Terrain,
    pub description: &'static str,
    pub access: &'static str,
    pub best_seasons: &'static [&'static str],
    pub features: &'static [&'static str],
    pub tips: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SunsetDetails {
    pub sunset_iso: String,
    pub golden_hour_start_iso: String,
    pub azimuth_degrees: f64,
    pub day_length_minutes: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpotScores {
    pub rating: f64,
    pub distance: f64,
    pub elevation: f64,
    pub orientation: f64,
    pub features: f64,
}

/// Per-query view of a spot: the borrowed record plus everything derived
/// from the user's position and tonight's sunset.
#[derive(Debug, Clone, PartialEq)]
pub struct SunsetSpotMatch<'a> {
    pub spot: &'a SunsetSpot,
    pub distance_km: f64,
    pub alignment_delta: f64,
    pub scores: SpotScores,
    pub match_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    pub radius_km: f64,
    pub limit: usize,
    pub date: Option<chrono::NaiveDate>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            radius_km: 50.0,
            limit: 5,
            date: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SunsetSearchResult<'a> {
    pub sunset: SunsetDetails,
    pub matches: Vec<SunsetSpotMatch<'a>>,
    pub considered: Vec<SunsetSpotMatch<'a>>,
}
