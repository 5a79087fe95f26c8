use crate::types::{SunsetSpot, Terrain};

/// Reference viewpoints ranked by every search. Never mutated.
pub static SUNSET_SPOTS: &[SunsetSpot] = &[
    SunsetSpot {
        id: "twin-peaks",
        name: "Twin Peaks Summit",
        city: "San Francisco",
        state: "CA",
        latitude: 37.754407,
        longitude: -122.447684,
        rating: 4.8,
        elevation_meters: 281.0,
        ideal_azimuth: 285.0,
        terrain: Terrain::UrbanOverlook,
        description:
            "360° views across the Bay Area that show off the Golden Gate, Sutro Tower, and rolling coastal fog.",
        access: "Drive-up overlook with short paved paths and safety railings.",
        best_seasons: &["spring", "summer", "fall"],
        features: &["panoramic skyline", "ocean horizon", "city lights"],
        tips: &[
            "Arrive 30 minutes before sunset to secure a parking spot.",
            "Pack layers—the wind accelerates along the ridge.",
        ],
    },
    SunsetSpot {
        id: "griffith-observatory",
        name: "Griffith Observatory",
        city: "Los Angeles",
        state: "CA",
        latitude: 34.118434,
        longitude: -118.300393,
        rating: 4.9,
        elevation_meters: 346.0,
        ideal_azimuth: 280.0,
        terrain: Terrain::UrbanOverlook,
        description:
            "Iconic view of downtown LA framed by the Hollywood Hills with the Pacific glowing to the west.",
        access: "Paved trails and shuttle buses from the Greek Theatre parking lots.",
        best_seasons: &["winter", "spring", "summer"],
        features: &["city skyline", "pacific ocean", "observatory dome"],
        tips: &[
            "Weeknight visits are calmer—weekends fill quickly.",
            "Stay for twilight to watch city lights spark on.",
        ],
    },
    SunsetSpot {
        id: "haleakala-summit",
        name: "Haleakalā Summit",
        city: "Kula",
        state: "HI",
        latitude: 20.709722,
        longitude: -156.253333,
        rating: 4.9,
        elevation_meters: 3055.0,
        ideal_azimuth: 275.0,
        terrain: Terrain::MountainSummit,
        description:
            "Cloud inversions blanket the volcanic crater while the sun sinks into the Pacific.",
        access: "Reservation-required park road with final steep grades—dress for alpine cold.",
        best_seasons: &["year-round"],
        features: &["volcanic crater", "sea of clouds", "dark sky"],
        tips: &[
            "Reserve a sunset pass on Recreation.gov before driving up.",
            "Bring gloves and a windproof layer even in summer.",
        ],
    },
    SunsetSpot {
        id: "mount-bonnell",
        name: "Mount Bonnell",
        city: "Austin",
        state: "TX",
        latitude: 30.321634,
        longitude: -97.773487,
        rating: 4.7,
        elevation_meters: 236.0,
        ideal_azimuth: 282.0,
        terrain: Terrain::ParkHill,
        description:
            "Limestone cliffs overlook the Colorado River with Hill Country ridgelines silhouetted at dusk.",
        access: "100 stone steps lead to a pavilion and western-facing overlook.",
        best_seasons: &["spring", "fall"],
        features: &["river bend", "hill country horizon", "picnic tables"],
        tips: &[
            "Use rideshare on weekends—the parking lot is small.",
            "Bring a flashlight for the descent after dark.",
        ],
    },
    SunsetSpot {
        id: "mather-point",
        name: "Mather Point",
        city: "Grand Canyon Village",
        state: "AZ",
        latitude: 36.0594,
        longitude: -112.1093,
        rating: 4.8,
        elevation_meters: 2194.0,
        ideal_azimuth: 300.0,
        terrain: Terrain::CanyonRim,
        description:
            "Layered sandstone walls ignite with color as the sun sets behind the North Rim.",
        access: "Accessible walkway from the Grand Canyon Visitor Center.",
        best_seasons: &["spring", "fall"],
        features: &["canyon amphitheater", "layered cliffs", "rim trail access"],
        tips: &[
            "Arrive early to claim railing space for unobstructed photos.",
            "Watch the reflected glow inside the canyon 15 minutes after sunset.",
        ],
    },
    SunsetSpot {
        id: "gas-works-park",
        name: "Gas Works Park",
        city: "Seattle",
        state: "WA",
        latitude: 47.6456,
        longitude: -122.3344,
        rating: 4.6,
        elevation_meters: 29.0,
        ideal_azimuth: 295.0,
        terrain: Terrain::ParkHill,
        description:
            "Grassy mounds and industrial relics frame Lake Union with the Olympics in the distance.",
        access: "Paved paths and gentle hills suitable for all visitors.",
        best_seasons: &["summer", "fall"],
        features: &["lake reflections", "city skyline", "mountain backdrop"],
        tips: &[
            "Bring a blanket—the breeze across the lake cools quickly.",
            "Capture the skyline reflections just after sunset.",
        ],
    },
    SunsetSpot {
        id: "cadillac-mountain",
        name: "Cadillac Mountain",
        city: "Bar Harbor",
        state: "ME",
        latitude: 44.3516,
        longitude: -68.2217,
        rating: 4.9,
        elevation_meters: 466.0,
        ideal_azimuth: 300.0,
        terrain: Terrain::MountainSummit,
        description:
            "Granite domes and island-speckled Frenchman Bay light up as the sun dips behind Mount Desert Island.",
        access: "Summit road (reservation in season) and short accessible paths.",
        best_seasons: &["summer", "fall"],
        features: &["coastal islands", "granite ledges", "national park"],
        tips: &[
            "Secure a vehicle reservation during peak summer mornings and evenings.",
            "Stay for the afterglow to watch colors ripple across the bay.",
        ],
    },
    SunsetSpot {
        id: "sunset-cliffs",
        name: "Sunset Cliffs Natural Park",
        city: "San Diego",
        state: "CA",
        latitude: 32.7353,
        longitude: -117.2557,
        rating: 4.8,
        elevation_meters: 25.0,
        ideal_azimuth: 272.0,
        terrain: Terrain::CoastalBluff,
        description:
            "Golden sandstone cliffs drop into the Pacific with tide pools glowing at low tide.",
        access: "Street parking with dirt paths along the cliff edge—mind the drop-offs.",
        best_seasons: &["winter", "spring", "summer"],
        features: &["ocean vista", "tide pools", "wave drama"],
        tips: &[
            "Check the tide chart—low tide exposes extra foreground interest.",
            "Respect cliff edges; sandstone can crumble after rain.",
        ],
    },
    SunsetSpot {
        id: "crissy-field",
        name: "Crissy Field Dunes",
        city: "San Francisco",
        state: "CA",
        latitude: 37.8061,
        longitude: -122.4648,
        rating: 4.5,
        elevation_meters: 5.0,
        ideal_azimuth: 295.0,
        terrain: Terrain::CoastalBluff,
        description:
            "Beachfront views of the Golden Gate Bridge with pastel hues reflecting off the bay.",
        access: "Level promenade suitable for bikes and wheelchairs.",
        best_seasons: &["fall", "winter"],
        features: &["bridge views", "wildlife", "picnic areas"],
        tips: &[
            "Carry a light jacket—the marine layer often rolls in at dusk.",
            "Walk east along the beach to frame the bridge and skyline together.",
        ],
    },
    SunsetSpot {
        id: "morro-rock",
        name: "Morro Rock Lookout",
        city: "Morro Bay",
        state: "CA",
        latitude: 35.3725,
        longitude: -120.8594,
        rating: 4.7,
        elevation_meters: 45.0,
        ideal_azimuth: 270.0,
        terrain: Terrain::CoastalBluff,
        description:
            "Iconic volcanic plug anchors the harbor as the sun fades into the Pacific swells.",
        access: "Paved paths from the parking area; beach access nearby.",
        best_seasons: &["spring", "fall"],
        features: &["volcanic monolith", "harbor", "wildlife"],
        tips: &[
            "Scan for sea otters in the kelp beds just offshore.",
            "Arrive early on foggy days for the best chance of a clear view.",
        ],
    },
];
