use chrono::TimeZone;
use chrono_tz::America::Los_Angeles;

use sunset_spots::angles::sunset_details_at;
use sunset_spots::search::find_top_sunset_spots;
use sunset_spots::types::SearchOptions;

fn main() {
    let latitude = 37.7749;
    let longitude = -122.4194;

    let Some(dt) = Los_Angeles.with_ymd_and_hms(2026, 6, 21, 12, 0, 0).single() else {
        eprintln!("ambiguous local time");
        return;
    };

    let sunset = sunset_details_at(latitude, longitude, &dt);

    println!("=== Sunset Calculation Example ===");
    println!(
        "Location: San Francisco, CA ({:.4}°N, {:.4}°W)",
        latitude, -longitude
    );
    println!("Date/Time: {}", dt);
    println!();
    println!("--- Sunset ---");
    println!("Sunset (UTC): {}", sunset.sunset_iso);
    println!("Golden hour starts (UTC): {}", sunset.golden_hour_start_iso);
    println!("Azimuth: {:.1}°", sunset.azimuth_degrees);
    println!("Day length: {:.0} minutes", sunset.day_length_minutes);
    println!();

    let options = SearchOptions {
        date: Some(dt.date_naive()),
        ..SearchOptions::default()
    };
    let result = find_top_sunset_spots(latitude, longitude, &options);

    println!("--- Top spots within {:.0} km ---", options.radius_km);
    for (rank, m) in result.matches.iter().enumerate() {
        println!(
            "{}. {} ({}, {}) - {:.2} km, score {:.3}, {}",
            rank + 1,
            m.spot.name,
            m.spot.city,
            m.spot.state,
            m.distance_km,
            m.match_score,
            m.spot.terrain.label()
        );
    }
    println!("Considered {} candidates", result.considered.len());
}
