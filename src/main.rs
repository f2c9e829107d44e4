use coordkit::{
    dms, geo_to_tm3, geo_to_utm, parse, Axis, GeoPoint, ParsedInput, Result,
};

fn main() -> Result<()> {
    println!("coordkit - Coordinate Conversion Demo\n");

    let test_points = vec![
        ("Bandung", -6.9, 107.6),
        ("Jakarta", -6.2088, 106.8456),
        ("Medan", 3.5952, 98.6722),
        ("Denpasar", -8.6500, 115.2167),
        ("Jayapura", -2.5337, 140.7181),
        ("Makassar", -5.1477, 119.4327),
        ("Singapore", 1.3521, 103.8198),
        ("Sydney", -33.8688, 151.2093),
    ];

    for (name, lat, lng) in test_points {
        let point = GeoPoint::new(lat, lng);
        println!("{} ({}, {})", name, lat, lng);
        println!(
            "  DMS: {} / {}",
            dms(point.latitude, Axis::Latitude),
            dms(point.longitude, Axis::Longitude)
        );

        match geo_to_utm(point) {
            Ok(utm) => println!(
                "  UTM {}: {:.5} E, {:.5} N",
                utm.zone, utm.easting, utm.northing
            ),
            Err(e) => println!("  UTM: {}", e),
        }

        match geo_to_tm3(point)? {
            Some(tm3) => println!(
                "  TM3 {} (EPSG:{}): {:.5} E, {:.5} N",
                tm3.zone_code, tm3.epsg, tm3.easting, tm3.northing
            ),
            None => println!("  TM3: outside coverage"),
        }
        println!();
    }

    println!("--- Search input parsing ---\n");

    let queries = [
        "49.2 200000 1500000",
        "tm3 49 200978 1344535",
        "48S 791000 9236000",
        "UTM 51 n 334096.36 844529.43",
        "-6.9, 107.6",
        "61 N 500000 5000000",
        "Bandung",
    ];

    for query in queries {
        print!("{:32} -> ", format!("{:?}", query));
        match parse(query) {
            ParsedInput::Tm3 { coordinate, point } => println!(
                "TM3 zone {} at {:.6}, {:.6}",
                coordinate.zone_code, point.latitude, point.longitude
            ),
            ParsedInput::Utm { coordinate, point } => println!(
                "UTM {} at {:.6}, {:.6}",
                coordinate.zone, point.latitude, point.longitude
            ),
            ParsedInput::Geographic(point) => {
                println!("coordinates {:.6}, {:.6}", point.latitude, point.longitude)
            }
            ParsedInput::Unrecognized => println!("not a coordinate (geocoder query)"),
        }
    }

    Ok(())
}
