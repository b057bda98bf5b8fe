//! Common test fixtures for climate-api tests.
//!
//! A miniature copy of the Hawaii station dataset. The values are chosen so
//! that every route has a hand-checkable answer:
//!
//! - latest observation date is `2017-08-23`, so the one-year window covers
//!   dates after `2016-08-23`
//! - `USC00519281` (WAIHEE) has the most measurements
//! - several stations report on the same dates, one with missing precipitation

/// A row of the `station` table.
#[derive(Debug, Clone, Copy)]
pub struct StationFixture {
    pub station: &'static str,
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// A row of the `measurement` table.
#[derive(Debug, Clone, Copy)]
pub struct MeasurementFixture {
    pub station: &'static str,
    pub date: &'static str,
    pub prcp: Option<f64>,
    pub tobs: f64,
}

pub mod stations {
    pub const WAIKIKI: &str = "USC00519397";
    pub const KANEOHE: &str = "USC00513117";
    pub const WAIHEE: &str = "USC00519281";

    /// Identifiers in `station.id` order.
    pub const ALL: [&str; 3] = [WAIKIKI, KANEOHE, WAIHEE];
}

/// Stations in insertion (`id`) order.
pub const STATIONS: [StationFixture; 3] = [
    StationFixture {
        station: stations::WAIKIKI,
        name: "WAIKIKI 717.2, HI US",
        latitude: 21.2716,
        longitude: -157.8168,
        elevation: 3.0,
    },
    StationFixture {
        station: stations::KANEOHE,
        name: "KANEOHE 838.1, HI US",
        latitude: 21.4234,
        longitude: -157.8015,
        elevation: 14.6,
    },
    StationFixture {
        station: stations::WAIHEE,
        name: "WAIHEE 837.5, HI US",
        latitude: 21.45167,
        longitude: -157.84889,
        elevation: 32.9,
    },
];

const fn m(station: &'static str, date: &'static str, prcp: Option<f64>, tobs: f64) -> MeasurementFixture {
    MeasurementFixture {
        station,
        date,
        prcp,
        tobs,
    }
}

/// Measurements in insertion (`id`) order.
pub const MEASUREMENTS: [MeasurementFixture; 12] = [
    m(stations::WAIKIKI, "2016-08-22", Some(0.40), 80.0),
    m(stations::WAIKIKI, "2016-08-23", Some(0.00), 81.0),
    m(stations::WAIKIKI, "2017-01-01", Some(0.00), 62.0),
    m(stations::WAIKIKI, "2017-08-23", Some(0.00), 81.0),
    m(stations::KANEOHE, "2016-08-23", Some(0.15), 76.0),
    m(stations::KANEOHE, "2017-01-01", None, 66.0),
    m(stations::KANEOHE, "2017-06-15", Some(0.02), 74.0),
    m(stations::WAIHEE, "2010-01-01", Some(0.08), 70.0),
    m(stations::WAIHEE, "2016-08-24", Some(2.15), 77.0),
    m(stations::WAIHEE, "2017-01-01", Some(0.29), 59.0),
    m(stations::WAIHEE, "2017-06-15", Some(0.00), 79.0),
    m(stations::WAIHEE, "2017-08-18", Some(0.06), 79.0),
];

/// Expected answers derived from the fixture rows.
pub mod expected {
    /// Latest measurement date.
    pub const LAST_DATE: &str = "2017-08-23";

    /// Exclusive cutoff of the one-year window ending at [`LAST_DATE`].
    pub const WINDOW_CUTOFF: &str = "2016-08-23";

    /// Station with the most measurements.
    pub const MOST_ACTIVE: &str = super::stations::WAIHEE;

    /// Measurement count of [`MOST_ACTIVE`].
    pub const MOST_ACTIVE_COUNT: i64 = 5;

    /// Precipitation map for the last year; the last row per date wins.
    pub const PRECIPITATION: [(&str, Option<f64>); 5] = [
        ("2016-08-24", Some(2.15)),
        ("2017-01-01", Some(0.29)),
        ("2017-06-15", Some(0.00)),
        ("2017-08-18", Some(0.06)),
        ("2017-08-23", Some(0.00)),
    ];

    /// Last-year observations of [`MOST_ACTIVE`], in date order.
    pub const TOBS: [(&str, f64); 4] = [
        ("2016-08-24", 77.0),
        ("2017-01-01", 59.0),
        ("2017-06-15", 79.0),
        ("2017-08-18", 79.0),
    ];

    /// `(TMIN, TAVG, TMAX)` for dates on or after 2017-01-01.
    pub const STATS_SINCE_2017: (f64, f64, f64) = (59.0, 500.0 / 7.0, 81.0);

    /// `(TMIN, TAVG, TMAX)` for 2017-01-01 alone.
    pub const STATS_NEW_YEARS_DAY_2017: (f64, f64, f64) = (59.0, 187.0 / 3.0, 66.0);

    /// `(TMIN, TAVG, TMAX)` over every row.
    pub const STATS_ALL: (f64, f64, f64) = (59.0, 884.0 / 12.0, 81.0);
}
