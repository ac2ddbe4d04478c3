use chrono::NaiveDate;
use foodshare_db::*;
use foodshare_model::*;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn listing(
    food_id: i64,
    name: &str,
    expiry: &str,
    provider_id: i64,
    location: &str,
    food_type: &str,
    meal_type: &str,
) -> FoodListing {
    FoodListing {
        food_id,
        food_name: name.to_string(),
        quantity: 5,
        expiry_date: date(expiry),
        provider_id,
        provider_type: "Restaurant".to_string(),
        location: location.to_string(),
        food_type: food_type.to_string(),
        meal_type: meal_type.to_string(),
    }
}

fn setup_db() -> rusqlite::Connection {
    let conn = open_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO Providers (Provider_ID, Name, Type, Address, City, Contact) VALUES
             (1, 'A', 'Restaurant', '12 Main St', 'Springfield', 'x'),
             (2, 'B', 'Grocery', '4 Oak Ave', 'Shelbyville', 'y');
         INSERT INTO Receivers (Receiver_ID, Name, Type, City, Contact) VALUES
             (10, 'City Shelter', 'NGO', 'Springfield', 'z');",
    )
    .unwrap();

    insert_listing(
        &conn,
        &listing(100, "Rice", "2024-01-02", 1, "Springfield", "Vegetarian", "Lunch"),
    )
    .unwrap();
    insert_listing(
        &conn,
        &listing(101, "Bread", "2024-01-01", 2, "Shelbyville", "Vegan", "Breakfast"),
    )
    .unwrap();
    insert_listing(
        &conn,
        &listing(102, "Chicken Curry", "2024-01-05", 1, "Springfield", "Non-Vegetarian", "Dinner"),
    )
    .unwrap();

    conn
}

#[test]
fn browse_unfiltered_returns_all_by_ascending_expiry() {
    let conn = setup_db();
    let rows = browse_listings(&conn, &ListingFilter::default()).unwrap();
    let ids: Vec<i64> = rows.iter().map(|r| r.food_id).collect();
    assert_eq!(ids, vec![101, 100, 102]);
}

#[test]
fn browse_by_city_joins_provider_identity() {
    let conn = setup_db();
    let filter = ListingFilter {
        cities: vec!["Shelbyville".to_string()],
        ..Default::default()
    };
    let rows = browse_listings(&conn, &filter).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].food_id, 101);
    assert_eq!(rows[0].provider_name.as_deref(), Some("B"));
    assert_eq!(rows[0].provider_contact.as_deref(), Some("y"));
}

#[test]
fn browse_scenario_single_listing_with_provider_name() {
    // Provider A, one listing in its city: browse by that city yields
    // exactly that row with the provider's name joined in.
    let conn = open_memory().unwrap();
    conn.execute(
        "INSERT INTO Providers (Provider_ID, Name, Type, Address, City, Contact)
         VALUES (1, 'A', 'Restaurant', '12 Main St', 'Springfield', 'x')",
        [],
    )
    .unwrap();
    insert_listing(
        &conn,
        &listing(100, "Rice", "2024-01-02", 1, "Springfield", "Vegetarian", "Lunch"),
    )
    .unwrap();

    let filter = ListingFilter {
        cities: vec!["Springfield".to_string()],
        ..Default::default()
    };
    let rows = browse_listings(&conn, &filter).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].food_id, 100);
    assert_eq!(rows[0].provider_name.as_deref(), Some("A"));
}

#[test]
fn browse_multi_valued_filter_matches_any_value() {
    let conn = setup_db();
    let filter = ListingFilter {
        cities: vec!["Springfield".to_string(), "Shelbyville".to_string()],
        ..Default::default()
    };
    let rows = browse_listings(&conn, &filter).unwrap();
    assert_eq!(rows.len(), 3);
}

#[test]
fn browse_filters_are_anded_across_dimensions() {
    let conn = setup_db();
    let filter = ListingFilter {
        cities: vec!["Springfield".to_string()],
        provider_ids: vec![1],
        food_types: vec!["Vegetarian".to_string()],
        meal_types: vec!["Lunch".to_string()],
    };
    let rows = browse_listings(&conn, &filter).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].food_id, 100);

    // Same dimensions with a non-matching meal type: AND semantics empty it.
    let filter = ListingFilter {
        cities: vec!["Springfield".to_string()],
        meal_types: vec!["Breakfast".to_string()],
        ..Default::default()
    };
    assert!(browse_listings(&conn, &filter).unwrap().is_empty());
}

#[test]
fn browse_is_invariant_under_filter_value_reordering() {
    let conn = setup_db();
    let forward = ListingFilter {
        cities: vec!["Springfield".to_string(), "Shelbyville".to_string()],
        food_types: vec!["Vegan".to_string(), "Vegetarian".to_string()],
        ..Default::default()
    };
    let reversed = ListingFilter {
        cities: vec!["Shelbyville".to_string(), "Springfield".to_string()],
        food_types: vec!["Vegetarian".to_string(), "Vegan".to_string()],
        ..Default::default()
    };
    let a: Vec<i64> = browse_listings(&conn, &forward)
        .unwrap()
        .iter()
        .map(|r| r.food_id)
        .collect();
    let b: Vec<i64> = browse_listings(&conn, &reversed)
        .unwrap()
        .iter()
        .map(|r| r.food_id)
        .collect();
    assert_eq!(a, b);
}

#[test]
fn empty_filter_reports_empty() {
    assert!(ListingFilter::default().is_empty());
    let filter = ListingFilter {
        provider_ids: vec![1],
        ..Default::default()
    };
    assert!(!filter.is_empty());
}

#[test]
fn listing_survives_dangling_provider_reference() {
    // With enforcement off (as on a database loaded from unconstrained
    // sources), the LEFT JOIN keeps the listing row, provider fields null.
    let conn = open_memory().unwrap();
    conn.execute_batch("PRAGMA foreign_keys=OFF;").unwrap();
    insert_listing(
        &conn,
        &listing(100, "Rice", "2024-01-02", 77, "Springfield", "Vegetarian", "Lunch"),
    )
    .unwrap();

    let rows = browse_listings(&conn, &ListingFilter::default()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].provider_id, 77);
    assert!(rows[0].provider_name.is_none());
}

#[test]
fn near_expiry_window_is_three_days_inclusive() {
    let conn = open_memory().unwrap();
    conn.execute(
        "INSERT INTO Providers (Provider_ID, Name, Type, Address, City, Contact)
         VALUES (1, 'A', 'Restaurant', '12 Main St', 'Springfield', 'x')",
        [],
    )
    .unwrap();
    for (id, expiry) in [
        (100, "2024-01-01"),
        (101, "2024-01-03"),
        (102, "2024-01-04"),
        (103, "2024-01-05"),
    ] {
        insert_listing(
            &conn,
            &listing(id, "Rice", expiry, 1, "Springfield", "Vegetarian", "Lunch"),
        )
        .unwrap();
    }

    let rows = near_expiry_listings(&conn, date("2024-01-01")).unwrap();
    let ids: Vec<i64> = rows.iter().map(|r| r.food_id).collect();
    assert_eq!(ids, vec![100, 101, 102]);
    assert_eq!(rows.last().unwrap().expiry_date, "2024-01-04");
}

fn seed_claims(conn: &rusqlite::Connection) {
    let claims = [
        (1, 100, "Pending", "2024-01-01 09:00:00"),
        (2, 101, "Completed", "2024-01-01 17:45:00"),
        (3, 102, "Pending", "2024-01-03 12:00:00"),
    ];
    for (claim_id, food_id, status, ts) in claims {
        conn.execute(
            "INSERT INTO Claims (Claim_ID, Food_ID, Receiver_ID, Status, Timestamp)
             VALUES (?1, ?2, 10, ?3, ?4)",
            rusqlite::params![claim_id, food_id, status, ts],
        )
        .unwrap();
    }
}

#[test]
fn claims_per_day_groups_by_calendar_day_ascending() {
    let conn = setup_db();
    seed_claims(&conn);

    let per_day = claims_per_day(&conn).unwrap();
    assert_eq!(
        per_day,
        vec![
            ("2024-01-01".to_string(), 2),
            ("2024-01-03".to_string(), 1),
        ]
    );
}

#[test]
fn claims_by_status_counts() {
    let conn = setup_db();
    seed_claims(&conn);

    let by_status = claims_by_status(&conn).unwrap();
    assert_eq!(
        by_status,
        vec![
            ("Completed".to_string(), 1),
            ("Pending".to_string(), 2),
        ]
    );
}

#[test]
fn listings_by_food_type_counts() {
    let conn = setup_db();
    let by_type = listings_by_food_type(&conn).unwrap();
    assert_eq!(
        by_type,
        vec![
            ("Non-Vegetarian".to_string(), 1),
            ("Vegan".to_string(), 1),
            ("Vegetarian".to_string(), 1),
        ]
    );
}

#[test]
fn table_stats_counts_all_four_tables() {
    let conn = setup_db();
    seed_claims(&conn);

    let stats = table_stats(&conn).unwrap();
    assert_eq!(stats.providers, 2);
    assert_eq!(stats.receivers, 1);
    assert_eq!(stats.listings, 3);
    assert_eq!(stats.claims, 3);
}

#[test]
fn directory_views_ordered_by_identity() {
    let conn = setup_db();

    let providers = list_providers(&conn).unwrap();
    assert_eq!(providers.len(), 2);
    assert_eq!(providers[0].provider_id, 1);
    assert_eq!(providers[0].name, "A");
    assert_eq!(providers[1].city, "Shelbyville");

    let receivers = list_receivers(&conn).unwrap();
    assert_eq!(receivers.len(), 1);
    assert_eq!(receivers[0].name, "City Shelter");
}

#[test]
fn distinct_filter_dimension_values() {
    let conn = setup_db();

    assert_eq!(
        distinct_cities(&conn).unwrap(),
        vec!["Shelbyville".to_string(), "Springfield".to_string()]
    );
    assert_eq!(distinct_provider_ids(&conn).unwrap(), vec![1, 2]);
    assert_eq!(
        distinct_food_types(&conn).unwrap(),
        vec![
            "Non-Vegetarian".to_string(),
            "Vegan".to_string(),
            "Vegetarian".to_string()
        ]
    );
    assert_eq!(
        distinct_meal_types(&conn).unwrap(),
        vec![
            "Breakfast".to_string(),
            "Dinner".to_string(),
            "Lunch".to_string()
        ]
    );
}
