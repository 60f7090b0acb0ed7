mod common;

use airroute_lib::{
    find_route, load_network, plan_route, start_route_search, Error, LoadOptions, Network,
    RouteRequest,
};

use common::fixture_dir;

fn fixture_network() -> Network {
    load_network(&fixture_dir(), LoadOptions::default()).expect("fixture loads")
}

#[test]
fn connecting_route_through_new_york() {
    let network = fixture_network();
    assert_eq!(
        start_route_search(&network, "YYZ", "LAX").unwrap(),
        "YYZ->JFK->LAX"
    );
}

#[test]
fn route_distance_matches_edge_weights() {
    let network = fixture_network();
    let path = find_route(&network, "YYZ", "LAX").unwrap();

    let leg = |a: &str, b: &str| network.airport(a).unwrap().connection(b).unwrap();
    assert_eq!(path.distance, leg("YYZ", "JFK") + leg("JFK", "LAX"));
}

#[test]
fn direct_route_is_single_hop() {
    let network = fixture_network();
    let plan = plan_route(&network, &RouteRequest::new("YUL", "YOW")).unwrap();
    assert_eq!(plan.hop_count(), 1);
    assert_eq!(plan.path_string(), "YUL->YOW");
}

#[test]
fn isolated_airport_has_no_route() {
    let network = fixture_network();
    let err = start_route_search(&network, "YYZ", "YHZ").unwrap_err();
    assert!(matches!(err, Error::RouteNotFound { .. }));
    assert_eq!(err.to_string(), "Invalid route");
}

#[test]
fn one_way_routes_are_not_reversed() {
    let network = fixture_network();
    assert!(matches!(
        start_route_search(&network, "LAX", "YYZ"),
        Err(Error::RouteNotFound { .. })
    ));
}

#[test]
fn skipped_unknown_airport_is_not_a_valid_destination() {
    let network = fixture_network();
    assert!(matches!(
        start_route_search(&network, "YYZ", "XXX"),
        Err(Error::InvalidDestination { .. })
    ));
}

#[test]
fn query_errors_leave_network_usable() {
    let network = fixture_network();
    for (origin, destination) in [("YYZ", "YYZ"), ("XXX", "LAX"), ("YYZ", "XXX")] {
        let err = start_route_search(&network, origin, destination).unwrap_err();
        assert!(err.is_query_error());
    }
    assert_eq!(
        start_route_search(&network, "YYZ", "LAX").unwrap(),
        "YYZ->JFK->LAX"
    );
}

#[test]
fn concurrent_searches_share_the_network() {
    let network = std::sync::Arc::new(fixture_network());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let network = std::sync::Arc::clone(&network);
            std::thread::spawn(move || start_route_search(&network, "YYZ", "LAX").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "YYZ->JFK->LAX");
    }
}
