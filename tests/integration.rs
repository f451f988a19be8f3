use std::f64::consts::PI;

use globe_engine::render::{export_png, ExportOptions, OutputSurface};
use globe_engine::scene::{assemble, PROXIMITY_TOLERANCE, RING_TWIST};
use globe_engine::{Config, ConnectionMode};

#[test]
fn default_globe_fans_eight_rings_around_the_sphere() {
    let bundle = assemble(&Config::default());

    assert_eq!(bundle.rings.len(), 8);
    for (k, ring) in bundle.rings.iter().enumerate() {
        let expected_tilt = k as f64 * PI / 8.0;
        assert!((ring.tilt_angle - expected_tilt).abs() < 1e-12);
        assert!((ring.twist_angle - RING_TWIST).abs() < 1e-12);
        assert!((ring.major_radius - 2.0).abs() < 1e-12);
        assert!((ring.minor_radius - 0.04).abs() < 1e-12);
    }
}

#[test]
fn polar_size_variation_interpolates_between_base_and_multiplied() {
    let cfg = Config {
        show_nodes: true,
        polar_size_variation: true,
        node_size: 0.05,
        polar_size_multiplier: 3.0,
        ..Config::default()
    };
    let bundle = assemble(&cfg);
    assert!(!bundle.nodes.is_empty());

    for node in &bundle.nodes {
        let expected = 0.05 * (1.0 + 2.0 * node.polar_distance);
        assert!((node.size - expected).abs() < 1e-12);
        assert!(node.size >= 0.05 - 1e-12 && node.size <= 0.15 + 1e-12);
    }

    // A node halfway between equator and pole is exactly twice base size.
    let halfway = bundle
        .nodes
        .iter()
        .find(|n| (n.polar_distance - 0.5).abs() < 1e-9);
    if let Some(node) = halfway {
        assert!((node.size - 0.10).abs() < 1e-12);
    }
}

#[test]
fn horizontal_connections_stay_short_and_level() {
    let cfg = Config {
        show_nodes: true,
        connection_type: ConnectionMode::Horizontal,
        ..Config::default()
    };
    let bundle = assemble(&cfg);
    assert!(!bundle.peer_connections.is_empty());

    for segment in &bundle.peer_connections {
        assert!((segment.from.y - segment.to.y).abs() < PROXIMITY_TOLERANCE);
        // Antipodal pairs on a shared latitude are excluded by the
        // straight-line distance cap.
        assert!(segment.from.distance_to(segment.to) < 2.0);
    }
}

#[test]
fn vertical_connections_share_an_axial_ray() {
    let cfg = Config {
        show_nodes: true,
        connection_type: ConnectionMode::Vertical,
        ..Config::default()
    };
    let bundle = assemble(&cfg);
    assert!(!bundle.peer_connections.is_empty());

    for segment in &bundle.peer_connections {
        let dx = segment.from.x - segment.to.x;
        let dz = segment.from.z - segment.to.z;
        assert!((dx * dx + dz * dz).sqrt() < PROXIMITY_TOLERANCE);
        assert!(segment.from.distance_to(segment.to) < 2.0);
    }
}

#[test]
fn connection_graphs_do_not_depend_on_node_visibility() {
    let shown = Config {
        show_nodes: true,
        show_inner_sphere: true,
        connect_to_inner_sphere: true,
        connection_type: ConnectionMode::Horizontal,
        ..Config::default()
    };
    let hidden = Config {
        show_nodes: false,
        ..shown.clone()
    };

    let with_nodes = assemble(&shown);
    let without_nodes = assemble(&hidden);

    assert!(without_nodes.nodes.is_empty());
    assert_eq!(without_nodes.peer_connections, with_nodes.peer_connections);
    assert_eq!(without_nodes.radial_connections, with_nodes.radial_connections);
}

#[test]
fn hidden_groups_produce_no_geometry() {
    let cfg = Config {
        num_stripes: 0,
        show_wireframe: false,
        show_nodes: false,
        show_inner_sphere: false,
        ..Config::default()
    };
    let bundle = assemble(&cfg);
    assert!(bundle.rings.is_empty());
    assert!(bundle.outer_sphere.is_none());
    assert!(bundle.inner_sphere.is_none());
    assert!(bundle.nodes.is_empty());
    assert!(bundle.peer_connections.is_empty());
    assert!(bundle.radial_connections.is_empty());
}

#[test]
fn same_config_reproduces_a_bit_identical_bundle() {
    let cfg = Config {
        show_wireframe: true,
        show_nodes: true,
        show_inner_sphere: true,
        connect_to_inner_sphere: true,
        connection_type: ConnectionMode::Horizontal,
        polar_size_variation: true,
        ..Config::default()
    };
    assert_eq!(assemble(&cfg), assemble(&cfg));
}

#[test]
fn config_json_drives_the_full_pipeline() {
    let cfg: Config = serde_json::from_str(
        r#"{"numStripes": 4, "showNodes": true, "connectionType": "horizontal"}"#,
    )
    .unwrap();
    let bundle = assemble(&cfg);
    assert_eq!(bundle.rings.len(), 4);
    assert!(!bundle.nodes.is_empty());
}

#[test]
fn export_produces_a_png_and_restores_the_surface() {
    let bundle = assemble(&Config::default());
    let surface = OutputSurface::new(640, 480);
    let options = ExportOptions {
        resolution: 64,
        ..ExportOptions::default()
    };
    let path = std::env::temp_dir().join("globe-integration-export.png");

    export_png(&bundle, &surface, &options, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    assert_eq!(surface.size(), (640, 480));
    std::fs::remove_file(&path).ok();
}
