//! Grid map behavior through the public API.

mod common;

use std::io::Write;

use approx::assert_relative_eq;
use common::*;
use drishti::{
    AreaOccupancyObservation, DiscretePoint2D, DrishtiConfig, Error, ExtentPolicy, GridCell,
    GridMap, GridMapParams, Occupancy, OccupancyRaster, Point2D,
};

// ============================================================================
// Coordinate transforms
// ============================================================================

#[test]
fn test_world_to_cell_floors_negative_coordinates() {
    let map = GridMap::bounded(GridMapParams::new(100, 100, 1.0)).unwrap();
    assert_eq!(map.world_to_cell(0.5, 0.5), DiscretePoint2D::new(0, 0));
    assert_eq!(map.world_to_cell(-0.5, -0.5), DiscretePoint2D::new(-1, -1));
    assert_eq!(map.world_to_cell(10.5, -28.5), DiscretePoint2D::new(10, -29));
    assert_eq!(map.world_to_cell(-10.0, 10.0), DiscretePoint2D::new(-10, 10));
}

#[test]
fn test_world_to_cell_by_vec_follows_angle() {
    let map = GridMap::bounded(GridMapParams::new(100, 100, 0.5)).unwrap();
    let by_vec = map.world_to_cell_by_vec(0.25, 0.25, 2.0, std::f64::consts::FRAC_PI_2);
    assert_eq!(by_vec, map.world_to_cell(0.25, 2.25));
    assert_eq!(by_vec, DiscretePoint2D::new(0, 4));
}

#[test]
fn test_cell_center_round_trips() {
    let map = GridMap::bounded(GridMapParams::new(64, 64, 0.05)).unwrap();
    for x in -32..32 {
        let coord = DiscretePoint2D::new(x, -x / 2);
        let center = map.cell_to_world(coord);
        assert_eq!(map.world_to_cell(center.x, center.y), coord);
    }
}

// ============================================================================
// Extent policies
// ============================================================================

#[test]
fn test_bounded_map_rejects_outside_access() {
    let mut map = GridMap::bounded(GridMapParams::new(10, 10, 1.0)).unwrap();
    let outside = DiscretePoint2D::new(5, 5);

    match map.cell(outside) {
        Err(Error::OutOfBounds { coord, width, height }) => {
            assert_eq!(coord, outside);
            assert_eq!((width, height), (10, 10));
        }
        other => panic!("expected OutOfBounds, got {:?}", other),
    }

    let obs = AreaOccupancyObservation::occupied_at(Point2D::new(5.5, 5.5));
    let err = map.cell_occupancy_update(obs.world_point, &obs).unwrap_err();
    assert!(err.to_string().contains("(5, 5)"));
    assert!(map.iter().all(|(_, cell)| !cell.is_known()));
}

#[test]
fn test_unbounded_map_grows_on_update() {
    let mut map = GridMap::unbounded(GridMapParams::new(10, 10, 1.0)).unwrap();
    let far = Point2D::new(-40.5, 70.5);
    let obs = AreaOccupancyObservation::occupied_at(far);

    assert_eq!(map.cell_value(map.world_to_cell(far.x, far.y)).unwrap(), -1.0);
    map.cell_occupancy_update(far, &obs).unwrap();

    let coord = map.world_to_cell(far.x, far.y);
    assert!(map.has_cell(coord));
    assert_eq!(map.cell_value(coord).unwrap(), 1.0);
    assert!(map.width() > 10 && map.height() > 10);

    let (min, max) = map.bounds();
    assert!(min.x <= far.x && far.y < max.y);
}

#[test]
fn test_growth_keeps_existing_observations() {
    let mut map = GridMap::unbounded(GridMapParams::new(8, 8, 0.5)).unwrap();
    let marks = [Point2D::new(-1.9, -1.9), Point2D::new(1.9, 1.9), Point2D::new(0.1, -0.3)];
    for p in marks {
        map.cell_occupancy_update(p, &AreaOccupancyObservation::occupied_at(p))
            .unwrap();
    }
    assert_eq!(map.width(), 8);

    for target in [Point2D::new(30.0, 0.0), Point2D::new(-30.0, -30.0)] {
        map.cell_occupancy_update(target, &AreaOccupancyObservation::free_at(target))
            .unwrap();
    }

    for p in marks {
        assert!(map[map.world_to_cell(p.x, p.y)].is_occupied());
    }
    assert_eq!(map.iter().filter(|(_, c)| c.is_occupied()).count(), 3);
    assert_eq!(map.iter().filter(|(_, c)| c.is_known()).count(), 5);
}

#[test]
fn test_fusion_through_map() {
    let mut map = GridMap::bounded(GridMapParams::new(10, 10, 1.0)).unwrap();
    let coord = DiscretePoint2D::new(1, 1);
    let weak = AreaOccupancyObservation::new(true, Occupancy::new(0.8, 0.5), Point2D::ZERO, 1.0);

    map.update_cell(coord, &weak).unwrap();
    assert_relative_eq!(map.cell_value(coord).unwrap(), 0.8);
    assert!(!map[coord].is_occupied());

    map.update_cell(coord, &AreaOccupancyObservation::occupied_at(Point2D::ZERO))
        .unwrap();
    assert_eq!(map.cell_value(coord).unwrap(), 1.0);

    map.update_cell(coord, &AreaOccupancyObservation::free_at(Point2D::ZERO))
        .unwrap();
    assert_eq!(map.cell_value(coord).unwrap(), 0.0);
}

#[test]
fn test_from_cells_row_major() {
    let mut cells = vec![GridCell::Unknown; 6];
    cells[5] = GridCell::with_occupancy(Occupancy::OCCUPIED);
    let map = GridMap::from_cells(GridMapParams::new(3, 2, 1.0), ExtentPolicy::Bounded, cells)
        .unwrap();

    // Storage (2, 1) is cell (1, 0) with center (1, 1)
    assert!(map[DiscretePoint2D::new(1, 0)].is_occupied());
    assert_eq!(map.cell_value(DiscretePoint2D::new(-1, -1)).unwrap(), -1.0);
}

// ============================================================================
// Raster export
// ============================================================================

#[test]
fn test_cecum_raster_export() {
    let map = cecum_map();
    let raster = OccupancyRaster::from_map(&map);

    assert_eq!(raster.width, MAP_WIDTH);
    assert_eq!(raster.height, MAP_HEIGHT);
    assert_eq!(raster.origin_x, -50.0);
    assert_eq!(raster.origin_y, -50.0);

    // Cell (x, y) is at storage (x + 50, y + 50)
    assert_eq!(raster.get(50, 50), Some(100));
    assert_eq!(raster.get(65, 30), Some(0));
    assert_eq!(raster.get(75, 25), Some(100));
    assert_eq!(raster.data.iter().filter(|&&v| v == 100).count(), 30 * 10 + 2 * 20 * 10);
    assert!(raster.data.iter().all(|&v| v == 0 || v == 100));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_builds_map_and_generator() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "map:\n  width: 100\n  height: 100\n  scale: 1.0\n  unbounded: true\nscanner:\n  max_range: 150.0\n  angle_step_deg: 90.0\n  max_angle_deg: 180.0"
    )
    .unwrap();

    let config = DrishtiConfig::load(file.path()).unwrap();
    let mut map = config.build_map().unwrap();
    apply_text_raster(&mut map, CECUM_CORRIDOR, PATCH_SCALE);

    let generator = config.build_generator().unwrap();
    assert_eq!(generator.params().beam_count(), 4);

    let pose = drishti::RobotPose::new(10.5, -28.5, 0.0);
    let scan = generator.generate_2d_laser_scan(&map, &pose);
    assert_eq!(scan.len(), 3);
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = DrishtiConfig::load(&dir.path().join("missing.yaml"));
    assert!(matches!(result, Err(Error::Io(_))));
}
