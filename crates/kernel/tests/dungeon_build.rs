use glam::Vec3;
use mazeworld_common::{CellCoord, ColliderShape};
use mazeworld_grid::TileGrid;
use mazeworld_kernel::{GridWorldBuilder, InstanceKind, WorldUnits, build};

#[test]
fn dungeon_builds_with_source_constants() {
    let grid = TileGrid::dungeon();
    let world = build(
        &grid,
        WorldUnits::default(),
        ColliderShape::Box,
        ColliderShape::Mesh,
    )
    .unwrap();

    assert_eq!(world.columns, 15);
    assert_eq!(world.rows, 15);
    assert_eq!(world.wall_count(), grid.wall_count());
    assert_eq!(world.instances.len(), grid.wall_count() + 1);

    let floor = world.floor().unwrap();
    assert_eq!(floor.scale, Vec3::new(150.0, 1.0, 150.0));
    assert_eq!(floor.position, Vec3::new(70.0, -0.5, 70.0));
    assert_eq!(floor.collider, ColliderShape::Mesh);

    assert_eq!(world.spawn.cell, CellCoord::new(1, 1));
    assert!(
        world
            .spawn
            .position
            .abs_diff_eq(Vec3::new(10.1, 0.1, 10.1), 1e-4)
    );
}

#[test]
fn every_wall_sits_on_a_wall_cell() {
    let grid = TileGrid::dungeon();
    let world = build(&grid, WorldUnits::default(), (), ()).unwrap();
    for wall in world.walls() {
        let cell = world.cell_at(wall.position).unwrap();
        assert!(grid.is_wall(cell), "wall placed on open cell {cell}");
    }
    assert_eq!(
        world.instances.last().map(|i| i.kind),
        Some(InstanceKind::Floor)
    );
}

#[test]
fn concurrent_builds_agree() {
    let grid = TileGrid::dungeon();
    let builder = GridWorldBuilder::new(WorldUnits::new(4.0, 6.0));
    let reference = builder.build(&grid, (), ()).unwrap().layout_hash();

    let hashes: Vec<u64> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| builder.build(&grid, (), ()).unwrap().layout_hash()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(hashes.iter().all(|&h| h == reference));
}

#[test]
fn text_map_and_rows_build_identically() {
    let text = TileGrid::parse_text("#####\n#..##\n##..#\n#####\n").unwrap();
    let rows: Vec<Vec<u8>> = vec![
        vec![1, 1, 1, 1, 1],
        vec![1, 0, 0, 1, 1],
        vec![1, 1, 0, 0, 1],
        vec![1, 1, 1, 1, 1],
    ];
    let builder = GridWorldBuilder::new(WorldUnits::default());
    let a = builder.build(&text, (), ()).unwrap();
    let b = builder.build_rows(&rows, (), ()).unwrap();
    assert_eq!(a, b);
}
