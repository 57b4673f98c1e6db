use glam::{IVec2, Vec2};
use terrain_viewer::scene::Color;
use terrain_viewer::{
    Camera, ChunkDims, ChunkRect, Edge, MovementInput, Scene, SceneSurface, ViewerConfig,
    ViewportTracker,
};

/// 16 world units per tick; one chunk (256 units) every 16 ticks.
const SPEED: f32 = 256.0;
const TICK: f32 = 1.0 / 16.0;

fn tracker() -> ViewportTracker {
    ViewportTracker::new(
        Camera::new(Vec2::ZERO, 25.0, SPEED),
        ChunkDims::default(),
        800,
        600,
    )
}

fn held(up: bool, down: bool, left: bool, right: bool) -> MovementInput {
    MovementInput { up, down, left, right }
}

fn highlighted(tracker: &ViewportTracker) -> Vec<IVec2> {
    tracker
        .grid()
        .iter()
        .filter(|chunk| chunk.highlighted)
        .map(|chunk| chunk.coord())
        .collect()
}

fn assert_in_sync(tracker: &ViewportTracker) {
    let window = tracker.window();
    assert!(tracker.grid().covers_exactly(window), "grid does not match {window:?}");
    assert_eq!((window.width(), window.height()), (3, 3));
    assert!(window.contains(tracker.current_chunk_coord()));
    assert_eq!(highlighted(tracker), vec![tracker.current_chunk_coord()]);
}

#[test]
fn starts_with_three_by_three_around_origin() {
    let tracker = tracker();
    assert_eq!(tracker.window(), ChunkRect::new(-1, 1, -1, 1));
    assert_eq!(tracker.grid().len(), 9);
    assert_eq!(tracker.current_chunk_coord(), IVec2::ZERO);
    assert_eq!(tracker.camera_chunk_coords(), Vec2::new(0.5, 0.5));
    assert_in_sync(&tracker);
}

#[test]
fn moving_right_one_chunk_slides_the_window_once() {
    let mut tracker = tracker();
    let right = held(false, false, false, true);

    let slides: Vec<_> = (0..16)
        .filter_map(|_| tracker.tick(TICK, &right).slid)
        .collect();

    assert_eq!(slides, vec![Edge::Right]);
    assert_eq!(tracker.camera().position, Vec2::new(256.0, 0.0));
    assert_eq!(tracker.window(), ChunkRect::new(0, 2, -1, 1));
    assert_eq!(tracker.grid().len(), 9);
    assert!(tracker.grid().iter().all(|chunk| chunk.column() != -1));
    assert_in_sync(&tracker);
}

#[test]
fn slide_happens_on_the_tick_the_edge_chunk_is_entered() {
    let mut tracker = tracker();
    let right = held(false, false, false, true);

    for _ in 0..7 {
        assert_eq!(tracker.tick(TICK, &right), Default::default());
    }
    // x = 128 is the first point of chunk column 1
    let report = tracker.tick(TICK, &right);
    assert_eq!(report.slid, Some(Edge::Right));
    assert_eq!(report.removed, 3);
    assert_eq!(tracker.current_chunk_coord(), IVec2::new(1, 0));
}

#[test]
fn corner_is_resolved_one_edge_per_tick() {
    let mut tracker = tracker();
    tracker.set_camera_position(Vec2::new(128.0, 128.0));
    assert_eq!(tracker.camera_chunk_coords(), Vec2::new(1.0, 1.0));

    let idle = MovementInput::default();
    assert_eq!(tracker.tick(TICK, &idle).slid, Some(Edge::Right));
    assert_eq!(tracker.window(), ChunkRect::new(0, 2, -1, 1));

    assert_eq!(tracker.tick(TICK, &idle).slid, Some(Edge::Bottom));
    assert_eq!(tracker.window(), ChunkRect::new(0, 2, 0, 2));

    assert_eq!(tracker.tick(TICK, &idle).slid, None);
    assert_in_sync(&tracker);
}

#[test]
fn left_and_up_slide_toward_negative_coordinates() {
    let mut tracker = tracker();
    let up_left = held(true, false, true, false);

    let mut slides = Vec::new();
    for _ in 0..32 {
        slides.extend(tracker.tick(TICK, &up_left).slid);
        assert!(tracker.grid().covers_exactly(tracker.window()));
    }

    assert_eq!(tracker.camera().position, Vec2::new(-512.0, -512.0));
    assert_eq!(tracker.current_chunk_coord(), IVec2::new(-2, -2));
    assert_eq!(tracker.window(), ChunkRect::new(-3, -1, -3, -1));
    // left wins the first corner crossing, top follows on the next tick
    assert_eq!(&slides[..2], &[Edge::Left, Edge::Top]);
    assert_in_sync(&tracker);
}

#[test]
fn long_walk_keeps_window_and_grid_in_lockstep() {
    let mut tracker = tracker();
    let legs = [
        (held(false, false, false, true), 90),
        (held(false, true, false, true), 60),
        (held(false, true, false, false), 45),
        (held(true, false, true, false), 120),
        (held(false, false, true, false), 30),
        (held(true, false, false, false), 75),
    ];

    for (input, ticks) in legs {
        for _ in 0..ticks {
            tracker.tick(TICK, &input);
            assert_in_sync(&tracker);
        }
    }
}

#[test]
fn widest_accepted_step_keeps_diagonals_in_the_window() {
    let config = ViewerConfig::from_toml(
        "[camera]\nspeed = 2032.0\n[simulation]\nmax_frame_seconds = 0.0625",
    )
    .unwrap();
    let dt = config.simulation.max_frame_seconds;

    for (up, down, left, right) in [
        (false, true, false, true),
        (false, true, true, false),
        (true, false, false, true),
        (true, false, true, false),
    ] {
        let mut tracker = ViewportTracker::new(
            Camera::new(Vec2::ZERO, config.camera.radius, config.camera.speed),
            config.chunk.dims(),
            800,
            600,
        );
        let input = held(up, down, left, right);
        for tick in 0..200 {
            tracker.tick(dt, &input);
            assert!(
                tracker.window().contains(tracker.current_chunk_coord()),
                "tick {tick}: camera chunk {} outside {:?}",
                tracker.current_chunk_coord(),
                tracker.window()
            );
            assert!(!tracker.is_desynced());
        }
    }
}

#[test]
fn chunk_space_points_map_back_to_one_chunk() {
    let tracker = tracker();
    let size = ChunkDims::default().world_size();
    let samples = [
        Vec2::new(0.0, 0.0),
        Vec2::new(127.0, -127.0),
        Vec2::new(-129.0, 200.0),
        Vec2::new(300.0, 300.0),
        Vec2::new(-300.0, -130.0),
    ];

    for world in samples {
        let chunk_space = tracker.world_to_chunk(world);
        let owners: Vec<_> = tracker
            .grid()
            .iter()
            .filter(|chunk| chunk.contains_point(chunk_space))
            .collect();
        assert_eq!(owners.len(), 1, "{world} owned by {} chunks", owners.len());

        let min = owners[0].coord().as_vec2() * size - size / 2.0;
        let max = min + size;
        assert!(world.cmpge(min).all() && world.cmplt(max).all());
    }
}

#[test]
fn teleport_past_a_chunk_desyncs_but_keeps_the_lattice() {
    let mut tracker = tracker();
    tracker.set_camera_position(Vec2::new(1024.0, 0.0));

    let report = tracker.tick(TICK, &MovementInput::default());
    assert_eq!(report.slid, None);
    assert!(!tracker.window().contains(tracker.current_chunk_coord()));
    assert!(tracker.grid().covers_exactly(tracker.window()));
    assert!(highlighted(&tracker).is_empty());
    assert!(tracker.is_desynced());

    // still out of step on later ticks; the flag stays set instead of re-warning
    tracker.tick(TICK, &MovementInput::default());
    assert!(tracker.is_desynced());

    tracker.set_camera_position(Vec2::ZERO);
    tracker.tick(TICK, &MovementInput::default());
    assert!(!tracker.is_desynced());
    assert_in_sync(&tracker);
}

#[test]
fn pointer_query_at_screen_center_is_the_camera() {
    let mut tracker = tracker();
    tracker.tick(TICK, &held(false, true, false, false));

    let coords = tracker.pointer_query(Vec2::new(400.0, 300.0));
    assert_eq!(coords.world, tracker.camera().position);
    assert_eq!(coords.screen, Vec2::ZERO);
    assert_eq!(coords.chunk, tracker.camera_chunk_coords());

    let corner = tracker.pointer_query(Vec2::ZERO);
    assert_eq!(corner.screen, Vec2::new(-400.0, -300.0));
    assert_eq!(corner.world, Vec2::new(-400.0, -284.0));
}

#[test]
fn status_lines_report_camera_and_chunk() {
    let mut tracker = tracker();
    tracker.set_camera_position(Vec2::new(-200.0, 0.0));
    let lines = tracker.overlay_lines();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Camera (world): -200.00, 0.00"));
    assert_eq!(lines[1], "Camera (screen): 0, 0");
    assert_eq!(lines[3], "Chunk: -1, 0");
}

#[derive(Default)]
struct RecordingSurface {
    rects: Vec<(Vec2, Vec2, Color)>,
    circles: Vec<(Vec2, f32)>,
}

impl SceneSurface for RecordingSurface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.rects.push((origin, size, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, _color: Color) {
        self.circles.push((center, radius));
    }
}

#[test]
fn render_draws_every_chunk_and_the_camera() {
    let tracker = tracker();
    let mut surface = RecordingSurface::default();
    tracker.render(&mut surface);

    // 9 chunk fills plus a four-bar border on the highlighted one
    assert_eq!(surface.rects.len(), 13);
    assert_eq!(surface.circles, vec![(Vec2::new(400.0, 300.0), 25.0)]);

    let first = tracker.grid().iter().next().unwrap();
    assert_eq!(first.coord(), IVec2::new(-1, -1));
    assert_eq!(surface.rects[0].0, Vec2::new(-256.0 + 272.0, -256.0 + 172.0));
    assert_eq!(surface.rects[0].1, Vec2::splat(256.0));
}

#[test]
fn draw_origins_follow_camera_and_resize() {
    let mut tracker = tracker();
    tracker.set_camera_position(Vec2::new(10.0, 20.0));
    tracker.resize(1000, 1000);

    let center = tracker.grid().get(IVec2::ZERO).unwrap();
    assert_eq!(tracker.chunk_draw_origin(center), Vec2::new(372.0 - 10.0, 372.0 - 20.0));
}
