//! Bevy 2D playback of a recorded trajectory
//!
//! Renders one circle per body and steps through the trajectory log one
//! recorded frame per display tick, looping at the end. The log is read
//! only; no simulation state is mutated here. Bodies get a fixed color
//! from a small palette by index, and the designated central body (if
//! any) is drawn larger.

use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::states::NVec2;
use crate::simulation::trajectory::TrajectoryLog;

#[derive(Component)]
struct BodyIndex(pub usize);

/// World-space -> screen-space scaling factor for positions
const SCALE: f32 = 0.5;

/// Seconds between displayed trajectory frames
const FRAME_INTERVAL: f32 = 1.0 / 60.0;

/// Everything the viewer needs: the recorded log, per-body masses for
/// sizing, and the index of the central body (drawn larger), if any.
#[derive(Resource)]
pub struct PlaybackScene {
    log: TrajectoryLog,
    masses: Vec<f64>,
    central: Option<usize>,
    origin: NVec2,
}

impl PlaybackScene {
    /// The view is centered on the centroid of the first recorded frame.
    pub fn new(log: TrajectoryLog, masses: Vec<f64>, central: Option<usize>) -> Self {
        let mut origin = NVec2::zeros();
        if log.recorded() > 0 && log.bodies() > 0 {
            for i in 0..log.bodies() {
                origin += log.position(i, 0);
            }
            origin /= log.bodies() as f64;
        }
        Self {
            log,
            masses,
            central,
            origin,
        }
    }
}

#[derive(Resource)]
struct PlaybackState {
    frame: usize,
    timer: Timer,
}

pub fn run_playback(scene: PlaybackScene) {
    println!(
        "run_playback: starting Bevy 2D viewer with {} bodies over {} frames",
        scene.log.bodies(),
        scene.log.recorded()
    );

    App::new()
        .insert_resource(scene)
        .insert_resource(PlaybackState {
            frame: 0,
            timer: Timer::from_seconds(FRAME_INTERVAL, TimerMode::Repeating),
        })
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (advance_frame_system, sync_transforms_system))
        .run();
}

fn setup_bodies_system(
    mut commands: Commands,
    scene: Res<PlaybackScene>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    if scene.log.recorded() == 0 {
        return;
    }

    for i in 0..scene.log.bodies() {
        let p = scene.log.position(i, 0) - scene.origin;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body_radius(&scene, i)))),
                material: materials.add(ColorMaterial::from(color_for_index(i))),
                transform: Transform::from_xyz(p.x as f32 * SCALE, p.y as f32 * SCALE, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

/// Advance the displayed frame on a fixed interval, wrapping at the end
/// of the recording.
fn advance_frame_system(
    time: Res<Time>,
    scene: Res<PlaybackScene>,
    mut state: ResMut<PlaybackState>,
) {
    state.timer.tick(time.delta());
    let frames = scene.log.recorded();
    if frames > 0 && state.timer.just_finished() {
        state.frame = (state.frame + 1) % frames;
    }
}

fn sync_transforms_system(
    scene: Res<PlaybackScene>,
    state: Res<PlaybackState>,
    mut query: Query<(&BodyIndex, &mut Transform)>,
) {
    for (BodyIndex(i), mut transform) in &mut query {
        let p = scene.log.position(*i, state.frame) - scene.origin;
        transform.translation.x = p.x as f32 * SCALE;
        transform.translation.y = p.y as f32 * SCALE;
    }
}

/// Screen radius from relative mass, with a floor so light bodies stay
/// visible; the central body gets a fixed large radius.
fn body_radius(scene: &PlaybackScene, i: usize) -> f32 {
    if scene.central == Some(i) {
        return 12.0;
    }
    let max_mass = scene.masses.iter().cloned().fold(f64::MIN, f64::max);
    if max_mass <= 0.0 {
        return 3.0;
    }
    let rel = (scene.masses[i] / max_mass).cbrt() as f32;
    (rel * 6.0).max(2.0)
}

fn color_for_index(i: usize) -> Color {
    match i % 6 {
        0 => Color::srgb(1.0, 1.0, 1.0),
        1 => Color::srgb(0.4, 0.7, 1.0),
        2 => Color::srgb(1.0, 0.6, 0.3),
        3 => Color::srgb(0.5, 1.0, 0.5),
        4 => Color::srgb(1.0, 0.4, 0.6),
        _ => Color::srgb(0.8, 0.8, 0.3),
    }
}
