use std::collections::HashMap;

use bevy::app::AppExit;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::ButtonState;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::PrimaryWindow;

use crate::simulation::commands::InputEvent;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Rgb, Viewport};
use crate::visualization::camera::RotationInput;
use crate::visualization::renderer::{DrawCall, Frame};

/// Tags every circle spawned for the current frame
#[derive(Component)]
struct FrameCircle;

#[derive(Component)]
struct PromptText;

/// Events collected this frame, drained by `simulate_frame`
#[derive(Resource, Default)]
struct PendingInput(Vec<InputEvent>);

/// Draw list produced by the last simulated frame
#[derive(Resource, Default)]
struct CurrentFrame(Frame);

/// Shared unit circle plus one material per RGBA value
#[derive(Resource)]
struct DrawAssets {
    circle: Mesh2dHandle,
    materials: HashMap<[u8; 4], Handle<ColorMaterial>>,
}

const MENU_BACKGROUND: Rgb = Rgb(50, 50, 50);

pub fn run_viewer(scenario: Scenario, title: String) {
    info!("run_viewer: starting with {} bodies", scenario.system.len());

    let Viewport { width, height } = scenario.viewport;
    let bg = scenario.background;

    App::new()
        .insert_resource(ClearColor(Color::srgb_u8(bg.0, bg.1, bg.2)))
        .insert_resource(scenario)
        .init_resource::<PendingInput>()
        .init_resource::<CurrentFrame>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title,
                resolution: (width as f32, height as f32).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_viewer)
        .add_systems(Update, (collect_input, simulate_frame, draw_frame, update_prompt).chain())
        .run();
}

fn setup_viewer(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>, scenario: Res<Scenario>) {
    commands.spawn(Camera2dBundle::default());

    commands.insert_resource(DrawAssets {
        circle: Mesh2dHandle(meshes.add(Circle::new(1.0))),
        materials: HashMap::new(),
    });

    // Prompt box sits just above the screen centre
    let c = scenario.viewport.center();
    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 28.0,
                color: Color::WHITE,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            left: Val::Px(c.x as f32 - 100.0),
            top: Val::Px(c.y as f32 - 60.0),
            padding: UiRect::all(Val::Px(10.0)),
            ..default()
        })
        .with_background_color(rgba(MENU_BACKGROUND, 255)),
        PromptText,
    ));
}

/// Pointer presses and typed keys become [`InputEvent`]s
fn collect_input(
    mut pending: ResMut<PendingInput>,
    mut keys: EventReader<KeyboardInput>,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    if mouse.just_pressed(MouseButton::Left) {
        if let Some(at) = windows.get_single().ok().and_then(Window::cursor_position) {
            pending.0.push(InputEvent::PointerPress([at.x as f64, at.y as f64].into()));
        }
    }

    for ev in keys.read() {
        if ev.state != ButtonState::Pressed {
            continue;
        }
        match &ev.logical_key {
            Key::Enter => pending.0.push(InputEvent::Enter),
            Key::Backspace => pending.0.push(InputEvent::Backspace),
            Key::Escape => pending.0.push(InputEvent::Quit),
            Key::Character(s) => pending.0.extend(s.chars().map(InputEvent::Char)),
            _ => {}
        }
    }
}

fn simulate_frame(
    mut scenario: ResMut<Scenario>,
    mut pending: ResMut<PendingInput>,
    mut current: ResMut<CurrentFrame>,
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut exit: EventWriter<AppExit>,
) {
    let held = RotationInput {
        left: keys.pressed(KeyCode::ArrowLeft),
        right: keys.pressed(KeyCode::ArrowRight),
        up: keys.pressed(KeyCode::ArrowUp),
        down: keys.pressed(KeyCode::ArrowDown),
    };

    let outcome = scenario.frame(pending.0.drain(..), held, time.delta_seconds_f64());
    current.0 = outcome.frame;

    if outcome.quit {
        exit.send(AppExit::Success);
    }
}

/// Replace last frame's circles with this frame's draw list
fn draw_frame(
    mut commands: Commands,
    current: Res<CurrentFrame>,
    scenario: Res<Scenario>,
    mut assets: ResMut<DrawAssets>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    old: Query<Entity, With<FrameCircle>>,
) {
    for entity in &old {
        commands.entity(entity).despawn();
    }

    let vp = scenario.viewport;
    let calls = &current.0.calls;
    // Later calls stack on top
    let dz = 100.0 / calls.len().max(1) as f32;

    for (k, call) in calls.iter().enumerate() {
        let (center, radius, color, alpha) = match *call {
            DrawCall::FillCircle { center, radius, color } => (center, radius, color, 255),
            DrawCall::BlendLayer { center, radius, color, alpha } => (center, radius, color, alpha),
        };
        if radius <= 0.0 || alpha == 0 {
            continue;
        }

        let key = [color.0, color.1, color.2, alpha];
        let material = assets
            .materials
            .entry(key)
            .or_insert_with(|| materials.add(ColorMaterial::from(rgba(color, alpha))))
            .clone();

        // Screen pixels (y down) to world units (origin centre, y up)
        let x = (center.x - vp.width / 2.0) as f32;
        let y = (vp.height / 2.0 - center.y) as f32;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: assets.circle.clone(),
                material,
                transform: Transform::from_xyz(x, y, k as f32 * dz).with_scale(Vec3::new(radius as f32, radius as f32, 1.0)),
                ..default()
            },
            FrameCircle,
        ));
    }
}

fn update_prompt(scenario: Res<Scenario>, mut query: Query<(&mut Text, &mut Visibility), With<PromptText>>) {
    let Ok((mut text, mut visibility)) = query.get_single_mut() else {
        return;
    };
    match scenario.prompt() {
        Some(line) => {
            text.sections[0].value = line;
            *visibility = Visibility::Visible;
        }
        None => *visibility = Visibility::Hidden,
    }
}

fn rgba(c: Rgb, alpha: u8) -> Color {
    Color::srgba_u8(c.0, c.1, c.2, alpha)
}
