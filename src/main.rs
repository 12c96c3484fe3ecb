mod camera;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod effects;
mod grid;
mod level;
mod locus;
mod movement;
mod ornament;
mod reflection;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Catoptric".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        level::LevelPlugin,
        grid::GridPlugin,
        locus::LocusPlugin,
        reflection::ReflectionPlugin,
        movement::MovementPlugin,
        camera::CameraPlugin,
        ornament::OrnamentPlugin,
        effects::EffectsPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
