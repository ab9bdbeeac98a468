use bevy::{
  prelude::*,
  window::{MonitorSelection, PresentMode, WindowMode, WindowResolution},
};
use clap::Parser;
use demons_kitchen::{config, core, input, player, scene, world};

#[derive(Parser, Debug)]
#[command(about = "A little platformer about cooking for the demon king")]
struct Args {
  /// Run in a window instead of borderless fullscreen.
  #[arg(long)]
  windowed: bool,
}

fn main() {
  let args = Args::parse();

  let config_str =
    std::fs::read_to_string(config::CONFIG_PATH).expect("Failed to read config file");
  let window_config: config::GameConfig =
    toml::from_str(&config_str).expect("Failed to parse config");

  let mode = if args.windowed {
    WindowMode::Windowed
  } else {
    WindowMode::BorderlessFullscreen(MonitorSelection::Primary)
  };

  App::new()
    .insert_resource(Time::<Fixed>::from_hz(60.0))
    .add_plugins(
      DefaultPlugins
        .set(ImagePlugin::default_nearest())
        .set(WindowPlugin {
          primary_window: Some(Window {
            resolution: WindowResolution::new(
              window_config.window.width,
              window_config.window.height,
            ),
            title: window_config.window.title.clone(),
            present_mode: PresentMode::AutoVsync,
            mode,
            ..default()
          }),
          ..default()
        }),
    )
    .add_plugins(config::ConfigPlugin)
    .add_plugins(core::CorePlugin)
    .add_plugins(input::InputPlugin)
    .add_plugins(scene::ScenePlugin)
    .add_plugins(world::WorldPlugin)
    .add_plugins(player::PlayerPlugin)
    .run();
}
