//! Joystick interaction simulator
//!
//! Drives the interaction core with a synthetic stick sweep and prints the
//! resulting channel velocities. Useful for eyeballing smoothing constants
//! and trying out mapping profiles without hardware attached.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use joycam::{
    AxisOptions, AxisType, CommandQueue, JoystickInteraction, MappingProfile, SnapshotTable,
};

const DEVICE: &str = "virtual-stick";

/// Joycam simulator - synthetic joystick sweep against the interaction core
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a YAML mapping profile; a built-in orbit/zoom mapping is
    /// used when omitted
    #[arg(short, long)]
    profile: Option<String>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value = "120")]
    ticks: u32,

    /// Fixed time step per tick in seconds
    #[arg(short, long, default_value = "0.016")]
    dt: f64,

    /// Group sensitivity
    #[arg(short, long, default_value = "1.0")]
    sensitivity: f64,

    /// Velocity scale factor (smoothing rate)
    #[arg(long, default_value = "8.0")]
    scale: f64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut interaction = JoystickInteraction::new(args.sensitivity, args.scale);
    let mut snapshot = SnapshotTable::new();
    snapshot.add_device(DEVICE);

    match &args.profile {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read mapping profile: {path}"))?;
            let profile = MappingProfile::from_yaml(&text)?;
            profile.apply(&mut interaction, &snapshot)?;
            info!("Loaded mapping profile from {path}");
        }
        None => {
            interaction.set_axis_mapping(
                &snapshot,
                DEVICE,
                0,
                AxisType::OrbitX,
                AxisOptions::default(),
            )?;
            interaction.set_axis_mapping(
                &snapshot,
                DEVICE,
                1,
                AxisType::OrbitY,
                AxisOptions::default(),
            )?;
            interaction.set_axis_mapping(
                &snapshot,
                DEVICE,
                2,
                AxisType::Zoom,
                AxisOptions::default(),
            )?;
            interaction.set_deadzone(DEVICE, 0, 0.05)?;
            interaction.set_deadzone(DEVICE, 1, 0.05)?;
            info!("Using built-in orbit/zoom mapping");
        }
    }

    let mut sink = CommandQueue::new();

    // Deflect the stick for the first half of the run, release it for the
    // second half to watch the channels decelerate.
    for tick in 0..args.ticks {
        let deflection = if tick < args.ticks / 2 {
            let t = f64::from(tick) * args.dt;
            (t * std::f64::consts::TAU * 0.25).sin() as f32
        } else {
            0.0
        };
        snapshot.set_axis(DEVICE, 0, deflection);
        snapshot.set_axis(DEVICE, 1, deflection * 0.5);
        snapshot.set_axis(DEVICE, 2, deflection * -0.25);

        interaction.update(&snapshot, &mut sink, args.dt);

        let rotation = interaction.channels().global_rotation_velocity();
        let truck = interaction.channels().truck_velocity();
        info!(
            tick,
            input = deflection,
            rot_x = rotation.x,
            rot_y = rotation.y,
            truck = truck.x,
            "state"
        );
    }

    let commands = sink.drain();
    if !commands.is_empty() {
        info!("{} command(s) queued during the run:", commands.len());
        for command in commands {
            info!(remote = command.remote, "  {}", command.command);
        }
    }

    Ok(())
}
