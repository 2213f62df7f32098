//! End-to-end update loop behaviour across devices, channels, and the
//! command sink.

use glam::DVec2;
use joycam::{
    AxisOptions, AxisType, ButtonAction, CommandQueue, JoystickInteraction, MappingProfile,
    PropertyTarget, SnapshotTable,
};

fn tick(interaction: &mut JoystickInteraction, snapshot: &SnapshotTable, dt: f64) -> CommandQueue {
    let mut sink = CommandQueue::new();
    interaction.update(snapshot, &mut sink, dt);
    sink
}

#[test]
fn command_order_follows_device_then_axis_then_button() {
    let mut interaction = JoystickInteraction::new(1.0, 1.0);
    let mut snapshot = SnapshotTable::new();

    // Insertion order into the snapshot defines device order
    snapshot.set_axis("alpha", 0, 1.0);
    snapshot.set_axis("beta", 0, 1.0);
    snapshot.set_button("alpha", 0, ButtonAction::Press);
    snapshot.set_button("beta", 0, ButtonAction::Press);

    for device in ["alpha", "beta"] {
        interaction
            .set_axis_property(
                &snapshot,
                device,
                0,
                PropertyTarget {
                    uri: format!("{device}.value"),
                    min: 0.0,
                    max: 1.0,
                    remote: false,
                },
                AxisOptions::default(),
            )
            .unwrap();
        interaction
            .bind_button_command(device, 0, format!("{device}.button()"), ButtonAction::Press, false, "")
            .unwrap();
    }

    let sink = tick(&mut interaction, &snapshot, 1.0);
    let commands: Vec<&str> = sink.commands().iter().map(|c| c.command.as_str()).collect();
    assert_eq!(
        commands,
        vec![
            "setPropertyValue(\"alpha.value\", 1)",
            "alpha.button()",
            "setPropertyValue(\"beta.value\", 1)",
            "beta.button()",
        ]
    );
}

#[test]
fn released_stick_decays_to_exact_zero() {
    let mut interaction = JoystickInteraction::new(1.0, 0.5);
    let mut snapshot = SnapshotTable::new();
    snapshot.set_axis("stick", 0, 0.8);

    interaction
        .set_axis_mapping(&snapshot, "stick", 0, AxisType::OrbitX, AxisOptions::default())
        .unwrap();

    // Build up some velocity
    for _ in 0..10 {
        tick(&mut interaction, &snapshot, 1.0);
    }
    assert!(interaction.channels().global_rotation_velocity().length() > 0.1);

    // Release the stick: the deadzone filters the centered axis, so the
    // channel decelerates every tick
    snapshot.set_axis("stick", 0, 0.0);
    let mut previous = interaction.channels().global_rotation_velocity().length();
    let mut reached_zero_at = None;
    for i in 0..60 {
        tick(&mut interaction, &snapshot, 1.0);
        let magnitude = interaction.channels().global_rotation_velocity().length();
        assert!(magnitude <= previous, "velocity grew while decaying");
        previous = magnitude;
        if interaction.channels().global_rotation_velocity() == DVec2::ZERO {
            reached_zero_at = Some(i);
            break;
        }
    }
    assert!(reached_zero_at.is_some(), "velocity never reached exact zero");
}

#[test]
fn channels_are_independent() {
    let mut interaction = JoystickInteraction::new(1.0, 1.0);
    let mut snapshot = SnapshotTable::new();
    snapshot.set_axis("stick", 0, 0.1);
    snapshot.set_axis("stick", 1, 0.2);
    snapshot.set_axis("stick", 2, 0.3);
    snapshot.set_axis("stick", 3, 0.4);
    snapshot.set_axis("stick", 4, 0.5);

    interaction
        .set_axis_mapping(&snapshot, "stick", 0, AxisType::OrbitX, AxisOptions::default())
        .unwrap();
    interaction
        .set_axis_mapping(&snapshot, "stick", 1, AxisType::Zoom, AxisOptions::default())
        .unwrap();
    interaction
        .set_axis_mapping(&snapshot, "stick", 2, AxisType::LocalRollX, AxisOptions::default())
        .unwrap();
    interaction
        .set_axis_mapping(&snapshot, "stick", 3, AxisType::GlobalRollY, AxisOptions::default())
        .unwrap();
    interaction
        .set_axis_mapping(&snapshot, "stick", 4, AxisType::PanY, AxisOptions::default())
        .unwrap();

    tick(&mut interaction, &snapshot, 1.0);

    let channels = interaction.channels();
    assert!((channels.global_rotation_velocity().x - 0.1).abs() < 1e-6);
    assert!((channels.truck_velocity().x - 0.2).abs() < 1e-6);
    assert!((channels.local_roll_velocity().x - 0.3).abs() < 1e-6);
    assert!((channels.global_roll_velocity().y - 0.4).abs() < 1e-6);
    assert!((channels.local_rotation_velocity().y - 0.5).abs() < 1e-6);
}

#[test]
fn profile_driven_interaction_end_to_end() {
    const PROFILE: &str = r#"
devices:
  - name: pad
    axes:
      - axis: 0
        type: orbit_x
        deadzone: 0.1
      - axis: 1
        type: zoom_out
    buttons:
      - button: 2
        command: toggle.hud()
"#;

    let mut snapshot = SnapshotTable::new();
    snapshot.set_axis("pad", 0, 0.6);
    snapshot.set_axis("pad", 1, 0.5);
    snapshot.set_button("pad", 2, ButtonAction::Press);

    let mut interaction = JoystickInteraction::new(1.0, 1.0);
    MappingProfile::from_yaml(PROFILE)
        .unwrap()
        .apply(&mut interaction, &snapshot)
        .unwrap();

    let sink = tick(&mut interaction, &snapshot, 1.0);

    assert!((interaction.channels().global_rotation_velocity().x - 0.6).abs() < 1e-6);
    // zoom_out subtracts
    assert!((interaction.channels().truck_velocity().x + 0.5).abs() < 1e-6);
    assert_eq!(sink.commands().len(), 1);
    assert_eq!(sink.commands()[0].command, "toggle.hud()");
}

#[test]
fn held_button_keeps_firing_each_tick() {
    let mut interaction = JoystickInteraction::new(1.0, 1.0);
    let mut snapshot = SnapshotTable::new();
    snapshot.set_button("pad", 0, ButtonAction::Hold);

    interaction
        .bind_button_command("pad", 0, "camera.creep()", ButtonAction::Hold, false, "")
        .unwrap();

    for _ in 0..3 {
        let sink = tick(&mut interaction, &snapshot, 1.0);
        assert_eq!(sink.commands().len(), 1);
    }
}
