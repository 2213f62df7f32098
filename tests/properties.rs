//! Property-based checks over the axis pipeline and the velocity model.

use glam::DVec2;
use joycam::{
    AxisOptions, AxisType, CommandQueue, JoystickInteraction, SmoothedVelocity, SnapshotTable,
};
use proptest::prelude::*;

/// One tick against a single orbit-x mapping; returns the channel x velocity
/// with a saturating blend, i.e. the exact pipeline output for the tick.
fn pipeline_output(raw: f32, deadzone: f32, options: AxisOptions) -> f64 {
    let mut snapshot = SnapshotTable::new();
    snapshot.set_axis("stick", 0, raw);

    let mut interaction = JoystickInteraction::new(1.0, 1.0);
    interaction
        .set_axis_mapping(&snapshot, "stick", 0, AxisType::OrbitX, options)
        .unwrap();
    interaction.set_deadzone("stick", 0, deadzone).unwrap();

    let mut sink = CommandQueue::new();
    interaction.update(&snapshot, &mut sink, 1.0);
    interaction.channels().global_rotation_velocity().x
}

proptest! {
    #[test]
    fn values_inside_deadzone_never_contribute(
        raw in -1.0f32..=1.0,
        deadzone in 0.0f32..=1.0,
    ) {
        prop_assume!(raw.abs() <= deadzone);
        let output = pipeline_output(raw, deadzone, AxisOptions::default());
        prop_assert_eq!(output, 0.0);
    }

    #[test]
    fn inversion_flips_sign_and_keeps_magnitude(raw in -1.0f32..=1.0) {
        prop_assume!(raw != 0.0);
        let plain = pipeline_output(raw, 0.0, AxisOptions::default());
        let inverted = pipeline_output(
            raw,
            0.0,
            AxisOptions { invert: true, ..Default::default() },
        );
        prop_assert_eq!(plain, -inverted);
    }

    #[test]
    fn normalized_output_stays_in_unit_range(raw in -1.0f32..=1.0) {
        let output = pipeline_output(
            raw,
            0.0,
            AxisOptions { normalize: true, ..Default::default() },
        );
        prop_assert!((0.0..=1.0).contains(&output));
    }

    #[test]
    fn set_never_overshoots_a_steady_target(
        target_x in -10.0f64..=10.0,
        target_y in -10.0f64..=10.0,
        scale in 0.1f64..=100.0,
        ticks in 1usize..=100,
    ) {
        let target = DVec2::new(target_x, target_y);
        let mut velocity = SmoothedVelocity::new(scale);
        for _ in 0..ticks {
            velocity.set(target, 0.016);
            prop_assert!(velocity.get().x.abs() <= target.x.abs() + 1e-9);
            prop_assert!(velocity.get().y.abs() <= target.y.abs() + 1e-9);
        }
    }

    #[test]
    fn decelerate_is_monotone_and_terminates(
        start_x in -10.0f64..=10.0,
        start_y in -10.0f64..=10.0,
        scale in 0.1f64..=100.0,
    ) {
        let mut velocity = SmoothedVelocity::new(scale);
        // A saturating set lands exactly on the start value
        velocity.set(DVec2::new(start_x, start_y), 1.0 / scale);

        let mut previous = velocity.get().length();
        for _ in 0..5_000 {
            velocity.decelerate(0.1);
            let magnitude = velocity.get().length();
            prop_assert!(magnitude <= previous);
            previous = magnitude;
            if velocity.get() == DVec2::ZERO {
                return Ok(());
            }
        }
        prop_assert_eq!(velocity.get(), DVec2::ZERO);
    }
}
