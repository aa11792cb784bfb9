// Integration tests for the particle field integrator.

use app_core::*;

fn layout_for(device: DeviceClass, pnl: f64) -> SceneLayout {
    let snap = FinancialSnapshot {
        balance: 4992.76,
        pnl,
        position_side: PositionSide::Long,
        position_size: 0.01,
        entry_price: 43250.0,
    };
    compose(device, &snap)
}

#[test]
fn seeding_fills_the_configured_cube() {
    let layout = layout_for(DeviceClass::Desktop, 0.65);
    let mut field = ParticleField::new(42);
    assert!(field.ensure_seeded(&layout));
    assert_eq!(field.len(), layout.particle_count);
    let half = layout.particle_range * 0.5;
    for p in field.positions() {
        let local = *p - layout.field_center;
        assert!(local.x.abs() <= half && local.y.abs() <= half && local.z.abs() <= half);
    }
}

#[test]
fn wrap_invariant_holds_for_any_tick_count() {
    for pnl in [0.65, -0.10] {
        let layout = layout_for(DeviceClass::Desktop, pnl);
        let mut field = ParticleField::new(7);
        field.ensure_seeded(&layout);
        let top = layout.field_center.y + layout.wrap_limit;
        let bottom = layout.field_center.y - layout.wrap_limit;
        for _ in 0..5000 {
            field.step(&layout);
            for p in field.positions() {
                assert!(
                    p.y >= bottom - 1e-4 && p.y <= top + 1e-4,
                    "particle escaped: y={} bounds=[{bottom}, {top}]",
                    p.y
                );
            }
        }
    }
}

#[test]
fn x_and_z_never_move_after_seeding() {
    let layout = layout_for(DeviceClass::Desktop, 0.65);
    let mut field = ParticleField::new(3);
    field.ensure_seeded(&layout);
    let before: Vec<(f32, f32)> = field.positions().iter().map(|p| (p.x, p.z)).collect();
    for _ in 0..500 {
        field.step(&layout);
    }
    let after: Vec<(f32, f32)> = field.positions().iter().map(|p| (p.x, p.z)).collect();
    assert_eq!(before, after);
}

#[test]
fn profit_drifts_up_loss_drifts_down() {
    let up = layout_for(DeviceClass::Desktop, 0.65);
    let mut field = ParticleField::new(11);
    field.ensure_seeded(&up);
    // pick a particle far from the wrap bound so one step cannot wrap it
    let idx = field
        .positions()
        .iter()
        .position(|p| p.y.abs() < up.wrap_limit * 0.5)
        .expect("some particle near the middle");
    let y0 = field.positions()[idx].y;
    field.step(&up);
    assert!(field.positions()[idx].y > y0);

    let down = layout_for(DeviceClass::Desktop, -0.10);
    let mut field = ParticleField::new(11);
    field.ensure_seeded(&down);
    let idx = field
        .positions()
        .iter()
        .position(|p| p.y.abs() < down.wrap_limit * 0.5)
        .expect("some particle near the middle");
    let y0 = field.positions()[idx].y;
    field.step(&down);
    assert!(field.positions()[idx].y < y0);
}

#[test]
fn all_particles_share_one_color_by_pnl_sign() {
    let mut field = ParticleField::new(42);
    field.ensure_seeded(&layout_for(DeviceClass::Desktop, 0.65));
    assert_eq!(field.color(), [0.06, 0.73, 0.51]);

    let mut field = ParticleField::new(42);
    field.ensure_seeded(&layout_for(DeviceClass::Desktop, -0.10));
    assert_eq!(field.color(), [0.94, 0.27, 0.27]);

    // break-even takes the profit branch
    let mut field = ParticleField::new(42);
    field.ensure_seeded(&layout_for(DeviceClass::Desktop, 0.0));
    assert_eq!(field.color(), [0.06, 0.73, 0.51]);
}

#[test]
fn repeated_seeding_with_same_key_is_a_no_op() {
    let layout = layout_for(DeviceClass::Desktop, 0.65);
    let mut field = ParticleField::new(42);
    assert!(field.ensure_seeded(&layout));
    let epoch = field.seed_epoch();
    let first: Vec<glam::Vec3> = field.positions().to_vec();
    for _ in 0..10 {
        assert!(!field.ensure_seeded(&layout));
    }
    assert_eq!(field.seed_epoch(), epoch);
    assert_eq!(field.positions(), first.as_slice());
}

#[test]
fn pnl_sign_flip_regenerates_positions_and_color() {
    let up = layout_for(DeviceClass::Desktop, 0.65);
    let down = layout_for(DeviceClass::Desktop, -0.10);
    let mut field = ParticleField::new(42);
    field.ensure_seeded(&up);
    let epoch = field.seed_epoch();
    let before: Vec<glam::Vec3> = field.positions().to_vec();

    assert!(field.ensure_seeded(&down));
    assert_eq!(field.seed_epoch(), epoch + 1);
    assert_eq!(field.color(), [0.94, 0.27, 0.27]);
    assert_eq!(field.len(), down.particle_count);
    let moved = field
        .positions()
        .iter()
        .zip(before.iter())
        .filter(|(a, b)| a != b)
        .count();
    assert!(moved > 0, "re-seed must draw fresh positions");
}

#[test]
fn device_flip_changes_count_but_keeps_drift_direction() {
    let desktop = layout_for(DeviceClass::Desktop, 0.65);
    let mobile = layout_for(DeviceClass::Mobile, 0.65);
    let mut field = ParticleField::new(42);
    field.ensure_seeded(&desktop);
    let color = field.color();

    assert!(field.ensure_seeded(&mobile));
    assert_eq!(field.len(), mobile.particle_count);
    assert_ne!(desktop.particle_count, mobile.particle_count);
    assert_eq!(field.color(), color, "drift direction survives a device flip");
    assert_eq!(mobile.drift, desktop.drift);
}

#[test]
fn step_never_reallocates() {
    let layout = layout_for(DeviceClass::Desktop, 0.65);
    let mut field = ParticleField::new(42);
    field.ensure_seeded(&layout);
    let ptr = field.positions().as_ptr();
    for _ in 0..1000 {
        field.step(&layout);
    }
    assert_eq!(ptr, field.positions().as_ptr());
    assert_eq!(field.seed_epoch(), 1);
}
