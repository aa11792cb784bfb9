// Integration tests for the device classifier and layout composition.

use app_core::*;

fn snapshot_with_pnl(pnl: f64) -> FinancialSnapshot {
    FinancialSnapshot {
        balance: 4992.76,
        pnl,
        position_side: PositionSide::Long,
        position_size: 0.01,
        entry_price: 43250.0,
    }
}

#[test]
fn classify_boundary_is_exact() {
    assert_eq!(classify(767.0), DeviceClass::Mobile);
    assert_eq!(classify(768.0), DeviceClass::Desktop);
    assert_eq!(classify(767.999), DeviceClass::Mobile);
}

#[test]
fn classify_extremes() {
    assert_eq!(classify(0.0), DeviceClass::Mobile);
    assert_eq!(classify(320.0), DeviceClass::Mobile);
    assert_eq!(classify(1920.0), DeviceClass::Desktop);
    // NaN never panics and falls through to the default class
    assert_eq!(classify(f32::NAN), DeviceClass::Desktop);
}

#[test]
fn classify_defaults_to_desktop_without_viewport() {
    assert_eq!(classify_or_default(None), DeviceClass::Desktop);
    assert_eq!(classify_or_default(Some(500.0)), DeviceClass::Mobile);
}

#[test]
fn compose_is_deterministic() {
    let snap = snapshot_with_pnl(0.65);
    let a = compose(DeviceClass::Desktop, &snap);
    let b = compose(DeviceClass::Desktop, &snap);
    assert_eq!(a, b);
}

#[test]
fn compose_ignores_balance() {
    let a = compose(DeviceClass::Desktop, &snapshot_with_pnl(0.65));
    let mut other = snapshot_with_pnl(0.65);
    other.balance = 1.0;
    let b = compose(DeviceClass::Desktop, &other);
    assert_eq!(a, b, "balance must not shape the layout");
}

#[test]
fn compose_camera_presets_are_table_driven() {
    let snap = snapshot_with_pnl(0.65);
    let desktop = compose(DeviceClass::Desktop, &snap);
    assert_eq!(desktop.camera.position, glam::Vec3::new(0.0, 0.0, 8.0));
    assert_eq!(desktop.camera.fov_deg, 60.0);
    let mobile = compose(DeviceClass::Mobile, &snap);
    assert_eq!(mobile.camera.position, glam::Vec3::new(0.0, 0.0, 10.0));
    assert_eq!(mobile.camera.fov_deg, 75.0);
}

#[test]
fn compose_mobile_narrows_the_field() {
    let snap = snapshot_with_pnl(0.65);
    let desktop = compose(DeviceClass::Desktop, &snap);
    let mobile = compose(DeviceClass::Mobile, &snap);
    assert!(mobile.particle_count < desktop.particle_count);
    assert!(mobile.particle_range < desktop.particle_range);
    assert!(mobile.wrap_limit < desktop.wrap_limit);
    assert!(mobile.globe.scale < desktop.globe.scale);
}

#[test]
fn drift_direction_follows_pnl_sign() {
    assert_eq!(DriftDirection::from_pnl(0.65), DriftDirection::Up);
    assert_eq!(DriftDirection::from_pnl(-0.10), DriftDirection::Down);
    // break-even counts as profit
    assert_eq!(DriftDirection::from_pnl(0.0), DriftDirection::Up);
}

#[test]
fn layout_key_tracks_only_relevant_inputs() {
    let a = compose(DeviceClass::Desktop, &snapshot_with_pnl(0.65));
    let mut richer = snapshot_with_pnl(5000.0);
    richer.balance = 99999.0;
    let b = compose(DeviceClass::Desktop, &richer);
    assert_eq!(a.key(), b.key());

    let c = compose(DeviceClass::Desktop, &snapshot_with_pnl(-0.10));
    assert_ne!(a.key(), c.key());
    let d = compose(DeviceClass::Mobile, &snapshot_with_pnl(0.65));
    assert_ne!(a.key(), d.key());
}

#[test]
fn snapshot_validation_rejects_non_finite_values() {
    let mut snap = snapshot_with_pnl(0.65);
    assert_eq!(snap.validate(), Ok(()));

    snap.pnl = f64::NAN;
    assert!(matches!(
        snap.validate(),
        Err(SnapshotError::NonFinite { field: "pnl", .. })
    ));

    let mut snap = snapshot_with_pnl(0.65);
    snap.balance = f64::INFINITY;
    assert!(matches!(
        snap.validate(),
        Err(SnapshotError::NonFinite {
            field: "balance",
            ..
        })
    ));

    let mut snap = snapshot_with_pnl(0.65);
    snap.balance = -1.0;
    assert_eq!(snap.validate(), Err(SnapshotError::NegativeBalance(-1.0)));
}
