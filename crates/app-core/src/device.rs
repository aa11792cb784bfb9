use crate::constants::MOBILE_MAX_WIDTH;

/// Coarse viewport-size category driving layout and camera presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

/// Map a logical viewport width to a device class.
///
/// Total and deterministic: 767 px is Mobile, 768 px is Desktop. A NaN width
/// falls through to Desktop, which is also the pre-measurement default.
#[inline]
pub fn classify(width: f32) -> DeviceClass {
    if width < MOBILE_MAX_WIDTH {
        DeviceClass::Mobile
    } else {
        DeviceClass::Desktop
    }
}

/// Classify when the host may not have reported a viewport yet.
#[inline]
pub fn classify_or_default(width: Option<f32>) -> DeviceClass {
    width.map(classify).unwrap_or_default()
}
