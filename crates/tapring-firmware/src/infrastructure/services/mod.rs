mod hotspot;

pub(crate) use hotspot::EspHotspot;
