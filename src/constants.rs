// Physical Constants
pub const STANDARD_GRAVITY: f64 = 9.81; // m/s² (Kerbin sea level, converts Isp in seconds to exhaust velocity)

// Input Defaults
pub const DEFAULT_THRUST: f64 = 0.0; // kN per engine (0 = thrust unknown)
pub const DEFAULT_ENGINE_COUNT: u32 = 1;
