// Starfield
pub const DEFAULT_STAR_COUNT: usize = 200;
pub const STAR_MAX_RADIUS: f64 = 1.5;
pub const STAR_MAX_SPEED: i32 = 25; // velocity components drawn from [-25, 25]
pub const STAR_VELOCITY_DIVISOR: f64 = 30.0; // per tick, not per second
pub const TWINKLE_RATE: f64 = 1.0;
pub const STAR_COLOR: &str = "255, 255, 255";
pub const ORBIT_GUIDE_ALPHA: f64 = 0.1;
pub const BACKGROUND_COLOR: &str = "#05050f";

// Reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_DURATION: f64 = 0.6; // seconds
pub const REVEAL_OFFSET: f64 = 40.0; // px

// Form notifications
pub const NOTICE_CLEAR_DELAY: u32 = 5000; // ms

pub struct PlanetSpec {
    pub radius: f64,
    pub orbit_radius: f64,
    pub speed: f64, // radians per tick
    pub colors: [&'static str; 3],
}

pub const PLANETS: [PlanetSpec; 6] = [
    PlanetSpec { radius: 6.0, orbit_radius: 90.0, speed: 0.012, colors: ["#fff3c4", "#f5a623", "#7a3e00"] },
    PlanetSpec { radius: 9.0, orbit_radius: 150.0, speed: 0.008, colors: ["#d4f1ff", "#4a90e2", "#0b2a55"] },
    PlanetSpec { radius: 7.5, orbit_radius: 215.0, speed: 0.006, colors: ["#ffd1c4", "#e2574a", "#4d0f08"] },
    PlanetSpec { radius: 14.0, orbit_radius: 290.0, speed: 0.004, colors: ["#f6e7d0", "#c7925a", "#4a2c10"] },
    PlanetSpec { radius: 11.0, orbit_radius: 370.0, speed: 0.003, colors: ["#e8d9ff", "#9b6bff", "#2b0f66"] },
    PlanetSpec { radius: 8.0, orbit_radius: 450.0, speed: 0.002, colors: ["#d0fff0", "#3ad6a0", "#0a4a36"] },
];
