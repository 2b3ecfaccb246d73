//! Built-in scenario catalog
//!
//! Four classic teaching setups expressed as `ScenarioConfig` values, so
//! presets and user-supplied YAML go through the same validation and
//! construction path. All values are SI: kilograms, meters, seconds.

use clap::ValueEnum;

use crate::configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};
use crate::simulation::params::GRAVITATIONAL_CONSTANT;

const SUN_MASS: f64 = 1.989e30;
const SUN_RADIUS: f64 = 6.955e8;
const EARTH_MASS: f64 = 5.9736e24;
const EARTH_RADIUS: f64 = 6.371e6;
const EARTH_ORBIT_RADIUS: f64 = 1.496e11;
const EARTH_ORBITAL_SPEED: f64 = 29_780.0;
const EARTH_ROTATION_PERIOD: f64 = 86_400.0;
const MOON_MASS: f64 = 7.3477e22;
const MOON_RADIUS: f64 = 1.737e6;
const MOON_ORBIT_RADIUS: f64 = 3.844e8;
const MOON_ORBITAL_SPEED: f64 = 1_022.0;
const SPACE_STATION_MASS: f64 = 369_914.0;
const SPACE_STATION_RADIUS: f64 = 109.0;
// ~400 km altitude circular orbit
const SPACE_STATION_ORBIT_RADIUS: f64 = EARTH_RADIUS + 4.0e5;

/// Selectable built-in scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    SunEarth,
    SunEarthMoon,
    EarthMoon,
    EarthSpaceStation,
}

impl Preset {
    pub fn all() -> [Preset; 4] {
        [
            Preset::SunEarth,
            Preset::SunEarthMoon,
            Preset::EarthMoon,
            Preset::EarthSpaceStation,
        ]
    }

    pub fn config(self) -> ScenarioConfig {
        match self {
            Preset::SunEarth => ScenarioConfig {
                name: "Sun & Earth".to_string(),
                parameters: planetary_parameters(1.3e-9),
                bodies: vec![sun(), earth(EARTH_ORBIT_RADIUS, EARTH_ORBITAL_SPEED)],
            },
            Preset::SunEarthMoon => ScenarioConfig {
                name: "Sun, Earth & Moon".to_string(),
                parameters: planetary_parameters(1.3e-9),
                bodies: vec![
                    sun(),
                    earth(EARTH_ORBIT_RADIUS, EARTH_ORBITAL_SPEED),
                    moon(
                        EARTH_ORBIT_RADIUS + MOON_ORBIT_RADIUS,
                        EARTH_ORBITAL_SPEED + MOON_ORBITAL_SPEED,
                    ),
                ],
            },
            Preset::EarthMoon => {
                // Give Earth the counter-velocity that zeroes the pair's total
                // momentum, so the system does not drift out of frame.
                let earth_recoil = -MOON_ORBITAL_SPEED * MOON_MASS / EARTH_MASS;
                let e = earth(0.0, earth_recoil);
                ScenarioConfig {
                    name: "Earth & Moon".to_string(),
                    parameters: planetary_parameters(4.0e-7),
                    bodies: vec![e, moon(MOON_ORBIT_RADIUS, MOON_ORBITAL_SPEED)],
                }
            }
            Preset::EarthSpaceStation => {
                let mut e = earth(0.0, 0.0);
                e.fixed = true;
                // Circular-orbit speed at the station's altitude
                let v = (GRAVITATIONAL_CONSTANT * EARTH_MASS / SPACE_STATION_ORBIT_RADIUS).sqrt();
                ScenarioConfig {
                    name: "Earth & Space Station".to_string(),
                    parameters: ParametersConfig {
                        dt: 10.0,
                        g: GRAVITATIONAL_CONSTANT,
                        force_scale: 1.0,
                        zoom: 2.0e-5,
                        min_separation: 1.0,
                        collisions: true,
                    },
                    bodies: vec![
                        e,
                        BodyConfig {
                            name: "Space Station".to_string(),
                            mass: SPACE_STATION_MASS,
                            radius: SPACE_STATION_RADIUS,
                            position: [SPACE_STATION_ORBIT_RADIUS, 0.0],
                            velocity: [0.0, v],
                            fixed: false,
                            rotation_period: None,
                            mass_settable: true,
                            mass_range: Some([1.0e4, 2.0e6]),
                        },
                    ],
                }
            }
        }
    }
}

fn planetary_parameters(zoom: f64) -> ParametersConfig {
    ParametersConfig {
        dt: 3600.0,
        g: GRAVITATIONAL_CONSTANT,
        force_scale: 1.0,
        zoom,
        min_separation: 1.0,
        collisions: true,
    }
}

fn sun() -> BodyConfig {
    BodyConfig {
        name: "Sun".to_string(),
        mass: SUN_MASS,
        radius: SUN_RADIUS,
        position: [0.0, 0.0],
        velocity: [0.0, 0.0],
        fixed: true,
        rotation_period: None,
        mass_settable: false,
        mass_range: None,
    }
}

fn earth(x: f64, vy: f64) -> BodyConfig {
    BodyConfig {
        name: "Earth".to_string(),
        mass: EARTH_MASS,
        radius: EARTH_RADIUS,
        position: [x, 0.0],
        velocity: [0.0, vy],
        fixed: false,
        rotation_period: Some(EARTH_ROTATION_PERIOD),
        mass_settable: true,
        mass_range: Some([0.5 * EARTH_MASS, 2.0 * EARTH_MASS]),
    }
}

fn moon(x: f64, vy: f64) -> BodyConfig {
    BodyConfig {
        name: "Moon".to_string(),
        mass: MOON_MASS,
        radius: MOON_RADIUS,
        position: [x, 0.0],
        velocity: [0.0, vy],
        fixed: false,
        rotation_period: None,
        mass_settable: false,
        mass_range: None,
    }
}
