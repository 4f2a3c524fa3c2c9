use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use serde::Deserialize;
use web_sys::CanvasRenderingContext2d;

use crate::constants::{
    ORBIT_GUIDE_ALPHA, PLANETS, STAR_COLOR, STAR_MAX_RADIUS, STAR_MAX_SPEED,
    STAR_VELOCITY_DIVISOR, TWINKLE_RATE,
};
use crate::rng::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarMotion {
    /// Stars stay put; alpha follows |sin(t + x + y)|
    Twinkle,
    /// Stars move by velocity/30 per tick and bounce off the edges
    Drift,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarfieldOptions {
    pub star_count: usize,
    pub motion: StarMotion,
    pub planets: bool,
}

#[derive(Debug, Clone)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
    pub alpha: f64,
}

#[derive(Debug, Clone)]
pub struct Planet {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub orbit_radius: f64,
    pub angle: f64,
    pub speed: f64,
    pub colors: [&'static str; 3],
}

pub struct Starfield {
    width: f64,
    height: f64,
    motion: StarMotion,
    stars: Vec<Star>,
    planets: Vec<Planet>,
    torn_down: bool,
}

pub type SharedStarfield = Rc<RefCell<Starfield>>;

impl Starfield {
    pub fn new(width: f64, height: f64, options: StarfieldOptions, rng: &mut Rng) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);

        let stars = (0..options.star_count)
            .map(|_| Star {
                x: rng.below(width),
                y: rng.below(height),
                radius: rng.below(STAR_MAX_RADIUS),
                vx: rng.int_inclusive(-STAR_MAX_SPEED, STAR_MAX_SPEED) as f64,
                vy: rng.int_inclusive(-STAR_MAX_SPEED, STAR_MAX_SPEED) as f64,
                alpha: rng.next_f64(),
            })
            .collect();

        let planets = if options.planets {
            PLANETS
                .iter()
                .map(|spec| {
                    let angle = rng.below(PI * 2.0);
                    Planet {
                        x: width / 2.0 + spec.orbit_radius * angle.cos(),
                        y: height / 2.0 + spec.orbit_radius * angle.sin(),
                        radius: spec.radius,
                        orbit_radius: spec.orbit_radius,
                        angle,
                        speed: spec.speed,
                        colors: spec.colors,
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        Starfield {
            width,
            height,
            motion: options.motion,
            stars,
            planets,
            torn_down: false,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Existing positions are kept as-is; stars left outside a shrunken
    /// surface drift back in through the reflection rule.
    pub fn resize(&mut self, width: f64, height: f64) {
        if self.torn_down {
            return;
        }
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Advance one frame. `elapsed` is wall-clock seconds, only used by
    /// the twinkle variant; drift speed is per tick.
    pub fn tick(&mut self, elapsed: f64) {
        if self.torn_down {
            return;
        }

        match self.motion {
            StarMotion::Twinkle => {
                for star in self.stars.iter_mut() {
                    star.alpha = (elapsed * TWINKLE_RATE + star.x + star.y).sin().abs();
                }
            }
            StarMotion::Drift => {
                let (w, h) = (self.width, self.height);
                for star in self.stars.iter_mut() {
                    star.x += star.vx / STAR_VELOCITY_DIVISOR;
                    star.y += star.vy / STAR_VELOCITY_DIVISOR;
                    // Only flip when heading outward, so a star parked
                    // outside the bounds after a resize doesn't jitter.
                    if (star.x < 0.0 && star.vx < 0.0) || (star.x > w && star.vx > 0.0) {
                        star.vx = -star.vx;
                    }
                    if (star.y < 0.0 && star.vy < 0.0) || (star.y > h && star.vy > 0.0) {
                        star.vy = -star.vy;
                    }
                }
            }
        }

        let cx = self.width / 2.0;
        let cy = self.height / 2.0;
        for planet in self.planets.iter_mut() {
            planet.angle += planet.speed;
            planet.x = cx + planet.orbit_radius * planet.angle.cos();
            planet.y = cy + planet.orbit_radius * planet.angle.sin();
        }
    }

    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        if self.torn_down {
            return;
        }

        ctx.clear_rect(0.0, 0.0, self.width, self.height);

        for star in &self.stars {
            ctx.set_fill_style_str(&format!("rgba({}, {:.3})", STAR_COLOR, star.alpha));
            ctx.begin_path();
            let _ = ctx.arc(star.x, star.y, star.radius, 0.0, PI * 2.0);
            ctx.fill();
        }

        let cx = self.width / 2.0;
        let cy = self.height / 2.0;
        for planet in &self.planets {
            if let Ok(gradient) = ctx.create_radial_gradient(
                planet.x, planet.y, 0.0, planet.x, planet.y, planet.radius,
            ) {
                let _ = gradient.add_color_stop(0.0_f32, planet.colors[0]);
                let _ = gradient.add_color_stop(0.5_f32, planet.colors[1]);
                let _ = gradient.add_color_stop(1.0_f32, planet.colors[2]);
                ctx.set_fill_style_canvas_gradient(&gradient);
                ctx.begin_path();
                let _ = ctx.arc(planet.x, planet.y, planet.radius, 0.0, PI * 2.0);
                ctx.fill();
            }

            ctx.set_stroke_style_str(&format!("rgba({}, {})", STAR_COLOR, ORBIT_GUIDE_ALPHA));
            ctx.set_line_width(1.0);
            ctx.begin_path();
            let _ = ctx.arc(cx, cy, planet.orbit_radius, 0.0, PI * 2.0);
            ctx.stroke();
        }
    }

    /// After teardown every operation is a no-op.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }
}
