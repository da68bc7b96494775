//! Particle burst simulation.
//!
//! Activating a tool spawns a ring of short-lived particles that drift
//! apart, slow under friction, sink under a light gravity bias, shrink,
//! and retire when their life counter reaches zero. The field owns its
//! particle collection exclusively and runs its own frame loop, separate
//! from the item animation loop: while particles exist a frame is
//! scheduled, and the loop parks itself the moment the collection drains.
//!
//! Life is a bounded, strictly decreasing counter by construction — a
//! particle cannot outlive `max_life` ticks no matter what the caller
//! does.

use std::f64::consts::TAU;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use rand::Rng;
use tracing::{debug, trace};

use kinetic::{Point, Vec2, fps};

use crate::color::Rgb;
use crate::command::Cmd;
use crate::config::DockConfig;
use crate::message::Message;

/// Global ID counter for particle fields.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Decorative palette blended into bursts alongside the item color.
const PALETTE: [Rgb; 5] = [
    Rgb::new(246, 193, 119), // gold
    Rgb::new(235, 111, 146), // coral
    Rgb::new(156, 207, 216), // teal
    Rgb::new(196, 167, 231), // lavender
    Rgb::new(224, 222, 244), // foam
];

/// Random perturbation applied to each particle's ring angle, in radians.
const ANGLE_JITTER: f64 = 0.25;
/// Initial speed range.
const MIN_SPEED: f64 = 3.0;
const MAX_SPEED: f64 = 7.0;
/// Initial size range.
const MIN_SIZE: f64 = 2.0;
const MAX_SIZE: f64 = 5.0;
/// Per-tick size retention.
const SHRINK: f64 = 0.99;
/// Probability that a particle takes the item color over the palette.
const ITEM_COLOR_BIAS: f64 = 0.6;

/// Message indicating the particle field should integrate one tick.
#[derive(Debug, Clone, Copy)]
pub struct FieldTickMsg {
    /// The particle field ID this tick is for.
    pub id: u64,
    /// Tag for message ordering.
    tag: u64,
}

/// A single burst particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Unique id within the field.
    pub id: u64,
    /// Current position.
    pub position: Point,
    /// Current velocity, applied each tick.
    pub velocity: Vec2,
    /// Render color, fixed at spawn.
    pub color: Rgb,
    /// Current render size; shrinks each tick.
    pub size: f64,
    /// Remaining ticks; the particle retires when this reaches zero.
    pub life: u32,
    /// Lifetime at spawn, kept for the opacity fade.
    pub max_life: u32,
}

impl Particle {
    /// Remaining life as a fade fraction in `[0, 1]`.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        if self.max_life == 0 {
            return 0.0;
        }
        f64::from(self.life) / f64::from(self.max_life)
    }
}

/// The particle collection and its self-scheduling frame loop.
#[derive(Debug)]
pub struct ParticleField {
    id: u64,
    tag: u64,
    pending: bool,
    particles: Vec<Particle>,
    next_particle_id: u64,

    enabled: bool,
    burst_count: usize,
    max_life: u32,
    gravity: f64,
    friction: f64,
    frame: Duration,
}

impl ParticleField {
    /// Creates an empty field tuned from a normalized config.
    #[must_use]
    pub fn new(config: &DockConfig) -> Self {
        Self {
            id: next_id(),
            tag: 0,
            pending: false,
            particles: Vec::new(),
            next_particle_id: 0,
            enabled: config.particles_enabled,
            burst_count: config.particle_count,
            max_life: config.particle_life,
            gravity: config.gravity,
            friction: config.friction,
            frame: fps(config.frame_rate),
        }
    }

    /// Re-reads tuning from a normalized config. Live particles keep the
    /// parameters they were born under only where stored per particle
    /// (`max_life`); gravity and friction apply from the next tick.
    pub fn configure(&mut self, config: &DockConfig) {
        self.enabled = config.particles_enabled;
        self.burst_count = config.particle_count;
        self.max_life = config.particle_life;
        self.gravity = config.gravity;
        self.friction = config.friction;
        self.frame = fps(config.frame_rate);
    }

    /// Returns the field's unique ID.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Number of live particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Returns true when no particles are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The live particles, for snapshotting.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Whether a frame callback is currently scheduled.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.pending
    }

    /// Spawns one burst at `origin`.
    ///
    /// Initial velocities are distributed evenly around a full circle with
    /// a little angular jitter and a randomized magnitude. Each particle
    /// takes the item color or a palette color, chosen per particle.
    /// Spawning zero particles (or spawning while disabled) is a no-op.
    pub fn spawn(&mut self, origin: Point, color: Rgb, rng: &mut impl Rng) {
        if !self.enabled || self.burst_count == 0 {
            trace!("burst suppressed: particles disabled or empty burst");
            return;
        }

        let n = self.burst_count;
        for i in 0..n {
            let angle = (i as f64 / n as f64) * TAU + rng.gen_range(-ANGLE_JITTER..=ANGLE_JITTER);
            let speed = rng.gen_range(MIN_SPEED..MAX_SPEED);
            let size = rng.gen_range(MIN_SIZE..MAX_SIZE);
            let color = if rng.gen_bool(ITEM_COLOR_BIAS) {
                color
            } else {
                PALETTE[rng.gen_range(0..PALETTE.len())]
            };

            self.next_particle_id += 1;
            self.particles.push(Particle {
                id: self.next_particle_id,
                position: origin,
                velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
                color,
                size,
                life: self.max_life,
                max_life: self.max_life,
            });
        }

        debug!(count = n, live = self.particles.len(), "burst spawned");
    }

    /// Integrates every particle one tick and retires the dead.
    ///
    /// Position advances by velocity, velocity decays under friction and
    /// gains the downward gravity bias, size shrinks, and life counts
    /// down. A particle whose life reaches zero is removed at the end of
    /// the same tick.
    pub fn integrate(&mut self) {
        for p in &mut self.particles {
            p.position += p.velocity;
            p.velocity *= self.friction;
            p.velocity.y += self.gravity;
            p.life = p.life.saturating_sub(1);
            p.size *= SHRINK;
        }
        self.particles.retain(|p| p.life > 0);
    }

    /// Builds a tick message carrying the field's current tag.
    ///
    /// Hosts with their own frame clock (and the headless driver) use this
    /// to drive the field without scheduled commands.
    #[must_use]
    pub fn tick_msg(&self) -> Message {
        Message::new(FieldTickMsg {
            id: self.id,
            tag: self.tag,
        })
    }

    /// Starts the frame loop if there is work and no frame is pending.
    pub fn kick(&mut self) -> Option<Cmd> {
        if self.particles.is_empty() || self.pending {
            return None;
        }
        self.pending = true;
        trace!(live = self.particles.len(), "particle loop started");
        Some(self.next_frame())
    }

    /// Handles a field tick message.
    ///
    /// Stale ids and tags are rejected. Returns the next frame command
    /// while particles remain; once the collection drains the loop parks
    /// and no further frame is scheduled.
    pub fn update(&mut self, msg: Message) -> Option<Cmd> {
        let Some(tick) = msg.downcast_ref::<FieldTickMsg>() else {
            return None;
        };
        if tick.id != self.id || tick.tag != self.tag {
            return None;
        }

        self.pending = false;
        self.integrate();

        if self.particles.is_empty() {
            trace!("particle loop parked");
            return None;
        }

        self.pending = true;
        Some(self.next_frame())
    }

    /// Cancels any scheduled frame. The in-flight callback, if one exists,
    /// becomes stale and is rejected on arrival.
    pub fn cancel(&mut self) {
        self.tag = self.tag.wrapping_add(1);
        self.pending = false;
        trace!("particle loop cancelled");
    }

    /// Creates the command for the next scheduled frame.
    fn next_frame(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let delay = self.frame;

        Cmd::new(move || {
            std::thread::sleep(delay);
            Message::new(FieldTickMsg { id, tag })
        })
    }
}
