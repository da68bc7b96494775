//! The dock engine.
//!
//! `Dock` composes the geometry provider, magnification calculator,
//! position resolver, interaction tracker, and particle field behind one
//! update loop. Input events (pointer move, pointer leave, activate) only
//! update input state and make sure a frame is scheduled; every piece of
//! animation happens inside the frame handler, so a renderer reading
//! [`Dock::snapshot`] between updates never observes a half-stepped item
//! set.
//!
//! The frame loop keeps the at-most-one invariant the same way the rest of
//! the engine's loops do: each instance has an id, each generation of the
//! loop a tag, and a `pending` flag guards scheduling. A frame message
//! whose id or tag doesn't match the live loop is dropped on arrival,
//! which is also how [`Dock::shutdown`] cancels callbacks it can no longer
//! reach.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, trace};

use kinetic::{Point, Smoothing, fps};

use crate::command::{Cmd, batch};
use crate::config::{DockConfig, ToolSpec};
use crate::interaction::InteractionTracker;
use crate::layout::{center_of, resolved_position, resting_positions};
use crate::magnify::target_scales;
use crate::message::{Message, ToolActivatedMsg};
use crate::particles::{FieldTickMsg, ParticleField};
use crate::snapshot::{DockSnapshot, ItemRender, ParticleRender};

/// Global ID counter for dock instances.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Message indicating that an item animation frame should occur.
#[derive(Debug, Clone, Copy)]
pub struct FrameMsg {
    /// The dock ID this frame is for.
    pub id: u64,
    /// Tag for message ordering.
    tag: u64,
}

/// Message ending an item's click flash.
#[derive(Debug, Clone, Copy)]
pub struct ClickExpiredMsg {
    /// The dock ID this expiry is for.
    pub id: u64,
    /// Item index whose flash ends.
    index: usize,
    /// The arming press's token; stale tokens are ignored.
    token: u64,
}

/// One tool's animated state.
#[derive(Debug, Clone)]
struct DockItem {
    spec: ToolSpec,
    resting: Point,
    column: usize,
    current_scale: f64,
    target_scale: f64,
    current_pos: Point,
    target_pos: Point,
}

impl DockItem {
    fn at_rest(spec: ToolSpec, resting: Point, column: usize) -> Self {
        Self {
            spec,
            resting,
            column,
            current_scale: 1.0,
            target_scale: 1.0,
            current_pos: resting,
            target_pos: resting,
        }
    }
}

/// The dock engine instance.
///
/// See the [crate docs](crate) for the embedding contract. In short:
/// forward input events, execute returned commands, feed produced messages
/// into [`update`](Self::update), read [`snapshot`](Self::snapshot) to
/// paint, and call [`shutdown`](Self::shutdown) before dropping the engine
/// while callbacks may still be in flight.
#[derive(Debug)]
pub struct Dock {
    id: u64,
    tag: u64,
    frame_pending: bool,

    items: Vec<DockItem>,
    pointer: Option<Point>,
    tracker: InteractionTracker,
    field: ParticleField,

    config: DockConfig,
    active: Smoothing,
    settle: Smoothing,
    rng: StdRng,
    last_pointer_accept: Option<Instant>,
}

impl Dock {
    /// Creates a dock from tool descriptors and tuning.
    ///
    /// The config is normalized on receipt; construction never fails.
    #[must_use]
    pub fn new(tools: Vec<ToolSpec>, config: DockConfig) -> Self {
        Self::build(tools, config, StdRng::from_entropy())
    }

    /// Creates a dock whose particle jitter is reproducible.
    #[must_use]
    pub fn with_seed(tools: Vec<ToolSpec>, config: DockConfig, seed: u64) -> Self {
        Self::build(tools, config, StdRng::seed_from_u64(seed))
    }

    fn build(tools: Vec<ToolSpec>, config: DockConfig, rng: StdRng) -> Self {
        let config = config.normalized();
        let positions =
            resting_positions(tools.len(), config.columns, config.item_size, config.spacing);
        let items: Vec<DockItem> = tools
            .into_iter()
            .zip(positions)
            .enumerate()
            .map(|(i, (spec, resting))| DockItem::at_rest(spec, resting, i % config.columns))
            .collect();

        let tracker = InteractionTracker::new(items.len());
        let field = ParticleField::new(&config);
        let active = Smoothing::new(config.active_lerp, config.epsilon);
        let settle = Smoothing::new(config.settle_lerp, config.epsilon);

        Self {
            id: next_id(),
            tag: 0,
            frame_pending: false,
            items,
            pointer: None,
            tracker,
            field,
            config,
            active,
            settle,
            rng,
            last_pointer_accept: None,
        }
    }

    /// Returns the dock's unique ID.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The normalized configuration in effect.
    #[must_use]
    pub fn config(&self) -> &DockConfig {
        &self.config
    }

    /// Number of tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the dock holds no tools.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The current pointer position, if the pointer is over the dock.
    #[must_use]
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Whether an action is in flight dock-wide.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.tracker.loading()
    }

    /// Whether either engine loop still has a frame scheduled.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.frame_pending || self.field.is_scheduled()
    }

    /// Whether everything is at its target, the pointer is absent, and no
    /// particles are live — the state in which the engine schedules
    /// nothing at all.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.pointer.is_none()
            && self.field.is_empty()
            && self.items.iter().all(|item| {
                self.settle
                    .converged(item.current_scale, item.target_scale)
                    && self
                        .settle
                        .converged_point(item.current_pos, item.target_pos)
            })
    }

    // -------------------------------------------------------------------
    // Input surface
    // -------------------------------------------------------------------

    /// Handles a pointer-move event in dock-local coordinates.
    ///
    /// Events arriving faster than the configured throttle are dropped;
    /// the frame loop picks up the latest accepted position, so input rate
    /// never dictates tick rate. Returns the command that keeps the item
    /// loop running, if one needs scheduling.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Option<Cmd> {
        let p = Point::new(x, y);
        if !p.is_finite() {
            return None;
        }

        let now = Instant::now();
        if let Some(last) = self.last_pointer_accept {
            if now.duration_since(last) < self.config.pointer_throttle {
                return None;
            }
        }
        self.last_pointer_accept = Some(now);

        self.pointer = Some(p);
        let mask = self.enabled_mask();
        self.tracker.hover(self.hit_test(p), &mask);
        self.retarget();
        self.ensure_frame()
    }

    /// Handles the pointer leaving the dock.
    pub fn on_pointer_leave(&mut self) -> Option<Cmd> {
        self.pointer = None;
        self.last_pointer_accept = None;
        let mask = self.enabled_mask();
        self.tracker.hover(None, &mask);
        self.retarget();
        self.ensure_frame()
    }

    /// Handles a click on the tool with the given id.
    ///
    /// Disabled tools, unknown ids, and clicks while an action is in
    /// flight are silent no-ops. A successful activation arms the click
    /// flash, spawns a particle burst at the item's current center, emits
    /// a [`ToolActivatedMsg`] for the host's business logic, and keeps
    /// both loops scheduled.
    pub fn on_activate(&mut self, id: &str) -> Option<Cmd> {
        let Some(index) = self.items.iter().position(|item| item.spec.id == id) else {
            debug!(id, "activation ignored: unknown tool");
            return None;
        };

        let mask = self.enabled_mask();
        let token = self.tracker.press(index, &mask)?;

        let (origin, color, tool_id) = {
            let item = &self.items[index];
            let scaled_size = self.config.item_size * item.current_scale;
            (
                center_of(item.current_pos, scaled_size),
                item.spec.color,
                item.spec.id.clone(),
            )
        };

        self.field.spawn(origin, color, &mut self.rng);
        let kick = self.field.kick();
        let expiry = self.click_expiry(index, token);
        let notify = Cmd::new(move || Message::new(ToolActivatedMsg { id: tool_id }));
        let frame = self.ensure_frame();

        debug!(index, "tool activated");
        batch(vec![Some(notify), Some(expiry), kick, frame])
    }

    /// Sets the dock-wide loading latch. While set, activations are
    /// no-ops; magnification and hover are unaffected.
    pub fn set_loading(&mut self, loading: bool) {
        self.tracker.set_loading(loading);
    }

    /// Replaces the tool list and relayouts the grid.
    ///
    /// Tools that keep their id also keep their in-flight scale and
    /// position, so a settings change doesn't make surviving items jump.
    pub fn set_tools(&mut self, tools: Vec<ToolSpec>) -> Option<Cmd> {
        let positions =
            resting_positions(tools.len(), self.config.columns, self.config.item_size, self.config.spacing);
        let old = std::mem::take(&mut self.items);

        self.items = tools
            .into_iter()
            .zip(positions)
            .enumerate()
            .map(|(i, (spec, resting))| {
                let column = i % self.config.columns;
                match old.iter().find(|item| item.spec.id == spec.id) {
                    Some(survivor) => DockItem {
                        spec,
                        resting,
                        column,
                        current_scale: survivor.current_scale,
                        target_scale: survivor.target_scale,
                        current_pos: survivor.current_pos,
                        target_pos: survivor.target_pos,
                    },
                    None => DockItem::at_rest(spec, resting, column),
                }
            })
            .collect();

        self.tracker.set_tool_count(self.items.len());
        self.retarget();
        self.ensure_frame()
    }

    /// Replaces the tuning, re-normalizing it and relayouting the grid.
    pub fn set_config(&mut self, config: DockConfig) -> Option<Cmd> {
        self.config = config.normalized();
        self.active = Smoothing::new(self.config.active_lerp, self.config.epsilon);
        self.settle = Smoothing::new(self.config.settle_lerp, self.config.epsilon);
        self.field.configure(&self.config);

        let positions = resting_positions(
            self.items.len(),
            self.config.columns,
            self.config.item_size,
            self.config.spacing,
        );
        for (i, (item, resting)) in self.items.iter_mut().zip(positions).enumerate() {
            item.resting = resting;
            item.column = i % self.config.columns;
        }

        self.retarget();
        self.ensure_frame()
    }

    // -------------------------------------------------------------------
    // Update loop
    // -------------------------------------------------------------------

    /// Advances the engine in response to a message.
    ///
    /// Frame messages for a stale loop generation are dropped. Messages
    /// the engine doesn't recognize (including [`ToolActivatedMsg`], which
    /// belongs to the host) return `None` untouched.
    pub fn update(&mut self, msg: Message) -> Option<Cmd> {
        if let Some(frame) = msg.downcast_ref::<FrameMsg>() {
            if frame.id != self.id || frame.tag != self.tag {
                return None;
            }
            return self.step_frame();
        }

        if let Some(expired) = msg.downcast_ref::<ClickExpiredMsg>() {
            if expired.id != self.id {
                return None;
            }
            let hovered = self.pointer.and_then(|p| self.hit_test(p));
            self.tracker.expire(expired.index, expired.token, hovered);
            return None;
        }

        if msg.is::<FieldTickMsg>() {
            return self.field.update(msg);
        }

        None
    }

    /// Builds a frame message carrying the loop's current tag.
    ///
    /// Hosts with their own frame clock (and the headless driver) use this
    /// to drive item animation without scheduled commands.
    #[must_use]
    pub fn frame_msg(&self) -> Message {
        Message::new(FrameMsg {
            id: self.id,
            tag: self.tag,
        })
    }

    /// Builds the particle field's tick message, for the same manual
    /// scheduling mode as [`frame_msg`](Self::frame_msg).
    #[must_use]
    pub fn particle_msg(&self) -> Message {
        self.field.tick_msg()
    }

    /// Cancels every scheduled callback.
    ///
    /// Both loop generations are bumped, so frames already sleeping in a
    /// host scheduler are rejected when they land. Idempotent; call before
    /// dropping the engine while callbacks may be in flight.
    pub fn shutdown(&mut self) {
        self.tag = self.tag.wrapping_add(1);
        self.frame_pending = false;
        self.field.cancel();
        trace!("dock shut down");
    }

    // -------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------

    /// The current render state.
    #[must_use]
    pub fn snapshot(&self) -> DockSnapshot {
        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| ItemRender {
                id: item.spec.id.clone(),
                color: item.spec.color,
                scale: item.current_scale,
                x: item.current_pos.x,
                y: item.current_pos.y,
                hovered: self.tracker.is_hovered(i),
                clicked: self.tracker.is_clicked(i),
                enabled: item.spec.enabled,
            })
            .collect();

        let particles = self
            .field
            .particles()
            .iter()
            .map(|p| ParticleRender {
                x: p.position.x,
                y: p.position.y,
                color: p.color,
                size: p.size,
                opacity: p.opacity(),
            })
            .collect();

        DockSnapshot {
            items,
            particles,
            animating: self.is_animating(),
        }
    }

    // -------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------

    /// One item animation tick.
    fn step_frame(&mut self) -> Option<Cmd> {
        self.frame_pending = false;
        self.retarget();

        if !self.config.animations_enabled {
            for item in &mut self.items {
                item.current_scale = item.target_scale;
                item.current_pos = item.target_pos;
            }
            trace!("item loop parked (animations disabled)");
            return None;
        }

        let smoothing = if self.pointer.is_some() {
            self.active
        } else {
            self.settle
        };

        for item in &mut self.items {
            item.current_scale = smoothing.step(item.current_scale, item.target_scale);
            item.current_pos = smoothing.step_point(item.current_pos, item.target_pos);
        }

        let converged = self.items.iter().all(|item| {
            smoothing.converged(item.current_scale, item.target_scale)
                && smoothing.converged_point(item.current_pos, item.target_pos)
        });

        if converged && self.pointer.is_none() {
            // Settle exactly on the target so rest really is rest
            for item in &mut self.items {
                item.current_scale = item.target_scale;
                item.current_pos = item.target_pos;
            }
            trace!("item loop parked");
            return None;
        }

        self.frame_pending = true;
        Some(self.next_frame())
    }

    /// Recomputes target scales and positions from the current pointer.
    fn retarget(&mut self) {
        let centers: Vec<Point> = self
            .items
            .iter()
            .map(|item| center_of(item.resting, self.config.item_size))
            .collect();
        let scales = target_scales(
            self.pointer,
            &centers,
            self.config.effect_radius,
            self.config.max_magnification,
        );

        for (item, scale) in self.items.iter_mut().zip(scales) {
            let scale = if item.spec.enabled { scale } else { 1.0 };
            item.target_scale = scale;
            item.target_pos = resolved_position(
                item.resting,
                scale,
                self.config.item_size,
                self.config.shift_factor,
                item.column,
                self.config.columns,
            );
        }
    }

    /// The item under the pointer, by resting bounds.
    fn hit_test(&self, p: Point) -> Option<usize> {
        let size = self.config.item_size;
        self.items.iter().position(|item| {
            p.x >= item.resting.x
                && p.x <= item.resting.x + size
                && p.y >= item.resting.y
                && p.y <= item.resting.y + size
        })
    }

    fn enabled_mask(&self) -> Vec<bool> {
        self.items.iter().map(|item| item.spec.enabled).collect()
    }

    /// Schedules a frame unless one is already pending.
    fn ensure_frame(&mut self) -> Option<Cmd> {
        if self.frame_pending {
            return None;
        }
        self.frame_pending = true;
        trace!("frame scheduled");
        Some(self.next_frame())
    }

    /// Creates the command for the next scheduled frame.
    fn next_frame(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let delay = fps(self.config.frame_rate);

        Cmd::new(move || {
            std::thread::sleep(delay);
            Message::new(FrameMsg { id, tag })
        })
    }

    /// Creates the command that ends a click flash.
    fn click_expiry(&self, index: usize, token: u64) -> Cmd {
        let id = self.id;
        let delay = self.config.click_flash;

        Cmd::new(move || {
            std::thread::sleep(delay);
            Message::new(ClickExpiredMsg { id, index, token })
        })
    }
}
