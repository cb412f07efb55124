//! Dock magnification engine.
//!
//! Pure simulation of the cursor-proximity magnification effect: each dock item
//! carries a target scale derived from its distance to the pointer, and an
//! animation step eases the current scale toward the target. The view layer owns
//! the animation frame loop; it calls [`DockMagnifier::step`] once per frame and
//! pauses the loop when the engine reports itself settled, so an idle dock costs
//! nothing per frame.

/// Scale applied to an item directly under the pointer.
pub const MAX_SCALE: f64 = 1.8;
/// Scale of items outside the influence radius.
pub const BASE_SCALE: f64 = 1.0;
/// Horizontal distance (px) over which magnification falls off to the base scale.
pub const INFLUENCE_RADIUS_PX: f64 = 150.0;
/// Fraction of the remaining distance to the target covered per animation frame.
pub const APPROACH_FACTOR: f64 = 0.15;
/// Scales closer than this to their target snap and count as settled.
pub const SETTLE_EPSILON: f64 = 0.001;
/// Exponent shaping the falloff curve; larger keeps neighbors flatter.
pub const FALLOFF_EXPONENT: f64 = 1.5;
/// Horizontal push (px) contributed per unit of excess scale of a preceding item.
pub const PUSH_PER_SCALE_PX: f64 = 24.0;
/// Vertical lift (px) per unit of excess scale of the item itself.
pub const LIFT_PER_SCALE_PX: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Animated visual state for one dock item.
pub struct DockItemVisualState {
    /// Horizontal center of the item at rest, in dock-local pixels.
    pub center_x: f64,
    pub current_scale: f64,
    pub target_scale: f64,
}

impl DockItemVisualState {
    fn at_rest(center_x: f64) -> Self {
        Self {
            center_x,
            current_scale: BASE_SCALE,
            target_scale: BASE_SCALE,
        }
    }
}

/// Target scale for an item whose center sits `distance` px from the pointer.
/// Yields [`MAX_SCALE`] at zero distance and [`BASE_SCALE`] at or beyond the
/// influence radius, with an eased falloff in between.
pub fn target_scale_for_distance(distance: f64) -> f64 {
    let distance = distance.abs();
    if distance >= INFLUENCE_RADIUS_PX {
        return BASE_SCALE;
    }
    let eased = 1.0 - (distance / INFLUENCE_RADIUS_PX).powf(FALLOFF_EXPONENT);
    BASE_SCALE + (MAX_SCALE - BASE_SCALE) * eased
}

#[derive(Debug, Clone, PartialEq)]
/// Magnification state for the whole dock, one entry per item in dock order.
pub struct DockMagnifier {
    items: Vec<DockItemVisualState>,
}

impl DockMagnifier {
    /// Builds the engine from the resting center of each dock item.
    pub fn new(item_centers: impl IntoIterator<Item = f64>) -> Self {
        Self {
            items: item_centers
                .into_iter()
                .map(DockItemVisualState::at_rest)
                .collect(),
        }
    }

    /// Re-measures resting centers (e.g. after a viewport resize) while keeping
    /// the current animation state of items that survive.
    pub fn set_item_centers(&mut self, item_centers: impl IntoIterator<Item = f64>) {
        let centers: Vec<f64> = item_centers.into_iter().collect();
        if centers.len() != self.items.len() {
            self.items = centers
                .into_iter()
                .map(DockItemVisualState::at_rest)
                .collect();
            return;
        }
        for (item, center_x) in self.items.iter_mut().zip(centers) {
            item.center_x = center_x;
        }
    }

    pub fn items(&self) -> &[DockItemVisualState] {
        &self.items
    }

    /// Updates every item's target scale from the pointer's dock-local x.
    /// Returns true when any target changed enough to need animation frames.
    pub fn pointer_moved(&mut self, pointer_x: f64) -> bool {
        let mut needs_frames = false;
        for item in &mut self.items {
            let target = target_scale_for_distance(pointer_x - item.center_x);
            if (target - item.target_scale).abs() > f64::EPSILON {
                item.target_scale = target;
            }
            if (item.current_scale - item.target_scale).abs() > SETTLE_EPSILON {
                needs_frames = true;
            }
        }
        needs_frames
    }

    /// Pointer left the dock: everything eases back to the base scale.
    /// Returns true when animation frames are still needed.
    pub fn pointer_left(&mut self) -> bool {
        for item in &mut self.items {
            item.target_scale = BASE_SCALE;
        }
        !self.is_settled()
    }

    /// Advances every item one animation frame toward its target.
    /// Returns true while further frames are needed.
    pub fn step(&mut self) -> bool {
        let mut animating = false;
        for item in &mut self.items {
            let delta = item.target_scale - item.current_scale;
            if delta.abs() <= SETTLE_EPSILON {
                item.current_scale = item.target_scale;
            } else {
                item.current_scale += delta * APPROACH_FACTOR;
                animating = true;
            }
        }
        animating
    }

    /// True when every item rests exactly at its target scale.
    pub fn is_settled(&self) -> bool {
        self.items
            .iter()
            .all(|item| (item.current_scale - item.target_scale).abs() <= SETTLE_EPSILON)
    }

    /// Horizontal offset for the item at `index`: the accumulated push from the
    /// magnification of every item before it, keeping neighbors from overlapping.
    pub fn offset_x(&self, index: usize) -> f64 {
        self.items
            .iter()
            .take(index)
            .map(|item| (item.current_scale - BASE_SCALE) * PUSH_PER_SCALE_PX)
            .sum()
    }

    /// Vertical lift for the item at `index`, proportional to its own scale.
    pub fn lift_y(&self, index: usize) -> f64 {
        self.items
            .get(index)
            .map_or(0.0, |item| (item.current_scale - BASE_SCALE) * LIFT_PER_SCALE_PX)
    }

    /// Current scale for the item at `index`.
    pub fn scale(&self, index: usize) -> f64 {
        self.items
            .get(index)
            .map_or(BASE_SCALE, |item| item.current_scale)
    }
}
