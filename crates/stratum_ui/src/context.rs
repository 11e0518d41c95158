//! Layers and the per-frame focus arbitration loop.
//!
//! # Ordering
//!
//! Layer 0 is the FRONT layer. Focus walks front to back and paints walk
//! back to front, so whatever wins the mouse is also drawn on top. Both
//! walks go through `layers_front_to_back_mut` and `layers_back_to_front`;
//! nothing else iterates layers.
//!
//! Inside a layer, elements are visited in insertion order for both.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, trace, warn};

use crate::config::UiConfig;
use crate::geometry::Vec2;
use crate::input::{Key, MouseButton};
use crate::render::Surface;
use crate::widget::UiElement;

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Handle to an element owned by a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    fn next() -> Self {
        Self(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

struct Entry {
    id: ElementId,
    element: Box<dyn UiElement>,
}

/// Ordered elements. Earlier elements take the mouse first.
#[derive(Default)]
pub struct Layer {
    entries: Vec<Entry>,
}

impl Layer {
    /// Creates an empty layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element behind everything already in the layer.
    pub fn add_element(&mut self, element: impl UiElement) -> ElementId {
        let index = self.entries.len();
        self.insert_element(index, element)
    }

    /// Inserts an element in front of everything already in the layer.
    pub fn insert_front_element(&mut self, element: impl UiElement) -> ElementId {
        self.insert_element(0, element)
    }

    /// Inserts an element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > self.len()`.
    pub fn insert_element(&mut self, index: usize, element: impl UiElement) -> ElementId {
        let id = ElementId::next();
        self.entries.insert(
            index,
            Entry {
                id,
                element: Box::new(element),
            },
        );
        id
    }

    /// Removes an element, returning it.
    pub fn remove(&mut self, id: ElementId) -> Option<Box<dyn UiElement>> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index).element)
    }

    /// Looks an element up.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&dyn UiElement> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.element.as_ref())
    }

    /// Looks an element up for mutation.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut dyn UiElement> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| entry.element.as_mut())
    }

    /// Element ids in visiting order.
    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the layer has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Owns the layers and runs one update and one draw pass per frame.
pub struct UiContext {
    layers: Vec<Layer>,
    focused: Option<ElementId>,
    captured: Option<ElementId>,
}

impl UiContext {
    /// Creates a context with `number_of_layers` empty layers.
    ///
    /// Zero layers is coerced to one with a warning.
    #[must_use]
    pub fn new(number_of_layers: usize) -> Self {
        let count = if number_of_layers == 0 {
            warn!(number_of_layers, "invalid number of layers, using 1");
            1
        } else {
            number_of_layers
        };
        Self {
            layers: (0..count).map(|_| Layer::new()).collect(),
            focused: None,
            captured: None,
        }
    }

    /// Creates a context with the configured layer count.
    #[must_use]
    pub fn from_config(config: &UiConfig) -> Self {
        Self::new(config.layers)
    }

    /// Number of layers.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Layer by index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn layer(&self, index: usize) -> &Layer {
        &self.layers[index]
    }

    /// Mutable layer by index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn layer_mut(&mut self, index: usize) -> &mut Layer {
        &mut self.layers[index]
    }

    /// Layer 0: highest mouse priority, painted last.
    pub fn front_layer(&mut self) -> &mut Layer {
        &mut self.layers[0]
    }

    /// Last layer: lowest mouse priority, painted first.
    pub fn back_layer(&mut self) -> &mut Layer {
        let last = self.layers.len() - 1;
        &mut self.layers[last]
    }

    /// Appends an element to a layer.
    ///
    /// # Panics
    ///
    /// Panics if `layer` is out of range.
    pub fn append_element(&mut self, layer: usize, element: impl UiElement) -> ElementId {
        self.layers[layer].add_element(element)
    }

    /// Inserts an element at the front of a layer.
    ///
    /// # Panics
    ///
    /// Panics if `layer` is out of range.
    pub fn insert_front_element(&mut self, layer: usize, element: impl UiElement) -> ElementId {
        self.layers[layer].insert_front_element(element)
    }

    /// Inserts an element at `index` in a layer.
    ///
    /// # Panics
    ///
    /// Panics if `layer` or `index` is out of range.
    pub fn insert_element(&mut self, layer: usize, index: usize, element: impl UiElement) -> ElementId {
        self.layers[layer].insert_element(index, element)
    }

    /// Typed access to an element.
    #[must_use]
    pub fn element<T: UiElement>(&self, id: ElementId) -> Option<&T> {
        self.layers
            .iter()
            .find_map(|layer| layer.get(id))
            .and_then(|element| element.as_any().downcast_ref::<T>())
    }

    /// Typed mutable access to an element.
    pub fn element_mut<T: UiElement>(&mut self, id: ElementId) -> Option<&mut T> {
        self.layers
            .iter_mut()
            .find_map(|layer| layer.get_mut(id))
            .and_then(|element| element.as_any_mut().downcast_mut::<T>())
    }

    /// Removes an element from whichever layer holds it.
    ///
    /// Releases focus and pointer capture held by it.
    pub fn remove_element(&mut self, id: ElementId) -> Option<Box<dyn UiElement>> {
        let removed = self.layers.iter_mut().find_map(|layer| layer.remove(id))?;
        if self.captured == Some(id) {
            self.captured = None;
        }
        if self.focused == Some(id) {
            self.focused = None;
        }
        debug!(id = id.raw(), "element removed");
        Some(removed)
    }

    /// Element that owned the mouse in the last update.
    #[must_use]
    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// Element holding the pointer into the next update.
    #[must_use]
    pub fn captured(&self) -> Option<ElementId> {
        self.captured
    }

    /// Runs one frame of focus arbitration.
    ///
    /// The first element, front layer first, that reports a collision or
    /// is active claims the mouse; every element after it is updated with
    /// `mouse_claimed = true`. An element still active at the end of the
    /// frame captures the pointer: next frame every other element is
    /// updated as if the mouse were claimed.
    ///
    /// `mouse_keys` is indexed by [`MouseButton`]; only the left button
    /// is forwarded and a missing entry reads as released.
    pub fn update_state(&mut self, mouse_position: Vec2, mouse_keys: &[Key], delta_time: f32) {
        let left = mouse_keys
            .get(MouseButton::Left.index())
            .copied()
            .unwrap_or_default();
        let captured = self.captured;
        let mut mouse_claimed = false;
        let mut focused = None;
        let mut still_active = None;

        for layer in self.layers_front_to_back_mut() {
            for entry in &mut layer.entries {
                let blocked = mouse_claimed || captured.is_some_and(|owner| owner != entry.id);
                entry.element.on_update(blocked, mouse_position, left, delta_time);

                let active = entry.element.active();
                if entry.element.collides_with_mouse() || active {
                    mouse_claimed = true;
                    focused.get_or_insert(entry.id);
                }
                if active {
                    still_active.get_or_insert(entry.id);
                }
            }
        }

        if still_active != captured {
            debug!(from = ?captured, to = ?still_active, "pointer capture changed");
        }
        trace!(?focused, "focus resolved");
        self.focused = focused;
        self.captured = still_active;
    }

    /// Draws every element, back layer first.
    pub fn draw_elements(&self, surface: &mut dyn Surface) {
        for layer in self.layers_back_to_front() {
            for entry in &layer.entries {
                entry.element.draw(surface);
            }
        }
    }

    /// Focus order.
    fn layers_front_to_back_mut(&mut self) -> impl Iterator<Item = &mut Layer> {
        self.layers.iter_mut()
    }

    /// Paint order: the reverse of focus order.
    fn layers_back_to_front(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().rev()
    }
}
