//! Per-frame input resource.
//!
//! The front end translates its device events into [`InputAction`] presses
//! and releases; states and entities only ever see actions. Edges
//! (`just_pressed`/`just_released`) stay set until [`InputState::end_frame`],
//! which the driver calls after each simulated step so an edge is observed by
//! exactly one step even when a frame drains several.
use glam::Vec2;
use rustc_hash::FxHashMap;

/// Logical actions the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Up,
    Down,
    Left,
    Right,
    /// Shoot in game, continue on the game-over screen.
    Fire,
    /// Start a game from the menu, save in the editor.
    Confirm,
    /// Leave the current mode; quits from the menu.
    Back,
    /// Open the formation editor from the menu.
    Editor,
    /// Primary pointer button (place/drag in the editor).
    PointerPrimary,
    /// Secondary pointer button (remove in the editor).
    PointerSecondary,
}

impl InputAction {
    pub const ALL: [InputAction; 10] = [
        InputAction::Up,
        InputAction::Down,
        InputAction::Left,
        InputAction::Right,
        InputAction::Fire,
        InputAction::Confirm,
        InputAction::Back,
        InputAction::Editor,
        InputAction::PointerPrimary,
        InputAction::PointerSecondary,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean action state.
pub struct BoolState {
    /// Whether the action is currently held.
    pub active: bool,
    /// Whether the action was pressed since the last step.
    pub just_pressed: bool,
    /// Whether the action was released since the last step.
    pub just_released: bool,
}

/// Action states plus the pointer position in playfield coordinates.
#[derive(Debug, Clone)]
pub struct InputState {
    states: FxHashMap<InputAction, BoolState>,
    pointer: Vec2,
}

impl Default for InputState {
    fn default() -> Self {
        let states = InputAction::ALL
            .iter()
            .map(|action| (*action, BoolState::default()))
            .collect();
        Self {
            states,
            pointer: Vec2::ZERO,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: InputAction) {
        let state = self.states.entry(action).or_default();
        if !state.active {
            state.just_pressed = true;
        }
        state.active = true;
    }

    pub fn release(&mut self, action: InputAction) {
        let state = self.states.entry(action).or_default();
        if state.active {
            state.just_released = true;
        }
        state.active = false;
    }

    pub fn get(&self, action: InputAction) -> BoolState {
        self.states.get(&action).copied().unwrap_or_default()
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.get(action).active
    }

    pub fn just_pressed(&self, action: InputAction) -> bool {
        self.get(action).just_pressed
    }

    pub fn just_released(&self, action: InputAction) -> bool {
        self.get(action).just_released
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn set_pointer(&mut self, position: Vec2) {
        self.pointer = position;
    }

    /// Clear the edges; held actions stay held.
    pub fn end_frame(&mut self) {
        for state in self.states.values_mut() {
            state.just_pressed = false;
            state.just_released = false;
        }
    }

    /// Release everything without producing edges.
    pub fn reset(&mut self) {
        for state in self.states.values_mut() {
            *state = BoolState::default();
        }
    }
}
