//! The selection state machine.
//!
//! [`Select`] owns the selected value, the query text, the open flag, the
//! focused option, and the set of surfaces it is drawn on. Every transition
//! is a synchronous method call made by the host in response to one event.
//!
//! # Invariants
//!
//! 1. A closed list has no focused option and an empty query.
//! 2. `focused_index`, when set, is always `< options().len()`.
//! 3. Whenever the option list is recomputed while open, focus moves to the
//!    first option (or to none if the list is empty).
//! 4. `on_change` fires after every value mutation and never for the initial
//!    value; `on_input` fires only when the query text actually changes.
//! 5. While disabled, no pick, keyboard, or open transition has any effect.
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | Value shape does not match mode | [`SelectError::IncompatibleValue`] |
//! | Focus move with zero options | Focus stays at none |
//! | Pick of a disabled option | No-op |
//! | Host callback panics | Propagates to the host |

use std::fmt;

use crate::error::SelectError;
use crate::key::{KeyOutcome, SelectKey};
use crate::surface::{SurfaceId, SurfaceRegistry, SurfaceRole};
use crate::value::{Mode, SelectValue, externalize, normalize};

type ValueFn<O, V> = Box<dyn Fn(&O) -> V>;
type PredicateFn<O> = Box<dyn Fn(&O) -> bool>;
type ChangeFn<V> = Box<dyn FnMut(&SelectValue<V>)>;
type InputFn = Box<dyn FnMut(&str)>;
type NotifyFn = Box<dyn FnMut()>;

/// Where the option list comes from.
pub enum Source<O> {
    /// A fixed list; the query text does not affect it.
    Static(Vec<O>),
    /// Recomputed from the query text whenever that text changes.
    Dynamic(Box<dyn Fn(&str) -> Vec<O>>),
}

impl<O> Source<O> {
    pub fn dynamic(provider: impl Fn(&str) -> Vec<O> + 'static) -> Self {
        Self::Dynamic(Box::new(provider))
    }

    fn resolve(&self, input: &str) -> Vec<O>
    where
        O: Clone,
    {
        match self {
            Self::Static(options) => options.clone(),
            Self::Dynamic(provider) => provider(input),
        }
    }
}

impl<O> From<Vec<O>> for Source<O> {
    fn from(options: Vec<O>) -> Self {
        Self::Static(options)
    }
}

impl<O: fmt::Debug> fmt::Debug for Source<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(options) => f.debug_tuple("Static").field(options).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Focus direction for [`Select::focus_next`] and [`Select::focus_previous`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Next,
    Previous,
}

/// What a container click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum ClickOutcome {
    /// The list was toggled; the host should move focus to the input surface.
    Toggled,
    /// The click landed inside the option list or the select is disabled.
    Ignored,
}

/// Whether a focus loss left the select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum FocusOutcome {
    /// Focus moved to another owned surface; nothing changed.
    Retained,
    /// Focus left; the list closed and the select deactivated.
    Left,
}

/// Read-only view of a [`Select`] for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectSnapshot<V> {
    pub value: SelectValue<V>,
    pub input_value: String,
    pub is_open: bool,
    pub focused_index: Option<usize>,
    pub is_active: bool,
    pub is_disabled: bool,
    pub input_hidden: bool,
    pub option_count: usize,
}

/// Builder for [`Select`].
pub struct SelectBuilder<O, V> {
    source: Source<O>,
    option_to_value: ValueFn<O, V>,
    initial_value: Option<SelectValue<V>>,
    mode: Mode,
    disabled: bool,
    is_option_disabled: Option<PredicateFn<O>>,
    on_change: Option<ChangeFn<V>>,
    on_input: Option<InputFn>,
    on_focus: Option<NotifyFn>,
    on_blur: Option<NotifyFn>,
}

impl<O, V> SelectBuilder<O, V> {
    /// Select in multiple mode.
    #[must_use]
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.mode = if multiple { Mode::Multiple } else { Mode::Single };
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Initial value; its shape is checked against the mode in [`build`](Self::build).
    #[must_use]
    pub fn initial_value(mut self, value: SelectValue<V>) -> Self {
        self.initial_value = Some(value);
        self
    }

    #[must_use]
    pub fn is_option_disabled(mut self, predicate: impl Fn(&O) -> bool + 'static) -> Self {
        self.is_option_disabled = Some(Box::new(predicate));
        self
    }

    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(&SelectValue<V>) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_input(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_input = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_focus(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_focus = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_blur(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_blur = Some(Box::new(callback));
        self
    }

    /// Validate the initial value and compute the first option list.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::IncompatibleValue`] when the initial value's
    /// shape does not match the mode.
    pub fn build(self) -> Result<Select<O, V>, SelectError>
    where
        O: Clone,
    {
        let value = match self.initial_value {
            Some(value) => normalize(self.mode, value)?,
            None => Vec::new(),
        };
        let options = self.source.resolve("");
        tracing::debug!(
            mode = %self.mode,
            options = options.len(),
            disabled = self.disabled,
            "select built"
        );
        Ok(Select {
            source: self.source,
            options,
            option_to_value: self.option_to_value,
            is_option_disabled: self.is_option_disabled,
            mode: self.mode,
            value,
            input_value: String::new(),
            is_open: false,
            focused: None,
            is_active: false,
            input_hidden: false,
            disabled: self.disabled,
            surfaces: SurfaceRegistry::new(),
            on_change: self.on_change,
            on_input: self.on_input,
            on_focus: self.on_focus,
            on_blur: self.on_blur,
        })
    }
}

/// Headless select/combobox state.
///
/// `O` is the option type shown in the list and `V` the value an option
/// resolves to when picked.
///
/// # Example
///
/// ```
/// use selkit_core::{Select, SelectKey, SelectValue};
///
/// let mut select = Select::builder(vec!["red", "green", "blue"]).build()?;
/// select.open();
/// assert_eq!(select.focused_index(), Some(0));
///
/// let _ = select.handle_key(SelectKey::Next);
/// let _ = select.handle_key(SelectKey::Commit);
/// assert_eq!(select.value(), SelectValue::single("green"));
/// assert!(!select.is_open());
/// # Ok::<(), selkit_core::SelectError>(())
/// ```
pub struct Select<O, V> {
    source: Source<O>,
    options: Vec<O>,
    option_to_value: ValueFn<O, V>,
    is_option_disabled: Option<PredicateFn<O>>,
    mode: Mode,
    value: Vec<V>,
    input_value: String,
    is_open: bool,
    focused: Option<usize>,
    is_active: bool,
    input_hidden: bool,
    disabled: bool,
    surfaces: SurfaceRegistry,
    on_change: Option<ChangeFn<V>>,
    on_input: Option<InputFn>,
    on_focus: Option<NotifyFn>,
    on_blur: Option<NotifyFn>,
}

impl<O: Clone + 'static> Select<O, O> {
    /// Start a select whose options are their own values.
    pub fn builder(source: impl Into<Source<O>>) -> SelectBuilder<O, O> {
        Self::builder_with(source, O::clone)
    }
}

impl<O, V> Select<O, V> {
    /// Start a select that maps each picked option through `option_to_value`.
    pub fn builder_with(
        source: impl Into<Source<O>>,
        option_to_value: impl Fn(&O) -> V + 'static,
    ) -> SelectBuilder<O, V> {
        SelectBuilder {
            source: source.into(),
            option_to_value: Box::new(option_to_value),
            initial_value: None,
            mode: Mode::Single,
            disabled: false,
            is_option_disabled: None,
            on_change: None,
            on_input: None,
            on_focus: None,
            on_blur: None,
        }
    }
}

impl<O: Clone, V> Select<O, V> {
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn is_multiple(&self) -> bool {
        self.mode.is_multiple()
    }

    /// Selected values in pick order.
    #[must_use]
    pub fn values(&self) -> &[V] {
        &self.value
    }

    #[must_use]
    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }

    /// The current option list for the current query.
    #[must_use]
    pub fn options(&self) -> &[O] {
        &self.options
    }

    #[must_use]
    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    #[must_use]
    pub fn focused_option(&self) -> Option<&O> {
        self.focused.and_then(|index| self.options.get(index))
    }

    /// Whether `option` is the focused one.
    #[must_use]
    pub fn is_option_focused(&self, option: &O) -> bool
    where
        O: PartialEq,
    {
        self.focused_option() == Some(option)
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// True after a single-mode pick until the input regains focus, so the
    /// host shows the selected value instead of the text box.
    #[must_use]
    pub fn is_input_hidden(&self) -> bool {
        self.input_hidden
    }

    #[must_use]
    pub fn option_disabled(&self, option: &O) -> bool {
        self.is_option_disabled
            .as_ref()
            .is_some_and(|predicate| predicate(option))
    }

    pub fn register_surface(&mut self, id: SurfaceId, role: SurfaceRole) {
        self.surfaces.register(id, role);
    }

    pub fn unregister_surface(&mut self, id: SurfaceId) -> Option<SurfaceRole> {
        self.surfaces.unregister(id)
    }

    #[must_use]
    pub fn surfaces(&self) -> &SurfaceRegistry {
        &self.surfaces
    }

    /// Open the list, focusing the first option if none is focused.
    pub fn open(&mut self) {
        if self.disabled || self.is_open {
            return;
        }
        self.is_open = true;
        tracing::debug!(options = self.options.len(), "select opened");
        if self.focused.is_none() {
            self.move_focus(Direction::Next);
        }
        self.input_hidden = false;
    }

    /// Close the list, dropping focus and the query text.
    pub fn close(&mut self) {
        if !self.is_open {
            return;
        }
        self.is_open = false;
        self.focused = None;
        tracing::debug!("select closed");
        self.replace_input(String::new());
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn focus_next(&mut self) {
        if !self.disabled {
            self.move_focus(Direction::Next);
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.disabled {
            self.move_focus(Direction::Previous);
        }
    }

    /// Focus a specific option, e.g. under the pointer.
    ///
    /// Out-of-range indices clear focus. A valid index opens a closed list.
    pub fn set_focused_index(&mut self, index: Option<usize>) {
        if self.disabled {
            return;
        }
        self.focused = index.filter(|i| *i < self.options.len());
        if self.focused.is_some() {
            self.open();
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled == disabled {
            return;
        }
        if disabled {
            self.close();
        }
        self.disabled = disabled;
        tracing::debug!(disabled, "select disabled state changed");
    }

    /// Replace the option source and recompute the list.
    pub fn set_source(&mut self, source: impl Into<Source<O>>) {
        self.source = source.into();
        self.recompute_options();
    }

    /// Re-run the option source for the current query text.
    ///
    /// Hosts call this when data behind a dynamic source changed without the
    /// text changing, e.g. when an async fetch lands.
    pub fn refresh_options(&mut self) {
        self.recompute_options();
    }

    /// The select gained focus.
    pub fn focus_in(&mut self) {
        self.input_hidden = false;
        if !self.is_active {
            self.is_active = true;
            if let Some(callback) = self.on_focus.as_mut() {
                callback();
            }
        }
    }

    /// Focus left one of the owned surfaces for `related`.
    ///
    /// When `related` is another owned surface the list stays as it is.
    /// Otherwise the list closes and the select deactivates.
    pub fn focus_out(&mut self, related: Option<SurfaceId>) -> FocusOutcome {
        if related.is_some_and(|target| self.surfaces.owns(target)) {
            return FocusOutcome::Retained;
        }
        self.close();
        if self.is_active {
            self.is_active = false;
            if let Some(callback) = self.on_blur.as_mut() {
                callback();
            }
        }
        FocusOutcome::Left
    }

    /// A pointer was pressed on `target`.
    ///
    /// Returns true when the host should suppress its default action so the
    /// text input keeps focus.
    #[must_use]
    pub fn pointer_down(&self, target: SurfaceId) -> bool {
        match self.surfaces.role_of(target) {
            Some(SurfaceRole::List) => true,
            Some(SurfaceRole::Input) => false,
            Some(SurfaceRole::Container) | None => self.surfaces.has_role(SurfaceRole::Input),
        }
    }

    /// A click landed on `target`; clicks outside the option list toggle it.
    pub fn click(&mut self, target: SurfaceId) -> ClickOutcome {
        if self.disabled || self.surfaces.role_of(target) == Some(SurfaceRole::List) {
            return ClickOutcome::Ignored;
        }
        self.toggle();
        ClickOutcome::Toggled
    }

    fn move_focus(&mut self, direction: Direction) {
        let count = self.options.len();
        if count == 0 {
            self.focused = None;
            return;
        }
        let next = match (self.focused, direction) {
            (None, Direction::Next) => 0,
            (None, Direction::Previous) => count - 1,
            (Some(index), Direction::Next) => (index + 1) % count,
            (Some(0), Direction::Previous) => count - 1,
            (Some(index), Direction::Previous) => index - 1,
        };
        self.focused = Some(next);
        tracing::trace!(focused = next, "option focused");
        if !self.is_open {
            self.open();
        }
    }

    fn notify_input(&mut self) {
        if let Some(callback) = self.on_input.as_mut() {
            callback(&self.input_value);
        }
    }

    fn replace_input(&mut self, text: String) -> bool {
        if self.input_value == text {
            return false;
        }
        self.input_value = text;
        self.notify_input();
        if matches!(self.source, Source::Dynamic(_)) {
            self.recompute_options();
        }
        true
    }

    fn recompute_options(&mut self) {
        self.options = self.source.resolve(&self.input_value);
        tracing::trace!(
            input = %self.input_value,
            options = self.options.len(),
            "options recomputed"
        );
        if self.is_open {
            self.focused = if self.options.is_empty() { None } else { Some(0) };
        } else {
            self.focused = self.focused.filter(|i| *i < self.options.len());
        }
    }
}

impl<O: Clone, V: Clone> Select<O, V> {
    /// The selection in its external shape.
    #[must_use]
    pub fn value(&self) -> SelectValue<V> {
        externalize(self.mode, &self.value)
    }

    /// Replace the selection.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::IncompatibleValue`] when the shape does not
    /// match the mode; the stored value is left untouched.
    pub fn set_value(&mut self, value: SelectValue<V>) -> Result<(), SelectError> {
        let values = normalize(self.mode, value)?;
        self.store_value(values);
        Ok(())
    }

    pub fn clear_value(&mut self) {
        self.store_value(Vec::new());
    }

    /// Remove the value at `index`, returning it.
    pub fn remove_value_at(&mut self, index: usize) -> Option<V> {
        if index >= self.value.len() {
            return None;
        }
        let mut values = self.value.clone();
        let removed = values.remove(index);
        self.store_value(values);
        Some(removed)
    }

    /// Select `option`; a no-op for disabled options or a disabled select.
    ///
    /// Multiple mode appends the option's value, single mode replaces the
    /// value and hides the text input. Both close the list.
    pub fn pick_option(&mut self, option: &O) {
        if self.disabled || self.option_disabled(option) {
            return;
        }
        let value = (self.option_to_value)(option);
        self.commit(value);
    }

    /// Pick the focused option of an open list. Returns whether one was picked.
    pub fn pick_focused(&mut self) -> bool {
        if self.disabled || !self.is_open {
            return false;
        }
        let Some(option) = self.focused_option().cloned() else {
            return false;
        };
        if self.option_disabled(&option) {
            return false;
        }
        self.pick_option(&option);
        true
    }

    /// Update the query text.
    ///
    /// Non-empty text opens a closed list. Dynamic sources are recomputed
    /// only when the text differs from the current one.
    pub fn set_input_value(&mut self, text: impl Into<String>) {
        if self.disabled {
            return;
        }
        if !self.replace_input(text.into()) {
            return;
        }
        if !self.input_value.is_empty() && !self.is_open {
            self.open();
        }
    }

    /// Apply a logical key.
    pub fn handle_key(&mut self, key: SelectKey) -> KeyOutcome {
        if self.disabled {
            return KeyOutcome::Ignored;
        }
        match key {
            SelectKey::Next => {
                self.move_focus(Direction::Next);
                KeyOutcome::Consumed
            }
            SelectKey::Previous => {
                self.move_focus(Direction::Previous);
                KeyOutcome::Consumed
            }
            SelectKey::Commit => {
                if self.is_open && self.focused.is_some() {
                    self.pick_focused();
                    KeyOutcome::Consumed
                } else {
                    KeyOutcome::Ignored
                }
            }
            SelectKey::Dismiss => {
                if self.is_open {
                    self.close();
                    KeyOutcome::Consumed
                } else {
                    KeyOutcome::Ignored
                }
            }
            SelectKey::DeleteBackward => {
                if !self.input_value.is_empty() {
                    return KeyOutcome::Ignored;
                }
                match self.mode {
                    Mode::Multiple => {
                        if let Some(last) = self.value.len().checked_sub(1) {
                            self.remove_value_at(last);
                        }
                    }
                    Mode::Single => self.clear_value(),
                }
                KeyOutcome::Consumed
            }
            SelectKey::Space => {
                if !self.input_value.is_empty() {
                    return KeyOutcome::Ignored;
                }
                if !self.is_open {
                    self.open();
                } else if self.focused.is_some() {
                    self.pick_focused();
                }
                KeyOutcome::Consumed
            }
            SelectKey::Tab => {
                if self.is_open && self.focused.is_some() {
                    self.pick_focused();
                    KeyOutcome::Consumed
                } else {
                    KeyOutcome::Ignored
                }
            }
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SelectSnapshot<V> {
        SelectSnapshot {
            value: self.value(),
            input_value: self.input_value.clone(),
            is_open: self.is_open,
            focused_index: self.focused,
            is_active: self.is_active,
            is_disabled: self.disabled,
            input_hidden: self.input_hidden,
            option_count: self.options.len(),
        }
    }

    fn commit(&mut self, value: V) {
        match self.mode {
            Mode::Multiple => {
                let mut values = self.value.clone();
                values.push(value);
                self.store_value(values);
            }
            Mode::Single => {
                self.store_value(vec![value]);
                self.input_hidden = true;
            }
        }
        tracing::debug!(mode = %self.mode, count = self.value.len(), "option picked");
        self.close();
    }

    fn store_value(&mut self, values: Vec<V>) {
        self.value = values;
        let external = self.value();
        if let Some(callback) = self.on_change.as_mut() {
            callback(&external);
        }
    }
}

impl<O: fmt::Debug, V: fmt::Debug> fmt::Debug for Select<O, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("mode", &self.mode)
            .field("value", &self.value)
            .field("input_value", &self.input_value)
            .field("is_open", &self.is_open)
            .field("focused", &self.focused)
            .field("is_active", &self.is_active)
            .field("disabled", &self.disabled)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
