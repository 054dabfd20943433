use std::fmt;
use std::rc::Rc;

use swipekit_ui_graphics::Color;

/// What an action does to its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActionRole {
    #[default]
    Normal,
    /// Irreversible removal. Tinted red by default and eligible for the
    /// collapse-and-commit full swipe.
    Destructive,
}

/// One button revealed behind a row.
///
/// `label` is whatever the rendering layer draws for the button; it is
/// carried through untouched.
pub struct SwipeAction<L = String> {
    role: ActionRole,
    tint: Option<Color>,
    label: L,
    on_activate: Rc<dyn Fn()>,
}

impl<L> SwipeAction<L> {
    pub fn new(label: L, on_activate: impl Fn() + 'static) -> Self {
        Self {
            role: ActionRole::Normal,
            tint: None,
            label,
            on_activate: Rc::new(on_activate),
        }
    }

    pub fn destructive(label: L, on_activate: impl Fn() + 'static) -> Self {
        Self::new(label, on_activate).with_role(ActionRole::Destructive)
    }

    pub fn with_role(mut self, role: ActionRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = Some(tint);
        self
    }

    pub fn role(&self) -> ActionRole {
        self.role
    }

    pub fn is_destructive(&self) -> bool {
        self.role == ActionRole::Destructive
    }

    pub fn tint(&self) -> Option<Color> {
        self.tint
    }

    /// The tint override, or the role's default.
    pub fn resolved_tint(&self) -> Color {
        self.tint.unwrap_or(match self.role {
            ActionRole::Destructive => Color::SYSTEM_RED,
            ActionRole::Normal => Color::SYSTEM_GRAY,
        })
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    pub(crate) fn callback(&self) -> Rc<dyn Fn()> {
        Rc::clone(&self.on_activate)
    }
}

impl<L: Clone> Clone for SwipeAction<L> {
    fn clone(&self) -> Self {
        Self {
            role: self.role,
            tint: self.tint,
            label: self.label.clone(),
            on_activate: Rc::clone(&self.on_activate),
        }
    }
}

impl<L: fmt::Debug> fmt::Debug for SwipeAction<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeAction")
            .field("role", &self.role)
            .field("tint", &self.tint)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
