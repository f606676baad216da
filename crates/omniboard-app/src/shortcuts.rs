//! Keyboard shortcut mapping and registry.

/// Edit intents dispatched to the session by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditIntent {
    Undo,
    Redo,
}

/// Modifier keys state as delivered by the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Primary modifier: Ctrl everywhere, Cmd on macOS.
    pub fn primary(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Map a key press to an edit intent: primary+Z undoes, primary+Shift+Z
/// redoes, primary+Y is a redo alias.
pub fn edit_intent(key: &str, modifiers: Modifiers) -> Option<EditIntent> {
    if !modifiers.primary() {
        return None;
    }
    match key {
        "z" | "Z" => Some(if modifiers.shift {
            EditIntent::Redo
        } else {
            EditIntent::Undo
        }),
        "y" | "Y" if !modifiers.shift => Some(EditIntent::Redo),
        _ => None,
    }
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Z", true, false, "Undo"),
            Shortcut::new("Z", true, true, "Redo"),
            Shortcut::new("Y", true, false, "Redo"),
        ]
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:16} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }
}
