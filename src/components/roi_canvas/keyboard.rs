// Copyright 2025 the ROI Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Keyboard shortcuts for RoiCanvasWidget

use super::RoiCanvasWidget;
use masonry::core::EventCtx;
use masonry::core::keyboard::{Key, KeyState, KeyboardEvent, NamedKey};

/// What a key press asks the editor to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Shortcut {
    Undo,
    Clear,
    Save,
}

/// Map a key press to a shortcut. `cmd` is Ctrl or Cmd.
pub(super) fn shortcut_for(key: &Key, cmd: bool) -> Option<Shortcut> {
    match key {
        Key::Character(c) if cmd && c.eq_ignore_ascii_case("z") => Some(Shortcut::Undo),
        Key::Character(c) if cmd && c.eq_ignore_ascii_case("s") => Some(Shortcut::Save),
        Key::Named(NamedKey::Delete) => Some(Shortcut::Clear),
        _ => None,
    }
}

impl RoiCanvasWidget {
    pub(super) fn handle_key(&mut self, ctx: &mut EventCtx<'_>, key_event: &KeyboardEvent) {
        if key_event.state != KeyState::Down {
            return;
        }

        let cmd = key_event.modifiers.meta() || key_event.modifiers.ctrl();
        let Some(shortcut) = shortcut_for(&key_event.key, cmd) else {
            return;
        };
        tracing::debug!("[RoiCanvasWidget] shortcut {:?}", shortcut);

        let outcome = match shortcut {
            Shortcut::Undo => self.session.undo(),
            Shortcut::Clear => self.session.clear(),
            Shortcut::Save => {
                self.emit_update(ctx, true);
                ctx.set_handled();
                return;
            }
        };

        if outcome.is_committed() {
            self.emit_update(ctx, false);
            ctx.request_render();
        }
        ctx.set_handled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts_need_command_modifier() {
        let z = Key::Character("z".into());
        let s = Key::Character("S".into());
        assert_eq!(shortcut_for(&z, true), Some(Shortcut::Undo));
        assert_eq!(shortcut_for(&z, false), None);
        assert_eq!(shortcut_for(&s, true), Some(Shortcut::Save));
        assert_eq!(
            shortcut_for(&Key::Named(NamedKey::Delete), false),
            Some(Shortcut::Clear)
        );
        assert_eq!(shortcut_for(&Key::Named(NamedKey::Backspace), false), None);
    }
}
