use serenity::all::{ButtonStyle, CreateActionRow, CreateButton, ReactionType};

pub const MIN_CONTROLS: usize = 2;
pub const MAX_CONTROLS: usize = 5;

/// What pressing a control does to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Previous,
    Next,
    Delete,
    First,
    Last,
    /// Jump to a zero based page, clamped to the last page.
    Jump(usize),
}

impl PageAction {
    /// The action a control gets from its position when none was set explicitly.
    pub fn for_position(index: usize) -> Option<Self> {
        match index {
            0 => Some(PageAction::Previous),
            1 => Some(PageAction::Next),
            2 => Some(PageAction::Delete),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ControlKind {
    Button { custom_id: String, style: ButtonStyle },
    Link { url: String },
}

/// One button of the navigation row.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub kind: ControlKind,
    pub label: Option<String>,
    pub emoji: Option<ReactionType>,
    pub disabled: bool,
    pub action: Option<PageAction>,
}

impl Control {
    pub fn button<S: Into<String>>(custom_id: S) -> Self {
        Self {
            kind: ControlKind::Button {
                custom_id: custom_id.into(),
                style: ButtonStyle::Primary,
            },
            label: None,
            emoji: None,
            disabled: false,
            action: None,
        }
    }

    /// Link buttons are accepted here so they can be rejected with a proper error later.
    pub fn link<S: Into<String>>(url: S) -> Self {
        Self {
            kind: ControlKind::Link { url: url.into() },
            label: None,
            emoji: None,
            disabled: false,
            action: None,
        }
    }

    pub fn label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn emoji<E: Into<ReactionType>>(mut self, emoji: E) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    /// Ignored for link buttons.
    pub fn style(mut self, style: ButtonStyle) -> Self {
        if let ControlKind::Button { style: current, .. } = &mut self.kind {
            *current = style;
        }
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Wires the control to `action` regardless of its position.
    pub fn action(mut self, action: PageAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn custom_id(&self) -> Option<&str> {
        match &self.kind {
            ControlKind::Button { custom_id, .. } => Some(custom_id),
            ControlKind::Link { .. } => None,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self.kind, ControlKind::Link { .. })
    }

    pub fn to_button(&self) -> CreateButton {
        let mut button = match &self.kind {
            ControlKind::Button { custom_id, style } => {
                CreateButton::new(custom_id.clone()).style(*style)
            }
            ControlKind::Link { url } => CreateButton::new_link(url.clone()),
        };
        if let Some(label) = &self.label {
            button = button.label(label.clone());
        }
        if let Some(emoji) = &self.emoji {
            button = button.emoji(emoji.clone());
        }
        button.disabled(self.disabled)
    }
}

/// Maps each wired control id to its action, in control order.
///
/// Explicit actions win over positional ones, and extras without an explicit
/// action are left out so presses on them are never collected.
pub fn routes(controls: &[Control]) -> Vec<(String, PageAction)> {
    controls
        .iter()
        .enumerate()
        .filter_map(|(index, control)| {
            let action = control.action.or_else(|| PageAction::for_position(index))?;
            Some((control.custom_id()?.to_string(), action))
        })
        .collect()
}

/// Copies of `controls` that can no longer be pressed.
pub fn disabled_controls(controls: &[Control]) -> Vec<Control> {
    controls
        .iter()
        .cloned()
        .map(|control| control.disabled(true))
        .collect()
}

pub fn action_row(controls: &[Control]) -> CreateActionRow {
    CreateActionRow::Buttons(controls.iter().map(Control::to_button).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> Vec<Control> {
        vec![
            Control::button("prev").label("Previous"),
            Control::button("next").label("Next").style(ButtonStyle::Success),
        ]
    }

    #[test]
    fn positions_give_default_actions() {
        let mut controls = nav();
        controls.push(Control::button("del").style(ButtonStyle::Danger));
        controls.push(Control::button("extra"));

        assert_eq!(
            routes(&controls),
            vec![
                ("prev".to_string(), PageAction::Previous),
                ("next".to_string(), PageAction::Next),
                ("del".to_string(), PageAction::Delete),
            ]
        );
    }

    #[test]
    fn explicit_actions_override_position() {
        let controls = vec![
            Control::button("a").action(PageAction::Next),
            Control::button("b").action(PageAction::Previous),
            Control::button("c").action(PageAction::First),
            Control::button("d").action(PageAction::Jump(4)),
        ];

        let routes = routes(&controls);
        assert_eq!(routes[0].1, PageAction::Next);
        assert_eq!(routes[1].1, PageAction::Previous);
        assert_eq!(routes[2].1, PageAction::First);
        assert_eq!(routes[3], ("d".to_string(), PageAction::Jump(4)));
    }

    #[test]
    fn links_are_never_routed() {
        let controls = vec![Control::button("prev"), Control::link("https://example.com")];
        assert_eq!(routes(&controls).len(), 1);
        assert!(controls[1].is_link());
        assert_eq!(controls[1].custom_id(), None);
    }

    #[test]
    fn disabling_keeps_everything_else() {
        let controls = nav();
        let disabled = disabled_controls(&controls);

        assert_eq!(disabled.len(), controls.len());
        for (before, after) in controls.iter().zip(&disabled) {
            assert!(after.disabled);
            assert_eq!(before.kind, after.kind);
            assert_eq!(before.label, after.label);
            assert_eq!(before.action, after.action);
        }
        assert!(controls.iter().all(|c| !c.disabled));
    }

    #[test]
    fn style_is_ignored_on_links() {
        let link = Control::link("https://example.com").style(ButtonStyle::Danger);
        assert_eq!(
            link.kind,
            ControlKind::Link {
                url: "https://example.com".to_string()
            }
        );
    }
}
