#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationCommand {
    pub to: &'static str,
    pub label: &'static str,
    pub shortcuts: &'static [&'static str],
}

impl NavigationCommand {
    /// The shortcut letters joined and upper-cased, e.g. `GP`.
    #[must_use]
    pub fn shortcut_key(&self) -> String {
        self.shortcuts.concat().to_uppercase()
    }
}

// No two entries may share a shortcut key.
const NAVIGATION_COMMANDS: &[NavigationCommand] = &[
    NavigationCommand {
        to: "/people",
        label: "Go to People",
        shortcuts: &["G", "P"],
    },
    NavigationCommand {
        to: "/companies",
        label: "Go to Companies",
        shortcuts: &["G", "C"],
    },
    NavigationCommand {
        to: "/opportunities",
        label: "Go to Opportunities",
        shortcuts: &["G", "O"],
    },
    NavigationCommand {
        to: "/settings/profile",
        label: "Go to Settings",
        shortcuts: &["G", "S"],
    },
    NavigationCommand {
        to: "/tasks",
        label: "Go to Tasks",
        shortcuts: &["G", "T"],
    },
];

#[must_use]
pub fn navigation_commands() -> &'static [NavigationCommand] {
    NAVIGATION_COMMANDS
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandMatch<'a> {
    /// The search text spells out this command's shortcut.
    Exact(&'a NavigationCommand),
    /// Commands whose shortcut or label contains the search text.
    Partial(Vec<&'a NavigationCommand>),
}

impl<'a> CommandMatch<'a> {
    #[must_use]
    pub fn commands(&self) -> Vec<&'a NavigationCommand> {
        match self {
            CommandMatch::Exact(cmd) => vec![*cmd],
            CommandMatch::Partial(cmds) => cmds.clone(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, CommandMatch::Partial(cmds) if cmds.is_empty())
    }
}

#[must_use]
pub fn match_commands<'a>(search: &str, commands: &'a [NavigationCommand]) -> CommandMatch<'a> {
    let needle = search.to_uppercase();

    if let Some(cmd) = commands.iter().find(|cmd| cmd.shortcut_key() == needle) {
        return CommandMatch::Exact(cmd);
    }

    CommandMatch::Partial(
        commands
            .iter()
            .filter(|cmd| {
                cmd.shortcut_key().contains(&needle) || cmd.label.to_uppercase().contains(&needle)
            })
            .collect(),
    )
}
