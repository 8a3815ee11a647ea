//! What the command menu shows for the current search.
//!
//! Sections appear in a fixed order: an exact shortcut match, then people,
//! companies and notes, then the partially matching navigation commands.
//! A remote section is present only when its own rows are non-empty.

use super::commands::{match_commands, navigation_commands, CommandMatch, NavigationCommand};
use super::state::CommandMenuState;
use crate::domain::logo::logo_url;
use crate::domain::models::{RecordId, Route};

pub const EMPTY_STATE: &str = "No results found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Navigate,
    People,
    Companies,
    Notes,
}

impl SectionKind {
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            SectionKind::Navigate => "Navigate",
            SectionKind::People => "People",
            SectionKind::Companies => "Companies",
            SectionKind::Notes => "Notes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuIcon {
    None,
    Avatar {
        placeholder: String,
        color_seed: RecordId,
        image_url: Option<String>,
    },
    Notes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuTarget {
    Navigate(Route),
    OpenActivity(RecordId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub icon: MenuIcon,
    pub shortcuts: Vec<&'static str>,
    pub target: MenuTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub kind: SectionKind,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRow {
    Heading(SectionKind),
    Item(usize),
    Empty,
}

#[must_use]
pub fn build_sections(menu: &CommandMenuState<'_>, logo_base_url: &str) -> Vec<MenuSection> {
    let search = menu.search_text();
    let matched = match_commands(&search, navigation_commands());
    let mut sections = Vec::new();

    if let CommandMatch::Exact(cmd) = &matched {
        sections.push(navigate_section(vec![*cmd]));
    }

    if !menu.people.rows.is_empty() {
        sections.push(MenuSection {
            kind: SectionKind::People,
            items: menu
                .people
                .rows
                .iter()
                .map(|person| MenuItem {
                    label: person.display_name(),
                    icon: MenuIcon::Avatar {
                        placeholder: person.display_name(),
                        color_seed: person.id.clone(),
                        image_url: None,
                    },
                    shortcuts: Vec::new(),
                    target: MenuTarget::Navigate(Route::person(&person.id)),
                })
                .collect(),
        });
    }

    if !menu.companies.rows.is_empty() {
        sections.push(MenuSection {
            kind: SectionKind::Companies,
            items: menu
                .companies
                .rows
                .iter()
                .map(|company| MenuItem {
                    label: company.name.clone(),
                    icon: MenuIcon::Avatar {
                        placeholder: company.name.clone(),
                        color_seed: company.id.clone(),
                        image_url: logo_url(logo_base_url, &company.domain_name),
                    },
                    shortcuts: Vec::new(),
                    target: MenuTarget::Navigate(Route::company(&company.id)),
                })
                .collect(),
        });
    }

    if !menu.activities.rows.is_empty() {
        sections.push(MenuSection {
            kind: SectionKind::Notes,
            items: menu
                .activities
                .rows
                .iter()
                .map(|activity| MenuItem {
                    label: activity.label().to_string(),
                    icon: MenuIcon::Notes,
                    shortcuts: Vec::new(),
                    target: MenuTarget::OpenActivity(activity.id.clone()),
                })
                .collect(),
        });
    }

    if let CommandMatch::Partial(cmds) = matched {
        sections.push(navigate_section(cmds));
    }

    sections
}

fn navigate_section(commands: Vec<&NavigationCommand>) -> MenuSection {
    MenuSection {
        kind: SectionKind::Navigate,
        items: commands
            .into_iter()
            .map(|cmd| MenuItem {
                label: cmd.label.to_string(),
                icon: MenuIcon::None,
                shortcuts: cmd.shortcuts.to_vec(),
                target: MenuTarget::Navigate(Route::from(cmd.to)),
            })
            .collect(),
    }
}

/// Items in render order, the space the highlight moves through.
#[must_use]
pub fn flatten(sections: &[MenuSection]) -> Vec<&MenuItem> {
    sections.iter().flat_map(|s| s.items.iter()).collect()
}

/// Visual rows: headings of non-empty sections and their items, or the
/// empty-state line when there is nothing to select.
#[must_use]
pub fn rows(sections: &[MenuSection]) -> Vec<MenuRow> {
    let mut rows = Vec::new();
    let mut index = 0;
    for section in sections.iter().filter(|s| !s.items.is_empty()) {
        rows.push(MenuRow::Heading(section.kind));
        for _ in &section.items {
            rows.push(MenuRow::Item(index));
            index += 1;
        }
    }
    if rows.is_empty() {
        rows.push(MenuRow::Empty);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::logo::DEFAULT_LOGO_BASE_URL;
    use crate::domain::models::{Activity, Company, Person};

    fn menu_with(search: &str) -> CommandMenuState<'static> {
        let mut menu = CommandMenuState::default();
        menu.search.set_text(search);
        menu
    }

    fn kinds(sections: &[MenuSection]) -> Vec<SectionKind> {
        sections
            .iter()
            .filter(|s| !s.items.is_empty())
            .map(|s| s.kind)
            .collect()
    }

    #[test]
    fn test_exact_match_renders_first_and_alone() {
        let mut menu = menu_with("gp");
        menu.people.rows = vec![Person {
            id: "p1".into(),
            first_name: "Gina".to_string(),
            last_name: "Park".to_string(),
        }];
        let sections = build_sections(&menu, DEFAULT_LOGO_BASE_URL);

        assert_eq!(kinds(&sections), vec![SectionKind::Navigate, SectionKind::People]);
        let labels: Vec<_> = flatten(&sections).iter().map(|i| i.label.clone()).collect();
        assert_eq!(labels, vec!["Go to People", "Gina Park"]);
    }

    #[test]
    fn test_remote_sections_are_independent() {
        let mut menu = menu_with("acme");
        menu.companies.rows = vec![Company {
            id: "c1".into(),
            name: "Acme".to_string(),
            domain_name: "acme.com".to_string(),
        }];
        let sections = build_sections(&menu, DEFAULT_LOGO_BASE_URL);

        assert_eq!(kinds(&sections), vec![SectionKind::Companies]);
        let item = &sections[0].items[0];
        assert_eq!(item.target, MenuTarget::Navigate(Route::from("/companies/c1")));
        assert!(matches!(
            &item.icon,
            MenuIcon::Avatar { image_url: Some(url), .. } if url.contains("acme.com")
        ));
    }

    #[test]
    fn test_notes_open_side_panel() {
        let mut menu = menu_with("kick");
        menu.activities.rows = vec![Activity {
            id: "a1".into(),
            title: None,
            body: "kickoff".to_string(),
            created_at: None,
        }];
        let sections = build_sections(&menu, DEFAULT_LOGO_BASE_URL);
        let items = flatten(&sections);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "");
        assert_eq!(items[0].target, MenuTarget::OpenActivity("a1".into()));
    }

    #[test]
    fn test_empty_search_lists_all_navigation() {
        let sections = build_sections(&menu_with(""), DEFAULT_LOGO_BASE_URL);
        assert_eq!(flatten(&sections).len(), navigation_commands().len());
        assert_eq!(rows(&sections)[0], MenuRow::Heading(SectionKind::Navigate));
    }

    #[test]
    fn test_nothing_matches_shows_empty_state() {
        let sections = build_sections(&menu_with("zzz"), DEFAULT_LOGO_BASE_URL);
        assert!(flatten(&sections).is_empty());
        assert_eq!(rows(&sections), vec![MenuRow::Empty]);
    }
}
