//! Portfolio navigation state

use folio_config::{Profile, Project, ProjectCategory};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, FromRepr, IntoEnumIterator};

/// The sections of the portfolio, top to bottom
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumCount,
    FromRepr,
    Serialize,
    Deserialize,
)]
pub enum Section {
    #[default]
    Home,
    About,
    Tech,
    Projects,
    Certificates,
    Contact,
    Footer,
}

impl Section {
    /// Position of the section, 0-based
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn first() -> Self {
        Self::Home
    }

    pub fn last() -> Self {
        Self::Footer
    }

    /// The section below, or `self` at the bottom
    pub fn next(self) -> Self {
        Self::from_repr(self.index() + 1).unwrap_or(self)
    }

    /// The section above, or `self` at the top
    pub fn previous(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_repr)
            .unwrap_or(self)
    }

    /// Sections linked from the navigation bar
    pub fn anchors() -> impl Iterator<Item = Section> {
        Self::iter()
    }

    /// Fraction of the page scrolled when this section is shown
    pub fn scroll_progress(self) -> f64 {
        self.index() as f64 / (Self::COUNT - 1) as f64
    }
}

/// Project filter pills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum ProjectFilter {
    #[default]
    All,
    #[strum(to_string = "MERN")]
    Mern,
    Flutter,
    #[strum(to_string = "AI")]
    Ai,
}

impl ProjectFilter {
    /// Next filter, wrapping around to All
    pub fn cycle(self) -> Self {
        match self {
            Self::All => Self::Mern,
            Self::Mern => Self::Flutter,
            Self::Flutter => Self::Ai,
            Self::Ai => Self::All,
        }
    }

    pub fn matches(self, category: ProjectCategory) -> bool {
        match self {
            Self::All => true,
            Self::Mern => category == ProjectCategory::Mern,
            Self::Flutter => category == ProjectCategory::Flutter,
            Self::Ai => category == ProjectCategory::Ai,
        }
    }
}

/// Navigation state of the portfolio view
#[derive(Debug, Clone, Default)]
pub struct PortfolioState {
    pub section: Section,
    pub project_filter: ProjectFilter,
    /// Index into the filtered project list
    pub selected_project: usize,
}

impl PortfolioState {
    /// Projects matching the active filter, with their index in the profile
    pub fn visible_projects<'a>(&self, profile: &'a Profile) -> Vec<(usize, &'a Project)> {
        profile
            .projects
            .iter()
            .enumerate()
            .filter(|(_, p)| self.project_filter.matches(p.category))
            .collect()
    }

    /// Profile index of the selected project, if any project is visible
    pub fn selected_project_index(&self, profile: &Profile) -> Option<usize> {
        self.visible_projects(profile)
            .get(self.selected_project)
            .map(|(index, _)| *index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order_and_bounds() {
        assert_eq!(Section::COUNT, 7);
        assert_eq!(Section::Home.next(), Section::About);
        assert_eq!(Section::Home.previous(), Section::Home);
        assert_eq!(Section::Footer.next(), Section::Footer);
        assert_eq!(Section::Footer.previous(), Section::Contact);
        assert_eq!(Section::first(), Section::Home);
        assert_eq!(Section::last(), Section::Footer);
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(Section::Home.scroll_progress(), 0.0);
        assert_eq!(Section::Footer.scroll_progress(), 1.0);
        assert_eq!(Section::Tech.scroll_progress(), 2.0 / 6.0);
    }

    #[test]
    fn test_filter_cycles_through_all_pills() {
        let order: Vec<String> = ProjectFilter::iter().map(|f| f.to_string()).collect();
        assert_eq!(order, vec!["All", "MERN", "Flutter", "AI"]);
        assert_eq!(ProjectFilter::Ai.cycle(), ProjectFilter::All);
        assert_eq!(ProjectFilter::All.cycle(), ProjectFilter::Mern);
    }

    #[test]
    fn test_visible_projects_by_filter() {
        let profile = Profile::default();
        let mut state = PortfolioState::default();
        assert_eq!(state.visible_projects(&profile).len(), 6);

        state.project_filter = ProjectFilter::Mern;
        let titles: Vec<&str> = state
            .visible_projects(&profile)
            .iter()
            .map(|(_, p)| p.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["E-Commerce Platform", "Task Manager App", "Portfolio 3D"]
        );

        state.project_filter = ProjectFilter::Ai;
        state.selected_project = 0;
        assert_eq!(state.selected_project_index(&profile), Some(3));
        state.selected_project = 1;
        assert_eq!(state.selected_project_index(&profile), None);
    }
}
