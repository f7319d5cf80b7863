use folio_config::Profile;

use crate::actions::{Action, PortfolioAction};
use crate::state::{PortfolioState, Section};

/// Reducer for section navigation and project browsing
///
/// Section moves saturate at both ends of the page. The project selection
/// indexes the filtered list and is clamped to it.
pub fn reduce(mut state: PortfolioState, action: &Action, profile: &Profile) -> PortfolioState {
    let Action::Portfolio(action) = action else {
        return state;
    };

    match action {
        PortfolioAction::NextSection => state.section = state.section.next(),
        PortfolioAction::PreviousSection => state.section = state.section.previous(),
        PortfolioAction::GoTo(section) => state.section = *section,
        PortfolioAction::ToTop => state.section = Section::first(),
        PortfolioAction::ToBottom => state.section = Section::last(),
        PortfolioAction::CycleProjectFilter => {
            state.project_filter = state.project_filter.cycle();
            state.selected_project = 0;
            log::debug!("Project filter: {}", state.project_filter);
        }
        PortfolioAction::NextProject => {
            let count = state.visible_projects(profile).len();
            if count > 0 {
                state.selected_project = (state.selected_project + 1).min(count - 1);
            }
        }
        PortfolioAction::PreviousProject => {
            state.selected_project = state.selected_project.saturating_sub(1);
        }
        // Opening a project changes the view stack, see app_reducer
        PortfolioAction::OpenProject => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ProjectFilter;

    fn apply(state: PortfolioState, actions: &[PortfolioAction]) -> PortfolioState {
        let profile = Profile::default();
        actions.iter().fold(state, |state, action| {
            reduce(state, &Action::Portfolio(*action), &profile)
        })
    }

    #[test]
    fn test_section_navigation_saturates() {
        let state = apply(
            PortfolioState::default(),
            &[PortfolioAction::PreviousSection],
        );
        assert_eq!(state.section, Section::Home);

        let state = apply(state, &[PortfolioAction::ToBottom, PortfolioAction::NextSection]);
        assert_eq!(state.section, Section::Footer);

        let state = apply(state, &[PortfolioAction::PreviousSection]);
        assert_eq!(state.section, Section::Contact);

        let state = apply(state, &[PortfolioAction::ToTop]);
        assert_eq!(state.section, Section::Home);
    }

    #[test]
    fn test_goto_anchor() {
        let state = apply(
            PortfolioState::default(),
            &[PortfolioAction::GoTo(Section::Certificates)],
        );
        assert_eq!(state.section, Section::Certificates);
    }

    #[test]
    fn test_project_selection_clamps_to_filter() {
        let state = apply(
            PortfolioState::default(),
            &[
                PortfolioAction::CycleProjectFilter, // MERN: 3 projects
                PortfolioAction::NextProject,
                PortfolioAction::NextProject,
                PortfolioAction::NextProject,
            ],
        );
        assert_eq!(state.project_filter, ProjectFilter::Mern);
        assert_eq!(state.selected_project, 2);

        let state = apply(state, &[PortfolioAction::CycleProjectFilter]);
        assert_eq!(state.project_filter, ProjectFilter::Flutter);
        assert_eq!(state.selected_project, 0);

        let state = apply(state, &[PortfolioAction::PreviousProject]);
        assert_eq!(state.selected_project, 0);
    }
}
