use crate::actions::{Action, BootstrapAction, GlobalAction, PortfolioAction};
use crate::reducers::{
    about_reducer, certificates_reducer, contact_reducer, portfolio_reducer, splash_reducer,
};
use crate::state::{AppState, Section};
use crate::views::ProjectDetailView;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    // Handle global actions first
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            return state;
        }
        Action::Global(GlobalAction::PushView(new_view)) => {
            // Pushing the view that is already on top closes it (toggle)
            let is_duplicate = state
                .active_view()
                .is_some_and(|top| top.view_id() == new_view.view_id());

            if is_duplicate {
                log::debug!(
                    "Popping view from the stack, because this view is on top already: {:?}",
                    new_view.view_id()
                );
                state.view_stack.pop();
            } else {
                log::debug!("Pushing view onto stack: {:?}", new_view.view_id());
                state.view_stack.push(new_view.clone());
            }
        }
        Action::Global(GlobalAction::ReplaceView(new_view)) => {
            log::debug!("Replacing view stack with: {:?}", new_view.view_id());
            state.view_stack.clear();
            state.view_stack.push(new_view.clone());
        }
        Action::Global(GlobalAction::Close) => {
            // Close the top-most view; closing the last one quits
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            } else {
                log::debug!("Closing last view - quitting application");
                state.running = false;
            }
        }
        Action::Global(GlobalAction::Resize { width, height }) => {
            state.viewport.width = *width;
            state.viewport.height = *height;
        }
        Action::Global(GlobalAction::Tick(dt)) => {
            state.hero.advance(*dt);
        }
        Action::Bootstrap(BootstrapAction::ConfigLoaded(config)) => {
            state.app_config = config.clone();
            state.about.values = vec![0; config.profile.about.counters.len()];
        }
        Action::Portfolio(PortfolioAction::OpenProject) => {
            let profile = state.profile();
            match state.portfolio.selected_project_index(profile) {
                Some(index) => {
                    log::debug!("Opening project {}", profile.projects[index].title);
                    state
                        .view_stack
                        .push(Box::new(ProjectDetailView::new(index)));
                }
                None => log::debug!("No project selected"),
            }
        }
        _ => {}
    }

    // Run sub-reducers for component-specific actions
    let section_before = state.portfolio.section;
    state.splash = splash_reducer::reduce(state.splash, action);
    state.portfolio = portfolio_reducer::reduce(state.portfolio, action, &state.app_config.profile);
    state.about = about_reducer::reduce(state.about, action);
    state.certificates = certificates_reducer::reduce(state.certificates, action);
    state.contact = contact_reducer::reduce(state.contact, action);

    // Scrolling away from the form leaves it
    if section_before == Section::Contact && state.portfolio.section != Section::Contact {
        state.contact.focus = None;
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ContactAction;
    use crate::state::ContactField;
    use crate::views::{KeyBindingsView, PortfolioView, ViewId};
    use folio_config::AppConfig;
    use std::time::Duration;

    fn portfolio_state() -> AppState {
        reduce(
            AppState::default(),
            &Action::Global(GlobalAction::ReplaceView(Box::new(PortfolioView::new()))),
        )
    }

    fn stack(state: &AppState) -> Vec<ViewId> {
        state.view_stack.iter().map(|v| v.view_id()).collect()
    }

    #[test]
    fn test_starts_on_splash() {
        let state = AppState::default();
        assert_eq!(stack(&state), vec![ViewId::Splash]);
        assert!(state.running);
    }

    #[test]
    fn test_replace_view_clears_stack() {
        let state = portfolio_state();
        assert_eq!(stack(&state), vec![ViewId::Portfolio]);
    }

    #[test]
    fn test_push_view_toggles() {
        let push = Action::Global(GlobalAction::PushView(Box::new(KeyBindingsView::new())));
        let state = reduce(portfolio_state(), &push);
        assert_eq!(stack(&state), vec![ViewId::Portfolio, ViewId::KeyBindings]);
        let state = reduce(state, &push);
        assert_eq!(stack(&state), vec![ViewId::Portfolio]);
    }

    #[test]
    fn test_close_pops_then_quits() {
        let push = Action::Global(GlobalAction::PushView(Box::new(KeyBindingsView::new())));
        let close = Action::Global(GlobalAction::Close);
        let state = reduce(reduce(portfolio_state(), &push), &close);
        assert_eq!(stack(&state), vec![ViewId::Portfolio]);
        assert!(state.running);

        let state = reduce(state, &close);
        assert!(!state.running);
    }

    #[test]
    fn test_quit() {
        let state = reduce(portfolio_state(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_open_project_pushes_detail() {
        let state = reduce(
            portfolio_state(),
            &Action::Portfolio(PortfolioAction::OpenProject),
        );
        assert_eq!(stack(&state), vec![ViewId::Portfolio, ViewId::ProjectDetail]);
    }

    #[test]
    fn test_open_project_without_projects() {
        let mut config = AppConfig::default();
        config.profile.projects.clear();
        let state = reduce(
            portfolio_state(),
            &Action::Bootstrap(BootstrapAction::ConfigLoaded(config)),
        );
        let state = reduce(state, &Action::Portfolio(PortfolioAction::OpenProject));
        assert_eq!(stack(&state), vec![ViewId::Portfolio]);
    }

    #[test]
    fn test_config_loaded_is_stored() {
        let mut config = AppConfig::default();
        config.profile.display_name = "Ada".to_string();
        let state = reduce(
            AppState::default(),
            &Action::Bootstrap(BootstrapAction::ConfigLoaded(config)),
        );
        assert_eq!(state.profile().display_name, "Ada");
        assert_eq!(state.about.values, vec![0, 0, 0]);
    }

    #[test]
    fn test_leaving_contact_blurs_form() {
        let mut state = portfolio_state();
        state.portfolio.section = Section::Contact;
        let state = reduce(
            state,
            &Action::Contact(ContactAction::Focus(ContactField::Email)),
        );
        assert_eq!(state.contact.focus, Some(ContactField::Email));

        let state = reduce(state, &Action::Portfolio(PortfolioAction::NextSection));
        assert_eq!(state.portfolio.section, Section::Footer);
        assert_eq!(state.contact.focus, None);
    }

    #[test]
    fn test_tick_and_resize() {
        let state = reduce(
            portfolio_state(),
            &Action::Global(GlobalAction::Tick(Duration::from_secs(1))),
        );
        assert!(state.hero.angle > 0.0);

        let state = reduce(
            state,
            &Action::Global(GlobalAction::Resize {
                width: 80,
                height: 24,
            }),
        );
        assert_eq!((state.viewport.width, state.viewport.height), (80, 24));
    }
}
