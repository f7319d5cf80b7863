use crate::actions::{Action, CertificatesAction};
use crate::state::CertificatesState;

/// Reducer for the certificate strip
pub fn reduce(mut state: CertificatesState, action: &Action) -> CertificatesState {
    let Action::Certificates(action) = action else {
        return state;
    };

    match action {
        CertificatesAction::Ready {
            cycle_length_px,
            sequence,
        } => {
            state.cycle_length_px = *cycle_length_px;
            state.sequence.clone_from(sequence);
            state.offset_px = 0.0;
            state.error = None;
        }
        CertificatesAction::Unavailable(reason) => {
            state.error = Some(reason.clone());
            state.cycle_length_px = 0;
            state.sequence.clear();
            state.offset_px = 0.0;
        }
        CertificatesAction::SequenceChanged(sequence) => {
            state.sequence.clone_from(sequence);
        }
        CertificatesAction::OffsetChanged(offset) => {
            state.offset_px = *offset;
        }
        CertificatesAction::Hovered(hovered) => {
            state.hovered = *hovered;
        }
        CertificatesAction::TogglePause => {
            state.manual_pause = !state.manual_pause;
        }
        CertificatesAction::PauseChanged(paused) => {
            state.paused = *paused;
        }
        CertificatesAction::OpenCentre => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: CertificatesState, action: CertificatesAction) -> CertificatesState {
        reduce(state, &Action::Certificates(action))
    }

    #[test]
    fn test_ready_then_scroll() {
        let state = apply(
            CertificatesState::default(),
            CertificatesAction::Ready {
                cycle_length_px: 1280,
                sequence: vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3],
            },
        );
        let state = apply(state, CertificatesAction::OffsetChanged(-12.0));
        assert_eq!(state.cycle_length_px, 1280);
        assert_eq!(state.sequence.len(), 12);
        assert_eq!(state.offset_px, -12.0);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_unavailable_records_reason() {
        let state = apply(
            CertificatesState::default(),
            CertificatesAction::Unavailable("no items".to_string()),
        );
        assert_eq!(state.error.as_deref(), Some("no items"));
        assert!(state.sequence.is_empty());
    }

    #[test]
    fn test_sequence_follows_resize() {
        let state = apply(
            CertificatesState::default(),
            CertificatesAction::Ready {
                cycle_length_px: 320,
                sequence: vec![0, 0, 0],
            },
        );
        let state = apply(state, CertificatesAction::SequenceChanged(vec![0; 5]));
        assert_eq!(state.sequence, vec![0; 5]);
    }

    #[test]
    fn test_pause_flags() {
        let state = apply(CertificatesState::default(), CertificatesAction::TogglePause);
        assert!(state.manual_pause);
        let state = apply(state, CertificatesAction::PauseChanged(true));
        let state = apply(state, CertificatesAction::Hovered(true));
        assert!(state.paused && state.hovered);
        let state = apply(state, CertificatesAction::TogglePause);
        assert!(!state.manual_pause);
    }
}
