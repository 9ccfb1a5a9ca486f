use crate::ui::mvi::Reducer;

use super::intent::DropdownIntent;
use super::state::DropdownState;

pub struct DropdownReducer;

impl Reducer for DropdownReducer {
    type State = DropdownState;
    type Intent = DropdownIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DropdownIntent::Open { options, selected } => {
                let highlighted = options
                    .iter()
                    .position(|option| option == &selected)
                    .unwrap_or(0);
                DropdownState::Open {
                    options,
                    highlighted,
                }
            }

            DropdownIntent::Move { delta } => match state {
                DropdownState::Open {
                    options,
                    highlighted,
                } => {
                    let highlighted = wrap_index(highlighted, delta, options.len());
                    DropdownState::Open {
                        options,
                        highlighted,
                    }
                }
                other => other,
            },

            DropdownIntent::Close => DropdownState::Closed,
        }
    }
}

fn wrap_index(current: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as i64;
    (current as i64 + delta as i64).rem_euclid(len) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["ALL".into(), "USD".into(), "EUR".into()]
    }

    #[test]
    fn open_highlights_current_selection() {
        let state = DropdownReducer::reduce(
            DropdownState::Closed,
            DropdownIntent::Open {
                options: options(),
                selected: "EUR".into(),
            },
        );
        assert_eq!(state.highlighted_option(), Some("EUR"));
    }

    #[test]
    fn open_with_stale_selection_highlights_first() {
        let state = DropdownReducer::reduce(
            DropdownState::Closed,
            DropdownIntent::Open {
                options: options(),
                selected: "JPY".into(),
            },
        );
        assert_eq!(state.highlighted_option(), Some("ALL"));
    }

    #[test]
    fn move_wraps_both_ways() {
        let state = DropdownState::Open {
            options: options(),
            highlighted: 0,
        };
        let state = DropdownReducer::reduce(state, DropdownIntent::Move { delta: -1 });
        assert_eq!(state.highlighted_option(), Some("EUR"));
        let state = DropdownReducer::reduce(state, DropdownIntent::Move { delta: 1 });
        assert_eq!(state.highlighted_option(), Some("ALL"));
    }

    #[test]
    fn move_while_closed_is_noop() {
        let state = DropdownReducer::reduce(DropdownState::Closed, DropdownIntent::Move { delta: 1 });
        assert_eq!(state, DropdownState::Closed);
    }
}
