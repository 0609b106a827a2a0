//! Per-shape interaction state machine, parameterized by an `InteractionPolicy`
//! chosen once for the platform's input profile.

use bevy::prelude::*;

use crate::core::components::InteractionState;

/// Pointer stimulus as seen by one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionInput {
    Enter,
    Leave,
    Press,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: InteractionState,
    pub input: InteractionInput,
    pub to: InteractionState,
}

const fn t(from: InteractionState, input: InteractionInput, to: InteractionState) -> Transition {
    Transition { from, input, to }
}

use InteractionInput::*;
use InteractionState::{Active, Hovered, Idle};

/// Mouse: hover, then press-and-hold. Leaving always wins over "still pressed".
pub const DESKTOP_TRANSITIONS: &[Transition] = &[
    t(Idle, Enter, Hovered),
    t(Hovered, Leave, Idle),
    t(Hovered, Press, Active),
    t(Active, Release, Idle),
    t(Active, Leave, Idle),
];

/// Touch: no hover; a press toggles.
pub const TOUCH_TRANSITIONS: &[Transition] = &[t(Idle, Press, Active), t(Active, Press, Idle)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputProfile {
    Desktop,
    Touch,
}

impl InputProfile {
    pub fn label(self) -> &'static str {
        match self {
            InputProfile::Desktop => "desktop",
            InputProfile::Touch => "touch",
        }
    }
}

/// What turns a pointer gesture over the surface into a spawn commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTrigger {
    /// Press then release with movement below the click threshold.
    ClickRelease,
    /// The press itself.
    Press,
}

/// Transition table + input mapping for the session. Inserted once at
/// startup and never mutated.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionPolicy {
    profile: InputProfile,
    transitions: &'static [Transition],
    commit: CommitTrigger,
}

impl InteractionPolicy {
    pub fn desktop() -> Self {
        Self {
            profile: InputProfile::Desktop,
            transitions: DESKTOP_TRANSITIONS,
            commit: CommitTrigger::ClickRelease,
        }
    }

    pub fn touch() -> Self {
        Self {
            profile: InputProfile::Touch,
            transitions: TOUCH_TRANSITIONS,
            commit: CommitTrigger::Press,
        }
    }

    pub fn for_profile(profile: InputProfile) -> Self {
        match profile {
            InputProfile::Desktop => Self::desktop(),
            InputProfile::Touch => Self::touch(),
        }
    }

    pub fn profile(&self) -> InputProfile {
        self.profile
    }

    pub fn transitions(&self) -> &'static [Transition] {
        self.transitions
    }

    pub fn commit_trigger(&self) -> CommitTrigger {
        self.commit
    }

    /// Whether enter/leave stimuli mean anything under this policy.
    pub fn supports_hover(&self) -> bool {
        self.transitions.iter().any(|tr| tr.input == Enter)
    }

    /// Target state for `input` in `from`, or `None` when the table has no
    /// such row (the stimulus is ignored).
    pub fn next_state(&self, from: InteractionState, input: InteractionInput) -> Option<InteractionState> {
        self.transitions
            .iter()
            .find(|tr| tr.from == from && tr.input == input)
            .map(|tr| tr.to)
    }

    /// Apply `input` to `state` in place. Returns true when the state changed.
    pub fn apply(&self, state: &mut InteractionState, input: InteractionInput) -> bool {
        match self.next_state(*state, input) {
            Some(next) if next != *state => {
                *state = next;
                true
            }
            _ => false,
        }
    }
}

impl Default for InteractionPolicy {
    fn default() -> Self {
        Self::desktop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(policy: &InteractionPolicy, inputs: &[InteractionInput]) -> Vec<InteractionState> {
        let mut state = Idle;
        let mut seq = vec![state];
        for input in inputs {
            policy.apply(&mut state, *input);
            seq.push(state);
        }
        seq
    }

    #[test]
    fn desktop_over_down_up_out() {
        let seq = run(&InteractionPolicy::desktop(), &[Enter, Press, Release, Leave]);
        assert_eq!(seq, vec![Idle, Hovered, Active, Idle, Idle]);
    }

    #[test]
    fn desktop_leave_while_pressed_returns_idle() {
        let seq = run(&InteractionPolicy::desktop(), &[Enter, Press, Leave]);
        assert_eq!(seq.last(), Some(&Idle));
    }

    #[test]
    fn desktop_press_from_idle_is_ignored() {
        let policy = InteractionPolicy::desktop();
        let mut s = Idle;
        assert!(!policy.apply(&mut s, Press));
        assert_eq!(s, Idle);
        assert_eq!(policy.next_state(Active, Enter), None);
    }

    #[test]
    fn desktop_hovered_only_via_enter() {
        let policy = InteractionPolicy::desktop();
        for tr in policy.transitions() {
            if tr.to == Hovered {
                assert_eq!((tr.from, tr.input), (Idle, Enter));
            }
            if tr.from == Active {
                assert_eq!(tr.to, Idle);
            }
        }
    }

    #[test]
    fn touch_press_toggles_and_never_hovers() {
        let policy = InteractionPolicy::touch();
        let seq = run(&policy, &[Enter, Press, Release, Leave, Press, Press]);
        assert_eq!(seq, vec![Idle, Idle, Active, Active, Active, Idle, Active]);
        assert!(!policy.supports_hover());
        assert!(policy.transitions().iter().all(|tr| tr.to != Hovered));
    }

    #[test]
    fn commit_triggers_per_profile() {
        assert_eq!(InteractionPolicy::desktop().commit_trigger(), CommitTrigger::ClickRelease);
        assert_eq!(InteractionPolicy::touch().commit_trigger(), CommitTrigger::Press);
        assert!(InteractionPolicy::desktop().supports_hover());
    }
}
