use cutover_domain::{ComponentState, ComponentView};

use super::Tone;

pub fn status_icon(state: ComponentState) -> &'static str {
    match state {
        ComponentState::Running => "🟢",
        ComponentState::Pending => "🟡",
        ComponentState::Error => "🔴",
        ComponentState::Migrating => "🔵",
    }
}

pub fn status_label(state: ComponentState) -> String {
    state.as_str().to_uppercase()
}

pub fn status_tone(state: ComponentState) -> Tone {
    match state {
        ComponentState::Running => Tone::Good,
        ComponentState::Pending => Tone::Caution,
        ComponentState::Error => Tone::Bad,
        ComponentState::Migrating => Tone::Accent,
    }
}

/// `MME - Mobility Management Entity`
pub fn component_title(view: &ComponentView) -> String {
    format!("{} - {}", view.id.to_uppercase(), view.full_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_state_has_distinct_icon_and_tone() {
        let states = [
            ComponentState::Running,
            ComponentState::Pending,
            ComponentState::Error,
            ComponentState::Migrating,
        ];
        for (i, a) in states.iter().enumerate() {
            for b in &states[i + 1..] {
                assert_ne!(status_icon(*a), status_icon(*b));
                assert_ne!(status_tone(*a), status_tone(*b));
            }
        }
        assert_eq!(status_label(ComponentState::Migrating), "MIGRATING");
    }
}
