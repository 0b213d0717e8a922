use crate::domain::model::{SelectionKey, Selections};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix the transport uses to mark a structured option selection.
pub const FLOW_MARKER: &str = "_flow:";

/// Token that resets the dialog from anywhere.
pub const RESTART_TOKEN: &str = "restart";

/// Named steps of the guided dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    Greeting,
    Destination,
    TripType,
    Duration,
    Budget,
    GroupSize,
    ShowPackages,
    AiChat,
}

impl FlowState {
    /// Decodes a client-supplied state token. Unknown or absent tokens fall
    /// back to `Greeting` so stale clients cannot wedge a conversation.
    pub fn parse(raw: Option<&str>) -> FlowState {
        match raw {
            Some("greeting") => FlowState::Greeting,
            Some("destination") => FlowState::Destination,
            Some("trip_type") => FlowState::TripType,
            Some("duration") => FlowState::Duration,
            Some("budget") => FlowState::Budget,
            Some("group_size") => FlowState::GroupSize,
            Some("show_packages") => FlowState::ShowPackages,
            Some("ai_chat") => FlowState::AiChat,
            _ => FlowState::Greeting,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlowState::Greeting => "greeting",
            FlowState::Destination => "destination",
            FlowState::TripType => "trip_type",
            FlowState::Duration => "duration",
            FlowState::Budget => "budget",
            FlowState::GroupSize => "group_size",
            FlowState::ShowPackages => "show_packages",
            FlowState::AiChat => "ai_chat",
        }
    }

    /// The selection slot this step writes, if it is one of the five
    /// selection-bearing steps.
    pub fn selection_key(&self) -> Option<SelectionKey> {
        match self {
            FlowState::Destination => Some(SelectionKey::Destination),
            FlowState::TripType => Some(SelectionKey::TripType),
            FlowState::Duration => Some(SelectionKey::Duration),
            FlowState::Budget => Some(SelectionKey::Budget),
            FlowState::GroupSize => Some(SelectionKey::GroupSize),
            _ => None,
        }
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quick-reply option shown for a step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepOption {
    pub label: &'static str,
    pub value: &'static str,
    #[serde(rename = "next_state")]
    pub next: FlowState,
}

/// Static configuration for one dialog step: the prompt plus its options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Step {
    pub prompt: &'static str,
    pub options: &'static [StepOption],
}

const fn opt(label: &'static str, value: &'static str, next: FlowState) -> StepOption {
    StepOption { label, value, next }
}

// The whole dialog graph as data. Edges live here, not in code branches, so
// the table itself is unit-testable and extensible.
const GREETING: Step = Step {
    prompt: "Kia Ora! Welcome to NZ Tours. I'm here to help you discover the magic of Aotearoa New Zealand. How would you like to explore?",
    options: &[
        opt("Browse Packages", "browse", FlowState::Destination),
        opt("Plan Custom Trip", "custom", FlowState::Destination),
        opt("Talk to AI Assistant", "ai", FlowState::AiChat),
    ],
};

const DESTINATION: Step = Step {
    prompt: "Fantastic choice! Which region of New Zealand interests you most?",
    options: &[
        opt("North Island", "north", FlowState::TripType),
        opt("South Island", "south", FlowState::TripType),
        opt("Both Islands", "both", FlowState::TripType),
        opt("Not Sure - Recommend Me!", "recommend", FlowState::TripType),
    ],
};

const TRIP_TYPE: Step = Step {
    prompt: "What type of experience are you looking for?",
    options: &[
        opt("Adventure & Outdoors", "adventure", FlowState::Duration),
        opt("Culture & Heritage", "culture", FlowState::Duration),
        opt("Nature & Wildlife", "nature", FlowState::Duration),
        opt("Food & Wine", "food", FlowState::Duration),
        opt("Mixed Experience", "mixed", FlowState::Duration),
    ],
};

const DURATION: Step = Step {
    prompt: "How long would you like your adventure to be?",
    options: &[
        opt("3-5 Days", "short", FlowState::Budget),
        opt("1 Week", "week", FlowState::Budget),
        opt("2 Weeks", "two_weeks", FlowState::Budget),
        opt("Flexible", "flexible", FlowState::Budget),
    ],
};

const BUDGET: Step = Step {
    prompt: "What's your budget range per person?",
    options: &[
        opt("Budget ($500-$1,500)", "budget", FlowState::GroupSize),
        opt("Mid-Range ($1,500-$3,000)", "mid", FlowState::GroupSize),
        opt("Premium ($3,000-$5,000)", "premium", FlowState::GroupSize),
        opt("Luxury ($5,000+)", "luxury", FlowState::GroupSize),
    ],
};

const GROUP_SIZE: Step = Step {
    prompt: "How many travelers will be joining?",
    options: &[
        opt("Solo Traveler", "solo", FlowState::ShowPackages),
        opt("Couple", "couple", FlowState::ShowPackages),
        opt("Small Group (3-5)", "small", FlowState::ShowPackages),
        opt("Large Group (6+)", "large", FlowState::ShowPackages),
    ],
};

const SHOW_PACKAGES: Step = Step {
    prompt: "Here are the perfect packages for your New Zealand adventure!",
    options: &[
        opt("Start New Search", "restart", FlowState::Greeting),
        opt("Talk to AI Assistant", "ai", FlowState::AiChat),
    ],
};

const AI_CHAT: Step = Step {
    prompt: "I'm your AI travel assistant! Ask me anything about New Zealand travel, our packages, or help planning your trip. What would you like to know?",
    options: &[opt("Back to Package Browser", "browse", FlowState::Destination)],
};

pub fn step(state: FlowState) -> &'static Step {
    match state {
        FlowState::Greeting => &GREETING,
        FlowState::Destination => &DESTINATION,
        FlowState::TripType => &TRIP_TYPE,
        FlowState::Duration => &DURATION,
        FlowState::Budget => &BUDGET,
        FlowState::GroupSize => &GROUP_SIZE,
        FlowState::ShowPackages => &SHOW_PACKAGES,
        FlowState::AiChat => &AI_CHAT,
    }
}

/// One inbound turn, decoded once at the boundary so the rest of the core
/// never inspects raw message strings.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnInput {
    /// A quick-reply selection carrying its value token.
    Selection(String),
    /// Anything without the flow marker; routed to the AI assistant.
    FreeText(String),
}

impl TurnInput {
    pub fn decode(message: &str) -> TurnInput {
        match message.strip_prefix(FLOW_MARKER) {
            Some(value) => TurnInput::Selection(value.to_string()),
            None => TurnInput::FreeText(message.to_string()),
        }
    }
}

/// Result of advancing the dialog one structured turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Advance {
    pub next_state: FlowState,
    pub selections: Selections,
}

/// Advances the dialog graph by one turn.
///
/// Free text never touches the selections and lands in `ai_chat`. A
/// selection token is matched against the current step's options; on a match
/// the declared next step is taken and, for selection-bearing steps, the
/// token is recorded (last choice wins). An unmatched token is a no-op
/// transition. The restart token is a global edge back to the greeting that
/// also clears every selection.
pub fn advance(current: FlowState, mut selections: Selections, input: &TurnInput) -> Advance {
    let token = match input {
        TurnInput::FreeText(_) => {
            return Advance {
                next_state: FlowState::AiChat,
                selections,
            }
        }
        TurnInput::Selection(value) => value.as_str(),
    };

    if token == RESTART_TOKEN {
        selections.clear();
        return Advance {
            next_state: FlowState::Greeting,
            selections,
        };
    }

    let mut next_state = current;
    for option in step(current).options {
        if option.value == token {
            next_state = option.next;
            if let Some(key) = current.selection_key() {
                selections.insert(key, token);
            }
            break;
        }
    }

    Advance {
        next_state,
        selections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SelectionKey;

    fn select(token: &str) -> TurnInput {
        TurnInput::Selection(token.to_string())
    }

    #[test]
    fn test_decode_marker_and_free_text() {
        assert_eq!(
            TurnInput::decode("_flow:browse"),
            TurnInput::Selection("browse".to_string())
        );
        assert_eq!(
            TurnInput::decode("what's the weather like?"),
            TurnInput::FreeText("what's the weather like?".to_string())
        );
    }

    #[test]
    fn test_unknown_state_token_falls_back_to_greeting() {
        assert_eq!(FlowState::parse(None), FlowState::Greeting);
        assert_eq!(FlowState::parse(Some("checkout")), FlowState::Greeting);
        assert_eq!(FlowState::parse(Some("budget")), FlowState::Budget);
    }

    #[test]
    fn test_full_browse_round_trip() {
        let tokens = ["browse", "north", "adventure", "week", "mid", "couple"];
        let mut state = FlowState::Greeting;
        let mut selections = Selections::new();

        for token in tokens {
            let outcome = advance(state, selections, &select(token));
            state = outcome.next_state;
            selections = outcome.selections;
        }

        assert_eq!(state, FlowState::ShowPackages);
        assert_eq!(selections.get(SelectionKey::Destination), Some("north"));
        assert_eq!(selections.get(SelectionKey::TripType), Some("adventure"));
        assert_eq!(selections.get(SelectionKey::Duration), Some("week"));
        assert_eq!(selections.get(SelectionKey::Budget), Some("mid"));
        assert_eq!(selections.get(SelectionKey::GroupSize), Some("couple"));
        assert_eq!(selections.len(), 5);
    }

    #[test]
    fn test_restart_from_any_state_clears_selections() {
        let states = [
            FlowState::Greeting,
            FlowState::Destination,
            FlowState::TripType,
            FlowState::Duration,
            FlowState::Budget,
            FlowState::GroupSize,
            FlowState::ShowPackages,
            FlowState::AiChat,
        ];

        for state in states {
            let mut selections = Selections::new();
            selections.insert(SelectionKey::Destination, "north");

            let outcome = advance(state, selections, &select(RESTART_TOKEN));
            assert_eq!(outcome.next_state, FlowState::Greeting, "from {}", state);
            assert!(outcome.selections.is_empty(), "from {}", state);
        }
    }

    #[test]
    fn test_unmatched_token_is_a_no_op() {
        let mut selections = Selections::new();
        selections.insert(SelectionKey::Destination, "south");

        let outcome = advance(FlowState::Duration, selections.clone(), &select("teleport"));
        assert_eq!(outcome.next_state, FlowState::Duration);
        assert_eq!(outcome.selections, selections);
    }

    #[test]
    fn test_selection_overwrites_previous_value() {
        let mut selections = Selections::new();
        selections.insert(SelectionKey::Duration, "short");

        let outcome = advance(FlowState::Duration, selections, &select("two_weeks"));
        assert_eq!(outcome.next_state, FlowState::Budget);
        assert_eq!(
            outcome.selections.get(SelectionKey::Duration),
            Some("two_weeks")
        );
    }

    #[test]
    fn test_free_text_routes_to_ai_chat_without_touching_selections() {
        let mut selections = Selections::new();
        selections.insert(SelectionKey::Budget, "mid");

        let outcome = advance(
            FlowState::Budget,
            selections.clone(),
            &TurnInput::decode("tell me about Queenstown"),
        );
        assert_eq!(outcome.next_state, FlowState::AiChat);
        assert_eq!(outcome.selections, selections);
    }

    #[test]
    fn test_ai_chat_browse_returns_to_destination() {
        let outcome = advance(FlowState::AiChat, Selections::new(), &select("browse"));
        assert_eq!(outcome.next_state, FlowState::Destination);
    }

    #[test]
    fn test_greeting_does_not_record_a_selection() {
        let outcome = advance(FlowState::Greeting, Selections::new(), &select("browse"));
        assert_eq!(outcome.next_state, FlowState::Destination);
        assert!(outcome.selections.is_empty());
    }

    #[test]
    fn test_every_edge_targets_a_configured_step() {
        // Walk the whole table; every declared next state must itself have a
        // prompt and at least one option.
        let states = [
            FlowState::Greeting,
            FlowState::Destination,
            FlowState::TripType,
            FlowState::Duration,
            FlowState::Budget,
            FlowState::GroupSize,
            FlowState::ShowPackages,
            FlowState::AiChat,
        ];
        for state in states {
            for option in step(state).options {
                let target = step(option.next);
                assert!(!target.prompt.is_empty());
                assert!(!target.options.is_empty());
            }
        }
    }
}
