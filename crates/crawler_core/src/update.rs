use crate::{AppState, Effect, Msg, Phase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SeedInputChanged(input) => {
            state.set_seed_input(input);
            Vec::new()
        }
        Msg::SeedSubmitted => {
            let seed = state.seed_input().trim().to_owned();
            if seed.is_empty() || state.phase() != Phase::Idle {
                return (state, Vec::new());
            }
            state.begin_discovery();
            vec![Effect::Discover { seed }]
        }
        Msg::DiscoveryCompleted { urls } => {
            state.apply_discovery(urls);
            Vec::new()
        }
        Msg::DiscoveryFailed { message } => {
            state.fail_discovery(message);
            Vec::new()
        }
        Msg::UrlToggled { url } => {
            // Selection only mutates while idle; the snapshot taken at run
            // start is immune to later toggles either way.
            if state.phase() == Phase::Idle {
                state.toggle_url(&url);
            }
            Vec::new()
        }
        Msg::ToggleAllClicked => {
            if state.phase() == Phase::Idle {
                state.toggle_all();
            }
            Vec::new()
        }
        Msg::SearchChanged(input) => {
            state.set_search_input(input);
            Vec::new()
        }
        Msg::ProcessClicked => {
            if state.phase() != Phase::Idle || state.selection().selected_count() == 0 {
                return (state, Vec::new());
            }
            let urls = state.begin_run();
            vec![Effect::ProcessUrls { urls }]
        }
        Msg::UrlProcessed { result } => {
            state.apply_result(result);
            Vec::new()
        }
    };

    (state, effects)
}
