/// Webview-side 1 Hz tick source.
///
/// All countdown and auto-advance logic lives in the session; this interval
/// only clicks the hidden tick button once per second while a countdown is
/// running, and clears itself when the timer goes inactive or the view
/// unmounts. One interval exists at a time.
pub(super) fn quiz_timer_script(active: bool) -> String {
    format!(
        r#"(function() {{
            const state = window.__quizTimer || (window.__quizTimer = {{ id: null }});
            const root = document.getElementById("quiz-root");
            const active = {active};
            if (!root || !active) {{
                if (state.id) {{
                    clearInterval(state.id);
                    state.id = null;
                }}
                return;
            }}
            if (!state.id) {{
                state.id = setInterval(() => {{
                    const btn = document.getElementById("quiz-tick");
                    if (!btn) {{
                        clearInterval(state.id);
                        state.id = null;
                        return;
                    }}
                    btn.click();
                }}, 1000);
            }}
        }})();"#
    )
}
