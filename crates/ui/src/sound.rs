use dioxus::document;

use services::SoundPlayer;

/// Plays feedback cues through the webview's WebAudio API.
///
/// Strictly best-effort: the script traps its own errors, so a missing audio
/// backend silently plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebviewSoundPlayer;

impl WebviewSoundPlayer {
    fn beep(&self, frequency: u32, millis: u32) {
        let _ = document::eval(&beep_script(frequency, millis));
    }
}

impl SoundPlayer for WebviewSoundPlayer {
    fn play_correct(&self) {
        self.beep(880, 150);
    }

    fn play_wrong(&self) {
        self.beep(220, 250);
    }

    fn play_timeout(&self) {
        self.beep(330, 400);
    }
}

fn beep_script(frequency: u32, millis: u32) -> String {
    format!(
        r"(function() {{
            try {{
                const Ctx = window.AudioContext || window.webkitAudioContext;
                if (!Ctx) return;
                const audio = window.__quizAudio || (window.__quizAudio = new Ctx());
                const osc = audio.createOscillator();
                const gain = audio.createGain();
                osc.frequency.value = {frequency};
                gain.gain.value = 0.08;
                osc.connect(gain);
                gain.connect(audio.destination);
                osc.start();
                osc.stop(audio.currentTime + {millis} / 1000);
            }} catch (_err) {{
                // best effort only
            }}
        }})();"
    )
}
