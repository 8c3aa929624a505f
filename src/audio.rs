use crate::core::tone_duration_sec;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Owns the WebAudio synthesis resources for the garden.
///
/// Browsers keep an `AudioContext` suspended until a user gesture, so the
/// engine arms a one-shot listener that resumes the context on the first
/// pointerdown anywhere and then detaches itself. All tone requests are
/// best-effort: a blocked or failed audio subsystem silently drops them and
/// never disturbs the render loop.
pub struct ToneEngine {
    ctx: web::AudioContext,
    master: web::GainNode,
}

impl ToneEngine {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let master = web::GainNode::new(&ctx).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        master.gain().set_value(0.5);
        _ = master.connect_with_audio_node(&ctx.destination());
        Ok(Self { ctx, master })
    }

    /// Arm the one-time unlock: the first pointerdown on the window resumes
    /// the suspended context, then the listener removes itself.
    pub fn wire_unlock_on_first_gesture(&self) {
        let ctx = self.ctx.clone();
        let closure = Closure::wrap(Box::new(move || {
            _ = ctx.resume();
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            let opts = web::AddEventListenerOptions::new();
            opts.set_once(true);
            _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                "pointerdown",
                closure.as_ref().unchecked_ref(),
                &opts,
            );
        }
        closure.forget();
    }

    /// Fire a single enveloped tone. Duration shrinks with frequency (see
    /// `tone_duration_sec`), so higher crystals ring shorter.
    pub fn play_tone(&self, frequency_hz: f32) {
        let src = match web::OscillatorNode::new(&self.ctx) {
            Ok(s) => s,
            Err(_) => return,
        };
        src.set_type(web::OscillatorType::Sine);
        src.frequency().set_value(frequency_hz);
        let gain = match web::GainNode::new(&self.ctx) {
            Ok(g) => g,
            Err(_) => return,
        };
        gain.gain().set_value(0.0);
        let duration = tone_duration_sec(frequency_hz) as f64;
        let t0 = self.ctx.current_time() + 0.01;
        _ = gain.gain().linear_ramp_to_value_at_time(0.8, t0 + 0.02);
        _ = gain.gain().linear_ramp_to_value_at_time(0.0, t0 + duration);
        _ = src.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&self.master);
        _ = src.start_with_when(t0);
        _ = src.stop_with_when(t0 + duration + 0.05);
    }

    /// Release the audio subsystem. Further tone requests become no-ops.
    pub fn dispose(&self) {
        _ = self.ctx.close();
    }
}
