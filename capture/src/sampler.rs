//! Fixed-rate frame sampling policy.
//!
//! The browser side owns the timer and the canvas; this gate decides, per
//! tick, whether a frame may be captured. Frames that cannot be sent are
//! dropped rather than queued, and at most one encode is in flight.

/// Sampling period, roughly eight frames per second.
pub const SAMPLE_INTERVAL_MS: u32 = 125;
/// Raster size frames are drawn into before encoding.
pub const FRAME_WIDTH: u32 = 640;
pub const FRAME_HEIGHT: u32 = 480;
/// Encoder quality passed to `canvas.toBlob`.
pub const JPEG_QUALITY: f64 = 0.7;
pub const FRAME_MIME: &str = "image/jpeg";
/// `HTMLMediaElement.readyState` value meaning the current frame is decodable.
pub const HAVE_CURRENT_DATA: u16 = 2;

/// Inputs observed by the sampling timer on one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickConditions {
    /// Session is `Running`.
    pub sampling_allowed: bool,
    /// Socket reports open.
    pub channel_open: bool,
    /// `<video>` readyState reached [`HAVE_CURRENT_DATA`].
    pub video_ready: bool,
}

impl TickConditions {
    #[must_use]
    pub fn from_ready_state(sampling_allowed: bool, channel_open: bool, ready_state: u16) -> Self {
        Self { sampling_allowed, channel_open, video_ready: ready_state >= HAVE_CURRENT_DATA }
    }
}

/// What the timer should do on this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Capture and encode a frame now; call [`SamplerGate::finish`] when done.
    Sample,
    NotRunning,
    ChannelNotReady,
    VideoNotReady,
    EncodeInFlight,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SamplerGate {
    in_flight: bool,
    sampled: u64,
    dropped: u64,
}

impl SamplerGate {
    pub fn tick(&mut self, conditions: TickConditions) -> TickOutcome {
        if !conditions.sampling_allowed {
            return TickOutcome::NotRunning;
        }
        let outcome = if !conditions.channel_open {
            TickOutcome::ChannelNotReady
        } else if !conditions.video_ready {
            TickOutcome::VideoNotReady
        } else if self.in_flight {
            TickOutcome::EncodeInFlight
        } else {
            TickOutcome::Sample
        };

        if outcome == TickOutcome::Sample {
            self.in_flight = true;
            self.sampled += 1;
        } else {
            self.dropped += 1;
        }
        outcome
    }

    /// Mark the in-flight encode as complete, whether it was sent or not.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    #[must_use]
    pub fn sampled(&self) -> u64 {
        self.sampled
    }

    /// Ticks skipped while running.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

/// Extract the base64 payload of a `data:<mime>;base64,<payload>` URL.
#[must_use]
pub fn strip_data_url(url: &str) -> Option<&str> {
    let rest = url.strip_prefix("data:")?;
    let (_, payload) = rest.split_once(";base64,")?;
    (!payload.is_empty()).then_some(payload)
}

#[cfg(test)]
#[path = "sampler_test.rs"]
mod tests;
