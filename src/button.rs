//! Push-button debounce and gesture classification state machine.
//!
//! A [`Button`] owns one input pin and is driven by calling [`Button::update`]
//! once per poll tick with the current value of a wrapping millisecond
//! counter. Raw samples are filtered through a restart-on-jitter debounce
//! window; accepted transitions re-arm the one-shot edge queries and classify
//! completed releases into a [`Gesture`].

use embedded_hal_1::digital::InputPin;

use crate::{debug, trace};

/// Wiring polarity of a button input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveState {
    /// Pressing the button drives the pin high (plain input, button to voltage).
    ActiveHigh,
    /// Pressing the button drives the pin low (pull-up wiring, button to ground).
    ActiveLow,
}

/// Unique identity token for a button.
///
/// Groups hold borrowed buttons, so members are named by id rather than by
/// address when removing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonId(pub u8);

/// Classified outcome of a completed release.
///
/// Resolved exactly once when a release is accepted, then consumed by exactly
/// one of [`Button::just_clicked`], [`Button::just_long_clicked`] or
/// [`Button::just_double_clicked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// A plain click, neither long nor part of a double-click.
    ShortClick,
    /// The button was held past the long delay before this release.
    LongClick,
    /// This release landed within the double delay of the previous one.
    DoubleClick,
}

/// Debounce and gesture state for one physical switch.
///
/// All elapsed-time arithmetic uses `u32::wrapping_sub`, so the machine stays
/// correct when the host millisecond counter overflows and wraps.
#[derive(Debug)]
pub struct Button<I> {
    id: ButtonId,
    pin: I,
    /// True when the wiring reads "not pressed" as logical high.
    invert: bool,

    /// Minimum stable time before a raw transition is accepted, in ms.
    debounce_delay: u32,
    /// Minimum held time before a long press or release latches, in ms.
    long_delay: u32,
    /// Maximum gap between two releases to count as a double-click, in ms.
    double_delay: u32,

    /// Last two raw samples, used only to detect instability.
    now: bool,
    prev: bool,
    /// Current and previous accepted (debounced) readings.
    state: bool,
    p_state: bool,

    /// Instant the raw signal last changed, i.e. start of the debounce window.
    time: u32,
    /// Instant of the most recent accepted release, `None` until one happens.
    time_double: Option<u32>,
    /// Timestamp of the most recent `update` call.
    poll: u32,

    /// Latched once the accepted level has been held past `long_delay`.
    long_state: bool,
    /// Hold latch folded into the gesture when the release is accepted.
    long_click: bool,
    /// Pending gesture of the last accepted release, awaiting consumption.
    gesture: Option<Gesture>,

    pressed_consumed: bool,
    released_consumed: bool,
}

impl<I: InputPin> Button<I> {
    /// Creates a new `Button` over an already configured input pin.
    ///
    /// Configuring the pin electrically (pull-up vs plain input) is the
    /// host's job; `active` states which logic level means "pressed". All
    /// state is primed to the rest position implied by the polarity, so no
    /// event fires until a real transition is observed.
    pub fn new(id: ButtonId, pin: I, active: ActiveState) -> Self {
        let invert = matches!(active, ActiveState::ActiveLow);
        // An untouched button reads the inactive raw level.
        let rest = invert;
        Self {
            id,
            pin,
            invert,
            debounce_delay: 5,
            long_delay: 1000,
            double_delay: 300,
            now: rest,
            prev: rest,
            state: rest,
            p_state: rest,
            time: 0,
            time_double: None,
            poll: 0,
            long_state: false,
            long_click: false,
            gesture: None,
            // Marked consumed so nothing fires before the first transition.
            pressed_consumed: true,
            released_consumed: true,
        }
    }

    /// Returns this button's identity token.
    pub fn id(&self) -> ButtonId {
        self.id
    }

    /// Sets the minimum stable time before a raw transition is accepted.
    ///
    /// Takes effect on the next call to [`Button::update`].
    pub fn set_debounce_delay(&mut self, ms: u32) {
        self.debounce_delay = ms;
    }

    /// Sets the held time after which a long press or release latches.
    pub fn set_long_delay(&mut self, ms: u32) {
        self.long_delay = ms;
    }

    /// Sets the maximum gap between two releases for a double-click.
    pub fn set_double_delay(&mut self, ms: u32) {
        self.double_delay = ms;
    }

    /// Advances the state machine by one poll tick.
    ///
    /// `now_ms` is the host's monotonic, wrapping millisecond counter. To be
    /// called as often as possible; polling intervals may be arbitrary.
    /// Returns true iff an accepted transition happened during this call,
    /// either a debounced edge or a newly latched long press/release.
    pub fn update(&mut self, now_ms: u32) -> bool {
        self.poll = now_ms;

        // Shift the raw sample pair and take a fresh reading. A failed pin
        // read counts as the rest level, so a broken pin reports released.
        self.prev = self.now;
        self.now = self.pin.is_high().unwrap_or(self.invert);

        // Raw instability: the bounce is still settling. Any jitter anywhere
        // in the debounce window restarts it.
        if self.now != self.prev {
            self.time = now_ms;
            return false;
        }

        // A stable reading differing from the accepted state for strictly
        // more than the debounce delay commits the transition.
        if self.state != self.now && now_ms.wrapping_sub(self.time) > self.debounce_delay {
            self.p_state = self.state;
            self.state = self.now;
            self.long_state = false;
            self.pressed_consumed = false;
            self.released_consumed = false;

            if self.is_pressed() {
                // A fresh press cannot retroactively be a click; whatever the
                // previous release left unconsumed is dropped.
                self.gesture = None;
                self.long_click = false;
                debug!("button {}: pressed", self.id.0);
            } else {
                let gesture = self.classify_release(now_ms);
                trace!("button {}: release classified {:?}", self.id.0, gesture);
                self.gesture = Some(gesture);
                self.time_double = Some(now_ms);
                debug!("button {}: released", self.id.0);
            }
            return true;
        }

        // Quiet past the long delay since the raw signal last moved: latch
        // the long state once for this hold.
        if !self.long_state && now_ms.wrapping_sub(self.time) > self.long_delay {
            self.long_state = true;
            if self.is_pressed() {
                self.long_click = true;
            }
            trace!("button {}: long state latched", self.id.0);
            return true;
        }

        false
    }

    /// Resolves the gesture for a release accepted at `now_ms`.
    ///
    /// A hold that latched long outranks the double-click window; the first
    /// release after reset can never be a double-click.
    fn classify_release(&mut self, now_ms: u32) -> Gesture {
        if self.long_click {
            self.long_click = false;
            return Gesture::LongClick;
        }
        match self.time_double {
            Some(prev) if now_ms.wrapping_sub(prev) < self.double_delay => Gesture::DoubleClick,
            _ => Gesture::ShortClick,
        }
    }

    /// Returns true while the debounced level is "pressed".
    pub fn is_pressed(&self) -> bool {
        self.state ^ self.invert
    }

    /// Returns true while the debounced level is "released".
    pub fn is_released(&self) -> bool {
        !self.is_pressed()
    }

    /// Returns true once the button has been held pressed past the long delay.
    ///
    /// Stays true until the next accepted transition.
    pub fn is_long_pressed(&self) -> bool {
        self.is_pressed() && self.long_state
    }

    /// Returns true once the button has sat released past the long delay.
    pub fn is_long_released(&self) -> bool {
        self.is_released() && self.long_state
    }

    /// Returns true exactly once per accepted transition into "pressed".
    pub fn just_pressed(&mut self) -> bool {
        if self.is_pressed() && !self.pressed_consumed {
            self.pressed_consumed = true;
            true
        } else {
            false
        }
    }

    /// Returns true exactly once per accepted transition into "released".
    pub fn just_released(&mut self) -> bool {
        if self.is_released() && !self.released_consumed {
            self.released_consumed = true;
            true
        } else {
            false
        }
    }

    /// Returns true exactly once for a plain short click.
    ///
    /// Suppressed while fewer than the double delay has passed since the last
    /// accepted release, since that release may still become a double-click.
    /// A genuine single click is therefore only reported after the ambiguity
    /// window elapses, a deliberate latency of up to the double delay. Time
    /// is taken from the most recent [`Button::update`] call.
    pub fn just_clicked(&mut self) -> bool {
        if let Some(prev) = self.time_double {
            if self.poll.wrapping_sub(prev) < self.double_delay {
                return false;
            }
        }
        match self.gesture {
            Some(Gesture::ShortClick) => {
                self.gesture = None;
                true
            }
            _ => false,
        }
    }

    /// Returns true exactly once for a release that ended a long hold.
    pub fn just_long_clicked(&mut self) -> bool {
        match self.gesture {
            Some(Gesture::LongClick) => {
                self.gesture = None;
                true
            }
            _ => false,
        }
    }

    /// Returns true exactly once for the second release of a double-click.
    pub fn just_double_clicked(&mut self) -> bool {
        match self.gesture {
            Some(Gesture::DoubleClick) => {
                self.gesture = None;
                true
            }
            _ => false,
        }
    }
}
