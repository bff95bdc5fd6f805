//! Scripted interaction driver.

use std::cell::RefCell;
use std::rc::Rc;
use tapwise_core::{
    ClickCallbacks, ClickOptions, ClickRecognizer, GhostClickGuard, Point, PointerPress,
    PointerType, TargetId,
};
use web_time::{Duration, Instant};

/// Outcomes recorded by the robot, in emission order.
#[derive(Default)]
pub struct OutcomeLog {
    single: RefCell<Vec<PointerPress>>,
    double: RefCell<Vec<PointerPress>>,
    long: RefCell<Vec<PointerPress>>,
}

/// Drives a [`ClickRecognizer`] with scripted press/release/move steps
/// on a simulated clock.
///
/// Time never sleeps: `advance_ms` moves the simulated clock and pumps
/// the recogniser, so a 300ms long press resolves instantly in tests.
///
/// Example:
/// ```
/// use tapwise_testing::GestureRobot;
///
/// let mut robot = GestureRobot::new();
/// robot.press();
/// robot.advance_ms(30);
/// robot.release();
/// robot.advance_ms(250);
/// robot.assert_single_clicks(1);
/// ```
pub struct GestureRobot {
    recognizer: ClickRecognizer,
    outcomes: Rc<OutcomeLog>,
    start: Instant,
    elapsed_ms: u64,
    target: TargetId,
}

impl GestureRobot {
    pub fn new() -> Self {
        Self::with_options(ClickOptions::default())
    }

    pub fn with_options(options: ClickOptions) -> Self {
        let outcomes = Rc::new(OutcomeLog::default());
        let recognizer = ClickRecognizer::new(Self::callbacks(&outcomes), options);
        Self::from_parts(recognizer, outcomes)
    }

    /// Robot whose recogniser reports ghost-guard calls to `guard`.
    pub fn with_guard(options: ClickOptions, guard: Box<dyn GhostClickGuard>) -> Self {
        let outcomes = Rc::new(OutcomeLog::default());
        let recognizer = ClickRecognizer::with_guard(Self::callbacks(&outcomes), options, guard);
        Self::from_parts(recognizer, outcomes)
    }

    fn from_parts(recognizer: ClickRecognizer, outcomes: Rc<OutcomeLog>) -> Self {
        Self {
            recognizer,
            outcomes,
            start: Instant::now(),
            elapsed_ms: 0,
            target: 1,
        }
    }

    fn callbacks(outcomes: &Rc<OutcomeLog>) -> ClickCallbacks {
        let single = outcomes.clone();
        let double = outcomes.clone();
        let long = outcomes.clone();
        ClickCallbacks::new()
            .on_single_click(move |ev| single.single.borrow_mut().push(ev.clone()))
            .on_double_click(move |ev| double.double.borrow_mut().push(ev.clone()))
            .on_long_click(move |ev| long.long.borrow_mut().push(ev.clone()))
    }

    fn now(&self) -> Instant {
        self.start + Duration::from_millis(self.elapsed_ms)
    }

    fn event(&self) -> PointerPress {
        PointerPress::new(
            self.target,
            Point::new(50.0, 50.0),
            PointerType::Touch,
            self.elapsed_ms,
        )
    }

    /// Switches the target the next events are delivered on.
    pub fn on_target(&mut self, target: TargetId) -> &mut Self {
        self.target = target;
        self
    }

    // Scripted steps ------------------------------------------------------

    /// Advances the simulated clock and pumps the recogniser.
    pub fn advance_ms(&mut self, ms: u64) -> &mut Self {
        self.elapsed_ms += ms;
        let now = self.now();
        self.recognizer.tick(now);
        self
    }

    pub fn press(&mut self) -> &mut Self {
        let (event, now) = (self.event(), self.now());
        self.recognizer.press_start(event, now);
        self
    }

    pub fn release(&mut self) -> &mut Self {
        let (event, now) = (self.event(), self.now());
        self.recognizer.press_end(event, now);
        self
    }

    pub fn move_pointer(&mut self) -> &mut Self {
        self.recognizer.move_detected();
        self
    }

    pub fn leave(&mut self) -> &mut Self {
        self.recognizer.leave();
        self
    }

    /// Press, short hold, release.
    pub fn click(&mut self) -> &mut Self {
        self.press().advance_ms(30).release()
    }

    /// Two quick clicks inside the default double-click window.
    pub fn double_click(&mut self) -> &mut Self {
        self.click().advance_ms(60).click()
    }

    /// Press and hold for `hold_ms` without releasing.
    pub fn long_press(&mut self, hold_ms: u64) -> &mut Self {
        self.press().advance_ms(hold_ms)
    }

    // Observations --------------------------------------------------------

    pub fn recognizer(&self) -> &ClickRecognizer {
        &self.recognizer
    }

    pub fn single_clicks(&self) -> usize {
        self.outcomes.single.borrow().len()
    }

    pub fn double_clicks(&self) -> usize {
        self.outcomes.double.borrow().len()
    }

    pub fn long_clicks(&self) -> usize {
        self.outcomes.long.borrow().len()
    }

    pub fn last_single_click(&self) -> Option<PointerPress> {
        self.outcomes.single.borrow().last().cloned()
    }

    pub fn last_double_click(&self) -> Option<PointerPress> {
        self.outcomes.double.borrow().last().cloned()
    }

    pub fn last_long_click(&self) -> Option<PointerPress> {
        self.outcomes.long.borrow().last().cloned()
    }

    // Assertions ----------------------------------------------------------

    pub fn assert_single_clicks(&self, expected: usize) {
        assert_eq!(
            self.single_clicks(),
            expected,
            "unexpected single click count"
        );
    }

    pub fn assert_double_clicks(&self, expected: usize) {
        assert_eq!(
            self.double_clicks(),
            expected,
            "unexpected double click count"
        );
    }

    pub fn assert_long_clicks(&self, expected: usize) {
        assert_eq!(self.long_clicks(), expected, "unexpected long click count");
    }

    pub fn assert_nothing_fired(&self) {
        assert_eq!(
            (self.single_clicks(), self.double_clicks(), self.long_clicks()),
            (0, 0, 0),
            "expected no outcome to fire"
        );
    }

    /// Asserts the session is fully reset: no outstanding press, no
    /// armed deadline.
    pub fn assert_idle(&self) {
        assert_eq!(self.recognizer.press_count(), 0, "press count not reset");
        assert!(
            self.recognizer.next_deadline().is_none(),
            "a deadline is still armed"
        );
    }
}

impl Default for GestureRobot {
    fn default() -> Self {
        Self::new()
    }
}
