// SPDX-License-Identifier: MPL-2.0
use iced_bulletin::bulletin::{Bulletin, BulletinDuration, FeedbackStyle, Priority};
use iced_bulletin::error::{Error, FeedbackError, Result};
use iced_bulletin::lifecycle::{
    BulletinEvent, ControllerSettings, DismissOptions, LifecycleController, LifecycleState,
};
use iced_bulletin::port::{Feedback, FixedInsets, LayeredSurface, SilentFeedback};
use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};

type Controller = LifecycleController<&'static str>;

fn controller() -> (Controller, LayeredSurface) {
    let surface = LayeredSurface::new();
    let controller = LifecycleController::new(
        ControllerSettings::default(),
        surface.clone(),
        FixedInsets::none(),
        SilentFeedback,
    );
    (controller, surface)
}

fn at(start: Instant, millis: u64) -> Instant {
    start + Duration::from_millis(millis)
}

fn shown(controller: &Controller) -> Option<&'static str> {
    controller.displayed().map(|b| *b.content())
}

/// Presents `bulletin` and lets its enter animation finish.
fn present(controller: &mut Controller, bulletin: Bulletin<&'static str>, start: Instant) {
    controller.enqueue(bulletin, start);
    controller.tick(at(start, 600));
    assert_eq!(controller.state(), LifecycleState::Displayed);
    controller.drain_events();
}

#[test]
fn at_most_one_bulletin_is_ever_attached() {
    let (mut controller, surface) = controller();
    let start = Instant::now();
    let submissions = [
        Priority::Low,
        Priority::High,
        Priority::Low,
        Priority::Required,
        Priority::High,
        Priority::Required,
        Priority::Low,
    ];

    for (step, priority) in submissions.into_iter().enumerate() {
        let now = at(start, step as u64 * 150);
        controller.enqueue(Bulletin::new("b").with_priority(priority), now);
        assert!(surface.attached_count() <= 1);
        controller.tick(at(start, step as u64 * 150 + 75));
        assert!(surface.attached_count() <= 1);
    }

    let mut now = at(start, 2000);
    for _ in 0..200 {
        controller.tick(now);
        assert!(surface.attached_count() <= 1);
        now += Duration::from_millis(250);
    }
}

#[test]
fn required_bulletin_preempts_the_one_on_screen() {
    let (mut controller, _) = controller();
    let start = Instant::now();
    let low = Bulletin::new("low");
    let low_id = low.id();
    present(&mut controller, low, start);

    let urgent = Bulletin::new("urgent").with_priority(Priority::Required);
    let urgent_id = urgent.id();
    controller.enqueue(urgent, at(start, 700));
    assert_eq!(
        controller.drain_events(),
        vec![
            BulletinEvent::Evicted(low_id),
            BulletinEvent::WillDisappear(low_id)
        ]
    );

    controller.tick(at(start, 1300));
    assert_eq!(shown(&controller), Some("urgent"));
    assert_eq!(
        controller.drain_events(),
        vec![
            BulletinEvent::Dismissed(low_id),
            BulletinEvent::WillAppear(urgent_id)
        ]
    );
    assert_eq!(controller.queued_len(), 0);
}

#[test]
fn high_waits_behind_high_but_evicts_low() {
    let (mut controller, _) = controller();
    let start = Instant::now();
    present(&mut controller, Bulletin::new("low"), start);

    controller.enqueue(
        Bulletin::new("high").with_priority(Priority::High),
        at(start, 700),
    );
    controller.tick(at(start, 1300));
    assert_eq!(shown(&controller), Some("high"));

    controller.enqueue(
        Bulletin::new("second high").with_priority(Priority::High),
        at(start, 1400),
    );
    controller.enqueue(Bulletin::new("late low"), at(start, 1500));
    assert_eq!(shown(&controller), Some("high"));
    assert_eq!(controller.queued_len(), 2);
    assert_eq!(
        controller.queue().to_string(),
        "<BulletinQueue: 3 element(s), [L, H, H]>"
    );
}

#[test]
fn required_evicts_a_high_that_was_never_shown() {
    let (mut controller, _) = controller();
    let start = Instant::now();
    let low = Bulletin::new("low");
    let low_id = low.id();
    let high = Bulletin::new("high").with_priority(Priority::High);
    let high_id = high.id();

    controller.enqueue(low, start);
    controller.tick(at(start, 600));
    controller.enqueue(high, at(start, 700));
    controller.enqueue(
        Bulletin::new("req").with_priority(Priority::Required),
        at(start, 750),
    );

    assert_eq!(
        controller.drain_events(),
        vec![
            BulletinEvent::WillAppear(low_id),
            BulletinEvent::DidAppear(low_id),
            BulletinEvent::Evicted(low_id),
            BulletinEvent::WillDisappear(low_id),
            BulletinEvent::Evicted(high_id),
        ]
    );
    assert_eq!(
        controller.queue().to_string(),
        "<BulletinQueue: 1 element(s), [R]>"
    );

    controller.tick(at(start, 1400));
    assert_eq!(shown(&controller), Some("req"));
}

#[test]
fn highs_submitted_over_a_low_show_in_order() {
    let (mut controller, _) = controller();
    let start = Instant::now();
    present(&mut controller, Bulletin::new("low"), start);

    controller.enqueue(
        Bulletin::new("a").with_priority(Priority::High),
        at(start, 700),
    );
    controller.enqueue(
        Bulletin::new("b").with_priority(Priority::High),
        at(start, 720),
    );
    assert_eq!(shown(&controller), Some("low"));

    controller.tick(at(start, 1400));
    assert_eq!(shown(&controller), Some("a"));
    assert_eq!(controller.queued_len(), 1);

    let a = controller.displayed().map(|b| b.id()).unwrap();
    controller.dismiss(a, at(start, 1500));
    controller.tick(at(start, 2100));
    assert_eq!(shown(&controller), Some("b"));
    assert_eq!(controller.queued_len(), 0);
}

#[test]
fn equal_priorities_are_shown_in_submission_order() {
    let (mut controller, _) = controller();
    let start = Instant::now();
    controller.enqueue(Bulletin::new("a").with_priority(Priority::High), start);
    controller.enqueue(Bulletin::new("b").with_priority(Priority::High), start);
    assert_eq!(shown(&controller), Some("a"));

    let a = controller.displayed().map(|b| b.id()).unwrap();
    controller.dismiss(a, at(start, 600));
    controller.tick(at(start, 1200));
    assert_eq!(shown(&controller), Some("b"));
}

#[test]
fn dragging_cancels_the_timer_and_snap_back_rearms_it() {
    let (mut controller, _) = controller();
    let start = Instant::now();
    present(&mut controller, Bulletin::new("drag me"), start);
    assert_eq!(controller.dismiss_deadline(), Some(at(start, 5000)));

    controller.pan_began(at(start, 1000));
    assert_eq!(controller.dismiss_deadline(), None);
    controller.pan_changed(-10.0);

    // Well past the original deadline: still on screen.
    controller.tick(at(start, 6000));
    assert_eq!(controller.state(), LifecycleState::Displayed);

    let release = at(start, 6100);
    controller.pan_ended(-10.0, -50.0, release);
    assert_eq!(
        controller.dismiss_deadline(),
        Some(release + Duration::from_secs(5))
    );
    assert!(controller.drain_events().is_empty());

    controller.tick(at(start, 11_000));
    assert_eq!(controller.state(), LifecycleState::Displayed);
    controller.tick(at(start, 11_100));
    assert_eq!(controller.state(), LifecycleState::Dismissing);
}

#[test]
fn fast_flick_dismisses_without_travel() {
    let (mut controller, _) = controller();
    let start = Instant::now();
    let bulletin = Bulletin::new("flick");
    let id = bulletin.id();
    present(&mut controller, bulletin, start);

    controller.pan_began(at(start, 700));
    controller.pan_ended(-1.0, -600.0, at(start, 750));
    assert_eq!(
        controller.drain_events(),
        vec![
            BulletinEvent::WillDisappear(id),
            BulletinEvent::InteractivelyDismissed(id)
        ]
    );
}

#[test]
fn long_slow_drag_dismisses_past_the_distance_threshold() {
    let (mut controller, _) = controller();
    let start = Instant::now();
    present(&mut controller, Bulletin::new("slow"), start);

    // Default top inset 24 plus half the 80px height.
    controller.pan_began(at(start, 700));
    controller.pan_changed(-65.0);
    controller.pan_ended(-65.0, 0.0, at(start, 900));
    assert_eq!(controller.state(), LifecycleState::Dismissing);
}

#[test]
fn short_slow_drag_snaps_back() {
    let (mut controller, _) = controller();
    let start = Instant::now();
    present(&mut controller, Bulletin::new("stay"), start);

    controller.pan_began(at(start, 700));
    controller.pan_changed(-30.0);
    controller.pan_ended(-30.0, -100.0, at(start, 800));
    assert_eq!(controller.state(), LifecycleState::Displayed);

    controller.tick(at(start, 1500));
    let frame = controller.current_frame(at(start, 1500)).unwrap();
    assert!(frame.offset_y.abs() < 0.5);
    assert!((frame.scale - 1.0).abs() < 1e-3);
}

#[test]
fn repeated_dismiss_is_ignored() {
    let (mut controller, _) = controller();
    let start = Instant::now();
    let bulletin = Bulletin::new("once");
    let id = bulletin.id();
    present(&mut controller, bulletin, start);

    controller.dismiss(id, at(start, 700));
    controller.dismiss(id, at(start, 750));
    controller.tick(at(start, 1400));
    controller.dismiss(id, at(start, 1450));

    assert_eq!(
        controller.drain_events(),
        vec![
            BulletinEvent::WillDisappear(id),
            BulletinEvent::Dismissed(id)
        ]
    );
    assert_eq!(controller.state(), LifecycleState::Idle);
}

#[test]
fn dismissing_a_queued_bulletin_does_nothing() {
    let (mut controller, _) = controller();
    let start = Instant::now();
    controller.enqueue(Bulletin::new("on screen"), start);
    let waiting = Bulletin::new("waiting");
    let waiting_id = waiting.id();
    controller.enqueue(waiting, start);

    controller.dismiss(waiting_id, at(start, 100));
    assert_eq!(controller.queued_len(), 1);
    assert_eq!(shown(&controller), Some("on screen"));
}

#[test]
fn delayed_submission_waits_for_its_time() {
    let (mut controller, _) = controller();
    let start = Instant::now();
    controller.enqueue_after(Bulletin::new("later"), Duration::from_secs(2), start);
    assert_eq!(controller.state(), LifecycleState::Idle);
    assert_eq!(controller.delayed_len(), 1);
    assert!(controller.is_active());
    assert_eq!(controller.next_deadline(), Some(at(start, 2000)));

    controller.tick(at(start, 1000));
    assert_eq!(controller.state(), LifecycleState::Idle);

    controller.tick(at(start, 2000));
    assert_eq!(controller.delayed_len(), 0);
    assert_eq!(shown(&controller), Some("later"));
}

#[test]
fn tapping_an_actionable_bulletin_reports_the_action_after_it_leaves() {
    let (mut controller, _) = controller();
    let start = Instant::now();
    let bulletin = Bulletin::new("open inbox").with_action();
    let id = bulletin.id();
    present(&mut controller, bulletin, start);

    controller.tap(at(start, 700));
    controller.tap(at(start, 720));
    controller.tick(at(start, 1400));
    assert_eq!(
        controller.drain_events(),
        vec![
            BulletinEvent::WillDisappear(id),
            BulletinEvent::Dismissed(id),
            BulletinEvent::Action {
                id,
                content: "open inbox"
            }
        ]
    );
}

#[test]
fn tapping_a_plain_bulletin_keeps_it() {
    let (mut controller, _) = controller();
    let start = Instant::now();
    present(&mut controller, Bulletin::new("plain"), start);

    controller.tap(at(start, 700));
    assert_eq!(controller.state(), LifecycleState::Displayed);
    assert!(controller.drain_events().is_empty());
}

#[test]
fn background_tap_dismisses_sheets_but_not_huds() {
    let (mut controller, _) = controller();
    let start = Instant::now();
    let sheet = Bulletin::sheet("sheet");
    let sheet_id = sheet.id();
    present(&mut controller, sheet, start);

    controller.background_tap(at(start, 700));
    assert_eq!(
        controller.drain_events(),
        vec![
            BulletinEvent::WillDisappear(sheet_id),
            BulletinEvent::InteractivelyDismissed(sheet_id)
        ]
    );
    controller.tick(at(start, 1400));
    assert_eq!(controller.state(), LifecycleState::Idle);

    let later = at(start, 2000);
    present(&mut controller, Bulletin::hud("hud"), later);
    controller.background_tap(later + Duration::from_millis(700));
    assert_eq!(controller.state(), LifecycleState::Displayed);
}

#[test]
fn center_bulletins_ignore_drags() {
    let (mut controller, _) = controller();
    let start = Instant::now();
    present(&mut controller, Bulletin::alert("alert"), start);

    controller.pan_began(at(start, 700));
    controller.pan_ended(-300.0, -3000.0, at(start, 800));
    assert_eq!(controller.state(), LifecycleState::Displayed);
    // An alert never times out.
    assert_eq!(controller.dismiss_deadline(), None);
}

#[test]
fn drag_during_enter_completes_the_presentation_first() {
    let (mut controller, _) = controller();
    let start = Instant::now();
    let bulletin = Bulletin::new("early");
    let id = bulletin.id();
    controller.enqueue(bulletin, start);
    controller.drain_events();

    controller.pan_began(at(start, 50));
    assert_eq!(controller.state(), LifecycleState::Displayed);
    assert_eq!(controller.drain_events(), vec![BulletinEvent::DidAppear(id)]);
}

#[test]
fn enqueue_during_held_dismissal_advances_the_queue() {
    let (mut controller, _) = controller();
    let start = Instant::now();
    let first = Bulletin::new("first");
    let first_id = first.id();
    present(&mut controller, first, start);

    controller.dismiss_with(
        first_id,
        DismissOptions {
            advance_queue: false,
            ..DismissOptions::default()
        },
        at(start, 700),
    );
    controller.enqueue(Bulletin::new("next"), at(start, 750));
    controller.tick(at(start, 1400));
    assert_eq!(shown(&controller), Some("next"));
}

#[test]
fn limited_bulletin_is_dismissed_automatically() {
    let (mut controller, surface) = controller();
    let start = Instant::now();
    let bulletin =
        Bulletin::new("brief").with_duration(BulletinDuration::Limit(Duration::from_secs(2)));
    let id = bulletin.id();
    controller.enqueue(bulletin, start);

    controller.tick(at(start, 2000));
    controller.tick(at(start, 2600));
    assert_eq!(
        controller.drain_events(),
        vec![
            BulletinEvent::WillAppear(id),
            BulletinEvent::DidAppear(id),
            BulletinEvent::WillDisappear(id),
            BulletinEvent::AutomaticallyDismissed(id),
            BulletinEvent::Dismissed(id),
        ]
    );
    assert_eq!(surface.attached_count(), 0);
}

#[test]
fn duration_past_the_clock_behaves_like_forever() {
    let (mut controller, _) = controller();
    let start = Instant::now();
    let bulletin =
        Bulletin::new("endless").with_duration(BulletinDuration::Limit(Duration::MAX));
    present(&mut controller, bulletin, start);
    assert_eq!(controller.dismiss_deadline(), None);

    controller.pan_began(at(start, 700));
    controller.pan_ended(-10.0, 0.0, at(start, 800));
    assert_eq!(controller.dismiss_deadline(), None);

    controller.tick(at(start, 3_600_000));
    assert_eq!(controller.state(), LifecycleState::Displayed);
}

#[test]
fn delay_past_the_clock_drops_the_submission() {
    let (mut controller, _) = controller();
    let start = Instant::now();
    controller.enqueue_after(Bulletin::new("never"), Duration::MAX, start);

    assert_eq!(controller.delayed_len(), 0);
    assert!(!controller.is_active());
    controller.tick(at(start, 1000));
    assert_eq!(controller.state(), LifecycleState::Idle);
}

/// Feedback adapter whose device is always missing.
struct BrokenFeedback {
    attempts: Rc<Cell<usize>>,
}

impl Feedback for BrokenFeedback {
    fn play(&mut self, _style: FeedbackStyle) -> Result<()> {
        self.attempts.set(self.attempts.get() + 1);
        Err(FeedbackError::DeviceUnavailable.into())
    }

    fn play_sound(&mut self, path: &Path) -> Result<()> {
        self.attempts.set(self.attempts.get() + 1);
        Err(Error::Feedback(FeedbackError::SoundUnavailable(
            path.display().to_string(),
        )))
    }
}

#[test]
fn feedback_failures_never_interrupt_presentation() {
    let attempts = Rc::new(Cell::new(0));
    let mut controller: Controller = LifecycleController::new(
        ControllerSettings::default(),
        LayeredSurface::new(),
        FixedInsets::none(),
        BrokenFeedback {
            attempts: Rc::clone(&attempts),
        },
    );
    let start = Instant::now();
    let bulletin = Bulletin::new("noisy")
        .with_action()
        .with_sound("/nonexistent/chime.wav");
    let id = bulletin.id();

    controller.enqueue(bulletin, start);
    assert_eq!(controller.state(), LifecycleState::Presenting);
    assert_eq!(attempts.get(), 2);

    controller.tick(at(start, 600));
    controller.tap(at(start, 700));
    controller.tick(at(start, 1400));
    assert_eq!(attempts.get(), 3);
    assert!(controller
        .drain_events()
        .contains(&BulletinEvent::Action { id, content: "noisy" }));
}
