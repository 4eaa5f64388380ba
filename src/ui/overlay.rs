// SPDX-License-Identifier: MPL-2.0
//! Canvas overlay drawing the bulletin on screen and turning mouse input
//! into gesture calls on the lifecycle controller.
//!
//! The overlay is meant to be stacked above the host's content. Pointer
//! events outside the card pass through unless the bulletin has a backdrop.

use crate::bulletin::BackgroundEffect;
use crate::config::TAP_SLOP;
use crate::lifecycle::{HitTarget, LifecycleController};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Text};
use iced::widget::Action;
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};
use std::time::{Duration, Instant};

/// Weight of the newest sample in the smoothed release velocity.
const VELOCITY_SMOOTHING: f32 = 0.8;

/// A pointer resting longer than this before release carries no velocity.
const VELOCITY_STALE_AFTER: Duration = Duration::from_millis(100);

/// What a bulletin card shows.
pub trait CardContent {
    fn title(&self) -> &str;

    fn body(&self) -> &str {
        ""
    }

    /// Color of the stripe on the card's leading edge.
    fn accent(&self) -> Option<Color> {
        None
    }
}

impl CardContent for &str {
    fn title(&self) -> &str {
        self
    }
}

impl CardContent for String {
    fn title(&self) -> &str {
        self.as_str()
    }
}

/// Release of a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanRelease {
    pub translation_y: f32,
    pub velocity_y: f32,
}

/// Gesture published by the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayMessage {
    /// Pointer went down on the card.
    Pressed,
    /// Pointer moved past the tap slop; a drag starts.
    PanStarted,
    Panned { translation_y: f32 },
    /// Pointer went up. Without a drag this is a tap.
    Released { pan: Option<PanRelease> },
    /// Pointer left the overlay while pressed.
    Cancelled { pan: Option<PanRelease> },
    /// Pointer went down on the backdrop.
    BackdropTapped,
}

/// Forwards an overlay gesture to the controller.
pub fn apply<T>(message: OverlayMessage, controller: &mut LifecycleController<T>, now: Instant) {
    match message {
        OverlayMessage::Pressed => controller.press_began(now),
        OverlayMessage::PanStarted => controller.pan_began(now),
        OverlayMessage::Panned { translation_y } => controller.pan_changed(translation_y),
        OverlayMessage::Released { pan: Some(pan) }
        | OverlayMessage::Cancelled { pan: Some(pan) } => {
            controller.pan_ended(pan.translation_y, pan.velocity_y, now);
            controller.press_ended(now);
        }
        OverlayMessage::Released { pan: None } => {
            controller.press_ended(now);
            controller.tap(now);
        }
        OverlayMessage::Cancelled { pan: None } => controller.press_ended(now),
        OverlayMessage::BackdropTapped => controller.background_tap(now),
    }
}

/// A pointer held down on the card.
#[derive(Debug, Clone, Copy)]
struct Press {
    origin: Point,
    last_y: f32,
    last_at: Instant,
    velocity_y: f32,
    panning: bool,
}

impl Press {
    fn new(origin: Point, now: Instant) -> Self {
        Self {
            origin,
            last_y: origin.y,
            last_at: now,
            velocity_y: 0.0,
            panning: false,
        }
    }

    fn track(&mut self, y: f32, now: Instant) {
        let dt = now.saturating_duration_since(self.last_at).as_secs_f32();
        if dt > f32::EPSILON {
            let sample = (y - self.last_y) / dt;
            self.velocity_y =
                VELOCITY_SMOOTHING * sample + (1.0 - VELOCITY_SMOOTHING) * self.velocity_y;
        }
        self.last_y = y;
        self.last_at = now;
    }

    fn exceeds_slop(&self, position: Point) -> bool {
        self.origin.distance(position) > TAP_SLOP
    }

    fn release(&self, now: Instant) -> Option<PanRelease> {
        if !self.panning {
            return None;
        }
        let stale = now.saturating_duration_since(self.last_at) > VELOCITY_STALE_AFTER;
        Some(PanRelease {
            translation_y: self.last_y - self.origin.y,
            velocity_y: if stale { 0.0 } else { self.velocity_y },
        })
    }
}

/// Pointer tracking kept by the canvas between events.
#[derive(Debug, Default)]
pub struct PointerState {
    press: Option<Press>,
}

/// Canvas program drawing the controller's current bulletin.
pub struct BulletinOverlay<'a, T> {
    controller: &'a LifecycleController<T>,
    colors: &'a ColorScheme,
    now: Instant,
}

impl<'a, T: CardContent> BulletinOverlay<'a, T> {
    #[must_use]
    pub fn new(
        controller: &'a LifecycleController<T>,
        colors: &'a ColorScheme,
        now: Instant,
    ) -> Self {
        Self {
            controller,
            colors,
            now,
        }
    }

    /// Creates a full-size canvas from this overlay.
    pub fn into_element(self) -> Element<'a, OverlayMessage>
    where
        T: 'a,
    {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<T: CardContent> canvas::Program<OverlayMessage> for BulletinOverlay<'_, T> {
    type State = PointerState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<OverlayMessage>> {
        let now = Instant::now();

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                let viewport = Rectangle::with_size(bounds.size());
                match self.controller.hit_test(position, viewport, now)? {
                    HitTarget::Bulletin => {
                        state.press = Some(Press::new(position, now));
                        Some(Action::publish(OverlayMessage::Pressed).and_capture())
                    }
                    HitTarget::Backdrop => {
                        Some(Action::publish(OverlayMessage::BackdropTapped).and_capture())
                    }
                }
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let press = state.press.as_mut()?;
                let position = cursor.position_in(bounds)?;
                press.track(position.y, now);

                if press.panning {
                    let translation_y = position.y - press.origin.y;
                    Some(Action::publish(OverlayMessage::Panned { translation_y }).and_capture())
                } else if press.exceeds_slop(position) {
                    press.panning = true;
                    Some(Action::publish(OverlayMessage::PanStarted).and_capture())
                } else {
                    None
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let press = state.press.take()?;
                let pan = press.release(now);
                Some(Action::publish(OverlayMessage::Released { pan }).and_capture())
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                let press = state.press.take()?;
                let pan = press.release(now);
                Some(Action::publish(OverlayMessage::Cancelled { pan }).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let viewport = Rectangle::with_size(bounds.size());
        let (Some(bulletin), Some(visual), Some(card)) = (
            self.controller.displayed(),
            self.controller.current_frame(self.now),
            self.controller.bulletin_bounds(viewport, self.now),
        ) else {
            return Vec::new();
        };

        let mut frame = Frame::new(renderer, bounds.size());
        let style = &bulletin.style;

        match style.background {
            BackgroundEffect::Darken(alpha) => frame.fill_rectangle(
                Point::ORIGIN,
                bounds.size(),
                Color {
                    a: alpha * visual.backdrop,
                    ..palette::BLACK
                },
            ),
            BackgroundEffect::Blur => frame.fill_rectangle(
                Point::ORIGIN,
                bounds.size(),
                Color {
                    a: self.colors.blur_tint.a * visual.backdrop,
                    ..self.colors.blur_tint
                },
            ),
            BackgroundEffect::None => {}
        }

        let scale = visual.scale;
        let radius = style.corner_radius * scale;

        if style.shadow_radius > 0.0 {
            let spread = style.shadow_radius * scale;
            let shadow = Path::rounded_rectangle(
                Point::new(card.x - spread / 2.0, card.y + style.shadow_offset_y * scale),
                Size::new(card.width + spread, card.height + spread / 2.0),
                (radius + spread / 2.0).into(),
            );
            frame.fill(
                &shadow,
                Color {
                    a: opacity::SHADOW * visual.opacity,
                    ..palette::BLACK
                },
            );
        }

        let body = Path::rounded_rectangle(card.position(), card.size(), radius.into());
        frame.fill(
            &body,
            Color {
                a: self.colors.card.a * visual.opacity,
                ..self.colors.card
            },
        );

        let content = bulletin.content();
        if let Some(accent) = content.accent() {
            frame.fill_rectangle(
                card.position(),
                Size::new(sizing::ACCENT_WIDTH * scale, card.height),
                Color {
                    a: visual.opacity,
                    ..accent
                },
            );
        }

        let inset = spacing::MD * scale;
        let title_size = typography::TITLE_SM * scale;
        let title_y = card.y + spacing::SM * scale;
        frame.fill_text(Text {
            content: content.title().to_string(),
            position: Point::new(card.x + inset, title_y),
            color: Color {
                a: visual.opacity,
                ..self.colors.card_text
            },
            size: title_size.into(),
            ..Text::default()
        });

        if !content.body().is_empty() {
            frame.fill_text(Text {
                content: content.body().to_string(),
                position: Point::new(card.x + inset, title_y + title_size + spacing::XXS * scale),
                color: Color {
                    a: visual.opacity,
                    ..self.colors.card_text_secondary
                },
                size: (typography::BODY * scale).into(),
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.press.is_some_and(|press| press.panning) {
            return mouse::Interaction::Grabbing;
        }
        let Some(position) = cursor.position_in(bounds) else {
            return mouse::Interaction::default();
        };
        let viewport = Rectangle::with_size(bounds.size());
        match self.controller.hit_test(position, viewport, self.now) {
            Some(HitTarget::Bulletin) => mouse::Interaction::Pointer,
            _ => mouse::Interaction::default(),
        }
    }
}
