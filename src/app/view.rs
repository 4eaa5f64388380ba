// SPDX-License-Identifier: MPL-2.0
//! Demo layout: status bar strip, preset buttons, event log and the bulletin
//! overlay stacked above everything.

use super::preset::{DemoContent, Preset};
use super::Message;
use crate::bulletin::WindowLevel;
use crate::lifecycle::{LifecycleController, ModalKind};
use crate::port::LayeredSurface;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::overlay::BulletinOverlay;
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{button, column, container, row, scrollable, stack, text, Column};
use iced::{Element, Length};
use std::collections::VecDeque;
use std::time::Instant;

pub struct ViewContext<'a> {
    pub controller: &'a LifecycleController<DemoContent>,
    pub surface: &'a LayeredSurface,
    pub colors: &'a ColorScheme,
    pub log: &'a VecDeque<String>,
    pub theme_mode: ThemeMode,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = column![
        status_bar(&ctx),
        row![controls(&ctx), event_log(&ctx)]
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .height(Length::Fill),
    ];

    let overlay = BulletinOverlay::new(ctx.controller, ctx.colors, ctx.now)
        .into_element()
        .map(Message::Overlay);

    stack![content, overlay].into()
}

/// Strip standing in for the system status bar. Bulletins at or above the
/// status bar level cover it.
fn status_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = if ctx.surface.covers(WindowLevel::StatusBar) {
        "status bar covered by bulletin".to_string()
    } else {
        format!("{:?} | {}", ctx.controller.state(), ctx.controller.queue())
    };

    container(text(label).size(typography::CAPTION))
        .width(Length::Fill)
        .height(sizing::STATUS_BAR_HEIGHT)
        .padding([2.0, spacing::XS])
        .style(styles::container::status_bar(
            ctx.colors.status_bar,
            ctx.colors.text_primary,
        ))
        .into()
}

fn controls<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let presets = Preset::ALL.into_iter().map(|preset| {
        row![
            action(preset.label(), Message::Show(preset)),
            action("delayed", Message::ShowDelayed(preset)),
        ]
        .spacing(spacing::XS)
        .into()
    });

    let queue_controls = row![
        action("Burst", Message::Burst),
        action("Dismiss", Message::DismissCurrent),
        action("Dismiss & hold", Message::DismissAndHold),
        action("Resume", Message::Resume),
    ]
    .spacing(spacing::XS);

    let theme_label = if ctx.theme_mode.is_dark() {
        "Light theme"
    } else {
        "Dark theme"
    };
    let misc = row![
        action("Alert modal", Message::RequestModal(ModalKind::Alert)),
        action(theme_label, Message::ToggleTheme),
    ]
    .spacing(spacing::XS);

    let queued = text(format!(
        "{} waiting, {} delayed",
        ctx.controller.queued_len(),
        ctx.controller.delayed_len()
    ))
    .size(typography::CAPTION);

    column![
        text("Bulletins").size(typography::TITLE_SM),
        Column::with_children(presets).spacing(spacing::XS),
        queue_controls,
        misc,
        queued,
    ]
    .spacing(spacing::SM)
    .padding([spacing::LG, 0.0])
    .width(Length::Fill)
    .into()
}

fn event_log<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let lines = ctx
        .log
        .iter()
        .map(|line| text(line.as_str()).size(typography::CAPTION).into());

    container(
        column![
            row![
                text("Events").size(typography::BODY).width(Length::Fill),
                action("Clear", Message::ClearLog),
            ]
            .spacing(spacing::XS),
            scrollable(Column::with_children(lines).spacing(spacing::XXS)).height(Length::Fill),
        ]
        .spacing(spacing::XS),
    )
    .padding(spacing::SM)
    .width(sizing::EVENT_LOG_WIDTH)
    .height(Length::Fill)
    .style(styles::container::panel)
    .into()
}

fn action(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label).size(typography::BODY))
        .height(sizing::BUTTON_HEIGHT)
        .on_press(message)
        .into()
}
