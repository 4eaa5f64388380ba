// SPDX-License-Identifier: MPL-2.0
//! Periodic ticks driving the lifecycle controller.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Roughly one frame at 60 Hz.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Ticks while anything is on screen, queued or delayed; nothing otherwise.
pub fn ticks(active: bool) -> Subscription<Message> {
    if active {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
