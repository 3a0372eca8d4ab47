// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between spinner animation ticks.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Ticks only while a spinner is on screen.
pub fn create_tick_subscription(spinner_active: bool) -> Subscription<Message> {
    if spinner_active {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
