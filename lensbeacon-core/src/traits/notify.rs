//! User notification trait (LED, buzzer, ...)

/// Beacon notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notification {
    /// A beacon started advertising
    AdvertisingStarted,
    /// The beacon was stopped
    AdvertisingStopped,
}

/// Fire-and-forget notification sink
///
/// Implementations must not block; there is no acknowledgment.
pub trait Notifier {
    /// Signal a notification
    fn notify(&mut self, notification: Notification);
}
