//! Radio driven through a request/answer transport
//!
//! The radio may live in another task. [`RadioLink`] turns each
//! [`BeaconRadio`] call into one tagged [`RadioRequest`] and waits for the
//! answer carrying the same tag. Answers to requests that already timed out
//! are discarded, so a late reply can never complete a newer call.

use crate::adv::AdvData;
use crate::config::BeaconConfig;
use crate::traits::{BeaconRadio, RadioError};

/// Work for the radio owner
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioRequest {
    SetData(AdvData),
    SetConfig(BeaconConfig),
    Start,
    Stop,
}

/// Result of one request as reported by the radio owner
pub type RadioAnswer = Result<(), RadioError>;

/// A message together with the sequence number of its request
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tagged<T> {
    pub seq: u8,
    pub body: T,
}

impl<T> Tagged<T> {
    pub fn new(seq: u8, body: T) -> Self {
        Self { seq, body }
    }

    /// Answer with the same sequence number
    pub fn reply<U>(&self, body: U) -> Tagged<U> {
        Tagged::new(self.seq, body)
    }
}

/// Carries requests to the radio owner and answers back
///
/// Both directions are bounded in time by the implementation.
#[allow(async_fn_in_trait)]
pub trait RadioTransport {
    /// Hand a request over
    ///
    /// `Err(RadioError::Unavailable)` if the radio owner does not accept it
    /// in time.
    async fn send(&mut self, request: Tagged<RadioRequest>) -> Result<(), RadioError>;

    /// Next answer, or `None` once the answer deadline for the last sent
    /// request has passed
    async fn receive(&mut self) -> Option<Tagged<RadioAnswer>>;
}

/// [`BeaconRadio`] on top of a [`RadioTransport`]
pub struct RadioLink<T> {
    transport: T,
    seq: u8,
    stale: u32,
}

impl<T: RadioTransport> RadioLink<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            seq: 0,
            stale: 0,
        }
    }

    /// Answers dropped because their request had already timed out
    pub fn stale_answers(&self) -> u32 {
        self.stale
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    async fn call(&mut self, request: RadioRequest) -> RadioAnswer {
        self.seq = self.seq.wrapping_add(1);
        let seq = self.seq;
        self.transport.send(Tagged::new(seq, request)).await?;

        loop {
            match self.transport.receive().await {
                Some(answer) if answer.seq == seq => return answer.body,
                Some(_) => self.stale = self.stale.saturating_add(1),
                None => return Err(RadioError::Unavailable),
            }
        }
    }
}

impl<T: RadioTransport> BeaconRadio for RadioLink<T> {
    async fn set_advertisement_data(&mut self, data: &[u8]) -> Result<(), RadioError> {
        let data = AdvData::from_slice(data).map_err(|_| RadioError::DataTooLong)?;
        self.call(RadioRequest::SetData(data)).await
    }

    async fn set_config(&mut self, config: &BeaconConfig) -> Result<(), RadioError> {
        self.call(RadioRequest::SetConfig(*config)).await
    }

    async fn start_advertising(&mut self) -> Result<(), RadioError> {
        self.call(RadioRequest::Start).await
    }

    async fn stop_advertising(&mut self) {
        // Stop has no failure path; an unanswered stop shows up as a timeout
        // in the transport
        let _ = self.call(RadioRequest::Stop).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adv::build_payload;
    use crate::beacon::BeaconController;
    use crate::profile::DeviceIndex;
    use crate::testing::MockNotifier;
    use embassy_futures::block_on;
    use heapless::{Deque, Vec};

    /// Radio owner simulated in-line
    ///
    /// While `stalled`, requests queue up unanswered (the owner is busy).
    /// Once released, the backlog is answered in order before the new
    /// request, as the real task would. `down` models an owner that no
    /// longer takes requests.
    #[derive(Default)]
    struct FakeOwner {
        sent: Vec<Tagged<RadioRequest>, 32>,
        backlog: Deque<Tagged<RadioRequest>, 8>,
        answers: Deque<Tagged<RadioAnswer>, 8>,
        stalled: bool,
        down: bool,
        fail_start: bool,
        advertising: bool,
    }

    impl FakeOwner {
        fn answer(&mut self, request: &Tagged<RadioRequest>) {
            let body = match request.body {
                RadioRequest::Start if self.fail_start => Err(RadioError::Rejected),
                RadioRequest::Start if self.advertising => Err(RadioError::Busy),
                RadioRequest::Start => {
                    self.advertising = true;
                    Ok(())
                }
                RadioRequest::Stop => {
                    self.advertising = false;
                    Ok(())
                }
                _ => Ok(()),
            };
            self.answers.push_back(request.reply(body)).unwrap();
        }
    }

    impl RadioTransport for FakeOwner {
        async fn send(&mut self, request: Tagged<RadioRequest>) -> Result<(), RadioError> {
            if self.down {
                return Err(RadioError::Unavailable);
            }
            self.sent.push(request.clone()).unwrap();
            self.backlog.push_back(request).unwrap();
            if !self.stalled {
                while let Some(pending) = self.backlog.pop_front() {
                    self.answer(&pending);
                }
            }
            Ok(())
        }

        async fn receive(&mut self) -> Option<Tagged<RadioAnswer>> {
            self.answers.pop_front()
        }
    }

    #[test]
    fn test_tags_increase_per_call() {
        let mut link = RadioLink::new(FakeOwner::default());
        block_on(link.start_advertising()).unwrap();
        block_on(link.stop_advertising());

        let seqs: Vec<u8, 4> = link.transport().sent.iter().map(|r| r.seq).collect();
        assert_eq!(seqs.as_slice(), &[1, 2]);
        assert_eq!(link.stale_answers(), 0);
    }

    #[test]
    fn test_unanswered_request_times_out() {
        let mut link = RadioLink::new(FakeOwner {
            stalled: true,
            ..Default::default()
        });
        assert_eq!(block_on(link.start_advertising()), Err(RadioError::Unavailable));
    }

    #[test]
    fn test_late_answer_does_not_complete_next_call() {
        let mut link = RadioLink::new(FakeOwner {
            stalled: true,
            ..Default::default()
        });
        assert_eq!(block_on(link.start_advertising()), Err(RadioError::Unavailable));

        // Owner catches up: the timed-out start succeeds late, then the
        // next start is refused because a beacon is already on air
        link.transport_mut().stalled = false;
        assert_eq!(block_on(link.start_advertising()), Err(RadioError::Busy));
        assert_eq!(link.stale_answers(), 1);
    }

    #[test]
    fn test_restart_after_timeout_reports_real_start_result() {
        let mut controller = BeaconController::new(
            RadioLink::new(FakeOwner {
                stalled: true,
                ..Default::default()
            }),
            MockNotifier::new(),
            BeaconConfig::default(),
        );

        // Every request of the first attempt goes unanswered
        let first = block_on(controller.start(DeviceIndex::MetaInc));
        assert!(first.is_err());
        assert!(!controller.is_advertising());

        // The owner wakes up but now refuses to start
        {
            let owner = controller.radio_mut().transport_mut();
            owner.stalled = false;
            owner.fail_start = true;
        }
        let second = block_on(controller.start(DeviceIndex::MetaInc));
        assert_eq!(
            second,
            Err(crate::BeaconError::StartFailed(RadioError::Rejected))
        );
        assert!(!controller.is_advertising());
        assert!(controller.radio().stale_answers() > 0);
    }

    #[test]
    fn test_owner_down_fails_fast() {
        let mut controller = BeaconController::new(
            RadioLink::new(FakeOwner {
                down: true,
                ..Default::default()
            }),
            MockNotifier::new(),
            BeaconConfig::default(),
        );

        let result = block_on(controller.start(DeviceIndex::Luxottica));
        assert_eq!(
            result,
            Err(crate::BeaconError::DataRejected(RadioError::Unavailable))
        );
        block_on(controller.stop());
        assert!(!controller.is_advertising());
        assert!(controller.radio().transport().sent.is_empty());
    }

    #[test]
    fn test_data_is_forwarded_unchanged() {
        let mut link = RadioLink::new(FakeOwner::default());
        let payload = build_payload(DeviceIndex::MetaTech.profile());
        block_on(link.set_advertisement_data(&payload)).unwrap();

        match &link.transport().sent[0].body {
            RadioRequest::SetData(data) => assert_eq!(data.as_slice(), &payload[..]),
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_oversized_data_never_sent() {
        let mut link = RadioLink::new(FakeOwner::default());
        let data = [0u8; 40];
        assert_eq!(
            block_on(link.set_advertisement_data(&data)),
            Err(RadioError::DataTooLong)
        );
        assert!(link.transport().sent.is_empty());
    }
}
