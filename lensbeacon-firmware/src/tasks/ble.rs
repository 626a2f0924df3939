//! BLE beacon task
//!
//! Owns the trouble-host stack on top of the CYW43439 HCI transport and
//! serves [`RadioRequest`]s one at a time. Advertising is legacy,
//! non-connectable and non-scannable. Dropping the advertiser handle stops
//! the beacon. Every answer echoes the sequence number of its request.
//!
//! If the host runner ever stops, the task keeps draining requests and
//! answers them with `RadioError::Unavailable`.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::Duration;

use bt_hci::param::AdvChannelMap;
use trouble_host::advertise::{Advertisement, AdvertisementParameters, TxPower as HostTxPower};
use trouble_host::peripheral::Advertiser;
use trouble_host::prelude::*;

use lensbeacon_core::adv::{AdvData, EmulatedAddress};
use lensbeacon_core::config::{BeaconConfig, ChannelMap, TxPower};
use lensbeacon_core::link::RadioRequest;
use lensbeacon_core::traits::RadioError;

use crate::channels::{RADIO_REQUEST, RADIO_RESPONSE};

/// HCI controller provided by the CYW43439 Bluetooth core
pub type BleController = ExternalController<cyw43::bluetooth::BtDriver<'static>, 10>;

/// BLE task - owns the host stack and the advertiser
#[embassy_executor::task]
pub async fn ble_task(controller: BleController, address: EmulatedAddress) {
    info!("BLE task started");

    let host_address = Address::random(address.to_le_bytes());
    info!("BLE address = {}", address.bytes());

    let mut resources: HostResources<DefaultPacketPool, 0, 0> = HostResources::new();
    let stack = trouble_host::new(controller, &mut resources).set_random_address(host_address);
    let Host {
        mut peripheral,
        mut runner,
        ..
    } = stack.build();

    match select(runner.run(), serve(&mut peripheral, address)).await {
        Either::First(Err(e)) => error!("BLE host stopped: {:?}", Debug2Format(&e)),
        Either::First(Ok(())) => warn!("BLE host runner returned"),
        Either::Second(never) => match never {},
    }

    refuse_requests().await
}

/// Answer every request as unavailable once the host is gone
async fn refuse_requests() -> ! {
    error!("BLE host is down, refusing radio requests");
    loop {
        let request = RADIO_REQUEST.receive().await;
        RADIO_RESPONSE.send(request.reply(Err(RadioError::Unavailable))).await;
    }
}

/// Beacon state kept between requests
struct Beacon<'d> {
    address: EmulatedAddress,
    data: AdvData,
    params: AdvertisementParameters,
    advertiser: Option<Advertiser<'d, BleController, DefaultPacketPool>>,
}

async fn serve<'d>(
    peripheral: &mut Peripheral<'d, BleController, DefaultPacketPool>,
    address: EmulatedAddress,
) -> core::convert::Infallible {
    let mut beacon = Beacon {
        address,
        data: AdvData::new(),
        params: advertisement_parameters(&BeaconConfig::default()),
        advertiser: None,
    };

    loop {
        let request = RADIO_REQUEST.receive().await;
        trace!("Radio request #{}: {:?}", request.seq, request.body);
        let result = beacon.handle(peripheral, request.body.clone()).await;
        if let Err(e) = result {
            debug!("Radio request #{} failed: {:?}", request.seq, e);
        }
        RADIO_RESPONSE.send(request.reply(result)).await;
    }
}

impl<'d> Beacon<'d> {
    async fn handle(
        &mut self,
        peripheral: &mut Peripheral<'d, BleController, DefaultPacketPool>,
        request: RadioRequest,
    ) -> Result<(), RadioError> {
        match request {
            RadioRequest::SetData(data) => {
                if self.advertiser.is_some() {
                    return Err(RadioError::Busy);
                }
                self.data = data;
                Ok(())
            }
            RadioRequest::SetConfig(config) => {
                if self.advertiser.is_some() {
                    return Err(RadioError::Busy);
                }
                // The host address is fixed when the stack is built
                if config.address != self.address {
                    warn!("Address change needs a restart, keeping {}", self.address.bytes());
                    return Err(RadioError::Unsupported);
                }
                self.params = advertisement_parameters(&config);
                Ok(())
            }
            RadioRequest::Start => {
                if self.advertiser.is_some() {
                    return Err(RadioError::Busy);
                }
                if self.data.is_empty() {
                    return Err(RadioError::Rejected);
                }
                let advertiser = peripheral
                    .advertise(
                        &self.params,
                        Advertisement::NonconnectableNonscannableUndirected {
                            adv_data: &self.data,
                        },
                    )
                    .await
                    .map_err(|e| {
                        warn!("Advertise failed: {:?}", Debug2Format(&e));
                        RadioError::Rejected
                    })?;
                self.advertiser = Some(advertiser);
                Ok(())
            }
            RadioRequest::Stop => {
                if self.advertiser.take().is_some() {
                    debug!("Advertiser dropped");
                }
                Ok(())
            }
        }
    }
}

/// Translate a beacon configuration into host advertising parameters
fn advertisement_parameters(config: &BeaconConfig) -> AdvertisementParameters {
    let mut params = AdvertisementParameters::default();
    params.interval_min = Duration::from_millis(config.interval_min_ms as u64);
    params.interval_max = Duration::from_millis(config.interval_max_ms as u64);
    params.tx_power = tx_power(config.tx_power);
    params.channel_map = Some(channel_map(config.channels));
    params
}

fn tx_power(power: TxPower) -> HostTxPower {
    match power {
        TxPower::Minus20dBm => HostTxPower::Minus20dBm,
        TxPower::Minus12dBm => HostTxPower::Minus12dBm,
        TxPower::Minus8dBm => HostTxPower::Minus8dBm,
        TxPower::Minus4dBm => HostTxPower::Minus4dBm,
        TxPower::ZerodBm => HostTxPower::ZerodBm,
        TxPower::Plus2dBm => HostTxPower::Plus2dBm,
        TxPower::Plus4dBm => HostTxPower::Plus4dBm,
        TxPower::Plus6dBm => HostTxPower::Plus6dBm,
        TxPower::Plus8dBm => HostTxPower::Plus8dBm,
    }
}

fn channel_map(channels: ChannelMap) -> AdvChannelMap {
    if channels.is_all() {
        return AdvChannelMap::ALL;
    }
    AdvChannelMap::default()
        .enable_channel_37(channels.ch37)
        .enable_channel_38(channels.ch38)
        .enable_channel_39(channels.ch39)
}
