//! Panel render task
//!
//! Owns the panel. Brings it up, draws the unit labels, then applies host
//! messages in arrival order. Field renders are short blocking SPI bursts,
//! so the bus is never held across an await point.

use defmt::*;
use embassy_rp::peripherals::SPI0;
use embassy_time::Delay;

use pagina_drivers::DogDisplay;
use pagina_hal_rp2040::{RpOutput, RpSpi};
use pagina_protocol::HostMessage;

use crate::channels::HOST_MESSAGES;
use crate::layout::LAYOUT;

/// Panel driver on this board
pub type Panel = DogDisplay<RpSpi<'static, SPI0>, RpOutput<'static>, RpOutput<'static>>;

/// Display task - renders host updates into the panel
#[embassy_executor::task]
pub async fn display_task(mut panel: Panel, mut reset: RpOutput<'static>) {
    info!("Display task started");

    if let Err(e) = panel.init(&mut reset, &mut Delay) {
        error!("Panel init failed: {:?}", e);
    }
    draw_labels(&mut panel);

    loop {
        match HOST_MESSAGES.receive().await {
            HostMessage::SetField { field, value } => {
                let Some(target) = LAYOUT.get(usize::from(field)) else {
                    warn!("No field {} in layout", field);
                    continue;
                };
                trace!("Field {} = {}", field, value.as_str());
                if let Err(e) = target.render(&mut panel, &value) {
                    warn!("Field {} render failed: {:?}", field, e);
                }
            }
            HostMessage::Clear => {
                debug!("Clearing panel");
                if let Err(e) = panel.clear() {
                    warn!("Panel clear failed: {:?}", e);
                }
                draw_labels(&mut panel);
            }
        }
    }
}

/// Draw every field's static parts
fn draw_labels(panel: &mut Panel) {
    for (index, field) in LAYOUT.iter().enumerate() {
        if let Err(e) = field.render_label(panel) {
            warn!("Label {} render failed: {:?}", index, e);
        }
    }
}
