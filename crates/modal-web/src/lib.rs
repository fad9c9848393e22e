#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod constants;
pub mod dom;
pub mod events;
pub mod modal;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("modal-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
        return Err(JsValue::from_str(&format!("{:?}", e)));
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    events::wire_modal(&document)?;
    Ok(())
}
