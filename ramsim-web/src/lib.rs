mod utils;

use ramsim_core::notification::Collect;
use ramsim_core::{RamSimulator, SimulatorConfig};

use wasm_bindgen::prelude::*;

/// The memory widget as seen from JavaScript.
///
/// The host forwards field edits and button presses, then redraws from
/// [`RamWidget::view_json`] and shows whatever
/// [`RamWidget::take_notifications_json`] returns as toasts.
#[wasm_bindgen]
pub struct RamWidget {
    simulator: RamSimulator,
    notifications: Collect,
}

#[wasm_bindgen]
impl RamWidget {
    /// `config_json` may set `size` and `seed`, e.g. `{"size": 16}`.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<RamWidget, JsValue> {
        utils::set_panic_hook();

        let config = parse_config(config_json.as_deref()).map_err(|err| JsValue::from_str(&err))?;
        let notifications = Collect::new();
        let simulator = RamSimulator::new(config, notifications.clone())
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

        Ok(RamWidget {
            simulator,
            notifications,
        })
    }

    pub fn set_value_input(&mut self, text: &str) {
        self.simulator.set_value_input(text);
    }

    pub fn set_address_input(&mut self, text: &str) {
        self.simulator.set_address_input(text);
    }

    /// "Assign" button. Returns the address written, if any.
    pub fn assign(&mut self) -> Option<u32> {
        self.simulator
            .assign()
            .and_then(|address| u32::try_from(address).ok())
    }

    /// Reads the address field. The outcome arrives as a notification.
    pub fn read(&mut self) {
        if let Err(err) = self.simulator.lookup() {
            log::debug!("RamWidget: {err}");
        }
    }

    /// "Free memory" button.
    pub fn free_memory(&mut self) {
        self.simulator.reset();
    }

    pub fn is_full(&self) -> bool {
        self.simulator.is_full()
    }

    pub fn pending_target(&self) -> Option<u32> {
        self.simulator
            .pending_target()
            .and_then(|address| u32::try_from(address).ok())
    }

    pub fn view_json(&self) -> String {
        render_json(&self.simulator.view())
    }

    /// Notifications raised since the last call, oldest first.
    pub fn take_notifications_json(&self) -> String {
        render_json(&self.notifications.take())
    }
}

fn parse_config(config_json: Option<&str>) -> Result<SimulatorConfig, String> {
    match config_json {
        None => Ok(SimulatorConfig::default()),
        Some(json) if json.trim().is_empty() => Ok(SimulatorConfig::default()),
        Some(json) => {
            serde_json::from_str(json).map_err(|err| format!("could not read config: {err}"))
        }
    }
}

fn render_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        log::error!("RamWidget: could not serialize view: {err}");
        "null".into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ramsim_core::notification::{Level, Notification};
    use ramsim_core::view::TableView;

    #[test]
    fn config_defaults() {
        assert_eq!(Ok(SimulatorConfig::default()), parse_config(None));
        assert_eq!(Ok(SimulatorConfig::default()), parse_config(Some("  ")));
        assert_eq!(Ok(SimulatorConfig::default()), parse_config(Some("{}")));
    }

    #[test]
    fn config_fields() {
        assert_eq!(
            Ok(SimulatorConfig {
                size: 16,
                seed: Some(3)
            }),
            parse_config(Some(r#"{"size": 16, "seed": 3}"#))
        );
        assert!(parse_config(Some("{size}")).is_err());
        assert!(parse_config(Some(r#"{"size": -1}"#)).is_err());
    }

    #[test]
    fn view_serialization() {
        let mut table = ramsim_core::MemoryTable::new(2);
        table.write(1, 10);
        let json = render_json(&TableView::new(&table, "7"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!("0x0001", value["rows"][1]["address"]);
        assert_eq!("0xa", value["rows"][1]["value"]);
        assert_eq!(true, value["rows"][1]["occupied"]);
        assert_eq!(false, value["full"]);
        assert_eq!(serde_json::Value::Null, value["banner"]);
        assert_eq!("7", value["value_input"]);
    }

    #[test]
    fn notification_serialization() {
        let json = render_json(&vec![Notification::memory_full()]);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(Level::Warning.as_str(), value[0]["level"]);
        assert_eq!(Notification::MEMORY_FULL, value[0]["message"]);
    }
}
