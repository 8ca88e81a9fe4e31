use web_sys::window;

/// Блокирующее уведомление оператора (alert)
pub fn notify(message: &str) {
    log::info!("Notification: {}", message);
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}
