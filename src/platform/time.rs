//! Human-readable timestamps

/// Current local time as a short label, e.g. `25. 10. 16. 14:03`
#[cfg(target_arch = "wasm32")]
pub fn timestamp_label() -> String {
    let options = js_sys::Object::new();
    for (key, value) in [
        ("year", "2-digit"),
        ("month", "2-digit"),
        ("day", "2-digit"),
        ("hour", "2-digit"),
        ("minute", "2-digit"),
    ] {
        let _ = js_sys::Reflect::set(&options, &key.into(), &value.into());
    }
    let date = js_sys::Date::new_0();
    String::from(date.to_locale_string("ko-KR", &options))
}

/// Current local time as a short label, e.g. `25. 10. 16. 14:03`
#[cfg(not(target_arch = "wasm32"))]
pub fn timestamp_label() -> String {
    chrono::Local::now().format("%y. %m. %d. %H:%M").to_string()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_label_shape() {
        let label = timestamp_label();
        // "yy. mm. dd. HH:MM"
        assert_eq!(label.len(), 17);
        assert_eq!(label.matches(". ").count(), 3);
        assert_eq!(&label[14..15], ":");
    }
}
