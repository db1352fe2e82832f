fn main() {
    // Only meaningful when cross-compiling against the ESP-IDF SDK.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        espidf_sysenv();
    }
}

#[cfg(feature = "espidf")]
fn espidf_sysenv() {
    embuild::espidf::sysenv::output();
}

#[cfg(not(feature = "espidf"))]
fn espidf_sysenv() {}
