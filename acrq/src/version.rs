/// Get the version string for acrq and libacrq
pub fn get_version_string() -> String {
    format!(
        "acrq {}\nlibacrq {}",
        env!("CARGO_PKG_VERSION"),
        libacrq::version()
    )
}

/// Print version information to stdout
pub fn print_version() {
    println!("{}", get_version_string());
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
