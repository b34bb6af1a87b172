use std::fs;
use std::process;

use crate::settings::{default_toml, parse_settings_toml, Settings};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(2);
        })
    };
}

pub fn settings_export() {
    print!("{}", default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(parse_settings_toml(&content), "Error: {}");
    println!("{}", describe(&s));
}

/// One-line summary printed by `settings-validate`.
pub fn describe(s: &Settings) -> String {
    format!(
        "OK: output.format={}, output.show_accepted={}, input.skip_blank_lines={}",
        s.output.format.as_str(),
        s.output.show_accepted,
        s.input.skip_blank_lines
    )
}
