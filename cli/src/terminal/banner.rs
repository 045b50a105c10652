use colored::*;

const BANNER: &str = r#"
   ___ _ __ __ _ ___| |__  _ __  _ __ ___ | |__   ___
  / __| '__/ _` / __| '_ \| '_ \| '__/ _ \| '_ \ / _ \
 | (__| | | (_| \__ \ | | | |_) | | | (_) | |_) |  __/
  \___|_|  \__,_|___/_| |_| .__/|_|  \___/|_.__/ \___|
                          |_|
"#;

pub fn print() {
    super::print::print(&format!("{}", BANNER.bright_green()));
}
