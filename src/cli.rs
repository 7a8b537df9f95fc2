use crate::config::LaunchArg;
pub use clap::Parser;

/// timeline_dnr - drag, resize and auto-scroll playground for timeline regions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path of layout file to open
    file: Option<String>,
    /// Global Config Directory (default: platform config dir/timeline_dnr)
    #[arg(short, long)]
    config_dir: Option<String>,
    /// log infomation level (1:trace 2:info 3:warn 4:error 5:none)
    #[arg(short, long, default_value_t = 3)]
    log_level: u8,
}

impl From<Args> for LaunchArg {
    fn from(val: Args) -> Self {
        let arg = LaunchArg::default();
        LaunchArg {
            file: val.file.or(arg.file),
            config_dir: val.config_dir.or(arg.config_dir),
            log_level: val.log_level,
        }
    }
}
