use clap::Parser;

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Sleeper league to serve.
    #[arg(
        short = 'l',
        long,
        value_name = "LEAGUE_ID",
        default_value = "1180723525824606208"
    )]
    pub league_id: String,

    #[arg(short = 'b', long, value_name = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind: String,

    #[arg(short = 'p', long, value_name = "PORT", default_value = "3000")]
    pub port: u16,

    /// Directory holding the league's JSON documents.
    #[arg(
        long,
        value_name = "DATA_DIR",
        default_value = "./data",
        value_parser = crate::args::validation::check_usable_dir
    )]
    pub data_dir: String,

    /// Directory served under /static.
    #[arg(long, value_name = "STATIC_DIR", default_value = "./static")]
    pub static_dir: String,

    /// League time zone as whole hours east of UTC. Eastern standard time
    /// is -5.
    #[arg(
        long,
        value_name = "TZ_OFFSET_HOURS",
        default_value = "-5",
        allow_negative_numbers = true,
        value_parser = crate::args::validation::check_offset_hours
    )]
    pub tz_offset_hours: i32,
}
